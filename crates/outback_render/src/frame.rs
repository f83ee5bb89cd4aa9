//! Frame composition - bridges World/Entity to renderer draw lists
//!
//! This module flattens the scene into the per-frame description the
//! external renderer consumes: one draw call per visible primitive, with
//! opaque geometry ordered before transparent geometry.

use outback_core::{Entity, Material, Mesh, Transform, World};

use crate::environment::Environment;

/// One draw call: a primitive mesh with a world transform and material
#[derive(Clone, Debug)]
pub struct DrawCall {
    /// The primitive to draw (never `Model` or `Empty`; those are
    /// expanded or skipped during composition)
    pub mesh: Mesh,
    /// World-space transform
    pub transform: Transform,
    /// Surface material
    pub material: Material,
}

/// A complete description of one rendered frame
///
/// Self-contained: the renderer needs nothing but this struct to draw.
#[derive(Clone, Debug)]
pub struct RenderFrame {
    /// Fixed environment (camera, lighting, fog)
    pub environment: Environment,
    /// Draw calls, opaque first, then transparent
    pub draws: Vec<DrawCall>,
}

impl RenderFrame {
    /// Number of draw calls in the frame
    #[inline]
    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    /// Number of transparent draw calls (always at the tail)
    pub fn transparent_count(&self) -> usize {
        self.draws.iter().filter(|d| d.material.transparent).count()
    }
}

/// Compose a frame from the current world state
///
/// Walks every entity, expands model meshes into their parts, skips
/// `Empty` meshes, and partitions the result so all opaque draws precede
/// all transparent ones. Emission order within each class follows entity
/// insertion order, keeping the output stable frame to frame.
pub fn compose(world: &World, environment: &Environment) -> RenderFrame {
    let mut opaque = Vec::with_capacity(world.entity_count());
    let mut transparent = Vec::new();

    for entity in world.iter() {
        collect_entity(entity, &mut opaque, &mut transparent);
    }

    log::trace!(
        "Composed frame: {} opaque, {} transparent draws",
        opaque.len(),
        transparent.len()
    );

    opaque.extend(transparent);
    RenderFrame {
        environment: *environment,
        draws: opaque,
    }
}

fn collect_entity(entity: &Entity, opaque: &mut Vec<DrawCall>, transparent: &mut Vec<DrawCall>) {
    match &entity.mesh {
        Mesh::Empty => {}
        Mesh::Model(model) => {
            for part in model.parts() {
                if matches!(part.mesh, Mesh::Empty) {
                    continue;
                }
                let call = DrawCall {
                    mesh: part.mesh.clone(),
                    transform: entity.transform.compose(&part.transform),
                    material: part.material,
                };
                push_draw(call, opaque, transparent);
            }
        }
        mesh => {
            let call = DrawCall {
                mesh: mesh.clone(),
                transform: entity.transform,
                material: entity.material,
            };
            push_draw(call, opaque, transparent);
        }
    }
}

fn push_draw(call: DrawCall, opaque: &mut Vec<DrawCall>, transparent: &mut Vec<DrawCall>) {
    if call.material.transparent {
        transparent.push(call);
    } else {
        opaque.push(call);
    }
}
