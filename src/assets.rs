//! Built-in model assets
//!
//! The demo ships no asset files; character models are assembled from
//! primitives at load time. The [`ModelSource`] seam stays, so a file
//! loader can replace this without touching the scene code.

use outback_core::{AssetError, Material, Mesh, Model, ModelPart, ModelSource, Transform};
use outback_math::Vec3;

/// Kangaroo hide color
const ROO_HIDE: [f32; 3] = [0.55, 0.33, 0.18];
/// Lighter belly color
const ROO_BELLY: [f32; 3] = [0.72, 0.52, 0.35];

/// Model source for the models built into the binary
pub struct BuiltinModels;

impl ModelSource for BuiltinModels {
    fn load_model(&self, id: &str) -> Result<Model, AssetError> {
        match id {
            "kangaroo" => Ok(kangaroo()),
            other => Err(AssetError::NotFound(other.to_string())),
        }
    }
}

/// Assemble the kangaroo from primitives
///
/// Proportions are eyeballed against the real animal: a leaning torso,
/// a small head on a thick neck, big haunches, and a long tail trailing
/// behind. The model origin sits at the feet so ground level is y = 0.
fn kangaroo() -> Model {
    let hide = Material::matte(ROO_HIDE[0], ROO_HIDE[1], ROO_HIDE[2]).with_roughness(0.9);
    let belly = Material::matte(ROO_BELLY[0], ROO_BELLY[1], ROO_BELLY[2]).with_roughness(0.9);

    let parts = vec![
        // Torso, leaning forward
        ModelPart {
            mesh: Mesh::Sphere { radius: 0.5 },
            transform: Transform::from_position(Vec3::new(0.0, 1.0, 0.0))
                .with_scale(Vec3::new(0.9, 1.3, 0.7))
                .with_rotation(Vec3::new(0.0, 0.0, -0.3)),
            material: hide,
        },
        // Belly patch
        ModelPart {
            mesh: Mesh::Sphere { radius: 0.35 },
            transform: Transform::from_position(Vec3::new(0.12, 0.85, 0.0))
                .with_scale(Vec3::new(0.8, 1.1, 0.7)),
            material: belly,
        },
        // Head
        ModelPart {
            mesh: Mesh::Sphere { radius: 0.22 },
            transform: Transform::from_position(Vec3::new(0.35, 1.85, 0.0))
                .with_scale(Vec3::new(1.3, 1.0, 0.9)),
            material: hide,
        },
        // Ears
        ModelPart {
            mesh: Mesh::Box { width: 0.08, height: 0.3, depth: 0.04 },
            transform: Transform::from_position(Vec3::new(0.25, 2.1, 0.08))
                .with_rotation(Vec3::new(0.0, 0.0, 0.25)),
            material: hide,
        },
        ModelPart {
            mesh: Mesh::Box { width: 0.08, height: 0.3, depth: 0.04 },
            transform: Transform::from_position(Vec3::new(0.25, 2.1, -0.08))
                .with_rotation(Vec3::new(0.0, 0.0, 0.25)),
            material: hide,
        },
        // Haunches
        ModelPart {
            mesh: Mesh::Sphere { radius: 0.35 },
            transform: Transform::from_position(Vec3::new(-0.2, 0.5, 0.22)),
            material: hide,
        },
        ModelPart {
            mesh: Mesh::Sphere { radius: 0.35 },
            transform: Transform::from_position(Vec3::new(-0.2, 0.5, -0.22)),
            material: hide,
        },
        // Feet
        ModelPart {
            mesh: Mesh::Box { width: 0.55, height: 0.12, depth: 0.18 },
            transform: Transform::from_position(Vec3::new(0.05, 0.06, 0.22)),
            material: hide,
        },
        ModelPart {
            mesh: Mesh::Box { width: 0.55, height: 0.12, depth: 0.18 },
            transform: Transform::from_position(Vec3::new(0.05, 0.06, -0.22)),
            material: hide,
        },
        // Tail, trailing behind and resting near the ground
        ModelPart {
            mesh: Mesh::Sphere { radius: 0.18 },
            transform: Transform::from_position(Vec3::new(-0.75, 0.35, 0.0))
                .with_scale(Vec3::new(3.2, 0.9, 0.9))
                .with_rotation(Vec3::new(0.0, 0.0, 0.35)),
            material: hide,
        },
    ];

    Model::new("kangaroo", parts)
}
