//! Entity and Material types
//!
//! An Entity is one renderable element of the scene with a transform, a
//! mesh reference, a material, and an optional link to animated motion
//! state.

use std::collections::HashSet;

use outback_math::Vec3;
use outback_physics::ScrollerKey;
use serde::{Serialize, Deserialize};

use crate::mesh::Mesh;
use crate::transform::Transform;

/// Surface properties in the form the external renderer consumes
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Material {
    /// Base color as RGB (each component 0.0-1.0)
    pub base_color: [f32; 3],
    /// Surface roughness (0.0 = mirror, 1.0 = fully diffuse)
    pub roughness: f32,
    /// Metalness (0.0 = dielectric, 1.0 = metal)
    pub metalness: f32,
    /// Opacity (only meaningful when `transparent` is set)
    pub opacity: f32,
    /// Whether the material needs transparency blending
    pub transparent: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0],
            roughness: 1.0,
            metalness: 0.0,
            opacity: 1.0,
            transparent: false,
        }
    }
}

impl Material {
    /// Create an opaque matte material with the given RGB color
    pub fn matte(r: f32, g: f32, b: f32) -> Self {
        Self {
            base_color: [r, g, b],
            ..Self::default()
        }
    }

    /// Create a transparent material with the given RGB color and opacity
    pub fn translucent(r: f32, g: f32, b: f32, opacity: f32) -> Self {
        Self {
            base_color: [r, g, b],
            opacity,
            transparent: true,
            ..Self::default()
        }
    }

    /// Set the roughness
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Set the metalness
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }
}

/// An entity in the scene
///
/// Each entity has:
/// - An optional name (for lookup by name)
/// - Tags (for categorization and filtering)
/// - An anchor: the rest position the entity was laid out at
/// - A transform, re-derived from the anchor and motion state every tick
/// - A mesh reference and a material
/// - An optional scroller key (links to the MotionWorld)
pub struct Entity {
    /// Optional name for this entity (for lookup)
    pub name: Option<String>,
    /// Tags for categorization (e.g., "hills", "clouds", "static")
    pub tags: HashSet<String>,
    /// Rest position the entity was laid out at; never mutated by ticking
    pub anchor: Vec3,
    /// The entity's current transform in world space
    pub transform: Transform,
    /// The entity's mesh reference
    pub mesh: Mesh,
    /// The entity's material
    pub material: Material,
    /// Optional scroller link (the entity rides that group's offset)
    pub scroller: Option<ScrollerKey>,
}

impl Entity {
    /// Create a new entity with the given mesh at the origin
    pub fn new(mesh: Mesh) -> Self {
        Self {
            name: None,
            tags: HashSet::new(),
            anchor: Vec3::ZERO,
            transform: Transform::identity(),
            mesh,
            material: Material::default(),
            scroller: None,
        }
    }

    /// Create a new entity with mesh and material
    pub fn with_material(mesh: Mesh, material: Material) -> Self {
        Self {
            material,
            ..Self::new(mesh)
        }
    }

    /// Set the transform; the anchor is taken from its position
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.anchor = transform.position;
        self.transform = transform;
        self
    }

    /// Set the name of this entity (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag to this entity
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Link this entity to a scroller
    pub fn with_scroller(mut self, key: ScrollerKey) -> Self {
        self.scroller = Some(key);
        self
    }

    /// Check if this entity has a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
