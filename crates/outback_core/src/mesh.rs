//! Mesh references and loaded models
//!
//! The core never rasterizes anything: a [`Mesh`] is a description the
//! external renderer resolves. Character models come from a
//! [`ModelSource`]; the loaded [`Model`] is shared read-only and cloned
//! per use.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::entity::Material;
use crate::transform::Transform;

/// A renderable shape reference
///
/// Primitives carry their own dimensions; `Model` points at a loaded
/// asset; `Empty` draws nothing (used for a character whose model has not
/// resolved yet).
#[derive(Clone, Debug)]
pub enum Mesh {
    /// Flat plane in the XZ plane, centered at the origin
    Plane { width: f32, depth: f32 },
    /// Sphere centered at the origin (non-uniform scale squashes it)
    Sphere { radius: f32 },
    /// Axis-aligned box centered at the origin
    Box { width: f32, height: f32, depth: f32 },
    /// Inward-facing dome used for the sky
    Dome { radius: f32 },
    /// A loaded multi-part model
    Model(Model),
    /// Draws nothing
    Empty,
}

/// One part of a loaded model: a primitive with a local transform
#[derive(Clone, Debug)]
pub struct ModelPart {
    /// The part's shape (a primitive, never a nested model)
    pub mesh: Mesh,
    /// Local transform relative to the model origin
    pub transform: Transform,
    /// The part's material
    pub material: Material,
}

/// A loaded model node
///
/// The part list is behind an `Arc`: cloning a Model per use is cheap and
/// never mutates the shared loaded original.
#[derive(Clone, Debug)]
pub struct Model {
    /// Asset identifier this model was loaded from
    pub id: String,
    /// The model's parts, shared and read-only after load
    parts: Arc<Vec<ModelPart>>,
}

impl Model {
    /// Create a model from its parts
    pub fn new(id: impl Into<String>, parts: Vec<ModelPart>) -> Self {
        Self {
            id: id.into(),
            parts: Arc::new(parts),
        }
    }

    /// The model's parts
    pub fn parts(&self) -> &[ModelPart] {
        &self.parts
    }

    /// Number of parts
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

/// Source of loadable models
///
/// Asset resolution (file formats, caching) is the implementor's concern;
/// the core only consumes the loaded node.
pub trait ModelSource {
    /// Load the model with the given identifier
    fn load_model(&self, id: &str) -> Result<Model, AssetError>;
}

/// Error loading a model asset
#[derive(Debug)]
pub enum AssetError {
    /// No model with the requested identifier
    NotFound(String),
    /// IO error (file missing, permission denied, etc.)
    Io(io::Error),
    /// The source cannot decode the asset
    Unsupported(String),
}

impl From<io::Error> for AssetError {
    fn from(e: io::Error) -> Self {
        AssetError::Io(e)
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(id) => write!(f, "Model not found: {}", id),
            AssetError::Io(e) => write!(f, "IO error: {}", e),
            AssetError::Unsupported(what) => write!(f, "Unsupported asset: {}", what),
        }
    }
}

impl std::error::Error for AssetError {}
