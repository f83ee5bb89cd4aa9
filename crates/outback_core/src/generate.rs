//! Randomized feature generation for terrain and clouds
//!
//! Features are laid out on a fixed x grid with per-feature jitter in
//! depth and size. Generation runs exactly once per group at scene
//! construction; afterwards the set only moves rigidly with its scroller.

use rand::Rng;

/// One generated feature: a hill or a cloud puff
///
/// Immutable after generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainFeature {
    /// Horizontal position within the group (deterministic grid)
    pub x: f32,
    /// Depth, jittered
    pub z: f32,
    /// Vertical size (hills) or altitude (clouds), jittered
    pub height: f32,
    /// Horizontal size, jittered
    pub width: f32,
}

/// Uniform jitter ranges for the non-deterministic feature components
#[derive(Clone, Copy, Debug)]
pub struct JitterRanges {
    /// Depth range (min, max)
    pub z: (f32, f32),
    /// Height range (min, max)
    pub height: (f32, f32),
    /// Width range (min, max)
    pub width: (f32, f32),
}

/// Generate `count` features on a grid of `x_spacing`, starting at `x_offset`
///
/// The x coordinates are deterministic: `x = i * x_spacing + x_offset`.
/// The other components draw independently from `jitter`'s uniform ranges
/// through the caller's `rng`, so a seeded rng reproduces the layout.
pub fn generate_features(
    count: usize,
    x_spacing: f32,
    x_offset: f32,
    jitter: &JitterRanges,
    rng: &mut impl Rng,
) -> Vec<TerrainFeature> {
    log::debug!("Generating {} features at spacing {}", count, x_spacing);
    (0..count)
        .map(|i| TerrainFeature {
            x: i as f32 * x_spacing + x_offset,
            z: rng.gen_range(jitter.z.0..=jitter.z.1),
            height: rng.gen_range(jitter.height.0..=jitter.height.1),
            width: rng.gen_range(jitter.width.0..=jitter.width.1),
        })
        .collect()
}
