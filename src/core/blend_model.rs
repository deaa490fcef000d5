//! Reference interpolation model.
//!
//! Produces the in-between frame as a weighted per-pixel blend of the two
//! input frames, and declines pairs that straddle a scene cut. The resource
//! is a small binary file:
//!
//! ```text
//! offset  size  field
//! 0       4     magic "AFGM"
//! 4       4     version (u32, little-endian, = 1)
//! 8       4     blend weight (f32, 0 = previous, 1 = current)
//! 12      4     scene-cut threshold (f32, mean abs difference in [0, 1])
//! ```
//!
//! Bytes past the header are ignored.

use std::path::Path;

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

use super::frame::Frame;
use crate::error::{FramegenError, Result};
use crate::traits::InterpolationModel;

pub const MODEL_MAGIC: [u8; 4] = *b"AFGM";
pub const MODEL_VERSION: u32 = 1;
pub const HEADER_SIZE: usize = std::mem::size_of::<ModelHeader>();

/// On-disk model header
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub blend: f32,
    pub scene_cut: f32,
}

impl ModelHeader {
    pub fn new(blend: f32, scene_cut: f32) -> Self {
        Self {
            magic: MODEL_MAGIC,
            version: MODEL_VERSION.to_le(),
            blend: f32::from_bits(blend.to_bits().to_le()),
            scene_cut: f32::from_bits(scene_cut.to_bits().to_le()),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        bytemuck::bytes_of(self).to_vec()
    }

    /// Write the header as a complete model file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.encode()).map_err(|source| FramegenError::ModelIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse and validate a header from the start of `bytes`
    /// `path` is only used for error reporting
    pub fn decode(bytes: &[u8], path: &Path) -> Result<Self> {
        let invalid = |reason: String| FramegenError::InvalidModel {
            path: path.to_path_buf(),
            reason,
        };

        if bytes.len() < HEADER_SIZE {
            return Err(invalid(format!(
                "truncated header: {} of {} bytes",
                bytes.len(),
                HEADER_SIZE
            )));
        }

        let raw: ModelHeader = bytemuck::pod_read_unaligned(&bytes[..HEADER_SIZE]);
        let header = Self {
            magic: raw.magic,
            version: u32::from_le(raw.version),
            blend: f32::from_bits(u32::from_le(raw.blend.to_bits())),
            scene_cut: f32::from_bits(u32::from_le(raw.scene_cut.to_bits())),
        };

        if header.magic != MODEL_MAGIC {
            return Err(invalid("bad magic".to_string()));
        }
        if header.version != MODEL_VERSION {
            return Err(invalid(format!("unsupported version {}", header.version)));
        }
        if !(0.0..=1.0).contains(&header.blend) {
            return Err(invalid(format!("blend weight {} outside [0, 1]", header.blend)));
        }
        if !(0.0..=1.0).contains(&header.scene_cut) {
            return Err(invalid(format!(
                "scene-cut threshold {} outside [0, 1]",
                header.scene_cut
            )));
        }
        Ok(header)
    }
}

impl Default for ModelHeader {
    /// Midpoint blend, decline pairs differing by more than 25%
    fn default() -> Self {
        Self::new(0.5, 0.25)
    }
}

/// Blend-based frame interpolator
#[derive(Debug, Clone)]
pub struct BlendModel {
    name: String,
    blend: f32,
    scene_cut: f32,
}

impl BlendModel {
    pub fn new(name: impl Into<String>, blend: f32, scene_cut: f32) -> Self {
        Self {
            name: name.into(),
            blend: blend.clamp(0.0, 1.0),
            scene_cut: scene_cut.clamp(0.0, 1.0),
        }
    }

    pub fn from_header(name: impl Into<String>, header: &ModelHeader) -> Self {
        Self::new(name, header.blend, header.scene_cut)
    }

    pub fn blend(&self) -> f32 {
        self.blend
    }

    pub fn scene_cut(&self) -> f32 {
        self.scene_cut
    }

    /// True when both frames can be blended pixel for pixel
    fn compatible(previous: &Frame, current: &Frame) -> bool {
        previous.dimensions() == current.dimensions()
            && previous.is_well_formed()
            && current.is_well_formed()
            && previous.pixel_count() > 0
    }
}

/// Mean absolute per-channel difference, normalised to [0, 1]
pub fn mean_abs_difference(a: &[u8], b: &[u8]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let total: u64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| u64::from(x.abs_diff(y)))
        .sum();
    total as f32 / (a.len() as f32 * 255.0)
}

fn to_vec4(px: &[u8]) -> Vec4 {
    Vec4::new(px[0] as f32, px[1] as f32, px[2] as f32, px[3] as f32)
}

impl InterpolationModel for BlendModel {
    fn infer(&mut self, previous: &Frame, current: &Frame) -> Option<Frame> {
        if !Self::compatible(previous, current) {
            return None;
        }
        if mean_abs_difference(previous.pixels(), current.pixels()) > self.scene_cut {
            return None;
        }

        let pixels = previous
            .pixels()
            .chunks_exact(4)
            .zip(current.pixels().chunks_exact(4))
            .flat_map(|(p, c)| {
                let mixed = to_vec4(p).lerp(to_vec4(c), self.blend).round();
                mixed.to_array().map(|v| v.clamp(0.0, 255.0) as u8)
            })
            .collect();

        let time = previous.time + (current.time - previous.time) * self.blend;
        Some(Frame::new(
            previous.number,
            time,
            previous.width,
            previous.height,
            pixels,
        ))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
