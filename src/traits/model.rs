use std::path::Path;

use crate::core::frame::Frame;
use crate::error::Result;

/// Loaded inference resource that synthesizes an in-between frame
pub trait InterpolationModel: Send {
    /// Produce a frame between `previous` and `current`
    /// Returns None when the model declines to interpolate this pair
    fn infer(&mut self, previous: &Frame, current: &Frame) -> Option<Frame>;

    /// Human-readable identifier used in logs
    fn name(&self) -> &str;
}

/// Resolves a model resource and loads it
///
/// An unresolvable resource is an error value, never a panic.
pub trait ModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn InterpolationModel>>;
}
