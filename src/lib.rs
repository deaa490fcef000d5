//! Frame generation extension for a rendering pipeline.
//!
//! Installed on a rendering context, it loads an interpolation model and
//! registers a hook that turns each (previous, current) frame pair into a
//! synthetic in-between frame for the context's output queue.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod synthetic;
pub mod traits;

pub use config::FramegenConfig;
pub use error::{FramegenError, Result};
pub use self::core::{
    generate, generate_frame, install, is_installed, teardown, BlendModel, CollectingSink,
    FileModelLoader, Frame, GenerateOutcome, ModelHeader, PipeContext, SkipReason,
};
pub use traits::{FrameSink, GenerateHook, InterpolationModel, ModelLoader, RenderContext};
