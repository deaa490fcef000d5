pub mod blend_model;
pub mod frame;
pub mod frame_generator;
pub mod loader;
pub mod model_manager;
pub mod pipe_context;

pub use blend_model::{BlendModel, ModelHeader};
pub use frame::Frame;
pub use frame_generator::{generate, generate_frame, GenerateOutcome, SkipReason};
pub use loader::FileModelLoader;
pub use model_manager::{install, is_installed, teardown, ExtensionState};
pub use pipe_context::{CollectingSink, PipeContext};
