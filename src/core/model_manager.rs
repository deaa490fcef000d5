//! Model lifecycle bound to one rendering context.
//!
//! `install` loads the model, parks it in the context's private slot and
//! registers the generation hook. `teardown` undoes all of that. A context
//! either carries a loaded model and the hook, or neither.

use log::{info, warn};

use super::frame_generator;
use crate::config::FramegenConfig;
use crate::error::{FramegenError, Result};
use crate::traits::{InterpolationModel, ModelLoader, RenderContext};

/// Per-context private record
pub struct ExtensionState {
    model: Box<dyn InterpolationModel>,
}

impl ExtensionState {
    pub fn model(&self) -> &dyn InterpolationModel {
        self.model.as_ref()
    }

    pub fn model_mut(&mut self) -> &mut dyn InterpolationModel {
        self.model.as_mut()
    }
}

/// Extension state of `ctx`, if installed
pub fn state(ctx: &dyn RenderContext) -> Option<&ExtensionState> {
    ctx.private_state()?.downcast_ref::<ExtensionState>()
}

pub fn state_mut(ctx: &mut dyn RenderContext) -> Option<&mut ExtensionState> {
    ctx.private_state_mut()?.downcast_mut::<ExtensionState>()
}

pub fn is_installed(ctx: &dyn RenderContext) -> bool {
    state(ctx).is_some()
}

/// Load the configured model and bind frame generation to `ctx`
///
/// Fails without touching the context when either slot is already taken or
/// the model cannot be loaded.
pub fn install(
    ctx: &mut dyn RenderContext,
    config: &FramegenConfig,
    loader: &dyn ModelLoader,
) -> Result<()> {
    if ctx.private_state().is_some() || ctx.generate_hook().is_some() {
        warn!("refusing to install frame generation twice on the same context");
        return Err(FramegenError::AlreadyInstalled);
    }

    let path = config.resolved_model_path();
    let model = loader.load(&path).map_err(|e| {
        warn!("frame generation disabled, model load failed: {}", e);
        e
    })?;

    info!(
        "frame generation installed with model '{}' from {}",
        model.name(),
        path.display()
    );

    ctx.set_private_state(Box::new(ExtensionState { model }));
    ctx.set_generate_hook(Some(frame_generator::generate));
    Ok(())
}

/// Release the model and unbind frame generation from `ctx`
///
/// Safe to call on a context that was never installed, and safe to repeat.
pub fn teardown(ctx: &mut dyn RenderContext) {
    if !is_installed(ctx) {
        return;
    }

    ctx.set_generate_hook(None);
    if let Some(state) = ctx.take_private_state() {
        if let Ok(state) = state.downcast::<ExtensionState>() {
            info!("frame generation torn down, releasing model '{}'", state.model.name());
        }
    }
}
