//! Per-frame-pair generation hook.
//!
//! Generation is best effort. Any missing precondition skips the pair
//! silently; nothing is ever reported back to the renderer.

use log::{debug, trace};

use super::frame::Frame;
use super::model_manager;
use crate::traits::RenderContext;

/// Why a generation request produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No extension state on the context (never installed, failed, or torn down)
    NotInstalled,
    MissingPreviousFrame,
    MissingCurrentFrame,
}

/// What happened to one generation request
///
/// For every inference that yields a frame, exactly one of `HandedOff` or
/// `Released` is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    Skipped(SkipReason),
    /// The model ran and declined to interpolate this pair
    Declined,
    /// The generated frame was moved into the context's consumption path
    HandedOff,
    /// No consumption path was registered; the generated frame was dropped here
    Released,
}

impl GenerateOutcome {
    /// True when the model produced a frame
    pub fn produced_frame(self) -> bool {
        matches!(self, Self::HandedOff | Self::Released)
    }
}

/// Hook registered on the context by install
pub fn generate(ctx: &mut dyn RenderContext, previous: Option<&Frame>, current: Option<&Frame>) {
    let _ = generate_frame(ctx, previous, current);
}

/// Run one interpolation request and report its outcome
pub fn generate_frame(
    ctx: &mut dyn RenderContext,
    previous: Option<&Frame>,
    current: Option<&Frame>,
) -> GenerateOutcome {
    let Some(state) = model_manager::state_mut(ctx) else {
        trace!("frame generation skipped: not installed");
        return GenerateOutcome::Skipped(SkipReason::NotInstalled);
    };
    let Some(previous) = previous else {
        trace!("frame generation skipped: no previous frame");
        return GenerateOutcome::Skipped(SkipReason::MissingPreviousFrame);
    };
    let Some(current) = current else {
        trace!("frame generation skipped: no current frame");
        return GenerateOutcome::Skipped(SkipReason::MissingCurrentFrame);
    };

    let Some(generated) = state.model_mut().infer(previous, current) else {
        debug!(
            "model declined to interpolate frames {} -> {}",
            previous.number, current.number
        );
        return GenerateOutcome::Declined;
    };

    match ctx.frame_sink() {
        Some(sink) => {
            trace!("handing off frame generated at t={:.4}", generated.time);
            sink.consume(generated);
            GenerateOutcome::HandedOff
        }
        None => {
            debug!("no frame consumer registered, releasing generated frame");
            drop(generated);
            GenerateOutcome::Released
        }
    }
}
