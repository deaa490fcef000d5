use std::any::Any;

use super::sink::FrameSink;
use crate::core::frame::Frame;

/// Private state stored by an extension on a context
pub type PrivateState = Box<dyn Any + Send>;

/// Generation callback invoked by the host with (previous, current)
/// Either frame may be missing; the callback must tolerate that.
pub type GenerateHook = fn(&mut dyn RenderContext, Option<&Frame>, Option<&Frame>);

/// Host rendering context as seen by an extension
///
/// The host owns the context and its lifetime. An extension only reads and
/// writes the two slots and pushes frames into the consumption path.
pub trait RenderContext {
    /// Opaque private-state slot
    fn private_state(&self) -> Option<&(dyn Any + Send)>;

    fn private_state_mut(&mut self) -> Option<&mut (dyn Any + Send)>;

    /// Store a value in the private slot
    /// Returns the previous occupant, if any
    fn set_private_state(&mut self, state: PrivateState) -> Option<PrivateState>;

    /// Empty the private slot and hand back its occupant
    fn take_private_state(&mut self) -> Option<PrivateState>;

    /// Currently registered generation callback
    fn generate_hook(&self) -> Option<GenerateHook>;

    /// Register or clear (None) the generation callback
    fn set_generate_hook(&mut self, hook: Option<GenerateHook>);

    /// Optional frame-consumption path
    fn frame_sink(&mut self) -> Option<&mut dyn FrameSink>;
}
