use std::any::Any;

use super::frame::Frame;
use crate::traits::{FrameSink, GenerateHook, PrivateState, RenderContext};

/// In-process rendering context with one private slot and one hook slot
///
/// Stands in for a host pipeline: hosts that have no context type of their
/// own, the demo binary and the tests all drive extensions through it.
#[derive(Default)]
pub struct PipeContext {
    private: Option<PrivateState>,
    hook: Option<GenerateHook>,
    sink: Option<Box<dyn FrameSink + Send>>,
}

impl PipeContext {
    /// Context without a frame-consumption path
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose generated frames go to `sink`
    pub fn with_sink(sink: impl FrameSink + Send + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
            ..Self::default()
        }
    }

    pub fn set_sink(&mut self, sink: Option<Box<dyn FrameSink + Send>>) {
        self.sink = sink;
    }

    /// Call the registered generation hook, if any
    pub fn invoke_generate(&mut self, previous: Option<&Frame>, current: Option<&Frame>) {
        if let Some(hook) = self.hook {
            hook(self, previous, current);
        }
    }
}

impl RenderContext for PipeContext {
    fn private_state(&self) -> Option<&(dyn Any + Send)> {
        self.private.as_deref()
    }

    fn private_state_mut(&mut self) -> Option<&mut (dyn Any + Send)> {
        self.private.as_deref_mut()
    }

    fn set_private_state(&mut self, state: PrivateState) -> Option<PrivateState> {
        self.private.replace(state)
    }

    fn take_private_state(&mut self) -> Option<PrivateState> {
        self.private.take()
    }

    fn generate_hook(&self) -> Option<GenerateHook> {
        self.hook
    }

    fn set_generate_hook(&mut self, hook: Option<GenerateHook>) {
        self.hook = hook;
    }

    fn frame_sink(&mut self) -> Option<&mut dyn FrameSink> {
        match &mut self.sink {
            Some(sink) => Some(sink.as_mut()),
            None => None,
        }
    }
}

/// Sink that keeps every frame it receives
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    frames: std::sync::Arc<std::sync::Mutex<Vec<Frame>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames received so far
    pub fn len(&self) -> usize {
        self.frames.lock().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return all received frames
    pub fn drain(&self) -> Vec<Frame> {
        self.frames
            .lock()
            .map(|mut f| std::mem::take(&mut *f))
            .unwrap_or_default()
    }
}

impl FrameSink for CollectingSink {
    fn consume(&mut self, frame: Frame) {
        if let Ok(mut frames) = self.frames.lock() {
            frames.push(frame);
        }
    }
}
