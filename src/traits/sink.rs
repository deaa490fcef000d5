use crate::core::frame::Frame;

/// Frame-consumption path of a rendering context
///
/// Receiving a frame takes ownership of it; the sender keeps nothing.
pub trait FrameSink {
    fn consume(&mut self, frame: Frame);
}

impl<F: FnMut(Frame)> FrameSink for F {
    fn consume(&mut self, frame: Frame) {
        self(frame)
    }
}
