/// Frame - one rendered image with its timing
///
/// Pixels are tightly packed RGBA8, row-major, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub number: u64,
    pub time: f32,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(number: u64, time: f32, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            number,
            time,
            width,
            height,
            pixels,
        }
    }

    /// Create a fully transparent black frame of the given size
    pub fn blank(number: u64, time: f32, width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        Self::new(number, time, width, height, vec![0; len])
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Expected size in bytes of an RGBA buffer for these dimensions
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }

    /// True when the pixel buffer matches the declared dimensions
    pub fn is_well_formed(&self) -> bool {
        self.pixels.len() == self.buffer_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_frame_has_rgba_buffer() {
        let frame = Frame::blank(3, 0.5, 16, 9);
        assert_eq!(frame.dimensions(), (16, 9));
        assert_eq!(frame.pixel_count(), 144);
        assert_eq!(frame.pixels().len(), 576);
        assert!(frame.pixels().iter().all(|&b| b == 0));
        assert!(frame.is_well_formed());
    }

    #[test]
    fn test_mismatched_buffer_is_not_well_formed() {
        let frame = Frame::new(0, 0.0, 2, 2, vec![0; 15]);
        assert_eq!(frame.buffer_size(), 16);
        assert!(!frame.is_well_formed());
    }
}
