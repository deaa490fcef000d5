use crate::core::frame::Frame;

/// Infinite iterator of rendered frames: a horizontal gradient scrolling
/// a few pixels per frame, timed at a fixed frame rate
/// Use it in place of a real renderer: `for frame in source.take(n) { ... }`
pub struct GradientSource {
    frame_number: u64,
    width: u32,
    height: u32,
    fps: f32,
    speed: u32,
}

impl GradientSource {
    pub fn new(width: u32, height: u32, fps: f32) -> Self {
        Self {
            frame_number: 0,
            width,
            height,
            fps,
            speed: 2,
        }
    }

    /// Pixels the gradient moves per frame
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    fn render(&self, number: u64) -> Frame {
        let width = self.width.max(1) as u64;
        let offset = number * self.speed as u64;
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for _y in 0..self.height {
            for x in 0..self.width {
                let shade = (((x as u64 + offset) % width) * 255 / width) as u8;
                pixels.extend_from_slice(&[shade, shade / 2, 255 - shade, 255]);
            }
        }
        Frame::new(
            number,
            number as f32 / self.fps,
            self.width,
            self.height,
            pixels,
        )
    }
}

impl Iterator for GradientSource {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let frame = self.render(self.frame_number);
        self.frame_number += 1;
        Some(frame)
    }
}
