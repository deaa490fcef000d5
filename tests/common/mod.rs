#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ai_framegen::{Frame, FrameSink, FramegenError, InterpolationModel, ModelLoader, Result};

/// Shared counters observed by mocks
#[derive(Default, Clone)]
pub struct Counters {
    pub loads: Arc<AtomicUsize>,
    pub infers: Arc<AtomicUsize>,
    pub produced: Arc<AtomicUsize>,
    pub released_models: Arc<AtomicUsize>,
    pub consumed: Arc<AtomicUsize>,
}

impl Counters {
    pub fn get(counter: &Arc<AtomicUsize>) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// Model that emits a fixed frame or declines, and counts its own release
pub struct MockModel {
    pub counters: Counters,
    pub decline: bool,
}

impl InterpolationModel for MockModel {
    fn infer(&mut self, previous: &Frame, current: &Frame) -> Option<Frame> {
        self.counters.infers.fetch_add(1, Ordering::SeqCst);
        if self.decline {
            return None;
        }
        self.counters.produced.fetch_add(1, Ordering::SeqCst);
        Some(Frame::blank(
            previous.number,
            (previous.time + current.time) / 2.0,
            previous.width,
            previous.height,
        ))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

impl Drop for MockModel {
    fn drop(&mut self) {
        self.counters.released_models.fetch_add(1, Ordering::SeqCst);
    }
}

/// Loader that succeeds only for `available` and records requested paths
pub struct MockLoader {
    pub counters: Counters,
    pub available: PathBuf,
    pub decline: bool,
    pub requested: Mutex<Vec<PathBuf>>,
}

impl MockLoader {
    pub fn new(counters: &Counters, available: &str) -> Self {
        Self {
            counters: counters.clone(),
            available: PathBuf::from(available),
            decline: false,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn declining(mut self) -> Self {
        self.decline = true;
        self
    }
}

impl ModelLoader for MockLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn InterpolationModel>> {
        self.requested.lock().expect("lock").push(path.to_path_buf());
        if path != self.available {
            return Err(FramegenError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }
        self.counters.loads.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockModel {
            counters: self.counters.clone(),
            decline: self.decline,
        }))
    }
}

/// Sink that counts what it is handed
pub struct CountingSink {
    pub counters: Counters,
}

impl FrameSink for CountingSink {
    fn consume(&mut self, _frame: Frame) {
        self.counters.consumed.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn frame(number: u64) -> Frame {
    Frame::blank(number, number as f32 / 60.0, 4, 4)
}
