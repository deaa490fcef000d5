pub mod context;
pub mod model;
pub mod sink;

pub use context::*;
pub use model::*;
pub use sink::*;
