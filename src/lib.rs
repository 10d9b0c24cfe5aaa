pub mod error;
pub mod geometry;
pub mod graph;
pub mod math;
pub mod noding;
pub mod overlay;

pub use error::{OverlayError, Result};
pub use overlay::{overlay, BooleanOp};
