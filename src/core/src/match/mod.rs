pub mod engine;
pub mod error;
pub mod result;
pub mod stats;

pub use engine::*;
pub use error::*;
pub use result::*;
pub use stats::*;
