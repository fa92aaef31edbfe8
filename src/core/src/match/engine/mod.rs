pub mod config;
pub mod engine;
pub mod fixtures;
pub mod random;
pub mod state;

pub use config::*;
pub use engine::*;
pub use fixtures::*;
pub use random::*;
pub use state::*;
