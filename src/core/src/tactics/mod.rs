pub mod modifier;
pub mod tactics;

pub use modifier::*;
pub use tactics::*;
