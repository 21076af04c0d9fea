pub mod classify;
pub mod context;
pub mod shift;
pub mod transform;
pub mod utf8;

pub use classify::*;
pub use context::*;
pub use shift::*;
pub use transform::*;
