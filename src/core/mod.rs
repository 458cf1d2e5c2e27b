pub mod field;
pub mod motion;
pub mod scatter;

pub use field::*;
pub use motion::*;
pub use scatter::*;
