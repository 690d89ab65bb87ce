pub mod calculations;
pub mod constants;
pub mod engine;


pub use calculations::{cell_spread_rate, SpreadParams};
pub use engine::SpreadEngine;
