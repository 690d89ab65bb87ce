pub mod results;
pub mod runner;
pub mod state;

#[cfg(test)]
mod tests;

pub use results::{ScenarioName, ScenarioResult};
pub use runner::ScenarioRunner;
pub use state::RunState;
