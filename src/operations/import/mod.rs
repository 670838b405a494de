//! Import operation submodules
//!
//! - [`orchestrator`]: runs locate, copy and patch steps in order
//! - [`plan`]: the aggregator lines each step writes

pub mod orchestrator;
pub mod plan;

pub use orchestrator::ImportOperation;
