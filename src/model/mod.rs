//! Persisted inference artifacts exported from the training environment.
//!
//! Both artifacts are JSON files produced offline. They are loaded once at
//! startup, validated structurally, and never mutated afterwards.

pub mod gbrt;
pub mod scaler;

pub use gbrt::GbrtModel;
pub use scaler::StandardScaler;
