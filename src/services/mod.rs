//! Business logic and core services.

pub mod backend;
pub mod metrics;

pub use backend::*;
pub use metrics::*;
