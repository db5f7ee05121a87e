//! HTTP request handlers for pages and JSON endpoints.
//!
//! This module contains all the HTTP request handlers that process
//! incoming requests and generate responses.

pub mod diagnosis;
pub mod health;
pub mod hospital;
pub mod metrics;
pub mod openapi;
pub mod pages;
pub mod proxy;
pub mod symptom;
pub mod user;
pub mod version;

pub use diagnosis::*;
pub use health::*;
pub use hospital::*;
pub use metrics::*;
pub use openapi::*;
pub use pages::*;
pub use proxy::*;
pub use symptom::*;
pub use user::*;
pub use version::*;
