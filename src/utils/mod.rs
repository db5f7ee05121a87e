//! Utility functions and helpers.

pub mod form;
pub mod html;
pub mod route;

pub use form::*;
pub use html::*;
pub use route::*;
