//! The shared library for confwatch, the machine-learning conference tracker frontend.
//!
//! Everything here is plain Rust so it can be unit tested natively: route
//! resolution, theme and navigation state, lazy view loading, configuration,
//! error handling, logging, and macros used by the Yew components.

pub mod config;
pub mod errors;
pub mod loader;
pub mod log;
pub mod macros;
pub mod nav;
pub mod route;
pub mod theme;

pub use serde;
pub use serde_json;
pub use tracing;
