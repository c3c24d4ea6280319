//! Page components for different routes in the application.

pub mod homepage;
pub mod not_found;

pub use homepage::*;
pub use not_found::*;
