//! Reusable UI components for the confwatch frontend.
//!
//! Contains the navigation bar with its theme toggle and mobile sheet, and
//! the redirector mounted on the root route.

pub mod navbar;
pub mod redirector;
pub mod sheet;
pub mod theme_toggle;

pub use navbar::*;
pub use redirector::*;
pub use sheet::*;
pub use theme_toggle::*;
