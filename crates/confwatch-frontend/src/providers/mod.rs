//! Context providers for shared application state and services.

pub mod config;
pub mod theme;
pub mod views;

pub use theme::ThemeProvider;
pub use views::ViewCacheProvider;
