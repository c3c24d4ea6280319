//! Custom hooks shared by pages and components.

pub mod use_layout;
pub mod use_lazy_view;

pub use use_layout::use_layout;
pub use use_lazy_view::use_lazy_view;
