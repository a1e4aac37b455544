//! UI components built with Leptos.
//!
//! - [`browser`] - Thermal files browser (path bar, table, downloads)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;
