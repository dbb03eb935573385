//! UI building blocks for the modulo dashboard
//!
//! Theme, the multi-select dropdown and the fault boundary that keeps a
//! misbehaving control from taking down the rest of the screen.

pub mod fault;
pub mod theme;
pub mod widgets;

pub use fault::FaultCell;
pub use theme::{apply_theme, Theme};
pub use widgets::multi_select;
