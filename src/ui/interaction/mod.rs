//! Mouse interaction system.
//!
//! Registry-based handling of clickable regions in the terminal UI.
//! Regions are registered during rendering; the event loop hit tests mouse
//! clicks against them and dispatches the resulting action.

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
