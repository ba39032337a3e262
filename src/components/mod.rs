//! Reusable UI components.

pub mod logout_button;
pub mod page_header;
pub mod route_guard;
pub mod side_menu;
