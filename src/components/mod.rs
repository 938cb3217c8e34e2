pub mod app;
pub mod arena_view;
pub mod hud_panel;
pub mod records_panel;
