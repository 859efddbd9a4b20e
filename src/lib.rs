pub mod config;
pub mod color;
pub mod game_types;
pub mod round_controller;
pub mod haptics;
mod app_state;
mod app_style;
pub mod app;
pub mod ui_theme;
pub mod ui_components;
pub mod ui_panels;
