pub mod app;
pub mod panel;
pub mod phone_panel;
pub mod scene_view;
pub mod settings;
pub mod settings_io;
