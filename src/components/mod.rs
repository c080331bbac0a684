pub mod app;
pub mod controls_panel;
pub mod game_view;
pub mod loading_overlay;
pub mod shop_overlay;
