pub mod action_menu;
pub mod confirmation_overlay;
pub mod footer_bar;
pub mod help_overlay;
pub mod input_overlay;
pub mod move_overlay;
pub mod status_bar;
