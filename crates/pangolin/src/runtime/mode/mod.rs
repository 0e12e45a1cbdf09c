//! Per-mode key handlers. Each submodule owns the keyboard while its dialog
//! is visible.

pub(crate) mod action_menu;
pub(crate) mod browse;
pub(crate) mod confirm_delete;
pub(crate) mod confirm_rename;
pub(crate) mod help;
pub(crate) mod mkdir;
pub(crate) mod move_dialog;
