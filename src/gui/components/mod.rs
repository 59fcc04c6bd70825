// src/gui/components/mod.rs
pub mod action_buttons;
pub mod alert;
pub mod console;
pub mod data_view;
pub mod nav;
