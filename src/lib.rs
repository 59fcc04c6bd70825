// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod file;
pub mod gui;
pub mod view;
