//! Liftoff demo - a small iced application hosting the modal widget
//!
//! The page shows the last status broadcast on the event bus; the modal's
//! slotted content lets the user rename the dialog and save the result to
//! the YAML config.

pub mod app;
pub mod config;
