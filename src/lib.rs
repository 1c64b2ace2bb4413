//! Configuration tables for a dwm-style tiling window manager.
//!
//! The window manager core reads these at start-up and while dispatching
//! events: appearance, tags, placement rules, layouts, key and button
//! bindings, and the programs to autostart. Everything here is built once and
//! only read afterwards.

pub mod actions;
pub mod appearance;
pub mod autostart;
pub mod buttons;
pub mod commands;
pub mod config;
pub mod keys;
pub mod keysyms;
pub mod layouts;
pub mod modifiers;
pub mod rules;
pub mod tags;
pub mod validate;
