//! # Connect Four
//!
//! Two-player Connect Four on a 7×6 grid: the rules engine plus a terminal
//! front-end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, game state
//! - [`ui`] — Terminal UI: board view and keyboard input
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
