//! # algoviz - Terminal front end for ALGOVIZ
//!
//! Loads configuration, drives visualizer sessions from `algoviz_library` and
//! draws every step in the terminal.
//!
//! Usage:
//!   algoviz pathfind                              # A* on the default 80x80 board
//!   algoviz pathfind --algorithm bfs --random-barriers
//!   algoviz sort --algorithm quick --length 120   # Sort 120 shuffled bars
//!   algoviz --config algoviz.example.toml sort    # Settings from a file
//!   algoviz --headless --json pathfind            # Outcome only, as JSON

pub mod config;
pub mod render;

pub use config::{AppConfig, PathfindingConfig, RenderConfig, SortingConfig};
pub use render::TerminalRenderer;
