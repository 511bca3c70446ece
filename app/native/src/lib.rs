//! Tricol - master/stack tiling layouts with weighted, drag-resizable tiles.
//!
//! The library computes tile geometry for left-master layouts and converts
//! pixel drags on tile edges back into layout state. The `tricol` binary
//! wraps it in a small CLI for previewing layouts.

pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod tiling;
