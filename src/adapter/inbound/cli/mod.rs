//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod decompose;
pub mod input;
pub mod output;
pub mod run;
pub mod zeros;
