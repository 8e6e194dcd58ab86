//! Shelf - a filterable, categorized product table for the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod cli_output;
pub mod error;
pub mod input;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod view_model;
