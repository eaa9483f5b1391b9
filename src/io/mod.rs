/// Command-line front end for interactive and automated play
pub mod cli;
/// Key-to-command mapping
pub mod command;
/// Game constants and configuration defaults
pub mod configuration;
/// Text rendering of grid snapshots
pub mod display;
/// Error types for grid operations
pub mod error;
