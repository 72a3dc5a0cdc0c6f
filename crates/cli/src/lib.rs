//! Public library modules for the CLI crate
pub mod input;
pub mod output;
pub mod scan;
pub mod settings;
