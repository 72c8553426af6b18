//! Command implementations for the linc CLI

pub mod serve;

pub use serve::run_serve;
