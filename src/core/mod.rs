//! Core library components.

pub mod codec;
pub mod config;
pub mod constants;
pub mod metadata;
pub mod paths;
pub mod store;
pub mod tree;
