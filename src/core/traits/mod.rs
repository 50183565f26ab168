//! Core traits module
//!
//! Contains the abstract interfaces the server depends on

pub mod provider;

pub use provider::*;
