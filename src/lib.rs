//! Video Sweep Library
//!
//! A library for classifying, renaming, and moving video files
//! (movies and TV episodes) based on filename heuristics and OMDb lookups.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
