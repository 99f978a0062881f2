//! Data models.

pub mod action;
pub mod classification;
pub mod config;
