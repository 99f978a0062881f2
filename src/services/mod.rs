//! External service clients.

pub mod omdb;
