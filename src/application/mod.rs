//! Application layer orchestrating domain rules over a repository.

pub mod services;
