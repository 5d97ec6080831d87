//! Request guards applied before controller logic runs.

pub mod auth;
