//! HTTP handlers translating requests into service calls.

pub mod auth;
pub mod center;
pub mod cycle;
pub mod enrollment;
pub mod player;
pub mod study;
pub mod team;
pub mod user;
