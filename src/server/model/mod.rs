//! Domain models used by the data, service & controller layers. Entities are
//! converted into these types at the data layer boundary so the rest of the
//! server works with parsed enums instead of raw database strings.

pub mod auth;
pub mod center;
pub mod cycle;
pub mod enrollment;
pub mod player;
pub mod study;
pub mod team;
pub mod user;
