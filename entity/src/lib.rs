pub mod prelude;

pub mod access_token;
pub mod center;
pub mod cycle;
pub mod enrollment;
pub mod player;
pub mod study;
pub mod team;
pub mod token_ability;
pub mod user;
pub mod user_permission;
