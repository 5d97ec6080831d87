//! Shared API data transfer objects.
//!
//! This module contains the request and response DTOs exchanged over the REST
//! API. Resource responses use the `success` / `message` envelope convention;
//! failures are serialized through `api::ErrorDto`.

pub mod api;
pub mod center;
pub mod cycle;
pub mod enrollment;
pub mod player;
pub mod study;
pub mod team;
pub mod user;

pub use api::{ErrorDto, MessageDto};
pub use center::CenterDto;
pub use cycle::CycleDto;
pub use enrollment::EnrollmentDto;
pub use player::{PlayerDetailDto, PlayerSummaryDto};
pub use study::StudyDto;
pub use team::TeamDto;
pub use user::{PaginatedUsersDto, UserDto};
