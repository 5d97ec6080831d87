//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Authorization**: Enforcing per-resource ability and permission gates once the
//!   addressed resource has been resolved

pub mod center;
pub mod cycle;
pub mod enrollment;
pub mod player;
pub mod study;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
