mod center;
mod enrollment;
mod study;
mod user;
