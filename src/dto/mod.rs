//! DTO modules that bridge services with templates.

pub mod courses;
pub mod departments;
pub mod instructors;
pub mod main;
pub mod students;
