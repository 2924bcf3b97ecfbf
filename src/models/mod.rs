//! Database models shared across the school repository.

pub mod config;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod instructor;
pub mod student;
