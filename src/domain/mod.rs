//! Domain records exposed by the service layer.

pub mod course;
pub mod department;
pub mod enrollment;
pub mod instructor;
pub mod student;
