use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Course number entered by the registrar, also the primary key.
    pub id: i32,
    pub title: String,
    pub credits: i32,
    pub department_id: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCourse {
    pub id: i32,
    pub title: String,
    pub credits: i32,
    pub department_id: i32,
}

impl NewCourse {
    #[must_use]
    pub fn new(id: i32, title: String, credits: i32, department_id: i32) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            credits,
            department_id,
        }
    }
}

/// The course number is immutable; edits only touch the descriptive fields.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCourse {
    pub title: String,
    pub credits: i32,
    pub department_id: i32,
}

impl UpdateCourse {
    #[must_use]
    pub fn new(title: String, credits: i32, department_id: i32) -> Self {
        Self {
            title: title.trim().to_string(),
            credits,
            department_id,
        }
    }
}
