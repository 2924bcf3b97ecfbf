use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub budget: f64,
    pub start_date: NaiveDate,
    /// Administrator of the department, if one is appointed.
    pub instructor_id: Option<i32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub instructor_id: Option<i32>,
}

impl NewDepartment {
    #[must_use]
    pub fn new(
        name: String,
        budget: f64,
        start_date: NaiveDate,
        instructor_id: Option<i32>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            budget,
            start_date,
            instructor_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateDepartment {
    pub name: String,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub instructor_id: Option<i32>,
}

impl UpdateDepartment {
    #[must_use]
    pub fn new(
        name: String,
        budget: f64,
        start_date: NaiveDate,
        instructor_id: Option<i32>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            budget,
            start_date,
            instructor_id,
        }
    }
}
