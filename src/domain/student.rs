use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewStudent {
    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,
}

impl NewStudent {
    #[must_use]
    pub fn new(last_name: String, first_name: String, enrollment_date: NaiveDate) -> Self {
        Self {
            last_name: last_name.trim().to_string(),
            first_name: first_name.trim().to_string(),
            enrollment_date,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateStudent {
    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,
}

impl UpdateStudent {
    #[must_use]
    pub fn new(last_name: String, first_name: String, enrollment_date: NaiveDate) -> Self {
        Self {
            last_name: last_name.trim().to_string(),
            first_name: first_name.trim().to_string(),
            enrollment_date,
        }
    }
}

/// Sort orders accepted by the student index page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudentSort {
    #[default]
    LastNameAsc,
    LastNameDesc,
    EnrollmentDateAsc,
    EnrollmentDateDesc,
}

impl Display for StudentSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentSort::LastNameAsc => write!(f, "name"),
            StudentSort::LastNameDesc => write!(f, "name_desc"),
            StudentSort::EnrollmentDateAsc => write!(f, "date"),
            StudentSort::EnrollmentDateDesc => write!(f, "date_desc"),
        }
    }
}

impl From<&str> for StudentSort {
    fn from(s: &str) -> Self {
        match s {
            "name_desc" => StudentSort::LastNameDesc,
            "date" => StudentSort::EnrollmentDateAsc,
            "date_desc" => StudentSort::EnrollmentDateDesc,
            _ => StudentSort::LastNameAsc,
        }
    }
}

impl From<String> for StudentSort {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// One row of the enrollment statistics shown on the about page.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EnrollmentDateGroup {
    pub enrollment_date: NaiveDate,
    pub student_count: i64,
}
