//! DTOs used by the home and about pages.

use crate::domain::student::EnrollmentDateGroup;

/// Data required to render the about page.
#[derive(Debug)]
pub struct AboutData {
    /// Student counts grouped by enrollment date.
    pub groups: Vec<EnrollmentDateGroup>,
}
