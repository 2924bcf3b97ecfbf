//! Services for the home and about pages.

use crate::dto::main::AboutData;
use crate::repository::StudentReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads the student body statistics shown on the about page.
pub fn load_about_page<R>(repo: &R) -> ServiceResult<AboutData>
where
    R: StudentReader + ?Sized,
{
    let groups = repo.enrollment_date_groups().map_err(|err| {
        log::error!("Failed to load enrollment statistics: {err}");
        ServiceError::from(err)
    })?;

    Ok(AboutData { groups })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::student::EnrollmentDateGroup;
    use crate::repository::mock::MockRepository;

    #[test]
    fn about_returns_the_groups_in_order() {
        let mut repo = MockRepository::new();
        repo.expect_enrollment_date_groups().returning(|| {
            Ok(vec![
                EnrollmentDateGroup {
                    enrollment_date: NaiveDate::from_ymd_opt(2010, 9, 1).unwrap(),
                    student_count: 1,
                },
                EnrollmentDateGroup {
                    enrollment_date: NaiveDate::from_ymd_opt(2012, 9, 1).unwrap(),
                    student_count: 4,
                },
            ])
        });

        let data = load_about_page(&repo).expect("should load about");

        assert_eq!(data.groups.len(), 2);
        assert_eq!(data.groups[1].student_count, 4);
    }
}
