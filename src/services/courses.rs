//! Services handling course pages and mutations.

use validator::Validate;

use crate::domain::course::{Course, NewCourse, UpdateCourse};
use crate::dto::courses::{CourseFormData, CourseRow};
use crate::forms::course::{AddCourseForm, EditCourseForm};
use crate::repository::{CourseReader, CourseWriter, DepartmentReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads all courses with their department names.
pub fn load_index_page<R>(repo: &R) -> ServiceResult<Vec<CourseRow>>
where
    R: CourseReader + ?Sized,
{
    let courses = repo
        .list_courses()?
        .into_iter()
        .map(CourseRow::from)
        .collect();

    Ok(courses)
}

/// Loads one course with its department name for the details and delete
/// pages.
pub fn load_course<R>(repo: &R, course_id: i32) -> ServiceResult<CourseRow>
where
    R: CourseReader + ?Sized,
{
    let row = repo
        .get_course_with_department(course_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(CourseRow::from(row))
}

/// Loads the departments offered by the create form.
pub fn load_create_form<R>(repo: &R) -> ServiceResult<CourseFormData>
where
    R: DepartmentReader + ?Sized,
{
    let departments = repo.list_departments()?;

    Ok(CourseFormData {
        course: None,
        departments,
    })
}

/// Loads the course and the departments offered by the edit form.
pub fn load_edit_form<R>(repo: &R, course_id: i32) -> ServiceResult<CourseFormData>
where
    R: CourseReader + DepartmentReader + ?Sized,
{
    let course = repo
        .get_course_by_id(course_id)?
        .ok_or(ServiceError::NotFound)?;
    let departments = repo.list_departments()?;

    Ok(CourseFormData {
        course: Some(course),
        departments,
    })
}

/// Validates the form and persists a new course under the number the
/// registrar entered.
pub fn add_course<R>(repo: &R, form: AddCourseForm) -> ServiceResult<Course>
where
    R: CourseReader + CourseWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please correct the form and try again.".to_string(),
        ));
    }

    if repo.get_course_by_id(form.id)?.is_some() {
        return Err(ServiceError::Form(format!(
            "Course number {} is already taken.",
            form.id
        )));
    }

    let new_course = NewCourse::from(&form);

    Ok(repo.create_course(&new_course)?)
}

/// Validates the form and applies the updates to the course.
pub fn save_course<R>(repo: &R, course_id: i32, form: EditCourseForm) -> ServiceResult<Course>
where
    R: CourseWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please correct the form and try again.".to_string(),
        ));
    }

    let updates = UpdateCourse::from(&form);

    Ok(repo.update_course(course_id, &updates)?)
}

/// Deletes the course; enrollments and teaching assignments go with it.
pub fn delete_course<R>(repo: &R, course_id: i32) -> ServiceResult<()>
where
    R: CourseWriter + ?Sized,
{
    Ok(repo.delete_course(course_id)?)
}
