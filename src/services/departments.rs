//! Services handling department pages and mutations.

use validator::Validate;

use crate::domain::department::{Department, NewDepartment, UpdateDepartment};
use crate::dto::departments::{DepartmentFormData, DepartmentRow};
use crate::forms::department::DepartmentForm;
use crate::repository::{DepartmentReader, DepartmentWriter, InstructorReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads all departments with their administrators.
pub fn load_index_page<R>(repo: &R) -> ServiceResult<Vec<DepartmentRow>>
where
    R: DepartmentReader + ?Sized,
{
    let departments = repo
        .list_departments_with_administrators()?
        .into_iter()
        .map(DepartmentRow::from)
        .collect();

    Ok(departments)
}

/// Loads one department with its administrator for the details and delete
/// pages.
pub fn load_department<R>(repo: &R, department_id: i32) -> ServiceResult<DepartmentRow>
where
    R: DepartmentReader + InstructorReader + ?Sized,
{
    let department = repo
        .get_department_by_id(department_id)?
        .ok_or(ServiceError::NotFound)?;

    let administrator = match department.instructor_id {
        Some(instructor_id) => repo.get_instructor_by_id(instructor_id)?,
        None => None,
    };

    Ok(DepartmentRow {
        department,
        administrator,
    })
}

/// Loads the instructors offered by the create form.
pub fn load_create_form<R>(repo: &R) -> ServiceResult<DepartmentFormData>
where
    R: InstructorReader + ?Sized,
{
    let instructors = repo.list_instructors()?;

    Ok(DepartmentFormData {
        department: None,
        instructors,
    })
}

/// Loads the department and the instructors offered by the edit form.
pub fn load_edit_form<R>(repo: &R, department_id: i32) -> ServiceResult<DepartmentFormData>
where
    R: DepartmentReader + InstructorReader + ?Sized,
{
    let department = repo
        .get_department_by_id(department_id)?
        .ok_or(ServiceError::NotFound)?;
    let instructors = repo.list_instructors()?;

    Ok(DepartmentFormData {
        department: Some(department),
        instructors,
    })
}

fn check_administrator<R>(repo: &R, instructor_id: Option<i32>) -> ServiceResult<()>
where
    R: InstructorReader + ?Sized,
{
    if let Some(instructor_id) = instructor_id {
        if repo.get_instructor_by_id(instructor_id)?.is_none() {
            return Err(ServiceError::Form(
                "The selected administrator no longer exists.".to_string(),
            ));
        }
    }
    Ok(())
}

/// Validates the form and persists a new department.
pub fn add_department<R>(repo: &R, form: DepartmentForm) -> ServiceResult<Department>
where
    R: InstructorReader + DepartmentWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please correct the form and try again.".to_string(),
        ));
    }

    check_administrator(repo, form.instructor_id)?;

    let new_department = NewDepartment::from(&form);

    Ok(repo.create_department(&new_department)?)
}

/// Validates the form and applies the updates to the department. A blank
/// administrator clears the position.
pub fn save_department<R>(
    repo: &R,
    department_id: i32,
    form: DepartmentForm,
) -> ServiceResult<Department>
where
    R: InstructorReader + DepartmentWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please correct the form and try again.".to_string(),
        ));
    }

    check_administrator(repo, form.instructor_id)?;

    let updates = UpdateDepartment::from(&form);

    Ok(repo.update_department(department_id, &updates)?)
}

/// Deletes the department. Its courses go with it.
pub fn delete_department<R>(repo: &R, department_id: i32) -> ServiceResult<()>
where
    R: DepartmentWriter + ?Sized,
{
    Ok(repo.delete_department(department_id)?)
}
