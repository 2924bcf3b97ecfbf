//! Services handling instructor pages, including the master-detail index
//! that expands a selected instructor and course.

use validator::Validate;

use crate::domain::instructor::{Instructor, NewInstructor, UpdateInstructor};
use crate::dto::courses::CourseRow;
use crate::dto::instructors::{
    AssignedCourseOption, EnrolledStudentRow, InstructorDetailsData, InstructorFormData,
    InstructorIndexData, InstructorIndexQuery, InstructorRow, TaughtCourseRow,
};
use crate::forms::instructor::InstructorForm;
use crate::repository::{
    CourseReader, EnrollmentReader, InstructorReader, InstructorWriter,
};
use crate::services::{ServiceError, ServiceResult};

/// Loads the instructor table plus the optional course and roster panels
/// for the selected instructor and course.
pub fn load_index_page<R>(repo: &R, query: InstructorIndexQuery) -> ServiceResult<InstructorIndexData>
where
    R: InstructorReader + CourseReader + EnrollmentReader + ?Sized,
{
    let instructors = repo
        .list_instructors_with_details()?
        .into_iter()
        .map(|(instructor, office, courses)| InstructorRow {
            selected: query.id == Some(instructor.id),
            office_location: office.map(|office| office.location),
            instructor,
            courses,
        })
        .collect();

    let courses = match query.id {
        Some(instructor_id) => repo
            .list_courses_for_instructor(instructor_id)?
            .into_iter()
            .map(|(course, department)| TaughtCourseRow {
                selected: query.course_id == Some(course.id),
                course,
                department_name: department.name,
            })
            .collect(),
        None => Vec::new(),
    };

    let enrollments = match query.course_id {
        Some(course_id) => repo
            .list_enrollments_for_course(course_id)?
            .into_iter()
            .map(|(enrollment, student)| EnrolledStudentRow {
                student_name: format!("{} {}", student.first_name, student.last_name),
                grade: enrollment.grade.map(|grade| grade.to_string()),
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(InstructorIndexData {
        instructors,
        courses,
        enrollments,
    })
}

/// Loads the instructor shown on the delete confirmation page.
pub fn get_instructor<R>(repo: &R, instructor_id: i32) -> ServiceResult<Instructor>
where
    R: InstructorReader + ?Sized,
{
    repo.get_instructor_by_id(instructor_id)?
        .ok_or(ServiceError::NotFound)
}

/// Loads the instructor with their office and taught courses for the
/// details page.
pub fn load_details_page<R>(repo: &R, instructor_id: i32) -> ServiceResult<InstructorDetailsData>
where
    R: InstructorReader + CourseReader + ?Sized,
{
    let instructor = repo
        .get_instructor_by_id(instructor_id)?
        .ok_or(ServiceError::NotFound)?;
    let office_location = repo
        .get_office_assignment(instructor_id)?
        .map(|office| office.location);
    let courses = repo
        .list_courses_for_instructor(instructor_id)?
        .into_iter()
        .map(CourseRow::from)
        .collect();

    Ok(InstructorDetailsData {
        instructor,
        office_location,
        courses,
    })
}

/// Loads the course checkboxes for the create form.
pub fn load_create_form<R>(repo: &R) -> ServiceResult<InstructorFormData>
where
    R: CourseReader + ?Sized,
{
    let courses = repo
        .list_courses()?
        .into_iter()
        .map(|(course, _)| AssignedCourseOption {
            course,
            assigned: false,
        })
        .collect();

    Ok(InstructorFormData {
        instructor: None,
        office_location: None,
        courses,
    })
}

/// Loads the instructor, their office and the course checkboxes for the
/// edit form.
pub fn load_edit_form<R>(repo: &R, instructor_id: i32) -> ServiceResult<InstructorFormData>
where
    R: InstructorReader + CourseReader + ?Sized,
{
    let instructor = repo
        .get_instructor_by_id(instructor_id)?
        .ok_or(ServiceError::NotFound)?;
    let office_location = repo
        .get_office_assignment(instructor_id)?
        .map(|office| office.location);
    let assigned = repo.list_assigned_course_ids(instructor_id)?;

    let courses = repo
        .list_courses()?
        .into_iter()
        .map(|(course, _)| AssignedCourseOption {
            assigned: assigned.contains(&course.id),
            course,
        })
        .collect();

    Ok(InstructorFormData {
        instructor: Some(instructor),
        office_location,
        courses,
    })
}

fn parse_form(body: &[u8]) -> ServiceResult<InstructorForm> {
    let form = InstructorForm::parse(body).map_err(|err| {
        log::error!("Failed to parse form: {err}");
        ServiceError::Form("Please correct the form and try again.".to_string())
    })?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please correct the form and try again.".to_string(),
        ));
    }

    Ok(form)
}

fn check_course_ids<R>(repo: &R, course_ids: &[i32]) -> ServiceResult<()>
where
    R: CourseReader + ?Sized,
{
    for course_id in course_ids {
        if repo.get_course_by_id(*course_id)?.is_none() {
            return Err(ServiceError::Form(
                "One of the selected courses no longer exists.".to_string(),
            ));
        }
    }
    Ok(())
}

/// Parses and validates the raw form body, then persists a new instructor
/// with their office and teaching assignments.
pub fn add_instructor<R>(repo: &R, body: &[u8]) -> ServiceResult<Instructor>
where
    R: CourseReader + InstructorWriter + ?Sized,
{
    let form = parse_form(body)?;
    check_course_ids(repo, &form.course_ids)?;

    let new_instructor = NewInstructor::from(&form);
    let instructor = repo.create_instructor(&new_instructor)?;

    repo.set_office_assignment(instructor.id, form.office_location.as_deref())?;
    repo.set_course_assignments(instructor.id, &form.course_ids)?;

    Ok(instructor)
}

/// Parses and validates the raw form body, then applies the updates to the
/// instructor, their office and teaching assignments.
pub fn save_instructor<R>(repo: &R, instructor_id: i32, body: &[u8]) -> ServiceResult<Instructor>
where
    R: CourseReader + InstructorWriter + ?Sized,
{
    let form = parse_form(body)?;
    check_course_ids(repo, &form.course_ids)?;

    let updates = UpdateInstructor::from(&form);
    let instructor = repo.update_instructor(instructor_id, &updates)?;

    repo.set_office_assignment(instructor_id, form.office_location.as_deref())?;
    repo.set_course_assignments(instructor_id, &form.course_ids)?;

    Ok(instructor)
}

/// Deletes the instructor. Their office and teaching assignments go with
/// them, and any department they administered becomes vacant.
pub fn delete_instructor<R>(repo: &R, instructor_id: i32) -> ServiceResult<()>
where
    R: InstructorWriter + ?Sized,
{
    Ok(repo.delete_instructor(instructor_id)?)
}
