//! Services handling student pages and mutations.

use validator::Validate;

use crate::domain::student::{NewStudent, Student, StudentSort, UpdateStudent};
use crate::dto::students::{
    StudentDetailsData, StudentEnrollmentRow, StudentIndexData, StudentIndexQuery,
};
use crate::forms::student::StudentForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{EnrollmentReader, StudentListQuery, StudentReader, StudentWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the searchable, sortable student list.
pub fn load_index_page<R>(repo: &R, query: StudentIndexQuery) -> ServiceResult<StudentIndexData>
where
    R: StudentReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let sort = query
        .sort
        .as_deref()
        .map(StudentSort::from)
        .unwrap_or_default();

    let search_query = query
        .q
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = StudentListQuery::new()
        .sort(sort)
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let (total, students) = repo.list_students(list_query)?;
    let students = Paginated::new(students, total, page, DEFAULT_ITEMS_PER_PAGE);

    // Each column header toggles between ascending and descending.
    let name_sort = match sort {
        StudentSort::LastNameAsc => StudentSort::LastNameDesc,
        _ => StudentSort::LastNameAsc,
    };
    let date_sort = match sort {
        StudentSort::EnrollmentDateAsc => StudentSort::EnrollmentDateDesc,
        _ => StudentSort::EnrollmentDateAsc,
    };

    Ok(StudentIndexData {
        students,
        search_query,
        sort: sort.to_string(),
        name_sort: name_sort.to_string(),
        date_sort: date_sort.to_string(),
    })
}

/// Loads one student together with their enrollment history.
pub fn load_details_page<R>(repo: &R, student_id: i32) -> ServiceResult<StudentDetailsData>
where
    R: StudentReader + EnrollmentReader + ?Sized,
{
    let student = repo
        .get_student_by_id(student_id)?
        .ok_or(ServiceError::NotFound)?;

    let enrollments = repo
        .list_enrollments_for_student(student_id)?
        .into_iter()
        .map(|(enrollment, course)| StudentEnrollmentRow {
            course_title: course.title,
            grade: enrollment.grade.map(|grade| grade.to_string()),
        })
        .collect();

    Ok(StudentDetailsData {
        student,
        enrollments,
    })
}

/// Loads the student shown on the edit and delete pages.
pub fn get_student<R>(repo: &R, student_id: i32) -> ServiceResult<Student>
where
    R: StudentReader + ?Sized,
{
    repo.get_student_by_id(student_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and persists a new student.
pub fn add_student<R>(repo: &R, form: StudentForm) -> ServiceResult<Student>
where
    R: StudentWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please correct the form and try again.".to_string(),
        ));
    }

    let new_student = NewStudent::from(&form);

    Ok(repo.create_student(&new_student)?)
}

/// Validates the form and applies the updates to the student.
pub fn save_student<R>(repo: &R, student_id: i32, form: StudentForm) -> ServiceResult<Student>
where
    R: StudentWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please correct the form and try again.".to_string(),
        ));
    }

    let updates = UpdateStudent::from(&form);

    Ok(repo.update_student(student_id, &updates)?)
}

/// Deletes the student; their enrollments go with them.
pub fn delete_student<R>(repo: &R, student_id: i32) -> ServiceResult<()>
where
    R: StudentWriter + ?Sized,
{
    Ok(repo.delete_student(student_id)?)
}
