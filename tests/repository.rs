use chrono::NaiveDate;

use contoso_university::domain::course::{NewCourse, UpdateCourse};
use contoso_university::domain::department::{NewDepartment, UpdateDepartment};
use contoso_university::domain::enrollment::{Grade, NewEnrollment};
use contoso_university::domain::instructor::NewInstructor;
use contoso_university::domain::student::{NewStudent, Student, StudentSort, UpdateStudent};
use contoso_university::repository::errors::RepositoryError;
use contoso_university::repository::{
    CourseReader, CourseWriter, DepartmentReader, DepartmentWriter, DieselRepository,
    EnrollmentReader, EnrollmentWriter, InstructorReader, InstructorWriter, StudentListQuery,
    StudentReader, StudentWriter,
};
use contoso_university::services::seed::ensure_seed_data;

mod common;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn names(students: &[Student]) -> Vec<&str> {
    students
        .iter()
        .map(|student| student.last_name.as_str())
        .collect()
}

#[test]
fn test_student_repository_crud() {
    let test_db = common::TestDb::new("test_student_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let alexander = repo
        .create_student(&NewStudent::new(
            "Alexander".into(),
            "Carson".into(),
            date(2005, 9, 1),
        ))
        .unwrap();
    let alonso = repo
        .create_student(&NewStudent::new(
            "Alonso".into(),
            "Meredith".into(),
            date(2002, 9, 1),
        ))
        .unwrap();

    let (total, students) = repo.list_students(StudentListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(students[0].last_name, "Alexander");

    let (matched, matches) = repo
        .list_students(StudentListQuery::new().search("lons"))
        .unwrap();
    assert_eq!(matched, 1);
    assert_eq!(matches[0].id, alonso.id);

    // First names match the search as well.
    let (by_first_name, _) = repo
        .list_students(StudentListQuery::new().search("Carson"))
        .unwrap();
    assert_eq!(by_first_name, 1);

    let updated = repo
        .update_student(
            alexander.id,
            &UpdateStudent::new("Alexandrova".into(), "Carson".into(), date(2005, 9, 1)),
        )
        .unwrap();
    assert_eq!(updated.id, alexander.id);
    assert_eq!(updated.last_name, "Alexandrova");

    repo.delete_student(alonso.id).unwrap();
    assert!(repo.get_student_by_id(alonso.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_student(alonso.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_student_list_counts_before_slicing() {
    let test_db = common::TestDb::new("test_student_list_pagination.db");
    let repo = DieselRepository::new(test_db.pool());

    // Last names A through J, enrolled a day apart so both sort orders are
    // deterministic.
    for (i, letter) in ('A'..='J').enumerate() {
        let enrolled = date(2005, 9, 1) + chrono::Duration::days(i as i64);
        repo.create_student(&NewStudent::new(
            letter.to_string(),
            "Test".into(),
            enrolled,
        ))
        .unwrap();
    }

    let (total, first_page) = repo
        .list_students(StudentListQuery::new().paginate(1, 3))
        .unwrap();
    assert_eq!(total, 10);
    assert_eq!(names(&first_page), ["A", "B", "C"]);

    let (_, second_page) = repo
        .list_students(StudentListQuery::new().paginate(2, 3))
        .unwrap();
    assert_eq!(names(&second_page), ["D", "E", "F"]);

    let (_, last_page) = repo
        .list_students(StudentListQuery::new().paginate(4, 3))
        .unwrap();
    assert_eq!(names(&last_page), ["J"]);

    // Past the end the slice is empty but the count still covers every match.
    let (total_past_end, past_end) = repo
        .list_students(StudentListQuery::new().paginate(99, 3))
        .unwrap();
    assert_eq!(total_past_end, 10);
    assert!(past_end.is_empty());

    // Page zero reads as the first page.
    let (_, from_zero) = repo
        .list_students(StudentListQuery::new().paginate(0, 3))
        .unwrap();
    assert_eq!(names(&from_zero), ["A", "B", "C"]);

    let (_, newest_first) = repo
        .list_students(
            StudentListQuery::new()
                .sort(StudentSort::EnrollmentDateDesc)
                .paginate(1, 3),
        )
        .unwrap();
    assert_eq!(names(&newest_first), ["J", "I", "H"]);

    let (_, reversed) = repo
        .list_students(StudentListQuery::new().sort(StudentSort::LastNameDesc).paginate(1, 3))
        .unwrap();
    assert_eq!(names(&reversed), ["J", "I", "H"]);

    // Search and pagination combine; the count covers the filtered set only.
    let (matched, _) = repo
        .list_students(StudentListQuery::new().search("A").paginate(1, 3))
        .unwrap();
    assert_eq!(matched, 1);
}

#[test]
fn test_enrollment_date_groups() {
    let test_db = common::TestDb::new("test_enrollment_date_groups.db");
    let repo = DieselRepository::new(test_db.pool());

    for (last_name, enrolled) in [
        ("Alexander", date(2005, 9, 1)),
        ("Alonso", date(2002, 9, 1)),
        ("Barzdukas", date(2002, 9, 1)),
        ("Li", date(2002, 9, 1)),
    ] {
        repo.create_student(&NewStudent::new(last_name.into(), "Test".into(), enrolled))
            .unwrap();
    }

    let groups = repo.enrollment_date_groups().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].enrollment_date, date(2002, 9, 1));
    assert_eq!(groups[0].student_count, 3);
    assert_eq!(groups[1].enrollment_date, date(2005, 9, 1));
    assert_eq!(groups[1].student_count, 1);
}

#[test]
fn test_course_repository_crud() {
    let test_db = common::TestDb::new("test_course_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let engineering = repo
        .create_department(&NewDepartment::new(
            "Engineering".into(),
            350_000.0,
            date(2007, 9, 1),
            None,
        ))
        .unwrap();
    let mathematics = repo
        .create_department(&NewDepartment::new(
            "Mathematics".into(),
            100_000.0,
            date(2007, 9, 1),
            None,
        ))
        .unwrap();

    // The registrar picks the course number.
    let chemistry = repo
        .create_course(&NewCourse::new(1050, "Chemistry".into(), 3, engineering.id))
        .unwrap();
    assert_eq!(chemistry.id, 1050);
    repo.create_course(&NewCourse::new(1045, "Calculus".into(), 4, mathematics.id))
        .unwrap();

    let listed = repo.list_courses().unwrap();
    assert_eq!(listed.len(), 2);
    let (course, department) = repo.get_course_with_department(1050).unwrap().unwrap();
    assert_eq!(course.title, "Chemistry");
    assert_eq!(department.name, "Engineering");

    // A duplicate course number is a constraint violation, not a panic.
    let duplicate = repo.create_course(&NewCourse::new(1050, "Chemistry II".into(), 3, engineering.id));
    assert!(matches!(
        duplicate,
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let moved = repo
        .update_course(
            1050,
            &UpdateCourse::new("Organic Chemistry".into(), 4, mathematics.id),
        )
        .unwrap();
    assert_eq!(moved.id, 1050);
    assert_eq!(moved.title, "Organic Chemistry");
    assert_eq!(moved.department_id, mathematics.id);

    repo.delete_course(1050).unwrap();
    assert!(repo.get_course_by_id(1050).unwrap().is_none());
    assert!(matches!(
        repo.delete_course(1050),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_office_assignment_upsert() {
    let test_db = common::TestDb::new("test_office_assignment_upsert.db");
    let repo = DieselRepository::new(test_db.pool());

    let harui = repo
        .create_instructor(&NewInstructor::new(
            "Harui".into(),
            "Roger".into(),
            date(1998, 7, 1),
        ))
        .unwrap();

    assert!(repo.get_office_assignment(harui.id).unwrap().is_none());

    repo.set_office_assignment(harui.id, Some("Gowan 27")).unwrap();
    let office = repo.get_office_assignment(harui.id).unwrap().unwrap();
    assert_eq!(office.location, "Gowan 27");

    // Second write replaces the existing row.
    repo.set_office_assignment(harui.id, Some("Thompson 304")).unwrap();
    let office = repo.get_office_assignment(harui.id).unwrap().unwrap();
    assert_eq!(office.location, "Thompson 304");

    // A blank location vacates the office.
    repo.set_office_assignment(harui.id, None).unwrap();
    assert!(repo.get_office_assignment(harui.id).unwrap().is_none());
}

#[test]
fn test_course_assignments_replace_the_previous_set() {
    let test_db = common::TestDb::new("test_course_assignments_replace.db");
    let repo = DieselRepository::new(test_db.pool());

    let engineering = repo
        .create_department(&NewDepartment::new(
            "Engineering".into(),
            350_000.0,
            date(2007, 9, 1),
            None,
        ))
        .unwrap();
    repo.create_course(&NewCourse::new(1050, "Chemistry".into(), 3, engineering.id))
        .unwrap();
    repo.create_course(&NewCourse::new(3141, "Trigonometry".into(), 4, engineering.id))
        .unwrap();
    repo.create_course(&NewCourse::new(2021, "Composition".into(), 3, engineering.id))
        .unwrap();

    let harui = repo
        .create_instructor(&NewInstructor::new(
            "Harui".into(),
            "Roger".into(),
            date(1998, 7, 1),
        ))
        .unwrap();

    assert_eq!(repo.set_course_assignments(harui.id, &[1050, 3141]).unwrap(), 2);
    let mut assigned = repo.list_assigned_course_ids(harui.id).unwrap();
    assigned.sort_unstable();
    assert_eq!(assigned, [1050, 3141]);

    // The new set fully replaces the old one.
    assert_eq!(repo.set_course_assignments(harui.id, &[2021]).unwrap(), 1);
    assert_eq!(repo.list_assigned_course_ids(harui.id).unwrap(), [2021]);

    let taught = repo.list_courses_for_instructor(harui.id).unwrap();
    assert_eq!(taught.len(), 1);
    assert_eq!(taught[0].0.title, "Composition");

    assert_eq!(repo.set_course_assignments(harui.id, &[]).unwrap(), 0);
    assert!(repo.list_assigned_course_ids(harui.id).unwrap().is_empty());
}

#[test]
fn test_instructor_listing_with_details() {
    let test_db = common::TestDb::new("test_instructor_listing.db");
    let repo = DieselRepository::new(test_db.pool());

    let engineering = repo
        .create_department(&NewDepartment::new(
            "Engineering".into(),
            350_000.0,
            date(2007, 9, 1),
            None,
        ))
        .unwrap();
    repo.create_course(&NewCourse::new(1050, "Chemistry".into(), 3, engineering.id))
        .unwrap();

    let zheng = repo
        .create_instructor(&NewInstructor::new(
            "Zheng".into(),
            "Roger".into(),
            date(2004, 2, 12),
        ))
        .unwrap();
    let harui = repo
        .create_instructor(&NewInstructor::new(
            "Harui".into(),
            "Roger".into(),
            date(1998, 7, 1),
        ))
        .unwrap();

    repo.set_office_assignment(harui.id, Some("Gowan 27")).unwrap();
    repo.set_course_assignments(harui.id, &[1050]).unwrap();

    let rows = repo.list_instructors_with_details().unwrap();
    assert_eq!(rows.len(), 2);

    // Ordered by last name, with office and courses attached per row.
    let (first, office, courses) = &rows[0];
    assert_eq!(first.id, harui.id);
    assert_eq!(office.as_ref().unwrap().location, "Gowan 27");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Chemistry");

    let (second, office, courses) = &rows[1];
    assert_eq!(second.id, zheng.id);
    assert!(office.is_none());
    assert!(courses.is_empty());
}

#[test]
fn test_department_administrators() {
    let test_db = common::TestDb::new("test_department_administrators.db");
    let repo = DieselRepository::new(test_db.pool());

    let fakhouri = repo
        .create_instructor(&NewInstructor::new(
            "Fakhouri".into(),
            "Fadi".into(),
            date(2002, 7, 6),
        ))
        .unwrap();

    let mathematics = repo
        .create_department(&NewDepartment::new(
            "Mathematics".into(),
            100_000.0,
            date(2007, 9, 1),
            Some(fakhouri.id),
        ))
        .unwrap();
    repo.create_department(&NewDepartment::new(
        "English".into(),
        350_000.0,
        date(2007, 9, 1),
        None,
    ))
    .unwrap();

    let rows = repo.list_departments_with_administrators().unwrap();
    assert_eq!(rows.len(), 2);
    // Ordered by department name.
    assert_eq!(rows[0].0.name, "English");
    assert!(rows[0].1.is_none());
    assert_eq!(rows[1].1.as_ref().unwrap().id, fakhouri.id);

    // Saving without an administrator clears the position.
    let vacated = repo
        .update_department(
            mathematics.id,
            &UpdateDepartment::new("Mathematics".into(), 100_000.0, date(2007, 9, 1), None),
        )
        .unwrap();
    assert!(vacated.instructor_id.is_none());
}

#[test]
fn test_enrollment_rosters() {
    let test_db = common::TestDb::new("test_enrollment_rosters.db");
    let repo = DieselRepository::new(test_db.pool());

    let economics = repo
        .create_department(&NewDepartment::new(
            "Economics".into(),
            100_000.0,
            date(2007, 9, 1),
            None,
        ))
        .unwrap();
    repo.create_course(&NewCourse::new(4022, "Microeconomics".into(), 3, economics.id))
        .unwrap();
    repo.create_course(&NewCourse::new(4041, "Macroeconomics".into(), 3, economics.id))
        .unwrap();

    let alexander = repo
        .create_student(&NewStudent::new(
            "Alexander".into(),
            "Carson".into(),
            date(2005, 9, 1),
        ))
        .unwrap();
    let anand = repo
        .create_student(&NewStudent::new(
            "Anand".into(),
            "Arturo".into(),
            date(2003, 9, 1),
        ))
        .unwrap();

    repo.create_enrollment(&NewEnrollment {
        course_id: 4022,
        student_id: alexander.id,
        grade: Some(Grade::C),
    })
    .unwrap();
    repo.create_enrollment(&NewEnrollment {
        course_id: 4041,
        student_id: alexander.id,
        grade: Some(Grade::B),
    })
    .unwrap();
    repo.create_enrollment(&NewEnrollment {
        course_id: 4022,
        student_id: anand.id,
        grade: None,
    })
    .unwrap();

    // A student's enrollments come back ordered by course title.
    let transcript = repo.list_enrollments_for_student(alexander.id).unwrap();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].1.title, "Macroeconomics");
    assert_eq!(transcript[0].0.grade, Some(Grade::B));

    // A course roster comes back ordered by student last name.
    let roster = repo.list_enrollments_for_course(4022).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].1.last_name, "Alexander");
    assert_eq!(roster[1].0.grade, None);
}

#[test]
fn test_deletes_cascade() {
    let test_db = common::TestDb::new("test_deletes_cascade.db");
    let repo = DieselRepository::new(test_db.pool());

    let kapoor = repo
        .create_instructor(&NewInstructor::new(
            "Kapoor".into(),
            "Candace".into(),
            date(2001, 1, 15),
        ))
        .unwrap();
    let economics = repo
        .create_department(&NewDepartment::new(
            "Economics".into(),
            100_000.0,
            date(2007, 9, 1),
            Some(kapoor.id),
        ))
        .unwrap();
    repo.create_course(&NewCourse::new(4022, "Microeconomics".into(), 3, economics.id))
        .unwrap();
    repo.set_office_assignment(kapoor.id, Some("Thompson 304")).unwrap();
    repo.set_course_assignments(kapoor.id, &[4022]).unwrap();

    let justice = repo
        .create_student(&NewStudent::new(
            "Justice".into(),
            "Peggy".into(),
            date(2001, 9, 1),
        ))
        .unwrap();
    repo.create_enrollment(&NewEnrollment {
        course_id: 4022,
        student_id: justice.id,
        grade: Some(Grade::B),
    })
    .unwrap();

    // Removing the student takes their enrollments along.
    repo.delete_student(justice.id).unwrap();
    assert!(repo.list_enrollments_for_course(4022).unwrap().is_empty());

    // Removing the instructor vacates the department and drops their
    // office and teaching assignments.
    repo.delete_instructor(kapoor.id).unwrap();
    let department = repo.get_department_by_id(economics.id).unwrap().unwrap();
    assert!(department.instructor_id.is_none());
    let taught = repo.list_courses_for_instructor(kapoor.id).unwrap();
    assert!(taught.is_empty());

    // Removing the department takes its courses along.
    repo.delete_department(economics.id).unwrap();
    assert!(repo.get_course_by_id(4022).unwrap().is_none());
}

#[test]
fn test_seed_data_is_inserted_once() {
    let test_db = common::TestDb::new("test_seed_data_is_inserted_once.db");
    let repo = DieselRepository::new(test_db.pool());

    ensure_seed_data(&repo).unwrap();
    // A second pass over an already populated database changes nothing.
    ensure_seed_data(&repo).unwrap();

    let (total, students) = repo
        .list_students(StudentListQuery::new().paginate(1, 100))
        .unwrap();
    assert_eq!(total, 8);
    assert_eq!(students.len(), 8);
    assert_eq!(repo.list_instructors().unwrap().len(), 5);
    assert_eq!(repo.list_departments().unwrap().len(), 4);
    assert_eq!(repo.list_courses().unwrap().len(), 7);

    // Chemistry's roster carries the three sample enrollments.
    assert_eq!(repo.list_enrollments_for_course(1050).unwrap().len(), 3);

    let fakhouri = repo
        .list_instructors()
        .unwrap()
        .into_iter()
        .find(|i| i.last_name == "Fakhouri")
        .unwrap();
    let office = repo.get_office_assignment(fakhouri.id).unwrap().unwrap();
    assert_eq!(office.location, "Smith 17");
}
