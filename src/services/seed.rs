//! First-run seeding with the sample school catalog.

use chrono::NaiveDate;

use crate::domain::course::NewCourse;
use crate::domain::department::NewDepartment;
use crate::domain::enrollment::{Grade, NewEnrollment};
use crate::domain::instructor::NewInstructor;
use crate::domain::student::{NewStudent, Student};
use crate::repository::{
    CourseWriter, DepartmentWriter, EnrollmentWriter, InstructorWriter, StudentListQuery,
    StudentReader, StudentWriter,
};
use crate::services::ServiceResult;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn new_student(last_name: &str, first_name: &str, enrollment_date: NaiveDate) -> NewStudent {
    NewStudent::new(last_name.to_string(), first_name.to_string(), enrollment_date)
}

fn new_instructor(last_name: &str, first_name: &str, hire_date: NaiveDate) -> NewInstructor {
    NewInstructor::new(last_name.to_string(), first_name.to_string(), hire_date)
}

fn enrollment(student: &Student, course_id: i32, grade: Option<Grade>) -> NewEnrollment {
    NewEnrollment {
        course_id,
        student_id: student.id,
        grade,
    }
}

/// Populates an empty database with the sample school: instructors,
/// departments, the course catalog, offices, teaching assignments,
/// students and their enrollments. Does nothing when students already
/// exist.
pub fn ensure_seed_data<R>(repo: &R) -> ServiceResult<()>
where
    R: StudentReader
        + StudentWriter
        + InstructorWriter
        + DepartmentWriter
        + CourseWriter
        + EnrollmentWriter
        + ?Sized,
{
    let (total, _) = repo.list_students(StudentListQuery::new().paginate(1, 1))?;
    if total > 0 {
        return Ok(());
    }

    log::info!("Empty database, seeding the sample school catalog");

    let abercrombie =
        repo.create_instructor(&new_instructor("Abercrombie", "Kim", date(1995, 3, 11)))?;
    let fakhouri =
        repo.create_instructor(&new_instructor("Fakhouri", "Fadi", date(2002, 7, 6)))?;
    let harui = repo.create_instructor(&new_instructor("Harui", "Roger", date(1998, 7, 1)))?;
    let kapoor =
        repo.create_instructor(&new_instructor("Kapoor", "Candace", date(2001, 1, 15)))?;
    let zheng = repo.create_instructor(&new_instructor("Zheng", "Roger", date(2004, 2, 12)))?;

    let semester_start = date(2007, 9, 1);
    let english = repo.create_department(&NewDepartment::new(
        "English".to_string(),
        350_000.0,
        semester_start,
        Some(abercrombie.id),
    ))?;
    let mathematics = repo.create_department(&NewDepartment::new(
        "Mathematics".to_string(),
        100_000.0,
        semester_start,
        Some(fakhouri.id),
    ))?;
    let engineering = repo.create_department(&NewDepartment::new(
        "Engineering".to_string(),
        350_000.0,
        semester_start,
        Some(harui.id),
    ))?;
    let economics = repo.create_department(&NewDepartment::new(
        "Economics".to_string(),
        100_000.0,
        semester_start,
        Some(kapoor.id),
    ))?;

    let chemistry = repo.create_course(&NewCourse::new(
        1050,
        "Chemistry".to_string(),
        3,
        engineering.id,
    ))?;
    let microeconomics = repo.create_course(&NewCourse::new(
        4022,
        "Microeconomics".to_string(),
        3,
        economics.id,
    ))?;
    let macroeconomics = repo.create_course(&NewCourse::new(
        4041,
        "Macroeconomics".to_string(),
        3,
        economics.id,
    ))?;
    let calculus = repo.create_course(&NewCourse::new(
        1045,
        "Calculus".to_string(),
        4,
        mathematics.id,
    ))?;
    let trigonometry = repo.create_course(&NewCourse::new(
        3141,
        "Trigonometry".to_string(),
        4,
        mathematics.id,
    ))?;
    let composition = repo.create_course(&NewCourse::new(
        2021,
        "Composition".to_string(),
        3,
        english.id,
    ))?;
    let literature = repo.create_course(&NewCourse::new(
        2042,
        "Literature".to_string(),
        4,
        english.id,
    ))?;

    repo.set_office_assignment(fakhouri.id, Some("Smith 17"))?;
    repo.set_office_assignment(harui.id, Some("Gowan 27"))?;
    repo.set_office_assignment(kapoor.id, Some("Thompson 304"))?;

    repo.set_course_assignments(abercrombie.id, &[composition.id, literature.id])?;
    repo.set_course_assignments(fakhouri.id, &[calculus.id])?;
    repo.set_course_assignments(harui.id, &[chemistry.id, trigonometry.id])?;
    repo.set_course_assignments(kapoor.id, &[chemistry.id])?;
    repo.set_course_assignments(zheng.id, &[microeconomics.id, macroeconomics.id])?;

    let alexander =
        repo.create_student(&new_student("Alexander", "Carson", date(2005, 9, 1)))?;
    let alonso = repo.create_student(&new_student("Alonso", "Meredith", date(2002, 9, 1)))?;
    let anand = repo.create_student(&new_student("Anand", "Arturo", date(2003, 9, 1)))?;
    let barzdukas = repo.create_student(&new_student("Barzdukas", "Gytis", date(2002, 9, 1)))?;
    let li = repo.create_student(&new_student("Li", "Yan", date(2002, 9, 1)))?;
    let justice = repo.create_student(&new_student("Justice", "Peggy", date(2001, 9, 1)))?;
    repo.create_student(&new_student("Norman", "Laura", date(2003, 9, 1)))?;
    repo.create_student(&new_student("Olivetto", "Nino", date(2005, 9, 1)))?;

    repo.create_enrollment(&enrollment(&alexander, chemistry.id, Some(Grade::A)))?;
    repo.create_enrollment(&enrollment(&alexander, microeconomics.id, Some(Grade::C)))?;
    repo.create_enrollment(&enrollment(&alexander, macroeconomics.id, Some(Grade::B)))?;
    repo.create_enrollment(&enrollment(&alonso, calculus.id, Some(Grade::B)))?;
    repo.create_enrollment(&enrollment(&alonso, trigonometry.id, Some(Grade::B)))?;
    repo.create_enrollment(&enrollment(&alonso, composition.id, Some(Grade::B)))?;
    repo.create_enrollment(&enrollment(&anand, chemistry.id, None))?;
    repo.create_enrollment(&enrollment(&anand, microeconomics.id, Some(Grade::B)))?;
    repo.create_enrollment(&enrollment(&barzdukas, chemistry.id, Some(Grade::B)))?;
    repo.create_enrollment(&enrollment(&li, composition.id, Some(Grade::B)))?;
    repo.create_enrollment(&enrollment(&justice, literature.id, Some(Grade::B)))?;

    log::info!("Seeded 5 instructors, 4 departments, 7 courses and 8 students");

    Ok(())
}
