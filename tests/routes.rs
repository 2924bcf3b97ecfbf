use actix_web::body::MessageBody;
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, Level};
use tera::Tera;

use contoso_university::repository::{
    DepartmentReader, DieselRepository, InstructorReader,
};
use contoso_university::routes::{self, alert_level_to_str};
use contoso_university::services::seed::ensure_seed_data;

mod common;

const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Builds the application the way `run` does, minus the pieces the tests
/// never touch (static files, compression, request logging).
fn school_app(
    repo: DieselRepository,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let message_store = CookieMessageStore::builder(Key::from(TEST_SECRET.as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();
    let tera = Tera::new("templates/**/*.html").expect("templates should parse");

    App::new()
        .wrap(message_framework)
        .service(routes::main::index)
        .service(routes::main::about)
        .service(routes::students::index)
        .service(routes::students::create_form)
        .service(routes::students::create)
        .service(routes::students::details)
        .service(routes::students::edit_form)
        .service(routes::students::edit)
        .service(routes::students::delete_form)
        .service(routes::students::delete)
        .service(routes::courses::index)
        .service(routes::courses::create_form)
        .service(routes::courses::create)
        .service(routes::courses::details)
        .service(routes::courses::edit_form)
        .service(routes::courses::edit)
        .service(routes::courses::delete_form)
        .service(routes::courses::delete)
        .service(routes::instructors::index)
        .service(routes::instructors::create_form)
        .service(routes::instructors::create)
        .service(routes::instructors::details)
        .service(routes::instructors::edit_form)
        .service(routes::instructors::edit)
        .service(routes::instructors::delete_form)
        .service(routes::instructors::delete)
        .service(routes::departments::index)
        .service(routes::departments::create_form)
        .service(routes::departments::create)
        .service(routes::departments::details)
        .service(routes::departments::edit_form)
        .service(routes::departments::edit)
        .service(routes::departments::delete_form)
        .service(routes::departments::delete)
        .app_data(web::Data::new(tera))
        .app_data(web::Data::new(repo))
}

fn seeded_repo(db_name: &str) -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new(db_name);
    let repo = DieselRepository::new(test_db.pool());
    ensure_seed_data(&repo).expect("seeding should succeed");
    (test_db, repo)
}

macro_rules! get_body {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {}", $uri);
        let body = test::read_body(resp).await;
        String::from_utf8_lossy(&body).into_owned()
    }};
}

#[actix_web::test]
async fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn test_home_page_renders() {
    let (_db, repo) = seeded_repo("test_home_page.db");
    let app = test::init_service(school_app(repo)).await;

    let body = get_body!(&app, "/");
    assert!(body.contains("Contoso University"));
}

#[actix_web::test]
async fn test_students_index_is_paginated() {
    let (_db, repo) = seeded_repo("test_students_index.db");
    let app = test::init_service(school_app(repo)).await;

    // Three students per page, sorted by last name.
    let first_page = get_body!(&app, "/students");
    assert!(first_page.contains("Alexander"));
    assert!(first_page.contains("Alonso"));
    assert!(first_page.contains("Anand"));
    assert!(!first_page.contains("Barzdukas"));

    let last_page = get_body!(&app, "/students?page=3");
    assert!(last_page.contains("Norman"));
    assert!(last_page.contains("Olivetto"));
    assert!(!last_page.contains("Alexander"));
}

#[actix_web::test]
async fn test_students_sort_tokens_flip_the_order() {
    let (_db, repo) = seeded_repo("test_students_sort.db");
    let app = test::init_service(school_app(repo)).await;

    let descending = get_body!(&app, "/students?sort=name_desc");
    assert!(descending.contains("Olivetto"));
    assert!(!descending.contains("Alexander"));

    let by_date = get_body!(&app, "/students?sort=date");
    // Justice enrolled in 2001, earlier than everyone else.
    assert!(by_date.contains("Justice"));
}

#[actix_web::test]
async fn test_students_search_narrows_the_list() {
    let (_db, repo) = seeded_repo("test_students_search.db");
    let app = test::init_service(school_app(repo)).await;

    let body = get_body!(&app, "/students?q=Al");
    assert!(body.contains("Alexander"));
    assert!(body.contains("Alonso"));
    assert!(!body.contains("Anand"));
    assert!(!body.contains("Barzdukas"));
}

#[actix_web::test]
async fn test_student_create_persists_and_redirects() {
    let (_db, repo) = seeded_repo("test_student_create.db");
    let app = test::init_service(school_app(repo)).await;

    let req = test::TestRequest::post()
        .uri("/students/create")
        .set_form([
            ("last_name", "Tester"),
            ("first_name", "New"),
            ("enrollment_date", "2024-09-01"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/students");

    let body = get_body!(&app, "/students?q=Tester");
    assert!(body.contains("Tester"));
}

#[actix_web::test]
async fn test_student_create_rejects_a_blank_name() {
    let (_db, repo) = seeded_repo("test_student_create_blank.db");
    let app = test::init_service(school_app(repo)).await;

    let req = test::TestRequest::post()
        .uri("/students/create")
        .set_form([
            ("last_name", ""),
            ("first_name", "New"),
            ("enrollment_date", "2024-09-01"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/students/create"
    );
}

#[actix_web::test]
async fn test_missing_student_redirects_to_the_list() {
    let (_db, repo) = seeded_repo("test_missing_student.db");
    let app = test::init_service(school_app(repo)).await;

    let req = test::TestRequest::get().uri("/students/99999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/students");
}

#[actix_web::test]
async fn test_course_create_rejects_a_taken_number() {
    let (_db, repo) = seeded_repo("test_course_taken_number.db");
    let departments = repo.list_departments().expect("departments should list");
    let department_id = departments[0].id.to_string();

    let app = test::init_service(school_app(repo)).await;

    // 1050 is already taken by Chemistry.
    let req = test::TestRequest::post()
        .uri("/courses/create")
        .set_form([
            ("id", "1050"),
            ("title", "Chemistry II"),
            ("credits", "3"),
            ("department_id", department_id.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/courses/create"
    );
}

#[actix_web::test]
async fn test_courses_index_shows_department_names() {
    let (_db, repo) = seeded_repo("test_courses_index.db");
    let app = test::init_service(school_app(repo)).await;

    let body = get_body!(&app, "/courses");
    assert!(body.contains("Chemistry"));
    assert!(body.contains("Engineering"));
    assert!(body.contains("Macroeconomics"));
    assert!(body.contains("Economics"));
}

#[actix_web::test]
async fn test_instructor_master_detail_drill_down() {
    let (_db, repo) = seeded_repo("test_instructor_drill_down.db");
    let harui = repo
        .list_instructors()
        .expect("instructors should list")
        .into_iter()
        .find(|instructor| instructor.last_name == "Harui")
        .expect("Harui should be seeded");

    let app = test::init_service(school_app(repo)).await;

    let body = get_body!(&app, &format!("/instructors?id={}", harui.id));
    assert!(body.contains("Gowan 27"));
    assert!(body.contains("Courses taught by the selected instructor"));
    assert!(body.contains("Chemistry"));
    assert!(body.contains("Trigonometry"));

    let body = get_body!(&app, &format!("/instructors?id={}&course_id=1050", harui.id));
    assert!(body.contains("Students enrolled in the selected course"));
    assert!(body.contains("Carson Alexander"));
}

#[actix_web::test]
async fn test_instructor_create_parses_checkbox_lists() {
    let (_db, repo) = seeded_repo("test_instructor_create.db");
    let app = test::init_service(school_app(repo)).await;

    let req = test::TestRequest::post()
        .uri("/instructors/create")
        .insert_header(header::ContentType::form_url_encoded())
        .set_payload(
            "last_name=Newhire&first_name=Pat&hire_date=2020-01-02\
             &office_location=Smith+12&course_ids=1050&course_ids=1045",
        )
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/instructors"
    );

    let body = get_body!(&app, "/instructors");
    assert!(body.contains("Newhire"));
    assert!(body.contains("Smith 12"));
    assert!(body.contains("Calculus"));
}

#[actix_web::test]
async fn test_departments_index_names_administrators() {
    let (_db, repo) = seeded_repo("test_departments_index.db");
    let app = test::init_service(school_app(repo)).await;

    let body = get_body!(&app, "/departments");
    assert!(body.contains("English"));
    assert!(body.contains("Kim Abercrombie"));
}

#[actix_web::test]
async fn test_about_page_groups_by_enrollment_date() {
    let (_db, repo) = seeded_repo("test_about_page.db");
    let app = test::init_service(school_app(repo)).await;

    let body = get_body!(&app, "/about");
    assert!(body.contains("2002-09-01"));
    assert!(body.contains("2005-09-01"));
}
