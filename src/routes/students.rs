use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::students::StudentIndexQuery;
use crate::forms::student::StudentForm;
use crate::repository::DieselRepository;
use crate::routes::{SAVE_FAILED_MESSAGE, base_context, redirect, render_template};
use crate::services::{ServiceError, students as students_service};

#[get("/students")]
pub async fn index(
    query: web::Query<StudentIndexQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match students_service::load_index_page(repo.get_ref(), query.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "students");
            context.insert("students", &data.students);
            context.insert("search_query", &data.search_query);
            context.insert("sort", &data.sort);
            context.insert("name_sort", &data.name_sort);
            context.insert("date_sort", &data.date_sort);

            render_template(&tera, "students/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list students: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/students/create")]
pub async fn create_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "students");

    render_template(&tera, "students/create.html", &context)
}

#[post("/students/create")]
pub async fn create(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<StudentForm>,
) -> impl Responder {
    match students_service::add_student(repo.get_ref(), form) {
        Ok(_) => {
            FlashMessage::success("Student created.").send();
            redirect("/students")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/students/create")
        }
        Err(err) => {
            log::error!("Failed to create the student: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect("/students/create")
        }
    }
}

#[get("/students/{student_id}")]
pub async fn details(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match students_service::load_details_page(repo.get_ref(), student_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "students");
            context.insert("student", &data.student);
            context.insert("enrollments", &data.enrollments);

            render_template(&tera, "students/details.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/students")
        }
        Err(err) => {
            log::error!("Failed to load the student: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/students/{student_id}/edit")]
pub async fn edit_form(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match students_service::get_student(repo.get_ref(), student_id.into_inner()) {
        Ok(student) => {
            let mut context = base_context(&flash_messages, "students");
            context.insert("student", &student);

            render_template(&tera, "students/edit.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/students")
        }
        Err(err) => {
            log::error!("Failed to load the student: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/students/{student_id}/edit")]
pub async fn edit(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<StudentForm>,
) -> impl Responder {
    let student_id = student_id.into_inner();

    match students_service::save_student(repo.get_ref(), student_id, form) {
        Ok(_) => {
            FlashMessage::success("Student updated.").send();
            redirect("/students")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/students/{student_id}/edit"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/students")
        }
        Err(err) => {
            log::error!("Failed to update the student: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect(&format!("/students/{student_id}/edit"))
        }
    }
}

#[get("/students/{student_id}/delete")]
pub async fn delete_form(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match students_service::get_student(repo.get_ref(), student_id.into_inner()) {
        Ok(student) => {
            let mut context = base_context(&flash_messages, "students");
            context.insert("student", &student);

            render_template(&tera, "students/delete.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/students")
        }
        Err(err) => {
            log::error!("Failed to load the student: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/students/{student_id}/delete")]
pub async fn delete(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let student_id = student_id.into_inner();

    match students_service::delete_student(repo.get_ref(), student_id) {
        Ok(()) => {
            FlashMessage::success("Student deleted.").send();
            redirect("/students")
        }
        // Someone else already removed them; the end state is the same.
        Err(ServiceError::NotFound) => redirect("/students"),
        Err(err) => {
            log::error!("Failed to delete the student: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect(&format!("/students/{student_id}/delete"))
        }
    }
}
