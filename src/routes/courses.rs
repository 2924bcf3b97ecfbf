use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::course::{AddCourseForm, EditCourseForm};
use crate::repository::DieselRepository;
use crate::routes::{SAVE_FAILED_MESSAGE, base_context, redirect, render_template};
use crate::services::{ServiceError, courses as courses_service};

#[get("/courses")]
pub async fn index(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match courses_service::load_index_page(repo.get_ref()) {
        Ok(courses) => {
            let mut context = base_context(&flash_messages, "courses");
            context.insert("courses", &courses);

            render_template(&tera, "courses/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list courses: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/courses/create")]
pub async fn create_form(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match courses_service::load_create_form(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "courses");
            context.insert("departments", &data.departments);

            render_template(&tera, "courses/create.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the course form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/courses/create")]
pub async fn create(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCourseForm>,
) -> impl Responder {
    match courses_service::add_course(repo.get_ref(), form) {
        Ok(_) => {
            FlashMessage::success("Course created.").send();
            redirect("/courses")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/courses/create")
        }
        Err(err) => {
            log::error!("Failed to create the course: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect("/courses/create")
        }
    }
}

#[get("/courses/{course_id}")]
pub async fn details(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match courses_service::load_course(repo.get_ref(), course_id.into_inner()) {
        Ok(row) => {
            let mut context = base_context(&flash_messages, "courses");
            context.insert("course", &row.course);
            context.insert("department_name", &row.department_name);

            render_template(&tera, "courses/details.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Course not found.").send();
            redirect("/courses")
        }
        Err(err) => {
            log::error!("Failed to load the course: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/courses/{course_id}/edit")]
pub async fn edit_form(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match courses_service::load_edit_form(repo.get_ref(), course_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "courses");
            context.insert("course", &data.course);
            context.insert("departments", &data.departments);

            render_template(&tera, "courses/edit.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Course not found.").send();
            redirect("/courses")
        }
        Err(err) => {
            log::error!("Failed to load the course: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/courses/{course_id}/edit")]
pub async fn edit(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<EditCourseForm>,
) -> impl Responder {
    let course_id = course_id.into_inner();

    match courses_service::save_course(repo.get_ref(), course_id, form) {
        Ok(_) => {
            FlashMessage::success("Course updated.").send();
            redirect("/courses")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/courses/{course_id}/edit"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Course not found.").send();
            redirect("/courses")
        }
        Err(err) => {
            log::error!("Failed to update the course: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect(&format!("/courses/{course_id}/edit"))
        }
    }
}

#[get("/courses/{course_id}/delete")]
pub async fn delete_form(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match courses_service::load_course(repo.get_ref(), course_id.into_inner()) {
        Ok(row) => {
            let mut context = base_context(&flash_messages, "courses");
            context.insert("course", &row.course);
            context.insert("department_name", &row.department_name);

            render_template(&tera, "courses/delete.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Course not found.").send();
            redirect("/courses")
        }
        Err(err) => {
            log::error!("Failed to load the course: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/courses/{course_id}/delete")]
pub async fn delete(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let course_id = course_id.into_inner();

    match courses_service::delete_course(repo.get_ref(), course_id) {
        Ok(()) => {
            FlashMessage::success("Course deleted.").send();
            redirect("/courses")
        }
        Err(ServiceError::NotFound) => redirect("/courses"),
        Err(err) => {
            log::error!("Failed to delete the course: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect(&format!("/courses/{course_id}/delete"))
        }
    }
}
