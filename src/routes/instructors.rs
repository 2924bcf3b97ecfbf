use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::instructors::InstructorIndexQuery;
use crate::repository::DieselRepository;
use crate::routes::{SAVE_FAILED_MESSAGE, base_context, redirect, render_template};
use crate::services::{ServiceError, instructors as instructors_service};

#[get("/instructors")]
pub async fn index(
    query: web::Query<InstructorIndexQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    let selected_instructor = query.id;
    let selected_course = query.course_id;

    match instructors_service::load_index_page(repo.get_ref(), query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "instructors");
            context.insert("instructors", &data.instructors);
            context.insert("courses", &data.courses);
            context.insert("enrollments", &data.enrollments);
            context.insert("selected_instructor", &selected_instructor);
            context.insert("selected_course", &selected_course);

            render_template(&tera, "instructors/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list instructors: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/instructors/create")]
pub async fn create_form(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match instructors_service::load_create_form(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "instructors");
            context.insert("courses", &data.courses);

            render_template(&tera, "instructors/create.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the instructor form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/instructors/create")]
pub async fn create(repo: web::Data<DieselRepository>, body: web::Bytes) -> impl Responder {
    match instructors_service::add_instructor(repo.get_ref(), body.as_ref()) {
        Ok(_) => {
            FlashMessage::success("Instructor created.").send();
            redirect("/instructors")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/instructors/create")
        }
        Err(err) => {
            log::error!("Failed to create the instructor: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect("/instructors/create")
        }
    }
}

#[get("/instructors/{instructor_id}")]
pub async fn details(
    instructor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match instructors_service::load_details_page(repo.get_ref(), instructor_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "instructors");
            context.insert("instructor", &data.instructor);
            context.insert("office_location", &data.office_location);
            context.insert("courses", &data.courses);

            render_template(&tera, "instructors/details.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Instructor not found.").send();
            redirect("/instructors")
        }
        Err(err) => {
            log::error!("Failed to load the instructor: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/instructors/{instructor_id}/edit")]
pub async fn edit_form(
    instructor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match instructors_service::load_edit_form(repo.get_ref(), instructor_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "instructors");
            context.insert("instructor", &data.instructor);
            context.insert("office_location", &data.office_location);
            context.insert("courses", &data.courses);

            render_template(&tera, "instructors/edit.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Instructor not found.").send();
            redirect("/instructors")
        }
        Err(err) => {
            log::error!("Failed to load the instructor: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/instructors/{instructor_id}/edit")]
pub async fn edit(
    instructor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    let instructor_id = instructor_id.into_inner();

    match instructors_service::save_instructor(repo.get_ref(), instructor_id, body.as_ref()) {
        Ok(_) => {
            FlashMessage::success("Instructor updated.").send();
            redirect("/instructors")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/instructors/{instructor_id}/edit"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Instructor not found.").send();
            redirect("/instructors")
        }
        Err(err) => {
            log::error!("Failed to update the instructor: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect(&format!("/instructors/{instructor_id}/edit"))
        }
    }
}

#[get("/instructors/{instructor_id}/delete")]
pub async fn delete_form(
    instructor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match instructors_service::get_instructor(repo.get_ref(), instructor_id.into_inner()) {
        Ok(instructor) => {
            let mut context = base_context(&flash_messages, "instructors");
            context.insert("instructor", &instructor);

            render_template(&tera, "instructors/delete.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Instructor not found.").send();
            redirect("/instructors")
        }
        Err(err) => {
            log::error!("Failed to load the instructor: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/instructors/{instructor_id}/delete")]
pub async fn delete(
    instructor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let instructor_id = instructor_id.into_inner();

    match instructors_service::delete_instructor(repo.get_ref(), instructor_id) {
        Ok(()) => {
            FlashMessage::success("Instructor deleted.").send();
            redirect("/instructors")
        }
        Err(ServiceError::NotFound) => redirect("/instructors"),
        Err(err) => {
            log::error!("Failed to delete the instructor: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect(&format!("/instructors/{instructor_id}/delete"))
        }
    }
}
