use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::department::DepartmentForm;
use crate::repository::DieselRepository;
use crate::routes::{SAVE_FAILED_MESSAGE, base_context, redirect, render_template};
use crate::services::{ServiceError, departments as departments_service};

#[get("/departments")]
pub async fn index(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match departments_service::load_index_page(repo.get_ref()) {
        Ok(departments) => {
            let mut context = base_context(&flash_messages, "departments");
            context.insert("departments", &departments);

            render_template(&tera, "departments/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list departments: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/departments/create")]
pub async fn create_form(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match departments_service::load_create_form(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "departments");
            context.insert("instructors", &data.instructors);

            render_template(&tera, "departments/create.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the department form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/departments/create")]
pub async fn create(
    repo: web::Data<DieselRepository>,
    form: web::Form<DepartmentForm>,
) -> impl Responder {
    match departments_service::add_department(repo.get_ref(), form.into_inner()) {
        Ok(_) => {
            FlashMessage::success("Department created.").send();
            redirect("/departments")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/departments/create")
        }
        Err(err) => {
            log::error!("Failed to create the department: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect("/departments/create")
        }
    }
}

#[get("/departments/{department_id}")]
pub async fn details(
    department_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match departments_service::load_department(repo.get_ref(), department_id.into_inner()) {
        Ok(row) => {
            let mut context = base_context(&flash_messages, "departments");
            context.insert("department", &row.department);
            context.insert("administrator", &row.administrator);

            render_template(&tera, "departments/details.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Department not found.").send();
            redirect("/departments")
        }
        Err(err) => {
            log::error!("Failed to load the department: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/departments/{department_id}/edit")]
pub async fn edit_form(
    department_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match departments_service::load_edit_form(repo.get_ref(), department_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "departments");
            context.insert("department", &data.department);
            context.insert("instructors", &data.instructors);

            render_template(&tera, "departments/edit.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Department not found.").send();
            redirect("/departments")
        }
        Err(err) => {
            log::error!("Failed to load the department: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/departments/{department_id}/edit")]
pub async fn edit(
    department_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Form<DepartmentForm>,
) -> impl Responder {
    let department_id = department_id.into_inner();

    match departments_service::save_department(repo.get_ref(), department_id, form.into_inner()) {
        Ok(_) => {
            FlashMessage::success("Department updated.").send();
            redirect("/departments")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/departments/{department_id}/edit"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Department not found.").send();
            redirect("/departments")
        }
        Err(err) => {
            log::error!("Failed to update the department: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect(&format!("/departments/{department_id}/edit"))
        }
    }
}

#[get("/departments/{department_id}/delete")]
pub async fn delete_form(
    department_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match departments_service::load_department(repo.get_ref(), department_id.into_inner()) {
        Ok(row) => {
            let mut context = base_context(&flash_messages, "departments");
            context.insert("department", &row.department);
            context.insert("administrator", &row.administrator);

            render_template(&tera, "departments/delete.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Department not found.").send();
            redirect("/departments")
        }
        Err(err) => {
            log::error!("Failed to load the department: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/departments/{department_id}/delete")]
pub async fn delete(
    department_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let department_id = department_id.into_inner();

    match departments_service::delete_department(repo.get_ref(), department_id) {
        Ok(()) => {
            FlashMessage::success("Department deleted.").send();
            redirect("/departments")
        }
        Err(ServiceError::NotFound) => redirect("/departments"),
        Err(err) => {
            log::error!("Failed to delete the department: {err}");
            FlashMessage::error(SAVE_FAILED_MESSAGE).send();
            redirect(&format!("/departments/{department_id}/delete"))
        }
    }
}
