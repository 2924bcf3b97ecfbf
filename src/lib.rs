#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    {
        let mut conn = db::get_connection(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to get a connection: {e}")))?;
        db::run_migrations(&mut conn)
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
    }

    let repo = DieselRepository::new(pool);

    // A fresh database gets the sample school catalog.
    services::seed::ensure_seed_data(&repo)
        .map_err(|e| std::io::Error::other(format!("Failed to seed the database: {e}")))?;

    // Key and store for flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(routes::main::index)
            .service(routes::main::about)
            // Literal segments are registered ahead of the `{id}` matchers.
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
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
