mod config;
mod database;
mod error;
mod merge;
mod model;
mod store;
mod validation;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer};
use config::{Config, DEFAULT_LOG_FILTER};
use database::*;
use error::CatalogError;
use log::{debug, info};
use model::*;

type Db = web::Data<Catalog>;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("{:?}", err);
    let response =
        HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

async fn get_films(db: Db) -> HttpResponse {
    HttpResponse::Ok().json(db.films())
}

async fn create_film(film: web::Json<Film>, db: Db) -> Result<HttpResponse, CatalogError> {
    info!("Received request to create film {:?}", film);
    let film = db.add_film(film.into_inner())?;
    Ok(HttpResponse::Ok().json(film))
}

async fn update_film(film: web::Json<Film>, db: Db) -> Result<HttpResponse, CatalogError> {
    info!("Received request to update film with id {}", film.id);
    let film = db.update_film(film.into_inner())?;
    Ok(HttpResponse::Ok().json(film))
}

async fn get_users(db: Db) -> HttpResponse {
    HttpResponse::Ok().json(db.users())
}

async fn create_user(user: web::Json<User>, db: Db) -> Result<HttpResponse, CatalogError> {
    info!("Received request to create user {:?}", user);
    let user = db.add_user(user.into_inner())?;
    Ok(HttpResponse::Ok().json(user))
}

async fn update_user(user: web::Json<User>, db: Db) -> Result<HttpResponse, CatalogError> {
    info!("Received request to update user with id {}", user.id);
    let user = db.update_user(user.into_inner())?;
    Ok(HttpResponse::Ok().json(user))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(
            web::resource("/films")
                .route(web::get().to(get_films))
                .route(web::post().to(create_film))
                .route(web::put().to(update_film)),
        )
        .service(
            web::resource("/users")
                .route(web::get().to(get_users))
                .route(web::post().to(create_user))
                .route(web::put().to(update_user)),
        );
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let config = Config::from_env()?;
    let catalog = web::Data::new(Catalog::new());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(catalog.clone())
            .configure(routes)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }
    info!("Listening on {}", config.bind);
    server.bind(config.bind)?.run().await
}
