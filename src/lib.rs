use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpResponse, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod formation;
pub mod generators;

pub use crate::config::ServerConfig;
pub use crate::generators::FormationGenerator;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::formation::handlers::form_company,
        crate::formation::handlers::form_company_schema,
        crate::formation::handlers::company_form
    ),
    components(
        schemas(
            formation::models::CompanyFormationRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Company Formation", description = "Formation document generation for DE, CA and NY.")
    )
)]
pub struct ApiDoc;

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found("Resource not found"))
}

/// Routes shared by the server and the integration tests. The caller
/// provides the `FormationGenerator` app data.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.configure(formation::config)
        .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .default_service(web::route().to(not_found));
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid server configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("company_formation_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let generator = web::Data::new(FormationGenerator::new());
    let allowed_origins = config.allowed_origins.clone();

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(generator.clone())
            .configure(configure_app)
    });

    let server = match config.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server
        .keep_alive(actix_web::http::KeepAlive::Os)
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
