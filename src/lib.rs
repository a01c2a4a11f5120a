use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod atendimento;
pub mod config;
pub mod docgen;

pub use crate::config::{AppConfig, ModoLote};

/// Shared server state: the loaded configuration plus the batch guard that
/// keeps generation requests sequential.
pub struct AppState {
    pub config: AppConfig,
    pub lote_em_andamento: parking_lot::Mutex<()>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            lote_em_andamento: parking_lot::Mutex::new(()),
        }
    }
}

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

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn conflict(message: &str) -> Self {
        Self::new("Conflict", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::atendimento::handlers::gerar_documentos,
            crate::atendimento::handlers::listar_catalogo,
        ),
        components(
            schemas(
                atendimento::models::ClienteData,
                atendimento::models::GerarDocumentosRequest,
                docgen::catalogo::DocumentoPedido,
                docgen::catalogo::DocumentosSelecionados,
                docgen::ResultadoGeracao,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Documentos", description = "Geração de documentos de atendimento a partir dos modelos do escritório.")
        )
    )]
    struct ApiDoc;

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if !config.templates_dir.is_dir() {
        log::warn!(
            "templates dir {} does not exist yet; every batch will come back empty",
            config.templates_dir.display()
        );
    }

    let bind = (config.host.clone(), config.port);
    let app_state = web::Data::new(AppState::new(config));

    let prometheus = PrometheusMetricsBuilder::new("atendimento_docs")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(app_state.clone())
            .service(web::scope("/api").configure(atendimento::handlers::config))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind)?
    .run()
    .await
}
