use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Compress, App, HttpServer};
use anyhow::Context;
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use jubilee::curation::CurationDraft;
use jubilee::fixtures::FixtureSet;
use jubilee::gate::Gate;
use jubilee::openapi::ApiDoc;
use jubilee::repo::FixtureRepo;
use jubilee::routes::{config, AppState};
use jubilee::security::SecurityHeaders;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env automatically only in debug builds to reduce manual setup
    // overhead; deployments set variables externally.
    if cfg!(debug_assertions) {
        let _ = dotenv::dotenv();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Bootstrapping jubilee server");

    let gate = Gate::from_env();
    info!("Password gate configured: {}", gate.is_enabled());
    info!(
        "Frontend URL: {}",
        std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string())
    );

    // Fixture contract violations are fatal; abort before binding the port.
    let fixtures = FixtureSet::load().context("loading fixtures")?;
    let repo = Arc::new(FixtureRepo::new(fixtures));
    let curation = CurationDraft::new();

    let openapi = ApiDoc::openapi();
    info!("OpenAPI spec generated");

    let server = HttpServer::new(move || {
        let cors = {
            let mut c = Cors::default()
                // local dev frontends (Vite dev server and nginx container)
                .allowed_origin("http://localhost:5173")
                .allowed_origin("http://127.0.0.1:5173")
                .allowed_origin("http://localhost:3000")
                .allowed_origin("http://127.0.0.1:3000")
                .allow_any_header()
                .allowed_methods(["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
                .supports_credentials()
                .max_age(3600);
            if let Ok(front) = std::env::var("FRONTEND_URL") {
                c = c.allowed_origin(&front);
            }
            c
        };

        App::new()
            .wrap(TracingLogger::default())
            .wrap(Compress::default())
            .wrap(SecurityHeaders::from_env())
            .wrap(cors)
            .configure(config)
            .service(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi.clone()))
            .app_data(actix_web::web::Data::new(AppState {
                repo: repo.clone(),
                curation: curation.clone(),
                gate: gate.clone(),
            }))
    })
    .bind(("0.0.0.0", 8080))
    .context("binding 0.0.0.0:8080")?;

    info!("Listening on http://0.0.0.0:8080");

    server.run().await?;
    Ok(())
}
