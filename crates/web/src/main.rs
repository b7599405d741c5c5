use anyhow::Context;
use storage::{Seed, Store};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::leaderboard::handlers::get_leaderboard,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::students::handlers::list_students,
        features::students::handlers::get_current_student,
        features::students::handlers::get_current_history,
        features::participations::handlers::register_participation,
        features::submissions::handlers::submit_proof,
        features::submissions::handlers::list_pending_submissions,
        features::submissions::handlers::get_submission,
        features::submissions::handlers::approve_submission,
        features::submissions::handlers::reject_submission,
    ),
    components(
        schemas(
            storage::dto::common::PaginationMeta,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::student::StudentStanding,
            storage::dto::student::HistoryEntry,
            storage::dto::event::CreateEventRequest,
            storage::dto::participation::RegisterParticipationRequest,
            storage::dto::submission::SubmitProofRequest,
            storage::dto::submission::ApprovalResponse,
            storage::models::Student,
            storage::models::Event,
            storage::models::EventCategory,
            storage::models::ParticipationRecord,
            storage::models::ParticipationStatus,
            storage::models::Submission,
            storage::models::ClaimType,
            storage::models::SubmissionStatus,
        )
    ),
    tags(
        (name = "leaderboard", description = "Public points leaderboard"),
        (name = "events", description = "Event announcements"),
        (name = "students", description = "Student dashboard endpoints"),
        (name = "participations", description = "Event registration"),
        (name = "submissions", description = "Proof submission and review"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

fn load_seed(config: &Config) -> anyhow::Result<Seed> {
    let Some(path) = &config.seed_file else {
        tracing::info!("Using built-in campus dataset");
        return Ok(Seed::campus());
    };

    tracing::info!("Loading seed data from {}", path.display());
    Ok(Seed::from_file(path)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting campus points API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let seed = load_seed(&config)?;
    tracing::info!(
        students = seed.students.len(),
        events = seed.events.len(),
        participations = seed.participations.len(),
        submissions = seed.submissions.len(),
        "Store seeded"
    );
    let state = AppState::new(Store::from_seed(seed));

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, admin endpoints will reject every request");
    }

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = routes::router(state, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
