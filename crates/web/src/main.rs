use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::criteria::handlers::list_criteria,
        features::entries::handlers::preview_score,
        features::entries::handlers::upsert_entry,
        features::feed::handlers::get_feed,
        features::leaderboard::handlers::get_leaderboard,
        features::users::handlers::create_user,
        features::users::handlers::get_current_user,
        features::users::handlers::update_current_user,
        features::users::handlers::get_user,
    ),
    components(
        schemas(
            storage::dto::criterion::CriterionResponse,
            storage::dto::entry::UpsertEntryRequest,
            storage::dto::entry::ScorePreviewResponse,
            storage::dto::feed::FeedView,
            storage::dto::feed::FeedItem,
            storage::dto::feed::FeedAuthor,
            storage::dto::feed::CriterionBadge,
            storage::dto::leaderboard::LeaderboardView,
            storage::dto::leaderboard::LeaderboardRow,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::user::UserResponse,
            storage::models::Avatar,
            storage::models::Criterion,
            storage::models::CriteriaFlags,
        )
    ),
    tags(
        (name = "criteria", description = "Scoring criteria registry"),
        (name = "entries", description = "Daily entry submission"),
        (name = "feed", description = "Social feed of entries"),
        (name = "leaderboard", description = "Cumulative score ranking"),
        (name = "users", description = "User profiles"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "user_session",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new("X-User-Id"),
                    ),
                ),
            )
        }
    }
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

    tracing::info!("Starting fitness board API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let dates = config.date_formatter();
    tracing::info!(
        "Formatting dates for locale {}",
        config.display_locale.as_deref().unwrap_or("en_US")
    );

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState { db, dates };

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", features::api_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
