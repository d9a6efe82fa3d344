use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use storage::Database;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

mod auth0;
mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use features::{account, auth, dashboard, home, recipients, volunteers};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        home::handlers::get_status,
        auth::handlers::login,
        auth::handlers::callback,
        auth::handlers::logout,
        account::handlers::get_account,
        account::handlers::delete_account,
        recipients::handlers::get_recipient,
        recipients::handlers::initial_recipient,
        recipients::handlers::create_recipient,
        recipients::handlers::update_recipient,
        recipients::handlers::delete_recipient,
        volunteers::handlers::get_volunteer,
        volunteers::handlers::initial_volunteer,
        volunteers::handlers::create_volunteer,
        volunteers::handlers::update_volunteer,
        volunteers::handlers::delete_volunteer,
        dashboard::handlers::list_volunteers,
        dashboard::handlers::get_volunteer,
        dashboard::handlers::assign_volunteer,
        dashboard::handlers::list_recipients,
        dashboard::handlers::record_actuals,
        dashboard::handlers::volunteer_handout,
        dashboard::handlers::all_handouts,
        dashboard::handlers::export_csv,
    ),
    components(
        schemas(
            home::handlers::StatusResponse,
            storage::dto::account::UserResponse,
            storage::dto::account::AccountResponse,
            storage::dto::account::InitialFormResponse,
            storage::dto::recipient::RecipientResponse,
            storage::dto::recipient::RecipientDetailResponse,
            storage::dto::recipient::RecipientSummary,
            storage::dto::recipient::CreateRecipientRequest,
            storage::dto::recipient::UpdateRecipientRequest,
            storage::dto::recipient::RecipientActualsRequest,
            storage::dto::volunteer::VolunteerResponse,
            storage::dto::volunteer::VolunteerDetailResponse,
            storage::dto::volunteer::CreateVolunteerRequest,
            storage::dto::volunteer::UpdateVolunteerRequest,
            storage::dto::volunteer::AssignmentRequest,
            storage::models::PersonName,
            storage::models::RecipientSize,
            storage::models::VolunteerSize,
        )
    ),
    tags(
        (name = "home", description = "Public status"),
        (name = "auth", description = "Auth0 login flow"),
        (name = "account", description = "Signed-in user's account"),
        (name = "recipients", description = "Recipient registration"),
        (name = "volunteers", description = "Volunteer signup"),
        (name = "dashboard", description = "Staff dashboard"),
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new(
                            middleware::auth::SESSION_COOKIE,
                        ),
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

    tracing::info!("Starting Rake Up API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

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

    let origin: HeaderValue = config
        .public_url
        .parse()
        .context("PUBLIC_URL is not a valid origin")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let state = AppState::new(db, &config).context("Failed to build application state")?;
    tracing::info!(registration_open = config.is_active, "Application state ready");

    let app = routes::router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
