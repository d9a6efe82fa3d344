use axum::Router;
use utoipa_swagger_ui::SwaggerUi;

use crate::ApiDoc;
use crate::features::{account, auth, dashboard, home, recipients, volunteers};
use crate::state::AppState;
use utoipa::OpenApi;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/account", account::routes::routes(state.clone()))
        .nest("/recipient", recipients::routes::routes(state.clone()))
        .nest("/volunteer", volunteers::routes::routes(state.clone()))
        .nest("/dashboard", dashboard::routes::routes(state.clone()));

    Router::new()
        .nest("/api", api)
        .merge(home::routes::routes())
        .nest("/auth", auth::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
