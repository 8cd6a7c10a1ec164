use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::health::router::init_health_router;
use crate::state::AppState;
use axum::{Router, middleware};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_health_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
}
