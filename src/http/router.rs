use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::positions::HashMapPositionsStorage;
use crate::{health, http, positions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapPositionsStorage>) -> Router {
    let cors_policy = http::cors(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let positions_routes = Router::new()
        .route(
            "/",
            get(positions::handlers::quiz).post(positions::handlers::create),
        )
        .route("/all", get(positions::handlers::all))
        .route("/check", post(positions::handlers::check))
        .route(
            "/:position-id",
            get(positions::handlers::by_id)
                .put(positions::handlers::update)
                .delete(positions::handlers::delete),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/positions", positions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(http::middleware::tracing))
}
