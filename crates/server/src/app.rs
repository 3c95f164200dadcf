use axum::{Router, routing::get};

use crate::{routes, state::AppState};

/// Assemble the application router.
///
/// Registers every route binding exactly once on a fresh router: the root
/// listing, the health and version endpoints at root level, and the app
/// routes nested under the `/app` group. Conflicting registrations panic
/// here, before the listener binds.
pub fn create_app(state: AppState) -> Router {
    let registry = state.route_registry.clone();

    Router::new()
        .route("/", get(routes::root::root_handler))
        .merge(routes::health::routes(&registry))
        .merge(routes::version::routes(&registry))
        .nest(routes::APPS_PREFIX, routes::apps::routes(&registry))
        .with_state(state)
}
