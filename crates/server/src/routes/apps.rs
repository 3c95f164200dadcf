// Copyright (C) 2026 SiriusScan
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::post};

use crate::{
    handlers::apps,
    routes::{APPS_PREFIX, RegisterRoute, RouteRegistry},
    state::AppState,
};

/// App routes. The returned router is nested under [`APPS_PREFIX`] by
/// `create_app`, so paths here are relative to the group.
pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new().route_registered(
        registry,
        APPS_PREFIX,
        "/{appName}",
        "post",
        post(apps::post_app),
    )
}
