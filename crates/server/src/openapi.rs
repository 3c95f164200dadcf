// Copyright (C) 2026 SiriusScan
// SPDX-License-Identifier: GPL-3.0-or-later

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sirius REST API",
        version = "0.1.0",
        description = "REST service exposing the HTTP endpoints of the Sirius scanning platform.",
        license(name = "GPL-3.0-or-later"),
        contact(url = "https://github.com/SiriusScan/sirius-api")
    ),
    servers(
        (url = "http://localhost:8080", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "version", description = "API version"),
        (name = "apps", description = "App message submission"),
    ),
    paths(
        crate::handlers::health::get_health::get_health,
        crate::handlers::version::get_version::get_version,
        crate::handlers::apps::post_app::post_app,
    ),
)]
pub struct ApiDoc;
