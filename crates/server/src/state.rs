use crate::routes::RouteRegistry;
use sirius_api_config::SiriusConfig;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub config: SiriusConfig,
    pub route_registry: RouteRegistry,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: SiriusConfig) -> Self {
        Self {
            config,
            route_registry: RouteRegistry::new(),
            start_time: Instant::now(),
        }
    }
}
