//! Route registry for endpoint introspection.
//!
//! Every binding goes through [`RegisterRoute::route_registered`], which
//! records the full path in the registry as well as registering it on the
//! router. The root endpoint reads the registry to list the available
//! routes, and tests use it to verify the routing table.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Prefix under which the app routes are nested.
pub const APPS_PREFIX: &str = "/app";

/// Information about a registered route.
#[derive(Clone, Serialize)]
pub struct RouteInfo {
    /// The path pattern (e.g., "/app/{appName}")
    pub path: String,
    /// The HTTP method (e.g., "get", "post")
    pub method: String,
}

/// A thread-safe registry of routes.
///
/// Routes are registered as they are added to the router during startup,
/// and can be retrieved later for introspection. The table is never
/// written again once the server is serving.
#[derive(Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<Vec<RouteInfo>>>);

impl RouteRegistry {
    /// Create a new empty route registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route to the registry.
    ///
    /// Panics if the same (method, path) pair was already registered. A
    /// duplicate binding is a startup configuration error; the process
    /// must not begin serving traffic with an ambiguous routing table.
    pub fn add(&self, path: &str, method: &str) {
        if let Ok(mut routes) = self.0.write() {
            if routes.iter().any(|r| r.path == path && r.method == method) {
                panic!("Duplicate route registration: {} {}", method, path);
            }
            routes.push(RouteInfo {
                path: path.to_string(),
                method: method.to_string(),
            });
        }
    }

    /// Get all registered routes.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.0.read().map(|r| r.clone()).unwrap_or_default()
    }
}

/// Extension trait for registering routes with automatic registry tracking.
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    /// Register a route and track it in the registry.
    ///
    /// # Arguments
    /// * `registry` - The route registry to add the route to
    /// * `prefix` - The prefix the router is nested under (e.g., "/app"),
    ///   prepended to the path in the registry only
    /// * `path` - The route path, registered on the router as-is
    /// * `method` - The HTTP method (e.g., "get", "post")
    /// * `handler` - The route handler
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        // Registry sees the full path; the router sees the relative one
        // since grouped routers are nested under the prefix.
        let full_path = format!("{}{}", prefix, path);
        registry.add(&full_path, method);
        self.route(path, handler)
    }
}
