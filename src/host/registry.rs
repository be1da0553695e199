//! Endpoint registration
//!
//! Endpoints never own the listener. They hand one handler per path to an
//! [`EndpointRegistry`], and the host turns the collected handlers into a
//! single axum `Router`.

use crate::error::{Error, Result};
use axum::{routing::MethodRouter, Router};

/// Registration facility offered by the host dispatcher
pub trait EndpointRegistry {
    /// Register `handler` for requests to exactly `path`
    fn register_handler(&mut self, path: &str, handler: MethodRouter) -> Result<()>;
}

/// A pluggable group of API resources served by the simulator
pub trait Endpoint: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Register every path this endpoint serves
    fn register(&self, registry: &mut dyn EndpointRegistry) -> Result<()>;
}

/// Default registry collecting handlers for an axum `Router`
#[derive(Default)]
pub struct HandlerRegistry {
    routes: Vec<(String, MethodRouter)>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered paths, in registration order
    pub fn paths(&self) -> Vec<&str> {
        self.routes.iter().map(|(path, _)| path.as_str()).collect()
    }

    /// Register all endpoints in order, stopping at the first failure
    pub fn register_all<I>(&mut self, endpoints: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<dyn Endpoint>,
    {
        for endpoint in endpoints {
            let endpoint = endpoint.as_ref();
            let before = self.routes.len();
            endpoint.register(self)?;
            tracing::debug!(
                endpoint = endpoint.name(),
                paths = self.routes.len() - before,
                "Registered endpoint"
            );
        }
        Ok(())
    }

    /// Build a router serving every registered path
    pub fn into_router(self) -> Router {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, (path, handler)| {
                router.route(&path, handler)
            })
    }
}

impl EndpointRegistry for HandlerRegistry {
    fn register_handler(&mut self, path: &str, handler: MethodRouter) -> Result<()> {
        if !path.starts_with('/') {
            return Err(Error::InvalidPath(path.to_string()));
        }
        if self.routes.iter().any(|(existing, _)| existing == path) {
            return Err(Error::DuplicateEndpoint(path.to_string()));
        }
        self.routes.push((path.to_string(), handler));
        Ok(())
    }
}
