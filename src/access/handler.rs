//! HTTP handler for access toggle resources
//!
//! Every toggle answers the same three cases:
//! - GET  — current value as JSON, 200
//! - PUT  — replace the value from a JSON body, 204 (500 if the body cannot be
//!   read or does not decode)
//! - anything else — 404 with a plain `404 page not found` body
//!
//! The four resources differ only in which part of [`AccessSettings`] they
//! read and write, so a single generic handler is parameterized by an
//! [`Accessor`] pair.

use crate::access::state::AccessState;
use crate::access::types::AccessSettings;
use crate::host::{decode, read_body, status_ok, MAX_BODY_BYTES};
use axum::{
    body::Body,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, MethodRouter},
};
use serde::{de::DeserializeOwned, Serialize};

const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Get/set pair selecting one toggle out of [`AccessSettings`]
pub struct Accessor<T> {
    pub get: fn(&AccessSettings) -> T,
    pub set: fn(&mut AccessSettings, T),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Accessor<T> {}

/// One access toggle exposed as an HTTP resource
pub struct ToggleResource<T> {
    name: &'static str,
    accessor: Accessor<T>,
    state: AccessState,
}

impl<T> Clone for ToggleResource<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            accessor: self.accessor,
            state: self.state.clone(),
        }
    }
}

impl<T> ToggleResource<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(name: &'static str, accessor: Accessor<T>, state: AccessState) -> Self {
        Self {
            name,
            accessor,
            state,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Handler accepting every method, ready to be registered on a path
    pub fn into_method_router(self) -> MethodRouter {
        any(handle_toggle::<T>).with_state(self)
    }
}

async fn handle_toggle<T>(
    State(resource): State<ToggleResource<T>>,
    method: Method,
    uri: Uri,
    body: Body,
) -> Response
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    match method {
        Method::GET => {
            let value = resource.state.read(resource.accessor.get).await;
            status_ok(&value)
        }
        Method::PUT => {
            let decoded = read_body(&method, &uri, body, MAX_BODY_BYTES)
                .await
                .and_then(|bytes| decode::<T>(&method, &uri, &bytes));
            match decoded {
                Ok(value) => {
                    let set = resource.accessor.set;
                    resource.state.update(|settings| set(settings, value)).await;
                    tracing::debug!(resource = resource.name, "Access toggle updated");
                    StatusCode::NO_CONTENT.into_response()
                }
                Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            }
        }
        _ => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
    }
}
