//! Host dispatcher for the appliance simulator
//!
//! Owns the listener socket, collects handlers from pluggable endpoints and
//! provides the JSON helpers those handlers share.

mod registry;
mod response;
mod server;

pub use registry::{Endpoint, EndpointRegistry, HandlerRegistry};
pub use response::{decode, read_body, status_ok, MAX_BODY_BYTES};
pub use server::{Simulator, SimulatorBuilder, SimulatorState};
