//! Greeting function for API Gateway proxy events.
//!
//! [`handler::handle_event`] takes the raw invocation payload and returns the
//! response envelope API Gateway turns into an HTTP response.

pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod telemetry;

pub use config::{GreeterConfig, load_config};
pub use errors::{GreeterError, Result};
pub use event::{Greeting, ResponseEnvelope};
pub use handler::handle_event;
