use serde_json::Value;
use tracing::{info, warn};

use crate::config::GreeterConfig;
use crate::errors::Result;
use crate::event::{Greeting, RequestEvent, ResponseEnvelope};

const STATUS_OK: u16 = 200;

/// Picks the greeting for one request.
///
/// An empty parameter value counts as missing and gets the fallback name.
pub fn greeting_for(event: &RequestEvent, config: &GreeterConfig) -> String {
    let name = event
        .query_parameter(&config.query_parameter)
        .filter(|name| !name.is_empty())
        .unwrap_or(config.fallback_name.as_str());
    format!("Hello, {}!", name)
}

pub fn respond(event: &RequestEvent, config: &GreeterConfig) -> Result<ResponseEnvelope> {
    let greeting = Greeting {
        message: greeting_for(event, config),
    };
    ResponseEnvelope::json(STATUS_OK, &greeting)
}

/// Handles one raw invocation payload.
///
/// The full event is logged first. A payload that can't be read as a
/// [`RequestEvent`] is answered as if it carried no query parameters; only a
/// failure to serialize the response is returned as an error.
pub fn handle_event(raw: Value, config: &GreeterConfig) -> Result<ResponseEnvelope> {
    info!(event = %raw, "Event");

    let event = match RequestEvent::from_value(raw) {
        Ok(event) => event,
        // only caller input falls back; anything else is the function's own failure
        Err(e) if e.is_client_error() => {
            warn!("{}, using default greeting", e);
            RequestEvent::default()
        }
        Err(e) => return Err(e),
    };

    respond(&event, config)
}
