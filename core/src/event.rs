use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::errors::{EventError, Result};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// The part of an API Gateway proxy event the handler reads.
///
/// Everything else in the event (path, headers, requestContext, ...) is
/// ignored. Only the looked-up key of the query mapping is inspected; a
/// value that isn't a string is treated as absent.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RequestEvent {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<Map<String, Value>>,
}

impl RequestEvent {
    pub fn from_value(value: Value) -> Result<Self> {
        let event = serde_json::from_value(value).map_err(|e| EventError::Malformed {
            reason: e.to_string(),
        })?;
        Ok(event)
    }

    /// Value of query parameter `key`, if the mapping exists and holds it.
    pub fn query_parameter(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(key)?
            .as_str()
    }
}

/// JSON payload carried in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Greeting {
    pub message: String,
}

/// The record API Gateway turns into an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload)?;
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        Ok(Self {
            status_code,
            headers,
            body,
        })
    }
}
