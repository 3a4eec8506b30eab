use std::env;
use std::sync::Arc;

use greeter_core::telemetry::init_tracing;
use greeter_core::{GreeterConfig, ResponseEnvelope, handle_event, load_config};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;

async fn function_handler(
    event: LambdaEvent<Value>,
    config: &GreeterConfig,
) -> Result<ResponseEnvelope, Error> {
    info!(request_id = %event.context.request_id, "Invocation received");
    let response = handle_event(event.payload, config)?;
    Ok(response)
}

/// Reads the event for a local run. Without a path the empty event is used.
fn read_local_event(path: Option<&str>) -> greeter_core::Result<Value> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(Value::Object(Default::default())),
    }
}

/// Runs one local invocation and renders the response as pretty JSON.
fn run_local(event_path: Option<&str>, config: &GreeterConfig) -> greeter_core::Result<String> {
    let event = read_local_event(event_path)?;
    let response = handle_event(event, config)?;
    Ok(serde_json::to_string_pretty(&response)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Arc::new(load_config(None)?);
    init_tracing(&config.log_filter);

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("Running in AWS Lambda environment");
        lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
            let config = Arc::clone(&config);
            async move { function_handler(event, &config).await }
        }))
        .await
    } else {
        info!("Running in local development mode");

        let event_path = env::args().nth(1);
        println!("{}", run_local(event_path.as_deref(), &config)?);
        Ok(())
    }
}
