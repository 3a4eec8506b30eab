use greeter_core::{GreeterConfig, Greeting, ResponseEnvelope, handle_event};
use serde_json::{Value, json};

fn invoke(event: Value) -> ResponseEnvelope {
    handle_event(event, &GreeterConfig::default()).unwrap()
}

fn message_of(response: &ResponseEnvelope) -> String {
    let greeting: Greeting = serde_json::from_str(&response.body).unwrap();
    greeting.message
}

#[test]
fn test_named_request_matches_api_gateway_contract() {
    let response = invoke(json!({ "queryStringParameters": { "Name": "World" } }));

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "statusCode": 200,
            "headers": { "Content-Type": "application/json" },
            "body": "{\"message\":\"Hello, World!\"}"
        })
    );
}

#[test]
fn test_empty_event_gets_default_greeting() {
    let response = invoke(json!({}));
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, r#"{"message":"Hello, World!"}"#);
}

#[test]
fn test_name_parameter() {
    let response = invoke(json!({ "queryStringParameters": { "Name": "Ada" } }));
    assert_eq!(response.body, r#"{"message":"Hello, Ada!"}"#);
}

#[test]
fn test_missing_name_key() {
    let response = invoke(json!({ "queryStringParameters": { "lang": "fr" } }));
    assert_eq!(message_of(&response), "Hello, World!");
}

#[test]
fn test_null_query_parameters() {
    let response = invoke(json!({ "queryStringParameters": null }));
    assert_eq!(message_of(&response), "Hello, World!");
}

#[test]
fn test_content_type_always_json() {
    let events = vec![
        json!({}),
        json!({ "queryStringParameters": { "Name": "Ada" } }),
        json!({ "queryStringParameters": { "Name": "" } }),
        json!("not an event"),
    ];

    for event in events {
        let response = invoke(event);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }
}

#[test]
fn test_special_characters_are_escaped_and_round_trip() {
    let names = ["Ada \"The Countess\" Lovelace", "Zoë", "<script>", "a\\b\nc", "🦀"];

    for name in names {
        let response = invoke(json!({ "queryStringParameters": { "Name": name } }));

        let body: Value = serde_json::from_str(&response.body).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["message"], format!("Hello, {}!", name));
    }
}

#[test]
fn test_full_proxy_event() {
    let event = json!({
        "resource": "/hello",
        "path": "/hello",
        "httpMethod": "GET",
        "headers": { "Host": "example.execute-api.us-east-1.amazonaws.com" },
        "multiValueQueryStringParameters": { "Name": ["Grace"] },
        "queryStringParameters": { "Name": "Grace" },
        "pathParameters": null,
        "stageVariables": null,
        "requestContext": { "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef", "stage": "prod" },
        "body": null,
        "isBase64Encoded": false
    });

    assert_eq!(message_of(&invoke(event)), "Hello, Grace!");
}

#[test]
fn test_non_string_values_beside_name_are_ignored() {
    let response = invoke(json!({
        "queryStringParameters": { "Name": "Ada", "page": 2, "debug": true, "ids": [1, 2] }
    }));
    assert_eq!(response.body, r#"{"message":"Hello, Ada!"}"#);
}

#[test]
fn test_non_string_name_gets_default_greeting() {
    let response = invoke(json!({ "queryStringParameters": { "Name": 7, "lang": "fr" } }));
    assert_eq!(message_of(&response), "Hello, World!");
}
