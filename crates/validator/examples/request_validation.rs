//! Validates a few requests against a signup schema and logs the outcome.
//!
//! Run with `RUST_LOG=reqshape_validator=trace` to see the matcher's spans.

use reqshape_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct BadRequest {
    status: u16,
    body: serde_json::Value,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let schema = RequestSchema::new()
        .params(Schema::builder().field("orgId", is_integer()))
        .body(
            Schema::builder()
                .field("userName", not_null_string().and(is_string_range(1, 20)))
                .field("emailAddress", is_email_address())
                .field("langs", is_array_of(is_string()))
                .nested(
                    "profile",
                    Schema::builder()
                        .field("age", is_integer().and(is_number_range(0, 150)))
                        .field("bio", is_string_range(0, 200)),
                ),
        );

    let matcher = Matcher::with_formatter(|err: ValidationError| BadRequest {
        status: 400,
        body: err.to_json_value(),
    });

    let requests = [
        json!({
            "params": { "orgId": "7" },
            "headers": { "user-agent": "curl/8.0" },
            "body": {
                "userName": "foobar",
                "emailAddress": "foo@example.com",
                "langs": ["ja", "en"],
                "profile": { "age": 20, "bio": "" },
            },
        }),
        json!({
            "params": { "orgId": "7" },
            "body": {
                "userName": "foobar",
                "emailAddress": "foo@example.com",
                "langs": ["ja", "en"],
                "profile": { "age": 20.5, "bio": "" },
            },
        }),
        json!({
            "params": { "orgId": "7", "debug": "1" },
            "body": {},
        }),
    ];

    for (index, raw) in requests.into_iter().enumerate() {
        let request: Request = serde_json::from_value(raw)?;
        match matcher.verify_request(&request, &schema) {
            Ok(()) => tracing::info!(index, "request accepted"),
            Err(rejection) => tracing::warn!(
                index,
                status = rejection.status,
                body = %rejection.body,
                "request rejected"
            ),
        }
    }

    Ok(())
}
