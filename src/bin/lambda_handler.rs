//! AWS Lambda handler for benefit computations
//!
//! Accepts a scenario (Quick or Detailed mode, tagged JSON) and returns the
//! full result bundle including the claim-age sweep.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use benefit_engine::{Engine, ScenarioInputs, ScenarioResults};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

/// Response envelope around the computation results
#[derive(Debug, Serialize)]
struct ComputeResponse {
    results: ScenarioResults,
    execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &ComputeResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let inputs: ScenarioInputs = match serde_json::from_str(&body_str) {
        Ok(inputs) => inputs,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let engine = Engine::new();
    match engine.compute(&inputs) {
        Ok(results) => Ok(json_response(&ComputeResponse {
            results,
            execution_time_ms: start.elapsed().as_millis() as u64,
        })),
        Err(e) => Ok(error_response(422, &e.to_string())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
