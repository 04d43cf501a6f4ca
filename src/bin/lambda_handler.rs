//! AWS Lambda handler serving the calculator over HTTP
//!
//! Accepts the two raw form values as JSON and returns the formatted
//! projection, so the landing page can delegate the arithmetic.
//!
//! Supports Lambda Function URLs for direct HTTP access.
//! Accepts config via environment variables:
//!   CALCULATOR_ASSUMPTIONS_PATH     directory containing calculator_assumptions.csv
//!   CALCULATOR_ASSUMPTIONS_VERSION  version to serve (default: canonical)

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use projection_calculator::{AssumptionSet, ProjectionCalculator};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::path::Path;

/// Input from the landing page form. Fields may be strings or numbers.
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorRequest {
    #[serde(default)]
    pub initial: Value,
    #[serde(default)]
    pub monthly: Value,
}

#[derive(Debug, Serialize)]
pub struct CalculatorResponse<'a> {
    pub projected_net_worth: String,
    pub estimated_monthly_income: String,
    pub assumptions_version: &'a str,
}

/// Field value as the text a form input would hold
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

fn json_response(body: &CalculatorResponse) -> Result<Response<Body>, Error> {
    Ok(cors(Response::builder())
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(calculator: &ProjectionCalculator, event: Request) -> Result<Response<Body>, Error> {
    // CORS preflight, otherwise POST only
    match event.method().as_str() {
        "OPTIONS" => return Ok(cors(Response::builder()).status(200).body(Body::Empty)?),
        "POST" => {}
        other => return error_response(405, &format!("Method {} not allowed", other)),
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculatorRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let results = calculator.update_results(&raw_text(&request.initial), &raw_text(&request.monthly));

    json_response(&CalculatorResponse {
        projected_net_worth: results.projected_net_worth,
        estimated_monthly_income: results.estimated_monthly_income,
        assumptions_version: &calculator.assumptions().version,
    })
}

fn load_calculator() -> Result<ProjectionCalculator, Error> {
    let dir = env::var("CALCULATOR_ASSUMPTIONS_PATH").ok();
    let version = env::var("CALCULATOR_ASSUMPTIONS_VERSION").ok();
    load_calculator_from(dir.as_deref().map(Path::new), version.as_deref())
}

/// Build the calculator from an optional assumptions directory and version
fn load_calculator_from(dir: Option<&Path>, version: Option<&str>) -> Result<ProjectionCalculator, Error> {
    let set = match dir {
        Some(dir) => AssumptionSet::from_csv_path(dir)?,
        None => AssumptionSet::canonical(),
    };

    let assumptions = match version {
        Some(version) => set.get(version)?.clone(),
        None => set.preferred().clone(),
    };

    log::info!("serving calculator with assumptions '{}'", assumptions.version);
    Ok(ProjectionCalculator::new(assumptions))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let calculator = load_calculator()?;
    run(service_fn(|event| handler(&calculator, event))).await
}
