//! HTTP handler functions for the crime prediction API.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use crime_predict_crime_models::CrimeLabel;
use crime_predict_database::queries;
use crime_predict_inference::ReportContext;
use crime_predict_server_models::{LoginForm, PredictResponse};
use serde_json::Value;

use crate::{AppState, views};

/// Payload keys that must be present and non-null on `/predict`.
///
/// `factors` is required but its value is never used downstream; the
/// trained model only consumes the location and timestamp fields.
const REQUIRED_FIELDS: &[&str] = &[
    "factors", "location", "year", "month", "day", "hour", "minute",
];

/// `GET /`
///
/// Renders the empty login view.
pub async fn login_view() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::login_page(None))
}

/// `POST /`
///
/// Exact-match credential check. A match redirects to the main view; no
/// session token is issued, so `/index` and `/predict` stay reachable
/// without authentication. A mismatch re-renders the login view with a
/// generic error.
pub async fn login_submit(state: web::Data<AppState>, form: web::Form<LoginForm>) -> HttpResponse {
    match queries::verify_credentials(state.db.as_ref(), &form.username, &form.password).await {
        Ok(true) => HttpResponse::Found()
            .insert_header((header::LOCATION, "/index"))
            .finish(),
        Ok(false) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::login_page(Some("Invalid username or password"))),
        Err(e) => {
            log::error!("Failed to verify credentials: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// `GET /index`
///
/// Renders the main view.
pub async fn index_view() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::index_page())
}

/// `POST /predict`
///
/// Validates the report context, prepares the feature vector, runs the
/// classifier, resolves the label, and appends the prediction row.
pub async fn predict(state: web::Data<AppState>, body: web::Json<Value>) -> HttpResponse {
    let data = body.into_inner();

    for field in REQUIRED_FIELDS {
        if data.get(field).is_none_or(Value::is_null) {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Missing or None value for field: {field}")
            }));
        }
    }

    let location_value = &data["location"];
    let location = match location_value.as_str() {
        Some(s) if state.preparer.knows(s) => s.to_string(),
        other => {
            let shown = other.map_or_else(|| location_value.to_string(), ToString::to_string);
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!(
                    "Location value \"{shown}\" is not in the list of known categories"
                )
            }));
        }
    };

    let mut numeric = [0.0_f64; 5];
    for (slot, field) in numeric.iter_mut().zip(["year", "month", "day", "hour", "minute"]) {
        match coerce_f64(&data[field]) {
            Some(v) => *slot = v,
            None => {
                // Bad numeric coercion is an unhandled fault, not a
                // validation error: opaque 500, matching the original.
                log::error!("Non-numeric value for field {field}: {}", data[field]);
                return HttpResponse::InternalServerError().finish();
            }
        }
    }
    let [year, month, day, hour, minute] = numeric;

    let report = ReportContext {
        location,
        year,
        month,
        day,
        hour,
        minute,
    };
    let features = state.preparer.prepare(&report);

    let code = match state.classifier.predict(&features) {
        Ok(code) => code,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }));
        }
    };

    let label = CrimeLabel::resolve(code).to_string();

    #[allow(clippy::cast_possible_truncation)]
    let stored = queries::insert_prediction(
        state.db.as_ref(),
        &label,
        &report.location,
        year as i64,
        month as i64,
        day as i64,
        hour as i64,
        minute as i64,
    )
    .await;

    match stored {
        Ok(()) => HttpResponse::Ok().json(PredictResponse { prediction: label }),
        Err(e) => {
            log::error!("Failed to store prediction: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Coerces a JSON value to `f64` with Python `float()` semantics: numbers,
/// numeric strings, and booleans coerce; everything else fails.
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}
