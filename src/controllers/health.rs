use axum::{Json, Router, extract::State, routing::get};
use serde_json::{json, Value};

use crate::services::register_service::ServiceRegister;

pub fn router() -> Router<ServiceRegister> {
    Router::new().route("/health", get(get_health_check))
}

async fn get_health_check(State(services): State<ServiceRegister>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "parsing": services.upload_service.is_busy(),
    }))
}
