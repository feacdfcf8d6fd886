pub mod ai;
pub mod error;

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(body: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            body,
        })
    }
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "message": "Route not found" }))
}

#[get("/api")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Road analysis API is running!",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(
        web::scope("/api/ai")
            .service(ai::test)
            .service(ai::validate_image)
            .service(ai::detect_pothole)
            .service(ai::analyze_image),
    )
    .default_service(web::to(not_found));
}
