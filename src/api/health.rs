use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::Directory;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub users_loaded: usize,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(directory: web::Data<Directory>) -> impl Responder {
    let status = match directory.get_ref() {
        Directory::Loaded(_) => "healthy",
        Directory::Failed(_) => "degraded",
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: "user-directory".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users_loaded: directory.len(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
