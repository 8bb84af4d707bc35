use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::api::gallery::SearchQuery;
use crate::api::metrics;
use crate::models::User;
use crate::services::Directory;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UsersResponse {
    pub success: bool,
    pub count: usize,
    pub users: Vec<User>,
}

/// GET /api/v1/users?q=texto
/// Retorna a lista filtrada em JSON
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Filtered user list", body = UsersResponse),
        (status = 503, description = "User list could not be fetched")
    )
)]
pub async fn list_users(
    query: web::Query<SearchQuery>,
    directory: web::Data<Directory>,
) -> HttpResponse {
    log::info!("👥 GET /api/v1/users?q={}", query.q);

    match directory.filtered(&query.q) {
        Ok(users) => {
            log::info!("✅ Returning {} users", users.len());
            HttpResponse::Ok().json(UsersResponse {
                success: true,
                count: users.len(),
                users,
            })
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            metrics::increment_error_count();
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}
