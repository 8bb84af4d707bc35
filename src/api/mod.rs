use actix_web::web;

pub mod health;
pub mod metrics;
pub mod gallery;
pub mod users;
pub mod swagger;

/// Rotas do diretório (páginas HTML + API JSON)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))

        // ==================== PAGES ====================
        .route("/", web::get().to(gallery::index))
        .route("/select", web::get().to(gallery::select_user))
        .service(
            web::scope("/users")
                .route("/{index}", web::get().to(gallery::show_user))
                .route("/{index}/prev", web::get().to(gallery::prev_user))
                .route("/{index}/next", web::get().to(gallery::next_user))
        )

        // ==================== JSON API ====================
        .service(
            web::scope("/api/v1/users")
                .route("", web::get().to(users::list_users))
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::search_service::fixtures;
    use crate::services::Directory;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_reports_loaded_users() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Directory::Loaded(fixtures::users())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["users_loaded"], 4);
    }

    #[actix_web::test]
    async fn test_metrics_text_format() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Directory::Failed("down".to_string())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("# TYPE directory_page_renders_total counter"));
        assert!(text.contains("directory_errors_total"));
    }
}
