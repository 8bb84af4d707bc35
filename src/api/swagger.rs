use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        version = "1.0.0",
        description = "JSON endpoints of the user directory. \n\n**Features:**\n- Random user list fetched once at startup\n- Case-insensitive search over email, name, city and state\n- Health monitoring and metrics"
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Users
        crate::api::users::list_users,
    ),
    components(
        schemas(
            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,

            // Users
            crate::api::users::UsersResponse,
            crate::models::User,
        )
    ),
    tags(
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
        (name = "Users", description = "Filtered user list as JSON."),
    )
)]
pub struct ApiDoc;
