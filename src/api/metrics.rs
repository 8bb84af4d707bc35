use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static PAGE_RENDERS: AtomicU64 = AtomicU64::new(0);
static MODAL_OPENS: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_page_renders() {
    PAGE_RENDERS.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_modal_opens() {
    MODAL_OPENS.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub directory_page_renders_total: u64,
    pub directory_modal_opens_total: u64,
    pub directory_errors_total: u64,
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Directory metrics (Prometheus text format)", body = MetricsResponse)
    )
)]
pub async fn get_metrics() -> HttpResponse {
    let pages = PAGE_RENDERS.load(Ordering::Relaxed);
    let modals = MODAL_OPENS.load(Ordering::Relaxed);
    let errors = ERROR_COUNT.load(Ordering::Relaxed);

    let metrics = format!(
        "# HELP directory_page_renders_total Total number of rendered directory pages\n\
         # TYPE directory_page_renders_total counter\n\
         directory_page_renders_total {}\n\
         \n\
         # HELP directory_modal_opens_total Total number of rendered user modals\n\
         # TYPE directory_modal_opens_total counter\n\
         directory_modal_opens_total {}\n\
         \n\
         # HELP directory_errors_total Total number of error responses\n\
         # TYPE directory_errors_total counter\n\
         directory_errors_total {}\n",
        pages, modals, errors
    );

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics)
}
