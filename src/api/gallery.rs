use actix_web::{http::header, web, HttpResponse, HttpResponseBuilder};
use serde::Deserialize;

use crate::api::metrics;
use crate::services::Directory;
use crate::utils::DirectoryError;
use crate::view::{render_gallery, with_search, ModalNavigator, PageView};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive search over email, first/last name, city and state
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    pub email: String,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Prev,
    Next,
}

fn html(mut builder: HttpResponseBuilder, page: &PageView) -> HttpResponse {
    metrics::increment_page_renders();
    builder
        .content_type("text/html; charset=utf-8")
        .body(page.render())
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Diretório indisponível: mensagem estática, sem renderização parcial
fn unavailable(query: &str, e: &DirectoryError) -> HttpResponse {
    log::error!("❌ Directory unavailable: {}", e);
    metrics::increment_error_count();
    html(HttpResponse::ServiceUnavailable(), &PageView::load_error(query))
}

fn not_found(query: &str, directory: &Directory, notice: &str) -> HttpResponse {
    metrics::increment_error_count();
    match directory.filtered(query) {
        Ok(filtered) => {
            let page = PageView::gallery(query, render_gallery(&filtered, query)).with_notice(notice);
            html(HttpResponse::NotFound(), &page)
        }
        Err(e) => unavailable(query, &e),
    }
}

// GET /?q=texto
pub async fn index(
    query: web::Query<SearchQuery>,
    directory: web::Data<Directory>,
) -> HttpResponse {
    log::info!("🖼️  GET / - search: '{}'", query.q);

    match directory.filtered(&query.q) {
        Ok(filtered) => {
            log::debug!("🔍 {} of {} users match", filtered.len(), directory.len());
            let page = PageView::gallery(&query.q, render_gallery(&filtered, &query.q));
            html(HttpResponse::Ok(), &page)
        }
        Err(e) => unavailable(&query.q, &e),
    }
}

// GET /select?email=...&q=texto
pub async fn select_user(
    query: web::Query<SelectQuery>,
    directory: web::Data<Directory>,
) -> HttpResponse {
    log::info!("👆 GET /select - email: {}", query.email);

    match directory.resolve_selection(&query.q, &query.email) {
        Ok(index) => see_other(with_search(&format!("/users/{}", index), &query.q)),
        Err(DirectoryError::NotFound(msg)) => {
            log::warn!("⚠️  {}", msg);
            not_found(&query.q, &directory, "User not found")
        }
        Err(e) => unavailable(&query.q, &e),
    }
}

// GET /users/{index}?q=texto
pub async fn show_user(
    path: web::Path<usize>,
    query: web::Query<SearchQuery>,
    directory: web::Data<Directory>,
) -> HttpResponse {
    let index = path.into_inner();
    log::info!("🪪 GET /users/{} - search: '{}'", index, query.q);

    let filtered = match directory.filtered(&query.q) {
        Ok(filtered) => filtered,
        Err(e) => return unavailable(&query.q, &e),
    };

    match ModalNavigator::open(&filtered, index) {
        Some(modal) => {
            metrics::increment_modal_opens();
            let page = PageView::gallery(&query.q, render_gallery(&filtered, &query.q))
                .with_modal(modal.render(&query.q));
            html(HttpResponse::Ok(), &page)
        }
        None => {
            log::warn!("⚠️  Index {} out of bounds ({} users)", index, filtered.len());
            not_found(&query.q, &directory, "User not found")
        }
    }
}

// GET /users/{index}/prev?q=texto
pub async fn prev_user(
    path: web::Path<usize>,
    query: web::Query<SearchQuery>,
    directory: web::Data<Directory>,
) -> HttpResponse {
    step(path.into_inner(), &query.q, &directory, Step::Prev)
}

// GET /users/{index}/next?q=texto
pub async fn next_user(
    path: web::Path<usize>,
    query: web::Query<SearchQuery>,
    directory: web::Data<Directory>,
) -> HttpResponse {
    step(path.into_inner(), &query.q, &directory, Step::Next)
}

/// Recalcula lista filtrada + índice a cada navegação
fn step(index: usize, query: &str, directory: &Directory, step: Step) -> HttpResponse {
    let filtered = match directory.filtered(query) {
        Ok(filtered) => filtered,
        Err(e) => return unavailable(query, &e),
    };

    match ModalNavigator::open(&filtered, index) {
        Some(modal) => {
            let target = match step {
                Step::Prev => modal.prev(),
                Step::Next => modal.next(),
            };
            log::debug!("↔️  {:?} {} -> {}", step, index, target.index());
            see_other(with_search(&format!("/users/{}", target.index()), query))
        }
        None => not_found(query, directory, "User not found"),
    }
}
