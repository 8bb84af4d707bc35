pub mod gallery;
pub mod modal;
pub mod page;

pub use gallery::*;
pub use modal::*;
pub use page::*;

/// Monta a query string de busca preservada entre navegações
pub(crate) fn search_query(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        String::new()
    } else {
        format!("q={}", urlencoding::encode(query))
    }
}

pub(crate) fn with_search(path: &str, query: &str) -> String {
    match search_query(query) {
        q if q.is_empty() => path.to_string(),
        q => format!("{}?{}", path, q),
    }
}
