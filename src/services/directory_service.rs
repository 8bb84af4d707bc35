use crate::models::User;
use crate::services::random_user_service::UserSource;
use crate::services::search_service;
use crate::utils::DirectoryError;

/// Lista de usuários carregada uma vez no startup (ou o erro do carregamento).
/// Imutável depois de criada; compartilhada via `web::Data`.
#[derive(Debug, Clone)]
pub enum Directory {
    Loaded(Vec<User>),
    Failed(String),
}

impl Directory {
    pub async fn load(source: &dyn UserSource) -> Self {
        match source.fetch_users().await {
            Ok(users) => {
                log::info!("📇 Directory loaded with {} users", users.len());
                Directory::Loaded(users)
            }
            Err(e) => {
                log::error!("❌ Failed to load directory: {}", e);
                Directory::Failed(e.to_string())
            }
        }
    }

    pub fn users(&self) -> Result<&[User], DirectoryError> {
        match self {
            Directory::Loaded(users) => Ok(users),
            Directory::Failed(msg) => Err(DirectoryError::Unavailable(msg.clone())),
        }
    }

    pub fn len(&self) -> usize {
        self.users().map(|u| u.len()).unwrap_or(0)
    }

    /// Recalcula a lista filtrada a partir da lista completa
    pub fn filtered(&self, query: &str) -> Result<Vec<User>, DirectoryError> {
        Ok(search_service::filter_users(self.users()?, query))
    }

    /// Resolve o clique num card: email exibido -> índice na lista filtrada
    pub fn resolve_selection(&self, query: &str, email: &str) -> Result<usize, DirectoryError> {
        let filtered = self.filtered(query)?;
        search_service::position_by_email(&filtered, email)
            .ok_or_else(|| DirectoryError::NotFound(format!("No user with email '{}'", email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::search_service::fixtures;
    use async_trait::async_trait;

    struct FixedSource(Result<Vec<User>, DirectoryError>);

    #[async_trait]
    impl UserSource for FixedSource {
        async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_load_success() {
        let source = FixedSource(Ok(fixtures::users()));
        let directory = Directory::load(&source).await;
        assert_eq!(directory.len(), 4);
        assert!(directory.users().is_ok());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_no_users() {
        let source = FixedSource(Err(DirectoryError::FetchError("connection refused".to_string())));
        let directory = Directory::load(&source).await;
        assert_eq!(directory.len(), 0);
        assert!(matches!(directory.users(), Err(DirectoryError::Unavailable(_))));
        assert!(directory.filtered("").is_err());
    }

    #[test]
    fn test_resolve_selection_uses_filtered_list() {
        let directory = Directory::Loaded(fixtures::users());
        // Sem filtro Linus está no índice 3; filtrando por "or" ele é o único
        assert_eq!(directory.resolve_selection("", "linus.torvalds@example.com"), Ok(3));
        assert_eq!(directory.resolve_selection("or", "linus.torvalds@example.com"), Ok(0));
        assert!(matches!(
            directory.resolve_selection("or", "ada.lovelace@example.com"),
            Err(DirectoryError::NotFound(_))
        ));
    }
}
