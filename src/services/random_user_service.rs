use async_trait::async_trait;
use reqwest;

use crate::models::{RandomUserResponse, User};
use crate::utils::DirectoryError;

/// Origem dos usuários do diretório
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError>;
}

#[derive(Debug, Clone)]
pub struct RandomUserClient {
    client: reqwest::Client,
    base_url: String,
    results: u32,
    nationality: String,
}

impl RandomUserClient {
    pub fn new(base_url: &str, results: u32, nationality: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            results,
            nationality: nationality.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}?nat={}&results={}",
            self.base_url,
            urlencoding::encode(&self.nationality),
            self.results
        )
    }
}

#[async_trait]
impl UserSource for RandomUserClient {
    /// Uma única requisição, sem retry
    async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError> {
        let url = self.endpoint();
        log::info!("👥 Fetching {} users from {}", self.results, url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DirectoryError::FetchError(format!("Failed to fetch users: {}", e)))?;

        if !response.status().is_success() {
            return Err(DirectoryError::FetchError(format!(
                "Random user API error: {}",
                response.status()
            )));
        }

        let data: RandomUserResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::DecodeError(format!("Failed to parse users: {}", e)))?;

        log::info!("✅ Retrieved {} users", data.results.len());

        Ok(data.results)
    }
}
