use std::env;

pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api/";
const DEFAULT_RESULTS: u32 = 12;
const DEFAULT_NATIONALITY: &str = "us";

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub random_user_url: String,
    pub results: u32,
    pub nationality: String,
    pub cors_origins: Vec<String>,
}

impl Settings {
    /// Lê configuração das variáveis de ambiente (após dotenv)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or_default(&lookup, "PORT", 3002u16);
        let random_user_url = lookup("RANDOM_USER_URL")
            .unwrap_or_else(|| DEFAULT_RANDOM_USER_URL.to_string());
        let results = parse_or_default(&lookup, "RANDOM_USER_RESULTS", DEFAULT_RESULTS);
        let nationality = lookup("RANDOM_USER_NAT")
            .unwrap_or_else(|| DEFAULT_NATIONALITY.to_string());
        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["http://localhost:3000".to_string()]);

        Self {
            host,
            port,
            random_user_url,
            results,
            nationality,
            cors_origins,
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("⚠️  Invalid {}='{}', using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}
