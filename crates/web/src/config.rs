use catalog_facade::models::Account;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the `css/` and `js/` assets (default: `static`).
    pub static_dir: String,
    /// Session token configuration.
    pub jwt: JwtConfig,
    /// Accounts allowed to log in.
    pub accounts: Vec<Account>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Account entry {0:?} must have the form username:ROLE[,ROLE]:hash")]
    MalformedAccount(String),

    #[error("Account entry {0:?} has no roles")]
    MissingRoles(String),
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `8080`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `STATIC_DIR`           | `static`  |
    /// | `CATALOG_ACCOUNTS`     | empty     |
    ///
    /// # Panics
    ///
    /// Panics on malformed numbers or account entries, and when the JWT
    /// configuration is incomplete.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        let accounts = parse_accounts(&std::env::var("CATALOG_ACCOUNTS").unwrap_or_default())
            .unwrap_or_else(|e| panic!("Invalid CATALOG_ACCOUNTS: {e}"));
        if accounts.is_empty() {
            tracing::warn!("CATALOG_ACCOUNTS is empty, nobody can log in");
        }

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            request_timeout_secs,
            static_dir,
            jwt,
            accounts,
        }
    }
}

/// Parse `username:ROLE[,ROLE]:argon2-hash` entries separated by `;`.
///
/// Account ids follow the entry order, starting at 1.
pub fn parse_accounts(raw: &str) -> Result<Vec<Account>, ConfigError> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .zip(1..)
        .map(|(entry, id)| {
            let mut parts = entry.splitn(3, ':');
            let (Some(username), Some(roles), Some(hash)) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(ConfigError::MalformedAccount(entry.to_string()));
            };
            if username.trim().is_empty() || hash.trim().is_empty() {
                return Err(ConfigError::MalformedAccount(entry.to_string()));
            }

            let roles: Vec<String> = roles
                .split(',')
                .map(|role| role.trim().to_uppercase())
                .filter(|role| !role.is_empty())
                .collect();
            if roles.is_empty() {
                return Err(ConfigError::MissingRoles(entry.to_string()));
            }

            Ok(Account {
                id,
                username: username.trim().to_string(),
                password_hash: hash.trim().to_string(),
                roles,
            })
        })
        .collect()
}
