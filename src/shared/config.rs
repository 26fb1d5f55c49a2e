use std::env;
use std::ops::RangeInclusive;

/// Costs the bcrypt crate accepts.
const BCRYPT_COSTS: RangeInclusive<u32> = 4..=31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    Argon2,
    Bcrypt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub application_name: String,
    pub password_hasher: HasherKind,
    pub bcrypt_cost: u32,
    pub argon2: Argon2Settings,
    pub db_max_connections: u32,
    pub max_upload_bytes: usize,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let password_hasher = match lookup("PASSWORD_HASHER").as_deref() {
            None | Some("argon2") => HasherKind::Argon2,
            Some("bcrypt") => HasherKind::Bcrypt,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "PASSWORD_HASHER",
                    value: other.to_string(),
                })
            }
        };

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !BCRYPT_COSTS.contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            application_name: lookup("APP_NAME").unwrap_or_else(|| "cvmakerApp".to_string()),
            password_hasher,
            bcrypt_cost,
            argon2: Argon2Settings {
                memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", 4 * 1024)?,
                iterations: parse_or(&lookup, "ARGON2_ITERATIONS", 3)?,
                parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", 1)?,
            },
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 20)?,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 5 * 1024 * 1024)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", false)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
