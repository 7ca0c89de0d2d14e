use std::time::Duration as StdDuration;

use crate::auth::application::domain::AdminKey;
use crate::upload::adapter::outgoing::azure_blob::{StorageAccount, StorageAccountError};
use crate::upload::application::domain::policies::upload_policy::UploadPolicyConfig;
use crate::upload::application::services::GrantSettings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("Either STORAGE_CONNECTION_STRING or STORAGE_ACCOUNT_NAME must be set")]
    NoStorageAccount,

    #[error("Invalid storage account: {0}")]
    Storage(#[from] StorageAccountError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    fn parse(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some("production") => Environment::Production,
            Some("test") => Environment::Test,
            _ => Environment::Development,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    Relay {
        server: String,
        username: String,
        password: String,
        from: String,
    },
    // Mailpit, MailHog, etc.
    Local {
        host: String,
        port: u16,
        from: String,
    },
    Disabled,
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub admin_key: AdminKey,
    pub storage_account: StorageAccount,
    pub upload_policy: UploadPolicyConfig,
    pub grant: GrantSettings,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// `lookup` returns the raw value of a variable, `None` when unset.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let environment = Environment::parse(get("RUST_ENV"));

        let host = require("HOST")?;
        let port = parse_number::<u16>("PORT", require("PORT")?)?;
        let database_url = require("DATABASE_URL")?;
        let admin_key = AdminKey::new(get("ADMIN_KEY"));

        let storage_account = match (get("STORAGE_CONNECTION_STRING"), get("STORAGE_ACCOUNT_NAME")) {
            (Some(conn), _) => StorageAccount::from_connection_string(&conn)?,
            (None, Some(name)) => StorageAccount::without_key(&name)?,
            (None, None) => return Err(ConfigError::NoStorageAccount),
        };

        let container = get("STORAGE_CONTAINER")
            .unwrap_or_else(|| UploadPolicyConfig::DEFAULT_CONTAINER_NAME.to_string());
        let max_bytes = match get("UPLOADS_MAX_BYTES") {
            Some(raw) => parse_number::<u64>("UPLOADS_MAX_BYTES", raw)?,
            None => UploadPolicyConfig::DEFAULT_MAX_BYTES,
        };
        let upload_policy = match get("UPLOADS_ALLOWED_TYPES") {
            Some(raw) => UploadPolicyConfig::new(container, max_bytes, raw.split(',')),
            None => UploadPolicyConfig::new(
                container,
                max_bytes,
                UploadPolicyConfig::DEFAULT_ALLOWED_CONTENT_TYPES.iter(),
            ),
        };

        let defaults = GrantSettings::default();
        let seconds = |key: &'static str| -> Result<Option<i64>, ConfigError> {
            get(key).map(|raw| parse_number::<i64>(key, raw)).transpose()
        };
        let grant = GrantSettings {
            ttl: match seconds("UPLOADS_GRANT_TTL_SECS")? {
                Some(s) if (1..=GrantSettings::MAX_TTL_SECS).contains(&s) => {
                    chrono::Duration::seconds(s)
                }
                Some(s) => return invalid("UPLOADS_GRANT_TTL_SECS", s),
                None => defaults.ttl,
            },
            clock_skew: match seconds("UPLOADS_CLOCK_SKEW_SECS")? {
                Some(s) if (0..=GrantSettings::MAX_CLOCK_SKEW_SECS).contains(&s) => {
                    chrono::Duration::seconds(s)
                }
                Some(s) => return invalid("UPLOADS_CLOCK_SKEW_SECS", s),
                None => defaults.clock_skew,
            },
            storage_timeout: match seconds("STORAGE_TIMEOUT_SECS")? {
                Some(s) if s > 0 => StdDuration::from_secs(s as u64),
                Some(s) => return invalid("STORAGE_TIMEOUT_SECS", s),
                None => defaults.storage_timeout,
            },
        };

        let smtp = smtp_from(environment, &get, &require)?;

        Ok(Self {
            environment,
            host,
            port,
            database_url,
            admin_key,
            storage_account,
            upload_policy,
            grant,
            smtp,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn smtp_from<G, R>(environment: Environment, get: &G, require: &R) -> Result<SmtpConfig, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    R: Fn(&'static str) -> Result<String, ConfigError>,
{
    if environment == Environment::Test {
        let Some(from) = get("EMAIL_FROM") else {
            return Ok(SmtpConfig::Disabled);
        };
        let host = get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string());
        let port = match get("SMTP_PORT") {
            Some(raw) => parse_number::<u16>("SMTP_PORT", raw)?,
            None => 1025,
        };
        return Ok(SmtpConfig::Local { host, port, from });
    }

    match get("SMTP_SERVER") {
        Some(server) => Ok(SmtpConfig::Relay {
            server,
            username: require("SMTP_USERNAME")?,
            password: require("SMTP_PASSWORD")?,
            from: require("EMAIL_FROM")?,
        }),
        None => Ok(SmtpConfig::Disabled),
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.parse::<T>()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

fn invalid<T>(key: &'static str, value: i64) -> Result<T, ConfigError> {
    Err(ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
