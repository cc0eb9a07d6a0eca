use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::history::DayBoundary;
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageOption};

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. \
                Use either `local` or `production`."
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
    pub redis_uri: SecretString,
    #[serde(default)]
    pub history: HistorySettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    // signs the session cookie shared with the login service
    pub hmac_secret: SecretString,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct HistorySettings {
    #[serde(
        default = "default_page_size",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub default_page_size: i64,
    #[serde(
        default = "max_page_size",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub max_page_size: i64,
    // days are cut at midnight of this offset from UTC
    #[serde(default, deserialize_with = "deserialize_number_from_string")]
    pub utc_offset_seconds: i32,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: max_page_size(),
            utc_offset_seconds: 0,
        }
    }
}

const fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

const fn max_page_size() -> i64 {
    MAX_PAGE_SIZE
}

impl HistorySettings {
    /// # Panics
    /// a page policy that can't hold its own default is a broken deployment
    #[must_use]
    pub const fn page_option(&self) -> PageOption {
        PageOption::new(self.default_page_size, self.max_page_size)
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn day_boundary(&self) -> Result<DayBoundary, anyhow::Error> {
        DayBoundary::with_offset_seconds(self.utc_offset_seconds).ok_or_else(|| {
            anyhow::anyhow!(
                "utc_offset_seconds must be within +/- 86400, got {}",
                self.utc_offset_seconds
            )
        })
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: SecretString,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub require_ssl: bool,
}

impl DatabaseSettings {
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(self.password.expose_secret())
            .port(self.port)
            .ssl_mode(ssl_mode)
            .database(&self.database_name)
    }
}

#[allow(clippy::missing_errors_doc)]
/// # Panics
/// if the working directory is unreadable or `APP_ENVIRONMENT` is unknown
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // detect environment
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // ex: APP_HISTORY__MAX_PAGE_SIZE=50
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
