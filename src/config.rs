use eyre::{eyre, Report};
use secrecy::SecretString;
use std::collections::HashSet;
use std::env;

/// Operator ids allowed to run charges. Built once at startup, read-only
/// afterwards.
pub type AdminSet = HashSet<i64>;

#[derive(Debug, Clone)]
pub struct BackendInfo {
    pub base_url: String,
    pub token: SecretString,
}

impl BackendInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            base_url: required("HANUM_PAYMENT_BACKEND_URL")?,
            token: SecretString::new(required("HANUM_PAYMENT_BACKEND_TOKEN")?.into()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DbInfo {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub database: String,
}

impl DbInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            host: required("HANUM_DB_HOST")?,
            port: required("HANUM_DB_PORT")?.parse()?,
            user: required("HANUM_DB_USER")?,
            password: SecretString::new(required("HANUM_DB_PASSWORD")?.into()),
            database: required("HANUM_DB_DATABASE")?,
        })
    }

    pub fn url(&self) -> String {
        use secrecy::ExposeSecret;
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.host,
            self.port,
            self.database
        )
    }
}

#[derive(Debug, Clone)]
pub struct DiscordInfo {
    pub bot_token: SecretString,
    pub guild_id: u64,
}

impl DiscordInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            bot_token: SecretString::new(required("HANUM_DISCORD_TOKEN")?.into()),
            guild_id: required("HANUM_DISCORD_GUILD_ID")?.parse()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendInfo,

    pub db: DbInfo,

    pub discord: DiscordInfo,

    pub admins: AdminSet,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            backend: BackendInfo::new()?,

            db: DbInfo::new()?,

            discord: DiscordInfo::new()?,

            admins: parse_admins(&required("HANUM_PAYMENT_ADMINS")?)?,
        })
    }

    /// Loads `.env` then reads the environment. Call once at startup;
    /// a missing required variable is fatal.
    pub fn load() -> Result<Self, Report> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}

fn required(name: &str) -> Result<String, Report> {
    env::var(name).map_err(|_| eyre!("{} must be set", name))
}

fn parse_admins(raw: &str) -> Result<AdminSet, Report> {
    raw.split(',')
        .map(|id| {
            id.trim()
                .parse::<i64>()
                .map_err(|_| eyre!("HANUM_PAYMENT_ADMINS contains a non-integer id: {:?}", id))
        })
        .collect()
}
