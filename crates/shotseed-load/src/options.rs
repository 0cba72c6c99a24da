//! Connection settings resolved from the environment.

use sqlx::postgres::PgConnectOptions;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_DATABASE: &str = "shotgrid_demo";
const DEFAULT_USER: &str = "admin";
const DEFAULT_PASSWORD: &str = "demodemo123";

/// Postgres connection settings, environment-derived with demo-stack
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgOptions {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for PgOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl PgOptions {
    /// Resolve options from `PGHOST`, `PGPORT`, `PGDATABASE`, `PGUSER`, and
    /// `PGPASSWORD`, falling back to the demo defaults. A malformed
    /// `PGPORT` falls back too.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("PGHOST").unwrap_or(defaults.host),
            port: lookup("PGPORT")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.port),
            database: lookup("PGDATABASE").unwrap_or(defaults.database),
            user: lookup("PGUSER").unwrap_or(defaults.user),
            password: lookup("PGPASSWORD").unwrap_or(defaults.password),
        }
    }

    /// Connection options for the pool.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }

    /// Connection url with the password elided, safe for logs and reports.
    pub fn redacted_url(&self) -> String {
        format!(
            "postgres://{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}
