use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub decision: DecisionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let decision = DecisionConfig::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            decision,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Bounds and segment modifiers applied to every loan calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionConfig {
    pub minimum_loan_amount: i64,
    pub maximum_loan_amount: i64,
    pub minimum_loan_period: i32,
    pub maximum_loan_period: i32,
    pub minimum_age: u32,
    pub maximum_age: u32,
    pub segment_1_credit_modifier: i64,
    pub segment_2_credit_modifier: i64,
    pub segment_3_credit_modifier: i64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            minimum_loan_amount: 2000,
            maximum_loan_amount: 10000,
            minimum_loan_period: 12,
            maximum_loan_period: 60,
            minimum_age: 18,
            maximum_age: 70,
            segment_1_credit_modifier: 100,
            segment_2_credit_modifier: 300,
            segment_3_credit_modifier: 1000,
        }
    }
}

impl DecisionConfig {
    /// Reference values with any `LOAN_*` overrides present in the environment applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            minimum_loan_amount: env_override("LOAN_MIN_AMOUNT", defaults.minimum_loan_amount)?,
            maximum_loan_amount: env_override("LOAN_MAX_AMOUNT", defaults.maximum_loan_amount)?,
            minimum_loan_period: env_override("LOAN_MIN_PERIOD", defaults.minimum_loan_period)?,
            maximum_loan_period: env_override("LOAN_MAX_PERIOD", defaults.maximum_loan_period)?,
            minimum_age: env_override("LOAN_MIN_AGE", defaults.minimum_age)?,
            maximum_age: env_override("LOAN_MAX_AGE", defaults.maximum_age)?,
            segment_1_credit_modifier: env_override(
                "LOAN_SEGMENT_1_MODIFIER",
                defaults.segment_1_credit_modifier,
            )?,
            segment_2_credit_modifier: env_override(
                "LOAN_SEGMENT_2_MODIFIER",
                defaults.segment_2_credit_modifier,
            )?,
            segment_3_credit_modifier: env_override(
                "LOAN_SEGMENT_3_MODIFIER",
                defaults.segment_3_credit_modifier,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidDecisionBounds(reason.to_string());

        if self.minimum_loan_amount <= 0 || self.minimum_loan_amount > self.maximum_loan_amount {
            return Err(invalid("loan amount bounds must satisfy 0 < minimum <= maximum"));
        }
        if self.minimum_loan_period <= 0 || self.minimum_loan_period > self.maximum_loan_period {
            return Err(invalid("loan period bounds must satisfy 0 < minimum <= maximum"));
        }
        if self.minimum_age >= self.maximum_age {
            return Err(invalid("minimum age must be below maximum age"));
        }
        if !(0 < self.segment_1_credit_modifier
            && self.segment_1_credit_modifier < self.segment_2_credit_modifier
            && self.segment_2_credit_modifier < self.segment_3_credit_modifier)
        {
            return Err(invalid(
                "segment credit modifiers must be positive and strictly increasing",
            ));
        }
        if self
            .segment_3_credit_modifier
            .checked_mul(i64::from(self.maximum_loan_period))
            .is_none()
        {
            return Err(invalid(
                "segment 3 credit modifier times maximum loan period must fit in an i64",
            ));
        }
        Ok(())
    }
}

fn env_override<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidDecisionBounds(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be an integer, found '{value}'")
            }
            ConfigError::InvalidDecisionBounds(reason) => {
                write!(f, "invalid decision configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidDecisionBounds(_) => None,
        }
    }
}
