use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use tracing::Level;

pub struct AppConfigurationBuilder {
    pub port: Option<String>,
    pub host: Option<String>,
    pub log_level: Option<Level>,
}

impl AppConfigurationBuilder {
    pub fn new() -> Self {
        AppConfigurationBuilder {
            port: None,
            host: None,
            log_level: None,
        }
    }

    pub fn port(&mut self, value: String) -> &mut Self {
        self.port = Some(value);
        self
    }

    pub fn host(&mut self, value: String) -> &mut Self {
        self.host = Some(value);
        self
    }

    pub fn log_level(&mut self, value: Level) -> &mut Self {
        self.log_level = Some(value);
        self
    }

    pub fn load_env(&mut self) -> &mut Self {
        self.port = env::var(EnvNames::PORT).ok();
        self.host = env::var(EnvNames::HOST).ok();
        self.log_level = env::var(EnvNames::LOG_LEVEL)
            .ok()
            .and_then(|v| Level::from_str(v.as_str()).ok());

        self
    }

    pub fn build(&self) -> AppConfiguration {
        AppConfiguration::new(
            self.port.clone().unwrap_or("8080".to_string()),
            self.host.clone().unwrap_or("0.0.0.0".to_string()),
            self.log_level.unwrap_or(Level::INFO),
        )
    }
}

impl Default for AppConfigurationBuilder {
    fn default() -> Self {
        AppConfigurationBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfiguration {
    port: String,
    host: String,
    log_level: Level,
}

impl AppConfiguration {
    pub fn new(port: String, host: String, log_level: Level) -> Self {
        AppConfiguration {
            port,
            host,
            log_level,
        }
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn envs(&self) -> HashMap<String, String> {
        let mut envs = HashMap::new();

        envs.insert(EnvNames::PORT.to_owned(), self.port.to_owned());
        envs.insert(EnvNames::HOST.to_owned(), self.host.to_owned());
        envs.insert(EnvNames::LOG_LEVEL.to_owned(), self.log_level.to_string());

        envs
    }
}

pub struct EnvNames;

impl EnvNames {
    pub const PORT: &'static str = "PORT";
    pub const HOST: &'static str = "HOST";
    pub const LOG_LEVEL: &'static str = "LOG_LEVEL";
}
