use crate::model::config::{Config, ConfigTable};
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use crate::model::locale::Locale;
use crate::model::log::system::SystemLog;
use macros::log;
use std::fs;
use std::io;
use std::ops::Deref;
use std::path::Path;

pub const CONFIG_PATH: &str = "./config.toml";

pub struct AppConfig {
    config: Config,
    locale: Locale,
    // Collected while loading, logged once logging is up
    notices: Vec<SystemLog>,
}

impl AppConfig {
    pub fn new() -> Result<Self, Error> {
        Self::load(Path::new(CONFIG_PATH))
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let mut notices = Vec::new();
        let config = match fs::read_to_string(path) {
            Ok(toml_string) => Self::parse(&toml_string)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                notices.push(SystemLog::DefaultConfigUsed);
                Config::default()
            }
            Err(err) => {
                return Err(SystemError::InvalidConfig {
                    reason: err.to_string(),
                }
                .into());
            }
        };
        Self::from_config(config, notices)
    }

    pub fn parse(toml_string: &str) -> Result<Config, Error> {
        let config = toml::from_str::<ConfigTable>(toml_string)
            .map_err(|err| SystemError::InvalidConfig {
                reason: err.message().to_string(),
            })?
            .config;
        Ok(config)
    }

    fn from_config(config: Config, mut notices: Vec<SystemLog>) -> Result<Self, Error> {
        Self::validate(&config)?;
        let (locale, recognized) = Locale::resolve(&config.language);
        if !recognized {
            notices.push(SystemLog::LocaleFallback {
                value: config.language.clone(),
                fallback: locale.code().to_string(),
            });
        }
        Ok(Self {
            config,
            locale,
            notices,
        })
    }

    fn validate(config: &Config) -> Result<(), SystemError> {
        if config.log_level.trim().is_empty() {
            return Err(SystemError::InvalidConfig {
                reason: "log_level must not be empty".to_string(),
            });
        }
        if let Some(name) = config
            .ignore
            .iter()
            .find(|name| name.is_empty() || name.contains(['/', '\\']))
        {
            return Err(SystemError::InvalidConfig {
                reason: format!("ignore entry must be a plain name: {name:?}"),
            });
        }
        Ok(())
    }

    /// Language chosen at startup, already validated.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn log_notices(&self) {
        for notice in &self.notices {
            log!(notice);
        }
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
