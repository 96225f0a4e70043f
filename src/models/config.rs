use std::{env, time::Duration};

use thiserror::Error as ThisError;

const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1_000;
const DEFAULT_REROLL_HISTORY: usize = 100;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),
    #[error("{0} must be a {1}, got {2:?}")]
    Invalid(&'static str, &'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// How often running giveaways are refreshed and checked for expiry.
    pub refresh_interval: Duration,
    /// How many ended giveaways can still be rerolled.
    pub reroll_history: usize,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let refresh_interval = match lookup("REFRESH_INTERVAL_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(millis) if millis > 0 => millis,
                _ => {
                    return Err(ConfigError::Invalid(
                        "REFRESH_INTERVAL_MS",
                        "positive number of milliseconds",
                        value,
                    ))
                }
            },
            None => DEFAULT_REFRESH_INTERVAL_MS,
        };

        let reroll_history = match lookup("REROLL_HISTORY") {
            Some(value) => value.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid("REROLL_HISTORY", "whole number", value.clone())
            })?,
            None => DEFAULT_REROLL_HISTORY,
        };

        Ok(Config {
            discord_token,
            refresh_interval: Duration::from_millis(refresh_interval),
            reroll_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[("DISCORD_TOKEN", "token")]).unwrap();

        assert_eq!(config.refresh_interval, Duration::from_secs(1));
        assert_eq!(config.reroll_history, 100);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("DISCORD_TOKEN", "token"),
            ("REFRESH_INTERVAL_MS", "2500"),
            ("REROLL_HISTORY", "5"),
        ])
        .unwrap();

        assert_eq!(config.refresh_interval, Duration::from_millis(2_500));
        assert_eq!(config.reroll_history, 5);
    }

    #[test]
    fn token_is_required() {
        assert_eq!(
            config(&[]).unwrap_err(),
            ConfigError::Missing("DISCORD_TOKEN")
        );
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(matches!(
            config(&[("DISCORD_TOKEN", "token"), ("REFRESH_INTERVAL_MS", "0")]),
            Err(ConfigError::Invalid("REFRESH_INTERVAL_MS", _, _))
        ));
    }
}
