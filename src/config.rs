//! Runtime settings from the process environment.

use crate::error::ConfigError;
use crate::id::{IdGenerator, SequentialIds, UuidIds};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Arc::new(UuidIds),
            IdStrategy::Sequential => Arc::new(SequentialIds::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" => Ok(IdStrategy::Sequential),
            other => Err(format!("unknown id strategy '{other}' (expected uuid or sequential)")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    /// Directory with `dishes.json` / `orders.json` to start from. Empty collections when unset.
    pub seed_dir: Option<PathBuf>,
    pub id_strategy: IdStrategy,
    pub body_limit: usize,
}

impl Settings {
    /// Read `BIND_ADDR`, `SEED_DIR`, `ID_STRATEGY` and `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let id_strategy = parse_or(&lookup, "ID_STRATEGY", "uuid")?;
        let body_limit = match lookup("BODY_LIMIT_BYTES") {
            Some(raw) => parse("BODY_LIMIT_BYTES", &raw)?,
            None => DEFAULT_BODY_LIMIT,
        };
        let seed_dir = lookup("SEED_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            bind_addr,
            seed_dir,
            id_strategy,
            body_limit,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            seed_dir: None,
            id_strategy: IdStrategy::default(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        tracing::debug!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse(key, &raw)
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnv {
        key,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(settings(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn reads_every_key() {
        let s = settings(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("SEED_DIR", "/srv/seed"),
            ("ID_STRATEGY", "Sequential"),
            ("BODY_LIMIT_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(s.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(s.seed_dir, Some(PathBuf::from("/srv/seed")));
        assert_eq!(s.id_strategy, IdStrategy::Sequential);
        assert_eq!(s.body_limit, 1024);
    }

    #[test]
    fn invalid_values_name_the_key() {
        let err = settings(&[("BIND_ADDR", "not an address")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid BIND_ADDR"));
        let err = settings(&[("ID_STRATEGY", "random")]).unwrap_err();
        assert!(err.to_string().contains("unknown id strategy 'random'"));
        let err = settings(&[("BODY_LIMIT_BYTES", "-1")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid BODY_LIMIT_BYTES"));
    }

    #[test]
    fn blank_seed_dir_is_ignored() {
        assert_eq!(settings(&[("SEED_DIR", "  ")]).unwrap().seed_dir, None);
    }

    #[test]
    fn sequential_strategy_counts_from_one() {
        assert_eq!(IdStrategy::Sequential.generator().next_id(), "1");
    }
}
