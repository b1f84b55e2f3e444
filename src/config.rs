//! Configuration loading from file and CLI.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Filename the original tool hard-coded; now only the last-resort default.
const DEFAULT_INPUT: &str = "malha-exemplo-1.txt";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Matrix file to load when no CLI argument is given.
    #[serde(default)]
    pub input_path: Option<PathBuf>,
}

impl Config {
    /// Load from ~/.config/matriz/config.toml or current dir config.toml
    pub fn load() -> Self {
        let paths = [
            dirs::config_dir().map(|d| d.join("matriz").join("config.toml")),
            Some(PathBuf::from("config.toml")),
        ];
        for path in paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(s) = std::fs::read_to_string(&path) {
                    if let Ok(c) = toml::from_str(&s) {
                        return c;
                    }
                }
            }
        }
        Self::default()
    }

    /// Resolve the input file:
    /// 1) CLI override
    /// 2) config file
    /// 3) default filename
    pub fn input_path(&self, cli_path: Option<&Path>) -> PathBuf {
        if let Some(p) = cli_path {
            return p.to_path_buf();
        }
        if let Some(cfg) = &self.input_path {
            return cfg.clone();
        }
        PathBuf::from(DEFAULT_INPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins() {
        let config = Config {
            input_path: Some(PathBuf::from("from-config.txt")),
        };
        let resolved = config.input_path(Some(Path::new("from-cli.txt")));
        assert_eq!(resolved, PathBuf::from("from-cli.txt"));
    }

    #[test]
    fn config_file_beats_default() {
        let config: Config = toml::from_str("input_path = \"from-config.txt\"").unwrap();
        assert_eq!(config.input_path(None), PathBuf::from("from-config.txt"));
    }

    #[test]
    fn falls_back_to_default_filename() {
        let config = Config::default();
        assert_eq!(config.input_path(None), PathBuf::from(DEFAULT_INPUT));
    }
}
