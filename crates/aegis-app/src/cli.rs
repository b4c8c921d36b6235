//! CLI argument definitions for the Aegis binary.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Aegis — an educational console chatbot for cybersecurity awareness.
#[derive(Parser, Debug)]
#[command(name = "aegis", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Path to the flat-file memory store.
    #[arg(short = 'm', long = "memory-file")]
    pub memory_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Disable the character-by-character typing effect.
    #[arg(long = "no-typing")]
    pub no_typing: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Skip the startup banner and greeting.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > AEGIS_CONFIG env var > ~/.aegis/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("AEGIS_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the memory file path.
    ///
    /// Priority: --memory-file flag > config file value (with ~ expanded).
    pub fn resolve_memory_file(&self, config_value: &str) -> PathBuf {
        if let Some(ref p) = self.memory_file {
            return p.clone();
        }
        expand_home(config_value)
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_value: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_value.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".aegis").join("config.toml");
    }
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".aegis").join("config.toml");
    }
    PathBuf::from("config.toml")
}

/// Expand a leading ~ to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path.starts_with("~/") || path.starts_with("~\\") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE")
            .or_else(|_| std::env::var("HOME"))
            .unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(&path[2..])
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_plain_path() {
        assert_eq!(expand_home("/tmp/memory.txt"), PathBuf::from("/tmp/memory.txt"));
    }

    #[test]
    fn test_resolve_log_level_prefers_flag() {
        let args = CliArgs::parse_from(["aegis", "--log-level", "debug"]);
        assert_eq!(args.resolve_log_level("info"), "debug");
    }

    #[test]
    fn test_resolve_log_level_falls_back_to_config() {
        let args = CliArgs::parse_from(["aegis"]);
        assert_eq!(args.resolve_log_level("warn"), "warn");
    }

    #[test]
    fn test_resolve_memory_file_prefers_flag() {
        let args = CliArgs::parse_from(["aegis", "--memory-file", "/tmp/m.txt"]);
        assert_eq!(
            args.resolve_memory_file("~/.aegis/memory.txt"),
            PathBuf::from("/tmp/m.txt")
        );
    }

    #[test]
    fn test_presentation_flags() {
        let args = CliArgs::parse_from(["aegis", "--no-typing", "--no-color", "-q"]);
        assert!(args.no_typing);
        assert!(args.no_color);
        assert!(args.quiet);
    }
}
