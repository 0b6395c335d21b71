//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fmt::Write;
use std::path::PathBuf;

const APP_DIR: &str = "timed-quiz";
const PROJECT_FILES: [&str; 2] = ["quiz.toml", ".quiz.toml"];
const ENV_PREFIX: &str = "TIMED_QUIZ_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. `TIMED_QUIZ_*` environment variables (`__` separates sections)
    /// 3. Project root: `./quiz.toml` or `./.quiz.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/timed-quiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = config_path {
            if !path.exists() {
                let message = format!("config file not found: {}", path.display());
                return Err(Box::new(figment::Error::from(message)));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/timed-quiz/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources() -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");

        match Self::project_config_path() {
            Some(path) => {
                let _ = writeln!(out, "  [FOUND] Project: {}", path.display());
            }
            None => {
                let _ = writeln!(out, "  [     ] Project: ./quiz.toml or ./.quiz.toml");
            }
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            let _ = writeln!(out, "  [{}] Global:  {}", marker, path.display());
        }

        let _ = writeln!(out, "  [     ] Env:     {}*", ENV_PREFIX);
        let _ = writeln!(out, "  [     ] Default: built-in defaults");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::time::Duration;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.quiz.csv.is_none());
        assert!(!config.quiz.shuffle);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("timed-quiz"));
    }

    #[test]
    fn test_explicit_file_is_applied() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[quiz]\ncsv = \"problems.csv\"\nshuffle = true\nlimit_secs = 12\n\n\
             [output]\nformat = \"json\""
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&file.path().to_path_buf())).unwrap();
        let quiz = config.quiz.to_quiz_config();

        assert_eq!(quiz.source_path, PathBuf::from("problems.csv"));
        assert!(quiz.shuffle);
        assert_eq!(quiz.time_limit, Duration::from_secs(12));
        assert_eq!(config.output.format, Some(quiz_domain::OutputFormat::Json));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[quiz]\nlimit_secs = \"soon\"").unwrap();

        assert!(ConfigLoader::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_describe_sources_lists_defaults() {
        let text = ConfigLoader::describe_sources();
        assert!(text.contains("Project:"));
        assert!(text.contains("Default: built-in defaults"));
    }
}
