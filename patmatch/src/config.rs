use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::search::matcher::Algorithm;

/// Pattern used when none is given
pub const DEFAULT_PATTERN: &str = "THEM";
/// Text used when none is given
pub const DEFAULT_TEXT: &str = "THETHEYTHYTHEMEM";

/// Configuration for a comparison run.
///
/// # Configuration Locations
///
/// Loaded from these locations, later ones overriding earlier ones:
/// 1. Global `$CONFIG_DIR/patmatch/config.yaml`
/// 2. Local `.patmatch.yaml` in the current directory
/// 3. Custom config file given via `--config`
///
/// # Configuration Format
///
/// ```yaml
/// pattern: "abracadabra"
/// text: "abacadabrabracabracadabrabrabracad"
///
/// # Algorithms to run, in order (default: all four)
/// algorithms:
///   - "brute-force"
///   - "kmp"
///
/// # Thread count (default: CPU cores)
/// thread_count: 2
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
/// ```
///
/// Command-line arguments take precedence over file values, see
/// [`merge_with_cli`](SearchConfig::merge_with_cli).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Pattern to look for
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Text to search in
    #[serde(default = "default_text")]
    pub text: String,

    /// Algorithms to run, in report order
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,

    /// Worker threads for running algorithms side by side
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_text() -> String {
    DEFAULT_TEXT.to_string()
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            text: default_text(),
            algorithms: default_algorithms(),
            thread_count: default_thread_count(),
            log_level: default_log_level(),
        }
    }
}

impl SearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration, adding a specific file on top of the defaults.
    ///
    /// The default locations are optional; an explicitly named file must exist.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::Message(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }

        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("patmatch/config.yaml")),
            // Local config
            Some(PathBuf::from(".patmatch.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI values over file values.
    ///
    /// Pattern and text only come as a pair: the CLI either supplies both or
    /// neither, so a `None` here keeps the file's pair.
    pub fn merge_with_cli(
        mut self,
        pair: Option<(String, String)>,
        algorithm: Option<Algorithm>,
        thread_count: Option<NonZeroUsize>,
        log_level: Option<String>,
    ) -> Self {
        if let Some((pattern, text)) = pair {
            self.pattern = pattern;
            self.text = text;
        }
        if let Some(algorithm) = algorithm {
            self.algorithms = vec![algorithm];
        }
        if let Some(thread_count) = thread_count {
            self.thread_count = thread_count;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        self
    }
}
