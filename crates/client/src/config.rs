//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "gauntlet";
const SAVE_FILE_NAME: &str = "gauntlet.sav";

/// Everything the binary needs before the first menu is shown.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Seed for the run's random source.
    pub seed: u64,
    pub save_file: PathBuf,
    pub log_dir: PathBuf,
    /// Subdirectory of `log_dir` for this process. Generated when absent.
    pub session_id: Option<String>,
    /// TOML file overriding the game configuration.
    pub config_file: Option<PathBuf>,
    /// RON file replacing the built-in level catalog.
    pub levels_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            save_file: data_dir().join(SAVE_FILE_NAME),
            log_dir: log_dir(),
            session_id: None,
            config_file: None,
            levels_file: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAUNTLET_SEED` - Random seed (default: drawn from the OS)
    /// - `GAUNTLET_SAVE_FILE` - Save file path (default: platform data dir)
    /// - `GAUNTLET_LOG_DIR` - Log root (default: platform cache dir)
    /// - `GAUNTLET_SESSION_ID` - Log subdirectory (default: timestamp)
    /// - `GAUNTLET_CONFIG` - Game configuration TOML (default: built-in)
    /// - `GAUNTLET_LEVELS` - Level catalog RON (default: built-in)
    pub fn from_env() -> Self {
        let mut config = Self {
            seed: read_env::<u64>("GAUNTLET_SEED").unwrap_or_else(rand::random),
            ..Self::default()
        };

        if let Some(path) = read_path("GAUNTLET_SAVE_FILE") {
            config.save_file = path;
        }
        if let Some(path) = read_path("GAUNTLET_LOG_DIR") {
            config.log_dir = path;
        }

        config.session_id = env::var("GAUNTLET_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());
        config.config_file = read_path("GAUNTLET_CONFIG");
        config.levels_file = read_path("GAUNTLET_LEVELS");

        config
    }
}

/// Platform data directory, e.g. `~/.local/share/gauntlet` on Linux.
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform log directory, e.g. `~/.cache/gauntlet/logs` on Linux.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join(APP_NAME))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
