//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["liveqa.toml", ".liveqa.toml"];
const ENV_PREFIX: &str = "LIVEQA_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `LIVEQA_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./liveqa.toml` or `./.liveqa.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/live-qa/config.toml`
    /// 5. Default values
    ///
    /// With `skip_files` only defaults and the environment are used.
    pub fn load(config_path: Option<&Path>, skip_files: bool) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if !skip_files {
            let files = Self::discover(config_path);
            figment = Self::merge_files(figment, &files);
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: FileConfig = figment.extract().map_err(Box::new)?;

        let errors: Vec<_> = config
            .validate()
            .into_iter()
            .filter(|issue| issue.is_error())
            .collect();
        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors));
        }

        Ok(config)
    }

    /// Load only files, lowest priority first (no environment).
    pub fn load_files(files: &[PathBuf]) -> Result<FileConfig, ConfigError> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Ok(Self::merge_files(figment, files)
            .extract::<FileConfig>()
            .map_err(Box::new)?)
    }

    fn merge_files(mut figment: Figment, files: &[PathBuf]) -> Figment {
        for path in files {
            debug!("Merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }
        figment
    }

    /// Existing config files, lowest priority first.
    fn discover(config_path: Option<&Path>) -> Vec<PathBuf> {
        let mut files = Vec::new();
        if let Some(global) = Self::global_config_path()
            && global.exists()
        {
            files.push(global);
        }
        if let Some(project) = Self::project_config_path() {
            files.push(project);
        }
        if let Some(path) = config_path {
            files.push(path.to_path_buf());
        }
        files
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/live-qa/config.toml` if set, otherwise the
    /// platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("live-qa").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for `--show-config`)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./liveqa.toml or ./.liveqa.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_skip_files_ignores_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = write_toml(&dir, "explicit.toml", "[agent]\nmax_steps = 3\n");

        let config = ConfigLoader::load(Some(&explicit), true).unwrap();
        assert_eq!(config.agent.max_steps, 15);
        assert_eq!(config.search.max_results, 5);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("live-qa"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = write_toml(
            &dir,
            "global.toml",
            "[agent]\nmax_steps = 4\ntimeout_seconds = 60\n",
        );
        let explicit = write_toml(&dir, "explicit.toml", "[agent]\nmax_steps = 9\n");

        let config = ConfigLoader::load_files(&[global, explicit]).unwrap();
        assert_eq!(config.agent.max_steps, 9);
        assert_eq!(config.agent.timeout_seconds, 60);
        assert_eq!(config.model.name, "gemini-1.5-flash");
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_toml(&dir, "bad.toml", "[agent]\nmax_steps = \"many\"\n");

        let err = ConfigLoader::load_files(&[bad]).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_toml(&dir, "zero.toml", "[agent]\nmax_steps = 0\n");

        let err = ConfigLoader::load(Some(&path), false).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(issues) if issues[0].field == "agent.max_steps"));
    }
}
