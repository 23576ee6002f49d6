use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// First identifier handed out by an empty store.
    #[serde(default = "default_first_id")]
    pub first_id: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { first_id: default_first_id() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_load_sample_data")]
    pub load_sample_data: bool,
    /// JSON seed file; when set it replaces the built-in sample data.
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self { load_sample_data: default_load_sample_data(), seed_file: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_first_id() -> u64 { 1 }
fn default_load_sample_data() -> bool { true }
fn default_log_format() -> String { "compact".into() }

fn default_config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Like [`load_from_file`], but a file that does not exist yields defaults.
/// Any other failure, including malformed TOML, is returned.
pub fn load_from_file_or_default(path: &str) -> Result<AppConfig> {
    match load_from_file(path) {
        Ok(cfg) => Ok(cfg),
        Err(e) if is_not_found(&e) => Ok(AppConfig::default()),
        Err(e) => Err(e.context(format!("invalid config file {path}"))),
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load and validate configuration.
    ///
    /// An explicit `path` must exist. Without one, `$CONFIG_PATH` (or
    /// `config.toml`) is read and only its absence falls back to defaults.
    pub fn load_and_validate(path: Option<&str>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => load_from_file(p)?,
            None => load_from_file_or_default(&default_config_path())?,
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.validate()?;
        self.bootstrap.normalize();
        self.logging.normalize_and_validate()?;
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.first_id == 0 {
            return Err(anyhow!("storage.first_id must be >= 1"));
        }
        Ok(())
    }
}

impl BootstrapConfig {
    fn normalize(&mut self) {
        if let Some(path) = &self.seed_file {
            if path.trim().is_empty() {
                self.seed_file = None;
            }
        }
        if self.seed_file.is_none() {
            if let Ok(path) = std::env::var("PETCLINIC_SEED_FILE") {
                if !path.trim().is_empty() {
                    self.seed_file = Some(path);
                }
            }
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    fn normalize_and_validate(&mut self) -> Result<()> {
        self.format = self.format.trim().to_ascii_lowercase();
        if self.format.is_empty() {
            self.format = default_log_format();
        }
        match self.format.as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be `compact` or `json`, got `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = from_toml_str("").unwrap();
        assert_eq!(cfg.storage.first_id, 1);
        assert!(cfg.bootstrap.load_sample_data);
        assert!(cfg.bootstrap.seed_file.is_none());
        assert_eq!(cfg.logging.format, "compact");
    }

    #[test]
    fn parses_all_sections() {
        let mut cfg = from_toml_str(
            r#"
            [storage]
            first_id = 100

            [bootstrap]
            load_sample_data = false
            seed_file = "data/seed.json"

            [logging]
            format = "JSON"
            "#,
        )
        .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.storage.first_id, 100);
        assert!(!cfg.bootstrap.load_sample_data);
        assert_eq!(cfg.bootstrap.seed_file.as_deref(), Some("data/seed.json"));
        assert!(cfg.logging.is_json());
    }

    #[test]
    fn rejects_zero_first_id() {
        let mut cfg = from_toml_str("[storage]\nfirst_id = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let mut cfg = from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("petclinic_{}_{}.toml", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/petclinic-config.toml").is_err());
        assert!(AppConfig::load_and_validate(Some("/nonexistent/petclinic-config.toml")).is_err());
    }

    #[test]
    fn missing_implicit_file_falls_back_to_defaults() {
        let cfg = load_from_file_or_default("/nonexistent/petclinic-config.toml").unwrap();
        assert_eq!(cfg.storage.first_id, 1);
        assert!(cfg.bootstrap.load_sample_data);
    }

    #[test]
    fn malformed_implicit_file_is_reported() {
        let path = temp_config("malformed", "[storage]\nfirst_id = \"x\"\n");
        let err = load_from_file_or_default(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn explicit_file_is_loaded_and_validated() {
        let path = temp_config("explicit", "[storage]\nfirst_id = 50\n[logging]\nformat = \" Json \"\n");
        let cfg = AppConfig::load_and_validate(path.to_str()).unwrap();
        assert_eq!(cfg.storage.first_id, 50);
        assert!(cfg.logging.is_json());
        let _ = std::fs::remove_file(&path);
    }
}
