use crate::error::{ForageError, Result};
use crate::store::ModelContext;
use std::path::PathBuf;
use xdg::BaseDirectories;

pub struct Config {
    pub model_dir: PathBuf,
}

impl Config {
    pub fn new(dir_override: Option<PathBuf>) -> Result<Self> {
        let model_dir = if let Some(path) = dir_override {
            path
        } else if let Ok(env_path) = std::env::var("FORAGE_MODEL_DIR") {
            PathBuf::from(env_path)
        } else {
            let xdg = BaseDirectories::with_prefix("forage").map_err(|e| {
                ForageError::Config(format!("Failed to initialize XDG directories: {}", e))
            })?;
            let model_path = xdg.place_data_file(ModelContext::MODEL_FILE).map_err(|e| {
                ForageError::Config(format!("Failed to create data directory: {}", e))
            })?;
            model_path
                .parent()
                .map(PathBuf::from)
                .ok_or_else(|| ForageError::Config("Model path has no parent directory".to_string()))?
        };

        Ok(Self { model_dir })
    }
}
