//! Service configuration shared by the gateway and the console.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dataset::DataPaths;

/// Global application configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Display name used in logs and `/status`.
    pub app_name: String,
    /// Bind address for the gateway.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Header-keyed student CSV (`name,id,mail[,department,advisor]`).
    pub student_file: String,
    /// Headerless course CSV (`name,code,number,url`).
    pub course_file: String,
    /// Headerless university CSV (`name,url`). Optional on disk.
    pub university_file: String,
    /// JSON object of FAQ topic -> answer. Optional on disk.
    pub knowledge_file: String,
}

impl CoreConfig {
    pub const DEFAULT_CONFIG_PATH: &'static str = "config/gateway";

    /// Load config from file and environment. Precedence: env `CAMPUS_CONFIG` path > `config/gateway.toml` > defaults.
    /// Environment overrides use the `CAMPUS__` prefix, e.g. `CAMPUS__PORT=8080`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("CAMPUS_CONFIG")
            .unwrap_or_else(|_| Self::DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    /// Load with an explicit config file stem (with or without `.toml`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("CAMPUS")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("app_name", "Bennett University Assistant")?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5001_i64)?
            .set_default("student_file", "dataset/student_data.csv")?
            .set_default("course_file", "dataset/course_data.csv")?
            .set_default("university_file", "dataset/university_data.csv")?
            .set_default("knowledge_file", "bennett_knowledge.json")?;

        let path = Path::new(config_path);
        let with_ext = path.with_extension("toml");
        let builder = if path.is_file() {
            builder.add_source(config::File::from(path))
        } else if with_ext.is_file() {
            builder.add_source(config::File::from(with_ext))
        } else {
            builder
        };

        let built = builder
            .add_source(env)
            .build()?;

        built.try_deserialize()
    }

    /// Paths of the three tabular sources.
    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            students: PathBuf::from(&self.student_file),
            courses: PathBuf::from(&self.course_file),
            university: PathBuf::from(&self.university_file),
        }
    }

    pub fn knowledge_path(&self) -> PathBuf {
        PathBuf::from(&self.knowledge_file)
    }
}
