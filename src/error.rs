// src/error.rs

use thiserror::Error;

/// Ошибка обратного поиска AMR
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmrError {
    /// Непустой код, которого нет в каталоге
    #[error("invalid authentication method reference: {0}")]
    InvalidArgument(String),
}

/// Ошибка загрузки/сохранения `config.yaml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
