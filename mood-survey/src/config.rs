use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_ITEMS_PER_STEP, DefinitionError, DelaySubmitter, Questionnaire, RECOMMENDATIONS_ROUTE,
};

/// Error type for loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Survey settings, read from YAML. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default = "default_items_per_step")]
    pub items_per_step: usize,
    #[serde(default = "default_route")]
    pub recommendations_route: String,
    /// Latency of the simulated submission.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    #[serde(default)]
    pub fail_submissions: bool,
}

fn default_items_per_step() -> usize {
    DEFAULT_ITEMS_PER_STEP
}

fn default_route() -> String {
    RECOMMENDATIONS_ROUTE.to_string()
}

fn default_submit_delay_ms() -> u64 {
    1500
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            items_per_step: default_items_per_step(),
            recommendations_route: default_route(),
            submit_delay_ms: default_submit_delay_ms(),
            fail_submissions: false,
        }
    }
}

impl SurveyConfig {
    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Read a config file if one is given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// The PANAS questionnaire paginated as configured.
    pub fn questionnaire(&self) -> Result<Questionnaire, DefinitionError> {
        Questionnaire::panas_with_items_per_step(self.items_per_step)
    }

    /// The simulated submitter described by this config.
    pub fn submitter(&self) -> DelaySubmitter {
        let submitter = DelaySubmitter::new(Duration::from_millis(self.submit_delay_ms));
        if self.fail_submissions {
            submitter.failing()
        } else {
            submitter
        }
    }
}
