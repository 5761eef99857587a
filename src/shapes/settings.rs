use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulate_latency: default_simulate_latency(),
            dataset_path: None,
        }
    }
}
