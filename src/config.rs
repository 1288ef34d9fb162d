use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placement preference per docking side. Higher wins; a negative value
/// excludes the side entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockPriorities {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Default for DockPriorities {
    fn default() -> Self {
        Self {
            top: 3,
            bottom: 2,
            left: 1,
            right: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalloonConfig {
    pub priorities: DockPriorities,
    /// Edge-to-apex depth reserved for the connector notch.
    pub connector_size: f64,
    pub is_connector_visible: bool,
    /// Whether the balloon survives losing focus. The placement pipeline
    /// does not consume this; hosts read it when wiring dismissal.
    pub stays_open: bool,
}

impl Default for BalloonConfig {
    fn default() -> Self {
        Self {
            priorities: DockPriorities::default(),
            connector_size: 12.0,
            is_connector_visible: true,
            stays_open: false,
        }
    }
}

impl BalloonConfig {
    /// Connector size as the pipeline sees it: a hidden connector reserves
    /// no space, whatever the configured size says.
    pub fn effective_connector_size(&self) -> f64 {
        if self.is_connector_visible {
            self.connector_size
        } else {
            0.0
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct DockPrioritiesFile {
    top: Option<i32>,
    bottom: Option<i32>,
    left: Option<i32>,
    right: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    priorities: Option<DockPrioritiesFile>,
    connector_size: Option<f64>,
    is_connector_visible: Option<bool>,
    stays_open: Option<bool>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<BalloonConfig> {
    let mut config = BalloonConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(priorities) = parsed.priorities {
        if let Some(v) = priorities.top {
            config.priorities.top = v;
        }
        if let Some(v) = priorities.bottom {
            config.priorities.bottom = v;
        }
        if let Some(v) = priorities.left {
            config.priorities.left = v;
        }
        if let Some(v) = priorities.right {
            config.priorities.right = v;
        }
    }
    if let Some(v) = parsed.connector_size {
        config.connector_size = v;
    }
    if let Some(v) = parsed.is_connector_visible {
        config.is_connector_visible = v;
    }
    if let Some(v) = parsed.stays_open {
        config.stays_open = v;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_priorities_prefer_top() {
        let priorities = DockPriorities::default();
        assert!(priorities.top > priorities.bottom);
        assert!(priorities.bottom > priorities.left);
        assert!(priorities.left > priorities.right);
    }

    #[test]
    fn effective_connector_size_is_zero_when_hidden() {
        let mut config = BalloonConfig::default();
        assert_eq!(config.effective_connector_size(), 12.0);
        config.is_connector_visible = false;
        assert_eq!(config.effective_connector_size(), 0.0);
    }

    #[test]
    fn load_config_without_path_returns_defaults() {
        let config = load_config(None).expect("defaults should load");
        assert_eq!(config.connector_size, 12.0);
        assert!(config.is_connector_visible);
        assert!(!config.stays_open);
    }

    #[test]
    fn config_file_keeps_defaults_for_missing_fields() {
        let parsed: ConfigFile =
            serde_json::from_str(r#"{"priorities": {"top": -1}, "connectorSize": 8.5}"#)
                .expect("parse failed");
        assert_eq!(parsed.priorities.as_ref().and_then(|p| p.top), Some(-1));
        assert_eq!(
            parsed.priorities.as_ref().and_then(|p| p.bottom),
            None,
            "absent fields stay unset so defaults survive"
        );
        assert_eq!(parsed.connector_size, Some(8.5));
        assert_eq!(parsed.stays_open, None);
    }
}
