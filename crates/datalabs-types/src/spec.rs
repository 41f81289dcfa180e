//! Platform creation input
//!
//! `PlatformSpec` mirrors the create request body. Several of its fields are
//! accepted only so that clients can start sending them before the
//! provisioning pipeline exists; they are documented as no-ops below.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller input for creating a platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlatformSpec {
    /// Human-readable name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Natural-language requirements for the platform designer agent.
    ///
    /// No-op: recorded in logs only, never stored.
    #[serde(default)]
    pub requirements: String,

    /// Requested stack overrides.
    ///
    /// No-op: the created platform always uses the default stack.
    #[serde(default)]
    pub config: RequestedPlatformConfig,
}

impl PlatformSpec {
    /// Spec with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            requirements: String::new(),
            config: RequestedPlatformConfig::default(),
        }
    }
}

/// Stack overrides a caller may request at creation time
///
/// None of these fields are applied yet. Unknown keys are kept in `extra` so
/// that no input is rejected while the schema is still settling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RequestedPlatformConfig {
    /// Requested database engine (no-op)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Requested monitoring tool (no-op)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<String>,

    /// Requested agent set (no-op)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_agents: Option<Vec<String>>,

    /// Any other keys (no-op)
    #[serde(flatten)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub extra: Map<String, Value>,
}

impl RequestedPlatformConfig {
    pub fn is_empty(&self) -> bool {
        self.database.is_none()
            && self.monitoring.is_none()
            && self.ai_agents.is_none()
            && self.extra.is_empty()
    }

    /// Names of every key the caller supplied
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if self.database.is_some() {
            keys.push("database".to_string());
        }
        if self.monitoring.is_some() {
            keys.push("monitoring".to_string());
        }
        if self.ai_agents.is_some() {
            keys.push("ai_agents".to_string());
        }
        keys.extend(self.extra.keys().cloned());
        keys
    }
}
