//! Platform records
//!
//! A platform is created once and is read-only afterwards; the only other
//! lifecycle event is deletion.

use crate::{PlatformId, PlatformSpec};
use serde::{Deserialize, Serialize};

/// Provisioning status of a platform
///
/// Every platform starts in [`PlatformStatus::Provisioning`]. Nothing moves
/// it forward yet since no infrastructure is actually deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlatformStatus {
    /// Infrastructure has been requested but not deployed
    #[default]
    Provisioning,
}

/// Stack configuration attached to a platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlatformConfig {
    /// Analytics database engine
    pub database: String,

    /// Dashboarding / monitoring tool
    pub monitoring: String,

    /// Agents enabled for the platform
    pub ai_agents: Vec<String>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            database: "clickhouse".to_string(),
            monitoring: "grafana".to_string(),
            ai_agents: vec![
                "query".to_string(),
                "design".to_string(),
                "support".to_string(),
            ],
        }
    }
}

/// A registered analytics platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Platform {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "plat_1"))]
    pub id: PlatformId,
    pub name: String,
    pub description: String,
    pub status: PlatformStatus,
    pub config: PlatformConfig,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Platform {
    /// Build a new platform record from caller input.
    ///
    /// `spec.requirements` and `spec.config` are not consulted; the record
    /// always carries [`PlatformConfig::default`].
    pub fn from_spec(id: PlatformId, spec: PlatformSpec) -> Self {
        Self {
            id,
            name: spec.name,
            description: spec.description,
            status: PlatformStatus::Provisioning,
            config: PlatformConfig::default(),
            created_at: chrono::Utc::now(),
        }
    }
}
