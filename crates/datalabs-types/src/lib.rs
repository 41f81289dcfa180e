//! AI Data Labs Types - Core types for the platform registry
//!
//! A **Platform** is a named logical record standing in for a future
//! provisioned analytics environment (database, dashboards, agents). Today it
//! is only a stored structure; no infrastructure backs it.
//!
//! ## Key Concepts
//!
//! - **PlatformId**: Sequential identifier of the form `plat_<n>`
//! - **PlatformSpec**: Caller input used to create a platform
//! - **Platform**: The stored record returned by every lifecycle endpoint
//! - **PlatformConfig**: Fixed stack defaults applied at creation

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod ids;
pub mod platform;
pub mod spec;

// Re-export main types
pub use ids::{PlatformId, PlatformIdError, PLATFORM_ID_PREFIX};
pub use platform::{Platform, PlatformConfig, PlatformStatus};
pub use spec::{PlatformSpec, RequestedPlatformConfig};
