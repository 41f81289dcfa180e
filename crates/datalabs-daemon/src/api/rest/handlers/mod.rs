//! API request handlers

mod agents;
mod data;
mod health;
mod monitoring;
mod platforms;

pub use agents::*;
pub use data::*;
pub use health::*;
pub use monitoring::*;
pub use platforms::*;
