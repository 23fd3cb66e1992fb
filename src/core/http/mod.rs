//! Outbound HTTP: error taxonomy, response shaping, refresh coordination,
//! and the gateway every backend call goes through.

pub mod error;
pub mod gateway;
pub mod payload;
pub mod refresh;

pub use error::ApiError;
pub use gateway::GatewayHooks;
