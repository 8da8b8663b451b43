// src/core/mod.rs
//! Gateway transport: one HTTP client, one WebSocket submitter per kind

pub mod gateway_client;
pub mod stream_client;

pub use gateway_client::GatewayClient;
pub use stream_client::StreamSubmitter;
