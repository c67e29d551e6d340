pub mod api;
pub mod connector_integration;
pub mod transport;
