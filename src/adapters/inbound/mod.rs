/// Inbound adapters - drive the application through inbound ports
pub mod http;
