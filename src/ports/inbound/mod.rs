/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., the
/// HTTP server) use to interact with the application core.
pub mod component_info_port;

pub use component_info_port::ComponentInfoPort;
