/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe everything the application core
/// needs from the outside world: input files, release notes, the chat
/// model, output rendering and progress reporting.
pub mod outbound;
