/// Application layer - Use cases, advisor and DTOs
///
/// This layer contains the application logic that orchestrates
/// remediation services and coordinates with infrastructure through ports.
pub mod advisor;
pub mod dto;
pub mod factories;
pub mod use_cases;
