/// Application layer - Use cases, DTOs and the render context
///
/// This layer orchestrates the domain transformer and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod render_context;
pub mod request_sequencer;
pub mod use_cases;
