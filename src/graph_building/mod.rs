/// Domain layer - edge records, graph model, sizing policies and the transformer
pub mod domain;
pub mod policies;
pub mod services;
