/// Use cases module containing application orchestration
mod update_graph;

pub use update_graph::UpdateGraphUseCase;
