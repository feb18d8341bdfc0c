mod graph_transformer;

pub use graph_transformer::GraphTransformer;
