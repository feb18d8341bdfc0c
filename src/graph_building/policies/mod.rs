mod node_sizing;
mod symbol_radius;

pub use node_sizing::NodeSizing;
pub use symbol_radius::SymbolRadius;
