pub mod edge_record;
pub mod graph;
pub mod query;
pub mod view;

pub use edge_record::EdgeRecord;
pub use graph::{GraphData, GraphLink, GraphNode};
pub use query::GraphQuery;
pub use view::View;
