mod search_tree;
mod state;

pub use search_tree::shortest_distances;
pub(crate) use search_tree::dijkstra_tree;
