use std::cmp::Ordering;

use crate::{Distance, VertexId};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) struct State {
    pub(super) cost: Distance,
    pub(super) vertex: VertexId,
}

// Min-heap by cost (reversed from standard Rust BinaryHeap), lower vertex id first on ties
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
