use std::{
    collections::{HashSet, VecDeque},
    hash::Hash,
};

pub struct BreadthFirstFloodState<V> {
    queue: VecDeque<V>,
    explored: HashSet<V>,
    neighbors: Vec<V>,
}

impl<V> BreadthFirstFloodState<V> {
    fn clear(&mut self) {
        self.queue.clear();
        self.explored.clear();
        self.neighbors.clear();
    }
}

impl<V> Default for BreadthFirstFloodState<V> {
    fn default() -> Self {
        Self {
            queue: Default::default(),
            explored: Default::default(),
            neighbors: Default::default(),
        }
    }
}

/// An exhaustive breadth-first traversal of the component reachable from `start`.
///
/// Unlike a target-seeking search, the flood has no end vertex: `visit` is invoked once per
/// newly discovered vertex, in non-decreasing distance order, and the traversal only stops when
/// the frontier is empty.
pub trait BreadthFirstFlood {
    type Vertex: Clone + Eq + Hash;

    fn start(&self) -> &Self::Vertex;
    fn neighbors(&self, vertex: &Self::Vertex, neighbors: &mut Vec<Self::Vertex>);
    fn visit(&mut self, from: &Self::Vertex, to: &Self::Vertex);
    fn reset(&mut self);

    fn run_internal(&mut self, state: &mut BreadthFirstFloodState<Self::Vertex>) {
        self.reset();

        state.clear();

        let start: Self::Vertex = self.start().clone();

        state.explored.insert(start.clone());
        state.queue.push_back(start);

        while let Some(current) = state.queue.pop_front() {
            self.neighbors(&current, &mut state.neighbors);

            for neighbor in state.neighbors.drain(..) {
                if state.explored.insert(neighbor.clone()) {
                    self.visit(&current, &neighbor);
                    state.queue.push_back(neighbor);
                }
            }
        }
    }

    fn run(&mut self) {
        self.run_internal(&mut BreadthFirstFloodState::default())
    }
}
