use {crate::*, glam::IVec2, std::collections::HashMap, strum::IntoEnumIterator};

/// Unit-step breadth-first flood over the passable cells of a map, recording each cell's
/// unit-step distance from the origin.
struct DistanceFlood<'m> {
    map: &'m GridMap,
    origin: IVec2,
    unit_dists: HashMap<IVec2, usize>,
}

impl<'m> BreadthFirstFlood for DistanceFlood<'m> {
    type Vertex = IVec2;

    fn start(&self) -> &Self::Vertex {
        &self.origin
    }

    fn neighbors(&self, vertex: &Self::Vertex, neighbors: &mut Vec<Self::Vertex>) {
        neighbors.clear();
        neighbors.extend(
            Direction::iter()
                .map(|dir: Direction| *vertex + dir.vec())
                .filter(|pos: &IVec2| self.map.get(*pos).is_passable()),
        );
    }

    fn visit(&mut self, from: &Self::Vertex, to: &Self::Vertex) {
        let unit_dist: usize = self.unit_dists[from] + 1_usize;

        self.unit_dists.insert(*to, unit_dist);
    }

    fn reset(&mut self) {
        self.unit_dists.clear();
        self.unit_dists.insert(self.origin, 0_usize);
    }
}

/// Answers door-distance queries over a populated map.
///
/// Holds no cross-invocation state: every query performs one breadth-first flood from the origin
/// and is a pure function of the map and origin, so queries may be re-run freely.
pub struct DistanceAnalyzer<'m> {
    map: &'m GridMap,
    origin: IVec2,
}

impl<'m> DistanceAnalyzer<'m> {
    pub fn new(map: &'m GridMap, origin: IVec2) -> Self {
        Self { map, origin }
    }

    /// The minimum door-count distance from the origin to every reachable room. Unreachable and
    /// non-room cells have no entry; the origin maps to 0.
    ///
    /// The flood advances in unit steps, alternating room → door → room, so a room's door count
    /// is half its unit-step distance.
    pub fn door_distances(&self) -> HashMap<IVec2, usize> {
        let mut flood: DistanceFlood = DistanceFlood {
            map: self.map,
            origin: self.origin,
            unit_dists: HashMap::new(),
        };

        flood.run();

        flood
            .unit_dists
            .into_iter()
            .filter(|(pos, _)| self.map.get(*pos).is_room())
            .map(|(pos, unit_dist)| (pos, unit_dist / 2_usize))
            .collect()
    }

    /// The greatest door-count distance from the origin to any reachable room; 0 when no floor
    /// cell beyond the origin is reachable.
    pub fn max_distance(&self) -> usize {
        self.door_distances()
            .into_values()
            .max()
            .unwrap_or_default()
    }

    /// The number of floor cells (the origin excluded) whose door-count distance from the origin
    /// is at least `threshold`.
    pub fn count_at_least(&self, threshold: usize) -> usize {
        self.door_distances()
            .into_iter()
            .filter(|(pos, door_dist)| *pos != self.origin && *door_dist >= threshold)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const ROUTE_STRS: &[&str] = &[
        "^WNE$",
        "^ENWWW(NEEE|SSE(EE|N))$",
        "^ENNWSWW(NEWS|)SSSEEN(WNSE|)EE(SWEN|)NNN$",
        "^ESSWWN(E|NNENN(EESS(WNSE|)SSS|WWWSSSSE(SW|NNNE)))$",
        "^WSSEESWWWNW(S|NENNEEEENN(ESSSSW(NWSW|SSEN)|WSWWN(E|WWS(E|SS))))$",
    ];
    const MAX_DISTANCES: &[usize] = &[3_usize, 10_usize, 18_usize, 23_usize, 31_usize];

    fn grid_maps() -> &'static Vec<GridMap> {
        static ONCE_LOCK: OnceLock<Vec<GridMap>> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            ROUTE_STRS
                .iter()
                .map(|route_str: &&str| (*route_str).try_into().unwrap())
                .collect()
        })
    }

    #[test]
    fn test_max_distance() {
        for (map, max_distance) in grid_maps().iter().zip(MAX_DISTANCES.iter().copied()) {
            assert_eq!(
                DistanceAnalyzer::new(map, IVec2::ZERO).max_distance(),
                max_distance
            );
        }
    }

    #[test]
    fn test_max_distance_of_straight_corridor() {
        let map: GridMap = "^EEENNN$".try_into().unwrap();

        assert_eq!(DistanceAnalyzer::new(&map, IVec2::ZERO).max_distance(), 6_usize);
    }

    #[test]
    fn test_max_distance_after_group() {
        let map: GridMap = "^N(E|W)N$".try_into().unwrap();

        // Both alternatives and the post-group room are one door beyond the first room.
        assert_eq!(DistanceAnalyzer::new(&map, IVec2::ZERO).max_distance(), 2_usize);
    }

    #[test]
    fn test_max_distance_of_origin_only_map() {
        let map: GridMap = "^$".try_into().unwrap();

        assert_eq!(DistanceAnalyzer::new(&map, IVec2::ZERO).max_distance(), 0_usize);
    }

    #[test]
    fn test_door_distances() {
        let analyzer_map: &GridMap = &grid_maps()[0_usize];
        let analyzer: DistanceAnalyzer = DistanceAnalyzer::new(analyzer_map, IVec2::ZERO);
        let door_distances: HashMap<IVec2, usize> = analyzer.door_distances();

        assert_eq!(
            door_distances,
            [
                (IVec2::new(0_i32, 0_i32), 0_usize),
                (IVec2::new(-2_i32, 0_i32), 1_usize),
                (IVec2::new(-2_i32, -2_i32), 2_usize),
                (IVec2::new(0_i32, -2_i32), 3_usize),
            ]
            .into_iter()
            .collect()
        );

        // Re-running is a pure function of the map and origin.
        assert_eq!(analyzer.door_distances(), door_distances);
    }

    #[test]
    fn test_count_at_least() {
        let analyzer: DistanceAnalyzer = DistanceAnalyzer::new(&grid_maps()[0_usize], IVec2::ZERO);

        assert_eq!(analyzer.count_at_least(0_usize), 3_usize);
        assert_eq!(analyzer.count_at_least(1_usize), 3_usize);
        assert_eq!(analyzer.count_at_least(2_usize), 2_usize);
        assert_eq!(analyzer.count_at_least(3_usize), 1_usize);
        assert_eq!(analyzer.count_at_least(4_usize), 0_usize);
    }

    #[test]
    fn test_count_at_least_beyond_max_distance_is_zero() {
        for (map, max_distance) in grid_maps().iter().zip(MAX_DISTANCES.iter().copied()) {
            let analyzer: DistanceAnalyzer = DistanceAnalyzer::new(map, IVec2::ZERO);

            assert_eq!(analyzer.count_at_least(max_distance + 2_usize), 0_usize);
            assert_eq!(analyzer.count_at_least(1000_usize), 0_usize);
        }
    }
}
