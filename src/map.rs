pub use direction::*;

use {glam::IVec2, std::collections::HashMap};

mod direction {
    use {
        glam::IVec2,
        static_assertions::const_assert,
        std::mem::transmute,
        strum::{EnumCount, EnumIter},
    };

    /// The four lateral moves a route token can request. Diagonal movement does not exist in this
    /// map model.
    #[derive(Copy, Clone, Debug, EnumCount, EnumIter, Eq, Hash, PartialEq)]
    #[repr(u8)]
    pub enum Direction {
        North,
        East,
        South,
        West,
    }

    /// The route token alphabet, ordered to match the `Direction` discriminants.
    pub const DIRECTION_TOKENS: &str = "NESW";

    const VECS: [IVec2; Direction::COUNT] = [IVec2::NEG_Y, IVec2::X, IVec2::Y, IVec2::NEG_X];

    // This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2
    // bits, which is the same as masking by `MASK`
    const_assert!(Direction::COUNT == 4_usize);

    impl Direction {
        const MASK: u8 = Self::COUNT as u8 - 1_u8;

        #[inline]
        pub const fn vec(self) -> IVec2 {
            VECS[self as usize]
        }

        #[inline]
        pub const fn from_u8(value: u8) -> Self {
            // SAFETY: See `const_assert` above
            unsafe { transmute(value & Self::MASK) }
        }
    }

    impl From<Direction> for IVec2 {
        fn from(value: Direction) -> Self {
            value.vec()
        }
    }

    impl TryFrom<char> for Direction {
        type Error = ();

        fn try_from(value: char) -> Result<Self, Self::Error> {
            DIRECTION_TOKENS
                .find(value)
                .map(|index| Self::from_u8(index as u8))
                .ok_or(())
        }
    }
}

/// Content of a single grid cell.
///
/// `Unknown` marks coordinates the expansion never visited; for distance purposes it is as
/// impassable as `Wall`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Unknown,
    Wall,
    Door,
    Floor,
    Origin,
}

impl Cell {
    /// A room: a cell a walker stands in between door crossings.
    pub fn is_room(self) -> bool {
        matches!(self, Self::Floor | Self::Origin)
    }

    pub fn is_passable(self) -> bool {
        matches!(self, Self::Door | Self::Floor | Self::Origin)
    }

    /// Write precedence: `Origin` > `Floor` = `Door` > `Wall` > `Unknown`. Overlapping branches
    /// revisit coordinates, and an established room or door must never regress to a wall.
    const fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0_u8,
            Self::Wall => 1_u8,
            Self::Door | Self::Floor => 2_u8,
            Self::Origin => 3_u8,
        }
    }
}

/// A sparse, unbounded 2D grid of `Cell`s with a dynamically tracked bounding box.
///
/// `x` is the column (increasing east), `y` is the row (increasing south). Coordinates that were
/// never written read back as `Cell::Unknown`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridMap {
    cells: HashMap<IVec2, Cell>,
    bounds: Option<(IVec2, IVec2)>,
}

impl GridMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: IVec2) -> Cell {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    /// Overwrites the content at `pos` unconditionally, growing the bounding box so it stays the
    /// tight bounds of every coordinate ever written.
    pub fn set(&mut self, pos: IVec2, cell: Cell) {
        self.bounds = Some(self.bounds.map_or((pos, pos), |(min, max): (IVec2, IVec2)| {
            (min.min(pos), max.max(pos))
        }));
        self.cells.insert(pos, cell);
    }

    /// Precedence-guarded write: `cell` only lands if it outranks the current content at `pos`,
    /// so the first writer wins among equals and a wall never clobbers a floor, door, or origin.
    pub fn place(&mut self, pos: IVec2, cell: Cell) {
        if cell.rank() > self.get(pos).rank() {
            self.set(pos, cell);
        }
    }

    /// The minimum and maximum corners over all coordinates ever written. Both corners are (0,0)
    /// for a map that was never written to.
    pub fn bounds(&self) -> (IVec2, IVec2) {
        self.bounds.unwrap_or_default()
    }

    /// Renders the bounding box as a character matrix: `X` origin, `.` floor, `#` wall, and `-`
    /// or `|` for a door depending on whether its rooms lie north-south or east-west of it.
    /// Never-visited cells render as `#`, or as `?` when `treat_unknown_as_walls` is false.
    pub fn render(&self, treat_unknown_as_walls: bool) -> String {
        let (min, max): (IVec2, IVec2) = self.bounds();
        let width: usize = (max.x - min.x + 1_i32) as usize;
        let height: usize = (max.y - min.y + 1_i32) as usize;
        let mut string: String = String::with_capacity((width + 1_usize) * height);

        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let pos: IVec2 = IVec2::new(x, y);

                string.push(match self.get(pos) {
                    Cell::Unknown => {
                        if treat_unknown_as_walls {
                            '#'
                        } else {
                            '?'
                        }
                    }
                    Cell::Wall => '#',
                    Cell::Door => {
                        if self.get(pos - IVec2::Y).is_room() || self.get(pos + IVec2::Y).is_room()
                        {
                            '-'
                        } else {
                            '|'
                        }
                    }
                    Cell::Floor => '.',
                    Cell::Origin => 'X',
                });
            }

            string.push('\n');
        }

        string
    }
}
