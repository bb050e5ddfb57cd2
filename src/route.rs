use {
    crate::*,
    glam::IVec2,
    nom::{
        bytes::complete::{is_a, tag},
        IResult,
    },
};

/// Failure to satisfy the route framing rules: a route must be wrapped in `^`…`$`, and every
/// branch group opened inside it must be closed before the input ends.
#[derive(Debug, PartialEq)]
pub enum MalformedPathError {
    MissingStartMarker,
    MissingEndMarker,
    UnterminatedBranchGroup,
}

/// A character outside the route alphabet, along with its byte index into the original route
/// string (framing markers included).
#[derive(Debug, PartialEq)]
pub struct UnknownDirectionError {
    pub character: char,
    pub index: usize,
}

#[derive(Debug, PartialEq)]
pub enum ExpandRouteError {
    MalformedPath(MalformedPathError),
    UnknownDirection(UnknownDirectionError),
}

/// Interprets a `^`…`$`-delimited branching route, writing doors, walls, and floors into a
/// `GridMap` as it walks.
///
/// Each direction token advances a cursor two grid units: one unit onto a new door (flanked
/// perpendicular by walls), one more onto the room behind it. A `(` saves the cursor as the
/// shared origin of the group's alternatives, `|` rewinds to that origin, and `)` restores it,
/// so a completed group never advances the cursor seen by the tokens after it.
pub struct PathExpander<'r> {
    interior: &'r str,
}

impl<'r> PathExpander<'r> {
    /// Validates and strips the framing markers. The interior is not interpreted until `expand`,
    /// so a framing failure is observable before any map mutation.
    pub fn new(route: &'r str) -> Result<Self, MalformedPathError> {
        use MalformedPathError::*;

        if !route.starts_with('^') {
            Err(MissingStartMarker)
        } else if route.len() < 2_usize || !route.ends_with('$') {
            Err(MissingEndMarker)
        } else {
            Ok(Self {
                interior: &route[1_usize..route.len() - 1_usize],
            })
        }
    }

    fn parse_directions(input: &str) -> IResult<&str, &str> {
        is_a(DIRECTION_TOKENS)(input)
    }

    fn parse_token<'i>(token: &'i str) -> impl FnMut(&'i str) -> IResult<&'i str, &'i str> {
        tag(token)
    }

    /// Byte index into the original route of the first character of `remaining`.
    fn index_of(&self, remaining: &str) -> usize {
        self.interior.len() - remaining.len() + 1_usize
    }

    fn step(map: &mut GridMap, cursor: IVec2, direction: Direction) -> IVec2 {
        let delta: IVec2 = direction.vec();
        let door: IVec2 = cursor + delta;
        let flank: IVec2 = delta.perp();
        let room: IVec2 = cursor + 2_i32 * delta;

        map.place(door, Cell::Door);
        map.place(door + flank, Cell::Wall);
        map.place(door - flank, Cell::Wall);
        map.place(room, Cell::Floor);

        room
    }

    /// Walks every route the notation matches, cumulatively mutating `map`.
    ///
    /// On failure the map is left partially populated and should be discarded by the caller.
    pub fn expand(&self, map: &mut GridMap) -> Result<(), ExpandRouteError> {
        map.set(IVec2::ZERO, Cell::Origin);

        let mut frames: Vec<IVec2> = Vec::new();
        let mut cursor: IVec2 = IVec2::ZERO;
        let mut input: &str = self.interior;

        while !input.is_empty() {
            if let Ok((remaining, directions)) = Self::parse_directions(input) {
                for direction_char in directions.chars() {
                    // `is_a(DIRECTION_TOKENS)` only matches characters of the alphabet.
                    let direction: Direction = direction_char.try_into().unwrap();

                    cursor = Self::step(map, cursor, direction);
                }

                input = remaining;
            } else if let Ok((remaining, _)) = Self::parse_token("(")(input) {
                frames.push(cursor);
                input = remaining;
            } else if let Ok((remaining, _)) = Self::parse_token("|")(input) {
                cursor = frames.last().copied().unwrap_or(IVec2::ZERO);
                input = remaining;
            } else if let Ok((remaining, _)) = Self::parse_token(")")(input) {
                match frames.pop() {
                    Some(frame) => {
                        cursor = frame;
                        input = remaining;
                    }
                    // The outermost level terminates on `)` just like a nested one; whatever
                    // follows is not part of any route.
                    None => return Ok(()),
                }
            } else {
                return Err(ExpandRouteError::UnknownDirection(UnknownDirectionError {
                    character: input.chars().next().unwrap(),
                    index: self.index_of(input),
                }));
            }
        }

        if frames.is_empty() {
            Ok(())
        } else {
            Err(ExpandRouteError::MalformedPath(
                MalformedPathError::UnterminatedBranchGroup,
            ))
        }
    }
}

impl TryFrom<&str> for GridMap {
    type Error = ExpandRouteError;

    fn try_from(route: &str) -> Result<Self, Self::Error> {
        let expander: PathExpander =
            PathExpander::new(route).map_err(ExpandRouteError::MalformedPath)?;
        let mut map: Self = Self::new();

        expander.expand(&mut map)?;

        Ok(map)
    }
}
