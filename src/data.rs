use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// A point on the board. X grows to the right, y grows upwards,
/// matching the coordinate space of the level text after row inversion.
///
/// Positions are not bounds-checked - stepping off the playable rectangle
/// produces a perfectly valid `Pos` that no piece will ever occupy.
/// Legality of moves is the board's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    pub fn up(self) -> Pos {
        Pos { x: self.x, y: self.y + 1 }
    }

    pub fn down(self) -> Pos {
        Pos { x: self.x, y: self.y - 1 }
    }

    pub fn left(self) -> Pos {
        Pos { x: self.x - 1, y: self.y }
    }

    pub fn right(self) -> Pos {
        Pos { x: self.x + 1, y: self.y }
    }

    /// Manhattan distance.
    pub fn dist(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True iff `other` is exactly one cardinal step away.
    pub fn is_adjacent_to(self, other: Pos) -> bool {
        self.dist(other) == 1
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions a player move can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        match dir {
            Dir::Up => self.up(),
            Dir::Down => self.down(),
            Dir::Left => self.left(),
            Dir::Right => self.right(),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        };
        write!(f, "{}", c)
    }
}
