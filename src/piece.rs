use std::fmt::{self, Display, Formatter};

use crate::data::Pos;

/// The kinds of game objects a Sokoban board is made of.
///
/// Storage locations and walls never move; the player and boxes do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Player,
    Box,
    Storage,
    Wall,
}

impl Display for PieceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PieceType::Player => write!(f, "player"),
            PieceType::Box => write!(f, "box"),
            PieceType::Storage => write!(f, "storage"),
            PieceType::Wall => write!(f, "wall"),
        }
    }
}

/// A single game object: a fixed type plus a current position.
///
/// A piece knows nothing about the board it lives on. Whether a move is
/// legal against walls and other boxes is decided by [`Board`], which owns
/// all pieces and is the only caller of the move methods in normal play.
///
/// [`Board`]: crate::board::Board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceType,
    pos: Pos,
}

impl Piece {
    pub fn new(kind: PieceType, pos: Pos) -> Piece {
        Piece { kind, pos }
    }

    pub fn kind(&self) -> PieceType {
        self.kind
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// True for the player and boxes, false for storage locations and walls.
    pub fn is_movable(&self) -> bool {
        match self.kind {
            PieceType::Player | PieceType::Box => true,
            PieceType::Storage | PieceType::Wall => false,
        }
    }

    /// Relocates the piece to `target`. `None` means there is no position to
    /// move to; the piece stays put and the call reports failure. With
    /// `Some`, the move always succeeds - there is no legality check here.
    pub fn move_to(&mut self, target: Option<Pos>) -> bool {
        match target {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn move_up(&mut self) -> bool {
        self.move_to(Some(self.pos.up()))
    }

    pub fn move_down(&mut self) -> bool {
        self.move_to(Some(self.pos.down()))
    }

    pub fn move_left(&mut self) -> bool {
        self.move_to(Some(self.pos.left()))
    }

    pub fn move_right(&mut self) -> bool {
        self.move_to(Some(self.pos.right()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movability() {
        let pos = Pos::new(1, 1);
        assert!(Piece::new(PieceType::Player, pos).is_movable());
        assert!(Piece::new(PieceType::Box, pos).is_movable());
        assert!(!Piece::new(PieceType::Storage, pos).is_movable());
        assert!(!Piece::new(PieceType::Wall, pos).is_movable());
    }

    #[test]
    fn move_to_none_is_a_no_op() {
        let mut piece = Piece::new(PieceType::Box, Pos::new(3, 3));
        assert!(!piece.move_to(None));
        assert_eq!(piece.pos(), Pos::new(3, 3));
    }

    #[test]
    fn absent_target_is_not_a_position() {
        // "no position" is None, which never compares equal to a real
        // position - not even one built from the old (-1, -1) magic value
        let none: Option<Pos> = None;
        assert_eq!(none, none);
        assert_ne!(none, Some(Pos::new(-1, -1)));
        assert_ne!(none, Some(Pos::new(0, 0)));
    }

    #[test]
    fn move_to_does_not_validate() {
        // legality lives in the board, a lone piece happily walks anywhere
        let mut piece = Piece::new(PieceType::Player, Pos::new(0, 0));
        assert!(piece.move_to(Some(Pos::new(9, 9))));
        assert_eq!(piece.pos(), Pos::new(9, 9));
    }

    #[test]
    fn directional_moves() {
        let mut piece = Piece::new(PieceType::Player, Pos::new(2, 2));
        assert!(piece.move_up());
        assert_eq!(piece.pos(), Pos::new(2, 3));
        assert!(piece.move_right());
        assert_eq!(piece.pos(), Pos::new(3, 3));
        assert!(piece.move_down());
        assert_eq!(piece.pos(), Pos::new(3, 2));
        assert!(piece.move_left());
        assert_eq!(piece.pos(), Pos::new(2, 2));
    }

    #[test]
    fn kind_is_fixed() {
        let piece = Piece::new(PieceType::Wall, Pos::new(0, 0));
        assert_eq!(piece.kind(), PieceType::Wall);
        assert_eq!(piece.kind().to_string(), "wall");
    }
}
