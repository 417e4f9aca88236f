use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::debug;

use crate::data::{Dir, Pos};
use crate::parser::{self, ParserErr};
use crate::piece::{Piece, PieceType};

/// A Sokoban level board.
///
/// The board owns every piece: walls, boxes and storage locations live in an
/// arena addressed by stable index, the single player piece is kept
/// separately. A position-to-indices map answers the spatial queries without
/// scanning the arena; a storage location may share its position with a box
/// or with the player, so a position can map to more than one piece.
///
/// All mutation goes through the player-move methods. A move either succeeds
/// (relocating the player, and on a push exactly one box) or leaves the board
/// untouched and returns `false`.
#[derive(Clone)]
pub struct Board {
    /// Every piece except the player. Indices stay valid for the lifetime of
    /// the board - pieces are never added or removed after construction.
    pieces: Vec<Piece>,
    /// Arena indices of the pieces at each occupied position.
    index: FnvHashMap<Pos, Vec<usize>>,
    player: Piece,
    width: i32,
    height: i32,
}

impl Board {
    pub(crate) fn from_parts(pieces: Vec<Piece>, player: Piece, width: i32, height: i32) -> Board {
        let mut index: FnvHashMap<Pos, Vec<usize>> = FnvHashMap::default();
        for (i, piece) in pieces.iter().enumerate() {
            index.entry(piece.pos()).or_insert_with(Vec::new).push(i);
        }
        Board {
            pieces,
            index,
            player,
            width,
            height,
        }
    }

    /// Builds a board from level-text lines, the first line being the top
    /// row of the level. See the crate docs for the character grammar.
    pub fn from_lines<I>(lines: I) -> Result<Board, ParserErr>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        parser::parse(lines)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn player(&self) -> &Piece {
        &self.player
    }

    /// All pieces of the given type, in unspecified order. Never yields the
    /// player - it is not part of the arena, use [`player`](Board::player).
    pub fn pieces(&self, kind: PieceType) -> Vec<&Piece> {
        self.pieces.iter().filter(|p| p.kind() == kind).collect()
    }

    fn pieces_at(&self, pos: Pos) -> impl Iterator<Item = &Piece> + '_ {
        self.index
            .get(&pos)
            .into_iter()
            .flatten()
            .map(move |&i| &self.pieces[i])
    }

    fn has_kind(&self, pos: Pos, kind: PieceType) -> bool {
        self.pieces_at(pos).any(|p| p.kind() == kind)
    }

    pub fn has_wall(&self, pos: Pos) -> bool {
        self.has_kind(pos, PieceType::Wall)
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.has_kind(pos, PieceType::Box)
    }

    pub fn has_storage(&self, pos: Pos) -> bool {
        self.has_kind(pos, PieceType::Storage)
    }

    pub fn has_player(&self, pos: Pos) -> bool {
        self.player.pos() == pos
    }

    /// True iff a wall, the player or a box sits at `pos`. A storage
    /// location alone does not occupy its cell.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.has_player(pos) || self.has_wall(pos) || self.has_box(pos)
    }

    pub fn is_free(&self, pos: Pos) -> bool {
        !self.is_occupied(pos)
    }

    /// True iff at least one storage location has a box on it.
    ///
    /// Note this is deliberately weaker than the canonical Sokoban win
    /// condition (every storage covered) - it matches what the board this
    /// model is ported from actually checks.
    pub fn is_solved(&self) -> bool {
        self.pieces
            .iter()
            .filter(|p| p.kind() == PieceType::Storage)
            .any(|storage| self.has_box(storage.pos()))
    }

    /// Moves the player one step in `dir` if the target cell is free, or
    /// pushes the box standing there if the cell behind it is free. Returns
    /// `false` and mutates nothing otherwise.
    ///
    /// There is no width/height check: cells outside the declared extent are
    /// never occupied, so nothing but walls and boxes blocks a move.
    pub fn move_player(&mut self, dir: Dir) -> bool {
        let adj = self.player.pos() + dir;
        let adj_next = adj + dir;
        self.move_player_to(adj, adj_next)
    }

    pub fn move_player_up(&mut self) -> bool {
        self.move_player(Dir::Up)
    }

    pub fn move_player_down(&mut self) -> bool {
        self.move_player(Dir::Down)
    }

    pub fn move_player_left(&mut self) -> bool {
        self.move_player(Dir::Left)
    }

    pub fn move_player_right(&mut self) -> bool {
        self.move_player(Dir::Right)
    }

    /// `adj` must be adjacent to the player and `adj_next` one step further
    /// in the same direction.
    fn move_player_to(&mut self, adj: Pos, adj_next: Pos) -> bool {
        if self.is_free(adj) {
            self.player.move_to(Some(adj));
            true
        } else if self.has_box(adj) && self.is_free(adj_next) {
            self.player.move_to(Some(adj));
            self.move_box(adj, adj_next);
            debug!("pushed box {} -> {}", adj, adj_next);
            true
        } else {
            false
        }
    }

    /// Relocates the box at `from` to `to`, keeping the position index in
    /// sync. Callers guarantee a box is at `from` and `to` is free.
    fn move_box(&mut self, from: Pos, to: Pos) {
        let box_idx = self.index.get(&from).and_then(|indices| {
            indices
                .iter()
                .copied()
                .find(|&i| self.pieces[i].kind() == PieceType::Box)
        });
        if let Some(i) = box_idx {
            self.pieces[i].move_to(Some(to));
            self.index_remove(from, i);
            self.index.entry(to).or_insert_with(Vec::new).push(i);
        }
    }

    fn index_remove(&mut self, pos: Pos, piece_idx: usize) {
        if let Some(indices) = self.index.get_mut(&pos) {
            indices.retain(|&i| i != piece_idx);
            if indices.is_empty() {
                self.index.remove(&pos);
            }
        }
    }
}

/// The default board from the original game: 11x11, player at (4,5), one box
/// at (5,5), one storage location at (6,5).
impl Default for Board {
    fn default() -> Board {
        let player = Piece::new(PieceType::Player, Pos::new(4, 5));
        let pieces = vec![
            Piece::new(PieceType::Box, Pos::new(5, 5)),
            Piece::new(PieceType::Storage, Pos::new(6, 5)),
        ];
        Board::from_parts(pieces, player, 11, 11)
    }
}

impl Display for Board {
    /// Serializes the board back to the level-text grammar, top row (highest
    /// y) first, every row padded to the full board width.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let pos = Pos::new(x, y);
                let c = if self.is_free(pos) {
                    if self.has_storage(pos) {
                        '.'
                    } else {
                        ' '
                    }
                } else if self.has_wall(pos) {
                    '#'
                } else if self.has_box(pos) {
                    if self.has_storage(pos) {
                        '*'
                    } else {
                        '$'
                    }
                } else if self.has_player(pos) {
                    if self.has_storage(pos) {
                        '+'
                    } else {
                        '@'
                    }
                } else {
                    // occupied cells are exactly walls, boxes and the player
                    unreachable!()
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
