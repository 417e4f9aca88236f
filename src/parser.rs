use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::board::Board;
use crate::data::Pos;
use crate::piece::{Piece, PieceType};

/// Why a level text cannot become a board.
///
/// The grammar itself never fails - unknown characters are empty cells - but
/// a board holds exactly one player, so a level that declares zero or more
/// than one is rejected instead of producing a broken board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    NoPlayer,
    MultiplePlayers,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.lines())
    }
}

/// Parses the XSB-style level grammar:
/// space = empty, `#` = wall, `@` = player, `$` = box, `.` = storage,
/// `+` = player on storage, `*` = box on storage. Anything else is treated
/// as an empty cell.
///
/// The first line is the top of the level and maps to the highest
/// y-coordinate; the board height is the line count and the width the
/// length of the longest line, trailing spaces included.
pub(crate) fn parse<I>(lines: I) -> Result<Board, ParserErr>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let lines: Vec<I::Item> = lines.into_iter().collect();
    let height = lines.len() as i32;
    let width = lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0) as i32;

    let mut pieces = Vec::new();
    let mut player = None;

    for (row, line) in lines.iter().enumerate() {
        let y = height - 1 - row as i32;
        for (x, cur_char) in line.as_ref().chars().enumerate() {
            let pos = Pos::new(x as i32, y);
            match cur_char {
                '#' => pieces.push(Piece::new(PieceType::Wall, pos)),
                '$' => pieces.push(Piece::new(PieceType::Box, pos)),
                '.' => pieces.push(Piece::new(PieceType::Storage, pos)),
                '@' => {
                    if player.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player = Some(Piece::new(PieceType::Player, pos));
                }
                '+' => {
                    if player.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player = Some(Piece::new(PieceType::Player, pos));
                    pieces.push(Piece::new(PieceType::Storage, pos));
                }
                '*' => {
                    pieces.push(Piece::new(PieceType::Box, pos));
                    pieces.push(Piece::new(PieceType::Storage, pos));
                }
                // space and anything unrecognized is an empty cell
                _ => {}
            }
        }
    }

    let player = player.ok_or(ParserErr::NoPlayer)?;
    debug!(
        "parsed level: {}x{}, {} pieces plus the player",
        width,
        height,
        pieces.len()
    );
    Ok(Board::from_parts(pieces, player, width, height))
}
