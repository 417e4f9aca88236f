// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

//! A Sokoban board model: a grid of pieces (player, boxes, storage
//! locations, walls), the movement and push rules, and the level-text
//! grammar used both for parsing and for printing boards:
//!
//! | char | meaning              |
//! |------|----------------------|
//! | ` `  | empty cell           |
//! | `#`  | wall                 |
//! | `@`  | player               |
//! | `$`  | box                  |
//! | `.`  | storage location     |
//! | `+`  | player on storage    |
//! | `*`  | box on storage       |
//!
//! No rendering, no input handling, no solver - just the board.

pub mod board;
pub mod data;
pub mod piece;

mod fs;
mod parser;

use std::error::Error;
use std::path::Path;

use crate::board::Board;

pub use crate::parser::ParserErr;

/// Anything that can produce a board, typically a level-file path.
pub trait LoadLevel {
    fn load_level(&self) -> Result<Board, Box<dyn Error>>;
}

impl<T: AsRef<Path>> LoadLevel for T {
    fn load_level(&self) -> Result<Board, Box<dyn Error>> {
        let lines = fs::read_lines(self)?;
        Ok(Board::from_lines(lines)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Pos;
    use crate::piece::PieceType;

    use super::*;

    #[test]
    fn load_level_from_file() {
        let board = "levels/01-simplest.txt".load_level().unwrap();
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 3);
        assert!(board.has_player(Pos::new(1, 1)));
        assert_eq!(board.pieces(PieceType::Box).len(), 1);
    }

    #[test]
    fn load_level_missing_file() {
        assert!("levels/no-such-level.txt".load_level().is_err());
    }

    #[test]
    fn loaded_level_round_trips() {
        let text = std::fs::read_to_string("levels/02-one-way.txt").unwrap();
        let board = "levels/02-one-way.txt".load_level().unwrap();
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn level_with_covered_storage_loads_solved() {
        // 03-two-boxes has a `*` cell, and one covered storage location is
        // enough for the win condition this model uses
        let board = "levels/03-two-boxes.txt".load_level().unwrap();
        assert_eq!(board.pieces(PieceType::Box).len(), 3);
        assert_eq!(board.pieces(PieceType::Storage).len(), 3);
        assert!(board.is_solved());
    }

    #[test]
    fn play_a_level_to_completion() {
        let mut board = "levels/02-one-way.txt".load_level().unwrap();
        assert!(!board.is_solved());
        for _ in 0..3 {
            assert!(board.move_player_up());
        }
        assert!(board.is_solved());
        // the box sits against the top wall now
        assert!(!board.move_player_up());
    }
}
