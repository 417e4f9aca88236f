use std::process;

use clap::{App, Arg};

use sokoban_board::data::Dir;
use sokoban_board::LoadLevel;

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-board")
        .about("Loads a Sokoban level, optionally replays a move sequence and prints the result")
        .arg(
            Arg::with_name("moves")
                .short("m")
                .long("moves")
                .takes_value(true)
                .help("moves to replay, one char each: u, d, l, r"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let mut board = path.load_level().unwrap_or_else(|err| {
        eprintln!("Can't load level {}: {}", path, err);
        process::exit(1);
    });

    print!("{}", board);

    if let Some(moves) = matches.value_of("moves") {
        for cur_char in moves.chars() {
            let dir = match cur_char.to_ascii_lowercase() {
                'u' => Dir::Up,
                'd' => Dir::Down,
                'l' => Dir::Left,
                'r' => Dir::Right,
                _ => {
                    eprintln!("Invalid move character: {}", cur_char);
                    process::exit(1);
                }
            };
            if !board.move_player(dir) {
                println!("Blocked: {}", dir);
            }
        }
        println!();
        print!("{}", board);
    }

    println!("Solved: {}", board.is_solved());
}
