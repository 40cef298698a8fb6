use std::env;
use std::process::ExitCode;

use chess_rules::board::{Board, Square};
use chess_rules::uci::try_parse_position_command;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--help") {
        eprintln!("usage: position_status [--fen \"<fen>\"] <move1> <move2> ...");
        return ExitCode::SUCCESS;
    }

    let mut parts: Vec<&str> = vec!["position"];
    let moves = match args.first().map(String::as_str) {
        Some("--fen") => {
            let Some(fen) = args.get(1) else {
                eprintln!("error: --fen needs a position");
                return ExitCode::FAILURE;
            };
            parts.push("fen");
            parts.extend(fen.split_whitespace());
            &args[2..]
        }
        _ => {
            parts.push("startpos");
            &args[..]
        }
    };
    if !moves.is_empty() {
        parts.push("moves");
        parts.extend(moves.iter().map(String::as_str));
    }

    let mut board = Board::new();
    if let Err(e) = try_parse_position_command(&mut board, &parts) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let legal_moves = board.all_legal_moves();
    let side = board.side_to_move();
    println!("fen: {}", board.to_fen());
    println!("side_to_move: {side}");
    println!("in_check: {}", board.is_in_check(side));
    println!("status: {}", board.terminal_state());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    let movable: Vec<String> = board
        .movable_pieces(side)
        .iter()
        .map(Square::to_string)
        .collect();
    println!("movable: {}", movable.join(" "));
    ExitCode::SUCCESS
}
