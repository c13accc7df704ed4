use anyhow::{Context, Result};
use tracing::info;

use scacco_core::{Board, STARTING_FEN, generate_moves};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let fen = std::env::args()
        .nth(1)
        .unwrap_or_else(|| STARTING_FEN.to_string());
    let board: Board = fen
        .parse()
        .with_context(|| format!("cannot parse position {fen:?}"))?;
    info!(side = %board.side_to_move(), ply = board.game_ply(), "position loaded");

    println!("{}", board.pretty());
    println!("fen: {board}");
    println!();

    let moves = generate_moves(&board);
    let captures = moves.as_slice().iter().filter(|m| m.is_capture()).count();
    println!("{} moves ({captures} captures):", moves.len());
    for chunk in moves.as_slice().chunks(8) {
        let row: Vec<String> = chunk.iter().map(|m| m.to_uci()).collect();
        println!("  {}", row.join(" "));
    }

    Ok(())
}
