//! Terminal front end for the tic-tac-toe engine.
//!
//! Two players share the keyboard. All rules live in the library; this
//! binary only renders state and relays cell selections.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tictactoe_core::{Game, Position};
use tracing_subscriber::EnvFilter;

/// Cell numbering shown to the players once at startup.
const LEGEND: &str = "0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8";

/// Two-player tic-tac-toe at the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe at the terminal", version)]
struct Cli {
    /// Tracing filter used when RUST_LOG is unset (e.g. "tictactoe_core=debug").
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(io::stderr)
        .init();

    println!("Cells are numbered 0-8:");
    println!("{LEGEND}");
    println!("Enter a cell number or a label like \"center\". Enter q to quit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    loop {
        println!("{}", game.board().display());
        println!("{}\n", game.status_message());

        if game.is_over() {
            if let Some(line) = game.winning_line() {
                let cells = line
                    .positions
                    .iter()
                    .map(|pos| pos.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Winning line: {cells}");
            }
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            let answer = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            if answer.trim().eq_ignore_ascii_case("y") {
                game = game.restart();
                continue;
            }
            break;
        }

        print!("Player {} > ", game.to_move());
        io::stdout().flush()?;
        let input = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        match Position::from_label_or_number(input) {
            Some(pos) => {
                let next = game.clone().play(pos);
                if next == game {
                    println!("Cell {} is taken - pick another.\n", pos.to_index());
                }
                game = next;
            }
            None => {
                println!("Unrecognized cell {input:?} - enter 0-8 or a label like \"center\".\n");
            }
        }
    }

    Ok(())
}
