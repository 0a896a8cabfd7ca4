//! Terminal front end.
//!
//! Parses typed commands, renders both boards, and paces the computer's
//! reply with a tokio timer. All game rules stay in [`GameEngine`].

use std::fmt::Write as _;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    Board, Cell, GameEngine, Orientation, Phase, PlacementUpdate, ShotReport, Side, BOARD_SIZE,
};

const GRID: usize = BOARD_SIZE as usize;

/// Format `(row, col)` as `A1`..`J10`: column letter, then 1-based row.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse `A1`..`J10` (case-insensitive) into `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= GRID {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > GRID {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// A line typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A cell, optionally followed by an orientation (`B3 V`).
    Cell {
        row: usize,
        col: usize,
        orientation: Option<Orientation>,
    },
    Orient(Orientation),
    /// Place the remaining ships at random.
    Auto,
    NewGame,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let first = parts.next().ok_or("Empty input")?;
    let command = match first.to_ascii_lowercase().as_str() {
        "auto" | "random" => Command::Auto,
        "new" => Command::NewGame,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        word => {
            if let Some(o) = parse_orientation(word) {
                Command::Orient(o)
            } else {
                let (row, col) = parse_coord(first)?;
                let orientation = match parts.next() {
                    Some(o) => Some(
                        parse_orientation(o)
                            .ok_or_else(|| format!("Invalid orientation '{}' - use H or V", o))?,
                    ),
                    None => None,
                };
                return Ok(Command::Cell {
                    row,
                    col,
                    orientation,
                });
            }
        }
    };
    Ok(command)
}

/// Render a board. `reveal` shows intact ships; `pending` marks cells chosen
/// for a ship that is still being placed.
pub fn render_board(board: &Board, reveal: bool, pending: &[(usize, usize)]) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..GRID {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in board.rows().iter().enumerate() {
        let _ = write!(out, "  {:2}", r + 1);
        for (c, cell) in row.iter().enumerate() {
            let ch = match cell {
                Cell::Hit(_) => 'X',
                Cell::Miss => 'o',
                Cell::Occupied(_) if reveal => 'S',
                _ if pending.contains(&(r, c)) => '+',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Both boards, the sunk-ship lists and the current prompt.
pub fn render_view(engine: &GameEngine) -> String {
    let mut out = String::new();
    out.push_str("Computer board:\n");
    out.push_str(&render_board(engine.board(Side::Computer), false, &[]));
    let _ = writeln!(out, "  Sunk: {}", sunk_list(engine, Side::Computer));
    out.push_str("\nYour board:\n");
    out.push_str(&render_board(
        engine.board(Side::Human),
        true,
        engine.pending_cells(),
    ));
    let _ = writeln!(out, "  Lost: {}", sunk_list(engine, Side::Human));
    if let (Phase::PlacingHuman { .. }, Some(o)) = (engine.phase(), engine.orientation()) {
        let _ = writeln!(out, "  Orientation: {:?}", o);
    }
    let _ = write!(out, "\n{}", engine.prompt());
    out
}

fn sunk_list(engine: &GameEngine, side: Side) -> String {
    let names = engine.sunk_ship_names(side);
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

fn describe_placement(update: &PlacementUpdate) -> String {
    match update {
        PlacementUpdate::Selected { ship, selected } => {
            format!("{}: {}/{} cells chosen", ship.name(), selected, ship.length())
        }
        PlacementUpdate::Placed { ship, .. } => format!("✓ {} placed", ship.name()),
        PlacementUpdate::FleetReady { .. } => "✓ All ships placed! Fire at the computer board.".to_string(),
    }
}

fn describe_shot(report: &ShotReport) -> String {
    format!("{} -> {}", coord_to_string(report.row, report.col), report)
}

/// Waits before each computer shot so a human can follow the game.
#[derive(Debug, Clone, Copy)]
pub struct TurnPacer {
    delay: Duration,
}

impl TurnPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleeps for the configured delay, then lets the engine take its one computer shot.
    pub async fn computer_turn(&self, engine: &mut GameEngine) -> anyhow::Result<ShotReport> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(engine.computer_turn()?)
    }
}

fn print_help() {
    println!("Commands:");
    println!("  A5        place the current ship at A5 / fire at A5");
    println!("  A5 V      place the current ship at A5, vertical");
    println!("  h | v     set placement orientation");
    println!("  auto      place your remaining ships at random");
    println!("  new       start a new game");
    println!("  quit      leave");
}

/// Interactive game on stdin/stdout until `quit` or end of input.
pub async fn run_interactive(mut engine: GameEngine, pacer: TurnPacer) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", render_view(&engine));
    print_help();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                println!("✗ {}", e);
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                print_help();
                continue;
            }
            Command::NewGame => {
                engine.new_game()?;
            }
            Command::Orient(o) => engine.set_orientation(o),
            Command::Auto => match engine.auto_place_human() {
                Ok(update) => println!("{}", describe_placement(&update)),
                Err(e) => println!("✗ {}", e),
            },
            Command::Cell {
                row,
                col,
                orientation,
            } => match engine.phase() {
                Phase::PlacingHuman { .. } => {
                    if let Some(o) = orientation {
                        engine.set_orientation(o);
                    }
                    match engine.request_placement(row, col) {
                        Ok(update) => println!("{}", describe_placement(&update)),
                        Err(e) => println!("✗ {}", e),
                    }
                }
                Phase::InProgress(Side::Human) => match engine.fire_at(row, col) {
                    Ok(report) => println!("{}", describe_shot(&report)),
                    Err(e) => println!("✗ {}", e),
                },
                Phase::InProgress(Side::Computer) => {}
                Phase::Finished(_) => println!("The game is over. Type 'new' to play again."),
            },
        }

        if engine.phase() == Phase::InProgress(Side::Computer) {
            println!("{}", engine.prompt());
            let report = pacer.computer_turn(&mut engine).await?;
            println!("{}", describe_shot(&report));
        }
        println!("\n{}", render_view(&engine));
    }
    Ok(())
}
