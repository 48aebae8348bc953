use std::io::{self, Write};

use driftmine_core::{CellView, ClickEvent, GameSnapshot, GameStatus};

fn cell_glyph(cell: &CellView) -> char {
    match (cell.mine, cell.adjacent) {
        (Some(true), _) => '*',
        (_, Some(0)) => '.',
        (_, Some(count)) => char::from(b'0' + count),
        _ => '#',
    }
}

/// Message shown after a click, if the click produced anything worth announcing.
pub fn event_message(event: ClickEvent) -> Option<&'static str> {
    match event {
        ClickEvent::Ignored | ClickEvent::Revealed => None,
        ClickEvent::Repositioned => Some("Mines repositioned!"),
        ClickEvent::Won => Some("You won! Congratulations!"),
        ClickEvent::Lost => Some("Game over! You hit a mine!"),
    }
}

pub fn render_board(out: &mut impl Write, snapshot: &GameSnapshot) -> io::Result<()> {
    let status = match snapshot.status {
        GameStatus::Playing => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    };
    writeln!(
        out,
        "turn {}  next reposition in {}  mines {}  {}",
        snapshot.turn, snapshot.turns_until_reposition, snapshot.mines, status
    )?;

    write!(out, "   ")?;
    for col in 0..snapshot.size.1 {
        write!(out, " {}", col % 10)?;
    }
    writeln!(out)?;

    for (row, cells) in snapshot.rows().enumerate() {
        write!(out, "{row:>3}")?;
        for cell in cells {
            write!(out, " {}", cell_glyph(cell))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
