//! View projection: grid and stats rendering decoupled from any display.
//!
//! [`board_view`] is the narrow interface between the state machine and a
//! display surface; the terminal printer below consumes only the projection,
//! so the engine stays testable without one.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use crate::game::GameEngine;

/// Visual state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Face down.
    Hidden,
    /// Face up mid-move.
    Revealed(&'static str),
    /// Face up permanently as part of a matched pair.
    Matched(&'static str),
}

/// A fixed-column grid of cell views. Cell `(row, col)` maps to deck index
/// `row * columns + col`; the mapping is stable for the lifetime of one deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    columns: usize,
    cells: Vec<CellView>,
}

impl BoardView {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.cells.len() / self.columns
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<CellView> {
        if col >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + col).copied()
    }

    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }
}

/// Project the engine into a display grid.
pub fn board_view(engine: &GameEngine) -> BoardView {
    let cells = engine
        .deck()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if engine.is_matched(index) {
                CellView::Matched(card.icon())
            } else if engine.is_flipped(index) {
                CellView::Revealed(card.icon())
            } else {
                CellView::Hidden
            }
        })
        .collect();
    BoardView {
        columns: engine.difficulty().columns(),
        cells,
    }
}

/// Move/match counters, refreshed after every mutation.
pub fn stats_line(engine: &GameEngine) -> String {
    format!(
        "Moves: {}  Matches: {}/{}",
        engine.moves(),
        engine.matches(),
        engine.deck().pair_count()
    )
}

/// Win banner shown when the state machine enters `Won`.
pub fn win_banner(moves: u32) -> String {
    format!("You won! Total moves: {}", moves)
}

/// Draw the board with coordinate headers and a legend.
#[cfg(feature = "std")]
pub fn print_board(engine: &GameEngine) {
    let view = board_view(engine);

    std::print!("\n     ");
    for c in 0..view.columns() {
        let ch = (b'A' + c as u8) as char;
        std::print!(" {} ", ch);
    }
    std::println!();
    for r in 0..view.rows() {
        std::print!("  {:2} ", r + 1);
        for c in 0..view.columns() {
            match view.cell(r, c) {
                Some(CellView::Hidden) => std::print!(" □ "),
                Some(CellView::Revealed(icon)) | Some(CellView::Matched(icon)) => {
                    std::print!(" {}", icon)
                }
                None => std::print!("   "),
            }
        }
        std::println!();
    }
    std::println!("\n  Legend: □=Face down; matched pairs stay face up.");
}
