//! Modal keyboard-command interpreter for the minesweeper board.
//!
//! A single pure function maps raw key identifiers (single characters or DOM
//! named keys such as `"ArrowLeft"` and `"Enter"`) to a closed set of game
//! actions. No state lives here: count-prefix accumulation, search state,
//! cursor clamping, and the smart-chord policy all belong to the caller.

use serde::{Deserialize, Serialize};

/// Horizontal delta emitted for `$`; the caller clamps it to the row end.
pub const ROW_END_DELTA: i32 = 999;

/// Semantic action decoded from one keystroke.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VimAction {
    /// Move the cursor by unit deltas (or `ROW_END_DELTA` for `$`).
    MoveCursor { dx: i32, dy: i32 },
    /// Open the cell under the cursor.
    Reveal,
    /// Toggle a flag under the cursor.
    Flag,
    /// Context-dependent reveal-or-flag chord; policy resolved by the caller.
    Smart,
    /// A count-prefix digit `1`-`9`, carrying the literal character.
    Digit { value: char },
    /// `0`, distinct from the other digits so a bare `0` can mean column 0.
    Zero,
    GoTop,
    GoBottom,
    StartRow,
    /// Horizontal scan to the next/previous unrevealed cell.
    NextUnrevealed,
    PrevUnrevealed,
    /// Vertical scan to the next/previous unrevealed cell.
    NextUnrevealedVertical,
    PrevUnrevealedVertical,
    StartSearch,
    NextMatch,
    PrevMatch,
}

/// Decodes one keystroke. Unmapped keys return `None`, which the caller must
/// treat as a silent no-op. Same key, same action, always.
pub fn handle_vim_key(key: &str) -> Option<VimAction> {
    use VimAction::*;

    if let Some(ch) = single_char(key) {
        if ('1'..='9').contains(&ch) {
            return Some(Digit { value: ch });
        }
    }

    match key {
        "0" => Some(Zero),
        "_" => Some(StartRow),

        "/" => Some(StartSearch),
        "n" => Some(NextMatch),
        "N" => Some(PrevMatch),

        "h" | "ArrowLeft" => Some(MoveCursor { dx: -1, dy: 0 }),
        "j" | "ArrowDown" => Some(MoveCursor { dx: 0, dy: 1 }),
        "k" | "ArrowUp" => Some(MoveCursor { dx: 0, dy: -1 }),
        "l" | "ArrowRight" => Some(MoveCursor { dx: 1, dy: 0 }),

        "w" => Some(NextUnrevealed),
        "b" => Some(PrevUnrevealed),
        "{" => Some(PrevUnrevealedVertical),
        "}" => Some(NextUnrevealedVertical),

        "i" | "Enter" => Some(Reveal),
        " " => Some(Smart),
        "f" => Some(Flag),

        "$" => Some(MoveCursor { dx: ROW_END_DELTA, dy: 0 }),
        "G" => Some(GoBottom),
        "g" => Some(GoTop),

        _ => None,
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}
