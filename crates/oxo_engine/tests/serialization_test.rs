//! Golden serialized forms for the engine's public types.

use oxo_engine::{Board, Cell, Mark, Outcome};
use serde_json::json;

#[test]
fn test_mark_serializes_as_bare_letter() {
    assert_eq!(serde_json::to_value(Mark::X).unwrap(), json!("X"));
    assert_eq!(serde_json::to_value(Mark::O).unwrap(), json!("O"));
}

#[test]
fn test_cell_forms() {
    assert_eq!(serde_json::to_value(Cell::Empty).unwrap(), json!("Empty"));
    assert_eq!(
        serde_json::to_value(Cell::Occupied(Mark::O)).unwrap(),
        json!({ "Occupied": "O" })
    );
}

#[test]
fn test_outcome_forms() {
    assert_eq!(
        serde_json::to_value(Outcome::Winner(Mark::X)).unwrap(),
        json!({ "Winner": "X" })
    );
    assert_eq!(serde_json::to_value(Outcome::Tie).unwrap(), json!("Tie"));
}

#[test]
fn test_board_survives_a_round_trip() {
    let mut board = Board::new();
    board.place(0, 0, Mark::X).unwrap();
    board.place(1, 1, Mark::O).unwrap();
    board.place(2, 2, Mark::X).unwrap();

    let encoded = serde_json::to_string(&board).unwrap();
    let decoded: Board = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, board);

    assert_eq!(
        serde_json::to_value(board).unwrap(),
        json!({
            "cells": [
                { "Occupied": "X" }, "Empty", "Empty",
                "Empty", { "Occupied": "O" }, "Empty",
                "Empty", "Empty", { "Occupied": "X" },
            ]
        })
    );
}
