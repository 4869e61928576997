#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use tictactoe::{TicTacToe, wasm_ready};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn fresh_game_view() {
    let game = TicTacToe::new();
    let view = game.view().unwrap();

    let squares = Array::from(&get(&view, "squares"));
    assert_eq!(squares.length(), 9);
    assert!(squares.get(0).is_null());
    assert_eq!(get(&view, "status_text").as_string().unwrap(), "Next player: X");
    assert_eq!(Array::from(&get(&view, "moves")).length(), 1);
}

#[wasm_bindgen_test]
fn cell_click_updates_view() {
    let mut game = TicTacToe::new();
    let view = game.cell_clicked(4).unwrap();

    let squares = Array::from(&get(&view, "squares"));
    assert_eq!(squares.get(4).as_string().unwrap(), "X");
    assert_eq!(get(&view, "next_player").as_string().unwrap(), "O");
    assert_eq!(get(&view, "step").as_f64().unwrap(), 1.0);
}

#[wasm_bindgen_test]
fn winner_status_is_tagged() {
    let mut game = TicTacToe::new();
    let mut view = JsValue::UNDEFINED;
    for cell in [0, 1, 3, 4, 6] {
        view = game.cell_clicked(cell).unwrap();
    }

    let status = get(&view, "status");
    assert_eq!(get(&status, "kind").as_string().unwrap(), "winner");
    assert_eq!(get(&status, "player").as_string().unwrap(), "X");
    assert_eq!(get(&view, "status_text").as_string().unwrap(), "Winner: X");
}

#[wasm_bindgen_test]
fn history_click_rewinds() {
    let mut game = TicTacToe::new();
    game.cell_clicked(0).unwrap();
    game.cell_clicked(1).unwrap();

    let view = game.history_entry_clicked(0).unwrap();

    assert_eq!(get(&view, "step").as_f64().unwrap(), 0.0);
    assert_eq!(Array::from(&get(&view, "moves")).length(), 3);
    let first = Array::from(&get(&view, "moves")).get(0);
    assert_eq!(
        get(&first, "description").as_string().unwrap(),
        "Go to game start"
    );
    assert_eq!(get(&first, "is_current").as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn out_of_range_step_throws() {
    let mut game = TicTacToe::new();

    let err = game.history_entry_clicked(5).unwrap_err();

    assert!(err.as_string().unwrap().contains("out of range"));
}
