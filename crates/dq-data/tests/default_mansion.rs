use dq_core::action::Command;
use dq_core::mansion::{Mansion, Side};
use dq_core::options::GameOptions;
use dq_core::{GameLoop, GameLoopResult, GameState};
use dq_data::{default_layout, rooms};

fn new_game() -> GameLoop {
    let mansion = Mansion::from_layout(&default_layout()).unwrap();
    GameLoop::new(GameState::new(mansion, GameOptions::default()))
}

#[test]
fn walk_to_garden() {
    let mut game = new_game();

    assert_eq!(game.tick(Command::Go(Side::Left)), GameLoopResult::Continue);
    assert_eq!(game.state().current_room().name, rooms::LIBRARY);

    let result = game.tick(Command::Go(Side::Left));
    assert_eq!(result, GameLoopResult::DeadEnd(rooms::GARDEN.to_string()));

    let report = game.state().close_case();
    assert_eq!(report.clues, vec!["Chave Enferrujada", "Diário Rasgado"]);
    assert_eq!(report.prime_suspect.map(|s| s.mentions), Some(1));
}

#[test]
fn walk_to_kitchen() {
    let mut game = new_game();

    let result = game.tick(Command::Go(Side::Right));
    assert_eq!(result, GameLoopResult::DeadEnd(rooms::KITCHEN.to_string()));

    let report = game.state().close_case();
    assert_eq!(report.clues, vec!["Receita Queimada"]);
    let suspect = report.prime_suspect.unwrap();
    assert_eq!(suspect.name, "Sr. Blackwood");
    assert_eq!(suspect.mentions, 1);
}

#[test]
fn walk_to_cellar_lists_relations() {
    let mut game = new_game();
    game.tick(Command::Go(Side::Left));
    game.tick(Command::Go(Side::Right));

    let mut lines = game.state().association_lines();
    lines.sort();
    assert_eq!(
        lines,
        vec![
            "Diário Rasgado -> Sr. Blackwood",
            "Fotografia Antiga -> Sr. Graves"
        ]
    );
}

#[test]
fn quitting_in_the_hall_closes_an_empty_case() {
    let mut game = new_game();
    assert_eq!(game.tick(Command::Quit), GameLoopResult::PlayerQuit);

    let report = game.state().close_case();
    assert!(report.clues.is_empty());
    assert!(report.prime_suspect.is_none());
}

#[test]
fn layout_survives_json() {
    let layout = default_layout();
    let json = layout.to_json().unwrap();
    let parsed = dq_core::mansion::MansionLayout::from_json(&json).unwrap();
    assert_eq!(parsed, layout);
}
