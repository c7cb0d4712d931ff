//! End-to-end session tests.
//!
//! These drive the controller through the full standby → play →
//! terminal flow on the console display, the way the boot loop on the
//! device does.

use seg_game::games::{MathGame, MemoryGame, SpatialGame};
use seg_game::{
    font, ConsoleDisplay, GamePhase, MiniGame, Mode, SevenSegButtonGame, DEFAULT_CONFIRM_MASK,
};

fn controller() -> SevenSegButtonGame<ConsoleDisplay> {
    SevenSegButtonGame::new(ConsoleDisplay::silent(), 42)
}

/// Press the confirm button twice (with releases) and tick through it.
fn leave_standby(controller: &mut SevenSegButtonGame<ConsoleDisplay>) {
    controller.display_mut().press(DEFAULT_CONFIRM_MASK);
    controller.tick();
    controller.tick();
    controller.display_mut().press(DEFAULT_CONFIRM_MASK);
    controller.tick();
    assert_eq!(controller.mode(), Mode::Playing);
    controller.tick(); // consume the trailing release
}

/// Queue one press-release pair and tick through both reads.
fn press(controller: &mut SevenSegButtonGame<ConsoleDisplay>, mask: u8) {
    controller.display_mut().press(mask);
    controller.tick();
    controller.tick();
}

#[test]
fn full_session_win() {
    let mut controller = controller();
    let game = MiniGame::builder(3)
        .answer_sequence(vec![1, 2, 3])
        .input_as_linear_int(false)
        .build();
    controller.register("demo", game).unwrap();
    controller.setup(Some("demo")).unwrap();

    leave_standby(&mut controller);

    for mask in [1u8, 2, 3] {
        press(&mut controller, mask);
    }

    assert_eq!(controller.selected_game_ref().phase(), GamePhase::Won);
    assert_eq!(
        controller.display().segments(),
        font::encode_str("--safe--").as_slice()
    );

    // A win never stops the loop; further presses re-render the won
    // screen and mutate nothing.
    assert!(!controller.is_over());
    press(&mut controller, 7);
    assert_eq!(controller.selected_game_ref().progress(), 3);
    assert_eq!(
        controller.display().segments(),
        font::encode_str("--safe--").as_slice()
    );
}

#[test]
fn full_session_loss_stops_the_loop() {
    let mut controller = controller();
    let game = MiniGame::builder(3)
        .answer_sequence(vec![1, 2, 3])
        .input_as_linear_int(false)
        .lives(2)
        .build();
    controller.register("demo", game).unwrap();
    controller.setup(Some("demo")).unwrap();

    leave_standby(&mut controller);

    press(&mut controller, 8); // miss
    assert!(!controller.is_over());
    press(&mut controller, 8); // second miss: lives drained

    assert_eq!(controller.selected_game_ref().phase(), GamePhase::Lost);
    assert!(controller.is_over());
    assert_eq!(
        controller.display().segments(),
        font::encode_str("--dead--").as_slice()
    );
}

#[test]
fn memory_session_replay_wins() {
    let mut controller = controller();
    controller.register("memory", MemoryGame::new(4).instant().build()).unwrap();
    controller.register("math", MathGame::new().build()).unwrap();
    controller.register("space", SpatialGame::new(4).instant().build()).unwrap();
    controller.setup(Some("memory")).unwrap();

    leave_standby(&mut controller);

    let flashed = controller.selected_game_ref().answer_sequence().to_vec();
    assert_eq!(flashed.len(), 4);
    for mask in flashed {
        press(&mut controller, mask);
    }

    assert_eq!(controller.selected_game_ref().phase(), GamePhase::Won);
}

#[test]
fn random_selection_runs_the_chosen_game_setup() {
    let mut controller = controller();
    controller.register("memory", MemoryGame::new(4).instant().build()).unwrap();
    controller.register("space", SpatialGame::new(4).instant().build()).unwrap();
    controller.setup(None).unwrap();

    // Whichever game the seed picked, its setup resolved a full-length
    // answer sequence before standby began.
    assert!(controller.selected_index() < 2);
    assert_eq!(controller.selected_game_ref().answer_sequence().len(), 4);
    assert_eq!(controller.mode(), Mode::Standby);
}

#[test]
fn standby_shows_selection_and_survives_bail() {
    let mut controller = controller();
    controller.register("a", MemoryGame::new(3).instant().build()).unwrap();
    controller.register("b", SpatialGame::new(3).instant().build()).unwrap();
    controller.setup(Some("b")).unwrap();

    // Selection index 1 renders as two LEDs from the left.
    controller.tick();
    assert_eq!(controller.display().leds(), 0b1100_0000);

    // A non-confirm press bails to the lose screen, display only.
    press(&mut controller, 0b0000_0001);
    assert_eq!(controller.mode(), Mode::Standby);
    assert!(controller.selected_game_ref().is_alive());

    // The confirmation gesture still works afterwards.
    leave_standby(&mut controller);
    assert_eq!(controller.mode(), Mode::Playing);
}

#[test]
fn chord_press_costs_a_life_but_keeps_running() {
    let mut controller = controller();
    controller.register("space", SpatialGame::new(3).instant().build()).unwrap();
    controller.setup(Some("space")).unwrap();

    leave_standby(&mut controller);

    // Two buttons at once cannot be mapped to a cell index.
    press(&mut controller, 0b0000_0011);

    let game = controller.selected_game_ref();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.lives(), 1);
    assert_eq!(game.progress(), 0);
}
