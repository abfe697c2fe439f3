//! Whole-system tests: full games through the `Game` orchestrator with
//! registered listeners.

use std::cell::RefCell;
use std::rc::Rc;

use mancala_core::ai::ComputerPlayer;
use mancala_core::board::PitId;
use mancala_core::core::{Difficulty, FinalScore, GameMode, PlayerNumber};
use mancala_core::game::{Game, GameListener};
use mancala_core::rules::{EgyptianRules, RuleSet};

#[derive(Default)]
struct Outcome {
    completed: bool,
    score: Option<FinalScore>,
    captures: usize,
    extra_turns: usize,
}

struct OutcomeListener {
    outcome: Rc<RefCell<Outcome>>,
}

impl GameListener for OutcomeListener {
    fn on_player_has_another_turn(&mut self) {
        self.outcome.borrow_mut().extra_turns += 1;
    }

    fn on_pit_captured(&mut self, _captured_pit: PitId) {
        self.outcome.borrow_mut().captures += 1;
    }

    fn on_game_complete(&mut self, score: FinalScore) {
        let mut outcome = self.outcome.borrow_mut();
        outcome.completed = true;
        outcome.score = Some(score);
    }
}

fn new_game(mode: GameMode, difficulty: Difficulty) -> (Game, Rc<RefCell<Outcome>>) {
    let mut game = Game::with_seed(42);
    game.set_rule_set(Box::new(EgyptianRules::new()));

    let outcome = Rc::new(RefCell::new(Outcome::default()));
    game.add_listener(Box::new(OutcomeListener {
        outcome: Rc::clone(&outcome),
    }));

    game.new_game(mode, difficulty).unwrap();
    (game, outcome)
}

/// Drive a game to completion with an AI on each side.
fn play_out(game: &mut Game, player_one: ComputerPlayer, outcome: &Rc<RefCell<Outcome>>) {
    let player_two = *game.player_two().expect("one-player game");

    // Far more moves than any real game takes; a hang here is a rules bug.
    for _ in 0..20_000 {
        if outcome.borrow().completed {
            return;
        }

        let mover = match game.current_player().unwrap() {
            PlayerNumber::One => player_one,
            PlayerNumber::Two => player_two,
        };

        let pit = mover.play(game.board()).unwrap();
        game.make_move(pit).unwrap();
    }

    panic!("game did not complete");
}

#[test]
fn test_ai_versus_ai_conserves_all_marbles() {
    let (mut game, outcome) = new_game(GameMode::OnePlayer, Difficulty::Hard);

    let player_one = game
        .rule_set()
        .unwrap()
        .create_ai_player(PlayerNumber::One, Difficulty::Easy);

    play_out(&mut game, player_one, &outcome);

    let score = outcome.borrow().score.expect("game completed");
    let total = score.score_for(PlayerNumber::One).total()
        + score.score_for(PlayerNumber::Two).total();
    assert_eq!(total, 48);
}

#[test]
fn test_every_difficulty_pairing_completes() {
    for level_one in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for level_two in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let (mut game, outcome) = new_game(GameMode::OnePlayer, level_two);

            let player_one = game
                .rule_set()
                .unwrap()
                .create_ai_player(PlayerNumber::One, level_one);

            play_out(&mut game, player_one, &outcome);

            let outcome = outcome.borrow();
            assert!(outcome.completed, "{level_one:?} vs {level_two:?}");

            let score = outcome.score.unwrap();
            let loser_open_play = [PlayerNumber::One, PlayerNumber::Two]
                .into_iter()
                .map(|player| score.score_for(player).remaining())
                .min()
                .unwrap();
            assert_eq!(loser_open_play, 0, "someone's row must be bare at the end");
        }
    }
}

#[test]
fn test_ai_games_are_reproducible() {
    let run = || {
        let (mut game, outcome) = new_game(GameMode::OnePlayer, Difficulty::Medium);
        let player_one = game
            .rule_set()
            .unwrap()
            .create_ai_player(PlayerNumber::One, Difficulty::Hard);
        play_out(&mut game, player_one, &outcome);
        let score = outcome.borrow().score.unwrap();
        let result = (
            game.game_state().unwrap(),
            score.result(),
            outcome.borrow().captures,
            outcome.borrow().extra_turns,
        );
        result
    };

    assert_eq!(run(), run());
}

#[test]
fn test_listeners_fire_in_registration_order() {
    struct OrderListener {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl GameListener for OrderListener {
        fn on_board_changed(&mut self, _changed_pits: &[PitId]) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    let mut game = Game::new();
    game.set_rule_set(Box::new(EgyptianRules::new()));

    let log = Rc::new(RefCell::new(Vec::new()));
    game.add_listener(Box::new(OrderListener {
        tag: "first",
        log: Rc::clone(&log),
    }));
    game.add_listener(Box::new(OrderListener {
        tag: "second",
        log: Rc::clone(&log),
    }));

    game.new_game(GameMode::TwoPlayer, Difficulty::Easy).unwrap();
    game.make_move(PitId::new(0)).unwrap();

    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn test_restore_mid_game_reproduces_play() {
    let (mut game, _outcome) = new_game(GameMode::OnePlayer, Difficulty::Hard);

    // A few opening moves on both sides.
    game.make_move(PitId::new(2)).unwrap(); // replay
    game.make_move(PitId::new(0)).unwrap();
    let ai_pit = game.player_two().unwrap().play(game.board()).unwrap();
    game.make_move(ai_pit).unwrap();

    let saved = game.game_state().unwrap();

    // Bring the saved game up in a completely separate orchestrator.
    let mut revived = Game::new();
    revived.set_rule_set(Box::new(EgyptianRules::new()));
    revived.restore_game_state(&saved).unwrap();

    assert_eq!(revived.game_state().unwrap(), saved);
    assert_eq!(revived.current_player(), game.current_player());
    assert_eq!(revived.mode(), GameMode::OnePlayer);
    assert_eq!(revived.difficulty(), Difficulty::Hard);

    for (live, restored) in game.board().pits().iter().zip(revived.board().pits()) {
        assert_eq!(live.marble_count(), restored.marble_count());
        assert_eq!(live.player(), restored.player());
        assert_eq!(live.is_store(), restored.is_store());
    }

    // The revived AI faces the same board, so it picks the same move.
    if let Some(next) = game.current_player() {
        let original = game
            .rule_set()
            .unwrap()
            .create_ai_player(next, Difficulty::Hard)
            .play(game.board())
            .unwrap();
        let replayed = revived
            .rule_set()
            .unwrap()
            .create_ai_player(next, Difficulty::Hard)
            .play(revived.board())
            .unwrap();
        assert_eq!(original, replayed);
    }
}

#[test]
fn test_restore_survives_a_full_game_afterwards() {
    let (mut game, _outcome) = new_game(GameMode::OnePlayer, Difficulty::Easy);

    game.make_move(PitId::new(1)).unwrap();
    let saved = game.game_state().unwrap();

    let mut revived = Game::with_seed(42);
    revived.set_rule_set(Box::new(EgyptianRules::new()));

    let revived_outcome = Rc::new(RefCell::new(Outcome::default()));
    revived.add_listener(Box::new(OutcomeListener {
        outcome: Rc::clone(&revived_outcome),
    }));
    revived.restore_game_state(&saved).unwrap();

    let player_one = revived
        .rule_set()
        .unwrap()
        .create_ai_player(PlayerNumber::One, Difficulty::Easy);
    play_out(&mut revived, player_one, &revived_outcome);

    let score = revived_outcome.borrow().score.expect("restored game completed");
    let total = score.score_for(PlayerNumber::One).total()
        + score.score_for(PlayerNumber::Two).total();
    assert_eq!(total, 48);
}
