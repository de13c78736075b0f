//! Seeded random playouts to completion.
//!
//! Each game picks uniformly among legal moves until none remain, checking
//! invariants along the way. Seeds make every game reproducible.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ultimate_ttt::core::{GameMode, GameState, BOARD_CELLS};
use ultimate_ttt::{apply_move, legal_destinations, GameResult, RulesEngine, StandardRules};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Play a random game from the initial state, returning every state visited.
fn random_game(seed: u64) -> Vec<GameState> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut states = vec![GameState::new(GameMode::Normal)];

    loop {
        let state = *states.last().unwrap();
        let moves = state.legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        let next = apply_move(&state, mv.sub_board, mv.cell);
        assert_ne!(next, state, "legal move {mv} was rejected");
        states.push(next);
    }

    states
}

#[test]
fn test_random_games_terminate() {
    init_tracing();

    for seed in 0..200 {
        let states = random_game(seed);
        let last = states.last().unwrap();

        assert!(last.move_count() as usize <= BOARD_CELLS * BOARD_CELLS);
        assert_eq!(last.move_count() as usize, states.len() - 1);

        // No legal moves left: either someone won or every board is full.
        match last.outcome() {
            Some(GameResult::Winner(winner)) => {
                assert!(last.is_game_over());
                assert_eq!(last.winner(), Some(winner));
                // The winner made the last move.
                assert_eq!(last.current_player(), winner.opponent());
            }
            Some(GameResult::Draw) => {
                assert!(!last.is_game_over());
                assert!(last.board().is_full());
            }
            None => panic!("seed {seed}: no legal moves but game not terminal\n{last}"),
        }
        assert!(legal_destinations(last).is_empty());
    }
}

#[test]
fn test_random_games_are_reproducible() {
    assert_eq!(random_game(7), random_game(7));
}

#[test]
fn test_game_over_only_on_final_state() {
    for seed in 200..300 {
        let states = random_game(seed);
        let (last, rest) = states.split_last().unwrap();
        assert!(rest.iter().all(|s| !s.is_game_over()));
        assert!(rest.iter().all(|s| s.outcome().is_none()));
        assert_eq!(last.is_game_over(), last.winner().is_some());
    }
}

#[test]
fn test_survival_mode_plays_identically() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut normal = GameState::new(GameMode::Normal);
    let mut survival = GameState::new(GameMode::Survival);

    while let Some(mv) = normal.legal_moves().choose(&mut rng).copied() {
        normal = normal.apply_move(mv.sub_board, mv.cell);
        survival = survival.apply_move(mv.sub_board, mv.cell);

        assert_eq!(survival.mode(), GameMode::Survival);
        assert_eq!(survival.board(), normal.board());
        assert_eq!(survival.forced_sub_board(), normal.forced_sub_board());
        assert_eq!(survival.current_player(), normal.current_player());
    }
    assert_eq!(survival.outcome(), normal.outcome());
}

#[test]
fn test_engine_and_state_methods_agree() {
    let states = random_game(1234);
    for pair in states.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        assert_eq!(
            StandardRules.legal_destinations(&before),
            before.legal_destinations()
        );
        assert_eq!(StandardRules.legal_moves(&before), before.legal_moves());
        assert_eq!(StandardRules.is_terminal(&after), after.outcome());
    }
}
