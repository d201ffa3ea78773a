//! Turn flow scenarios through the public engine API.
//!
//! Most boards here point both Emitters straight off the board so the beam
//! stays out of the way unless a test wants it.

use laser_tactics::board::{Coord, Direction, PieceKind};
use laser_tactics::core::{Action, GameState, Outcome, PieceId, PlayerId};
use laser_tactics::laser::{preview_laser, Termination};
use laser_tactics::rules::{Engine, GameEvent, InvalidAction, RulesEngine};
use laser_tactics::setup::GameBuilder;

/// Ids: 0 E0, 1 M0, 2 R0, 3 G0, 4 E1, 5 M1, 6 G1.
fn quiet_board() -> GameBuilder {
    GameBuilder::new()
        .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::West)
        .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(4, 2), Direction::South)
        .piece(PieceKind::ReflectorMobile, PlayerId::ZERO, Coord::new(6, 3), Direction::North)
        .piece(PieceKind::Guardian, PlayerId::ZERO, Coord::new(2, 2), Direction::South)
        .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::East)
        .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(5, 7), Direction::North)
        .piece(PieceKind::Guardian, PlayerId::ONE, Coord::new(3, 6), Direction::North)
}

fn spin(piece: u32) -> Action {
    Action::Rotate {
        piece: PieceId(piece),
        delta: 1,
    }
}

/// A turn that changes nothing of interest for the given player.
fn pass(state: &GameState) -> Action {
    if state.current_player() == PlayerId::ZERO {
        spin(3)
    } else {
        spin(6)
    }
}

fn play(engine: &Engine, state: &GameState, action: Action) -> (GameState, Vec<GameEvent>) {
    engine.apply(state, &action).unwrap().into_parts()
}

// =============================================================================
// Laser scenarios
// =============================================================================

/// Test that a beam striking a Monarch ends the game for the other player.
#[test]
fn test_monarch_hit_wins_and_freezes_game() {
    let engine = Engine::default();
    // Ids: 0 E0, 1 M0, 2 G0, 3 E1, 4 M1. Player 1's Monarch sits in the beam.
    let state = GameBuilder::new()
        .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::South)
        .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(4, 2), Direction::South)
        .piece(PieceKind::Guardian, PlayerId::ZERO, Coord::new(2, 2), Direction::South)
        .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::East)
        .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(0, 6), Direction::North)
        .build()
        .unwrap();

    let (over, events) = play(&engine, &state, spin(2));

    let trace = events[1].as_laser().unwrap();
    assert_eq!(trace.destroyed.as_slice(), &[PieceId(4)]);
    assert_eq!(trace.termination, Termination::Exited);
    assert_eq!(over.winner(), Some(Outcome::Winner(PlayerId::ZERO)));
    assert!(engine.outcome(&over).unwrap().is_winner(PlayerId::ZERO));
    // The turn does not pass once the game is decided.
    assert_eq!(over.ply(), 0);
    assert_eq!(over.current_player(), PlayerId::ZERO);

    let (after, events) = play(&engine, &over, spin(2));
    assert_eq!(events, vec![GameEvent::Noop]);
    assert_eq!(after, over);
}

/// Test the two Reflector-fixed outcomes for a facing-0 unit.
#[test]
fn test_fixed_reflector_faces() {
    let engine = Engine::default();

    // Heading South into the North face: deflected, beam leaves westward.
    let deflect = GameBuilder::new()
        .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(5, 0), Direction::South)
        .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(8, 2), Direction::South)
        .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::East)
        .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(1, 7), Direction::North)
        .piece(PieceKind::ReflectorFixed, PlayerId::ONE, Coord::new(5, 4), Direction::North)
        .build()
        .unwrap();
    let trace = preview_laser(&deflect, PlayerId::ZERO, engine.config());
    assert_eq!(trace.termination, Termination::Exited);
    assert_eq!(
        trace.path,
        vec![
            Coord::new(5, 1),
            Coord::new(5, 2),
            Coord::new(5, 3),
            Coord::new(5, 4),
            Coord::new(4, 4),
            Coord::new(3, 4),
            Coord::new(2, 4),
            Coord::new(1, 4),
            Coord::new(0, 4),
        ]
    );
    assert!(trace.destroyed.is_empty());

    // Heading West into the East face: destroyed.
    let shatter = GameBuilder::new()
        .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(9, 4), Direction::West)
        .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(8, 2), Direction::South)
        .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(0, 9), Direction::West)
        .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(1, 7), Direction::North)
        .piece(PieceKind::ReflectorFixed, PlayerId::ONE, Coord::new(5, 4), Direction::North)
        .build()
        .unwrap();
    let trace = preview_laser(&shatter, PlayerId::ZERO, engine.config());
    assert_eq!(trace.destroyed.as_slice(), &[PieceId(4)]);
    assert_eq!(trace.termination, Termination::Exited);
    assert_eq!(trace.path.len(), 9);
}

/// Test that `SwapWithEmitter` reports a skipped laser and no laser event.
#[test]
fn test_swap_with_emitter_never_fires() {
    let engine = Engine::default();
    // Ids: 0 E0, 1 M0, 2 R0, 3 E1, 4 M1, 5 G1.
    let state = GameBuilder::new()
        .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::South)
        .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(4, 2), Direction::South)
        .piece(PieceKind::ReflectorMobile, PlayerId::ZERO, Coord::new(6, 3), Direction::North)
        .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::East)
        .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(5, 7), Direction::North)
        .piece(PieceKind::Guardian, PlayerId::ONE, Coord::new(6, 8), Direction::East)
        .build()
        .unwrap();

    let (after, events) = play(&engine, &state, Action::SwapWithEmitter);

    assert_eq!(events.len(), 2);
    assert_eq!(events[1], GameEvent::LaserSkipped);
    assert!(events.iter().all(|e| e.as_laser().is_none()));
    assert!(after.last_laser().is_none());
    assert!(after.is_alive(PieceId(5)));

    // From its new cell the Emitter would have destroyed the Guardian.
    let would_have = preview_laser(&after, PlayerId::ZERO, engine.config());
    assert_eq!(would_have.destroyed.as_slice(), &[PieceId(5)]);
}

// =============================================================================
// Cooldowns
// =============================================================================

/// Test that a swap cooldown reads 4, 3, 2, 1, 0 on successive owner turns.
#[test]
fn test_swap_cooldown_counts_down_on_owner_turns() {
    let engine = Engine::default();
    let state = quiet_board().build().unwrap();

    let (mut state, _) = play(&engine, &state, Action::SwapWithMonarch);
    assert_eq!(state.player(PlayerId::ZERO).cooldowns.monarch_swap, 4);

    for expected in [3, 2, 1] {
        // Opponent's turn ends; player 0's turn begins.
        state = play(&engine, &state, pass(&state)).0;
        assert_eq!(state.current_player(), PlayerId::ZERO);
        assert_eq!(state.player(PlayerId::ZERO).cooldowns.monarch_swap, expected);

        let err = engine.apply(&state, &Action::SwapWithMonarch).unwrap_err();
        assert_eq!(
            err,
            InvalidAction::CooldownActive {
                kind: PieceKind::Monarch,
                turns: expected
            }
        );
        state = play(&engine, &state, pass(&state)).0;
    }

    state = play(&engine, &state, pass(&state)).0;
    assert_eq!(state.player(PlayerId::ZERO).cooldowns.monarch_swap, 0);
    // The Emitter swap was never used and stays available throughout.
    assert_eq!(state.player(PlayerId::ZERO).cooldowns.emitter_swap, 0);

    let (state, _) = play(&engine, &state, Action::SwapWithMonarch);
    assert_eq!(state.piece(PieceId(1)).unwrap().position, Coord::new(4, 2));
}

/// Test that the two swap cooldowns are independent.
#[test]
fn test_cooldowns_are_independent() {
    let engine = Engine::default();
    let state = quiet_board().build().unwrap();

    let (state, _) = play(&engine, &state, Action::SwapWithEmitter);
    let (state, _) = play(&engine, &state, pass(&state));

    assert_eq!(state.player(PlayerId::ZERO).cooldowns.emitter_swap, 3);
    assert!(engine.is_legal(&state, &Action::SwapWithMonarch));
    assert!(!engine.is_legal(&state, &Action::SwapWithEmitter));
}

// =============================================================================
// Reserve
// =============================================================================

/// Test that losing a placed unit pays the opponent only after the
/// opponent finishes a turn.
#[test]
fn test_reserve_token_arrives_after_opponent_turn() {
    let engine = Engine::default();
    // Player 0 fires down column 0 into its own unit's back face.
    let state = GameBuilder::new()
        .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::South)
        .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(4, 2), Direction::South)
        .piece(PieceKind::Guardian, PlayerId::ZERO, Coord::new(2, 2), Direction::South)
        .piece(PieceKind::ReflectorFixed, PlayerId::ZERO, Coord::new(0, 4), Direction::South)
        .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::East)
        .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(5, 7), Direction::North)
        .piece(PieceKind::Guardian, PlayerId::ONE, Coord::new(3, 6), Direction::North)
        .reserve(PlayerId::ONE, 0)
        .build()
        .unwrap();

    let (state, events) = play(&engine, &state, spin(2));
    assert!(events.contains(&GameEvent::Destroy {
        piece: PieceId(3),
        kind: PieceKind::ReflectorFixed,
        at: Coord::new(0, 4)
    }));
    assert_eq!(state.player(PlayerId::ONE).incoming, vec![1]);
    assert_eq!(state.player(PlayerId::ONE).reserve, 0);
    assert!(state.player(PlayerId::ZERO).incoming.is_empty());

    // Not yet usable on this turn.
    let place = Action::PlaceReserveUnit {
        at: Coord::new(7, 4),
        facing: Direction::North,
    };
    assert_eq!(
        engine.apply(&state, &place).unwrap_err(),
        InvalidAction::NoReserve(PlayerId::ONE)
    );

    let (state, _) = play(&engine, &state, spin(6));
    assert_eq!(state.player(PlayerId::ONE).reserve, 1);
    assert!(state.player(PlayerId::ONE).incoming.is_empty());

    let (state, _) = play(&engine, &state, spin(2));
    let (state, events) = play(&engine, &state, place);
    assert!(matches!(events[0], GameEvent::Place { .. }));
    assert_eq!(state.player(PlayerId::ONE).reserve, 0);
}

/// Test that breaking an opponent's placed unit pays the firing player at the
/// end of the same turn.
#[test]
fn test_reserve_token_to_firer_lands_same_turn() {
    let engine = Engine::default();
    // Player 0 fires down column 0 into player 1's unit's back face.
    let state = GameBuilder::new()
        .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::South)
        .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(4, 2), Direction::South)
        .piece(PieceKind::Guardian, PlayerId::ZERO, Coord::new(2, 2), Direction::South)
        .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::East)
        .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(5, 7), Direction::North)
        .piece(PieceKind::Guardian, PlayerId::ONE, Coord::new(3, 6), Direction::North)
        .piece(PieceKind::ReflectorFixed, PlayerId::ONE, Coord::new(0, 4), Direction::South)
        .reserve(PlayerId::ZERO, 0)
        .reserve(PlayerId::ONE, 0)
        .build()
        .unwrap();

    let (state, events) = play(&engine, &state, spin(2));
    assert!(events.contains(&GameEvent::Destroy {
        piece: PieceId(6),
        kind: PieceKind::ReflectorFixed,
        at: Coord::new(0, 4)
    }));
    assert_eq!(state.player(PlayerId::ZERO).reserve, 1);
    assert!(state.player(PlayerId::ZERO).incoming.is_empty());
    assert!(state.player(PlayerId::ONE).incoming.is_empty());
    assert_eq!(state.player(PlayerId::ONE).reserve, 0);

    // Player 0's new unit is not usable on player 1's turn.
    let place = Action::PlaceReserveUnit {
        at: Coord::new(7, 4),
        facing: Direction::North,
    };
    assert_eq!(state.current_player(), PlayerId::ONE);
    assert_eq!(
        engine.apply(&state, &place).unwrap_err(),
        InvalidAction::NoReserve(PlayerId::ONE)
    );

    let (state, _) = play(&engine, &state, spin(5));
    assert_eq!(state.player(PlayerId::ZERO).reserve, 1);

    let (state, events) = play(&engine, &state, place);
    assert!(matches!(events[0], GameEvent::Place { .. }));
    assert_eq!(state.player(PlayerId::ZERO).reserve, 0);
}

/// Test placement rules end to end.
#[test]
fn test_placement_rejections() {
    let engine = Engine::default();
    let state = quiet_board().build().unwrap();
    let place = |x, y| Action::PlaceReserveUnit {
        at: Coord::new(x, y),
        facing: Direction::East,
    };

    assert_eq!(
        engine.apply(&state, &place(1, 0)).unwrap_err(),
        InvalidAction::AdjacentToEmitter(Coord::new(1, 0))
    );
    assert_eq!(
        engine.apply(&state, &place(8, 9)).unwrap_err(),
        InvalidAction::AdjacentToEmitter(Coord::new(8, 9))
    );
    assert_eq!(
        engine.apply(&state, &place(4, 3)).unwrap_err(),
        InvalidAction::AdjacentToOwnMonarch(Coord::new(4, 3))
    );
    assert_eq!(
        engine.apply(&state, &place(-1, 3)).unwrap_err(),
        InvalidAction::OutOfBounds(Coord::new(-1, 3))
    );
    assert_eq!(
        engine.apply(&state, &place(6, 3)).unwrap_err(),
        InvalidAction::Occupied(Coord::new(6, 3))
    );
    assert!(engine.apply(&state, &place(5, 8)).is_ok());
}

// =============================================================================
// Turn flow
// =============================================================================

/// Test that a long quiet game is drawn once the ply cap is reached.
#[test]
fn test_ply_cap_draw() {
    let engine = Engine::default();
    let mut state = quiet_board().build().unwrap();
    let mut applied = 0;

    while !state.is_over() {
        state = play(&engine, &state, pass(&state)).0;
        applied += 1;
        assert!(applied <= 101, "game never ended");
    }

    assert_eq!(applied, 101);
    assert_eq!(state.winner(), Some(Outcome::Draw));
    assert_eq!(state.ply(), 100);
}

/// Test that moving another player's piece is refused without side effects.
#[test]
fn test_cannot_act_with_opponent_piece() {
    let engine = Engine::default();
    let state = quiet_board().build().unwrap();
    let snapshot = state.clone();

    let err = engine.apply(&state, &spin(6)).unwrap_err();

    assert_eq!(
        err,
        InvalidAction::NotYourPiece {
            piece: PieceId(6),
            owner: PlayerId::ONE,
            player: PlayerId::ZERO
        }
    );
    assert_eq!(state, snapshot);
}

/// Test that a destroyed piece can no longer be used.
#[test]
fn test_dead_piece_rejected() {
    let engine = Engine::default();
    let state = GameBuilder::new()
        .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::South)
        .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(4, 2), Direction::South)
        .piece(PieceKind::Guardian, PlayerId::ZERO, Coord::new(2, 2), Direction::South)
        .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::East)
        .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(5, 7), Direction::North)
        .piece(PieceKind::Guardian, PlayerId::ONE, Coord::new(0, 6), Direction::West)
        .piece(PieceKind::Guardian, PlayerId::ONE, Coord::new(3, 6), Direction::North)
        .build()
        .unwrap();

    let (state, _) = play(&engine, &state, spin(2));
    assert!(!state.is_alive(PieceId(5)));

    let err = engine.apply(&state, &spin(5)).unwrap_err();
    assert_eq!(err, InvalidAction::DeadPiece(PieceId(5)));
    assert!(engine.apply(&state, &spin(99)).is_err());
}
