//! Black-box tests for the board engine through the public API.

use tui_2048::core::{GameState, Ruleset};
use tui_2048::types::{Direction, MoveResult};

fn fixture(rows: &[Vec<u32>]) -> GameState {
    GameState::from_rows(rows, Ruleset::default(), 12345)
}

/// Sorted multiset of the non-zero tile values on the grid.
fn tile_multiset(state: &GameState) -> Vec<u32> {
    let mut tiles: Vec<u32> = state
        .to_rows()
        .into_iter()
        .flatten()
        .filter(|&v| v != 0)
        .collect();
    tiles.sort_unstable();
    tiles
}

/// Apply a move's transitions to a before-multiset: every merge pair
/// replaces two `v` with one `2v`, the spawn adds its value.
fn expected_after(mut tiles: Vec<u32>, result: &MoveResult) -> Vec<u32> {
    let mut merge_sources: Vec<u32> = result
        .transitions
        .iter()
        .filter(|t| t.is_merge)
        .map(|t| t.value)
        .collect();
    assert_eq!(merge_sources.len() % 2, 0, "merges come in pairs");

    while let Some(value) = merge_sources.pop() {
        let twin = merge_sources
            .iter()
            .position(|&v| v == value)
            .expect("merge pair has equal values");
        merge_sources.remove(twin);

        let first = tiles.iter().position(|&v| v == value).unwrap();
        tiles.remove(first);
        let second = tiles.iter().position(|&v| v == value).unwrap();
        tiles.remove(second);
        tiles.push(value * 2);
    }

    if let Some(spawn) = result.transitions.iter().find(|t| t.from.is_none()) {
        tiles.push(spawn.value);
    }

    tiles.sort_unstable();
    tiles
}

#[test]
fn conservation_across_random_play() {
    for seed in [1u32, 7, 42, 99, 123456] {
        let mut state = GameState::new(Ruleset::default(), seed);
        let mut step = 0usize;
        while !state.game_over() && step < 300 {
            let direction = Direction::all()[step % 4];
            let before = tile_multiset(&state);
            let result = state.attempt_move(direction);
            if result.moved {
                assert_eq!(
                    tile_multiset(&state),
                    expected_after(before.clone(), &result),
                    "seed {} step {} direction {:?}",
                    seed,
                    step,
                    direction
                );
            } else {
                assert_eq!(tile_multiset(&state), before);
            }
            step += 1;
        }
    }
}

#[test]
fn noop_move_leaves_state_untouched() {
    let rows = vec![
        vec![2, 4, 8, 0],
        vec![16, 2, 0, 0],
        vec![4, 0, 0, 0],
        vec![0, 0, 0, 0],
    ];
    let mut state = fixture(&rows);

    // Everything is already left-aligned with no equal neighbors.
    let result = state.attempt_move(Direction::Left);
    assert!(!result.moved);
    assert_eq!(result.score_delta, 0);
    assert!(result.transitions.is_empty());
    assert_eq!(state.to_rows(), rows);
    assert_eq!(state.score(), 0);
    assert!(!state.won());
    assert!(!state.game_over());
}

#[test]
fn no_cascading_merges_in_one_move() {
    let mut state = fixture(&[
        vec![2, 2, 2, 2],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    let result = state.attempt_move(Direction::Left);
    assert!(result.moved);
    assert_eq!(result.score_delta, 8);
    let row = &state.to_rows()[0];
    assert_eq!(row[..2], [4, 4]);
    assert_ne!(row[0], 8);
}

#[test]
fn left_and_right_are_mirror_images() {
    let mut left = fixture(&[
        vec![0, 2, 0, 2],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let mut right = fixture(&[
        vec![2, 0, 2, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    let lr = left.attempt_move(Direction::Left);
    let rr = right.attempt_move(Direction::Right);
    assert!(lr.moved && rr.moved);
    assert_eq!(lr.score_delta, rr.score_delta);
    assert_eq!(left.grid().get(0, 0), 4);
    assert_eq!(right.grid().get(0, 3), 4);

    // Every tile transition mirrors across the vertical axis.
    let mirrored: Vec<_> = lr
        .transitions
        .iter()
        .filter(|t| t.from.is_some())
        .map(|t| {
            (
                t.from.map(|(r, c)| (r, 3 - c)),
                (t.to.0, 3 - t.to.1),
                t.value,
                t.is_merge,
            )
        })
        .collect();
    let actual: Vec<_> = rr
        .transitions
        .iter()
        .filter(|t| t.from.is_some())
        .map(|t| (t.from, t.to, t.value, t.is_merge))
        .collect();
    assert_eq!(mirrored, actual);
}

#[test]
fn merge_scores_are_the_combined_value() {
    let mut small = fixture(&[
        vec![2, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    assert_eq!(small.attempt_move(Direction::Left).score_delta, 4);
    assert_eq!(small.score(), 4);

    let mut large = fixture(&[
        vec![1024, 1024, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    assert_eq!(large.attempt_move(Direction::Left).score_delta, 2048);
}

#[test]
fn dead_grid_sets_game_over() {
    let mut state = fixture(&[
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ]);
    assert!(!state.game_over());
    state.evaluate_terminal_state();
    assert!(state.game_over());
}

#[test]
fn target_tile_sets_won() {
    let mut state = fixture(&[
        vec![2048, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    state.evaluate_terminal_state();
    assert!(state.won());
    assert!(!state.game_over());
}

#[test]
fn end_to_end_simple_merge_move() {
    let mut state = fixture(&[
        vec![2, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    let result = state.attempt_move(Direction::Left);
    assert!(result.moved);
    assert_eq!(result.score_delta, 4);
    assert_eq!(state.grid().get(0, 0), 4);

    // Exactly one new tile somewhere in the previously empty cells.
    let spawns: Vec<_> = result
        .transitions
        .iter()
        .filter(|t| t.from.is_none())
        .collect();
    assert_eq!(spawns.len(), 1);
    assert_ne!(spawns[0].to, (0, 0));
    assert_eq!(tile_multiset(&state).len(), 2);
}

#[test]
fn end_to_end_stuck_grid_rejects_every_direction() {
    let rows = vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ];
    let mut state = fixture(&rows);

    for direction in Direction::all() {
        let result = state.attempt_move(direction);
        assert!(!result.moved, "{:?} should be rejected", direction);
        assert_eq!(state.to_rows(), rows);
    }

    state.evaluate_terminal_state();
    assert!(state.game_over());
}

#[test]
fn play_continues_after_win_until_board_dies() {
    let mut state = fixture(&[
        vec![1024, 1024, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    assert!(state.attempt_move(Direction::Left).moved);
    assert!(state.won());

    // The win flag stays up and moves keep working.
    assert!(state.attempt_move(Direction::Down).moved);
    assert!(state.won());
}
