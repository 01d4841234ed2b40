//! End-to-end match scenarios driven through the public API

use canvas_pong::Tuning;
use canvas_pong::platform::{InputSlot, Scheduler};
use canvas_pong::sim::{GameState, Side, TickInput, tick};
use glam::Vec2;

/// Park the ball just short of the right edge, high above the opponent, so
/// the next step is a player point
fn send_past_opponent(state: &mut GameState) {
    let x = state.tuning.board_width - state.ball.radius - 2.0;
    state.opponent.y = state.tuning.board_height - state.tuning.paddle_height;
    state.ball.pos = Vec2::new(x, 30.0);
    state.ball.vel = Vec2::new(5.0, 0.0);
}

#[test]
fn right_edge_awards_player_and_reserves_at_center() {
    let mut state = GameState::with_seed(42);
    state.ball.pos = Vec2::new(state.board_center().x, 450.0);
    state.ball.vel = Vec2::new(5.0, 0.0);

    let input = TickInput::new(state.board_center().y);
    let mut report = None;
    for _ in 0..200 {
        // Keep the opponent paddle out of the ball's path
        state.opponent.y = 0.0;
        let r = tick(&mut state, &input);
        if r.scored.is_some() {
            report = Some(r);
            break;
        }
    }

    let report = report.expect("ball should leave the board");
    assert_eq!(report.scored, Some(Side::Player));
    assert_eq!(state.player.score, 1);
    assert_eq!(state.opponent.score, 0);
    assert_eq!(state.ball.pos, state.board_center());
    assert_eq!(state.ball.speed, state.tuning.base_speed);
    assert_eq!(state.ball.vel.x.abs(), state.tuning.base_speed);
    assert_eq!(state.ball.vel.y.abs(), state.tuning.base_speed);
}

#[test]
fn fifth_point_raises_level_once() {
    let mut state = GameState::with_seed(7);
    let input = TickInput::new(250.0);
    let mut level_ups = Vec::new();

    for _ in 0..9 {
        send_past_opponent(&mut state);
        let report = tick(&mut state, &input);
        assert_eq!(report.scored, Some(Side::Player));
        if let Some(level) = report.level_up {
            level_ups.push((state.player.score, level));
        }
    }

    assert_eq!(level_ups, vec![(5, 2)]);
    assert_eq!(state.level, 2);
    assert_eq!(state.ball.speed, 5.0 + 0.7);
    assert_eq!(state.ball.vel.x.abs(), 5.0 + 0.7);
}

#[test]
fn level_pins_at_max() {
    let tuning = Tuning {
        max_level: 4,
        ..Tuning::default()
    };
    let mut state = GameState::new(tuning, 11);
    let input = TickInput::new(250.0);
    let pinned_at = state.tuning.points_per_level * (state.tuning.max_level - 1);

    for _ in 0..(pinned_at + 12) {
        send_past_opponent(&mut state);
        tick(&mut state, &input);
        if state.player.score >= pinned_at {
            assert_eq!(state.level, 4);
        } else {
            assert!(state.level < 4);
        }
    }

    let top_speed = state.tuning.base_speed + 3.0 * state.tuning.speed_step;
    assert_eq!(state.ball.speed, top_speed);
}

#[test]
fn pause_freezes_world_and_resume_continues() {
    let mut state = GameState::with_seed(3);
    let mut scheduler = Scheduler::new();
    let input = InputSlot::centered(&state.tuning);

    scheduler.start();
    for _ in 0..10 {
        scheduler.run_frame(&mut state, &input, |_| {});
    }
    let frozen = (state.ball.pos, state.ball.vel, state.time_ticks);

    scheduler.toggle_pause();
    let outcome = scheduler.run_frame(&mut state, &input, |_| {});
    assert!(!outcome.wants_next_frame());
    assert_eq!((state.ball.pos, state.ball.vel, state.time_ticks), frozen);

    scheduler.toggle_pause();
    assert!(scheduler.run_frame(&mut state, &input, |_| {}).wants_next_frame());
    assert_eq!(state.time_ticks, 11);
}

#[test]
fn long_match_keeps_invariants() {
    let mut state = GameState::with_seed(2026);
    let mut scheduler = Scheduler::new();
    scheduler.set_demo(true);
    let input = InputSlot::centered(&state.tuning);
    let max_y = state.tuning.board_height - state.tuning.paddle_height;
    let mut last = (0, 0, 1);

    scheduler.start();
    for _ in 0..20_000 {
        scheduler.run_frame(&mut state, &input, |_| {});

        assert!(state.player.y >= 0.0 && state.player.y <= max_y);
        assert!(state.opponent.y >= 0.0 && state.opponent.y <= max_y);

        let now = (state.player.score, state.opponent.score, state.level);
        assert!(now.0 >= last.0 && now.1 >= last.1 && now.2 >= last.2);
        assert!(now.0 + now.1 <= last.0 + last.1 + 1);
        assert_eq!(
            state.level,
            canvas_pong::sim::level_for_score(state.player.score, &state.tuning)
        );
        last = now;
    }
}
