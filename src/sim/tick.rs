//! Per-frame update
//!
//! Paddles move with the frame's wall-clock delta; the ball is advanced by a
//! fixed-timestep physics step so bounces do not depend on frame rate.

use super::body::{PhysicsBody, combined_restitution};
use super::collision::{ball_rect_collision, bounce_velocity};
use super::geometry::Rect;
use super::state::{Ball, GameEvent, GameState, Paddle, PaddleDirection, Side};
use crate::consts::*;

/// Advance the game to `current_time` (seconds, host clock)
///
/// The first call only records the timestamp. Events raised by this frame
/// replace those of the previous one.
pub fn update(state: &mut GameState, current_time: f64) {
    state.events.clear();

    let last = state.last_update_time;
    state.last_update_time = current_time;
    if last <= 0.0 {
        return;
    }

    let elapsed = (current_time - last) as f32;
    if elapsed <= 0.0 {
        return;
    }

    let amount = state.settings.paddle_speed * elapsed;
    let range = state.paddle_x_range();
    move_paddle(&mut state.bottom_paddle, state.bottom_direction, amount, range);
    move_paddle(&mut state.top_paddle, state.top_direction, amount, range);

    step_physics(state, elapsed);
}

/// Slide a paddle along x, stopping it at the walls
pub fn move_paddle(paddle: &mut Paddle, direction: PaddleDirection, amount: f32, range: (f32, f32)) {
    let (min_x, max_x) = range;
    match direction {
        PaddleDirection::Left => {
            paddle.pos.x -= amount;
            if paddle.pos.x < min_x {
                paddle.pos.x = min_x;
            }
        }
        PaddleDirection::Right => {
            paddle.pos.x += amount;
            if paddle.pos.x > max_x {
                paddle.pos.x = max_x;
            }
        }
        PaddleDirection::Still => {}
    }
}

/// Run as many fixed physics substeps as `dt` covers
pub fn step_physics(state: &mut GameState, dt: f32) {
    state.accumulator += dt.min(MAX_FRAME_DT);

    let mut substeps = 0;
    while state.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
        physics_substep(state, SIM_DT);
        state.accumulator -= SIM_DT;
        state.time_ticks += 1;
        substeps += 1;
    }

    // Drop time we could not simulate this frame
    if substeps == MAX_SUBSTEPS && state.accumulator >= SIM_DT {
        log::trace!("Dropping {:.4}s of physics time", state.accumulator);
        state.accumulator %= SIM_DT;
    }
}

fn physics_substep(state: &mut GameState, dt: f32) {
    let ball = &mut state.ball;
    if ball.body.dynamic {
        ball.vel *= ball.body.damping_factor(dt);
        ball.pos += ball.vel * dt;
    }

    // Goal lines first: a ball reaching one is gone, whatever else it touches
    let passed = state
        .detectors()
        .into_iter()
        .find(|d| {
            d.body.contact_test
                && ball_rect_collision(state.ball.pos, state.ball.radius, &d.rect).hit
        })
        .map(|d| d.side);
    if let Some(side) = passed {
        ball_passed(state, side);
        return;
    }

    // Paddles before walls: a paddle shoving the ball sideways must not leave
    // it past a side wall's inner face
    for paddle in [&state.bottom_paddle, &state.top_paddle] {
        if resolve_contact(&mut state.ball, &paddle.rect(), &paddle.body) {
            state.events.push(GameEvent::PaddleHit { side: paddle.side });
        }
    }

    for wall in &state.walls {
        if resolve_contact(&mut state.ball, &wall.rect, &wall.body) {
            state.events.push(GameEvent::WallHit);
        }
    }

    keep_between_side_walls(state);
}

/// Clamp the ball centre inside the side walls, turning it back if it was
/// heading out
fn keep_between_side_walls(state: &mut GameState) {
    let (min_x, max_x) = state.ball_x_range();
    let ball = &mut state.ball;
    if ball.pos.x < min_x {
        ball.pos.x = min_x;
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x > max_x {
        ball.pos.x = max_x;
        ball.vel.x = -ball.vel.x.abs();
    }
}

/// Push the ball out of `rect` and bounce it if it was moving inward.
/// Returns true on a bounce.
fn resolve_contact(ball: &mut Ball, rect: &Rect, body: &PhysicsBody) -> bool {
    let result = ball_rect_collision(ball.pos, ball.radius, rect);
    if !result.hit {
        return false;
    }

    ball.pos += result.normal * result.penetration;

    if ball.vel.dot(result.normal) >= 0.0 {
        return false;
    }
    let restitution = combined_restitution(&ball.body, body);
    ball.vel = bounce_velocity(ball.vel, result.normal, restitution);
    true
}

/// The ball crossed a goal line: replace it and serve again
fn ball_passed(state: &mut GameState, side: Side) {
    state.resets += 1;
    log::info!(
        "Ball {} passed the {} paddle (reset #{})",
        state.ball.id,
        side.as_str(),
        state.resets
    );
    state.events.push(GameEvent::BallPassed { side });
    state.create_ball();
    state.reset_ball();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    fn state() -> GameState {
        let mut state = GameState::new(Vec2::new(400.0, 800.0), Settings::default());
        state.events.clear();
        state
    }

    #[test]
    fn test_first_frame_only_records_time() {
        let mut state = state();
        state.bottom_direction = PaddleDirection::Left;
        let ball_pos = state.ball.pos;

        update(&mut state, 1.0);

        assert_eq!(state.last_update_time, 1.0);
        assert_eq!(state.bottom_paddle.pos.x, 200.0);
        assert_eq!(state.ball.pos, ball_pos);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_paddles_move_by_speed_times_delta() {
        let mut state = state();
        state.bottom_direction = PaddleDirection::Left;
        state.top_direction = PaddleDirection::Right;

        update(&mut state, 1.0);
        update(&mut state, 1.5);

        assert!((state.bottom_paddle.pos.x - 125.0).abs() < 1e-3);
        assert!((state.top_paddle.pos.x - 275.0).abs() < 1e-3);
        // Paddles never change height
        assert_eq!(state.bottom_paddle.pos.y, 60.0);
        assert_eq!(state.top_paddle.pos.y, 740.0);
    }

    #[test]
    fn test_still_paddle_does_not_move() {
        let mut state = state();
        update(&mut state, 1.0);
        update(&mut state, 2.0);
        assert_eq!(state.bottom_paddle.pos.x, 200.0);
        assert_eq!(state.top_paddle.pos.x, 200.0);
    }

    #[test]
    fn test_paddles_clamp_at_walls() {
        let mut state = state();
        state.bottom_direction = PaddleDirection::Left;
        state.top_direction = PaddleDirection::Right;

        update(&mut state, 1.0);
        update(&mut state, 10.0);

        assert_eq!(state.bottom_paddle.pos.x, 55.0);
        assert_eq!(state.top_paddle.pos.x, 345.0);
    }

    #[test]
    fn test_move_paddle_directly() {
        let mut state = state();
        let range = state.paddle_x_range();
        move_paddle(&mut state.top_paddle, PaddleDirection::Right, 10.0, range);
        assert_eq!(state.top_paddle.pos.x, 210.0);
        move_paddle(&mut state.top_paddle, PaddleDirection::Still, 10.0, range);
        assert_eq!(state.top_paddle.pos.x, 210.0);
    }

    #[test]
    fn test_ball_resets_at_bottom_goal_line() {
        let mut state = state();
        state.ball.pos = Vec2::new(200.0, 20.0);
        state.ball.vel = Vec2::new(0.0, -200.0);
        let old_id = state.ball.id;

        step_physics(&mut state, SIM_DT);

        assert_eq!(state.resets, 1);
        assert_ne!(state.ball.id, old_id);
        assert_eq!(state.ball.pos, state.center());
        assert_eq!(state.ball.vel, state.settings.serve_velocity);
        assert_eq!(
            state.events,
            vec![
                GameEvent::BallPassed { side: Side::Bottom },
                GameEvent::BallServed { ball_id: state.ball.id },
            ]
        );
    }

    #[test]
    fn test_ball_resets_at_top_goal_line() {
        let mut state = state();
        state.ball.pos = Vec2::new(220.0, 780.0);
        state.ball.vel = Vec2::new(0.0, 200.0);

        step_physics(&mut state, SIM_DT);

        assert_eq!(state.resets, 1);
        assert_eq!(state.events[0], GameEvent::BallPassed { side: Side::Top });
    }

    #[test]
    fn test_ball_bounces_off_end_wall_beside_goal() {
        let mut state = state();
        state.ball.pos = Vec2::new(50.0, 16.0);
        state.ball.vel = Vec2::new(0.0, -200.0);

        step_physics(&mut state, SIM_DT);

        assert_eq!(state.resets, 0);
        assert!(state.ball.vel.y > 0.0);
        assert!((state.ball.pos.y - 16.0).abs() < 1e-3);
        assert_eq!(state.events, vec![GameEvent::WallHit]);
    }

    #[test]
    fn test_ball_bounces_off_side_wall() {
        let mut state = state();
        state.ball.pos = Vec2::new(20.0, 400.0);
        state.ball.vel = Vec2::new(-200.0, 50.0);

        step_physics(&mut state, SIM_DT);

        assert!((state.ball.vel.x - 200.0).abs() < 1e-3);
        assert!((state.ball.vel.y - 50.0).abs() < 1e-3);
        assert!(state.ball.pos.x >= 5.0 + state.ball.radius - 1e-3);
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let mut state = state();
        state.ball.pos = Vec2::new(200.0, 80.0);
        state.ball.vel = Vec2::new(0.0, -200.0);

        step_physics(&mut state, SIM_DT);

        assert!((state.ball.vel.y - 200.0).abs() < 1e-3);
        assert_eq!(
            state.events,
            vec![GameEvent::PaddleHit { side: Side::Bottom }]
        );
    }

    #[test]
    fn test_ball_moving_away_is_not_bounced() {
        let mut state = state();
        // Overlapping the paddle's top face but already heading up
        state.ball.pos = Vec2::new(200.0, 76.0);
        state.ball.vel = Vec2::new(0.0, 200.0);

        step_physics(&mut state, SIM_DT);

        assert!((state.ball.vel.y - 200.0).abs() < 1e-3);
        assert!((state.ball.pos.y - 78.5).abs() < 1e-3);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_paddle_cannot_shove_ball_through_side_wall() {
        let mut state = state();
        let (min_x, max_x) = state.ball_x_range();
        // Ball in the gap between the bottom paddle and the right wall
        state.ball.pos = Vec2::new(360.0, 30.0);
        state.ball.vel = Vec2::new(200.0, 200.0);
        state.bottom_paddle.pos.x = 290.0;
        state.bottom_direction = PaddleDirection::Right;

        let mut t = 1.0;
        for _ in 0..(30 * 60) {
            update(&mut state, t);
            t += 1.0 / 60.0;
            assert!(
                state.ball.pos.x >= min_x - 1e-3 && state.ball.pos.x <= max_x + 1e-3,
                "ball left the rink at {:?}",
                state.ball.pos
            );
            assert!(state.ball.pos.y > 0.0 && state.ball.pos.y < state.size.y);
        }
    }

    #[test]
    fn test_ball_past_side_wall_is_clamped_and_turned_back() {
        let mut state = state();
        let (_, max_x) = state.ball_x_range();
        state.ball.pos = Vec2::new(403.5, 400.0);
        state.ball.vel = Vec2::new(200.0, 0.0);

        step_physics(&mut state, SIM_DT);

        assert!(state.ball.pos.x <= max_x + 1e-3);
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut state = state();
        step_physics(&mut state, 5.0);
        assert_eq!(state.time_ticks, MAX_SUBSTEPS as u64);
        assert!(state.accumulator < SIM_DT);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = state();
        let mut state2 = state();
        state1.bottom_direction = PaddleDirection::Right;
        state2.bottom_direction = PaddleDirection::Right;

        let mut t = 1.0;
        for _ in 0..600 {
            update(&mut state1, t);
            update(&mut state2, t);
            t += 1.0 / 60.0;
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.resets, state2.resets);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.bottom_paddle.pos, state2.bottom_paddle.pos);
    }
}
