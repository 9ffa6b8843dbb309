//! Per-frame scene updates
//!
//! Pure functions over scene state + input + dt. The host steps these at a
//! fixed 60 Hz, so "per frame" rules (logo fall, prompt pulse) are exact.

use glam::Vec2;
use rand::Rng;

use super::collision::{clamp_to_screen, outside_screen};
use super::state::{Candy, Enemy, GameEvent, GameState, PlayerAnim, StartState};
use crate::consts::*;
use crate::input::FrameInput;

/// Advance the start screen by one frame.
///
/// Returns true exactly once, on the frame the start key fires the
/// transition; the `started` guard makes later presses no-ops.
pub fn start_update(state: &mut StartState, input: &FrameInput) -> bool {
    // Falling logo: fixed step per frame, clamped at the resting line and
    // idempotent once settled
    if state.logo_falling {
        state.logo_y += LOGO_FALL_STEP;
        if state.logo_y >= LOGO_REST_Y {
            state.logo_y = LOGO_REST_Y;
            state.logo_falling = false;
        }
    }

    // Prompt pulse: triangle wave, direction flips when a bound is reached
    // or crossed, scale clamped so it never leaves the bounds
    state.prompt_scale += PROMPT_SCALE_STEP * state.prompt_dir;
    if state.prompt_scale >= PROMPT_SCALE_MAX || state.prompt_scale <= PROMPT_SCALE_MIN {
        state.prompt_dir = -state.prompt_dir;
        state.prompt_scale = state
            .prompt_scale
            .clamp(PROMPT_SCALE_MIN, PROMPT_SCALE_MAX);
    }

    if input.start_pressed && !state.started {
        state.started = true;
        return true;
    }
    false
}

/// Advance the game scene by one frame
pub fn game_update(state: &mut GameState, input: &FrameInput, dt: f32) {
    state.time_ticks += 1;

    // Spawn timers fire before movement, candy before enemy (registration
    // order per the scene contract)
    let candy_fires = state.candy_timer.advance(dt);
    for _ in 0..candy_fires {
        spawn_candy(state);
    }
    let enemy_fires = state.enemy_timer.advance(dt);
    for _ in 0..enemy_fires {
        spawn_enemy(state);
    }

    // Held input maps straight to velocity, no acceleration or friction
    state.player.vel = Vec2::new(input.axis_x(), input.axis_y()) * PLAYER_SPEED;
    state.player.anim = PlayerAnim::from_velocity(state.player.vel);

    // Integrate; the player collides with the world bounds
    let player_half = Vec2::new(PLAYER_HALF_W, PLAYER_HALF_H);
    state.player.pos = clamp_to_screen(state.player.pos + state.player.vel * dt, player_half);

    for candy in &mut state.candies {
        candy.pos += candy.vel * dt;
    }

    // Pure pursuit: re-aim at the player's live position every frame
    let target = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.vel = (target - enemy.pos).normalize_or_zero() * ENEMY_CHASE_SPEED;
        enemy.pos += enemy.vel * dt;
    }

    // Cull anything that fully left the visible bounds
    state
        .candies
        .retain(|c| !outside_screen(c.pos, Vec2::splat(CANDY_HALF), CULL_MARGIN));
    state
        .enemies
        .retain(|e| !outside_screen(e.pos, Vec2::splat(ENEMY_HALF), CULL_MARGIN));

    // Candy pickup destroys the candy, so one can never double-count
    let player_box = state.player.aabb();
    let mut collected = 0u32;
    state.candies.retain(|candy| {
        if player_box.overlaps(&candy.aabb()) {
            collected += 1;
            false
        } else {
            true
        }
    });
    for _ in 0..collected {
        state.score += CANDY_SCORE;
        state
            .events
            .push(GameEvent::CandyCollected { score: state.score });
    }
    if collected > 0 {
        log::debug!("collected {} candy, score {}", collected, state.score);
    }

    // Enemy contact is the only failure path: restart the scene by
    // re-running its entry logic
    if state.enemies.iter().any(|e| player_box.overlaps(&e.aabb())) {
        let final_score = state.score;
        log::info!("game over at score {}, restarting", final_score);
        state.events.push(GameEvent::GameOver { final_score });
        // This frame's events survive the restart for the driver to drain
        let events = std::mem::take(&mut state.events);
        state.restarts += 1;
        state.reset();
        state.events = events;
    }
}

fn spawn_candy(state: &mut GameState) {
    // Inclusive at both screen edges
    let x = state.rng.random_range(0.0..=SCREEN_WIDTH);
    let id = state.next_entity_id();
    state.candies.push(Candy {
        id,
        pos: Vec2::new(x, 0.0),
        vel: Vec2::new(0.0, CANDY_FALL_SPEED),
    });
    log::debug!("spawned candy {} at x={:.1}", id, x);
}

fn spawn_enemy(state: &mut GameState) {
    let x = state.rng.random_range(0.0..=SCREEN_WIDTH);
    let id = state.next_entity_id();
    let pos = Vec2::new(x, 0.0);
    // First-frame heading; re-aimed at the player every frame after
    let vel = (state.player.pos - pos).normalize_or_zero() * ENEMY_CHASE_SPEED;
    state.enemies.push(Enemy { id, pos, vel });
    log::debug!("spawned enemy {} at x={:.1}", id, x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Player;

    fn held(left: bool, right: bool, up: bool, down: bool) -> FrameInput {
        FrameInput {
            left,
            right,
            up,
            down,
            start_pressed: false,
        }
    }

    #[test]
    fn test_no_input_zero_velocity() {
        let mut state = GameState::new(1);
        state.reset();
        game_update(&mut state, &FrameInput::default(), SIM_DT);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.player.anim, PlayerAnim::Idle);
    }

    #[test]
    fn test_held_keys_map_to_velocity() {
        let mut state = GameState::new(1);
        state.reset();

        game_update(&mut state, &held(true, false, false, false), SIM_DT);
        assert_eq!(state.player.vel.x, -PLAYER_SPEED);
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(state.player.anim, PlayerAnim::WalkLeft);

        game_update(&mut state, &held(false, true, false, false), SIM_DT);
        assert_eq!(state.player.vel.x, PLAYER_SPEED);
        assert_eq!(state.player.vel.y, 0.0);

        // Opposing keys cancel
        game_update(&mut state, &held(true, true, false, false), SIM_DT);
        assert_eq!(state.player.vel, Vec2::ZERO);

        game_update(&mut state, &held(false, false, true, false), SIM_DT);
        assert_eq!(state.player.vel.y, -PLAYER_SPEED);
        assert_eq!(state.player.anim, PlayerAnim::WalkUp);
    }

    #[test]
    fn test_player_clamped_to_screen() {
        let mut state = GameState::new(1);
        state.reset();
        let input = held(true, false, false, false);
        // Long enough to run into the left wall
        for _ in 0..600 {
            game_update(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.player.pos.x, PLAYER_HALF_W);
    }

    #[test]
    fn test_logo_falls_by_step_then_rests() {
        let mut state = StartState::new();
        let input = FrameInput::default();

        let mut prev = state.logo_y;
        while state.logo_falling {
            start_update(&mut state, &input);
            if state.logo_falling {
                assert_eq!(state.logo_y, prev + LOGO_FALL_STEP);
            }
            prev = state.logo_y;
        }
        assert_eq!(state.logo_y, LOGO_REST_Y);

        // Idempotent once settled
        start_update(&mut state, &input);
        assert_eq!(state.logo_y, LOGO_REST_Y);
    }

    #[test]
    fn test_prompt_scale_stays_in_bounds() {
        let mut state = StartState::new();
        let input = FrameInput::default();
        let mut flips = 0;
        let mut prev_dir = state.prompt_dir;
        for _ in 0..2000 {
            start_update(&mut state, &input);
            assert!(state.prompt_scale >= PROMPT_SCALE_MIN);
            assert!(state.prompt_scale <= PROMPT_SCALE_MAX);
            if state.prompt_dir != prev_dir {
                flips += 1;
                // Direction only flips at a bound
                assert!(
                    state.prompt_scale == PROMPT_SCALE_MIN
                        || state.prompt_scale == PROMPT_SCALE_MAX
                );
                prev_dir = state.prompt_dir;
            }
        }
        assert!(flips > 1);
    }

    #[test]
    fn test_start_transition_fires_once() {
        let mut state = StartState::new();
        let press = FrameInput {
            start_pressed: true,
            ..Default::default()
        };
        assert!(start_update(&mut state, &press));
        // Held or repeated presses are no-ops
        assert!(!start_update(&mut state, &press));
        assert!(!start_update(&mut state, &press));
    }

    #[test]
    fn test_spawn_timing() {
        let mut state = GameState::new(42);
        state.reset();
        let input = FrameInput::default();

        // One second of frames: exactly one candy, no enemy yet
        for _ in 0..60 {
            game_update(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.candies.len(), 1);
        assert_eq!(state.enemies.len(), 0);

        // Two seconds in: exactly one enemy has spawned
        for _ in 0..60 {
            game_update(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_spawned_candy_falls_at_fixed_speed() {
        let mut state = GameState::new(42);
        state.reset();
        for _ in 0..60 {
            game_update(&mut state, &FrameInput::default(), SIM_DT);
        }
        let candy = &state.candies[0];
        assert_eq!(candy.vel, Vec2::new(0.0, CANDY_FALL_SPEED));
        assert!(candy.pos.x >= 0.0 && candy.pos.x <= SCREEN_WIDTH);
    }

    #[test]
    fn test_candy_pickup_scores_once() {
        let mut state = GameState::new(1);
        state.reset();
        let id = state.next_entity_id();
        state.candies.push(Candy {
            id,
            pos: state.player.pos,
            vel: Vec2::new(0.0, CANDY_FALL_SPEED),
        });

        game_update(&mut state, &FrameInput::default(), SIM_DT);
        assert_eq!(state.score, CANDY_SCORE);
        assert!(state.candies.is_empty());
        let events = state.drain_events();
        assert_eq!(events, vec![GameEvent::CandyCollected { score: CANDY_SCORE }]);

        // The candy is gone; nothing to double-count
        game_update(&mut state, &FrameInput::default(), SIM_DT);
        assert_eq!(state.score, CANDY_SCORE);
    }

    #[test]
    fn test_enemy_contact_restarts_scene() {
        let mut state = GameState::new(1);
        state.reset();
        state.score = 30;
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos: state.player.pos,
            vel: Vec2::ZERO,
        });
        state.player.pos.x += 1.0;

        game_update(&mut state, &FrameInput::default(), SIM_DT);
        assert_eq!(state.score, 0);
        assert!(state.candies.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.player, Player::new());
        assert_eq!(state.restarts, 1);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::GameOver { final_score: 30 })
        );
    }

    #[test]
    fn test_offscreen_candy_is_culled() {
        let mut state = GameState::new(1);
        state.reset();
        let id = state.next_entity_id();
        state.candies.push(Candy {
            id,
            pos: Vec2::new(50.0, SCREEN_HEIGHT + CULL_MARGIN + CANDY_HALF + 1.0),
            vel: Vec2::new(0.0, CANDY_FALL_SPEED),
        });
        game_update(&mut state, &FrameInput::default(), SIM_DT);
        assert!(state.candies.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Same seed and input script produce identical runs
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        a.reset();
        b.reset();

        let script = [
            held(true, false, false, false),
            held(false, true, false, false),
            FrameInput::default(),
            held(false, false, false, true),
        ];
        for frame in 0..600 {
            let input = &script[frame % script.len()];
            game_update(&mut a, input, SIM_DT);
            game_update(&mut b, input, SIM_DT);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.candies, b.candies);
        assert_eq!(a.enemies, b.enemies);
        assert_eq!(a.player, b.player);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prompt_scale_never_escapes_bounds(frames in 0usize..5000) {
                let mut state = StartState::new();
                let input = FrameInput::default();
                for _ in 0..frames {
                    start_update(&mut state, &input);
                    prop_assert!(state.prompt_scale >= PROMPT_SCALE_MIN);
                    prop_assert!(state.prompt_scale <= PROMPT_SCALE_MAX);
                }
            }

            #[test]
            fn velocity_axes_are_independent(
                left in any::<bool>(),
                right in any::<bool>(),
                up in any::<bool>(),
                down in any::<bool>(),
            ) {
                let mut state = GameState::new(7);
                state.reset();
                game_update(&mut state, &held(left, right, up, down), SIM_DT);

                let expected_x = (right as i8 - left as i8) as f32 * PLAYER_SPEED;
                let expected_y = (down as i8 - up as i8) as f32 * PLAYER_SPEED;
                prop_assert_eq!(state.player.vel.x, expected_x);
                prop_assert_eq!(state.player.vel.y, expected_y);
            }
        }
    }
}
