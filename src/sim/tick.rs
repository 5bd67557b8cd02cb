//! Per-frame simulation step
//!
//! Order within a tick:
//! 1. mode toggle / manual reset
//! 2. smashed-state physics (drift, spin, candy) and the reset countdown
//! 3. grab/release, then actor motion and swing speed
//! 4. hit test against the pinata

use glam::Vec2;

use super::collision::circle_rotated_rect_collision;
use super::motion::swing_speed;
use super::state::{GameEvent, GameState, Transition};
use crate::normalize_degrees;
use crate::tuning::Tunables;

/// Input commands for a single tick
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Pointer position in world space
    pub pointer: Vec2,
    /// Grab button went down this frame
    pub grab_pressed: bool,
    /// Grab button is held
    pub grab_down: bool,
    /// Switch between hand and bat
    pub toggle_mode: bool,
    /// Force the pinata back to idle (debug)
    pub debug_reset: bool,
    /// Camera zoom (world to screen), scales swing speed
    pub zoom: f32,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            grab_pressed: false,
            grab_down: false,
            toggle_mode: false,
            debug_reset: false,
            zoom: 1.0,
        }
    }
}

/// What a tick did
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// Last smash state-machine transition taken this tick
    pub transition: Transition,
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, tunables: &Tunables, dt: f32) -> TickOutcome {
    let mut out = TickOutcome::default();
    let dt = dt.max(0.0);
    state.time += dt;

    if input.toggle_mode {
        toggle_mode(state, &mut out);
    }

    if input.debug_reset && state.pinata.smashed {
        log::info!("Manual reset");
        state.reset_smash();
        out.transition = Transition::Reset;
        out.push(GameEvent::Reset { manual: true });
    }

    if state.pinata.smashed {
        advance_smash(state, tunables, dt, &mut out);
    }

    update_grab(state, input, tunables, &mut out);
    update_motion(state, input, tunables, dt, &mut out);

    if try_smash(state, tunables, &mut out) {
        out.transition = Transition::Smashed;
    }

    out
}

fn toggle_mode(state: &mut GameState, out: &mut TickOutcome) {
    let previous = state.mode;
    if state.active().grabbed {
        out.push(GameEvent::Released(previous));
    }
    // The outgoing actor is hidden, park it at rest
    state.active_mut().reset();
    state.mode = previous.toggled();
    state.max_speed = 0.0;
    state.speed = 0.0;
    state.whooshing = false;

    log::info!("Mode: {} -> {}", previous.as_str(), state.mode.as_str());
    out.push(GameEvent::ModeChanged(state.mode));
}

/// Drift, spin, candy, countdown
fn advance_smash(state: &mut GameState, tunables: &Tunables, dt: f32, out: &mut TickOutcome) {
    let pinata = &mut state.pinata;
    pinata.rect.position.x += pinata.drift_rate * dt;
    pinata.rect.angle = normalize_degrees(pinata.rect.angle + pinata.spin_rate * dt);

    state.candy.update(tunables.candy_gravity, dt);

    state.timer -= dt;
    if state.timer <= 0.0 {
        log::info!("Pinata reset (score was {:.0})", state.score);
        state.reset_smash();
        out.transition = Transition::Reset;
        out.push(GameEvent::Reset { manual: false });
    }
}

fn update_grab(
    state: &mut GameState,
    input: &TickInput,
    tunables: &Tunables,
    out: &mut TickOutcome,
) {
    let mode = state.mode;
    let held = input.grab_down || input.grab_pressed;
    let actor = state.active_mut();

    let starts = if actor.grabbed || !input.grab_pressed {
        false
    } else {
        let reach = actor.hit_radius * tunables.grab_radius_scale;
        actor.pos.distance(input.pointer) <= reach
            || actor.hit_center().distance(input.pointer) <= reach
    };
    let ends = actor.grabbed && !held;

    if starts {
        actor.grabbed = true;
        log::debug!("Grabbed {}", mode.as_str());
        out.push(GameEvent::Grabbed(mode));
    } else if ends {
        actor.grabbed = false;
        log::debug!("Released {}", mode.as_str());
        out.push(GameEvent::Released(mode));
    } else {
        return;
    }

    // Either way a new swing begins
    state.max_speed = 0.0;
    state.whooshing = false;
}

fn update_motion(
    state: &mut GameState,
    input: &TickInput,
    tunables: &Tunables,
    dt: f32,
    out: &mut TickOutcome,
) {
    let smashed = state.pinata.smashed;
    let actor = state.active_mut();

    if actor.grabbed {
        actor.follow(input.pointer, tunables, dt);
    } else {
        actor.relax(tunables, dt);
    }

    let grabbed = actor.grabbed;
    let speed = swing_speed(actor.kind, actor.vel, input.zoom, tunables);
    state.speed = speed;

    if !grabbed {
        return;
    }
    if !smashed {
        state.max_speed = state.max_speed.max(speed);
    }

    if !state.whooshing && speed > tunables.whoosh_threshold {
        state.whooshing = true;
        out.push(GameEvent::Whoosh { speed });
    } else if state.whooshing && speed < tunables.whoosh_threshold * 0.5 {
        state.whooshing = false;
    }
}

/// Evaluate the hit test with the current swing; Idle -> Smashed on success
///
/// No-op while the pinata is already smashed.
pub fn try_smash(state: &mut GameState, tunables: &Tunables, out: &mut TickOutcome) -> bool {
    if state.pinata.smashed {
        return false;
    }

    let speed = state.speed;
    let (actor, pinata, candy, rng) = state.parts_mut();
    let swinging_in = actor.grabbed && speed > tunables.hit_threshold && actor.vel.x < 0.0;
    if !swinging_in {
        return false;
    }
    if !circle_rotated_rect_collision(actor.hit_center(), actor.hit_radius, &pinata.rect) {
        return false;
    }

    let score = speed;
    let big = tunables.is_big_hit(score);
    let direction = actor.vel.x.signum();
    let spin = tunables.spin_rate * if big { tunables.big_hit_spin_multiplier } else { 1.0 };

    pinata.smashed = true;
    pinata.spin_rate = spin * direction;
    pinata.drift_rate = score * tunables.drift_per_score * direction;

    if big {
        candy.spawn(pinata, tunables, rng);
    }

    state.score = score;
    state.timer = tunables.smash_duration(score);

    log::info!("Smash! score {:.0}{}", score, if big { " (big hit)" } else { "" });
    out.push(GameEvent::Smash { score, big });
    if big {
        out.push(GameEvent::CandyBurst);
    }
    true
}
