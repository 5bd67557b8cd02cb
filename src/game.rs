//! Frame controller
//!
//! [`Game`] owns every piece of mutable state. The host samples input, calls
//! [`Game::frame`] once per display frame and hands the returned draw list
//! and audio cues to its backends.

use glam::Vec2;

use crate::audio::{AudioCue, AudioMixer};
use crate::camera::Camera;
use crate::consts::MAX_FRAME_DT;
use crate::renderer::{DrawCommand, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, Transition, tick};
use crate::tuning::Tunables;

/// Raw input sampled by the host for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position in window pixels
    pub pointer_screen: Vec2,
    pub grab_pressed: bool,
    pub grab_down: bool,
    pub toggle_mode: bool,
    pub debug_reset: bool,
    pub toggle_fullscreen: bool,
    pub exit: bool,
}

/// Everything one frame produced
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub transition: Transition,
    pub events: Vec<GameEvent>,
    pub draw: Vec<DrawCommand>,
    pub audio: Vec<AudioCue>,
    /// Host should flip fullscreen
    pub toggle_fullscreen: bool,
    /// Host should close; nothing else was done this frame
    pub exit: bool,
}

/// Game controller
pub struct Game {
    pub state: GameState,
    tunables: Tunables,
    settings: Settings,
    mixer: AudioMixer,
    pub camera: Camera,
    should_exit: bool,
}

impl Game {
    pub fn new(seed: u64, tunables: Tunables, settings: Settings) -> Self {
        log::info!("New game (seed {})", seed);
        Self {
            state: GameState::new(seed),
            tunables: tunables.sanitized(),
            mixer: AudioMixer::from_settings(&settings),
            settings,
            camera: Camera::default(),
            should_exit: false,
        }
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Replace tunables (sanitized first)
    pub fn set_tunables(&mut self, tunables: Tunables) {
        self.tunables = tunables.sanitized();
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace settings (rebuilds the mixer)
    pub fn set_settings(&mut self, settings: Settings) {
        self.mixer = AudioMixer::from_settings(&settings);
        self.settings = settings;
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Run one update-then-render pass
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> Frame {
        if input.exit {
            log::info!("Exit requested");
            self.should_exit = true;
        }
        if self.should_exit {
            return Frame {
                exit: true,
                ..Frame::default()
            };
        }

        // A stalled frame shouldn't teleport the actor or burn the timer
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        let tick_input = TickInput {
            pointer: self.camera.screen_to_world(input.pointer_screen),
            grab_pressed: input.grab_pressed,
            grab_down: input.grab_down,
            toggle_mode: input.toggle_mode,
            debug_reset: input.debug_reset,
            zoom: self.camera.zoom,
        };
        let outcome = tick(&mut self.state, &tick_input, &self.tunables, dt);

        let audio = self.mixer.cues(&outcome.events, &self.tunables);
        let draw = build_frame(&self.state, &self.settings);

        if input.toggle_fullscreen {
            self.settings.fullscreen = !self.settings.fullscreen;
        }

        Frame {
            transition: outcome.transition,
            events: outcome.events,
            draw,
            audio,
            toggle_fullscreen: input.toggle_fullscreen,
            exit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::sim::{TickOutcome, try_smash};

    const DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::new(9, Tunables::default(), Settings::default())
    }

    #[test]
    fn test_exit_short_circuits() {
        let mut game = game();
        let frame = game.frame(
            &FrameInput {
                exit: true,
                ..FrameInput::default()
            },
            DT,
        );
        assert!(frame.exit);
        assert!(frame.draw.is_empty());
        assert!(game.should_exit());
        // Stays exited
        assert!(game.frame(&FrameInput::default(), DT).exit);
    }

    #[test]
    fn test_idle_frame_draws() {
        let mut game = game();
        let frame = game.frame(&FrameInput::default(), DT);
        assert!(!frame.exit);
        assert_eq!(frame.transition, Transition::None);
        assert!(!frame.draw.is_empty());
        assert!(frame.audio.is_empty());
    }

    #[test]
    fn test_pointer_goes_through_camera() {
        let mut game = game();
        game.camera = Camera::virtual_view(0.5);
        let hand = game.state.hand.pos;
        let frame = game.frame(
            &FrameInput {
                pointer_screen: game.camera.world_to_screen(hand),
                grab_pressed: true,
                grab_down: true,
                ..FrameInput::default()
            },
            DT,
        );
        assert!(frame.events.contains(&GameEvent::Grabbed(crate::sim::GameMode::Hand)));
        assert!(game.state.hand.grabbed);
    }

    #[test]
    fn test_swing_smashes_with_cues() {
        let mut game = game();
        let hand = game.state.hand.pos;
        game.frame(
            &FrameInput {
                pointer_screen: hand,
                grab_pressed: true,
                grab_down: true,
                ..FrameInput::default()
            },
            DT,
        );

        let target = game.state.pinata.pos();
        let mut smash = None;
        for _ in 0..30 {
            let frame = game.frame(
                &FrameInput {
                    pointer_screen: target,
                    grab_down: true,
                    ..FrameInput::default()
                },
                DT,
            );
            if frame.transition == Transition::Smashed {
                smash = Some(frame);
                break;
            }
        }
        let frame = smash.expect("swing should land");
        let effects: Vec<_> = frame.audio.iter().map(|c| c.effect).collect();
        assert!(effects.contains(&SoundEffect::Slap));
        assert!(effects.contains(&SoundEffect::Win));
    }

    #[test]
    fn test_unsanitized_tunables_cannot_break_candy() {
        let tunables = Tunables {
            candy_max_spin: -10.0,
            candy_speed_x: (f32::NEG_INFINITY, f32::INFINITY),
            candy_speed_up: (f32::NAN, 800.0),
            ..Tunables::default()
        };
        let mut game = Game::new(1, tunables.clone(), Settings::default());
        assert_eq!(game.tunables().candy_max_spin, 0.0);
        assert!(game.tunables().candy_speed_x.0.is_finite());

        // Big hit: hand on the pinata's right edge, swinging left
        let pinata = game.state.pinata.pos();
        let half_width = game.state.pinata.rect.size.x / 2.0;
        game.state.hand.grabbed = true;
        game.state.hand.pos = pinata + Vec2::new(half_width + 50.0, 0.0);
        game.state.hand.vel = Vec2::new(-1000.0, 0.0);
        game.state.speed = 250.0;
        let sanitized = game.tunables().clone();
        let mut out = TickOutcome::default();
        assert!(try_smash(&mut game.state, &sanitized, &mut out));
        assert!(game.state.candy.active);
        assert!(game.state.candy.pieces.iter().all(|c| c.pos.is_finite() && c.vel.is_finite()));

        game.set_tunables(tunables);
        assert_eq!(game.tunables().candy_max_spin, 0.0);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut game = game();
        game.frame(&FrameInput::default(), 5.0);
        assert!((game.state.time - MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn test_fullscreen_passthrough() {
        let mut game = game();
        let frame = game.frame(
            &FrameInput {
                toggle_fullscreen: true,
                ..FrameInput::default()
            },
            DT,
        );
        assert!(frame.toggle_fullscreen);
        assert!(game.settings().fullscreen);
    }

    #[test]
    fn test_muted_settings_silence_frames() {
        let mut game = game();
        game.set_settings(Settings {
            muted: true,
            ..Settings::default()
        });
        game.state.hand.grabbed = true;
        let frame = game.frame(
            &FrameInput {
                pointer_screen: game.state.pinata.pos(),
                grab_down: true,
                ..FrameInput::default()
            },
            DT,
        );
        assert!(frame.events.iter().any(|e| matches!(e, GameEvent::Whoosh { .. })));
        assert!(frame.audio.is_empty());
    }
}
