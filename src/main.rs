//! Smash the Pinata entry point
//!
//! There is no window here: the native binary plays a short scripted session
//! through the frame controller and logs what happened. Set `RUST_LOG=debug`
//! for grab/release detail.
//!
//! Usage: `smash-the-pinata [tunables.json]`, with `PINATA_SETTINGS` naming an
//! optional settings file.

#[cfg(not(target_arch = "wasm32"))]
mod session {
    use glam::Vec2;

    use smash_the_pinata::audio::SoundEffect;
    use smash_the_pinata::sim::Transition;
    use smash_the_pinata::{Frame, FrameInput, Game, Settings, Tunables};

    const DT: f32 = 1.0 / 60.0;

    /// Scripted player input
    enum Step {
        /// Press grab with the pointer on the active actor
        Grab,
        /// Drag toward a world point for some frames
        Drag(Vec2, u32),
        /// Let go and wait
        Wait(u32),
        ToggleMode,
        DebugReset,
    }

    #[derive(Default)]
    struct Summary {
        frames: u32,
        smashes: u32,
        resets: u32,
        cues: usize,
        draw_commands: usize,
    }

    pub fn run() {
        env_logger::init();
        log::info!("Smash the Pinata (native, headless) starting...");

        let tunables = match std::env::args().nth(1) {
            Some(path) => Tunables::load(path),
            None => Tunables::default(),
        };
        let settings = Settings::from_env();

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let mut game = Game::new(seed, tunables, settings);
        for effect in SoundEffect::ALL {
            log::debug!("Sound {:?} -> {}", effect, effect.asset_path());
        }

        let pinata = game.state.pinata.pos();
        let script = [
            Step::Grab,
            Step::Drag(pinata, 20),
            Step::Wait(240),
            Step::ToggleMode,
            Step::Grab,
            Step::Drag(pinata + Vec2::new(150.0, 100.0), 30),
            Step::Wait(10),
            Step::DebugReset,
            Step::Wait(30),
        ];

        let mut summary = Summary::default();
        for step in &script {
            match *step {
                Step::Grab => {
                    let at = game.camera.world_to_screen(game.state.active().pos);
                    let input = FrameInput {
                        pointer_screen: at,
                        grab_pressed: true,
                        grab_down: true,
                        ..FrameInput::default()
                    };
                    record(&mut summary, game.frame(&input, DT));
                }
                Step::Drag(target, frames) => {
                    let input = FrameInput {
                        pointer_screen: game.camera.world_to_screen(target),
                        grab_down: true,
                        ..FrameInput::default()
                    };
                    for _ in 0..frames {
                        record(&mut summary, game.frame(&input, DT));
                    }
                }
                Step::Wait(frames) => {
                    for _ in 0..frames {
                        record(&mut summary, game.frame(&FrameInput::default(), DT));
                    }
                }
                Step::ToggleMode => {
                    let input = FrameInput {
                        toggle_mode: true,
                        ..FrameInput::default()
                    };
                    record(&mut summary, game.frame(&input, DT));
                }
                Step::DebugReset => {
                    let input = FrameInput {
                        debug_reset: true,
                        ..FrameInput::default()
                    };
                    record(&mut summary, game.frame(&input, DT));
                }
            }
        }

        let exit = FrameInput {
            exit: true,
            ..FrameInput::default()
        };
        record(&mut summary, game.frame(&exit, DT));

        println!(
            "seed {}: {} frames, {} smashes, {} resets, {} audio cues, {} draw commands",
            game.state.seed,
            summary.frames,
            summary.smashes,
            summary.resets,
            summary.cues,
            summary.draw_commands
        );
    }

    fn record(summary: &mut Summary, frame: Frame) {
        summary.frames += 1;
        summary.cues += frame.audio.len();
        summary.draw_commands += frame.draw.len();

        match frame.transition {
            Transition::Smashed => summary.smashes += 1,
            Transition::Reset => summary.resets += 1,
            Transition::None => {}
        }
        for event in &frame.events {
            log::info!("frame {}: {:?}", summary.frames, event);
        }
        for cue in &frame.audio {
            log::info!(
                "frame {}: play {} (volume {:.2}, pitch {:.2})",
                summary.frames,
                cue.effect.asset_path(),
                cue.volume,
                cue.pitch
            );
        }
        if frame.exit {
            log::info!("Exiting after {} frames", summary.frames);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    session::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web host yet; the library is the deliverable on this target
}
