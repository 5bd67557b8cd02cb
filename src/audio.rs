//! Sound cues for the host audio backend
//!
//! The game never touches an audio device. Each frame the mixer turns the
//! tick's [`GameEvent`]s into [`AudioCue`]s; playing them is the host's job.

use crate::settings::Settings;
use crate::sim::GameEvent;
use crate::tuning::Tunables;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Pinata hit
    Slap,
    /// Fast swing
    Whoosh,
    /// Big hit jingle
    Win,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Slap, SoundEffect::Whoosh, SoundEffect::Win];

    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::Slap => "assets/slap.wav",
            SoundEffect::Whoosh => "assets/whoosh.wav",
            SoundEffect::Win => "assets/win.wav",
        }
    }
}

/// One sound to start this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioCue {
    pub effect: SoundEffect,
    /// 0.0 - 1.0, settings already applied
    pub volume: f32,
    /// Playback rate, 1.0 = as recorded
    pub pitch: f32,
}

/// Turns game events into audio cues
#[derive(Debug, Clone)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioMixer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cues for one frame's events, in event order
    pub fn cues(&self, events: &[GameEvent], tunables: &Tunables) -> Vec<AudioCue> {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return Vec::new();
        }

        let mut cues = Vec::new();
        for event in events {
            match *event {
                GameEvent::Whoosh { speed } => {
                    let full = tunables.big_hit_threshold * 2.0;
                    let t = intensity(speed, tunables.whoosh_threshold, full);
                    cues.push(AudioCue {
                        effect: SoundEffect::Whoosh,
                        volume: vol * (0.3 + 0.7 * t),
                        pitch: 0.8 + 0.6 * t,
                    });
                }
                GameEvent::Smash { score, big } => {
                    let t = intensity(score, tunables.hit_threshold, tunables.big_hit_threshold);
                    cues.push(AudioCue {
                        effect: SoundEffect::Slap,
                        volume: vol * (0.5 + 0.5 * t),
                        pitch: 1.0,
                    });
                    if big {
                        cues.push(AudioCue {
                            effect: SoundEffect::Win,
                            volume: vol,
                            pitch: 1.0,
                        });
                    }
                }
                _ => {}
            }
        }
        cues
    }
}

/// Where `value` sits between `low` and `high`, clamped to [0, 1]
fn intensity(value: f32, low: f32, high: f32) -> f32 {
    if high <= low {
        return if value > low { 1.0 } else { 0.0 };
    }
    ((value - low) / (high - low)).clamp(0.0, 1.0)
}
