//! Sound cues
//!
//! The simulation never waits on audio: the session turns game events into
//! fire-and-forget [`SoundCue`]s and hands them to an [`AudioSink`]. On the web
//! the sink is a procedural Web Audio synth; natively cues are only logged.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Player fired
    Fire,
    /// Bullet struck an enemy
    Hit,
    /// Enemy or player exploded
    Destroy,
}

impl SoundCue {
    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Fired { .. } => SoundCue::Fire,
            GameEvent::EnemyHit { .. } => SoundCue::Hit,
            GameEvent::EnemyDestroyed { .. } | GameEvent::PlayerDestroyed { .. } => {
                SoundCue::Destroy
            }
        }
    }
}

/// Receiver for sound cues. Implementations must not block and must swallow
/// their own failures.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that only logs cues at trace level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::trace!("sound cue: {:?}", cue);
    }
}

/// Effective cue volume from the player's preferences
pub fn effective_volume(settings: &Settings) -> f32 {
    if settings.muted {
        0.0
    } else {
        settings.master_volume.clamp(0.0, 1.0) * settings.sfx_volume.clamp(0.0, 1.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundCue, effective_volume};
    use crate::settings::Settings;

    /// Web Audio synth for the game's cues
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: effective_volume(settings),
            }
        }

        /// Resume audio context (required after a user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume = effective_volume(settings);
        }

        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short fixed-gain blip
        fn play_blip(&self, ctx: &AudioContext, freq: f32, dur: f64, osc_type: OscillatorType, gain_level: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value(gain_level * self.volume);
            osc.start().ok();
            osc.stop_with_when(t + dur).ok();
        }

        /// Laser - bright triangle chirp
        fn play_fire(&self, ctx: &AudioContext) {
            self.play_blip(ctx, 1200.0, 0.06, OscillatorType::Triangle, 0.06);
        }

        /// Hit - high tick
        fn play_hit(&self, ctx: &AudioContext) {
            self.play_blip(ctx, 1800.0, 0.04, OscillatorType::Sine, 0.04);
        }

        /// Explosion - low sawtooth with a fast decay
        fn play_destroy(&self, ctx: &AudioContext) {
            let Some((osc, gain)) = self.create_osc(ctx, 120.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(0.12 * self.volume, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.001, t + 0.5)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.5).ok();
        }
    }

    impl AudioSink for AudioManager {
        fn play(&mut self, cue: SoundCue) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers start contexts suspended until a gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                SoundCue::Fire => self.play_fire(ctx),
                SoundCue::Hit => self.play_hit(ctx),
                SoundCue::Destroy => self.play_destroy(ctx),
            }
        }
    }
}
