//! Browser host bindings
//!
//! The page drives [`WebSession::frame`] from `requestAnimationFrame`, passes
//! the held keys as intent bits, and draws the bytes from
//! [`WebSession::vertex_bytes`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::audio::{AudioManager, AudioSink, SoundCue};
use crate::persistence::LocalStorageStore;
use crate::renderer::{as_bytes, build_frame};
use crate::session::{Session, SessionConfig};
use crate::settings::Settings;
use crate::sim::{SessionPhase, TickInput};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    super::init_logging();
    log::info!("VIP Shooter module loaded");
}

/// Audio handle shared between the session and the host (for settings changes)
#[derive(Clone)]
struct SharedAudio(Rc<RefCell<AudioManager>>);

impl AudioSink for SharedAudio {
    fn play(&mut self, cue: SoundCue) {
        self.0.borrow_mut().play(cue);
    }
}

#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    audio: SharedAudio,
    settings: Settings,
    focused: bool,
}

#[wasm_bindgen]
impl WebSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        super::init_logging();
        let settings = Settings::load();
        let audio = SharedAudio(Rc::new(RefCell::new(AudioManager::new(&settings))));
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(
            SessionConfig { seed },
            Box::new(LocalStorageStore::default()),
            Box::new(audio.clone()),
        );
        Self {
            session,
            audio,
            settings,
            focused: true,
        }
    }

    /// Start or restart. Call from a user gesture so audio can resume.
    pub fn start(&mut self) {
        self.audio.0.borrow().resume();
        self.session.start();
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    /// Step one animation frame and return the current score
    pub fn frame(&mut self, now_ms: f64, intent_bits: u8) -> u32 {
        self.session.frame(now_ms, &TickInput::from_bits(intent_bits));
        self.session.score()
    }

    pub fn best(&self) -> u32 {
        self.session.best()
    }

    /// `"idle"`, `"running"` or `"gameover"`
    pub fn phase(&self) -> String {
        match self.session.phase() {
            SessionPhase::Idle => "idle",
            SessionPhase::Running => "running",
            SessionPhase::GameOver => "gameover",
        }
        .to_string()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Interleaved `[x, y, r, g, b, a]` f32 triangle list in world units
    pub fn vertex_bytes(&self) -> Vec<u8> {
        let vertices = build_frame(&self.session.snapshot(), &self.settings);
        as_bytes(&vertices).to_vec()
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    /// Replace settings from JSON; invalid input is ignored
    pub fn set_settings_json(&mut self, json: &str) -> bool {
        let Some(settings) = Settings::from_json(json) else {
            log::warn!("Ignoring invalid settings JSON");
            return false;
        };
        self.settings = settings;
        self.settings.save();
        self.apply_audio();
        true
    }

    /// Window focus change; mutes while blurred when enabled in settings
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.apply_audio();
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WebSession {
    fn apply_audio(&mut self) {
        let mut effective = self.settings.clone();
        if !self.focused && self.settings.mute_on_blur {
            effective.muted = true;
        }
        self.audio.0.borrow_mut().apply_settings(&effective);
    }
}
