//! VIP Shooter entry point
//!
//! The browser build is driven through `platform::web::WebSession`. Natively
//! this runs a headless autopilot session:
//!
//! ```text
//! vip-shooter [seed] [ticks]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use vip_shooter::audio::LogAudio;
    use vip_shooter::persistence::JsonFileStore;
    use vip_shooter::sim::{SessionPhase, SimulationState, TickInput};
    use vip_shooter::{Session, SessionConfig};

    /// 60 Hz frame spacing in ms
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const DEFAULT_TICKS: u64 = 3600;
    /// Horizontal slack before the autopilot bothers steering
    const DEADZONE: f32 = 8.0;

    /// Chase the lowest enemy's column and keep firing
    pub fn autopilot(state: &SimulationState) -> TickInput {
        let mut input = TickInput {
            fire: true,
            ..Default::default()
        };
        let player_y = state.player.pos.y;
        let target = state
            .enemies
            .iter()
            .filter(|e| e.center().y < player_y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
        if let Some(enemy) = target {
            let dx = enemy.center().x - state.player.pos.x;
            input.move_left = dx < -DEADZONE;
            input.move_right = dx > DEADZONE;
        }
        input
    }

    fn parse_args() -> Result<(u64, u64), String> {
        let mut args = std::env::args().skip(1);
        let seed = match args.next() {
            Some(s) => s.parse().map_err(|e| format!("invalid seed {s:?}: {e}"))?,
            None => SessionConfig::default().seed,
        };
        let ticks = match args.next() {
            Some(s) => s.parse().map_err(|e| format!("invalid tick count {s:?}: {e}"))?,
            None => DEFAULT_TICKS,
        };
        Ok((seed, ticks))
    }

    pub fn run() -> Result<(), String> {
        let (seed, ticks) = parse_args()?;

        let mut session = Session::new(
            SessionConfig { seed },
            Box::new(JsonFileStore::new(JsonFileStore::DEFAULT_FILE)),
            Box::new(LogAudio),
        );
        session.start();

        let mut now = 0.0;
        let mut frames = 0;
        while frames < ticks && session.phase() == SessionPhase::Running {
            let input = autopilot(session.state());
            session.frame(now, &input);
            now += FRAME_MS;
            frames += 1;
        }

        if session.phase() == SessionPhase::Running {
            session.stop();
        }
        log::info!(
            "Finished after {} frames: score {}, best {}, phase {:?}",
            frames,
            session.score(),
            session.best(),
            session.phase()
        );
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use vip_shooter::sim::Enemy;

        #[test]
        fn test_autopilot_tracks_lowest_enemy() {
            let mut state = SimulationState::new(0);
            state.player.pos = glam::Vec2::new(450.0, 1100.0);
            state.enemies.push(Enemy {
                pos: glam::Vec2::new(100.0, 200.0),
                size: 40.0,
                speed: 100.0,
                hp: 1,
            });
            state.enemies.push(Enemy {
                pos: glam::Vec2::new(700.0, 600.0),
                size: 40.0,
                speed: 100.0,
                hp: 1,
            });
            let input = autopilot(&state);
            assert!(input.fire);
            assert!(input.move_right && !input.move_left);
        }

        #[test]
        fn test_autopilot_idle_without_targets() {
            let input = autopilot(&SimulationState::new(0));
            assert_eq!(input.to_bits(), TickInput::FIRE);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    vip_shooter::platform::init_logging();
    log::info!("VIP Shooter (headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(2);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
