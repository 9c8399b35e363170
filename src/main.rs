//! Skyflap headless host
//!
//! Plays seeded sessions with a simple autopilot and logs what a renderer
//! and HUD would be told. Useful for checking a tuning file without a
//! graphical front end.
//!
//! Usage: `skyflap [seed] [tuning.json]` (set `RUST_LOG=info` or `debug`)

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use skyflap::Tuning;
    use skyflap::consts::SIM_DT;
    use skyflap::platform::{FixedStep, HudSink, RenderSink, present};
    use skyflap::sim::{Bird, GamePhase, GameState, Pipe};

    /// Frames to simulate per round before giving up (five minutes at 60 Hz)
    const MAX_FRAMES: u32 = 5 * 60 * 60;
    const ROUNDS: u32 = 3;

    #[derive(Default)]
    struct LogRender {
        visible_pipes: usize,
        frames: u64,
    }

    impl RenderSink for LogRender {
        fn pipe_added(&mut self, pipe: &Pipe) {
            self.visible_pipes += 1;
            log::debug!(
                "render: add pipe {} (gap {:.1}..{:.1})",
                pipe.id,
                pipe.gap_bottom(),
                pipe.gap_top()
            );
        }

        fn pipe_removed(&mut self, id: u32) {
            self.visible_pipes = self.visible_pipes.saturating_sub(1);
            log::debug!("render: remove pipe {}", id);
        }

        fn draw(&mut self, bird: &Bird, pipes: &[Pipe]) {
            self.frames += 1;
            if self.frames % 60 == 0 {
                log::trace!(
                    "frame {}: bird y={:.1} v={:.2} rot={:.2}, {} pipes",
                    self.frames,
                    bird.pos.y,
                    bird.velocity,
                    bird.rotation,
                    pipes.len()
                );
            }
        }
    }

    #[derive(Default)]
    struct LogHud {
        score: u32,
        best: u32,
    }

    impl HudSink for LogHud {
        fn score_changed(&mut self, score: u32) {
            self.score = score;
            self.best = self.best.max(score);
            log::info!("Score: {}", score);
        }

        fn game_over_shown(&mut self, shown: bool) {
            if shown {
                log::info!("GAME OVER (score {})", self.score);
            }
        }

        fn start_prompt_shown(&mut self, shown: bool) {
            if shown {
                log::info!("Press start");
            }
        }
    }

    /// Hold flap while the bird sits below the next gap, release above it
    fn autopilot(state: &GameState, driver: &mut FixedStep) {
        let bird = &state.bird;
        let reach = state.tuning.pipe_width / 2.0 + state.tuning.bird_half_width;
        let target = state
            .pipes
            .iter()
            .find(|p| p.x + reach >= bird.pos.x)
            .map(|p| p.gap_center_y)
            .unwrap_or(0.0);

        if bird.pos.y < target - 15.0 && !state.input.flap_held {
            driver.press_flap();
        } else if bird.pos.y > target + 15.0 && state.input.flap_held {
            driver.release_flap();
        }
    }

    pub fn run() {
        env_logger::init();

        let mut args = std::env::args().skip(1);
        let seed = match args.next().map(|s| s.parse::<u64>()) {
            Some(Ok(seed)) => seed,
            Some(Err(e)) => {
                log::warn!("Invalid seed ({}), using 1", e);
                1
            }
            None => 1,
        };
        let tuning = args.next().map(Tuning::load).unwrap_or_default();

        log::info!("Skyflap (headless) starting with seed {}", seed);

        let mut state = GameState::with_tuning(seed, tuning);
        let mut driver = FixedStep::new();
        let mut render = LogRender::default();
        let mut hud = LogHud::default();
        let mut now_ms = 0.0;

        for round in 1..=ROUNDS {
            driver.request_start();
            for _ in 0..MAX_FRAMES {
                if state.phase == GamePhase::Playing {
                    autopilot(&state, &mut driver);
                }
                now_ms += f64::from(SIM_DT) * 1000.0;
                driver.update(&mut state, SIM_DT, now_ms);
                present(&mut state, &mut render, &mut hud);
                if state.phase == GamePhase::GameOver {
                    break;
                }
            }

            log::info!(
                "Round {}: score {} after {} ticks",
                round,
                state.score,
                state.time_ticks
            );

            // A round that survived the frame budget ends here
            state.end_game();
            driver.request_restart();
            driver.update(&mut state, SIM_DT, now_ms);
            present(&mut state, &mut render, &mut hud);
        }

        log::info!(
            "Best score {} over {} rounds ({} frames drawn, {} pipes left in scene)",
            hud.best,
            ROUNDS,
            render.frames,
            render.visible_pipes
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is driven by an embedding page
}
