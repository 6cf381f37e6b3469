//! Paddle Duel entry point
//!
//! Runs the frame loop against the headless renderer. Logging is controlled
//! with `RUST_LOG` (e.g. `RUST_LOG=debug` to see every point scored).
//! Type `w`, `s` or `x` and Enter to move the left paddle, `q` to quit.

use std::path::Path;
use std::time::Duration;

use paddle_duel::Settings;
use paddle_duel::platform::{ConsoleInput, FrameClock, InputState};
use paddle_duel::renderer::{HeadlessRenderer, Renderer, Scene};
use paddle_duel::sim::{GameEvent, GameState, tick};
use paddle_duel::ui::{ScoreBoard, SegmentFont};

/// Game instance holding all state
struct Game {
    state: GameState,
    renderer: HeadlessRenderer,
    scene: Scene,
    score_board: ScoreBoard,
    input: InputState,
    console: ConsoleInput,
    frames: u64,
}

impl Game {
    fn new(seed: u64, console: ConsoleInput) -> Self {
        let state = GameState::new(seed);
        let mut renderer = HeadlessRenderer::new();
        let scene = Scene::setup(&mut renderer, &state);
        let score_board = ScoreBoard::setup(&mut renderer, &SegmentFont);

        Self {
            state,
            renderer,
            scene,
            score_board,
            input: InputState::new(),
            console,
            frames: 0,
        }
    }

    /// Latch whatever the console sent since the last frame
    fn poll_input(&mut self) {
        self.console.drain(&mut self.input);
    }

    /// Simulate and draw one frame
    fn frame(&mut self, dt: f32) {
        let events = tick(&mut self.state, &self.input.tick_input(), dt);
        for event in events {
            match event {
                GameEvent::Scored { side, wrapped } => {
                    log::info!(
                        "{:?} scores ({}-{}){}",
                        side,
                        self.state.score.left,
                        self.state.score.right,
                        if wrapped { ", scores reset" } else { "" }
                    );
                }
                GameEvent::PaddleHit(side) => log::debug!("{:?} paddle hit", side),
                GameEvent::WallHit => log::trace!("Wall hit"),
            }
        }

        self.score_board.update(&mut self.renderer, &self.state.score);
        self.scene.sync(&mut self.renderer, &self.state);
        self.renderer.render();
        self.frames += 1;
    }

    fn run(&mut self, settings: &Settings) {
        let mut clock = FrameClock::new();
        let pace = Duration::from_secs_f32(settings.frame_budget());

        loop {
            self.poll_input();
            if self.input.close_requested() {
                break;
            }

            let dt = clock.tick();
            self.frame(dt);

            if settings.max_frames.is_some_and(|max| self.frames >= max) {
                self.input.request_close();
            }
            std::thread::sleep(pace);
        }

        log::info!(
            "Stopped after {} frames, final score {}-{}",
            self.renderer.frames(),
            self.state.score.left,
            self.state.score.right
        );
    }
}

fn main() {
    env_logger::init();
    log::info!("Paddle Duel (native) starting...");

    let settings = Settings::load_or_default(Path::new(Settings::FILE_NAME));
    let seed = settings.resolve_seed();
    log::info!(
        "Field {}x{}, seed {}",
        settings.window_width,
        settings.window_height,
        seed
    );

    let mut game = Game::new(seed, ConsoleInput::stdin());
    game.run(&settings);
}
