//! Plasma Blaster entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use plasma_blaster::audio::PewPool;
    use plasma_blaster::platform::{HeldKeys, intent_for};
    use plasma_blaster::renderer::CanvasRenderer;
    use plasma_blaster::{Game, InitError, Settings};

    const CANVAS_ID: &str = "gameCanvas";
    const RESTART_BUTTON_ID: &str = "restartBtn";
    const TURRET_IMAGE: &str = "gun.png";
    const PEW_SOUND: &str = "pew.mp3";

    type SharedGame = Rc<RefCell<Game<CanvasRenderer, PewPool>>>;

    /// Current viewport size (the canvas fills the window)
    fn viewport(window: &Window) -> (u32, u32) {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        (w as u32, h as u32)
    }

    pub fn run() -> Result<(), InitError> {
        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| InitError::CanvasMissing(CANVAS_ID.into()))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas(CANVAS_ID.into()))?;

        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| Settings::from_json(&json))
            .unwrap_or_default();

        let mut renderer = CanvasRenderer::new(canvas.clone(), document.clone(), &settings)?;
        let (width, height) = viewport(&window);
        renderer.resize(width, height);
        renderer.load_turret_image(TURRET_IMAGE);

        let sound = PewPool::new(PEW_SOUND, &settings);

        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Seed: {}", seed);

        let game: SharedGame = Rc::new(RefCell::new(Game::new(
            seed,
            width as f32,
            height as f32,
            renderer,
            sound,
        )));
        let keys = Rc::new(RefCell::new(HeldKeys::new()));

        setup_keyboard(&document, keys.clone())?;
        setup_input_timer(&window, game.clone(), keys, settings.input_interval_ms)?;
        setup_click_to_shoot(&canvas, game.clone())?;
        setup_restart_button(&document, game.clone())?;
        setup_resize(&window, game.clone())?;

        request_animation_frame(game);

        log::info!("Plasma Blaster running!");
        Ok(())
    }

    fn setup_keyboard(document: &Document, keys: Rc<RefCell<HeldKeys>>) -> Result<(), InitError> {
        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if intent_for(&code).is_some() {
                    event.prevent_default();
                }
                keys.borrow_mut().press(&code);
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(|_| InitError::Wiring("keydown listener".into()))?;
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            keys.borrow_mut().release(&event.code());
        });
        document
            .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
            .map_err(|_| InitError::Wiring("keyup listener".into()))?;
        closure.forget();
        Ok(())
    }

    /// Fixed-rate held-key sampling, independent of the frame callback
    fn setup_input_timer(
        window: &Window,
        game: SharedGame,
        keys: Rc<RefCell<HeldKeys>>,
        interval_ms: u32,
    ) -> Result<(), InitError> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let input = keys.borrow().sample();
            game.borrow_mut().sample_input(&input);
        });
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms as i32,
            )
            .map_err(|_| InitError::Wiring("input timer".into()))?;
        closure.forget();
        Ok(())
    }

    fn setup_click_to_shoot(canvas: &HtmlCanvasElement, game: SharedGame) -> Result<(), InitError> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().shoot();
        });
        canvas
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|_| InitError::Wiring("click listener".into()))?;
        closure.forget();
        Ok(())
    }

    fn setup_restart_button(document: &Document, game: SharedGame) -> Result<(), InitError> {
        let Some(btn) = document.get_element_by_id(RESTART_BUTTON_ID) else {
            log::warn!("No #{} button, restart unavailable", RESTART_BUTTON_ID);
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().restart();
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|_| InitError::Wiring("restart button".into()))?;
        closure.forget();
        Ok(())
    }

    fn setup_resize(window: &Window, game: SharedGame) -> Result<(), InitError> {
        let window_clone = window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let (width, height) = viewport(&window_clone);
            let mut g = game.borrow_mut();
            g.presenter_mut().resize(width, height);
            g.resize(width as f32, height as f32);
        });
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|_| InitError::Wiring("resize listener".into()))?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: SharedGame) {
        let Some(window) = web_sys::window() else {
            log::error!("Window disappeared, stopping loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("requestAnimationFrame failed, stopping loop");
        }
        closure.forget();
    }

    fn game_loop(game: SharedGame, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Plasma Blaster starting...");
    if let Err(e) = wasm_game::run() {
        log::error!("Plasma Blaster failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use plasma_blaster::game::Silent;
    use plasma_blaster::sim::{GamePhase, GameState, TurretInput};
    use plasma_blaster::{Game, Presenter};
    use serde::Serialize;

    /// Frames in the scripted session (~30 s at 60 Hz)
    const FRAMES: u32 = 1800;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Turret sweeps direction every this many frames
    const SWEEP_FRAMES: u32 = 90;

    /// Presenter that only logs HUD changes
    #[derive(Default)]
    struct LogPresenter {
        draws: u64,
    }

    impl Presenter for LogPresenter {
        fn draw(&mut self, _state: &GameState) {
            self.draws += 1;
        }

        fn score_changed(&mut self, score: u64) {
            log::debug!("Score: {}", score);
        }

        fn hide_controls(&mut self) {
            log::debug!("Controls hidden");
        }
    }

    #[derive(Debug, Serialize)]
    struct Summary {
        seed: u64,
        frames: u64,
        draws: u64,
        score: u64,
        phase: GamePhase,
        difficulty: f32,
        spawn_rate: f32,
        projectiles: usize,
        objects: usize,
        particles: usize,
        turret_y: f32,
    }

    /// Scripted session: hold fire while sweeping up and down
    pub fn run(seed: u64) {
        let mut game = Game::new(seed, 800.0, 600.0, LogPresenter::default(), Silent);

        for frame in 0..FRAMES {
            let going_up = (frame / SWEEP_FRAMES) % 2 == 0;
            let input = TurretInput {
                up: going_up,
                down: !going_up,
                shoot: frame % 4 == 0,
            };
            game.sample_input(&input);
            game.frame(frame as f64 * FRAME_MS);
        }

        let state = game.state();
        let summary = Summary {
            seed,
            frames: game.frames(),
            draws: game.presenter().draws,
            score: state.score,
            phase: state.phase,
            difficulty: state.difficulty,
            spawn_rate: state.spawn_rate,
            projectiles: state.projectiles.len(),
            objects: state.objects.len(),
            particles: state.particles.len(),
            turret_y: state.turret.pos.y,
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => log::info!("Session summary:\n{}", json),
            Err(e) => log::error!("Could not serialize summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Plasma Blaster (native) starting...");
    log::info!("Native mode runs a headless session - serve the wasm build for the real game");

    headless::run(0xC0FFEE);
}
