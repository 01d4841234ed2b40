//! Canvas Pong entry point
//!
//! Browser builds wire DOM events into the input slot and scheduler and run
//! the animation-frame loop. Native builds run a headless demo match.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use canvas_pong::platform::{
        FrameOutcome, InputSlot, KeyAction, PauseTransition, Scheduler, key_action,
        pointer_to_board_y,
    };
    use canvas_pong::renderer::{CanvasSurface, build_scene, render};
    use canvas_pong::sim::GameState;
    use canvas_pong::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputSlot,
        scheduler: Scheduler,
        settings: Settings,
        surface: CanvasSurface,
    }

    impl Game {
        fn new(tuning: Tuning, seed: u64, surface: CanvasSurface) -> Self {
            Self {
                input: InputSlot::centered(&tuning),
                state: GameState::new(tuning, seed),
                scheduler: Scheduler::new(),
                settings: Settings::default(),
                surface,
            }
        }

        /// Record a pointer/touch position given in client coordinates
        fn pointer_moved(&mut self, client_y: f32) {
            let rect = self.surface.canvas.get_bounding_client_rect();
            let y = pointer_to_board_y(
                client_y,
                rect.top() as f32,
                rect.height() as f32,
                self.state.tuning.board_height,
            );
            self.input.record(y);
        }

        /// Step once and draw the result
        fn frame(&mut self) -> FrameOutcome {
            let Self {
                state,
                input,
                scheduler,
                settings,
                surface,
            } = self;
            scheduler.run_frame(state, input, |state| {
                render(&mut *surface, &build_scene(&state.snapshot(), settings));
            })
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or("no #pong canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        // Board takes the canvas' drawing-buffer size
        let tuning = Tuning {
            board_width: canvas.width() as f32,
            board_height: canvas.height() as f32,
            ..Tuning::default()
        };
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Canvas size rejected ({}), using default board", e);
                Tuning::default()
            }
        };

        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface::new(canvas.clone(), ctx);
        let game = Rc::new(RefCell::new(Game::new(tuning, seed, surface)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone())?;

        if game.borrow_mut().scheduler.start() {
            request_animation_frame(game);
        }

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer_moved(event.client_y() as f32);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start/move
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().pointer_moved(touch.client_y() as f32);
                }
            });
            canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or("no window")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let action = key_action(&event.key(), &game.borrow().settings);
                match action {
                    Some(KeyAction::TogglePause) => {
                        let transition = game.borrow_mut().scheduler.toggle_pause();
                        if matches!(transition, PauseTransition::Resumed { request_frame: true }) {
                            request_animation_frame(game.clone());
                        }
                    }
                    Some(KeyAction::ToggleDemo) => {
                        game.borrow_mut().scheduler.toggle_demo();
                    }
                    None => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let outcome = game.borrow_mut().frame();
        if outcome.wants_next_frame() {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames in the headless demo match (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::Tuning;
    use canvas_pong::platform::{InputSlot, Scheduler};
    use canvas_pong::sim::GameState;

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless demo match - serve the wasm build for the playable version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Game initialized with seed: {}", seed);

    let input = InputSlot::centered(&tuning);
    let mut state = GameState::new(tuning, seed);
    let mut scheduler = Scheduler::new();
    scheduler.set_demo(true);
    scheduler.start();

    let mut paddle_hits = 0u32;
    for _ in 0..DEMO_FRAMES {
        let outcome = scheduler.run_frame(&mut state, &input, |_| {});
        if let canvas_pong::platform::FrameOutcome::Stepped(report) = outcome {
            if report.paddle_hit.is_some() {
                paddle_hits += 1;
            }
        }
    }

    log::info!(
        "Demo finished after {} frames: player {} - opponent {}, level {}, {} paddle hits",
        scheduler.frames(),
        state.player.score,
        state.opponent.score,
        state.level,
        paddle_hits
    );
}
