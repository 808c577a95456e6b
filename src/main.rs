//! Asteroid Dodge entry point
//!
//! Handles platform-specific initialization and drives the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use asteroid_dodge::best_time::BestTimeBook;
    use asteroid_dodge::game::{GameController, Refresh, StopOutcome, StopReason};
    use asteroid_dodge::platform::dialogs::BrowserDialogs;
    use asteroid_dodge::platform::direction_for_key_code;
    use asteroid_dodge::platform::storage::{LocalStore, store_or_fallback};
    use asteroid_dodge::renderer::CanvasRenderer;
    use asteroid_dodge::sim::Event;
    use asteroid_dodge::GameConfig;

    /// Game instance holding all page state
    struct Game {
        controller: GameController,
        renderer: CanvasRenderer,
        dialogs: BrowserDialogs,
        /// Pending events, drained in arrival order
        inbox: VecDeque<Event>,
        /// Interval callbacks, created once at startup
        tick_fn: Option<js_sys::Function>,
        clock_fn: Option<js_sys::Function>,
        /// Active interval handles (tick, clock) while a game runs
        intervals: Option<(i32, i32)>,
    }

    impl Game {
        /// Queue an event and process everything pending
        fn post(&mut self, event: Event) {
            self.inbox.push_back(event);
            self.pump();
        }

        fn pump(&mut self) {
            while let Some(event) = self.inbox.pop_front() {
                match self.controller.dispatch(event) {
                    Refresh::Canvas => self.renderer.paint(&self.controller.frame()),
                    Refresh::Timer => set_text("timerDisplay", &self.controller.timer_text()),
                    Refresh::Nothing => {}
                }
            }
        }

        fn start(&mut self) {
            let now = js_sys::Date::now();
            if !self.controller.start_new_game(now, &mut self.dialogs) {
                return;
            }
            self.schedule();
            self.renderer.paint(&self.controller.frame());
            set_text("timerDisplay", &self.controller.timer_text());
        }

        fn stop(&mut self) {
            let now = js_sys::Date::now();
            let outcome = self
                .controller
                .stop_current_game(StopReason::Manual, now, &mut self.dialogs);
            if let StopOutcome::Stopped { .. } = outcome {
                self.cancel();
                self.inbox.clear();
                self.renderer.clear();
                set_text("timerDisplay", &self.controller.timer_text());
                set_text("bestTime", &self.controller.best_time_text());
            }
        }

        /// Begin the movement tick and the timer refresh
        fn schedule(&mut self) {
            self.cancel();
            let (Some(tick_fn), Some(clock_fn)) = (&self.tick_fn, &self.clock_fn) else {
                log::error!("Timers not initialized");
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let config = self.controller.config();
            let tick = window.set_interval_with_callback_and_timeout_and_arguments_0(
                tick_fn,
                config.tick_interval_ms,
            );
            let clock = window.set_interval_with_callback_and_timeout_and_arguments_0(
                clock_fn,
                config.clock_interval_ms,
            );
            match (tick, clock) {
                (Ok(tick), Ok(clock)) => self.intervals = Some((tick, clock)),
                (tick, clock) => {
                    log::error!("Failed to schedule timers");
                    for handle in [tick, clock].into_iter().flatten() {
                        window.clear_interval_with_handle(handle);
                    }
                }
            }
        }

        fn cancel(&mut self) {
            if let (Some((tick, clock)), Some(window)) = (self.intervals.take(), web_sys::window()) {
                window.clear_interval_with_handle(tick);
                window.clear_interval_with_handle(clock);
            }
        }
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.set_text_content(Some(text));
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Asteroid Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()?;

        let config = GameConfig::default();
        let renderer = CanvasRenderer::new(
            canvas,
            config.canvas_width as u32,
            config.canvas_height as u32,
        )?;

        let mut dialogs = BrowserDialogs;
        let store = store_or_fallback(LocalStore::open(), &mut dialogs);
        let best = BestTimeBook::open(store);

        let seed = js_sys::Date::now() as u64;
        let controller = GameController::new(config, best, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);

        set_text("bestTime", &controller.best_time_text());

        let game = Rc::new(RefCell::new(Game {
            controller,
            renderer,
            dialogs,
            inbox: VecDeque::new(),
            tick_fn: None,
            clock_fn: None,
            intervals: None,
        }));

        setup_timers(game.clone());
        setup_input_handler(game.clone());
        setup_buttons(game);

        log::info!("Asteroid Dodge ready");
        Ok(())
    }

    fn setup_timers(game: Rc<RefCell<Game>>) {
        let tick = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.post(Event::Tick);
                }
            })
        };
        let clock = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.post(Event::Clock {
                        now_ms: js_sys::Date::now(),
                    });
                }
            })
        };

        let mut g = game.borrow_mut();
        g.tick_fn = Some(tick.as_ref().unchecked_ref::<js_sys::Function>().clone());
        g.clock_fn = Some(clock.as_ref().unchecked_ref::<js_sys::Function>().clone());
        tick.forget();
        clock.forget();
    }

    fn setup_input_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(dir) = direction_for_key_code(event.key_code()) else {
                return;
            };
            if let Ok(mut g) = game.try_borrow_mut() {
                if g.controller.is_running() {
                    // Keep arrow keys from scrolling the page mid-game
                    event.prevent_default();
                    g.post(Event::Steer(dir));
                }
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Start button
        if let Some(btn) = document.get_element_by_id("startButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Stop button
        if let Some(btn) = document.get_element_by_id("stopButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().stop();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    log::info!("Asteroid Dodge (native) starting...");
    log::info!("Native mode runs a scripted headless demo - run with `trunk serve` for the web version");

    if let Err(e) = run_demo() {
        log::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Two scripted rounds against an in-memory best time: a 12 second round that
/// falls short of the placeholder, then a 30 second round that beats it.
#[cfg(not(target_arch = "wasm32"))]
fn run_demo() -> Result<(), asteroid_dodge::ConfigError> {
    use asteroid_dodge::consts::TICK_INTERVAL_MS;
    use asteroid_dodge::platform::ScriptedDialogs;
    use asteroid_dodge::sim::{Direction, Event};
    use asteroid_dodge::{BestTimeBook, GameConfig, GameController, StopReason};

    let mut dialogs = ScriptedDialogs::new(true);
    let mut game = GameController::new(GameConfig::default(), BestTimeBook::in_memory(), 0xA57E_801D)?;
    println!("{}", game.best_time_text());

    let pattern = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    let mut now = 0.0;

    for (round, ticks) in [(1, 600u32), (2, 1500)] {
        game.start_new_game(now, &mut dialogs);
        for t in 0..ticks {
            now += TICK_INTERVAL_MS as f64;
            game.dispatch(Event::Tick);
            if t % 25 == 0 {
                game.dispatch(Event::Steer(pattern[(t / 25) as usize % pattern.len()]));
            }
            game.dispatch(Event::Clock { now_ms: now });
        }

        if let Some(player) = game.session().and_then(|s| s.player()) {
            log::info!("Round {} player ended at {:?}", round, player.body.pos);
        }
        let outcome = game.stop_current_game(StopReason::Manual, now, &mut dialogs);
        println!("Round {round}: {outcome:?}");
        println!("{}", game.best_time_text());
        now += 1000.0;
    }

    Ok(())
}
