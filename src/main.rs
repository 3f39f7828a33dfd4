//! Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use breakout::render::CanvasSurface;
    use breakout::sim::{Key, KeyEvent};
    use breakout::{Config, Driver};

    /// Game instance holding the driver and its render target
    struct Game {
        driver: Driver,
        surface: CanvasSurface,
    }

    /// Config from the canvas `data-config` attribute, sized to the canvas
    fn load_config(canvas: &HtmlCanvasElement) -> Config {
        let mut config = match canvas.get_attribute("data-config") {
            Some(json) => match Config::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring data-config: {}", e);
                    Config::default()
                }
            },
            None => Config::default(),
        };
        config.canvas_width = canvas.width() as f32;
        config.canvas_height = canvas.height() as f32;
        config
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Breakout starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let config = load_config(&canvas);
        let driver = Driver::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let game = Rc::new(RefCell::new(Game {
            driver,
            surface: CanvasSurface::new(context),
        }));

        setup_input_handlers(game.clone())?;

        request_animation_frame(game);

        log::info!("Breakout running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_name(&event.key());
                game.borrow_mut().driver.key(KeyEvent::Down(key));
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_name(&event.key());
                game.borrow_mut().driver.key(KeyEvent::Up(key));
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            let Game { driver, surface } = &mut *g;
            driver.frame(time, surface);
        }

        request_animation_frame(game);
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

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use breakout::render::RecordingSurface;
    use breakout::sim::clock::SleepClock;
    use breakout::sim::{Autopilot, FrameSource, Outcome, VirtualClock};
    use breakout::{Config, Driver};

    /// Headless Breakout: the paddle is steered by an autopilot
    #[derive(Debug, Parser)]
    #[command(version, about)]
    pub struct Args {
        /// JSON config file (missing fields take defaults)
        #[arg(long)]
        pub config: Option<PathBuf>,
        /// Simulated seconds to play
        #[arg(long, default_value_t = 30.0)]
        pub seconds: f64,
        /// Pace frames against the wall clock instead of a virtual clock
        #[arg(long)]
        pub realtime: bool,
    }

    fn load_config(path: Option<&PathBuf>) -> Result<Config> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Config::from_json(&json).with_context(|| format!("load config {}", path.display()))
    }

    pub fn run(args: Args) -> Result<()> {
        let config = load_config(args.config.as_ref())?;
        let interval = config.tick_interval_ms;
        let mut driver = Driver::new(config).context("start game")?;

        let mut clock: Box<dyn FrameSource> = if args.realtime {
            Box::new(SleepClock::new(interval))
        } else {
            Box::new(VirtualClock::new(0.0, interval))
        };
        let mut surface = RecordingSurface::with_limit(1);
        let pilot = Autopilot::default();

        let start = clock.next_frame();
        let end = start + args.seconds * 1000.0;
        let (mut wins, mut losses) = (0u32, 0u32);
        let mut best = 0u64;

        let mut now = start;
        while now < end {
            if let Some(session) = driver.session() {
                let steer = pilot.steer(session.paddle(), session.state().ball.position.x);
                best = best.max(session.state().score);
                driver.key(steer);
            }
            match driver.frame(now, &mut surface) {
                Some(Outcome::Won) => wins += 1,
                Some(Outcome::Lost) => losses += 1,
                _ => {}
            }
            now = clock.next_frame();
        }

        log::info!(
            "Played {:.1}s: {} sessions, {} won, {} lost, best score {}",
            args.seconds,
            driver.sessions_started(),
            wins,
            losses,
            best
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Breakout (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    native::run(native::Args::parse())
}
