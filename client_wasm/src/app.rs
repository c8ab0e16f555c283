use std::cell::RefCell;
use std::rc::Rc;

use game_core::{draw_frame, Config, FixedTicker, Game};
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

use crate::canvas::CanvasSurface;
use crate::input;

/// Everything the page needs between callbacks
struct App {
    game: Game,
    ticker: FixedTicker,
    surface: CanvasSurface,
}

impl App {
    /// Run the ticks that are due, then draw once if anything changed
    fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        for _ in 0..self.ticker.advance_to(now_ms) {
            self.game.tick();
        }
        if self.game.take_redraw() {
            draw_frame(&self.game, &mut self.surface)?;
        }
        Ok(())
    }
}

// Browser callbacks all run on the UI thread
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|slot| {
        if let Some(app) = slot.borrow_mut().as_mut() {
            f(app);
        }
    });
}

/// Route `log` records to the browser console
fn init_logging(filter: LevelFilter) {
    // A start that failed after this point leaves the logger installed
    match filter.to_level() {
        Some(level) if console_log::init_with_level(level).is_ok() => {}
        _ => log::set_max_level(filter),
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// Start the game on `canvas`. `config_json` may override any config field.
#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if APP.with(|slot| slot.borrow().is_some()) {
        return Err(JsValue::from_str("Game already started"));
    }

    let config = match config_json {
        Some(json) => Config::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?,
        None => Config::new(),
    };
    init_logging(config.log_level);

    canvas.set_width(config.canvas_width as u32);
    canvas.set_height(config.canvas_height as u32);
    let surface = CanvasSurface::new(&canvas)?;
    let ticker = FixedTicker::new(config.tick_ms, config.max_ticks_per_frame);
    log::info!(
        "starting on a {}x{} canvas, {} ms ticks",
        config.canvas_width,
        config.canvas_height,
        config.tick_ms
    );

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            game: Game::new(config),
            ticker,
            surface,
        });
    });

    install_key_listeners()?;
    start_frame_loop()
}

fn install_key_listeners() -> Result<(), JsValue> {
    let window = window()?;

    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        if let Some(key) = input::map_key(&event.key()) {
            // Keep Space and the arrows from scrolling the page
            event.prevent_default();
            with_app(|app| app.game.key_down(key));
        }
    });
    window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    on_key_down.forget();

    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        if let Some(key) = input::map_key(&event.key()) {
            event.prevent_default();
            with_app(|app| app.game.key_up(key));
        }
    });
    window.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    Ok(())
}

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Self-rescheduling requestAnimationFrame loop
fn start_frame_loop() -> Result<(), JsValue> {
    let next: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let first = Rc::clone(&next);

    *first.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        with_app(|app| {
            if let Err(err) = app.frame(now_ms) {
                log::error!("frame failed: {err:?}");
            }
        });
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::error!("could not schedule the next frame: {err:?}");
            }
        }
    }));

    let scheduled = match first.borrow().as_ref() {
        Some(callback) => request_frame(callback).map(|_| ()),
        None => Ok(()),
    };
    scheduled
}
