//! Color Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use color_catch::platform::{FrameClock, HeldKeys, Presenter, play_area_for_viewport};
    use color_catch::sim::RenderSnapshot;
    use color_catch::{GameSession, Tuning};

    /// Draws frames on a 2D canvas and keeps the HUD elements current
    struct CanvasPresenter {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        document: web_sys::Document,
    }

    impl CanvasPresenter {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_overlay_visible(&self, visible: bool) {
            let overlay = self
                .document
                .get_element_by_id("overlay")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(overlay) = overlay {
                let display = if visible { "flex" } else { "none" };
                let _ = overlay.style().set_property("display", display);
            }
        }
    }

    impl Presenter for CanvasPresenter {
        fn draw(&mut self, snapshot: &RenderSnapshot) {
            let (w, h) = (snapshot.area.width, snapshot.area.height);
            if self.canvas.width() != w as u32 || self.canvas.height() != h as u32 {
                self.canvas.set_width(w as u32);
                self.canvas.set_height(h as u32);
            }
            let (w, h) = (w as f64, h as f64);
            let ctx = &self.ctx;

            ctx.clear_rect(0.0, 0.0, w, h);

            // Background gradient
            let bg = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
            let _ = bg.add_color_stop(0.0, "#1a1a1a");
            let _ = bg.add_color_stop(1.0, "#333");
            ctx.set_fill_style_canvas_gradient(&bg);
            ctx.fill_rect(0.0, 0.0, w, h);

            // Platform with a highlighted edge
            let p = &snapshot.platform;
            ctx.set_fill_style_str(p.color.as_str());
            ctx.fill_rect(p.x as f64, p.y as f64, p.width as f64, p.height as f64);
            ctx.set_stroke_style_str("white");
            ctx.set_line_width(2.0);
            ctx.stroke_rect(p.x as f64, p.y as f64, p.width as f64, p.height as f64);

            // Blocks with glow
            for block in &snapshot.blocks {
                let (x, y, s) = (block.x as f64, block.y as f64, block.size as f64);
                ctx.set_fill_style_str(block.color.as_str());
                ctx.fill_rect(x, y, s, s);
                ctx.set_shadow_blur(10.0);
                ctx.set_shadow_color(block.color.as_str());
                ctx.fill_rect(x, y, s, s);
                ctx.set_shadow_blur(0.0);
            }
        }

        fn on_score_changed(&mut self, score: u32) {
            self.set_text("score", &score.to_string());
        }

        fn on_level_changed(&mut self, level: u32) {
            self.set_text("level", &level.to_string());
        }

        fn on_game_over(&mut self, final_score: u32) {
            self.set_text("final-score", &final_score.to_string());
            self.set_overlay_visible(true);
        }

        fn on_restart(&mut self) {
            self.set_overlay_visible(false);
        }
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        presenter: CanvasPresenter,
        keys: HeldKeys,
        clock: FrameClock,
        /// Whether an animation frame is scheduled
        running: bool,
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    fn viewport_width() -> f32 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Color Catch starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let area = play_area_for_viewport(viewport_width());
        let seed = js_sys::Date::now() as u64;
        let mut session = GameSession::new(seed, area, Tuning::default());
        let mut presenter = CanvasPresenter {
            canvas,
            ctx,
            document: document.clone(),
        };
        session.start(&mut presenter);

        let game = Rc::new(RefCell::new(Game {
            session,
            presenter,
            keys: HeldKeys::default(),
            clock: FrameClock::new(),
            running: false,
        }));

        let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
        install_frame_loop(game.clone(), frame_cb.clone());
        setup_input_handlers(&document, game.clone());
        setup_resize_handler(game.clone());
        setup_restart_button(&document, game.clone(), frame_cb.clone());

        schedule(&game, &frame_cb);
        log::info!("Color Catch running!");
    }

    fn request_animation_frame(cb: &FrameCallback) {
        if let Some(closure) = cb.borrow().as_ref() {
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
            }
        }
    }

    /// Start the frame loop unless it is already running
    fn schedule(game: &Rc<RefCell<Game>>, cb: &FrameCallback) {
        {
            let mut g = game.borrow_mut();
            if g.running {
                return;
            }
            g.running = true;
            g.clock.reset();
        }
        request_animation_frame(cb);
    }

    fn install_frame_loop(game: Rc<RefCell<Game>>, cb: FrameCallback) {
        let next = cb.clone();
        *cb.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let keep_going = {
                let mut g = game.borrow_mut();
                let Game {
                    session,
                    presenter,
                    keys,
                    clock,
                    running,
                } = &mut *g;
                let dt = clock.tick(timestamp);
                *running = session.frame(dt, &*keys, presenter);
                *running
            };
            if keep_going {
                request_animation_frame(&next);
            }
        }));
    }

    fn setup_input_handlers(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        // Window blur (click outside): keyup never arrives, so release everything
        if let Some(window) = web_sys::window() {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.clear();
                log::debug!("Released held keys (window blur)");
            });
            let _ = window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys.key_down(&event.key()) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let area = play_area_for_viewport(viewport_width());
            game.borrow_mut().session.resize(area);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
        cb: FrameCallback,
    ) {
        let Some(btn) = document.get_element_by_id("restart-button") else {
            log::warn!("No restart button found");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            {
                let mut g = game.borrow_mut();
                let Game {
                    session,
                    presenter,
                    keys,
                    ..
                } = &mut *g;
                keys.clear();
                session.restart(presenter);
            }
            schedule(&game, &cb);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Color Catch (native) starting...");
    log::info!("Native mode runs a headless attract-mode game; build for wasm32 to play");

    run_attract_mode();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one run with the autopilot at a fixed 60 Hz
#[cfg(not(target_arch = "wasm32"))]
fn run_attract_mode() {
    use color_catch::consts::{MAX_PLAY_WIDTH, PLAY_ASPECT, REFERENCE_HZ};
    use color_catch::platform::{HeldKeys, LogPresenter};
    use color_catch::sim::{PlayArea, autopilot_input};
    use color_catch::{GameSession, Tuning};

    const MAX_FRAMES: u32 = 60 * 60 * 5;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let area = PlayArea::new(MAX_PLAY_WIDTH, MAX_PLAY_WIDTH * PLAY_ASPECT);
    let mut session = GameSession::new(seed, area, Tuning::default());
    let mut presenter = LogPresenter::default();
    session.start(&mut presenter);

    let dt = 1.0 / REFERENCE_HZ;
    let mut frames = 0;
    while frames < MAX_FRAMES {
        let input = autopilot_input(session.state());
        let keys = HeldKeys {
            left: input.left,
            right: input.right,
        };
        frames += 1;
        if !session.frame(dt, &keys, &mut presenter) {
            break;
        }
    }

    log::info!(
        "Attract run finished after {} frames ({:.1}s): score {}, level {}, {:?}",
        frames,
        frames as f32 * dt,
        session.score(),
        session.level(),
        session.phase()
    );
}
