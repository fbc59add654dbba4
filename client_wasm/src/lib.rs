//! Browser client for the flappy arcade game
//!
//! Renders with wgpu (WebGPU, falling back to WebGL2) onto the page canvas
//! and drives the `game_core` simulation from `requestAnimationFrame`.
//! Browser glue is only compiled for the wasm32 target; the session logic,
//! input mapping and mesh generation also build natively for tests.

pub mod fsm;
pub mod hud;
pub mod input;
pub mod mesh;
pub mod renderer;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
mod audio;

#[cfg(target_arch = "wasm32")]
pub use web::start;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::audio::SoundBank;
    use crate::hud::Hud;
    use crate::input::{handle_key_down, handle_key_up, is_game_key};
    use crate::renderer::Renderer;
    use crate::simulation::LocalGame;
    use anyhow::{anyhow, Context};
    use game_core::{Config, Control, GameRng};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{
        AddEventListenerOptions, Document, Event, EventTarget, HtmlCanvasElement, HtmlElement,
        KeyboardEvent, MouseEvent, TouchEvent, Window,
    };

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("flappy client starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    /// Everything one page session owns
    struct App {
        game: LocalGame,
        renderer: Renderer,
        hud: Hud,
        sounds: SoundBank,
        canvas: HtmlCanvasElement,
        last_time: Option<f64>,
    }

    impl App {
        fn control(&mut self, control: Control) {
            if let Some(cue) = self.game.control(control) {
                self.sounds.play(cue);
            }
        }

        fn frame(&mut self, now: f64) {
            let dt = self
                .last_time
                .map_or(0.0, |last| ((now - last) / 1000.0).max(0.0) as f32);
            self.last_time = Some(now);

            for cue in self.game.frame(dt) {
                self.sounds.play(cue);
            }
            self.hud.update(self.game.hud());

            if let Err(e) = self.renderer.draw(&self.game) {
                log::error!("draw error: {:?}", e);
            }
        }

        /// Size the canvas backing store to its wrapper and follow with the surface
        fn fit_canvas(&mut self) {
            let (width, height) = fit_canvas(&self.canvas);
            self.renderer.resize(width, height);
        }
    }

    async fn init() -> anyhow::Result<()> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;
        let canvas = document
            .query_selector("canvas")
            .map_err(js_error)?
            .ok_or_else(|| anyhow!("no canvas element"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| anyhow!("canvas element is not a canvas"))?;
        fit_canvas(&canvas);

        let config = Config::default();
        let renderer = Renderer::new(canvas.clone(), config.agent_segments)
            .await
            .context("renderer setup failed")?;
        let game = LocalGame::new(config, GameRng::from_entropy());

        let app = Rc::new(RefCell::new(App {
            game,
            renderer,
            hud: Hud::new(&document),
            sounds: SoundBank::new(&document),
            canvas: canvas.clone(),
            last_time: None,
        }));

        setup_input_listeners(&window, &document, &canvas, app.clone()).map_err(js_error)?;
        setup_page_listeners(&window, &document, app.clone()).map_err(js_error)?;

        // Continuous redraw using requestAnimationFrame
        let performance = window.performance();
        let f = RcCellCallback::new(window.clone(), move || {
            let now = performance.as_ref().map_or(0.0, |p| p.now());
            app.borrow_mut().frame(now);
        });
        f.start();

        log::info!("flappy client ready");
        Ok(())
    }

    fn setup_input_listeners(
        window: &Window,
        document: &Document,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Keyboard down
        {
            let app = app.clone();
            listen(document, "keydown", move |e: KeyboardEvent| {
                let key = e.key();
                if is_game_key(&key) {
                    e.prevent_default();
                }
                let mut app = app.borrow_mut();
                app.sounds.unlock();
                if let Some(control) = handle_key_down(&key) {
                    app.control(control);
                }
            })?;
        }

        // Keyboard up
        {
            let app = app.clone();
            listen(document, "keyup", move |e: KeyboardEvent| {
                if let Some(control) = handle_key_up(&e.key()) {
                    app.borrow_mut().control(control);
                }
            })?;
        }

        // Click to flap
        {
            let app = app.clone();
            listen(canvas, "click", move |e: MouseEvent| {
                e.prevent_default();
                app.borrow_mut().control(Control::Flap);
            })?;
        }

        // Touch to flap; non-passive so the page does not scroll
        {
            let app = app.clone();
            listen_active(canvas, "touchstart", move |e: TouchEvent| {
                e.prevent_default();
                app.borrow_mut().control(Control::Flap);
            })?;
            listen_active(canvas, "touchmove", |e: TouchEvent| e.prevent_default())?;
        }

        // Focus loss stops steering
        listen(window, "blur", move |_e: Event| {
            app.borrow_mut().control(Control::ReleaseSteer);
        })?;

        Ok(())
    }

    fn setup_page_listeners(
        window: &Window,
        document: &Document,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        if let Some(button) = element(document, ".Start-button") {
            let app = app.clone();
            listen(&button, "click", move |_e: MouseEvent| {
                let mut app = app.borrow_mut();
                app.sounds.unlock();
                app.game.start();
            })?;
        }

        if let Some(button) = element(document, ".Pause-button") {
            let app = app.clone();
            listen(&button, "click", move |_e: MouseEvent| {
                app.borrow_mut().game.pause();
            })?;
        }

        if let Some(button) = element(document, ".Restart-button") {
            let app = app.clone();
            listen(&button, "click", move |_e: MouseEvent| {
                let mut app = app.borrow_mut();
                app.sounds.unlock();
                app.game.restart();
            })?;
        }

        if let Some(modal) = element(document, "#infoModal") {
            if let Some(button) = element(document, ".info-button") {
                let modal = modal.clone();
                listen(&button, "click", move |_e: MouseEvent| {
                    set_display(&modal, "block");
                })?;
            }
            if let Some(close) = element(document, ".close") {
                let modal = modal.clone();
                listen(&close, "click", move |_e: MouseEvent| {
                    set_display(&modal, "none");
                })?;
            }
            // Clicking the backdrop, not the content, dismisses it
            listen(window, "click", move |e: MouseEvent| {
                let modal_value: &JsValue = modal.as_ref();
                let on_backdrop = e
                    .target()
                    .is_some_and(|target| js_sys::Object::is(&target, modal_value));
                if on_backdrop {
                    set_display(&modal, "none");
                }
            })?;
        }

        for event in ["resize", "load"] {
            let app = app.clone();
            listen(window, event, move |_e: Event| {
                app.borrow_mut().fit_canvas();
            })?;
        }

        Ok(())
    }

    /// Set the canvas backing size from its parent's box, returning the new size
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
        if let Some(parent) = canvas.parent_element() {
            let rect = parent.get_bounding_client_rect();
            canvas.set_width(rect.width().max(1.0) as u32);
            canvas.set_height(rect.height().max(1.0) as u32);
        }
        (canvas.width(), canvas.height())
    }

    fn element(document: &Document, selector: &str) -> Option<HtmlElement> {
        let el = document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if el.is_none() {
            log::warn!("missing {selector}, listener not attached");
        }
        el
    }

    fn set_display(el: &HtmlElement, display: &str) {
        if let Err(e) = el.style().set_property("display", display) {
            log::warn!("failed to set display: {:?}", e);
        }
    }

    fn listen<E>(
        target: &EventTarget,
        event: &str,
        f: impl FnMut(E) + 'static,
    ) -> Result<(), JsValue>
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(E)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Like `listen`, but allowed to cancel the default action
    fn listen_active<E>(
        target: &EventTarget,
        event: &str,
        f: impl FnMut(E) + 'static,
    ) -> Result<(), JsValue>
    where
        E: FromWasmAbi + 'static,
    {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(E)>);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
        Ok(())
    }

    fn js_error(e: JsValue) -> anyhow::Error {
        anyhow!("{:?}", e)
    }

    /// Self-rescheduling animation frame callback
    struct RcCellCallback {
        inner: Rc<RefCell<Box<dyn FnMut()>>>,
        window: Window,
    }

    impl RcCellCallback {
        fn new(window: Window, f: impl FnMut() + 'static) -> Self {
            Self {
                inner: Rc::new(RefCell::new(Box::new(f))),
                window,
            }
        }

        fn start(self) {
            let inner = self.inner.clone();
            let window = self.window.clone();

            let callback = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
            let callback_clone = callback.clone();

            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                inner.borrow_mut().as_mut()();

                // Schedule the next frame
                if let Some(cb) = callback_clone.borrow().as_ref() {
                    if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        log::error!("requestAnimationFrame failed: {:?}", e);
                    }
                }
            }) as Box<dyn FnMut()>));

            if let Some(cb) = callback.borrow().as_ref() {
                if let Err(e) = self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                }
            }

            // Leak the closure to keep it alive
            std::mem::forget(callback);
        }
    }
}
