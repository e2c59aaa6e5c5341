//! Skyhop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use skyhop::audio::AudioManager;
    use skyhop::consts::*;
    use skyhop::hud::Hud;
    use skyhop::renderer::RenderState;
    use skyhop::sim::{GameEvent, Session, TickInput, tick};
    use skyhop::{AssetManifest, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        settings: Settings,
        render_state: Option<RenderState>,
        audio: AudioManager,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// A drained event changed what the HUD shows
        hud_stale: bool,
    }

    impl Game {
        fn new(session: Session, settings: Settings, audio: AudioManager) -> Self {
            Self {
                session,
                settings,
                render_state: None,
                audio,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                hud_stale: true,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.session, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Key presses are delivered once
                self.input.pressed.clear();
            }

            for event in self.session.drain_events() {
                self.audio.apply(&event);
                self.hud_stale |= Hud::is_stale_after(&event);
                match event {
                    GameEvent::ScoreChanged(score) => log::debug!("Score: {}", score),
                    GameEvent::HazardArmed => log::info!("Spikes armed"),
                    GameEvent::GameOver {
                        highscore,
                        new_best: true,
                        ..
                    } => log::info!("New highscore: {}", highscore),
                    GameEvent::Restarted => self.accumulator = 0.0,
                    _ => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.session.world) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, document: &Document) {
            if !self.hud_stale {
                return;
            }
            let hud = Hud::from_session(&self.session);

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&hud.score_text));
                let class = if hud.score_tinted { "tinted" } else { "" };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                match &hud.overlay {
                    Some(overlay) => {
                        let _ = el.set_attribute("class", "");
                        set_text(document, "game-over-title", &overlay.title);
                        set_text(document, "game-over-highscore", &overlay.highscore_text);
                        set_text(document, "game-over-retry", &overlay.retry_text);
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            self.hud_stale = false;
        }

        fn set_cursor(&mut self, key: &str, down: bool) {
            match key {
                "ArrowLeft" => self.input.cursors.left = down,
                "ArrowRight" => self.input.cursors.right = down,
                "ArrowUp" => self.input.cursors.up = down,
                _ => {}
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Skyhop starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Fixed logical viewport, scaled for the display
        let dpr = window.device_pixel_ratio();
        let width = (f64::from(VIEW_WIDTH) * dpr) as u32;
        let height = (f64::from(VIEW_HEIGHT) * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let manifest = AssetManifest::new(settings.asset_root.clone());
        manifest
            .verify_remote()
            .await
            .map_err(|e| JsValue::from_str(&format!("asset check failed: {}", e)))?;
        let audio = AudioManager::new(&manifest, &settings)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let session = Session::from_settings(&settings, seed);
        log::info!("Game initialized with seed: {}", session.seed());

        let game = Rc::new(RefCell::new(Game::new(session, settings, audio)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, game.clone());
        setup_focus_handlers(&window, game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(game);

        log::info!("Skyhop running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down: held cursors plus one press event for the restart listener
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key.starts_with("Arrow") {
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                g.set_cursor(&key, true);
                if !event.repeat() {
                    g.audio.resume();
                    g.input.pressed.push(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().set_cursor(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Window blur: drop held keys, optionally mute
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.input = TickInput::default();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                    log::info!("Muted (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window focus: restore the configured mute state
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                let muted = g.settings.muted;
                g.audio.set_muted(muted);
                g.last_time = 0.0;
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Skyhop failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use skyhop::audio::AudioManager;
    use skyhop::hud::Hud;
    use skyhop::sim::{Cursors, GameEvent, Session, TickInput, tick};
    use skyhop::{AssetManifest, Settings, consts::SIM_DT};

    env_logger::init();
    log::info!("Skyhop (native) starting...");

    let settings = Settings::load();
    let manifest = AssetManifest::new(settings.asset_root.clone());
    manifest
        .verify()
        .with_context(|| format!("asset check under `{}` failed", manifest.root()))?;
    let mut audio = AudioManager::new(&manifest, &settings)?;

    let clock_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut session = Session::from_settings(&settings, clock_seed);
    log::info!("Headless run with seed {}", session.seed());

    // Hop every second until the spikes get us (or a minute passes)
    let max_ticks = 60 * 60;
    for i in 0..max_ticks {
        let input = TickInput {
            cursors: Cursors {
                up: i % 60 < 2,
                right: (i / 120) % 2 == 0,
                left: (i / 120) % 2 == 1,
            },
            ..Default::default()
        };
        tick(&mut session, &input, SIM_DT);

        for event in session.drain_events() {
            audio.apply(&event);
            match event {
                GameEvent::ScoreChanged(score) => log::debug!("Score: {}", score),
                GameEvent::HazardArmed => log::info!("Spikes armed after {} ticks", i + 1),
                GameEvent::GameOver { score, .. } => {
                    log::info!("Run ended after {} ticks with score {}", i + 1, score)
                }
                _ => {}
            }
        }
        if session.world.is_game_over() {
            break;
        }
    }

    let hud = Hud::from_session(&session);
    println!("{}", hud.score_text);
    if let Some(overlay) = hud.overlay {
        println!("{}\n{}", overlay.title, overlay.highscore_text);
    }

    log::info!("Native mode is headless - run with `trunk serve` for the web version");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
