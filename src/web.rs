//! WASM entry point - the reptile on a 2D canvas
//!
//! Expects a page with `<canvas id="canvas">` and `<button id="playBtn">`.

use crate::animator::ChainAnimator;
use crate::config::AnimatorConfig;
use crate::error::{Error, Result};
use crate::math::Viewport;
use crate::render::CanvasRenderer;
use crate::scheduler::{Clock, FrameHandler, FrameScheduler};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent, Performance};

/// `performance.now()` in seconds.
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        self.performance.as_ref().map(|p| p.now() / 1000.0).unwrap_or(0.0)
    }
}

struct Stage {
    animator: ChainAnimator,
    renderer: CanvasRenderer,
}

impl FrameHandler for Stage {
    fn update(&mut self, dt: f32) {
        self.animator.update(dt);
    }

    fn render(&mut self) {
        self.renderer.render(&self.animator.draw_list());
    }
}

struct WebApp {
    scheduler: FrameScheduler<PerformanceClock>,
    stage: Stage,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn window_viewport(window: &web_sys::Window) -> Viewport {
    let dimension = |value: std::result::Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

fn hide(element: &HtmlElement) {
    if let Err(e) = element.style().set_property("display", "none") {
        log::warn!("could not hide play button: {e:?}");
    }
}

fn attach_listeners(window: &web_sys::Window, app: &Rc<RefCell<WebApp>>) -> Result<()> {
    let document = window
        .document()
        .ok_or_else(|| Error::Dom("no document".into()))?;

    {
        let app = app.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let position = Vec2::new(e.client_x() as f32, e.client_y() as f32);
            app.borrow_mut().stage.animator.pointer_moved(position);
        });
        window
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .map_err(|_| Error::Dom("failed to listen for mousemove".into()))?;
        on_move.forget();
    }

    {
        let app = app.clone();
        let host = window.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let viewport = window_viewport(&host);
            let mut app = app.borrow_mut();
            app.stage.renderer.resize(viewport);
            app.stage.animator.resize(viewport);
        });
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|_| Error::Dom("failed to listen for resize".into()))?;
        on_resize.forget();
    }

    match document
        .get_element_by_id("playBtn")
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        Some(button) => {
            let app = app.clone();
            let target = button.clone();
            let on_click = Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().stage.animator.activate();
                hide(&target);
            });
            button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(|_| Error::Dom("failed to listen for click".into()))?;
            on_click.forget();
        }
        None => {
            log::warn!("no #playBtn element; starting immediately");
            app.borrow_mut().stage.animator.activate();
        }
    }

    Ok(())
}

fn start_frame_loop(app: Rc<RefCell<WebApp>>) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::new(move |_ts: f64| {
        {
            let mut app = app.borrow_mut();
            let WebApp { scheduler, stage } = &mut *app;
            scheduler.tick(stage);
        }
        request_frame(&f);
    }));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(closure) = callback.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {e:?}");
        }
    }
}

fn start() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::Dom("no window".into()))?;
    let canvas = window
        .document()
        .and_then(|d| d.get_element_by_id("canvas"))
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| Error::Dom("could not find canvas element with id 'canvas'".into()))?;

    let viewport = window_viewport(&window);
    let renderer = CanvasRenderer::new(canvas)?;
    renderer.resize(viewport);
    let animator = ChainAnimator::new(AnimatorConfig::default(), viewport)?;

    let app = Rc::new(RefCell::new(WebApp {
        scheduler: FrameScheduler::new(PerformanceClock::new()),
        stage: Stage { animator, renderer },
    }));

    attach_listeners(&window, &app)?;
    start_frame_loop(app);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn main() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    start().map_err(|e| {
        log::error!("{e}");
        JsValue::from(e)
    })
}
