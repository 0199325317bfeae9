//! Animation controller: one clock for stat counters, the hero carousel and
//! the partner marquee. Provided through context, started by `init()` and
//! stopped by `teardown()`; the frame math lives in
//! `contracts::shared::animation`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ~30 fps is enough for counters and a slow marquee
const FRAME_MS: u32 = 33;

#[derive(Clone, Copy)]
pub struct AnimationController {
    /// Milliseconds since `init()`
    elapsed_ms: RwSignal<u64>,
    running: RwSignal<bool>,
    /// Bumped on every init/teardown; a loop exits once its generation is stale
    generation: StoredValue<u64>,
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            elapsed_ms: RwSignal::new(0),
            running: RwSignal::new(false),
            generation: StoredValue::new(0),
        }
    }

    pub fn elapsed_ms(&self) -> Signal<u64> {
        self.elapsed_ms.into()
    }

    pub fn is_running(&self) -> bool {
        self.running.get_untracked()
    }

    /// Start (or restart) the clock from zero
    pub fn init(&self) {
        let generation = self.bump_generation();
        self.elapsed_ms.set(0);
        self.running.set(true);

        let this = *self;
        let started = now_ms();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(FRAME_MS).await;
                if this.generation.try_get_value() != Some(generation) {
                    break;
                }
                let elapsed = (now_ms() - started).max(0.0) as u64;
                if this.elapsed_ms.try_set(elapsed).is_some() {
                    break;
                }
            }
        });
    }

    /// Stop the clock; the last frame stays on screen
    pub fn teardown(&self) {
        self.bump_generation();
        // На unmount сигналы могут быть уже освобождены
        let _ = self.running.try_set(false);
    }

    fn bump_generation(&self) -> u64 {
        self.generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or_default()
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Create a controller for the current page, start it and stop it on unmount
pub fn provide_animation_controller() -> AnimationController {
    let controller = AnimationController::new();
    provide_context(controller);
    controller.init();
    on_cleanup(move || controller.teardown());
    controller
}

pub fn use_animation() -> Option<AnimationController> {
    use_context::<AnimationController>()
}
