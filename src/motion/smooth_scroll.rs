use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Reflect};

use super::engine::{self, Engine};
use crate::config::SmoothScrollOptions;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    type Lenis;

    #[wasm_bindgen(constructor)]
    fn new(options: &JsValue) -> Lenis;
    #[wasm_bindgen(method)]
    fn raf(this: &Lenis, time: f64);
    #[wasm_bindgen(method)]
    fn on(this: &Lenis, event: &str, callback: &Function);
    #[wasm_bindgen(method)]
    fn destroy(this: &Lenis);
}

/// Exponential ease-out used for wheel scrolling.
pub fn scroll_easing(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Lenis driven from the engine ticker. Dropping it detaches from the
/// ticker and restores native scrolling.
pub struct SmoothScroll {
    lenis: Lenis,
    tick: Closure<dyn FnMut(f64)>,
    _easing: Closure<dyn Fn(f64) -> f64>,
    _on_scroll: Closure<dyn FnMut()>,
}

impl SmoothScroll {
    pub fn start(engine: Engine) -> Option<Self> {
        if !engine.is_animated() {
            return None;
        }
        if engine::global("Lenis").is_none() {
            debug!("smooth scroll: Lenis not loaded, keeping native scrolling");
            return None;
        }

        let options = serde_wasm_bindgen::to_value(&SmoothScrollOptions::default()).ok()?;
        let easing = Closure::wrap(Box::new(scroll_easing) as Box<dyn Fn(f64) -> f64>);
        Reflect::set(&options, &JsValue::from_str("easing"), easing.as_ref()).ok()?;

        let lenis = Lenis::new(&options);

        // The ticker reports seconds; Lenis wants milliseconds.
        let driven = lenis.clone();
        let tick = Closure::wrap(Box::new(move |time: f64| driven.raf(time * 1000.0)) as Box<dyn FnMut(f64)>);
        engine::ticker_add(tick.as_ref().unchecked_ref());
        engine::ticker_lag_smoothing(0.0);

        let on_scroll = Closure::wrap(Box::new(engine::trigger_update) as Box<dyn FnMut()>);
        lenis.on("scroll", on_scroll.as_ref().unchecked_ref());

        info!("smooth scroll: enabled");
        Some(Self {
            lenis,
            tick,
            _easing: easing,
            _on_scroll: on_scroll,
        })
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        engine::ticker_remove(self.tick.as_ref().unchecked_ref());
        self.lenis.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_starts_near_zero_and_caps_at_one() {
        assert!(scroll_easing(0.0).abs() < 0.01);
        assert_eq!(scroll_easing(1.0), 1.0);
        assert_eq!(scroll_easing(2.0), 1.0);
        assert!(scroll_easing(0.3) > scroll_easing(0.2));
    }

    fn shares_handle<T: Clone>() {}

    #[test]
    fn ticker_callback_can_hold_its_own_lenis_handle() {
        shares_handle::<Lenis>();
    }
}
