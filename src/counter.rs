//! Count-up numbers: easing, suffix formatting and a frame-driven hook.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::dom;

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Formats `value` with the suffix the count is heading for: towards
/// `2_000_000` it reads "0.4M+", towards `1000` it reads "0K+", "1K+".
/// Targets under a thousand are bare.
pub fn format_count(value: i64, target: i64) -> String {
    if target >= 1_000_000 {
        format!("{:.1}M+", value as f64 / 1_000_000.0)
    } else if target >= 1_000 {
        format!("{}K+", value / 1_000)
    } else {
        value.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub from: i64,
    pub to: i64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(from: i64, to: i64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        let span = (self.to - self.from) as f64;
        (self.from as f64 + span * ease_out_cubic(progress)).floor() as i64
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// A running animation. Dropping the handle stops it after the current frame.
pub struct CounterHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for CounterHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

/// Drives `animation` with `requestAnimationFrame`, reporting every sampled value.
pub fn run_counter<F>(animation: CounterAnimation, mut on_value: F) -> Option<CounterHandle>
where
    F: FnMut(i64) + 'static,
{
    let window = window()?;
    let cancelled = Rc::new(Cell::new(false));
    let start = dom::now();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let stop = cancelled.clone();
    let scheduler = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if stop.get() {
            let _ = next_frame.borrow_mut().take();
            return;
        }
        let elapsed = timestamp - start;
        on_value(animation.value_at(elapsed));
        if animation.is_done(elapsed) {
            let _ = next_frame.borrow_mut().take();
            return;
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            let _ = scheduler.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()?;
    }

    Some(CounterHandle { cancelled })
}

/// Displayed value that counts from whatever is on screen to `target`.
///
/// Nothing moves while `enabled` is false. Re-targeting mid-flight starts
/// the new run from the value currently shown, and asking for the value
/// already shown does nothing.
#[hook]
pub fn use_counter(initial: i64, target: i64, duration_ms: f64, enabled: bool) -> i64 {
    let displayed = use_state(|| initial);
    let shown = use_mut_ref(|| initial);
    {
        let displayed = displayed.clone();
        use_effect_with_deps(
            move |&(target, enabled): &(i64, bool)| {
                let from = *shown.borrow();
                let handle = if enabled && from != target {
                    let animation = CounterAnimation::new(from, target, duration_ms);
                    run_counter(animation, move |value| {
                        *shown.borrow_mut() = value;
                        displayed.set(value);
                    })
                } else {
                    None
                };
                move || drop(handle)
            },
            (target, enabled),
        );
    }
    *displayed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_magnitude() {
        assert_eq!(format_count(999, 999), "999");
        assert_eq!(format_count(1500, 1500), "1K+");
        assert_eq!(format_count(1000, 1000), "1K+");
        assert_eq!(format_count(2_000_000, 2_000_000), "2.0M+");
        assert_eq!(format_count(2_149_000, 2_149_000), "2.1M+");
        assert_eq!(format_count(0, 9), "0");
    }

    #[test]
    fn suffix_follows_the_target_while_counting() {
        assert_eq!(format_count(0, 2_000_000), "0.0M+");
        assert_eq!(format_count(999, 2_000_000), "0.0M+");
        assert_eq!(format_count(420_000, 2_000_000), "0.4M+");
        assert_eq!(format_count(0, 1_000), "0K+");
        assert_eq!(format_count(999, 1_000), "0K+");
        assert_eq!(format_count(7, 9), "7");
    }

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn count_up_is_monotonic_and_snaps_to_target() {
        let animation = CounterAnimation::new(0, 87, 2500.0);
        let mut last = -1;
        for step in 0..=60 {
            let value = animation.value_at(step as f64 * 2500.0 / 60.0);
            assert!(value >= last, "{value} < {last}");
            assert!(value <= 87);
            last = value;
        }
        assert_eq!(animation.value_at(2500.0), 87);
        assert_eq!(animation.value_at(9_999.0), 87);
        assert!(animation.is_done(2500.0));
        assert!(!animation.is_done(2499.0));
    }

    #[test]
    fn starts_from_the_displayed_value() {
        let animation = CounterAnimation::new(82, 34, 500.0);
        assert_eq!(animation.value_at(0.0), 82);
        assert_eq!(animation.value_at(500.0), 34);
        let midway = animation.value_at(250.0);
        assert!(midway < 82 && midway > 34);
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let animation = CounterAnimation::new(0, 9, 0.0);
        assert_eq!(animation.value_at(0.0), 9);
        assert!(animation.is_done(0.0));
    }
}
