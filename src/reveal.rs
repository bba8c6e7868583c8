//! Viewport intersection reveals.
//!
//! A [`RevealGroup`] describes which elements to watch and what "revealed"
//! means for them. [`RevealState`] is the per-element bookkeeping and
//! [`RevealObserver`] wires both to an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Reveal once, then stop observing.
    OneShot,
    /// Follow the element in and out of the viewport.
    Continuous,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RevealEffect {
    Class(&'static str),
    /// Inline style declarations for the revealed state.
    Styles(&'static [(&'static str, &'static str)]),
    /// Copy `data-src` into `src` and mark the image `loaded`.
    LoadImage,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub policy: RevealPolicy,
    pub effect: RevealEffect,
    /// Delay per position in an observation batch.
    pub stagger_ms: u32,
    /// Class added to every element when it is registered.
    pub mark_class: Option<&'static str>,
    /// Inline styles applied at registration (the hidden resting state).
    pub initial_styles: &'static [(&'static str, &'static str)],
    /// Transition delay of `index * step` seconds, by registration order.
    pub transition_step_s: Option<f64>,
}

impl RevealGroup {
    pub const fn new(selector: &'static str, threshold: f64, effect: RevealEffect) -> Self {
        Self {
            selector,
            threshold,
            root_margin: None,
            policy: RevealPolicy::OneShot,
            effect,
            stagger_ms: 0,
            mark_class: None,
            initial_styles: &[],
            transition_step_s: None,
        }
    }

    pub const fn stagger(mut self, ms: u32) -> Self {
        self.stagger_ms = ms;
        self
    }

    pub const fn continuous(mut self) -> Self {
        self.policy = RevealPolicy::Continuous;
        self
    }

    pub const fn marked(mut self, class: &'static str) -> Self {
        self.mark_class = Some(class);
        self
    }

    pub const fn root_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = Some(margin);
        self
    }

    pub const fn hidden_with(mut self, styles: &'static [(&'static str, &'static str)]) -> Self {
        self.initial_styles = styles;
        self
    }

    pub const fn transition_step(mut self, seconds: f64) -> Self {
        self.transition_step_s = Some(seconds);
        self
    }
}

const CARD_SELECTOR: &str =
    ".scan-category, .feature-card, .step, .score-range, .domain-card, .source-card, .privacy-item";
const ENHANCED_SELECTOR: &str =
    ".scale-reveal, .slide-left, .slide-right, .blur-reveal, .rotate-reveal, .stagger-reveal";

/// Groups installed on the landing page.
pub fn landing_groups() -> Vec<RevealGroup> {
    vec![
        RevealGroup::new(".reveal", config::REVEAL_THRESHOLD, RevealEffect::Class("is-in")),
        RevealGroup::new(CARD_SELECTOR, config::CARD_REVEAL_THRESHOLD, RevealEffect::Class("is-in"))
            .stagger(config::CARD_STAGGER_MS)
            .marked("reveal"),
        RevealGroup::new(
            ENHANCED_SELECTOR,
            config::ENHANCED_REVEAL_THRESHOLD,
            RevealEffect::Class("revealed"),
        ),
        RevealGroup::new(
            ".pain-points-interactive",
            config::PAIN_POINTS_THRESHOLD,
            RevealEffect::Class("is-in"),
        ),
        RevealGroup::new("img[data-src]", 0.0, RevealEffect::LoadImage),
        // Background layers only drift while their section is on screen.
        RevealGroup::new(".section-bg", 0.0, RevealEffect::Class("in-view")).continuous(),
    ]
}

/// Groups installed on the detailed features page.
pub fn features_groups() -> Vec<RevealGroup> {
    vec![
        RevealGroup::new(
            ".detail-item, .methodology-item, .tracking-category",
            config::CARD_REVEAL_THRESHOLD,
            RevealEffect::Styles(&[("opacity", "1"), ("transform", "translateY(0)")]),
        )
        .root_margin(config::DETAIL_ROOT_MARGIN)
        .hidden_with(&[
            ("opacity", "0"),
            ("transform", "translateY(30px)"),
            ("transition", "opacity 0.6s ease, transform 0.6s ease"),
        ]),
        RevealGroup::new(
            ".flow-step",
            config::CARD_REVEAL_THRESHOLD,
            RevealEffect::Styles(&[("opacity", "1"), ("transform", "scale(1)")]),
        )
        .hidden_with(&[
            ("opacity", "0"),
            ("transform", "scale(0.8)"),
            ("transition", "opacity 0.5s ease, transform 0.5s ease"),
        ])
        .transition_step(0.1),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Reveal,
    Conceal,
}

/// Revealed flags for the elements of one group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealState {
    policy: RevealPolicy,
    revealed: Vec<bool>,
}

impl RevealState {
    pub fn new(len: usize, policy: RevealPolicy) -> Self {
        Self {
            policy,
            revealed: vec![false; len],
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Records one intersection report and returns the change to apply, if any.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> Option<Transition> {
        let policy = self.policy;
        let slot = self.revealed.get_mut(index)?;
        match (intersecting, *slot, policy) {
            (true, false, _) => {
                *slot = true;
                Some(Transition::Reveal)
            }
            (false, true, RevealPolicy::Continuous) => {
                *slot = false;
                Some(Transition::Conceal)
            }
            _ => None,
        }
    }
}

/// Delay for the `position`-th entry of an observation batch.
pub fn stagger_delay(position: usize, stagger_ms: u32) -> u32 {
    (position as u32).saturating_mul(stagger_ms)
}

fn apply(element: &Element, effect: &RevealEffect, transition: Transition) {
    match (effect, transition) {
        (RevealEffect::Class(class), Transition::Reveal) => dom::add_class(element, class),
        (RevealEffect::Class(class), Transition::Conceal) => dom::remove_class(element, class),
        (RevealEffect::Styles(styles), Transition::Reveal) => {
            for (property, value) in styles.iter() {
                dom::set_style(element, property, value);
            }
        }
        (RevealEffect::LoadImage, Transition::Reveal) => {
            if let Some(source) = element.get_attribute("data-src") {
                let _ = element.set_attribute("src", &source);
            }
            dom::add_class(element, "loaded");
        }
        _ => {}
    }
}

/// An `IntersectionObserver` bound to one group. Dropping it disconnects.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn install(group: &RevealGroup) -> Option<Self> {
        let elements = dom::query_all(group.selector);
        if elements.is_empty() {
            debug!("reveal: nothing matches {}", group.selector);
            return None;
        }

        for (index, element) in elements.iter().enumerate() {
            if let Some(class) = group.mark_class {
                dom::add_class(element, class);
            }
            for (property, value) in group.initial_styles.iter() {
                dom::set_style(element, property, value);
            }
            if let Some(step) = group.transition_step_s {
                dom::set_style(element, "transition-delay", &format!("{}s", index as f64 * step));
            }
        }

        let state = Rc::new(RefCell::new(RevealState::new(elements.len(), group.policy)));
        let effect = group.effect.clone();
        let stagger_ms = group.stagger_ms;
        let policy = group.policy;
        let watched = elements.clone();

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for (position, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = watched.iter().position(|el| el.is_same_node(Some(&target))) else {
                    continue;
                };
                let transition = state.borrow_mut().observe(index, entry.is_intersecting());
                let Some(transition) = transition else {
                    continue;
                };
                if transition == Transition::Reveal && policy == RevealPolicy::OneShot {
                    observer.unobserve(&target);
                }

                let delay = stagger_delay(position, stagger_ms);
                if delay == 0 {
                    apply(&target, &effect, transition);
                } else {
                    let effect = effect.clone();
                    Timeout::new(delay, move || apply(&target, &effect, transition)).forget();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(group.threshold));
        if let Some(margin) = group.root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        for element in &elements {
            observer.observe(element);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn install_all(groups: &[RevealGroup]) -> Vec<Self> {
        groups.iter().filter_map(Self::install).collect()
    }

    /// Runs `on_enter` the first time `element` crosses `threshold`.
    pub fn once<F>(element: &Element, threshold: f64, on_enter: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut on_enter = Some(on_enter);
        let mut state = RevealState::new(1, RevealPolicy::OneShot);

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if state.observe(0, entry.is_intersecting()) == Some(Transition::Reveal) {
                    observer.unobserve(&entry.target());
                    if let Some(on_enter) = on_enter.take() {
                        on_enter();
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

/// `true` from the first time the referenced node crosses `threshold`.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    RevealObserver::once(&element, threshold, move || in_view.set(true))
                });
                move || drop(observer)
            },
            node,
        );
    }
    *in_view
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_revealed_before_intersecting() {
        let mut state = RevealState::new(2, RevealPolicy::OneShot);
        assert!(!state.is_revealed(0));
        assert_eq!(state.observe(0, false), None);
        assert!(!state.is_revealed(0));
    }

    #[test]
    fn one_shot_stays_revealed_after_leaving() {
        let mut state = RevealState::new(1, RevealPolicy::OneShot);
        assert_eq!(state.observe(0, true), Some(Transition::Reveal));
        assert_eq!(state.observe(0, false), None);
        assert!(state.is_revealed(0));
        // A second entry never re-applies the reveal.
        assert_eq!(state.observe(0, true), None);
    }

    #[test]
    fn continuous_toggles_with_the_viewport() {
        let mut state = RevealState::new(1, RevealPolicy::Continuous);
        assert_eq!(state.observe(0, true), Some(Transition::Reveal));
        assert_eq!(state.observe(0, false), Some(Transition::Conceal));
        assert!(!state.is_revealed(0));
        assert_eq!(state.observe(0, true), Some(Transition::Reveal));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut state = RevealState::new(1, RevealPolicy::OneShot);
        assert_eq!(state.observe(5, true), None);
        assert!(!state.is_revealed(5));
    }

    #[test]
    fn stagger_grows_with_batch_position() {
        assert_eq!(stagger_delay(0, 50), 0);
        assert_eq!(stagger_delay(1, 50), 50);
        assert_eq!(stagger_delay(4, 50), 200);
        assert_eq!(stagger_delay(3, 0), 0);
    }

    #[test]
    fn card_group_cascades_and_marks_cards() {
        let groups = landing_groups();
        let cards = groups
            .iter()
            .find(|g| g.selector.contains(".feature-card"))
            .unwrap();
        assert_eq!(cards.stagger_ms, 50);
        assert_eq!(cards.mark_class, Some("reveal"));
        assert_eq!(cards.policy, RevealPolicy::OneShot);
    }

    #[test]
    fn only_ambient_layers_are_continuous() {
        let continuous: Vec<_> = landing_groups()
            .into_iter()
            .filter(|g| g.policy == RevealPolicy::Continuous)
            .map(|g| g.selector)
            .collect();
        assert_eq!(continuous, vec![".section-bg"]);
    }
}
