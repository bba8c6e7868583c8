//! Bindings to the page-global GSAP / ScrollTrigger engine.
//!
//! The scripts are optional. [`Engine::detect`] checks for them once; when
//! they are missing every call goes to the instant fallback, which writes
//! the end state of a tween straight into inline styles.

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{window, Element};

use crate::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn register_plugin(plugin: &JsValue);
    #[wasm_bindgen(js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &JsValue);
    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue);
    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline(vars: &JsValue) -> Timeline;

    #[wasm_bindgen(js_namespace = ["gsap", "ticker"], js_name = add)]
    pub fn ticker_add(callback: &Function);
    #[wasm_bindgen(js_namespace = ["gsap", "ticker"], js_name = remove)]
    pub fn ticker_remove(callback: &Function);
    #[wasm_bindgen(js_namespace = ["gsap", "ticker"], js_name = lagSmoothing)]
    pub fn ticker_lag_smoothing(threshold: f64);
    #[wasm_bindgen(js_namespace = ["gsap", "globalTimeline"], js_name = clear)]
    fn clear_global_timeline();

    pub type Timeline;
    #[wasm_bindgen(method, js_name = to)]
    fn tween_to(this: &Timeline, targets: &JsValue, vars: &JsValue, position: &JsValue) -> Timeline;
    #[wasm_bindgen(method, js_name = from)]
    fn tween_from(this: &Timeline, targets: &JsValue, vars: &JsValue, position: &JsValue) -> Timeline;

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = create)]
    fn trigger_create(vars: &JsValue) -> JsValue;
    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = refresh)]
    fn trigger_refresh();
    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = update)]
    pub fn trigger_update();
    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = getAll)]
    fn trigger_all() -> Array;

    /// A live ScrollTrigger, as handed to `onUpdate`.
    pub type TriggerInstance;
    #[wasm_bindgen(method, getter)]
    pub fn direction(this: &TriggerInstance) -> f64;
    #[wasm_bindgen(method)]
    pub fn scroll(this: &TriggerInstance) -> f64;
    #[wasm_bindgen(method)]
    fn kill(this: &TriggerInstance);
}

pub fn global(name: &str) -> Option<JsValue> {
    let window = window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// A tween property: a number or a GSAP expression such as `"random(-8, 8)"`.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Num(f64),
    Expr(String),
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Num(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Num(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Expr(value.to_string())
    }
}

impl Value {
    fn num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            Value::Expr(_) => None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Stagger {
    Each(f64),
    Spread { amount: f64, from: &'static str },
}

/// Scroll region a tween or callback is tied to.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSpec {
    /// Set on the JS object after serialisation; takes precedence over `trigger`.
    #[serde(skip)]
    pub element: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anticipate_pin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub once: Option<bool>,
}

impl TriggerSpec {
    pub fn on(selector: &str, start: &str) -> Self {
        Self {
            trigger: Some(selector.to_string()),
            start: Some(start.to_string()),
            ..Self::default()
        }
    }

    pub fn on_element(element: &Element, start: &str) -> Self {
        Self {
            element: Some(element.clone()),
            start: Some(start.to_string()),
            ..Self::default()
        }
    }

    /// Page-level region with no trigger element.
    pub fn page(start: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            ..Self::default()
        }
    }

    pub fn end(mut self, end: impl Into<Value>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn scrub(mut self, scrub: f64) -> Self {
        self.scrub = Some(scrub);
        self
    }

    pub fn pin(mut self) -> Self {
        self.pin = Some(true);
        self
    }

    pub fn anticipate_pin(mut self, amount: f64) -> Self {
        self.anticipate_pin = Some(amount);
        self
    }

    pub fn once(mut self) -> Self {
        self.once = Some(true);
        self
    }

    fn to_js(&self) -> Option<JsValue> {
        let value = serde_wasm_bindgen::to_value(self).ok()?;
        if let Some(element) = &self.element {
            Reflect::set(&value, &JsValue::from_str("trigger"), element).ok()?;
        }
        Some(value)
    }
}

macro_rules! setters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

/// Property goals plus timing for one tween.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_x: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_y: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_perspective: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<Stagger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yoyo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate_render: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<TriggerSpec>,
}

impl Tween {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        x: Value,
        y: Value,
        scale: Value,
        scale_x: Value,
        rotation: Value,
        rotate_x: Value,
        rotate_y: Value,
        transform_perspective: f64,
        opacity: f64,
        visibility: String,
        filter: String,
        box_shadow: String,
        background_size: String,
        background_position: String,
        color: String,
        duration: Value,
        delay: f64,
        ease: String,
        stagger: Stagger,
        repeat: i32,
        yoyo: bool,
        immediate_render: bool,
        scroll_trigger: TriggerSpec,
    }

    /// Loops back and forth forever.
    pub fn forever(self) -> Self {
        self.repeat(-1).yoyo(true)
    }

    fn is_scroll_linked(&self) -> bool {
        self.scroll_trigger
            .as_ref()
            .map_or(false, |trigger| trigger.scrub.is_some())
    }

    fn is_ambient(&self) -> bool {
        self.repeat == Some(-1)
    }

    /// Inline CSS equivalent of the tween's end state.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut declarations = Vec::new();
        let mut transform = Vec::new();
        let num = |value: &Option<Value>| value.as_ref().and_then(Value::num);

        if let Some(p) = self.transform_perspective {
            transform.push(format!("perspective({}px)", p));
        }
        match (num(&self.x), num(&self.y)) {
            (None, None) => {}
            (x, y) => transform.push(format!(
                "translate({}px, {}px)",
                x.unwrap_or(0.0),
                y.unwrap_or(0.0)
            )),
        }
        if let Some(r) = num(&self.rotation) {
            transform.push(format!("rotate({}deg)", r));
        }
        if let Some(r) = num(&self.rotate_x) {
            transform.push(format!("rotateX({}deg)", r));
        }
        if let Some(r) = num(&self.rotate_y) {
            transform.push(format!("rotateY({}deg)", r));
        }
        if let Some(s) = num(&self.scale) {
            transform.push(format!("scale({})", s));
        }
        if let Some(s) = num(&self.scale_x) {
            transform.push(format!("scaleX({})", s));
        }
        if !transform.is_empty() {
            declarations.push(("transform", transform.join(" ")));
        }

        if let Some(opacity) = self.opacity {
            declarations.push(("opacity", opacity.to_string()));
        }
        let text = [
            ("visibility", &self.visibility),
            ("filter", &self.filter),
            ("box-shadow", &self.box_shadow),
            ("background-size", &self.background_size),
            ("background-position", &self.background_position),
            ("color", &self.color),
        ];
        for (property, value) in text {
            if let Some(value) = value {
                declarations.push((property, value.clone()));
            }
        }
        declarations
    }

    fn to_js(&self) -> Option<JsValue> {
        let value = serde_wasm_bindgen::to_value(self).ok()?;
        if let Some(trigger) = self.scroll_trigger.as_ref().and_then(TriggerSpec::to_js) {
            Reflect::set(&value, &JsValue::from_str("scrollTrigger"), &trigger).ok()?;
        }
        Some(value)
    }
}

/// What a tween applies to.
pub enum Targets {
    Selector(String),
    Elements(Vec<Element>),
}

impl From<&str> for Targets {
    fn from(selector: &str) -> Self {
        Targets::Selector(selector.to_string())
    }
}

impl From<&Element> for Targets {
    fn from(element: &Element) -> Self {
        Targets::Elements(vec![element.clone()])
    }
}

impl From<&[Element]> for Targets {
    fn from(elements: &[Element]) -> Self {
        Targets::Elements(elements.to_vec())
    }
}

impl From<&Vec<Element>> for Targets {
    fn from(elements: &Vec<Element>) -> Self {
        Targets::Elements(elements.clone())
    }
}

impl From<Vec<Element>> for Targets {
    fn from(elements: Vec<Element>) -> Self {
        Targets::Elements(elements)
    }
}

impl Targets {
    fn resolve(&self) -> Vec<Element> {
        match self {
            Targets::Selector(selector) => dom::query_all(selector),
            Targets::Elements(elements) => elements.clone(),
        }
    }

    fn to_js(&self) -> Option<JsValue> {
        match self {
            Targets::Selector(selector) => {
                // GSAP warns about selectors that match nothing.
                dom::query(selector)?;
                Some(JsValue::from_str(selector))
            }
            Targets::Elements(elements) if elements.is_empty() => None,
            Targets::Elements(elements) => {
                Some(elements.iter().cloned().map(JsValue::from).collect::<Array>().into())
            }
        }
    }
}

fn apply_end_state(targets: &Targets, vars: &Tween) {
    let declarations = vars.css();
    for element in targets.resolve() {
        for (property, value) in &declarations {
            dom::set_style(&element, property, value);
        }
    }
}

fn position(position: Option<&str>) -> JsValue {
    position.map(JsValue::from_str).unwrap_or(JsValue::UNDEFINED)
}

/// Callbacks for a ScrollTrigger region.
#[derive(Default)]
pub struct Hooks {
    pub on_enter: Option<Box<dyn FnMut()>>,
    pub on_leave_back: Option<Box<dyn FnMut()>>,
    pub on_update: Option<Box<dyn FnMut(TriggerInstance)>>,
}

impl Hooks {
    pub fn enter(callback: impl FnMut() + 'static) -> Self {
        Self {
            on_enter: Some(Box::new(callback)),
            ..Self::default()
        }
    }
}

/// JS closures that must outlive the triggers holding them.
#[derive(Default)]
pub struct Retained {
    plain: Vec<Closure<dyn FnMut()>>,
    updates: Vec<Closure<dyn FnMut(TriggerInstance)>>,
}

impl Retained {
    pub fn len(&self) -> usize {
        self.plain.len() + self.updates.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    Gsap,
    Instant,
}

impl Engine {
    pub fn detect() -> Self {
        match (global("gsap"), global("ScrollTrigger")) {
            (Some(_), Some(plugin)) => {
                register_plugin(&plugin);
                Engine::Gsap
            }
            _ => {
                warn!("GSAP not loaded. Falling back to instant state changes.");
                dom::mark_root("no-gsap");
                Engine::Instant
            }
        }
    }

    pub fn is_animated(self) -> bool {
        self == Engine::Gsap
    }

    pub fn set(self, targets: impl Into<Targets>, vars: Tween) {
        if self != Engine::Gsap {
            return;
        }
        let targets = targets.into();
        if let (Some(targets), Some(vars)) = (targets.to_js(), vars.to_js()) {
            gsap_set(&targets, &vars);
        }
    }

    pub fn to(self, targets: impl Into<Targets>, vars: Tween) {
        let targets = targets.into();
        match self {
            Engine::Gsap => {
                log_tween("to", &vars);
                if let (Some(targets), Some(vars)) = (targets.to_js(), vars.to_js()) {
                    gsap_to(&targets, &vars);
                }
            }
            Engine::Instant => {
                if !vars.is_scroll_linked() && !vars.is_ambient() {
                    apply_end_state(&targets, &vars);
                }
            }
        }
    }

    /// `vars` holds the timeline's own settings (delay, scroll trigger);
    /// `defaults` is inherited by every step.
    pub fn timeline(self, vars: Tween, defaults: Option<Tween>) -> Sequence {
        match self {
            Engine::Gsap => {
                let Some(js) = vars.to_js() else {
                    return Sequence::Inert;
                };
                if let Some(defaults) = defaults.as_ref().and_then(Tween::to_js) {
                    let _ = Reflect::set(&js, &JsValue::from_str("defaults"), &defaults);
                }
                Sequence::Gsap(gsap_timeline(&js))
            }
            Engine::Instant if vars.is_scroll_linked() => Sequence::Inert,
            Engine::Instant => Sequence::Instant,
        }
    }

    /// Registers a scroll region. Without the engine only `on_enter`
    /// matters, and it runs right away.
    pub fn trigger(self, spec: TriggerSpec, hooks: Hooks, retained: &mut Retained) {
        let Hooks { on_enter, on_leave_back, on_update } = hooks;
        if self == Engine::Instant {
            if let Some(mut on_enter) = on_enter {
                on_enter();
            }
            return;
        }
        let Some(vars) = spec.to_js() else {
            return;
        };
        if let Some(on_enter) = on_enter {
            let closure = Closure::wrap(on_enter);
            let _ = Reflect::set(&vars, &JsValue::from_str("onEnter"), closure.as_ref());
            retained.plain.push(closure);
        }
        if let Some(on_leave_back) = on_leave_back {
            let closure = Closure::wrap(on_leave_back);
            let _ = Reflect::set(&vars, &JsValue::from_str("onLeaveBack"), closure.as_ref());
            retained.plain.push(closure);
        }
        if let Some(on_update) = on_update {
            let closure = Closure::wrap(on_update);
            let _ = Reflect::set(&vars, &JsValue::from_str("onUpdate"), closure.as_ref());
            retained.updates.push(closure);
        }
        trigger_create(&vars);
    }

    pub fn refresh(self) {
        if self == Engine::Gsap {
            debug!("motion: refreshing scroll triggers");
            trigger_refresh();
        }
    }

    /// Kills every trigger and tween so retained closures can be dropped.
    pub fn teardown(self) {
        if self != Engine::Gsap {
            return;
        }
        for trigger in trigger_all().iter() {
            trigger.unchecked_into::<TriggerInstance>().kill();
        }
        clear_global_timeline();
    }
}

fn log_tween(kind: &str, vars: &Tween) {
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(vars) {
            debug!("motion: {} {}", kind, json);
        }
    }
}

/// A chain of tweens that play one after another.
pub enum Sequence {
    Gsap(Timeline),
    /// Steps land on their end state immediately.
    Instant,
    /// Steps are dropped; used for scroll-scrubbed timelines without the engine.
    Inert,
}

impl Sequence {
    pub fn to(&self, targets: impl Into<Targets>, vars: Tween, at: Option<&str>) -> &Self {
        let targets = targets.into();
        match self {
            Sequence::Gsap(timeline) => {
                if let (Some(targets), Some(vars)) = (targets.to_js(), vars.to_js()) {
                    timeline.tween_to(&targets, &vars, &position(at));
                }
            }
            Sequence::Instant => apply_end_state(&targets, &vars),
            Sequence::Inert => {}
        }
        self
    }

    pub fn from(&self, targets: impl Into<Targets>, vars: Tween, at: Option<&str>) -> &Self {
        if let Sequence::Gsap(timeline) = self {
            let targets: Targets = targets.into();
            if let (Some(targets), Some(vars)) = (targets.to_js(), vars.to_js()) {
                timeline.tween_from(&targets, &vars, &position(at));
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_serialises_gsap_names_and_skips_unset_fields() {
        let tween = Tween::new()
            .y(40.0)
            .opacity(0.0)
            .rotate_x(-90.0)
            .ease("back.out(1.7)")
            .stagger(Stagger::Each(0.02))
            .immediate_render(false);
        let json = serde_json::to_value(&tween).unwrap();
        assert_eq!(json["y"], 40.0);
        assert_eq!(json["rotateX"], -90.0);
        assert_eq!(json["ease"], "back.out(1.7)");
        assert_eq!(json["stagger"], 0.02);
        assert_eq!(json["immediateRender"], false);
        assert!(json.get("x").is_none());
        assert!(json.get("scrollTrigger").is_none());
    }

    #[test]
    fn expressions_pass_through_as_strings() {
        let tween = Tween::new().y("random(-8, 8)").duration("random(3, 5)").forever();
        let json = serde_json::to_value(&tween).unwrap();
        assert_eq!(json["y"], "random(-8, 8)");
        assert_eq!(json["repeat"], -1);
        assert_eq!(json["yoyo"], true);
    }

    #[test]
    fn trigger_spec_serialises_scroll_fields() {
        let spec = TriggerSpec::on(".hero", "top top")
            .end("bottom top")
            .scrub(0.5)
            .pin()
            .anticipate_pin(1.0);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["trigger"], ".hero");
        assert_eq!(json["start"], "top top");
        assert_eq!(json["end"], "bottom top");
        assert_eq!(json["scrub"], 0.5);
        assert_eq!(json["pin"], true);
        assert_eq!(json["anticipatePin"], 1.0);
        assert!(json.get("element").is_none());
    }

    #[test]
    fn spread_stagger_shape() {
        let json = serde_json::to_value(Stagger::Spread { amount: 0.4, from: "start" }).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 0.4, "from": "start" }));
    }

    #[test]
    fn css_end_state_composes_transform() {
        let css = Tween::new().x(0.0).y(0.0).scale(1.0).opacity(1.0).filter("blur(0px)").css();
        assert_eq!(
            css,
            vec![
                ("transform", "translate(0px, 0px) scale(1)".to_string()),
                ("opacity", "1".to_string()),
                ("filter", "blur(0px)".to_string()),
            ]
        );
    }

    #[test]
    fn css_ignores_expressions() {
        let css = Tween::new().y("random(-8, 8)").opacity(0.5).css();
        assert_eq!(css, vec![("opacity", "0.5".to_string())]);
    }

    #[test]
    fn scrubbed_and_looping_tweens_have_no_static_end_state() {
        let scrubbed = Tween::new().y(150.0).scroll_trigger(TriggerSpec::on(".hero", "top top").scrub(0.5));
        assert!(scrubbed.is_scroll_linked());
        let looping = Tween::new().y(-5.0).forever();
        assert!(looping.is_ambient());
        let once = Tween::new().y(0.0).scroll_trigger(TriggerSpec::on(".hero", "top 80%").once());
        assert!(!once.is_scroll_linked());
    }
}
