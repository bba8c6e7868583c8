//! Per-section animation bindings.
//!
//! Each effect below looks up its elements, bails out quietly when they are
//! missing, and hands property goals to the [`Engine`]. None of them do any
//! animation math themselves.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use super::engine::{Engine, Hooks, Retained, Stagger, TriggerInstance, TriggerSpec, Tween};
use super::smooth_scroll::SmoothScroll;
use crate::config;
use crate::dom::{self, ElementRegistry, EventSubscription};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Group {
    GlassCards,
    RevealCards,
    TiltCards,
    DepthCards,
    Magnetic,
    Steps,
    Sections,
    Stats,
    SectionTitles,
}

impl Group {
    const ALL: [Group; 9] = [
        Group::GlassCards,
        Group::RevealCards,
        Group::TiltCards,
        Group::DepthCards,
        Group::Magnetic,
        Group::Steps,
        Group::Sections,
        Group::Stats,
        Group::SectionTitles,
    ];

    fn selector(self) -> &'static str {
        match self {
            Group::GlassCards => ".glass-card",
            // The domain carousel positions its own cards.
            Group::RevealCards => ".scan-category, .feature-card, .source-card, .privacy-item, .score-range",
            Group::TiltCards => ".feature-card, .scan-category",
            Group::DepthCards => ".scan-category, .feature-card, .source-card",
            Group::Magnetic => ".btn, .fx-hover",
            Group::Steps => ".step",
            Group::Sections => "section",
            Group::Stats => ".stat",
            Group::SectionTitles => ".section-title:not(.hero-title)",
        }
    }
}

/// Scrub lag of the `index`-th hero glass card.
pub fn glass_card_scrub(index: usize) -> f64 {
    0.2 + index as f64 * 0.1
}

/// Parallax speed for the `index`-th card; three depths repeat.
pub fn card_depth_speed(index: usize) -> f64 {
    0.1 + (index % 3) as f64 * 0.05
}

/// Entrance delay for cards in rows of five.
pub fn row_delay(index: usize) -> f64 {
    (index % 5) as f64 * 0.08
}

/// Offset that pulls an element towards the pointer.
pub fn magnetic_pull(pointer: (f64, f64), rect: (f64, f64, f64, f64), strength: f64) -> (f64, f64) {
    let (left, top, width, height) = rect;
    let x = pointer.0 - left - width / 2.0;
    let y = pointer.1 - top - height / 2.0;
    (x * strength, y * strength)
}

/// `(rotateY, rotateX)` in degrees for a card tilted towards the pointer.
pub fn tilt_angles(pointer: (f64, f64), rect: (f64, f64, f64, f64)) -> (f64, f64) {
    let (left, top, width, height) = rect;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (pointer.0 - left) / width - 0.5;
    let y = (pointer.1 - top) / height - 0.5;
    (x * 10.0, -y * 10.0)
}

/// How far a horizontal track must travel to show its last item.
pub fn track_travel(scroll_width: f64, viewport_width: f64) -> f64 {
    (scroll_width - viewport_width).max(0.0)
}

/// Whether the navbar should slide away for a scroll update.
pub fn navbar_hidden(direction: f64, scroll: f64) -> Option<bool> {
    if direction < 0.0 {
        Some(false)
    } else if scroll > 200.0 {
        Some(true)
    } else {
        None
    }
}

fn pointer_rect(event: &Event, element: &Element) -> Option<((f64, f64), (f64, f64, f64, f64))> {
    let event = event.dyn_ref::<MouseEvent>()?;
    let rect = element.get_bounding_client_rect();
    Some((
        (event.client_x() as f64, event.client_y() as f64),
        (rect.left(), rect.top(), rect.width(), rect.height()),
    ))
}

struct Stage {
    engine: Engine,
    registry: ElementRegistry<Group>,
    retained: Retained,
    subscriptions: Vec<EventSubscription>,
}

impl Stage {
    fn listen<F>(&mut self, element: &Element, kind: &'static str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        self.subscriptions.extend(EventSubscription::new(element, kind, handler));
    }

    fn hover(&mut self, element: &Element, enter: Tween, leave: Tween) {
        let engine = self.engine;
        let target = element.clone();
        self.listen(element, "mouseenter", move |_| engine.to(&target, enter.clone()));
        let target = element.clone();
        self.listen(element, "mouseleave", move |_| engine.to(&target, leave.clone()));
    }

    fn on_enter<F>(&mut self, spec: TriggerSpec, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.engine.trigger(spec, Hooks::enter(callback), &mut self.retained);
    }

    fn elements(&self, group: Group) -> Vec<Element> {
        self.registry.get(group).to_vec()
    }
}

type Effect = fn(&mut Stage);

const EFFECTS: &[(&str, Effect)] = &[
    ("hero entrance", hero_entrance),
    ("parallax", parallax),
    ("section reveals", section_reveals),
    ("magnetic", magnetic_elements),
    ("scroll progress", scroll_progress),
    ("horizontal scroll", horizontal_scroll),
    ("pinned features", pinned_features),
    ("steps", steps_reveal),
    ("card tilt", card_tilt),
    ("demo", demo_section),
    ("pain points", pain_points),
    ("floating", floating_elements),
    ("section parallax", section_parallax),
    ("stats hover", interactive_stats),
    ("title reveal", text_reveal),
    ("navbar", navbar_scroll),
    ("compare", comparison_entrance),
    ("depth parallax", enhanced_parallax),
    ("scroll scale", scroll_scale),
    ("stagger grids", stagger_grids),
    ("section backgrounds", section_backgrounds),
    ("flip cards", flip_cards_entrance),
];

/// The whole motion layer for one page. Dropping it kills every trigger
/// and listener it created.
pub struct Choreography {
    engine: Engine,
    _smooth: Option<SmoothScroll>,
    _retained: Retained,
    _subscriptions: Vec<EventSubscription>,
}

impl Choreography {
    /// `None` when the visitor asked for reduced motion.
    pub fn start() -> Option<Self> {
        if dom::prefers_reduced_motion() {
            info!("motion: reduced motion requested, skipping choreography");
            dom::mark_root("reduce-motion");
            return None;
        }

        let engine = Engine::detect();
        let smooth = SmoothScroll::start(engine);

        let mut registry = ElementRegistry::new();
        for group in Group::ALL {
            registry.collect(group, group.selector());
        }
        let mut stage = Stage {
            engine,
            registry,
            retained: Retained::default(),
            subscriptions: Vec::new(),
        };

        for (name, effect) in EFFECTS {
            debug!("motion: {}", name);
            effect(&mut stage);
        }

        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        stage.subscriptions.extend(EventSubscription::on_window("resize", move |_| {
            // Replacing the timeout cancels the previous one.
            *pending.borrow_mut() =
                Some(Timeout::new(config::RESIZE_DEBOUNCE_MS, move || engine.refresh()));
        }));

        info!(
            "motion: {} effects bound ({} listeners, {} callbacks)",
            EFFECTS.len(),
            stage.subscriptions.len(),
            stage.retained.len()
        );
        Some(Self {
            engine,
            _smooth: smooth,
            _retained: stage.retained,
            _subscriptions: stage.subscriptions,
        })
    }
}

impl Drop for Choreography {
    fn drop(&mut self) {
        self.engine.teardown();
    }
}

fn hero_entrance(stage: &mut Stage) {
    let engine = stage.engine;
    let Some(hero) = dom::query(".hero") else {
        return;
    };
    let chars = dom::query_all_in(&hero, ".hero-title .char");

    let tl = engine.timeline(Tween::new().delay(0.3), Some(Tween::new().ease("power4.out")));
    tl.from(".navbar", Tween::new().y(-30.0).opacity(0.0).duration(1.0), None);

    engine.set(
        ".hero .kicker, .hero-title, .hero .sub, .hero-subtitle, .hero-cta, .hero-stats",
        Tween::new().opacity(1.0).visibility("visible"),
    );

    tl.from(
        ".hero .kicker",
        Tween::new().y(20.0).opacity(0.0).duration(0.8).immediate_render(false),
        Some("-=0.5"),
    );

    if chars.is_empty() {
        tl.from(
            ".hero-title",
            Tween::new().y(30.0).opacity(0.0).duration(1.0).immediate_render(false),
            Some("-=0.4"),
        );
    } else {
        tl.from(
            chars,
            Tween::new()
                .y(40.0)
                .opacity(0.0)
                .rotate_x(-90.0)
                .stagger(Stagger::Each(0.02))
                .duration(0.8)
                .ease("back.out(1.7)")
                .immediate_render(false),
            Some("-=0.4"),
        );
    }

    tl.from(
        ".hero .sub, .hero-subtitle",
        Tween::new().y(20.0).opacity(0.0).duration(0.8).immediate_render(false),
        Some("-=0.5"),
    )
    .from(
        ".hero-cta .btn",
        Tween::new()
            .y(20.0)
            .opacity(0.0)
            .scale(0.9)
            .stagger(Stagger::Each(0.1))
            .duration(0.6)
            .immediate_render(false),
        Some("-=0.4"),
    )
    .from(
        ".credibility-chip",
        Tween::new().y(15.0).opacity(0.0).scale(0.95).stagger(Stagger::Each(0.08)).duration(0.5),
        Some("-=0.3"),
    )
    .from(".hero-stats", Tween::new().y(20.0).opacity(0.0).duration(0.6), Some("-=0.3"))
    .from(
        ".device, .phone-mockup",
        Tween::new()
            .y(60.0)
            .opacity(0.0)
            .scale(0.9)
            .rotate_y(-10.0)
            .duration(1.2)
            .ease("power3.out"),
        Some("-=0.8"),
    );

    engine.set(".glass-card", Tween::new().opacity(1.0).visibility("visible"));
    tl.from(
        ".glass-card",
        Tween::new()
            .scale(0.0)
            .opacity(0.0)
            .stagger(Stagger::Each(0.1))
            .duration(0.5)
            .ease("back.out(1.7)")
            .immediate_render(false),
        Some("-=0.5"),
    );
}

fn hero_scrub(scrub: f64) -> TriggerSpec {
    TriggerSpec::on(".hero", "top top").end("bottom top").scrub(scrub)
}

fn parallax(stage: &mut Stage) {
    let engine = stage.engine;
    if let Some(background) = dom::query("#bg-canvas") {
        engine.to(&background, Tween::new().y(150.0).ease("none").scroll_trigger(hero_scrub(0.5)));
    }
    if let Some(device) = dom::query(".device, .phone-mockup") {
        engine.to(&device, Tween::new().y(-80.0).ease("none").scroll_trigger(hero_scrub(0.3)));
    }
    for (i, card) in stage.registry.get(Group::GlassCards).iter().enumerate() {
        engine.to(
            card,
            Tween::new()
                .y(-30.0 - i as f64 * 10.0)
                .ease("none")
                .scroll_trigger(hero_scrub(glass_card_scrub(i))),
        );
    }
}

fn section_reveals(stage: &mut Stage) {
    let engine = stage.engine;
    for section in dom::query_all("[data-reveal]") {
        let items = dom::query_all_in(&section, ".fx-reveal");
        if items.is_empty() {
            continue;
        }
        engine.set(&items, Tween::new().y(40.0).opacity(0.0).filter("blur(10px)"));
        stage.on_enter(TriggerSpec::on_element(&section, "top 85%").once(), move || {
            engine.to(
                &items,
                Tween::new()
                    .y(0.0)
                    .opacity(1.0)
                    .filter("blur(0px)")
                    .duration(1.0)
                    .stagger(Stagger::Each(0.1))
                    .ease("power3.out"),
            );
        });
    }

    for (i, card) in stage.elements(Group::RevealCards).into_iter().enumerate() {
        engine.set(&card, Tween::new().y(50.0).opacity(0.0).scale(0.95));
        let spec = TriggerSpec::on_element(&card, "top 90%").once();
        stage.on_enter(spec, move || {
            engine.to(
                &card,
                Tween::new()
                    .y(0.0)
                    .opacity(1.0)
                    .scale(1.0)
                    .duration(0.8)
                    .delay(row_delay(i))
                    .ease("power3.out"),
            );
        });
    }
}

fn magnetic_elements(stage: &mut Stage) {
    let engine = stage.engine;
    if !engine.is_animated() {
        return;
    }
    for element in stage.elements(Group::Magnetic) {
        let strength = if element.class_list().contains("btn") { 0.3 } else { 0.15 };
        let target = element.clone();
        stage.listen(&element, "mousemove", move |event| {
            let Some((pointer, rect)) = pointer_rect(&event, &target) else {
                return;
            };
            let (x, y) = magnetic_pull(pointer, rect, strength);
            engine.to(&target, Tween::new().x(x).y(y).duration(0.3).ease("power2.out"));
        });
        let target = element.clone();
        stage.listen(&element, "mouseleave", move |_| {
            engine.to(
                &target,
                Tween::new().x(0.0).y(0.0).duration(0.5).ease("elastic.out(1, 0.5)"),
            );
        });
    }
}

fn scroll_progress(stage: &mut Stage) {
    let Some(bar) = dom::query(".scroll-progress") else {
        return;
    };
    stage.engine.to(
        &bar,
        Tween::new().scale_x(1.0).ease("none").scroll_trigger(
            TriggerSpec::on("body", "top top").end("bottom bottom").scrub(0.3),
        ),
    );
}

fn horizontal_scroll(stage: &mut Stage) {
    let Some(section) = dom::query(".horizontal-scroll-section") else {
        return;
    };
    let Some(track) = dom::query_in(&section, ".horizontal-track") else {
        return;
    };
    let travel = track_travel(track.scroll_width() as f64, dom::viewport_width());
    stage.engine.to(
        &track,
        Tween::new().x(-travel).ease("none").scroll_trigger(
            TriggerSpec::on_element(&section, "top top")
                .end(format!("+={}", travel).as_str())
                .scrub(1.0)
                .pin()
                .anticipate_pin(1.0),
        ),
    );
}

fn pinned_features(stage: &mut Stage) {
    let Some(section) = dom::query(".pinned-features") else {
        return;
    };
    let items = dom::query_all_in(&section, ".pinned-feature-item");
    if items.is_empty() {
        return;
    }
    let tl = stage.engine.timeline(
        Tween::new().scroll_trigger(
            TriggerSpec::on_element(&section, "top top")
                .end(format!("+={}%", items.len() * 100).as_str())
                .scrub(1.0)
                .pin(),
        ),
        None,
    );
    for (i, item) in items.iter().enumerate() {
        if i == 0 {
            tl.from(item, Tween::new().opacity(0.0).y(50.0).duration(1.0), None);
        } else {
            tl.to(&items[i - 1], Tween::new().opacity(0.0).y(-50.0).duration(0.5), None);
            tl.from(item, Tween::new().opacity(0.0).y(50.0).duration(0.5), Some("<"));
        }
    }
}

fn steps_reveal(stage: &mut Stage) {
    let engine = stage.engine;
    for step in stage.elements(Group::Steps) {
        let number = dom::query_in(&step, ".step-number");
        let Some(content) = dom::query_in(&step, ".step-content") else {
            continue;
        };
        let hidden: Vec<Element> = number.iter().cloned().chain([content.clone()]).collect();
        engine.set(hidden, Tween::new().opacity(0.0).y(30.0));
        if let Some(number) = &number {
            engine.set(number, Tween::new().scale(0.5).rotation(-180.0));
        }

        stage.on_enter(TriggerSpec::on_element(&step, "top 80%").once(), move || {
            let tl = engine.timeline(Tween::new(), None);
            if let Some(number) = &number {
                tl.to(
                    number,
                    Tween::new()
                        .opacity(1.0)
                        .y(0.0)
                        .scale(1.0)
                        .rotation(0.0)
                        .duration(0.6)
                        .ease("back.out(1.7)"),
                    None,
                );
            }
            tl.to(
                &content,
                Tween::new().opacity(1.0).y(0.0).duration(0.6).ease("power3.out"),
                number.as_ref().map(|_| "-=0.3"),
            );
        });
    }
}

fn card_tilt(stage: &mut Stage) {
    let engine = stage.engine;
    if !engine.is_animated() {
        return;
    }
    for card in stage.elements(Group::TiltCards) {
        let target = card.clone();
        stage.listen(&card, "mousemove", move |event| {
            let Some((pointer, rect)) = pointer_rect(&event, &target) else {
                return;
            };
            let (rotate_y, rotate_x) = tilt_angles(pointer, rect);
            engine.to(
                &target,
                Tween::new()
                    .rotate_y(rotate_y)
                    .rotate_x(rotate_x)
                    .transform_perspective(1000.0)
                    .duration(0.3)
                    .ease("power2.out"),
            );
        });
        let target = card.clone();
        stage.listen(&card, "mouseleave", move |_| {
            engine.to(
                &target,
                Tween::new().rotate_y(0.0).rotate_x(0.0).duration(0.5).ease("power2.out"),
            );
        });
    }
}

fn demo_section(stage: &mut Stage) {
    let engine = stage.engine;
    let Some(demo) = dom::query(".interactive-demo") else {
        return;
    };

    let tabs = dom::query_all_in(&demo, ".demo-tab");
    engine.set(&tabs, Tween::new().y(20.0).opacity(0.0));
    let revealed = tabs.clone();
    stage.on_enter(TriggerSpec::on_element(&demo, "top 80%").once(), move || {
        engine.to(
            &revealed,
            Tween::new()
                .y(0.0)
                .opacity(1.0)
                .duration(0.6)
                .stagger(Stagger::Each(0.1))
                .ease("back.out(1.7)"),
        );
    });

    if engine.is_animated() {
        for tab in &tabs {
            let target = tab.clone();
            stage.listen(tab, "click", move |_| {
                engine.to(
                    &target,
                    Tween::new().scale(0.95).duration(0.1).yoyo(true).repeat(1).ease("power2.inOut"),
                );
            });
        }
    }

    if let Some(phone) = dom::query_in(&demo, ".demo-phone") {
        engine.set(&phone, Tween::new().y(40.0).opacity(0.0).scale(0.95));
        let target = phone.clone();
        stage.on_enter(TriggerSpec::on_element(&phone, "top 85%").once(), move || {
            engine.to(
                &target,
                Tween::new().y(0.0).opacity(1.0).scale(1.0).duration(1.0).ease("power3.out"),
            );
        });
    }

    if engine.is_animated() {
        for button in dom::query_all_in(&demo, ".product-btn") {
            stage.hover(
                &button,
                Tween::new().scale(1.02).duration(0.3).ease("power2.out"),
                Tween::new().scale(1.0).duration(0.3).ease("power2.out"),
            );
        }
    }
}

fn pain_points(stage: &mut Stage) {
    let engine = stage.engine;
    let Some(section) = dom::query(".pain-points") else {
        return;
    };
    for card in dom::query_all_in(&section, ".problem-solution-card") {
        let (Some(problem), Some(arrow), Some(solution)) = (
            dom::query_in(&card, ".problem-side"),
            dom::query_in(&card, ".solution-arrow"),
            dom::query_in(&card, ".solution-side"),
        ) else {
            continue;
        };

        engine.set(
            vec![problem.clone(), arrow.clone(), solution.clone()],
            Tween::new().opacity(0.0),
        );
        engine.set(&problem, Tween::new().x(-30.0));
        engine.set(&arrow, Tween::new().scale(0.0));
        engine.set(&solution, Tween::new().x(30.0));

        let parts = (problem, arrow.clone(), solution);
        stage.on_enter(TriggerSpec::on_element(&card, "top 85%").once(), move || {
            let (problem, arrow, solution) = &parts;
            engine
                .timeline(Tween::new(), None)
                .to(problem, Tween::new().x(0.0).opacity(1.0).duration(0.6).ease("power3.out"), None)
                .to(
                    arrow,
                    Tween::new().scale(1.0).opacity(1.0).duration(0.4).ease("back.out(1.7)"),
                    Some("-=0.3"),
                )
                .to(
                    solution,
                    Tween::new().x(0.0).opacity(1.0).duration(0.6).ease("power3.out"),
                    Some("-=0.2"),
                );
        });

        if engine.is_animated() {
            let target = arrow.clone();
            stage.listen(&card, "mouseenter", move |_| {
                engine.to(&target, Tween::new().x(5.0).scale(1.2).duration(0.3).ease("power2.out"));
            });
            let target = arrow;
            stage.listen(&card, "mouseleave", move |_| {
                engine.to(&target, Tween::new().x(0.0).scale(1.0).duration(0.3).ease("power2.out"));
            });
        }
    }
}

fn floating_elements(stage: &mut Stage) {
    let engine = stage.engine;
    for (i, card) in stage.registry.get(Group::GlassCards).iter().enumerate() {
        engine.to(
            card,
            Tween::new()
                .y("random(-8, 8)")
                .x("random(-3, 3)")
                .rotation("random(-2, 2)")
                .duration("random(3, 5)")
                .ease("sine.inOut")
                .delay(i as f64 * 0.2)
                .forever(),
        );
    }
    for (i, icon) in dom::query_all(".category-icon").iter().enumerate() {
        engine.to(
            icon,
            Tween::new()
                .y(-5.0)
                .duration(2.0)
                .ease("sine.inOut")
                .delay(i as f64 * 0.3)
                .forever(),
        );
    }
}

fn section_scrub(section: &Element, scrub: f64) -> TriggerSpec {
    TriggerSpec::on_element(section, "top bottom").end("bottom top").scrub(scrub)
}

fn section_parallax(stage: &mut Stage) {
    let engine = stage.engine;
    for section in stage.registry.get(Group::Sections) {
        if let Some(background) = dom::query_in(section, ".section-bg") {
            engine.to(
                &background,
                Tween::new().y(50.0).ease("none").scroll_trigger(section_scrub(section, 0.5)),
            );
        }
    }
}

fn interactive_stats(stage: &mut Stage) {
    let engine = stage.engine;
    if !engine.is_animated() {
        return;
    }
    for stat in stage.elements(Group::Stats) {
        let number = dom::query_in(&stat, ".stat-number");
        let (target, highlight) = (stat.clone(), number.clone());
        stage.listen(&stat, "mouseenter", move |_| {
            engine.to(&target, Tween::new().scale(1.05).duration(0.3).ease("back.out(1.7)"));
            if let Some(number) = &highlight {
                engine.to(number, Tween::new().color("var(--forest)").duration(0.3));
            }
        });
        let target = stat.clone();
        stage.listen(&stat, "mouseleave", move |_| {
            engine.to(&target, Tween::new().scale(1.0).duration(0.3).ease("power2.out"));
            if let Some(number) = &number {
                engine.to(number, Tween::new().color("var(--paper)").duration(0.3));
            }
        });
    }
}

fn text_reveal(stage: &mut Stage) {
    let engine = stage.engine;
    for title in stage.elements(Group::SectionTitles) {
        engine.set(&title, Tween::new().background_size("0% 100%"));
        let target = title.clone();
        stage.on_enter(TriggerSpec::on_element(&title, "top 85%").once(), move || {
            engine.to(
                &target,
                Tween::new().background_size("200% 100%").duration(1.5).ease("power2.out"),
            );
        });
    }
}

fn navbar_scroll(stage: &mut Stage) {
    let engine = stage.engine;
    if !engine.is_animated() {
        return;
    }
    let Some(navbar) = dom::query(".navbar") else {
        return;
    };

    let target = navbar.clone();
    let on_update = move |trigger: TriggerInstance| {
        match navbar_hidden(trigger.direction(), trigger.scroll()) {
            Some(false) => engine.to(&target, Tween::new().y(0.0).duration(0.3).ease("power2.out")),
            Some(true) => engine.to(&target, Tween::new().y(-100.0).duration(0.3).ease("power2.in")),
            None => {}
        }
    };
    engine.trigger(
        TriggerSpec::page("top -100").end(99999.0),
        Hooks {
            on_update: Some(Box::new(on_update)),
            ..Hooks::default()
        },
        &mut stage.retained,
    );

    let (shadowed, cleared) = (navbar.clone(), navbar);
    engine.trigger(
        TriggerSpec::page("top -50"),
        Hooks {
            on_enter: Some(Box::new(move || {
                engine.to(
                    &shadowed,
                    Tween::new().box_shadow("0 4px 20px rgba(11, 15, 14, 0.1)").duration(0.3),
                );
            })),
            on_leave_back: Some(Box::new(move || {
                engine.to(&cleared, Tween::new().box_shadow("none").duration(0.3));
            })),
            ..Hooks::default()
        },
        &mut stage.retained,
    );
}

fn comparison_entrance(stage: &mut Stage) {
    let engine = stage.engine;
    let Some(section) = dom::query(".product-compare") else {
        return;
    };

    if let Some(vs) = dom::query_in(&section, ".vs-circle") {
        engine.set(&vs, Tween::new().scale(0.0).rotation(-180.0));
        let target = vs.clone();
        stage.on_enter(TriggerSpec::on_element(&section, "top 70%").once(), move || {
            engine.to(
                &target,
                Tween::new().scale(1.0).rotation(0.0).duration(0.8).ease("back.out(1.7)"),
            );
        });
    }

    if let (Some(a), Some(b)) = (
        dom::query_in(&section, ".compare-a"),
        dom::query_in(&section, ".compare-b"),
    ) {
        engine.set(&a, Tween::new().x(-60.0).opacity(0.0));
        engine.set(&b, Tween::new().x(60.0).opacity(0.0));
        stage.on_enter(TriggerSpec::on_element(&section, "top 75%").once(), move || {
            engine.to(&a, Tween::new().x(0.0).opacity(1.0).duration(0.8).ease("power3.out"));
            engine.to(
                &b,
                Tween::new().x(0.0).opacity(1.0).duration(0.8).ease("power3.out").delay(0.15),
            );
        });
    }

    if engine.is_animated() {
        for button in dom::query_all_in(&section, ".compare-btn") {
            let target = button.clone();
            stage.listen(&button, "mouseenter", move |_| {
                if !target.class_list().contains("active") {
                    engine.to(
                        &target,
                        Tween::new().scale(1.03).y(-2.0).duration(0.3).ease("power2.out"),
                    );
                }
            });
            let target = button.clone();
            stage.listen(&button, "mouseleave", move |_| {
                engine.to(&target, Tween::new().scale(1.0).y(0.0).duration(0.3).ease("power2.out"));
            });
        }
    }

    if let Some(badge) = dom::query_in(&section, ".winner-badge") {
        engine.to(
            &badge,
            Tween::new()
                .box_shadow("0 0 20px rgba(255, 215, 0, 0.5)")
                .duration(1.5)
                .ease("sine.inOut")
                .forever(),
        );
    }
}

fn enhanced_parallax(stage: &mut Stage) {
    let engine = stage.engine;
    for section in stage.registry.get(Group::Sections) {
        if let Some(title) = dom::query_in(section, ".section-title") {
            engine.to(
                &title,
                Tween::new().y(-20.0).ease("none").scroll_trigger(section_scrub(section, 0.5)),
            );
        }
        if let Some(eyebrow) = dom::query_in(section, ".eyebrow") {
            engine.to(
                &eyebrow,
                Tween::new().y(-10.0).ease("none").scroll_trigger(section_scrub(section, 0.3)),
            );
        }
    }

    for (i, card) in stage.registry.get(Group::DepthCards).iter().enumerate() {
        let speed = card_depth_speed(i);
        engine.to(
            card,
            Tween::new()
                .y(-30.0 * speed)
                .ease("none")
                .scroll_trigger(section_scrub(card, speed)),
        );
    }
}

fn scroll_scale(stage: &mut Stage) {
    let engine = stage.engine;
    if let Some(phone) = dom::query(".hero .device, .hero .phone-mockup") {
        engine.to(&phone, Tween::new().scale(1.05).ease("none").scroll_trigger(hero_scrub(0.5)));
    }
    if let Some(phone) = dom::query(".demo-phone") {
        engine.to(
            &phone,
            Tween::new().scale(1.02).ease("none").scroll_trigger(
                TriggerSpec::on_element(&phone, "top 80%").end("bottom 20%").scrub(0.3),
            ),
        );
    }
}

const STAGGER_GRIDS: [(&str, &str); 3] = [
    (".scan-categories", ".scan-category"),
    (".sources-grid", ".source-card"),
    (".compare-products", ".compare-btn"),
];

fn stagger_grids(stage: &mut Stage) {
    let engine = stage.engine;
    for (grid, item) in STAGGER_GRIDS {
        let Some(grid) = dom::query(grid) else {
            continue;
        };
        let items = dom::query_all_in(&grid, item);
        if items.is_empty() {
            continue;
        }
        engine.set(&items, Tween::new().y(40.0).opacity(0.0).scale(0.95));
        stage.on_enter(TriggerSpec::on_element(&grid, "top 85%").once(), move || {
            engine.to(
                &items,
                Tween::new()
                    .y(0.0)
                    .opacity(1.0)
                    .scale(1.0)
                    .duration(0.6)
                    .stagger(Stagger::Spread { amount: 0.4, from: "start" })
                    .ease("power3.out"),
            );
        });
    }
}

fn section_backgrounds(stage: &mut Stage) {
    let engine = stage.engine;
    for section in dom::query_all(".pain-points, .product-compare, .data-sources") {
        engine.to(
            &section,
            Tween::new()
                .background_position("50% 100%")
                .ease("none")
                .scroll_trigger(section_scrub(&section, 1.0)),
        );
    }
}

fn flip_cards_entrance(stage: &mut Stage) {
    let engine = stage.engine;
    let Some(section) = dom::query(".pain-points-interactive") else {
        return;
    };
    let cards = dom::query_all_in(&section, ".pain-card");
    engine.set(&cards, Tween::new().y(60.0).opacity(0.0).rotate_x(-10.0));
    let revealed = cards.clone();
    stage.on_enter(TriggerSpec::on_element(&section, "top 80%").once(), move || {
        engine.to(
            &revealed,
            Tween::new()
                .y(0.0)
                .opacity(1.0)
                .rotate_x(0.0)
                .duration(0.8)
                .stagger(Stagger::Each(0.1))
                .ease("power3.out"),
        );
    });

    if engine.is_animated() {
        for card in cards.iter().filter(|card| !card.class_list().contains("cta-card")) {
            stage.hover(
                card,
                Tween::new().y(-8.0).duration(0.3).ease("power2.out"),
                Tween::new().y(0.0).duration(0.3).ease("power2.out"),
            );
        }
    }

    if let Some(cta) = dom::query_in(&section, ".cta-card") {
        engine.to(
            &cta,
            Tween::new()
                .box_shadow("0 0 40px rgba(15, 61, 46, 0.3)")
                .duration(1.5)
                .ease("sine.inOut")
                .forever(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glass_cards_lag_progressively() {
        assert!((glass_card_scrub(0) - 0.2).abs() < 1e-12);
        assert!((glass_card_scrub(3) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn card_depth_cycles_every_three() {
        assert!((card_depth_speed(0) - 0.1).abs() < 1e-12);
        assert!((card_depth_speed(2) - 0.2).abs() < 1e-12);
        assert_eq!(card_depth_speed(4), card_depth_speed(1));
    }

    #[test]
    fn row_delay_restarts_each_row() {
        assert_eq!(row_delay(0), 0.0);
        assert!((row_delay(4) - 0.32).abs() < 1e-12);
        assert_eq!(row_delay(5), 0.0);
    }

    #[test]
    fn magnetic_pull_is_relative_to_centre() {
        let rect = (100.0, 50.0, 200.0, 40.0);
        assert_eq!(magnetic_pull((200.0, 70.0), rect, 0.3), (0.0, 0.0));
        let (x, y) = magnetic_pull((300.0, 90.0), rect, 0.3);
        assert!((x - 30.0).abs() < 1e-9);
        assert!((y - 6.0).abs() < 1e-9);
    }

    #[test]
    fn tilt_follows_pointer_quadrant() {
        let rect = (0.0, 0.0, 100.0, 100.0);
        assert_eq!(tilt_angles((50.0, 50.0), rect), (0.0, 0.0));
        assert_eq!(tilt_angles((100.0, 0.0), rect), (5.0, 5.0));
        assert_eq!(tilt_angles((0.0, 100.0), rect), (-5.0, -5.0));
        assert_eq!(tilt_angles((10.0, 10.0), (0.0, 0.0, 0.0, 0.0)), (0.0, 0.0));
    }

    #[test]
    fn track_travel_never_negative() {
        assert_eq!(track_travel(3000.0, 1280.0), 1720.0);
        assert_eq!(track_travel(800.0, 1280.0), 0.0);
    }

    #[test]
    fn navbar_shows_on_scroll_up_and_hides_deep_down() {
        assert_eq!(navbar_hidden(-1.0, 900.0), Some(false));
        assert_eq!(navbar_hidden(1.0, 250.0), Some(true));
        assert_eq!(navbar_hidden(1.0, 150.0), None);
    }

    #[test]
    fn every_group_has_a_selector() {
        for group in Group::ALL {
            assert!(!group.selector().is_empty());
        }
        // Carousel cards are positioned by the carousel alone.
        assert!(!Group::RevealCards.selector().contains("domain-card"));
        assert!(!Group::TiltCards.selector().contains("domain-card"));
    }
}
