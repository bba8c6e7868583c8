//! Circular card stack with autoplay.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::reveal::use_in_view;

/// `n mod m` folded into `[0, m)`.
pub fn wrap_index(n: isize, m: usize) -> usize {
    if m == 0 {
        return 0;
    }
    n.rem_euclid(m as isize) as usize
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    pub fn go_to(&mut self, index: isize) {
        if self.len > 0 {
            self.index = wrap_index(index, self.len);
        }
    }

    fn step(&mut self, delta: isize) {
        self.go_to(self.index as isize + delta);
    }

    /// Signed circular distance of `position` from the current item,
    /// within `[-len/2, len/2]`.
    pub fn offset(&self, position: usize) -> isize {
        if self.len == 0 {
            return 0;
        }
        let half = (self.len / 2) as isize;
        let mut d = position as isize - self.index as isize;
        if d > half {
            d -= self.len as isize;
        }
        if d < -half {
            d += self.len as isize;
        }
        d
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.is_empty() {
            return self;
        }
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::GoTo(index) => next.go_to(index as isize),
        }
        next.into()
    }
}

/// Where an item sits for a given offset from the current one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotTransform {
    pub x: f64,
    pub scale: f64,
    pub rotate_y: f64,
    pub blur: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl SlotTransform {
    pub fn for_offset(d: isize) -> Self {
        let ad = d.unsigned_abs() as f64;
        if d.unsigned_abs() > 2 {
            return Self {
                x: if d > 0 { 300.0 } else { -300.0 },
                scale: 0.85,
                rotate_y: 0.0,
                blur: 12.0,
                opacity: 0.0,
                z_index: 0,
            };
        }
        Self {
            x: d as f64 * 180.0,
            scale: 1.0 - ad * 0.1,
            rotate_y: d as f64 * -12.0,
            blur: ad * 2.0,
            opacity: if d == 0 { 1.0 } else { (1.0 - ad * 0.4).max(0.3) },
            z_index: 10 - ad as i32,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateX({}px) scale({}) rotateY({}deg); filter: blur({}px); opacity: {}; z-index: {};",
            self.x, self.scale, self.rotate_y, self.blur, self.opacity, self.z_index
        )
    }
}

#[derive(Clone, PartialEq)]
pub struct StackItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub items: Vec<StackItem>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = use_reducer({
        let len = props.items.len();
        move || CarouselState::new(len)
    });
    let autoplay = use_mut_ref(|| None::<Interval>);
    // The stack rewrites its card classes on every step, so it owns the
    // card reveal markers too.
    let root = use_node_ref();
    let revealed = use_in_view(root.clone(), config::CARD_REVEAL_THRESHOLD);

    let arm = {
        let autoplay = autoplay.clone();
        let dispatcher = state.dispatcher();
        let empty = state.is_empty();
        move || {
            if empty {
                return;
            }
            let dispatcher = dispatcher.clone();
            // Replacing the slot drops (and clears) any interval still running.
            *autoplay.borrow_mut() = Some(Interval::new(config::CAROUSEL_AUTOPLAY_MS, move || {
                dispatcher.dispatch(CarouselAction::Next)
            }));
        }
    };

    {
        let arm = arm.clone();
        let autoplay = autoplay.clone();
        use_effect_with_deps(
            move |_| {
                arm();
                move || {
                    autoplay.borrow_mut().take();
                }
            },
            (),
        );
    }

    if state.is_empty() {
        debug!("carousel: no items, staying inert");
        return html! {};
    }

    let onmouseenter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            autoplay.borrow_mut().take();
        })
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| arm());

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    html! {
        <div class="yam-carousel" ref={root}>
            <div class="yam-stack" data-yam-stack="" {onmouseenter} {onmouseleave}>
                <div class="yam-stack__track">
                    {
                        props.items.iter().enumerate().map(|(position, item)| {
                            let d = state.offset(position);
                            let slot = SlotTransform::for_offset(d);
                            html! {
                                <article
                                    key={position}
                                    class={classes!(
                                        "yam-stack__item",
                                        "domain-card",
                                        "reveal",
                                        revealed.then_some("is-in"),
                                        (d == 0).then_some("is-active"),
                                    )}
                                    style={slot.style()}
                                    aria-hidden={(d != 0).to_string()}
                                >
                                    <div class="domain-icon">{item.icon}</div>
                                    <h3>{item.title}</h3>
                                    <p>{item.body}</p>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <button type="button" class="yam-stack__btn yam-stack__btn--prev" aria-label="Previous" onclick={on_prev}>
                    {"‹"}
                </button>
                <button type="button" class="yam-stack__btn yam-stack__btn--next" aria-label="Next" onclick={on_next}>
                    {"›"}
                </button>
            </div>
            <div class="yam-dots" data-yam-dots="">
                {
                    (0..state.len()).map(|i| {
                        let onclick = {
                            let state = state.clone();
                            Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(i)))
                        };
                        html! {
                            <button
                                key={i}
                                type="button"
                                class={classes!("yam-dot", (i == state.index()).then_some("is-active"))}
                                aria-label={format!("Show card {}", i + 1)}
                                {onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                    .yam-stack {
                        position: relative;
                        height: 360px;
                        perspective: 1200px;
                    }
                    .yam-stack__item {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        width: 280px;
                        margin-left: -140px;
                        transition: transform 0.7s cubic-bezier(0.215, 0.61, 0.355, 1),
                            opacity 0.7s ease, filter 0.7s ease;
                    }
                    .yam-dot.is-active {
                        background: var(--forest);
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_in_range_for_any_sequence() {
        for len in 1..=7 {
            let mut state = CarouselState::new(len);
            let moves: [isize; 9] = [1, -1, -1, -1, 5, -13, 2, 40, -7];
            for m in moves {
                match m {
                    1 => state.next(),
                    -1 => state.prev(),
                    k => state.go_to(k),
                }
                assert!(state.index() < len, "len {len} index {}", state.index());
            }
        }
    }

    #[test]
    fn full_lap_returns_to_start() {
        let mut state = CarouselState::new(5);
        state.go_to(3);
        for _ in 0..5 {
            state.next();
        }
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut state = CarouselState::new(4);
        state.prev();
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn offsets_are_symmetric_and_bounded() {
        for len in 1..=8usize {
            let half = (len / 2) as isize;
            for current in 0..len {
                let mut state = CarouselState::new(len);
                state.go_to(current as isize);
                let mut active = 0;
                for position in 0..len {
                    let d = state.offset(position);
                    assert!(-half <= d && d <= half, "len {len} i {current} p {position} d {d}");
                    if d == 0 {
                        active += 1;
                    }
                }
                assert_eq!(active, 1);
            }
        }
    }

    #[test]
    fn offset_wraps_around_the_ends() {
        let mut state = CarouselState::new(6);
        state.go_to(0);
        assert_eq!(state.offset(5), -1);
        assert_eq!(state.offset(1), 1);
        assert_eq!(state.offset(3), 3);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut state = CarouselState::new(0);
        state.next();
        state.prev();
        state.go_to(4);
        assert_eq!(state.index(), 0);
        assert_eq!(state.offset(0), 0);
    }

    #[test]
    fn reducer_ignores_actions_without_items() {
        let state = Rc::new(CarouselState::new(0));
        let reduced = state.clone().reduce(CarouselAction::Next);
        assert!(Rc::ptr_eq(&state, &reduced));
    }

    #[test]
    fn reducer_jumps_and_wraps() {
        let state = Rc::new(CarouselState::new(3));
        let state = state.reduce(CarouselAction::GoTo(2));
        assert_eq!(state.index(), 2);
        let state = state.reduce(CarouselAction::Next);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn slot_transform_near_items() {
        let centre = SlotTransform::for_offset(0);
        assert_eq!(centre.x, 0.0);
        assert_eq!(centre.scale, 1.0);
        assert_eq!(centre.opacity, 1.0);
        assert_eq!(centre.z_index, 10);

        let right = SlotTransform::for_offset(1);
        assert_eq!(right.x, 180.0);
        assert!((right.scale - 0.9).abs() < 1e-12);
        assert_eq!(right.rotate_y, -12.0);
        assert_eq!(right.blur, 2.0);
        assert!((right.opacity - 0.6).abs() < 1e-12);
        assert_eq!(right.z_index, 9);

        let far_left = SlotTransform::for_offset(-2);
        assert_eq!(far_left.x, -360.0);
        assert_eq!(far_left.rotate_y, 24.0);
        assert_eq!(far_left.opacity, 0.3);
        assert_eq!(far_left.z_index, 8);
    }

    #[test]
    fn slot_transform_pushes_distant_items_off_stage() {
        let right = SlotTransform::for_offset(3);
        assert_eq!(right.x, 300.0);
        assert_eq!(right.opacity, 0.0);
        assert_eq!(right.z_index, 0);
        assert_eq!(SlotTransform::for_offset(-3).x, -300.0);
    }
}
