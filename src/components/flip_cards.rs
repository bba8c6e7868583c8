use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq)]
pub struct PainPoint {
    pub icon: &'static str,
    pub problem: &'static str,
    pub detail: &'static str,
    pub answer: &'static str,
}

pub const PAIN_POINTS: [PainPoint; 3] = [
    PainPoint {
        icon: "🧾",
        problem: "Labels you can't read",
        detail: "Forty ingredients, half of them codes.",
        answer: "Every additive decoded in plain language, with what it does and why it's there.",
    },
    PainPoint {
        icon: "🍬",
        problem: "Hidden sugar",
        detail: "It hides under more than sixty names.",
        answer: "All forms of added sugar are totalled into one number you can compare.",
    },
    PainPoint {
        icon: "🤔",
        problem: "Healthy-looking packaging",
        detail: "Green boxes and 'natural' claims prove nothing.",
        answer: "One score from 0 to 100 built from what is actually inside.",
    },
];

/// Which cards show their back face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlipState {
    flipped: Vec<bool>,
    /// The first card is flipped by the demo, not by the visitor.
    demo: bool,
}

impl FlipState {
    pub fn new(len: usize) -> Self {
        Self {
            flipped: vec![false; len],
            demo: false,
        }
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }
}

pub enum FlipAction {
    Toggle(usize),
    DemoFlip,
    DemoUnflip,
}

impl Reducible for FlipState {
    type Action = FlipAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FlipAction::Toggle(index) => {
                let Some(card) = next.flipped.get_mut(index) else {
                    return self;
                };
                *card = !*card;
                if index == 0 {
                    next.demo = false;
                }
            }
            FlipAction::DemoFlip => {
                if self.flipped.first() != Some(&false) {
                    return self;
                }
                next.flipped[0] = true;
                next.demo = true;
            }
            FlipAction::DemoUnflip => {
                if !self.demo {
                    return self;
                }
                next.flipped[0] = false;
                next.demo = false;
            }
        }
        next.into()
    }
}

#[function_component(PainCards)]
pub fn pain_cards() -> Html {
    let state = use_reducer(|| FlipState::new(PAIN_POINTS.len()));
    let timers = use_mut_ref(Vec::<Timeout>::new);

    // Show visitors the cards can be turned over.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let pending = timers.clone();
                let first = Timeout::new(config::FLIP_DEMO_DELAY_MS, move || {
                    debug!("flip cards: demo flip");
                    dispatcher.dispatch(FlipAction::DemoFlip);
                    let dispatcher = dispatcher.clone();
                    pending.borrow_mut().push(Timeout::new(config::FLIP_DEMO_HOLD_MS, move || {
                        dispatcher.dispatch(FlipAction::DemoUnflip)
                    }));
                });
                timers.borrow_mut().push(first);
                move || timers.borrow_mut().clear()
            },
            (),
        );
    }

    html! {
        <section class="pain-points-interactive" id="why">
            <div class="container">
                <p class="eyebrow">{"The problem"}</p>
                <h2 class="section-title">{"Grocery shopping shouldn't need a chemistry degree"}</h2>
                <div class="pain-cards">
                    {
                        PAIN_POINTS.iter().enumerate().map(|(i, point)| {
                            let flipped = state.is_flipped(i);
                            let onclick = {
                                let state = state.clone();
                                Callback::from(move |_: MouseEvent| state.dispatch(FlipAction::Toggle(i)))
                            };
                            let onkeydown = {
                                let state = state.clone();
                                Callback::from(move |e: KeyboardEvent| {
                                    if e.key() == "Enter" || e.key() == " " {
                                        e.prevent_default();
                                        state.dispatch(FlipAction::Toggle(i));
                                    }
                                })
                            };
                            html! {
                                <div
                                    key={i}
                                    class={classes!("pain-card", flipped.then_some("flipped"))}
                                    tabindex="0"
                                    role="button"
                                    aria-pressed={flipped.to_string()}
                                    {onclick}
                                    {onkeydown}
                                >
                                    <div class="pain-card-inner">
                                        <div class="pain-card-front">
                                            <span class="pain-icon">{point.icon}</span>
                                            <h3>{point.problem}</h3>
                                            <p>{point.detail}</p>
                                            <span class="flip-hint">{"Tap to see the fix"}</span>
                                        </div>
                                        <div class="pain-card-back">
                                            <h3>{"With Yammoing"}</h3>
                                            <p>{point.answer}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <div class="pain-card cta-card">
                        <h3>{"Scan your first product"}</h3>
                        <p>{"Free on iOS and Android."}</p>
                        <a class="btn btn-primary" href="#download">{"Get the app"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: FlipState, action: FlipAction) -> FlipState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn toggle_flips_only_that_card() {
        let state = reduce(FlipState::new(3), FlipAction::Toggle(1));
        assert!(state.is_flipped(1));
        assert!(!state.is_flipped(0));
        let state = reduce(state, FlipAction::Toggle(1));
        assert!(!state.is_flipped(1));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let state = Rc::new(FlipState::new(2));
        let next = state.clone().reduce(FlipAction::Toggle(7));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn demo_flips_first_card_and_back() {
        let state = reduce(FlipState::new(3), FlipAction::DemoFlip);
        assert!(state.is_flipped(0));
        let state = reduce(state, FlipAction::DemoUnflip);
        assert!(!state.is_flipped(0));
    }

    #[test]
    fn demo_leaves_a_visitor_flipped_card_alone() {
        let state = reduce(FlipState::new(3), FlipAction::Toggle(0));
        let state = reduce(state, FlipAction::DemoFlip);
        let state = reduce(state, FlipAction::DemoUnflip);
        assert!(state.is_flipped(0));
    }

    #[test]
    fn visitor_takes_over_from_the_demo() {
        let state = reduce(FlipState::new(3), FlipAction::DemoFlip);
        // Clicking during the demo turns the card back; the demo's unflip
        // must not fight it afterwards.
        let state = reduce(state, FlipAction::Toggle(0));
        let state = reduce(state, FlipAction::Toggle(0));
        let state = reduce(state, FlipAction::DemoUnflip);
        assert!(state.is_flipped(0));
    }

    #[test]
    fn demo_unflips_after_another_card_is_clicked() {
        let state = reduce(FlipState::new(3), FlipAction::DemoFlip);
        let state = reduce(state, FlipAction::Toggle(2));
        let state = reduce(state, FlipAction::DemoUnflip);
        assert!(!state.is_flipped(0));
        assert!(state.is_flipped(2));
    }

    #[test]
    fn demo_on_empty_deck_does_nothing() {
        let state = Rc::new(FlipState::new(0));
        let next = state.clone().reduce(FlipAction::DemoFlip);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
