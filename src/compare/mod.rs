//! Side-by-side product comparison: scoring rules and selection state.

use std::f64::consts::PI;
use std::rc::Rc;

use yew::prelude::*;

pub mod catalog;
pub mod view;

pub use view::ComparisonTool;

use catalog::Product;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

/// Colour band of a score ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Moderate,
    Poor,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        if score >= 70 {
            Self::Good
        } else if score >= 40 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }
}

/// Extra class for a sub-metric bar; `None` keeps the default fill.
pub fn bar_class(score: u8) -> Option<&'static str> {
    if score < 40 {
        Some("poor")
    } else if score < 60 {
        Some("moderate")
    } else {
        None
    }
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// `stroke-dashoffset` that leaves `score` percent of the ring drawn.
pub fn ring_offset(score: f64, radius: f64) -> f64 {
    let c = circumference(radius);
    c - (score / 100.0) * c
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Winner { name: &'static str, margin: u8 },
    Tie,
}

impl Verdict {
    pub fn between(a: &Product, b: &Product) -> Self {
        if a.score > b.score {
            Self::Winner { name: a.name, margin: a.score - b.score }
        } else if b.score > a.score {
            Self::Winner { name: b.name, margin: b.score - a.score }
        } else {
            Self::Tie
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Winner { name, .. } => *name,
            Self::Tie => "It's a tie!",
        }
    }

    pub fn reason(&self) -> String {
        match self {
            Self::Winner { margin, .. } => format!(
                "Scores {} points higher with better nutrient density, less processing, and better ingredients overall.",
                margin
            ),
            Self::Tie => "Both products have the same health score.".to_string(),
        }
    }
}

/// The two products currently on the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub a: &'static Product,
    pub b: &'static Product,
}

impl Selection {
    pub fn get(&self, side: Side) -> &'static Product {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::between(self.a, self.b)
    }
}

impl Default for Selection {
    fn default() -> Self {
        let pick = |key, fallback| catalog::lookup(key).unwrap_or(&catalog::CATALOG[fallback]);
        Self {
            a: pick(catalog::DEFAULT_A, 0),
            b: pick(catalog::DEFAULT_B, 1),
        }
    }
}

pub struct Select {
    pub side: Side,
    pub key: String,
}

impl Reducible for Selection {
    type Action = Select;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Some(product) = catalog::lookup(&action.key) else {
            log::debug!("compare: unknown product {}", action.key);
            return self;
        };
        if self.get(action.side).key == product.key {
            return self;
        }
        let mut next = (*self).clone();
        match action.side {
            Side::A => next.a = product,
            Side::B => next.b = product,
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::catalog::{lookup, DEFAULT_A, DEFAULT_B};
    use super::*;

    fn with_score(score: u8) -> Product {
        Product { score, ..catalog::CATALOG[0] }
    }

    #[test]
    fn ring_bands() {
        assert_eq!(ScoreBand::of(82), ScoreBand::Good);
        assert_eq!(ScoreBand::of(70), ScoreBand::Good);
        assert_eq!(ScoreBand::of(69), ScoreBand::Moderate);
        assert_eq!(ScoreBand::of(40), ScoreBand::Moderate);
        assert_eq!(ScoreBand::of(39), ScoreBand::Poor);
        assert_eq!(ScoreBand::of(34), ScoreBand::Poor);
        assert_eq!(ScoreBand::of(82).class(), "good");
    }

    #[test]
    fn bar_classes() {
        assert_eq!(bar_class(39), Some("poor"));
        assert_eq!(bar_class(40), Some("moderate"));
        assert_eq!(bar_class(59), Some("moderate"));
        assert_eq!(bar_class(60), None);
        assert_eq!(bar_class(95), None);
    }

    #[test]
    fn ring_offset_is_remaining_arc() {
        let c = circumference(42.0);
        assert!((c - 263.893_782_9).abs() < 1e-6);
        assert!((ring_offset(0.0, 42.0) - c).abs() < 1e-9);
        assert!(ring_offset(100.0, 42.0).abs() < 1e-9);
        assert!((ring_offset(82.0, 42.0) - c * 0.18).abs() < 1e-9);
        assert!((ring_offset(87.0, 65.0) - 53.092_915).abs() < 1e-5);
    }

    #[test]
    fn higher_score_wins_with_margin() {
        let verdict = Verdict::between(&with_score(82), &with_score(34));
        assert_eq!(verdict, Verdict::Winner { name: "Whole Grain Oats", margin: 48 });
        assert!(verdict.reason().contains("48 points higher"));

        let a = lookup(DEFAULT_B).unwrap();
        let b = lookup("yogurt-greek").unwrap();
        assert_eq!(Verdict::between(a, b).headline(), "Greek Yogurt");
    }

    #[test]
    fn equal_scores_tie_without_margin() {
        let verdict = Verdict::between(&with_score(50), &with_score(50));
        assert_eq!(verdict, Verdict::Tie);
        assert_eq!(verdict.headline(), "It's a tie!");
        assert_eq!(verdict.reason(), "Both products have the same health score.");
        assert!(!verdict.reason().chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.a.key, DEFAULT_A);
        assert_eq!(selection.b.key, DEFAULT_B);
    }

    #[test]
    fn selecting_unknown_key_is_a_no_op() {
        let selection = Rc::new(Selection::default());
        let next = selection.clone().reduce(Select { side: Side::A, key: "nope".into() });
        assert!(Rc::ptr_eq(&selection, &next));
    }

    #[test]
    fn selecting_same_key_twice_settles() {
        let selection = Rc::new(Selection::default());
        let once = selection.reduce(Select { side: Side::B, key: "drink-soda".into() });
        let twice = once.clone().reduce(Select { side: Side::B, key: "drink-soda".into() });
        assert!(Rc::ptr_eq(&once, &twice));
        assert_eq!(twice.b.key, "drink-soda");
        assert_eq!(twice.a.key, DEFAULT_A);
    }
}
