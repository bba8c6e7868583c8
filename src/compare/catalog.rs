//! The products the comparison tool can show.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Good,
    Moderate,
    Bad,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Bad => "bad",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub text: &'static str,
    pub severity: Severity,
}

const fn tag(text: &'static str, severity: Severity) -> Highlight {
    Highlight { text, severity }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Nutrient,
    Processing,
    Additives,
    Sugar,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Nutrient,
        Metric::Processing,
        Metric::Additives,
        Metric::Sugar,
    ];

    /// Prefix of the bar element ids, e.g. `nutrient-a`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Nutrient => "nutrient",
            Self::Processing => "processing",
            Self::Additives => "additives",
            Self::Sugar => "sugar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Nutrient => "Nutrient Density",
            Self::Processing => "Processing Level",
            Self::Additives => "Additive Load",
            Self::Sugar => "Sugar Content",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubScores {
    pub nutrient: u8,
    pub processing: u8,
    pub additives: u8,
    pub sugar: u8,
}

impl SubScores {
    pub fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Nutrient => self.nutrient,
            Metric::Processing => self.processing,
            Metric::Additives => self.additives,
            Metric::Sugar => self.sugar,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub key: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    pub icon: &'static str,
    pub score: u8,
    pub label: &'static str,
    /// Extra class on the label; empty for the default styling.
    pub label_class: &'static str,
    pub metrics: SubScores,
    pub highlights: &'static [Highlight],
}

pub const DEFAULT_A: &str = "cereal-healthy";
pub const DEFAULT_B: &str = "cereal-sugary";

pub static CATALOG: [Product; 4] = [
    Product {
        key: "cereal-healthy",
        name: "Whole Grain Oats",
        brand: "Nature's Best",
        icon: "🥣",
        score: 82,
        label: "Good Choice",
        label_class: "",
        metrics: SubScores { nutrient: 85, processing: 75, additives: 90, sugar: 70 },
        highlights: &[
            tag("High Fiber", Severity::Good),
            tag("Whole Grains", Severity::Good),
            tag("Added Sugar", Severity::Moderate),
        ],
    },
    Product {
        key: "cereal-sugary",
        name: "Frosted Flakes",
        brand: "Kellogg's",
        icon: "🥣",
        score: 34,
        label: "Poor Choice",
        label_class: "poor",
        metrics: SubScores { nutrient: 25, processing: 30, additives: 55, sugar: 20 },
        highlights: &[
            tag("High Sugar", Severity::Bad),
            tag("Ultra-Processed", Severity::Bad),
            tag("Fortified", Severity::Moderate),
        ],
    },
    Product {
        key: "yogurt-greek",
        name: "Greek Yogurt",
        brand: "Fage",
        icon: "🥛",
        score: 91,
        label: "Excellent Choice",
        label_class: "",
        metrics: SubScores { nutrient: 95, processing: 85, additives: 98, sugar: 80 },
        highlights: &[
            tag("High Protein", Severity::Good),
            tag("Probiotics", Severity::Good),
            tag("Low Sugar", Severity::Good),
        ],
    },
    Product {
        key: "drink-soda",
        name: "Cola Soda",
        brand: "Generic",
        icon: "🥤",
        score: 12,
        label: "Very Poor",
        label_class: "poor",
        metrics: SubScores { nutrient: 5, processing: 15, additives: 40, sugar: 5 },
        highlights: &[
            tag("Very High Sugar", Severity::Bad),
            tag("No Nutrients", Severity::Bad),
            tag("Artificial Colors", Severity::Bad),
        ],
    },
];

pub fn lookup(key: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|product| product.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_the_catalog() {
        assert_eq!(lookup(DEFAULT_A).map(|p| p.score), Some(82));
        assert_eq!(lookup(DEFAULT_B).map(|p| p.score), Some(34));
    }

    #[test]
    fn unknown_keys_miss() {
        assert!(lookup("drink-water").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn keys_are_unique_and_scores_in_range() {
        for (i, product) in CATALOG.iter().enumerate() {
            assert!(product.score <= 100);
            for metric in Metric::ALL {
                assert!(product.metrics.get(metric) <= 100);
            }
            assert!(CATALOG[i + 1..].iter().all(|other| other.key != product.key));
        }
    }
}
