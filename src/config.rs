use log::Level;
use serde::Serialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Reveal observers
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const CARD_REVEAL_THRESHOLD: f64 = 0.1;
pub const ENHANCED_REVEAL_THRESHOLD: f64 = 0.15;
pub const PAIN_POINTS_THRESHOLD: f64 = 0.2;
pub const CARD_STAGGER_MS: u32 = 50;
pub const DETAIL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Counters and score rings
pub const HERO_SCORE: i64 = 87;
pub const HERO_SCORE_MS: f64 = 2500.0;
pub const HERO_RING_RADIUS: f64 = 65.0;
pub const SCORE_DISPLAY_THRESHOLD: f64 = 0.5;
pub const HERO_STATS: [i64; 3] = [2_000_000, 1_000, 9];
pub const HERO_STATS_MS: f64 = 2000.0;
pub const COMPARE_RING_RADIUS: f64 = 42.0;
pub const COMPARE_SCORE_MS: f64 = 500.0;
pub const COMPARE_THRESHOLD: f64 = 0.3;
pub const COMPARE_RING_DELAY_MS: u32 = 300;
pub const COMPARE_BAR_DELAY_MS: u32 = 50;

// Carousel
pub const CAROUSEL_AUTOPLAY_MS: u32 = 5000;

// Page behaviour
pub const NAVBAR_OFFSET: f64 = 80.0;
pub const NAVBAR_SHADOW_AFTER: f64 = 100.0;
pub const SCROLL_INDICATOR_HIDE_AFTER: f64 = 100.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const FLIP_DEMO_DELAY_MS: u32 = 3000;
pub const FLIP_DEMO_HOLD_MS: u32 = 2500;

/// Options handed to the Lenis constructor. The easing curve is attached
/// separately because it has to be a JS function.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SmoothScrollOptions {
    pub lerp: f64,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    pub infinite: bool,
    pub duration: f64,
    pub smooth_touch: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            lerp: 0.12,
            smooth_wheel: true,
            wheel_multiplier: 1.2,
            touch_multiplier: 1.5,
            infinite: false,
            duration: 1.1,
            smooth_touch: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_scroll_options_use_lenis_field_names() {
        let json = serde_json::to_value(SmoothScrollOptions::default()).unwrap();
        assert_eq!(json["lerp"], 0.12);
        assert_eq!(json["smoothWheel"], true);
        assert_eq!(json["wheelMultiplier"], 1.2);
        assert_eq!(json["touchMultiplier"], 1.5);
        assert_eq!(json["smoothTouch"], true);
        assert_eq!(json["infinite"], false);
    }
}
