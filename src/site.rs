//! Page-wide behaviour that is not tied to a single component: in-page
//! anchors, card hover lift, float classes and a few log lines.

use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{window, Element, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::dom::{self, EventSubscription};

/// Document offset to scroll to so `element_top` lands under the navbar.
pub fn anchor_scroll_top(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - config::NAVBAR_OFFSET).max(0.0)
}

/// Float animation class for the `index`-th glass card.
pub fn float_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "float-animation"
    } else {
        "float-animation-delayed"
    }
}

/// Milliseconds from navigation start to the end of the load event.
pub fn load_duration(navigation_start: f64, load_end: f64) -> Option<u64> {
    if load_end <= 0.0 || load_end < navigation_start {
        return None;
    }
    Some((load_end - navigation_start) as u64)
}

/// Smoothly scrolls to the element matching `href` (`"#section"`).
pub fn scroll_to_anchor(href: &str) -> bool {
    if href.len() < 2 || !href.starts_with('#') {
        return false;
    }
    let (Some(window), Some(target)) = (window(), dom::query(href)) else {
        debug!("anchor: no target for {}", href);
        return false;
    };
    let top = anchor_scroll_top(target.get_bounding_client_rect().top(), dom::scroll_y());
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn log_welcome() {
    info!("Yammoing");
    info!("Your Personal Health Detective");
    info!("Interested in joining our team? Email us at hello@yammoing.com");
}

fn log_page_load() {
    let Some(performance) = window().and_then(|w| w.performance()) else {
        return;
    };
    let timing = performance.timing();
    match load_duration(timing.navigation_start(), timing.load_event_end()) {
        Some(ms) => info!("Page loaded in {}ms", ms),
        None => debug!("page load timing unavailable"),
    }
}

/// Listeners bound once the landing markup is in the document.
pub struct SiteBehaviour {
    _subscriptions: Vec<EventSubscription>,
}

impl SiteBehaviour {
    pub fn bind() -> Self {
        let mut subscriptions = Vec::new();

        for anchor in dom::query_all("a[href^=\"#\"]") {
            let link = anchor.clone();
            subscriptions.extend(EventSubscription::new(&anchor, "click", move |event| {
                if let Some(href) = link.get_attribute("href") {
                    if scroll_to_anchor(&href) {
                        event.prevent_default();
                    }
                }
            }));
        }

        for card in dom::query_all(".feature-card") {
            subscriptions.extend(lift_on_hover(&card));
        }

        for (i, card) in dom::query_all(".glass-card").iter().enumerate() {
            dom::add_class(card, float_class(i));
        }

        for button in dom::query_all(".btn-download, .btn-primary") {
            let label = button.text_content().unwrap_or_default();
            subscriptions.extend(EventSubscription::new(&button, "click", move |_| {
                info!("Download button clicked ({})", label.trim());
            }));
        }

        let loaded = dom::document().map_or(false, |d| d.ready_state() == "complete");
        if loaded {
            log_page_load();
        } else {
            // loadEventEnd is only filled in after the load handlers return.
            subscriptions.extend(EventSubscription::on_window("load", |_| {
                Timeout::new(0, log_page_load).forget();
            }));
        }

        debug!("site: {} listeners bound", subscriptions.len());
        Self {
            _subscriptions: subscriptions,
        }
    }
}

fn lift_on_hover(card: &Element) -> Vec<EventSubscription> {
    let (raised, settled) = (card.clone(), card.clone());
    [
        EventSubscription::new(card, "mouseenter", move |_| {
            dom::set_style(&raised, "transform", "translateY(-8px)");
        }),
        EventSubscription::new(card, "mouseleave", move |_| {
            dom::set_style(&settled, "transform", "translateY(-4px)");
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_land_below_the_navbar() {
        assert_eq!(anchor_scroll_top(500.0, 1000.0), 1420.0);
        assert_eq!(anchor_scroll_top(30.0, 0.0), 0.0);
    }

    #[test]
    fn glass_cards_alternate_float_classes() {
        let classes: Vec<_> = (0..4).map(float_class).collect();
        assert_eq!(
            classes,
            ["float-animation", "float-animation-delayed", "float-animation", "float-animation-delayed"]
        );
    }

    #[test]
    fn load_duration_needs_a_finished_load() {
        assert_eq!(load_duration(1_000.0, 0.0), None);
        assert_eq!(load_duration(1_000.0, 2_250.0), Some(1_250));
        assert_eq!(load_duration(3_000.0, 2_000.0), None);
    }
}
