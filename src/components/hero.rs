use yew::prelude::*;

use crate::compare::{circumference, ring_offset};
use crate::config;
use crate::counter::{format_count, use_counter};
use crate::reveal::use_in_view;

#[derive(Properties, PartialEq)]
pub struct SplitTitleProps {
    pub text: AttrValue,
}

/// Headline split into one span per letter for the staggered entrance.
/// Letters stay grouped per word so lines only break between words.
#[function_component(SplitTitle)]
pub fn split_title(props: &SplitTitleProps) -> Html {
    let words: Vec<&str> = props.text.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    html! {
        <h1 class="hero-title" aria-label={props.text.clone()}>
            {
                words.iter().enumerate().map(|(i, word)| html! {
                    <>
                        <span class="word" aria-hidden="true">
                            { for word.chars().map(|c| html! { <span class="char">{c}</span> }) }
                        </span>
                        { if i < last { html! { " " } } else { html! {} } }
                    </>
                }).collect::<Html>()
            }
        </h1>
    }
}

#[function_component(ScoreDisplay)]
pub fn score_display() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), config::SCORE_DISPLAY_THRESHOLD);
    let score = use_counter(0, config::HERO_SCORE, config::HERO_SCORE_MS, in_view);

    let c = circumference(config::HERO_RING_RADIUS);
    let offset = if in_view {
        ring_offset(config::HERO_SCORE as f64, config::HERO_RING_RADIUS)
    } else {
        c
    };

    html! {
        <div class="score-display" ref={node}>
            <div class="score-circle">
                <svg viewBox="0 0 160 160">
                    <circle class="bg-circle" cx="80" cy="80" r="65" />
                    <circle
                        class="progress-circle"
                        cx="80"
                        cy="80"
                        r="65"
                        style={format!(
                            "stroke-dasharray: {c} {c}; stroke-dashoffset: {offset}; transition: stroke-dashoffset 2s ease-out;"
                        )}
                    />
                </svg>
                <div class="score-value">
                    <span class="score-number">{score}</span>
                    <span class="score-max">{"/100"}</span>
                </div>
            </div>
            <p class="score-label">{"Health score"}</p>
        </div>
    }
}

const HERO_STAT_LABELS: [&str; 3] = ["Products decoded", "Ingredients tracked", "Health domains"];

#[function_component(HeroStats)]
pub fn hero_stats() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), config::SCORE_DISPLAY_THRESHOLD);

    html! {
        <div class="hero-stats" ref={node}>
            {
                config::HERO_STATS.iter().zip(HERO_STAT_LABELS).map(|(&target, label)| html! {
                    <StatCounter {target} {label} enabled={in_view} />
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    target: i64,
    label: &'static str,
    enabled: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_counter(0, props.target, config::HERO_STATS_MS, props.enabled);
    html! {
        <div class="stat">
            <span class="stat-number">{format_count(value, props.target)}</span>
            <span class="stat-label">{props.label}</span>
        </div>
    }
}
