use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use super::catalog::{Metric, Product, CATALOG};
use super::{bar_class, circumference, ring_offset, ScoreBand, Select, Selection, Side};
use crate::config;
use crate::counter::use_counter;
use crate::reveal::use_in_view;

#[function_component(ComparisonTool)]
pub fn comparison_tool() -> Html {
    let selection = use_reducer(Selection::default);
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), config::COMPARE_THRESHOLD);
    let rings_ready = use_state(|| false);

    // Rings start empty and fill shortly after the section scrolls in.
    {
        let rings_ready = rings_ready.clone();
        use_effect_with_deps(
            move |&in_view: &bool| {
                let timeout = (in_view && !*rings_ready).then(|| {
                    Timeout::new(config::COMPARE_RING_DELAY_MS, move || rings_ready.set(true))
                });
                move || drop(timeout)
            },
            in_view,
        );
    }

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |(side, key): (Side, &'static str)| {
            info!("compare: side {} -> {}", side.suffix(), key);
            selection.dispatch(Select { side, key: key.to_string() });
        })
    };

    let verdict = selection.verdict();

    html! {
        <section class="product-compare" id="compare" ref={section}>
            <div class="section-bg"></div>
            <div class="container">
                <p class="eyebrow">{"Side by side"}</p>
                <h2 class="section-title">{"See the difference in seconds"}</h2>
                <div class="compare-products">
                    <ProductPicker side={Side::A} selected={selection.a.key} on_select={on_select.clone()} />
                    <ProductPicker side={Side::B} selected={selection.b.key} on_select={on_select} />
                </div>
                <div class="compare-table">
                    <CompareColumn side={Side::A} product={selection.a} rings_ready={*rings_ready} />
                    <div class="vs-circle">{"VS"}</div>
                    <CompareColumn side={Side::B} product={selection.b} rings_ready={*rings_ready} />
                </div>
                <div class="winner-badge">
                    <span class="winner-crown">{"🏆"}</span>
                    <div class="winner-text">
                        <strong id="winner-name">{verdict.headline()}</strong>
                        <p id="winner-reason">{verdict.reason()}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PickerProps {
    side: Side,
    selected: &'static str,
    on_select: Callback<(Side, &'static str)>,
}

#[function_component(ProductPicker)]
fn product_picker(props: &PickerProps) -> Html {
    let side = props.side;
    html! {
        <div class={classes!("compare-picker", format!("compare-picker-{}", side.suffix()))}>
            {
                CATALOG.iter().map(|product| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let key = product.key;
                        Callback::from(move |_: MouseEvent| on_select.emit((side, key)))
                    };
                    let class = classes!("compare-btn", (props.selected == product.key).then(|| "active"));
                    match side {
                        Side::A => html! {
                            <button type="button" key={product.key} {class} data-compare-a={product.key} {onclick}>
                                {product.icon}{" "}{product.name}
                            </button>
                        },
                        Side::B => html! {
                            <button type="button" key={product.key} {class} data-compare-b={product.key} {onclick}>
                                {product.icon}{" "}{product.name}
                            </button>
                        },
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ColumnProps {
    side: Side,
    product: &'static Product,
    rings_ready: bool,
}

#[function_component(CompareColumn)]
fn compare_column(props: &ColumnProps) -> Html {
    let product = props.product;
    let side = props.side.suffix();
    let score = use_counter(
        product.score as i64,
        product.score as i64,
        config::COMPARE_SCORE_MS,
        true,
    );

    // Bars drop to zero and grow back whenever the product changes.
    let bars_filled = use_state(|| false);
    {
        let bars_filled = bars_filled.clone();
        use_effect_with_deps(
            move |_key: &&'static str| {
                bars_filled.set(false);
                let timeout =
                    Timeout::new(config::COMPARE_BAR_DELAY_MS, move || bars_filled.set(true));
                move || drop(timeout)
            },
            product.key,
        );
    }

    let c = circumference(config::COMPARE_RING_RADIUS);
    let offset = if props.rings_ready {
        ring_offset(product.score as f64, config::COMPARE_RING_RADIUS)
    } else {
        c
    };
    let ring_class = classes!(
        "compare-progress-ring",
        props.rings_ready.then(|| ScoreBand::of(product.score).class())
    );

    html! {
        <div class={classes!("compare-column", format!("compare-{}", side))} id={format!("compare-result-{}", side)}>
            <div class="compare-header">
                <span class="compare-emoji">{product.icon}</span>
                <h3 id={format!("compare-name-{}", side)}>{product.name}</h3>
                <p class="compare-brand" id={format!("compare-brand-{}", side)}>{product.brand}</p>
            </div>
            <div class="compare-score-ring">
                <svg viewBox="0 0 100 100" class="compare-ring">
                    <circle class="compare-ring-bg" cx="50" cy="50" r="42" />
                    <circle
                        id={format!("compare-progress-{}", side)}
                        class={ring_class}
                        cx="50"
                        cy="50"
                        r="42"
                        style={format!("stroke-dasharray: {}; stroke-dashoffset: {};", c, offset)}
                    />
                </svg>
                <span class="compare-score" id={format!("compare-score-{}", side)}>{score}</span>
            </div>
            <span
                id={format!("compare-label-{}", side)}
                class={classes!("compare-label", (!product.label_class.is_empty()).then_some(product.label_class))}
            >
                {product.label}
            </span>
            <div class="compare-bars">
                {
                    Metric::ALL.iter().map(|&metric| {
                        let value = product.metrics.get(metric);
                        let width = if *bars_filled { value } else { 0 };
                        html! {
                            <div class="compare-bar" key={metric.id()}>
                                <span class="compare-bar-label">{metric.label()}</span>
                                <div class="compare-track">
                                    <div
                                        id={format!("{}-{}", metric.id(), side)}
                                        class={classes!("compare-fill", bar_class(value))}
                                        style={format!("width: {}%;", width)}
                                    ></div>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="compare-highlights" id={format!("highlights-{}", side)}>
                {
                    product.highlights.iter().map(|tag| html! {
                        <span class={classes!("highlight-tag", tag.severity.class())}>{tag.text}</span>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
