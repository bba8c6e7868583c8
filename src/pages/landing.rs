use log::info;
use yew::prelude::*;

use crate::carousel::{Carousel, StackItem};
use crate::compare::catalog::{Product, CATALOG};
use crate::compare::{ComparisonTool, ScoreBand};
use crate::components::flip_cards::PainCards;
use crate::components::footer::Footer;
use crate::components::hero::{HeroStats, ScoreDisplay, SplitTitle};
use crate::components::scroll_indicator::ScrollIndicator;
use crate::motion::Choreography;
use crate::reveal::{self, RevealObserver};
use crate::site::SiteBehaviour;

fn health_domains() -> Vec<StackItem> {
    vec![
        StackItem { icon: "❤️", title: "Heart", body: "Sodium, saturated fat and trans fats weighed against fibre and omega-3." },
        StackItem { icon: "🦠", title: "Gut", body: "Emulsifiers and sweeteners that upset the microbiome, fibre that feeds it." },
        StackItem { icon: "🧠", title: "Brain", body: "Artificial colours linked to attention issues, and the fats your brain wants." },
        StackItem { icon: "⚡", title: "Energy", body: "How fast the sugars hit and how long the product actually keeps you going." },
        StackItem { icon: "🩸", title: "Metabolic", body: "Glycaemic load, added sugar and refined starch in one read-out." },
        StackItem { icon: "🛡️", title: "Immune", body: "Preservatives and additives with known inflammatory effects." },
        StackItem { icon: "⚖️", title: "Hormones", body: "Endocrine disruptors from packaging and processing, flagged." },
        StackItem { icon: "🦴", title: "Bones", body: "Phosphoric acid, calcium and vitamin D balance." },
        StackItem { icon: "✨", title: "Skin", body: "Sugar, dairy and seed-oil load that shows up on your face." },
    ]
}

struct Category {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const SCAN_CATEGORIES: [Category; 4] = [
    Category { icon: "🧪", title: "Additives", body: "E-numbers ranked by evidence, from harmless to avoid." },
    Category { icon: "🍭", title: "Sugar", body: "Every alias of added sugar rolled into one total." },
    Category { icon: "🏭", title: "Processing", body: "How far the product is from the food it started as." },
    Category { icon: "🥦", title: "Nutrients", body: "Protein, fibre and micronutrients per calorie." },
];

const STEPS: [(&str, &str); 3] = [
    ("Scan the barcode", "Point your camera at any packaged product in the store."),
    ("Read the score", "One number from 0 to 100 plus the reasons behind it."),
    ("Swap for better", "See healthier alternatives from the same shelf."),
];

const FEATURES: [(&str, &str, &str); 4] = [
    ("🔍", "Ingredient decoder", "Every ingredient explained in plain words."),
    ("🚦", "Traffic-light flags", "Spot what to avoid before you reach the checkout."),
    ("🔁", "Smart swaps", "Better products from the same shelf, ranked."),
    ("📈", "Personal trends", "See how your basket improves week by week."),
];

const SOURCES: [(&str, &str); 4] = [
    ("📚", "Peer-reviewed research"),
    ("🏛️", "EFSA and FDA rulings"),
    ("🌍", "Open Food Facts"),
    ("👩‍⚕️", "Dietitian review"),
];

const PRIVACY: [(&str, &str); 3] = [
    ("🔒", "No account needed to scan"),
    ("📵", "No ads, no data sales"),
    ("🗑️", "Delete your history any time"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Everything that binds to the rendered markup lives for exactly as
    // long as the page does.
    use_effect_with_deps(
        move |_| {
            let observers = RevealObserver::install_all(&reveal::landing_groups());
            let site = SiteBehaviour::bind();
            let motion = Choreography::start();
            info!(
                "landing: {} reveal groups, motion {}",
                observers.len(),
                if motion.is_some() { "on" } else { "off" }
            );
            move || {
                drop(motion);
                drop(site);
                drop(observers);
            }
        },
        (),
    );

    html! {
        <div class="landing-page">
            <div class="scroll-progress"></div>
            <Hero />
            <ScrollIndicator />
            <PainCards />
            <ProblemSolution />
            <section class="scan-section" id="scan">
                <div class="section-bg"></div>
                <div class="container">
                    <div class="section-header" data-reveal="">
                        <p class="eyebrow fx-reveal">{"What we look at"}</p>
                        <h2 class="section-title fx-reveal">{"Four lenses on every product"}</h2>
                    </div>
                    <div class="scan-categories">
                        {
                            SCAN_CATEGORIES.iter().map(|category| html! {
                                <div class="scan-category" key={category.title}>
                                    <span class="category-icon">{category.icon}</span>
                                    <h3>{category.title}</h3>
                                    <p>{category.body}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <section class="domains" id="domains">
                <div class="section-bg"></div>
                <div class="container">
                    <div class="section-header" data-reveal="">
                        <p class="eyebrow fx-reveal">{"Nine health domains"}</p>
                        <h2 class="section-title fx-reveal">{"What it does to your body, not just the label"}</h2>
                    </div>
                    <Carousel items={health_domains()} />
                </div>
            </section>
            <section class="how-it-works" id="how">
                <div class="section-bg"></div>
                <div class="container">
                    <h2 class="section-title slide-left">{"How it works"}</h2>
                    <div class="steps">
                        {
                            STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                                <div class="step" key={i}>
                                    <span class="step-number">{i + 1}</span>
                                    <div class="step-content">
                                        <h3>{*title}</h3>
                                        <p>{*body}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <section class="horizontal-scroll-section">
                <div class="horizontal-track">
                    {
                        FEATURES.iter().map(|(icon, title, body)| html! {
                            <div class="feature-card" key={*title}>
                                <span class="feature-icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <section class="pinned-features">
                <div class="pinned-feature-item">
                    <h3>{"Scan in under a second"}</h3>
                    <p>{"Barcodes are matched offline for over two million products."}</p>
                </div>
                <div class="pinned-feature-item">
                    <h3>{"Understand in ten"}</h3>
                    <p>{"The score comes with the three reasons that matter most."}</p>
                </div>
                <div class="pinned-feature-item">
                    <h3>{"Decide on the spot"}</h3>
                    <p>{"A better alternative is one tap away."}</p>
                </div>
            </section>
            <ScoreRanges />
            <ComparisonTool />
            <Demo />
            <section class="data-sources" id="sources">
                <div class="section-bg"></div>
                <div class="container">
                    <h2 class="section-title blur-reveal">{"Built on evidence"}</h2>
                    <div class="sources-grid">
                        {
                            SOURCES.iter().map(|(icon, title)| html! {
                                <div class="source-card" key={*title}>
                                    <span class="source-icon">{*icon}</span>
                                    <h3>{*title}</h3>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <section class="privacy" id="privacy">
                <div class="container">
                    <h2 class="section-title scale-reveal">{"Your data stays yours"}</h2>
                    <div class="privacy-grid">
                        {
                            PRIVACY.iter().map(|(icon, title)| html! {
                                <div class="privacy-item" key={*title}>
                                    <span>{*icon}</span>
                                    <p>{*title}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <section class="download" id="download">
                <div class="container reveal">
                    <h2 class="section-title">{"Start decoding your groceries"}</h2>
                    <div class="download-buttons">
                        <a class="btn btn-download" href="https://apps.apple.com/app/yammoing">
                            <img data-src="https://tools.applemarketingtools.com/api/badges/download-on-the-app-store/black/en-us" alt="Download on the App Store" />
                        </a>
                        <a class="btn btn-download" href="https://play.google.com/store/apps/details?id=com.yammoing">
                            <img data-src="https://play.google.com/intl/en_us/badges/static/images/badges/en_badge_web_generic.png" alt="Get it on Google Play" />
                        </a>
                    </div>
                </div>
            </section>
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero" id="top">
            <div id="bg-canvas" class="hero-bg"></div>
            <div class="container hero-grid">
                <div class="hero-content">
                    <p class="kicker">{"Your personal health detective"}</p>
                    <SplitTitle text="Know what you eat." />
                    <p class="sub hero-subtitle">
                        {"Scan any product and get an honest health score in seconds, with every ingredient explained."}
                    </p>
                    <div class="hero-cta">
                        <a class="btn btn-primary btn-download" href="#download">{"Download free"}</a>
                        <a class="btn btn-secondary fx-hover" href="#how">{"See how it works"}</a>
                    </div>
                    <div class="credibility">
                        <span class="credibility-chip">{"Evidence based"}</span>
                        <span class="credibility-chip">{"No sponsored scores"}</span>
                        <span class="credibility-chip">{"Works offline"}</span>
                    </div>
                    <HeroStats />
                </div>
                <div class="hero-visual">
                    <div class="device phone-mockup">
                        <div class="phone-screen">
                            <ScoreDisplay />
                        </div>
                    </div>
                    <div class="glass-card glass-card-1">{"✅ No added sugar"}</div>
                    <div class="glass-card glass-card-2">{"⚠️ 3 additives flagged"}</div>
                    <div class="glass-card glass-card-3">{"💪 High protein"}</div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProblemSolution)]
fn problem_solution() -> Html {
    const PAIRS: [(&str, &str); 3] = [
        ("You compare two cereals for five minutes.", "You compare two scores in five seconds."),
        ("'Natural flavours' could mean anything.", "You know exactly what each ingredient is."),
        ("Diet advice contradicts itself every week.", "Scores follow the current body of evidence."),
    ];
    html! {
        <section class="pain-points">
            <div class="section-bg"></div>
            <div class="container">
                <div class="section-header" data-reveal="">
                    <p class="eyebrow fx-reveal">{"Before and after"}</p>
                    <h2 class="section-title fx-reveal">{"Shopping, decoded"}</h2>
                </div>
                {
                    PAIRS.iter().map(|(problem, solution)| html! {
                        <div class="problem-solution-card" key={*problem}>
                            <div class="problem-side"><p>{*problem}</p></div>
                            <div class="solution-arrow">{"→"}</div>
                            <div class="solution-side"><p>{*solution}</p></div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(ScoreRanges)]
fn score_ranges() -> Html {
    const RANGES: [(u8, &str, &str); 3] = [
        (70, "70 – 100", "Great choice. Eat freely as part of a varied diet."),
        (40, "40 – 69", "Fine now and then. Check the flagged ingredients."),
        (0, "0 – 39", "Best avoided. We'll suggest something better."),
    ];
    html! {
        <section class="score-ranges-section">
            <div class="container">
                <h2 class="section-title slide-right">{"What the score means"}</h2>
                <div class="score-ranges">
                    {
                        RANGES.iter().map(|(floor, range, meaning)| html! {
                            <div class={classes!("score-range", ScoreBand::of(*floor).class())} key={*range}>
                                <span class="score-range-value">{*range}</span>
                                <p>{*meaning}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

const DEMO_TABS: [&str; 3] = ["Scan", "Score", "Swap"];

#[function_component(Demo)]
fn demo() -> Html {
    let tab = use_state(|| 0usize);
    let product = use_state(|| &CATALOG[0]);

    let shown: &'static Product = *product;
    let screen = match *tab {
        0 => html! { <p class="demo-hint">{"Point the camera at a barcode…"}</p> },
        1 => html! {
            <div class="demo-score">
                <span class="demo-emoji">{shown.icon}</span>
                <strong>{shown.name}</strong>
                <span class={classes!("demo-score-value", ScoreBand::of(shown.score).class())}>
                    {shown.score}
                </span>
                <span class="demo-label">{shown.label}</span>
            </div>
        },
        _ => {
            let better = CATALOG
                .iter()
                .filter(|candidate| candidate.score > shown.score)
                .max_by_key(|candidate| candidate.score);
            match better {
                Some(better) => html! {
                    <p class="demo-swap">{format!("Try {} ({}) instead", better.name, better.score)}</p>
                },
                None => html! { <p class="demo-swap">{"Already the best pick on this shelf."}</p> },
            }
        }
    };

    html! {
        <section class="interactive-demo" id="demo">
            <div class="container">
                <h2 class="section-title rotate-reveal">{"Try it"}</h2>
                <div class="demo-tabs">
                    {
                        DEMO_TABS.iter().enumerate().map(|(i, label)| {
                            let onclick = {
                                let tab = tab.clone();
                                Callback::from(move |_: MouseEvent| tab.set(i))
                            };
                            html! {
                                <button type="button" key={i} class={classes!("demo-tab", (*tab == i).then_some("active"))} {onclick}>
                                    {*label}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="demo-body">
                    <div class="demo-products stagger-reveal">
                        {
                            CATALOG.iter().map(|item| {
                                let onclick = {
                                    let product = product.clone();
                                    let tab = tab.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        product.set(item);
                                        tab.set(1);
                                    })
                                };
                                html! {
                                    <button
                                        type="button"
                                        key={item.key}
                                        class={classes!("product-btn", (shown.key == item.key).then_some("active"))}
                                        {onclick}
                                    >
                                        {item.icon}{" "}{item.name}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="demo-phone">
                        <div class="demo-screen">{screen}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
