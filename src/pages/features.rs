use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::accordion::{Accordion, Panel};
use crate::components::footer::Footer;
use crate::reveal::{self, RevealObserver};
use crate::site::SiteBehaviour;
use crate::Route;

struct Domain {
    icon: &'static str,
    name: &'static str,
    watches: [&'static str; 3],
}

const DOMAINS: [Domain; 5] = [
    Domain { icon: "❤️", name: "Heart", watches: ["Sodium per serving", "Trans and saturated fat", "Fibre and omega-3"] },
    Domain { icon: "🦠", name: "Gut", watches: ["Emulsifiers (E433, E466)", "Artificial sweeteners", "Prebiotic fibre"] },
    Domain { icon: "🧠", name: "Brain", watches: ["Synthetic colours", "Caffeine and taurine", "DHA and choline"] },
    Domain { icon: "🩸", name: "Metabolic", watches: ["Added sugar total", "Refined starch", "Glycaemic load"] },
    Domain { icon: "⚖️", name: "Hormones", watches: ["Packaging migrants", "Phyto-oestrogens", "Seed-oil ratio"] },
];

const METHODOLOGY: [(&str, &str); 3] = [
    ("Evidence weighting", "Ingredients are graded by the strength of the research behind each claim."),
    ("Dose matters", "Scores scale with the amount per serving, not just presence on the label."),
    ("No sponsorship", "Brands cannot pay to change a score or hide a flag."),
];

const TRACKING: [(&str, &str); 3] = [
    ("📊", "Weekly basket score"),
    ("🔔", "Ingredient alerts"),
    ("🎯", "Personal goals"),
];

const FLOW: [&str; 5] = ["Scan", "Match", "Analyse", "Score", "Suggest"];

fn domain_panels() -> Vec<Panel> {
    DOMAINS
        .iter()
        .map(|domain| Panel {
            title: domain.name,
            body: html! {
                <div class="domain-detail">
                    <span class="domain-detail-icon">{domain.icon}</span>
                    <ul class="detail-list">
                        { for domain.watches.iter().map(|watch| html! { <li class="detail-item">{*watch}</li> }) }
                    </ul>
                </div>
            },
        })
        .collect()
}

#[function_component(Features)]
pub fn features() -> Html {
    use_effect_with_deps(
        move |_| {
            let observers = RevealObserver::install_all(&reveal::features_groups());
            let site = SiteBehaviour::bind();
            info!("features: {} reveal groups", observers.len());
            move || {
                drop(site);
                drop(observers);
            }
        },
        (),
    );

    html! {
        <div class="features-page">
            <section class="features-hero">
                <div class="container">
                    <p class="eyebrow">{"Under the hood"}</p>
                    <h1 class="section-title">{"How Yammoing scores your food"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-secondary">
                        {"Back to overview"}
                    </Link<Route>>
                </div>
            </section>
            <section class="domains-detail">
                <div class="container">
                    <h2 class="section-title">{"Health domains"}</h2>
                    <Accordion panels={domain_panels()} />
                </div>
            </section>
            <section class="methodology">
                <div class="container">
                    <h2 class="section-title">{"Methodology"}</h2>
                    {
                        METHODOLOGY.iter().map(|(title, body)| html! {
                            <div class="methodology-item" key={*title}>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <section class="flow">
                <div class="container">
                    <h2 class="section-title">{"From barcode to answer"}</h2>
                    <div class="flow-steps">
                        {
                            FLOW.iter().enumerate().map(|(i, step)| html! {
                                <div class="flow-step" key={i}>
                                    <span class="flow-step-number">{i + 1}</span>
                                    <span class="flow-step-label">{*step}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <section class="tracking">
                <div class="container">
                    <h2 class="section-title">{"Tracking"}</h2>
                    <div class="tracking-grid">
                        {
                            TRACKING.iter().map(|(icon, title)| html! {
                                <div class="tracking-category" key={*title}>
                                    <span>{*icon}</span>
                                    <h3>{*title}</h3>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <Footer />
        </div>
    }
}
