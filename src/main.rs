use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod compare;
mod config;
mod counter;
mod dom;
mod motion;
mod reveal;
mod site;
mod components {
    pub mod accordion;
    pub mod flip_cards;
    pub mod footer;
    pub mod hero;
    pub mod scroll_indicator;
}
mod pages {
    pub mod features;
    pub mod landing;
}

use components::scroll_indicator::use_scrolled_past;
use pages::{features::Features, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features")]
    Features,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Features => {
            info!("Rendering Features page");
            html! { <Features /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="not-found">
                    <h1>{"Nothing to scan here"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back home"}</Link<Route>>
                </section>
            }
        }
    }
}

const SECTION_LINKS: [(&str, &str); 4] = [
    ("#why", "Why"),
    ("#how", "How it works"),
    ("#compare", "Compare"),
    ("#privacy", "Privacy"),
];

/// Section anchors only resolve on the landing page.
fn shows_section_links(route: &Option<Route>) -> bool {
    matches!(route, Some(Route::Home) | None)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_scrolled_past(config::NAVBAR_SHADOW_AFTER);
    let route = use_route::<Route>();
    let on_home = shows_section_links(&route);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    // Links scroll on their own; the menu only needs to close.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="logo">
                    {"Yammoing"}
                </Link<Route>>
                <div class={classes!("nav-links", (*menu_open).then_some("active"))} onclick={close_menu}>
                    {
                        if on_home {
                            SECTION_LINKS.iter().map(|(href, label)| html! {
                                <a class="nav-link" href={*href}>{*label}</a>
                            }).collect::<Html>()
                        } else {
                            html! {
                                <Link<Route> to={Route::Home} classes="nav-link">{"Overview"}</Link<Route>>
                            }
                        }
                    }
                    <Link<Route> to={Route::Features} classes="nav-link">{"The science"}</Link<Route>>
                    <a class="btn btn-primary btn-small" href={if on_home { "#download" } else { "/#download" }}>
                        {"Get the app"}
                    </a>
                </div>
                <button
                    type="button"
                    class={classes!("mobile-menu-toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <style>
                {r#"
                    .navbar { box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05); }
                    .navbar.scrolled { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); }
                    @media (max-width: 768px) {
                        .nav-links.active {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: white;
                            padding: 24px;
                            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
                            gap: 16px;
                        }
                        .mobile-menu-toggle.active span:nth-child(1) { transform: rotate(45deg) translate(5px, 5px); }
                        .mobile-menu-toggle.active span:nth-child(2) { opacity: 0; }
                        .mobile-menu-toggle.active span:nth-child(3) { transform: rotate(-45deg) translate(7px, -6px); }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    site::log_welcome();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_links_only_on_the_landing_page() {
        assert!(shows_section_links(&Some(Route::Home)));
        assert!(shows_section_links(&None));
        assert!(!shows_section_links(&Some(Route::Features)));
        assert!(!shows_section_links(&Some(Route::NotFound)));
    }
}
