use chrono::{Datelike, Local};
use yew::prelude::*;

pub fn copyright(year: i32) -> String {
    format!("© {} Yammoing. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top">
                    <a class="footer-logo" href="#top">{"Yammoing"}</a>
                    <p class="footer-tagline">{"Your personal health detective."}</p>
                    <nav class="footer-links">
                        <a href="#compare">{"Compare"}</a>
                        <a href="#how">{"How it works"}</a>
                        <a href="#privacy">{"Privacy"}</a>
                        <a href="mailto:hello@yammoing.com">{"Contact"}</a>
                    </nav>
                </div>
                <div class="footer-bottom">
                    <p>{copyright(year)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Yammoing. All rights reserved.");
    }
}
