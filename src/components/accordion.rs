use log::debug;
use yew::prelude::*;

/// Next open panel after a click on `clicked`; clicking the open one closes it.
pub fn toggle_panel(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub body: Html,
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub panels: Vec<Panel>,
}

/// At most one panel open at a time; the first starts open.
#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| (!props.panels.is_empty()).then_some(0));

    html! {
        <div class="accordion">
            {
                props.panels.iter().enumerate().map(|(i, panel)| {
                    let active = *open == Some(i);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| {
                            let next = toggle_panel(*open, i);
                            debug!("accordion: {:?} -> {:?}", *open, next);
                            open.set(next);
                        })
                    };
                    html! {
                        <div key={i} class={classes!("accordion-item", active.then_some("active"))}>
                            <button type="button" class="accordion-header" aria-expanded={active.to_string()} {onclick}>
                                <span>{panel.title}</span>
                                <span class="accordion-icon">{if active { "−" } else { "+" }}</span>
                            </button>
                            <div class="accordion-content">
                                {panel.body.clone()}
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_panel_closes_the_first() {
        assert_eq!(toggle_panel(Some(0), 2), Some(2));
    }

    #[test]
    fn clicking_the_open_panel_closes_it() {
        assert_eq!(toggle_panel(Some(1), 1), None);
        assert_eq!(toggle_panel(None, 1), Some(1));
    }
}
