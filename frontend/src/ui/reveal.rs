use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::page_state::{PageAction, PageState};

/// Share of the viewport an element's top edge must cross to be revealed.
const REVEAL_THRESHOLD: f64 = 0.85;
const STAGGER_STEP_MS: u32 = 100;
const STAGGER_MAX_MS: u32 = 600;

pub fn is_in_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_THRESHOLD
}

/// Transition delay for the `index`-th card of a grid.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
        .min(STAGGER_MAX_MS)
}

/// Ids of every `[data-reveal]` element that has scrolled into view.
fn visible_reveal_ids() -> Vec<String> {
    let Some(window) = window() else {
        return Vec::new();
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let Some(nodes) = window
        .document()
        .and_then(|d| d.query_selector_all("[data-reveal]").ok())
    else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter(|el| is_in_view(el.get_bounding_client_rect().top(), viewport_height))
        .filter_map(|el| el.get_attribute("data-reveal"))
        .collect()
}

/// Reveals sections as the page scrolls, plus once on mount for whatever is
/// already on screen.
#[hook]
pub fn use_reveal(page: UseReducerDispatcher<PageState>) {
    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                page.dispatch(PageAction::Reveal(visible_reveal_ids()));
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| {
        page.dispatch(PageAction::Reveal(visible_reveal_ids()));
    });
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: AttrValue,
    pub revealed: bool,
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div
            data-reveal={props.id.clone()}
            class={classes!("reveal", props.revealed.then_some("revealed"), props.class.clone())}
            style={format!("transition-delay: {}ms;", stagger_delay_ms(props.index))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_eighty_five_percent_of_viewport() {
        assert!(is_in_view(0.0, 1000.0));
        assert!(is_in_view(849.0, 1000.0));
        assert!(!is_in_view(850.0, 1000.0));
        assert!(is_in_view(-300.0, 1000.0));
    }

    #[test]
    fn stagger_grows_then_caps() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(3), 300);
        assert_eq!(stagger_delay_ms(6), 600);
        assert_eq!(stagger_delay_ms(40), 600);
    }
}
