use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub links: Vec<NavLink>,
    pub cta: NavLink,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    /// Section id the user picked; the page scrolls and closes the menu.
    pub on_navigate: Callback<&'static str>,
    /// Optional "Soluções"-style dropdown in the desktop nav.
    #[prop_or_default]
    pub dropdown: Option<(&'static str, Vec<NavLink>)>,
    #[prop_or_default]
    pub dropdown_open: bool,
    #[prop_or_default]
    pub on_toggle_dropdown: Callback<()>,
}

fn link_button(link: NavLink, class: &'static str, on_navigate: &Callback<&'static str>) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(link.section);
        })
    };
    html! {
        <button class={class} {onclick}>{link.label}</button>
    }
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let toggle_dropdown = {
        let on_toggle_dropdown = props.on_toggle_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_dropdown.emit(());
        })
    };

    let dropdown = match &props.dropdown {
        Some((label, items)) => html! {
            <div class={classes!("nav-dropdown", props.dropdown_open.then_some("open"))}>
                <button class="nav-link" onclick={toggle_dropdown}>
                    {*label}
                    <span class="nav-caret">{"▾"}</span>
                </button>
                if props.dropdown_open {
                    <div class="nav-dropdown-menu">
                        { for items.iter().map(|item| link_button(*item, "nav-dropdown-item", &props.on_navigate)) }
                    </div>
                }
            </div>
        },
        None => html! {},
    };

    html! {
        <header class="site-header">
            <div class="nav-content">
                <span class="nav-logo">
                    <span class="nav-logo-mark">{"◆"}</span>
                    {"NOCTA.I SALES AI™"}
                </span>

                <nav class="nav-desktop">
                    {dropdown}
                    { for props.links.iter().map(|link| link_button(*link, "nav-link", &props.on_navigate)) }
                    { link_button(props.cta, "nav-cta", &props.on_navigate) }
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    { if props.menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if props.menu_open {
                <div class="nav-mobile">
                    if let Some((_, items)) = &props.dropdown {
                        { for items.iter().map(|item| link_button(*item, "nav-mobile-link", &props.on_navigate)) }
                    }
                    { for props.links.iter().map(|link| link_button(*link, "nav-mobile-link", &props.on_navigate)) }
                    { link_button(props.cta, "nav-mobile-link nav-cta", &props.on_navigate) }
                </div>
            }
        </header>
    }
}
