use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod lead;
mod ui;
mod components {
    pub mod contact_form;
    pub mod diagnostic_form;
    pub mod faq;
    pub mod site_header;
}
mod pages {
    pub mod contact_landing;
    pub mod diagnostic_landing;
    pub mod landing_styles;
}

use pages::{contact_landing::ContactLanding, diagnostic_landing::DiagnosticLanding};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/diagnostico")]
    Diagnostic,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <ContactLanding /> }
        }
        Route::Diagnostic => {
            info!("Rendering Diagnostic page");
            html! { <DiagnosticLanding /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
