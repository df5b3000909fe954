use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod drivers;
mod utils {
    pub mod dom;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}
mod components {
    pub mod animated_background;
    pub mod chat_demo;
    pub mod contact;
    pub mod faq_accordion;
    pub mod footer;
    pub mod hero;
    pub mod icons;
    pub mod logo;
    pub mod navbar;
    pub mod product_card;
    pub mod scroll_progress;
    pub mod sections;
    pub mod testimonial_carousel;
}

use config::SiteVariant;
use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/aupa")]
    Aupa,
    #[at("/lawyer")]
    Lawyer,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing variant={config::default_variant()} /> },
        Route::Aupa => html! { <Landing variant={SiteVariant::Aupa} /> },
        Route::Lawyer => html! { <Landing variant={SiteVariant::Lawyer} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting landing page, default variant {}", config::default_variant());
    yew::Renderer::<App>::new().render();
}
