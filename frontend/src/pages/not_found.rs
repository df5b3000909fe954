use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::logo::Logo;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <Logo size={48} />
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">{"Back to the home page"}</Link<Route>>
        </div>
    }
}
