use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="btn">
                {"Back to the homepage"}
            </Link<Route>>
        </section>
    }
}
