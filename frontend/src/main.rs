use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod controllers {
    pub mod carousel;
    pub mod clipboard;
    pub mod contact;
    pub mod counter;
    pub mod dialog;
    pub mod info;
    pub mod nav;
    pub mod reveal;
    pub mod scroll;
    pub mod services;
    pub mod stagger;
    pub mod toast;
}
mod dom {
    pub mod clipboard;
    pub mod dialog;
    pub mod frame;
    pub mod motion;
    pub mod observer;
    pub mod scroll;
    pub mod stagger;
}
mod components {
    pub mod contact;
    pub mod info_modal;
    pub mod modal;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod schedule;
    pub mod scroll;
    pub mod services;
    pub mod stats;
    pub mod team;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::notification::ToastProvider;
use dom::motion::Motion;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Read once; later changes to the OS setting are not followed.
    let motion = use_state(Motion::detect);

    html! {
        <ContextProvider<Motion> context={*motion}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<Motion>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
