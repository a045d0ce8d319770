pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use wheel_shared::variants::resolve_variant;

use crate::pages::wheel_kiosk::WheelKiosk;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/wheel/:variant")]
    Wheel { variant: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            let id = config::variant_from_query().unwrap_or_default();
            html! { <WheelKiosk key={id.to_string()} variant={id} /> }
        }
        Route::Wheel { variant } => {
            let id = resolve_variant(&variant);
            html! { <WheelKiosk key={id.to_string()} variant={id} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
