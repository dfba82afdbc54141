use log::{info, Level};
use stylist::yew::Global;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content {
    pub mod faq;
    pub mod feed;
    pub mod trips;
}
mod state {
    pub mod booking;
    pub mod disclosure;
}
mod components {
    pub mod footer;
    pub mod notification;
}
mod pages {
    pub mod about;
    pub mod booking;
    pub mod contact;
    pub mod faq;
    pub mod gallery;
    pub mod home;
    pub mod services;
}

use components::footer::Footer;
use pages::{
    about::About, booking::Booking, contact::Contact, faq::Faq, gallery::Gallery, home::Home,
    services::Services,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/gallery")]
    Gallery,
    #[at("/faq")]
    Faq,
    #[at("/booking")]
    Booking,
    #[at("/contact")]
    Contact,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <Booking /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    // Solid background once the page scrolls off the hero.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("browser window");
                let document = window.document().expect("window document");

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .document_element()
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 60);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("attach scroll listener");

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let nav_link = |route: Route, label: &'static str| {
        let close_menu = close_menu.clone();
        html! {
            <div onclick={close_menu}>
                <Link<Route> to={route} classes="nav-link">
                    {label}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BUSINESS_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { nav_link(Route::About, "About") }
                    { nav_link(Route::Services, "Services") }
                    { nav_link(Route::Gallery, "Gallery") }
                    { nav_link(Route::Faq, "FAQ") }
                    { nav_link(Route::Contact, "Contact") }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Booking} classes="nav-book-button">
                            {"Book Now"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={include_str!("styles/global.css")} />
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
