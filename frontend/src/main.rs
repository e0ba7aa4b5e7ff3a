use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod viewport;
mod state {
    pub mod accordion;
    pub mod carousel;
    pub mod contact_form;
    pub mod lightbox;
    pub mod navigation;
}
mod components {
    pub mod button;
    pub mod card;
    pub mod section_header;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod cta;
    pub mod faq;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod testimonials;
}

use components::button::{Button, ButtonSize};
use config::SITE_NAME;
use content::{CONTACT_ID, HOME_ID, NAV_ITEMS};
use sections::{
    about::About, contact::Contact, cta::Cta, faq::Faq, footer::Footer, gallery::Gallery, hero::Hero,
    services::Services, testimonials::Testimonials,
};
use state::contact_form::{submission_log_line, ContactFormData};
use state::navigation::{scroll_to_anchor, NavState};
use viewport::use_viewport;

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
            info!("Rendering landing page");
            html! { <LandingPage /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scroll_y: f64,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let nav_state = use_state(NavState::default);
    let mut current = *nav_state;
    current.on_scroll(props.scroll_y);

    let toggle_menu = {
        let nav_state = nav_state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *nav_state;
            next.toggle_menu();
            nav_state.set(next);
        })
    };

    // Jumps to a section and folds the mobile menu once the section is found.
    let go_to = {
        let nav_state = nav_state.clone();
        move |id: &'static str| {
            let nav_state = nav_state.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if scroll_to_anchor(id) {
                    let mut next = *nav_state;
                    next.close_menu();
                    nav_state.set(next);
                }
            })
        }
    };

    let links = |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                html! {
                    <a href={format!("#{}", item.id)} {class} onclick={go_to(item.id)}>{item.label}</a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav dir="rtl" class={classes!("top-nav", current.scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href={format!("#{}", HOME_ID)} class="nav-logo" onclick={go_to(HOME_ID)}>
                    {SITE_NAME}
                </a>

                <div class="nav-links">
                    { links("nav-link") }
                    <Button size={ButtonSize::Sm} onclick={go_to(CONTACT_ID)}>{"הזמנה"}</Button>
                </div>

                <button
                    class="burger-menu"
                    aria-label="תפריט"
                    aria-expanded={current.menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if current.menu_open {
                <div class="mobile-menu">
                    { links("mobile-link") }
                    <Button size={ButtonSize::Md} full_width=true onclick={go_to(CONTACT_ID)}>
                        {"הזמנה"}
                    </Button>
                </div>
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.5rem 0;
                    background: rgba(255,255,255,0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 20px rgba(0,0,0,0.08);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo { font-size: 1.5rem; font-weight: 700; color: #fff; text-decoration: none; }
                .top-nav.scrolled .nav-logo { color: var(--primary); }
                .nav-links { display: flex; align-items: center; gap: 1.5rem; }
                .nav-link { color: #fff; text-decoration: none; font-weight: 500; transition: color 0.2s ease; }
                .top-nav.scrolled .nav-link { color: #374151; }
                .nav-link:hover, .top-nav.scrolled .nav-link:hover { color: var(--accent); }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span { width: 24px; height: 2px; background: #fff; }
                .top-nav.scrolled .burger-menu span { background: #374151; }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem;
                    margin-top: 0.5rem;
                    background: rgba(255,255,255,0.95);
                    backdrop-filter: blur(12px);
                    text-align: right;
                }
                .mobile-link { color: #374151; text-decoration: none; font-weight: 500; }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component(LandingPage)]
fn landing_page() -> Html {
    let viewport = use_viewport();

    // Stable across scroll re-renders so `Contact` keeps equal props.
    let on_submit = use_callback(
        |data: ContactFormData, _| match submission_log_line(&data) {
            Ok(line) => info!("{}", line),
            Err(e) => log::error!("Failed to serialize contact form: {}", e),
        },
        (),
    );

    html! {
        <>
            <Nav scroll_y={viewport.scroll_y} />
            <main>
                <Hero scroll_y={viewport.scroll_y} />
                <About />
                <Services />
                <Gallery />
                <Testimonials visible_count={viewport.breakpoint().visible_testimonials()} />
                <Faq />
                <Cta />
                <Contact {on_submit} />
            </main>
            <Footer />
        </>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div dir="rtl" class="not-found">
            <h1>{"404"}</h1>
            <p>{"הדף שחיפשת לא נמצא"}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"חזרה לדף הבית"}
            </Link<Route>>
        </div>
    }
}

const GLOBAL_STYLE: &str = r#"
:root {
    --primary: #96CEB4;
    --primary-light: #b5dccb;
    --accent: #FF6B6B;
    --neumorphic: 5px 5px 15px #d1d9e6, -5px -5px 15px #ffffff;
}
* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: 'Heebo', sans-serif;
    color: #1f2937;
    background: #fff;
}
img { max-width: 100%; display: block; }
.not-found {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    text-align: center;
}
.not-found h1 { font-size: 4rem; color: var(--primary); margin: 0; }
.not-found-link { color: var(--accent); text-decoration: none; font-weight: 500; }
"#;

#[function_component]
fn App() -> Html {
    let style = [
        GLOBAL_STYLE,
        components::button::STYLE,
        components::card::STYLE,
        components::section_header::STYLE,
    ]
    .concat();

    html! {
        <BrowserRouter>
            <style>{style}</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting {}", SITE_NAME);
    yew::Renderer::<App>::new().render();
}
