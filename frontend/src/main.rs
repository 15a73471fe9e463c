use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::use_window_scroll;
use log::{info, Level};
use chrono::{Datelike, Local};
use web_sys::{window, MouseEvent};

mod config;
mod content;
mod motion;
mod widgets;
mod pages {
    pub mod home;
    pub mod soluciones;
    pub mod equipo;
    pub mod contacto;
}

use pages::{
    home::Home,
    soluciones::Soluciones,
    equipo::Equipo,
    contacto::Contacto,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/soluciones")]
    Soluciones,
    #[at("/equipo-veralya")]
    Equipo,
    #[at("/contacto")]
    Contacto,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Soluciones => {
            info!("Rendering Soluciones page");
            html! { <Soluciones /> }
        },
        Route::Equipo => {
            info!("Rendering Equipo page");
            html! { <Equipo /> }
        },
        Route::Contacto => {
            info!("Rendering Contacto page");
            html! { <Contacto /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"La página que buscas no existe."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Volver al inicio"}
                    </Link<Route>>
                </section>
            }
        },
    }
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Inicio"),
    (Route::Soluciones, "Soluciones"),
    (Route::Equipo, "Equipo"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;
    let current = use_route::<Route>();

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            current.clone(),
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

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Veralya"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menú" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(route, label)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                        {*label}
                                    </Link<Route>>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contacto} classes="nav-cta">
                            {"Contacto"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="nav-logo">{"Veralya"}</span>
                    <p>{"Consultoría en desarrollo humano y organizacional."}</p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Soluciones}>{"Soluciones"}</Link<Route>>
                    <Link<Route> to={Route::Equipo}>{"Equipo"}</Link<Route>>
                    <Link<Route> to={Route::Contacto}>{"Contacto"}</Link<Route>>
                </div>
                <div class="footer-contact">
                    <a href={config::MAPS_URL} target="_blank" rel="noopener noreferrer">{config::ADDRESS}</a>
                    <a href={config::mailto()}>{config::CONTACT_EMAIL}</a>
                    <a href={config::tel()}>{config::PHONE_DISPLAY}</a>
                </div>
            </div>
            <p class="footer-legal">{format!("© {} Veralya Consulting. Todos los derechos reservados.", year)}</p>
        </footer>
    }
}

/// Everything that needs the router context.
#[function_component(Shell)]
fn shell() -> Html {
    let path = use_location().map(|location| location.path().to_string());

    // Child effects have already run by now, so the new page's motion scope
    // exists; it waits for the next frame before measuring anything.
    use_effect_with_deps(
        |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );

    html! {
        <>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    config::log_resolved();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_its_path() {
        let pages = [
            ("/", Route::Home),
            ("/soluciones", Route::Soluciones),
            ("/equipo-veralya", Route::Equipo),
            ("/contacto", Route::Contacto),
        ];
        for (path, route) in pages {
            assert_eq!(Route::recognize(path), Some(route.clone()));
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
