use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Accueil"),
    (Route::Services, "Services"),
    (Route::Portfolio, "Portfolio"),
    (Route::Process, "Processus"),
    (Route::Blog, "Blog"),
];

/// Share of the page scrolled past, in `0.0..=1.0`. Pages shorter than the
/// viewport count as unscrolled.
fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Logo underline width in percent: a fifth at the top, full at the bottom.
fn underline_width(progress: f64) -> f64 {
    20.0 + progress * 80.0
}

fn read_scroll(window: &Window) -> (f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    (scroll_y, scroll_progress(scroll_y, document_height, viewport_height))
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let progress = use_state(|| 0.0_f64);
    let current = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        let progress = progress.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let Some(window) = window.as_ref() else {
                        return;
                    };
                    let (scroll_y, ratio) = read_scroll(window);
                    is_scrolled.set(scroll_y > 50.0);
                    progress.set(ratio);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not watch scroll position");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
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
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{"VM"}</span>
                    <span class="logo-name">
                        {"Victor Mirault"}
                        <span
                            class="logo-underline"
                            style={format!("width: {:.1}%;", underline_width(*progress))}
                        ></span>
                    </span>
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!("nav-link", active.then(|| "active"))}
                                >
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Démarrer mon projet"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
