use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod catalog;
mod download;
mod session;
mod state;
mod storage;
mod models {
    pub mod flameshard;
    pub mod course;
    pub mod progress;
    pub mod submission_gate;
    pub mod certificate;
    pub mod lead;
}
mod components {
    pub mod toast;
    pub mod hero_animation;
    pub mod urgency_banner;
    pub mod lead_form;
    pub mod testimonials;
    pub mod curriculum_preview;
    pub mod faq_item;
    pub mod flameshard_card;
    pub mod status_badge;
    pub mod submission_form;
    pub mod certificate_view;
}
mod pages {
    pub mod landing;
    pub mod course;
    pub mod scroll;
    pub mod certificate;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    course::CourseDashboard,
    scroll::ScrollPage,
    certificate::CertificatePage,
    not_found::NotFound,
};
use components::toast::ToastProvider;
use models::progress::StudentProgress;
use session::Session;
use state::{ProgressContext, SessionContext};
use storage::LeadStoreHandle;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/course")]
    Course,
    #[at("/course/scroll/:id")]
    Scroll { id: u32 },
    #[at("/certificate")]
    Certificate,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Course => {
            info!("Rendering Course page");
            html! { <CourseDashboard /> }
        },
        Route::Scroll { id } => {
            info!("Rendering Scroll {} page", id);
            html! { <ScrollPage id={id} /> }
        },
        Route::Certificate => {
            info!("Rendering Certificate page");
            html! { <CertificatePage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub shards: u32,
    pub level_name: AttrValue,
    pub student_name: Option<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { shards, level_name, student_name } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().and_then(|window| {
                let document = window.document()?;
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .document_element()
                        .map(|element| element.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .ok()?;
                Some(scroll_callback)
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
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
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"🔥 FlameShard"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Course} classes="nav-link">
                            {"Course"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Certificate} classes="nav-link">
                            {"Certificate"}
                        </Link<Route>>
                    </div>
                    <span class="nav-shards" title={level_name.clone()}>{format!("🔥 {}", shards)}</span>
                    {
                        if let Some(name) = student_name {
                            html! { <span class="nav-student">{name}</span> }
                        } else {
                            html! {
                                <a href="/#enroll" class="nav-login-button" onclick={close_menu.clone()}>
                                    {"Enroll"}
                                </a>
                            }
                        }
                    }
                </div>
            </div>
        </nav>
    }
}


#[function_component(Shell)]
fn shell() -> Html {
    let session = use_context::<SessionContext>();
    let progress = use_context::<ProgressContext>();
    let shards = progress.as_ref().map(|progress| progress.total_shards).unwrap_or_default();
    let level_name = progress
        .as_ref()
        .map(|progress| progress.level().name)
        .unwrap_or_default();

    html! {
        <>
            <style>
                {r#"
                    body { margin: 0; background: #1A1A1A; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }
                    .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; transition: background 0.3s ease; }
                    .top-nav.scrolled { background: rgba(26, 26, 26, 0.95); box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4); }
                    .nav-content { display: flex; justify-content: space-between; align-items: center; max-width: 1100px; margin: 0 auto; padding: 1rem 1.5rem; }
                    .nav-logo { color: #F6C177; font-weight: 700; font-size: 1.3rem; text-decoration: none; }
                    .nav-right { display: flex; gap: 1.5rem; align-items: center; color: #fff; }
                    .nav-link, .forward-link, .back-link { color: #F6C177; text-decoration: none; }
                    .nav-shards { color: #F4A261; font-weight: 600; }
                    .nav-login-button { padding: 0.5rem 1.2rem; border-radius: 8px; border: 1px solid #F4A261; color: #F4A261; text-decoration: none; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(26, 26, 26, 0.98);
                        }
                    }
                "#}
            </style>
            <Nav
                shards={shards}
                level_name={level_name}
                student_name={session.and_then(|session| session.student_name.clone())}
            />
            <Switch<Route> render={switch} />
        </>
    }
}


#[function_component]
fn App() -> Html {
    let store = use_memo(|_| LeadStoreHandle::detect(), ());
    let session = {
        let store = store.clone();
        use_state(move || Session::from_store(&*store.0))
    };
    let progress = use_reducer(|| StudentProgress::new(&catalog::flame_course()));

    html! {
        <BrowserRouter>
            <ContextProvider<LeadStoreHandle> context={(*store).clone()}>
                <ContextProvider<SessionContext> context={session}>
                    <ContextProvider<ProgressContext> context={progress}>
                        <ToastProvider>
                            <Shell />
                        </ToastProvider>
                    </ContextProvider<ProgressContext>>
                </ContextProvider<SessionContext>>
            </ContextProvider<LeadStoreHandle>>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting FlameShard Academy");
    yew::Renderer::<App>::new().render();
}
