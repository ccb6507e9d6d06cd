use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "🔥",
            ToastKind::Error => "⚠️",
            ToastKind::Info => "ℹ️",
        }
    }

    fn accent(&self) -> &'static str {
        match self {
            ToastKind::Success => "#2A9D8F",
            ToastKind::Error => "#E63946",
            ToastKind::Info => "#7EB2FF",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Handle components use to raise a toast.
#[derive(Clone, PartialEq)]
pub struct Toaster(Callback<Toast>);

impl Toaster {
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        self.0.emit(Toast {
            kind,
            message: message.into(),
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let current = use_state(|| None::<Toast>);
    // Bumped per toast so an older timer can't dismiss a newer toast.
    let serial = use_mut_ref(|| 0u32);

    let toaster = {
        let current = current.clone();
        let serial = serial.clone();
        Toaster(Callback::from(move |toast: Toast| {
            let mine = {
                let mut serial = serial.borrow_mut();
                *serial = serial.wrapping_add(1);
                *serial
            };
            current.set(Some(toast));

            let current = current.clone();
            let serial = serial.clone();
            Timeout::new(config::TOAST_DURATION_MS, move || {
                if *serial.borrow() == mine {
                    current.set(None);
                }
            })
            .forget();
        }))
    };

    let dismiss = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(None))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            {
                if let Some(toast) = (*current).as_ref() {
                    html! {
                        <div class="toast" role="status"
                            style={format!("border-left: 4px solid {};", toast.kind.accent())}
                            onclick={dismiss}>
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <span class="toast-message">{&toast.message}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        display: flex;
                        gap: 0.75rem;
                        align-items: center;
                        max-width: 360px;
                        padding: 1rem 1.25rem;
                        background: rgba(26, 26, 26, 0.95);
                        color: #fff;
                        border-radius: 12px;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                        cursor: pointer;
                        z-index: 100;
                        animation: toastIn 0.3s ease-out;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

/// Toaster from the nearest provider. Outside one, toasts only reach the log.
#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        Toaster(Callback::from(|toast: Toast| {
            log::info!("toast ({:?}): {}", toast.kind, toast.message);
        }))
    })
}
