use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 6_000;

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Transient status banner. Dismisses itself after a few seconds or when
/// the close button is clicked.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || {
                    on_dismiss.emit(());
                });
                timeout.forget();
                || ()
            },
            (),
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(());
        })
    };

    html! {
        <div class="notification-banner" role="status">
            <span>{props.message.clone()}</span>
            <button class="notification-close" {onclick}>{"×"}</button>

            <style>
                {r#"
                .notification-banner {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: #1d4ed8;
                    color: #fff;
                    padding: 0.9rem 1.25rem;
                    border-radius: 10px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    z-index: 100;
                    animation: notification-rise 0.3s ease-out;
                }

                .notification-close {
                    background: none;
                    border: none;
                    color: #bfdbfe;
                    font-size: 1.2rem;
                    cursor: pointer;
                    line-height: 1;
                }

                .notification-close:hover {
                    color: #fff;
                }

                @keyframes notification-rise {
                    from { transform: translate(-50%, 1rem); opacity: 0; }
                    to { transform: translate(-50%, 0); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
