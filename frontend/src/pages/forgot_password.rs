use shared::constants::RESET_LINK_NOTICE;
use shared::ForgotStatus;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::AuthBackdrop;
use crate::hooks::use_forgot_flow;
use crate::{styles, Route};

/// Navigation state carried from the login form.
#[derive(Clone, Debug, PartialEq)]
pub struct ForgotPasswordState {
    pub email: String,
}

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let navigator = use_navigator();
    let email = use_location()
        .and_then(|location| location.state::<ForgotPasswordState>())
        .map(|state| state.email.clone());
    let handle = use_forgot_flow(email);
    let flow = &handle.flow;

    {
        let redirect = *flow.status() == ForgotStatus::Redirect;
        use_effect_with(redirect, move |redirect| {
            if *redirect {
                if let Some(navigator) = navigator {
                    navigator.replace(&Route::Login);
                }
            }
            || ()
        });
    }

    let onclick = {
        let send = handle.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };

    match flow.status() {
        ForgotStatus::Preparing | ForgotStatus::Redirect => html! {},
        _ => html! {
            <AuthBackdrop>
                <div class={styles::CARD}>
                    <div class={styles::ICON_WRAPPER_GREEN}>{"✓"}</div>

                    <h2 class={styles::TEXT_H2}>{"Ready to Send Reset Email!"}</h2>

                    <p class={classes!(styles::TEXT_BODY, "mb-2")}>
                        {"Click the button below to send a password reset email to:"}
                    </p>
                    <p class={classes!(styles::TEXT_EMAIL, "mb-6")}>{flow.email().unwrap_or_default().to_string()}</p>
                    <p class={styles::TEXT_HINT}>{RESET_LINK_NOTICE}</p>

                    {
                        flow.error().map(|error| html! {
                            <div class={classes!(styles::CARD_ERROR, "error-message")}>{error.to_string()}</div>
                        })
                    }

                    <div class="space-y-4">
                        <button {onclick} disabled={!flow.control_enabled()} class={styles::BUTTON_SEND}>
                            {
                                if flow.control_enabled() {
                                    html! { {flow.button_label()} }
                                } else {
                                    html! {
                                        <>
                                            <div class={styles::SPINNER}></div>
                                            {flow.button_label()}
                                        </>
                                    }
                                }
                            }
                        </button>

                        {
                            flow.show_sent_notice().then(|| html! {
                                <div class={classes!(styles::CARD_SUCCESS, "success-message")}>
                                    {"Password reset email sent! Check your inbox and spam folder."}
                                </div>
                            })
                        }

                        <Link<Route> to={Route::Login} classes={styles::BUTTON_MUTED}>
                            {"← Back to Login"}
                        </Link<Route>>
                    </div>
                </div>
            </AuthBackdrop>
        },
    }
}
