use shared::constants::{INVALID_EMAIL_ERROR, LOGIN_FAILED_ERROR};
use shared::password_reset::LoginRequest;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_mount_task;
use crate::pages::ForgotPasswordState;
use crate::services::auth_service;
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_success: Callback<()>,
}

fn store_session(access_token: &str, user: &serde_json::Value) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item("access_token", access_token);
        let _ = storage.set_item("user", &user.to_string());
    }
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);
    let password_ref = use_node_ref();
    let navigator = use_navigator();
    let task = use_mount_task();

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let handle_submit = {
        let email = email.clone();
        let error = error.clone();
        let loading = loading.clone();
        let password_ref = password_ref.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }

            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let request = LoginRequest {
                email: (*email).trim().to_string(),
                password,
            };

            if request.validate().is_err() {
                error.set(INVALID_EMAIL_ERROR.to_string());
                return;
            }

            loading.set(true);
            error.set(String::new());

            let error = error.clone();
            let loading = loading.clone();
            let on_success = on_success.clone();
            let task = task.clone();
            spawn_local(async move {
                let outcome = auth_service().login(&request).await;
                task.complete(outcome, |outcome| {
                    loading.set(false);
                    match outcome {
                        Ok(response) => {
                            store_session(&response.access_token, &response.user);
                            on_success.emit(());
                        }
                        Err(e) => {
                            log::warn!("Login failed: {}", e);
                            error.set(e.user_message(LOGIN_FAILED_ERROR));
                        }
                    }
                });
            });
        })
    };

    let forgot_password = {
        let email = email.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push_with_state(
                    &Route::ForgotPassword,
                    ForgotPasswordState {
                        email: (*email).trim().to_string(),
                    },
                );
            }
        })
    };

    html! {
        <form onsubmit={handle_submit} class={styles::FORM}>
            {
                (!(*error).is_empty()).then(|| html! {
                    <div class={classes!(styles::CARD_ERROR, "error-message")}>{&*error}</div>
                })
            }

            <div class="space-y-2 text-left">
                <label for="email" class={styles::TEXT_LABEL}>{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    required=true
                    disabled={*loading}
                    placeholder="you@example.com"
                    class={styles::INPUT}
                />
            </div>

            <div class="space-y-2 text-left">
                <label for="password" class={styles::TEXT_LABEL}>{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    ref={password_ref}
                    required=true
                    disabled={*loading}
                    placeholder="••••••••"
                    class={styles::INPUT}
                />
            </div>

            <div class="text-right">
                <a href="/forgot-password" onclick={forgot_password} class={styles::LINK_SMALL}>
                    {"Forgot password?"}
                </a>
            </div>

            <button type="submit" disabled={*loading} class={styles::BUTTON_PRIMARY}>
                { if *loading { "Signing in..." } else { "Sign In" } }
            </button>
        </form>
    }
}
