use shared::password_reset::ResetFormData;
use shared::ResetStatus;
use web_sys::{window, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AuthBackdrop, ImageCarousel, PasswordField};
use crate::config::BRAND_IMAGES;
use crate::hooks::use_reset_flow;
use crate::{styles, Route};

fn token_from_url() -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("token")
}

fn status_card(icon_class: &'static str, icon: &'static str, title: &'static str, body: Html) -> Html {
    html! {
        <AuthBackdrop>
            <div class={styles::CARD}>
                <div class={icon_class}>{icon}</div>
                <h2 class={styles::TEXT_H2}>{title}</h2>
                {body}
            </div>
        </AuthBackdrop>
    }
}

#[function_component(ResetPassword)]
pub fn reset_password() -> Html {
    let token = use_memo((), |_| token_from_url());
    let handle = use_reset_flow((*token).clone());
    let form = use_state(ResetFormData::default);

    let on_password = {
        let form = form.clone();
        Callback::from(move |password: String| {
            form.set(ResetFormData {
                password,
                ..(*form).clone()
            });
        })
    };

    let on_confirm = {
        let form = form.clone();
        Callback::from(move |confirm_password: String| {
            form.set(ResetFormData {
                confirm_password,
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submit = handle.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit((*form).clone());
        })
    };

    let brand_images = use_memo((), |_| BRAND_IMAGES.iter().copied().map(AttrValue::Static).collect::<Vec<_>>());

    let flow = &handle.flow;
    match flow.status() {
        ResetStatus::Verifying => status_card(
            styles::ICON_WRAPPER_INDIGO,
            "🔒",
            "Verifying Reset Link...",
            html! {
                <p class={styles::TEXT_BODY}>{"Please wait while we verify your password reset link."}</p>
            },
        ),
        ResetStatus::Success => status_card(
            styles::ICON_WRAPPER_GREEN,
            "✓",
            "Password Reset Successful!",
            html! {
                <>
                    <p class={classes!(styles::TEXT_BODY, "mb-8")}>
                        {"Your password has been successfully updated. You can now log in with your new password."}
                    </p>
                    <Link<Route> to={Route::Login} classes={styles::BUTTON_LINK}>{"← Back to Login"}</Link<Route>>
                </>
            },
        ),
        ResetStatus::TokenInvalid { message } => status_card(
            styles::ICON_WRAPPER_RED,
            "!",
            "Invalid Reset Link",
            html! {
                <>
                    <p class={styles::TEXT_ERROR}>{message.clone()}</p>
                    <div class="space-y-4">
                        <Link<Route> to={Route::ForgotPassword} classes={classes!(styles::BUTTON_LINK, "block")}>
                            {"Request New Reset Link"}
                        </Link<Route>>
                        <Link<Route> to={Route::Login} classes={styles::LINK}>{"← Back to Login"}</Link<Route>>
                    </div>
                </>
            },
        ),
        ResetStatus::TokenValid { .. } | ResetStatus::Submitting { .. } | ResetStatus::SubmitError { .. } => {
            let submitting = flow.is_busy();
            html! {
                <AuthBackdrop>
                    <div class={styles::CARD_WIDE}>
                        <div class="hidden md:flex md:w-1/2 bg-indigo-600 p-12 flex-col justify-between">
                            <h1 class="text-5xl font-black text-white leading-tight tracking-tighter">
                                {"Create New"}<br/>{"Password."}
                            </h1>
                            <ImageCarousel images={(*brand_images).clone()} class="rounded-2xl" />
                            <p class="text-white/70 text-sm font-medium leading-relaxed max-w-xs">
                                {"Choose a strong password to keep your account secure."}
                            </p>
                        </div>

                        <div class="flex-1 p-8 md:p-16 flex flex-col justify-center">
                            <div class="mb-10 text-center md:text-left">
                                <h2 class={styles::TEXT_H2_FORM}>{"Reset Password"}</h2>
                                <p class="text-slate-400 text-sm font-medium">
                                    {"Enter your new password for: "}
                                    <span class={styles::TEXT_EMAIL}>{flow.email().unwrap_or_default().to_string()}</span>
                                </p>
                            </div>

                            {
                                flow.error().map(|error| html! {
                                    <div class={classes!(styles::CARD_ERROR, "error-message")}>{error.to_string()}</div>
                                })
                            }

                            <form {onsubmit} class={styles::FORM}>
                                <PasswordField
                                    id="password"
                                    label="New Password"
                                    value={form.password.clone()}
                                    on_input={on_password}
                                    disabled={submitting}
                                />
                                <PasswordField
                                    id="confirm-password"
                                    label="Confirm Password"
                                    value={form.confirm_password.clone()}
                                    on_input={on_confirm}
                                    disabled={submitting}
                                />

                                <button type="submit" disabled={submitting} class={styles::BUTTON_PRIMARY}>
                                    { if submitting { "Updating Password..." } else { "Update Password →" } }
                                </button>
                            </form>

                            <div class="mt-8 text-center">
                                <Link<Route> to={Route::Login} classes={styles::LINK}>{"← Back to Login"}</Link<Route>>
                            </div>
                        </div>
                    </div>
                </AuthBackdrop>
            }
        }
    }
}
