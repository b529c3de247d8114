use web_sys::window;
use yew::prelude::*;

use crate::components::{AuthBackdrop, LoginForm};
use crate::styles;

// The rest of the client lives outside this router.
const HOME_PATH: &str = "/home";

#[function_component(Login)]
pub fn login() -> Html {
    let on_success = Callback::from(|_: ()| {
        if let Some(window) = window() {
            let _ = window.location().set_href(HOME_PATH);
        }
    });

    html! {
        <AuthBackdrop>
            <div class={styles::CARD}>
                <h2 class={styles::TEXT_H2}>{"Welcome Back"}</h2>
                <p class={classes!(styles::TEXT_BODY, "mb-8")}>{"Sign in to continue."}</p>
                <LoginForm {on_success} />
            </div>
        </AuthBackdrop>
    }
}
