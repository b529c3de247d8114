use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::AuthBackdrop;
use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <AuthBackdrop>
            <div class={styles::CARD}>
                <h2 class={styles::TEXT_H2}>{"Page Not Found"}</h2>
                <Link<Route> to={Route::Login} classes={styles::LINK}>{"← Back to Login"}</Link<Route>>
            </div>
        </AuthBackdrop>
    }
}
