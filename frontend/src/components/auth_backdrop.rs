use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AuthBackdropProps {
    #[prop_or_default]
    pub children: Html,
}

/// Full-screen backdrop shared by the auth pages.
#[function_component(AuthBackdrop)]
pub fn auth_backdrop(props: &AuthBackdropProps) -> Html {
    html! {
        <div class={styles::PAGE}>
            <div class={styles::BLOB_TOP}></div>
            <div class={styles::BLOB_BOTTOM}></div>
            {props.children.clone()}
        </div>
    }
}
