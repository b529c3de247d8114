use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PasswordFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Password input with a show/hide toggle.
#[function_component(PasswordField)]
pub fn password_field(props: &PasswordFieldProps) -> Html {
    let visible = use_state(|| false);

    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };

    html! {
        <div class="space-y-2 text-left">
            <label for={props.id.clone()} class={styles::TEXT_LABEL}>{props.label.clone()}</label>
            <div class="relative">
                <input
                    id={props.id.clone()}
                    type={if *visible { "text" } else { "password" }}
                    value={props.value.clone()}
                    {oninput}
                    placeholder="••••••••"
                    required=true
                    disabled={props.disabled}
                    class={styles::INPUT}
                />
                <button type="button" onclick={toggle} class={styles::INPUT_TOGGLE}>
                    { if *visible { "Hide" } else { "Show" } }
                </button>
            </div>
        </div>
    }
}
