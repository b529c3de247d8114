use shared::password_reset::ResetFormData;
use shared::{FlowCell, PasswordResetFlow};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_mount_task::use_mount_task;
use crate::services::auth_service;

#[derive(Clone)]
pub struct ResetFlowHandle {
    pub flow: PasswordResetFlow,
    pub submit: Callback<ResetFormData>,
}

/// Owns the reset-password flow for one page visit: one verification on mount, one call per submit.
#[hook]
pub fn use_reset_flow(token: Option<String>) -> ResetFlowHandle {
    let cell = use_memo((), move |_| FlowCell::new(PasswordResetFlow::new(token)));
    let rerender = use_force_update();
    let task = use_mount_task();

    {
        let cell = (*cell).clone();
        let rerender = rerender.clone();
        let task = task.clone();
        use_effect_with((), move |_| {
            let pending = cell.update(|flow| flow.pending_verification().map(str::to_string));
            if let Some(token) = pending {
                spawn_local(async move {
                    let outcome = auth_service().verify_reset_token(&token).await;
                    task.complete(outcome, |outcome| {
                        cell.update(|flow| flow.apply_verification(outcome));
                        rerender.force_update();
                    });
                });
            }
            || ()
        });
    }

    let submit = {
        let cell = (*cell).clone();
        let rerender = rerender.clone();
        Callback::from(move |form: ResetFormData| {
            let request = cell.update(|flow| flow.begin_submit(&form));
            rerender.force_update();

            if let Ok(request) = request {
                let cell = cell.clone();
                let rerender = rerender.clone();
                let task = task.clone();
                spawn_local(async move {
                    let outcome = auth_service().reset_password(&request).await;
                    task.complete(outcome, |outcome| {
                        cell.update(|flow| flow.apply_submission(outcome));
                        rerender.force_update();
                    });
                });
            }
        })
    };

    ResetFlowHandle {
        flow: cell.snapshot(),
        submit,
    }
}
