use gloo_timers::callback::Timeout;
use shared::constants::RESEND_SETTLE_MS;
use shared::{FlowCell, ForgotPasswordFlow, ForgotStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_mount_task::use_mount_task;
use crate::services::auth_service;

#[derive(Clone)]
pub struct ForgotFlowHandle {
    pub flow: ForgotPasswordFlow,
    pub send: Callback<()>,
}

#[hook]
pub fn use_forgot_flow(email: Option<String>) -> ForgotFlowHandle {
    let cell = use_memo((), move |_| FlowCell::new(ForgotPasswordFlow::new(email)));
    let rerender = use_force_update();
    let task = use_mount_task();
    let flow = cell.snapshot();

    {
        let cell = (*cell).clone();
        let rerender = rerender.clone();
        use_effect_with((), move |_| {
            // Only moves to Ready (or Redirect); the email is never sent on load.
            cell.update(|flow| {
                flow.prepare();
            });
            rerender.force_update();
            || ()
        });
    }

    // Hold the control briefly after a successful send before re-enabling it.
    {
        let cell = (*cell).clone();
        let rerender = rerender.clone();
        let settling = *flow.status() == (ForgotStatus::Sent { settling: true });
        use_effect_with(settling, move |settling| {
            let timeout = settling.then(|| {
                Timeout::new(RESEND_SETTLE_MS, move || {
                    cell.update(|flow| flow.settle());
                    rerender.force_update();
                })
            });
            move || drop(timeout)
        });
    }

    let send = {
        let cell = (*cell).clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            let Some(request) = cell.update(|flow| flow.begin_send()) else {
                return;
            };
            rerender.force_update();

            let cell = cell.clone();
            let rerender = rerender.clone();
            let task = task.clone();
            spawn_local(async move {
                let outcome = auth_service().forgot_password(&request).await;
                task.complete(outcome, |outcome| {
                    cell.update(|flow| flow.finish_send(outcome));
                    rerender.force_update();
                });
            });
        })
    };

    ForgotFlowHandle { flow, send }
}
