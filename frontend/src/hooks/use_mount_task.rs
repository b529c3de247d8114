use shared::task::{MountTask, TaskToken};
use yew::prelude::*;

/// A task scoped to the component's lifetime. Results that land after unmount are dropped.
#[hook]
pub fn use_mount_task() -> TaskToken {
    let task = use_memo((), |_| MountTask::new());

    {
        let task = task.clone();
        use_effect_with((), move |_| move || task.discard());
    }

    task.token()
}
