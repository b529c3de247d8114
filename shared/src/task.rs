use std::cell::Cell;
use std::rc::Rc;

/// Scope for work started when a page mounts.
///
/// Results produced after [`MountTask::discard`] (or after the task is dropped)
/// are thrown away instead of being applied to view state.
#[derive(Debug, Default)]
pub struct MountTask {
    discarded: Rc<Cell<bool>>,
}

/// Handle carried into the async block; applies its result only while the task is live.
#[derive(Debug, Clone)]
pub struct TaskToken {
    discarded: Rc<Cell<bool>>,
}

impl MountTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> TaskToken {
        TaskToken {
            discarded: self.discarded.clone(),
        }
    }

    pub fn discard(&self) {
        self.discarded.set(true);
    }
}

impl Drop for MountTask {
    fn drop(&mut self) {
        self.discarded.set(true);
    }
}

impl TaskToken {
    pub fn is_live(&self) -> bool {
        !self.discarded.get()
    }

    /// Runs `apply` with `value` if the task is still live. Returns whether it ran.
    pub fn complete<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            log::debug!("Dropping result of a discarded mount task");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_token_applies() {
        let task = MountTask::new();
        let token = task.token();
        let mut seen = None;
        assert!(token.complete(5, |v| seen = Some(v)));
        assert_eq!(seen, Some(5));
    }

    #[test]
    fn test_discarded_token_drops_result() {
        let task = MountTask::new();
        let token = task.token();
        task.discard();
        let mut seen = None;
        assert!(!token.complete(5, |v| seen = Some(v)));
        assert_eq!(seen, None);
    }

    #[test]
    fn test_drop_discards() {
        let token = {
            let task = MountTask::new();
            task.token()
        };
        assert!(!token.is_live());
    }
}
