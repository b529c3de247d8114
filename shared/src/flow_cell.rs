use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a flow's current state.
///
/// Transitions always run against the latest value, so an async result applied
/// between two renders is never overwritten by a copy taken at render time.
#[derive(Debug)]
pub struct FlowCell<F> {
    inner: Rc<RefCell<F>>,
}

impl<F> Clone for FlowCell<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<F: Clone> FlowCell<F> {
    pub fn new(flow: F) -> Self {
        Self {
            inner: Rc::new(RefCell::new(flow)),
        }
    }

    /// Applies a transition and hands back whatever it produced (e.g. the request to send).
    pub fn update<R>(&self, transition: impl FnOnce(&mut F) -> R) -> R {
        transition(&mut self.inner.borrow_mut())
    }

    pub fn snapshot(&self) -> F {
        self.inner.borrow().clone()
    }
}
