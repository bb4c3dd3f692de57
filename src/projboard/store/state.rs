use std::cell::RefCell;
use std::rc::Rc;

/// Callback handed a fresh copy of the full item sequence.
pub type Listener<T> = Rc<dyn Fn(Vec<T>)>;

/// Grow-only listener registry.
///
/// There is no unsubscribe and no replay: a listener hears about mutations
/// that happen after it was added, never about earlier ones.
pub struct State<T> {
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> Default for State<T> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> State<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Calls every listener with its own copy of `items`.
    ///
    /// Iterates over a copy of the registry, so listeners may add listeners;
    /// those join from the next notification on.
    pub fn notify(&self, items: &[T]) {
        let listeners: Vec<Listener<T>> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(items.to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_notify_reaches_every_listener() {
        let state: State<u32> = State::new();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let hits = hits.clone();
            state.add_listener(Rc::new(move |items: Vec<u32>| {
                assert_eq!(items, vec![1, 2]);
                hits.set(hits.get() + 1);
            }));
        }
        state.notify(&[1, 2]);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_listener_added_during_notify_waits_for_next_round() {
        let state: Rc<State<u32>> = Rc::new(State::new());
        let late_hits = Rc::new(Cell::new(0));

        let registrar = state.clone();
        let late = late_hits.clone();
        state.add_listener(Rc::new(move |_: Vec<u32>| {
            let late = late.clone();
            registrar.add_listener(Rc::new(move |_: Vec<u32>| late.set(late.get() + 1)));
        }));

        state.notify(&[]);
        assert_eq!(late_hits.get(), 0);
        assert_eq!(state.listener_count(), 2);

        state.notify(&[]);
        assert_eq!(late_hits.get(), 1);
    }
}
