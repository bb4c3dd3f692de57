//! # Project Store
//!
//! The one mutable resource of a board session: an ordered list of
//! [`Project`]s (insertion order) plus the listeners that want to hear about
//! changes.
//!
//! ## Sharing
//!
//! A session creates exactly one store and hands a [`SharedStore`] to every view
//! that needs it. There is no global accessor, which keeps views testable
//! against a store of their own.
//!
//! ## Notification
//!
//! Every successful mutation notifies all listeners synchronously, before the
//! mutating call returns. Each listener receives its own snapshot of the full
//! sequence, already reflecting the mutation. Mutations that change nothing
//! (moving to the current lane, moving an unknown id) do not notify.
//!
//! The store uses interior mutability and releases its borrow of the project
//! list before calling listeners, so a listener may read the store (or even
//! mutate it) without tripping a `RefCell` borrow failure.

use crate::model::{Project, ProjectStatus};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

pub mod state;

pub use state::{Listener, State};

pub type SharedStore = Rc<ProjectStore>;

#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    state: State<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Rc::new(Self::new())
    }

    /// Appends a new active project and notifies. Input is not validated here.
    pub fn add_project(&self, title: String, description: String, effort: f64) -> Project {
        let project = Project::new(title, description, effort);
        debug!(id = %project.id, title = %project.title, effort, "project added");
        self.projects.borrow_mut().push(project.clone());
        self.update_listeners();
        project
    }

    /// Moves a project to `new_status`.
    ///
    /// Returns `false`, without notifying, when the id is unknown or the project
    /// is already in that lane.
    pub fn move_project(&self, id: &str, new_status: ProjectStatus) -> bool {
        {
            let mut projects = self.projects.borrow_mut();
            let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
                debug!(id, "move ignored: unknown project");
                return false;
            };
            if project.status == new_status {
                debug!(id, status = %new_status, "move ignored: already there");
                return false;
            }
            project.status = new_status;
        }
        debug!(id, status = %new_status, "project moved");
        self.update_listeners();
        true
    }

    /// Registers a listener for every future mutation. It is not called with
    /// the current contents; use [`ProjectStore::snapshot`] for that.
    pub fn add_listener<F>(&self, listener: F)
    where
        F: Fn(Vec<Project>) + 'static,
    {
        self.state.add_listener(Rc::new(listener));
    }

    /// Copy of the current project sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn find(&self, id: &str) -> Option<Project> {
        self.projects.borrow().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }

    fn update_listeners(&self) {
        let snapshot = self.snapshot();
        self.state.notify(&snapshot);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::RefCell;

    /// A store with a listener that records every snapshot it receives.
    pub struct StoreFixture {
        pub store: SharedStore,
        pub seen: Rc<RefCell<Vec<Vec<Project>>>>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let store = ProjectStore::shared();
            let seen: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));
            let sink = seen.clone();
            store.add_listener(move |snapshot| sink.borrow_mut().push(snapshot));
            Self { store, seen }
        }

        pub fn with_projects(self, count: usize) -> Self {
            for i in 0..count {
                self.store.add_project(
                    format!("Project {}", i + 1),
                    format!("Description {}", i + 1),
                    (i + 1) as f64,
                );
            }
            self
        }

        pub fn notifications(&self) -> usize {
            self.seen.borrow().len()
        }

        pub fn last_snapshot(&self) -> Option<Vec<Project>> {
            self.seen.borrow().last().cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_add_appends_active_project_and_notifies_once() {
        let fx = StoreFixture::new().with_projects(2);
        assert_eq!(fx.notifications(), 2);

        let added = fx.store.add_project("New".into(), "".into(), 4.0);
        assert_eq!(fx.notifications(), 3);
        assert_eq!(added.status, ProjectStatus::Active);

        let last = fx.last_snapshot().unwrap();
        assert_eq!(last.len(), 3);
        assert_eq!(last.last().unwrap().id, added.id);
    }

    #[test]
    fn test_ids_are_unique_and_non_empty() {
        let fx = StoreFixture::new().with_projects(50);
        let ids: HashSet<String> = fx.store.snapshot().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 50);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_move_to_same_status_is_silent() {
        let fx = StoreFixture::new().with_projects(1);
        let id = fx.store.snapshot()[0].id.clone();
        assert!(!fx.store.move_project(&id, ProjectStatus::Active));
        assert_eq!(fx.notifications(), 1);
    }

    #[test]
    fn test_move_to_other_status_mutates_only_target() {
        let fx = StoreFixture::new().with_projects(3);
        let before = fx.store.snapshot();
        let id = before[1].id.clone();

        assert!(fx.store.move_project(&id, ProjectStatus::Finished));
        assert_eq!(fx.notifications(), 4);

        let after = fx.last_snapshot().unwrap();
        assert_eq!(after[1].status, ProjectStatus::Finished);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].title, before[1].title);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let fx = StoreFixture::new().with_projects(2);
        let before = fx.store.snapshot();
        assert!(!fx.store.move_project("nope", ProjectStatus::Finished));
        assert_eq!(fx.notifications(), 2);
        assert_eq!(fx.store.snapshot(), before);
    }

    #[test]
    fn test_late_listener_gets_no_replay() {
        let fx = StoreFixture::new().with_projects(2);
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        fx.store.add_listener(move |_| c.set(c.get() + 1));
        assert_eq!(calls.get(), 0);

        fx.store.add_project("x".into(), "".into(), 0.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let fx = StoreFixture::new().with_projects(1);
        let mut snap = fx.store.snapshot();
        snap[0].title = "changed".into();
        assert_eq!(fx.store.snapshot()[0].title, "Project 1");
    }

    #[test]
    fn test_listener_observes_post_mutation_state() {
        let store = ProjectStore::shared();
        let reader = store.clone();
        let observed = Rc::new(Cell::new(0));
        let o = observed.clone();
        store.add_listener(move |snapshot| {
            assert_eq!(snapshot.len(), reader.len());
            o.set(reader.len());
        });
        store.add_project("a".into(), "".into(), 1.0);
        assert_eq!(observed.get(), 1);
    }

    #[test]
    fn test_find_locates_by_id() {
        let fx = StoreFixture::new().with_projects(2);
        let id = fx.store.snapshot()[1].id.clone();
        assert_eq!(fx.store.find(&id).unwrap().title, "Project 2");
        assert!(fx.store.find("missing").is_none());
        assert!(!fx.store.is_empty());
        assert_eq!(fx.store.listener_count(), 1);
    }
}
