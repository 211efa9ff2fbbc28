#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::home::repository::{Project, ProjectRepository};
    use crate::state::modal::{ScrollLock, ScrollLockHandle};
    use std::cell::RefCell;
    use std::rc::Rc;

    pub fn linked_project() -> Project {
        ProjectRepository::embedded()
            .find(0)
            .cloned()
            .expect("embedded catalog has TON Tracker")
    }

    pub fn detail_only_project() -> Project {
        Project {
            id: 9,
            title: "Studio Dashboard".into(),
            description: "Internal analytics dashboard for a design studio.".into(),
            category: "Web App".into(),
            image: "https://example.com/dashboard.png".into(),
            technologies: vec!["Rust".into(), "Leptos".into()],
            features: vec!["Live charts".into(), "Team roles".into()],
            link: None,
        }
    }

    /// Scroll lock that records every state it was asked to apply.
    #[derive(Clone, Default)]
    pub struct RecordingScrollLock {
        history: Rc<RefCell<Vec<bool>>>,
    }

    impl RecordingScrollLock {
        pub fn handle(&self) -> ScrollLockHandle {
            ScrollLockHandle::new(self.clone())
        }

        pub fn is_locked(&self) -> bool {
            self.history.borrow().last().copied().unwrap_or(false)
        }

        pub fn history(&self) -> Vec<bool> {
            self.history.borrow().clone()
        }
    }

    impl ScrollLock for RecordingScrollLock {
        fn set_locked(&self, locked: bool) {
            self.history.borrow_mut().push(locked);
        }
    }
}
