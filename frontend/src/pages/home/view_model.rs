use crate::pages::home::repository::{Project, ProjectRepository};
use crate::utils::dom;
use leptos::*;

/// What a click on a portfolio card does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    OpenExternal(String),
    ShowDetails(Project),
}

impl CardAction {
    pub fn for_project(project: &Project) -> Self {
        match &project.link {
            Some(link) => CardAction::OpenExternal(link.clone()),
            None => CardAction::ShowDetails(project.clone()),
        }
    }
}

#[derive(Clone)]
pub struct CasesViewModel {
    pub repository: ProjectRepository,
    pub selected: RwSignal<Option<Project>>,
}

impl CasesViewModel {
    pub fn new() -> Self {
        let repository =
            use_context::<ProjectRepository>().unwrap_or_else(ProjectRepository::embedded);
        Self {
            repository,
            selected: create_rw_signal(None),
        }
    }

    pub fn projects(&self) -> Vec<Project> {
        self.repository.all().to_vec()
    }

    /// Handles a card click: linked projects open in a new tab, the rest open
    /// the details modal.
    pub fn activate(&self, project: &Project) -> CardAction {
        let action = CardAction::for_project(project);
        match &action {
            CardAction::OpenExternal(url) => dom::open_external(url),
            CardAction::ShowDetails(project) => self.selected.set(Some(project.clone())),
        }
        action
    }

    pub fn clear_selection(&self) {
        self.selected.set(None);
    }
}

pub fn use_cases_view_model() -> CasesViewModel {
    match use_context::<CasesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = CasesViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
