use crate::{
    pages::home::repository::Project,
    state::modal::{use_scroll_lock, CloseReason, ModalController, ModalPhase},
    utils::timing::after,
};
use leptos::ev::MouseEvent;
use leptos::*;

/// Shared handles the modal's event handlers and timers work through.
#[derive(Clone, Copy)]
struct ModalHandles {
    controller: StoredValue<ModalController>,
    phase: RwSignal<ModalPhase>,
    shown: RwSignal<Option<Project>>,
    armed: StoredValue<Option<u64>>,
}

impl ModalHandles {
    fn publish(self, next: ModalPhase) {
        if self.phase.try_set(next).is_some() {
            return;
        }
        if next == ModalPhase::Closed {
            self.shown.set(None);
        }
        let Some(delay) = next.settle_after() else {
            return;
        };
        let Some(generation) = self
            .controller
            .try_with_value(|controller| controller.generation())
        else {
            return;
        };
        let fresh = self.armed.try_update_value(|armed| {
            let fresh = *armed != Some(generation);
            *armed = Some(generation);
            fresh
        });
        if fresh != Some(true) {
            return;
        }
        after(delay, move || {
            let settled = self
                .controller
                .try_update_value(|controller| controller.finish_transition(next, generation));
            if let Some(phase) = settled {
                if phase != next {
                    self.publish(phase);
                }
            }
        });
    }

    fn close(self, reason: CloseReason) {
        if let Some(next) = self
            .controller
            .try_update_value(|controller| controller.close(reason))
        {
            self.publish(next);
        }
    }
}

/// Project details dialog. Open while `project` holds a record; the overlay
/// and the close button ask the parent to clear it through `on_close`.
#[component]
pub fn ProjectModal(
    #[prop(into)] project: Signal<Option<Project>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let lock = use_scroll_lock();
    let initial = project.get_untracked();
    let controller = store_value(ModalController::new(lock.clone(), initial.is_some()));
    let handles = ModalHandles {
        controller,
        phase: create_rw_signal(controller.with_value(|c| c.phase())),
        shown: create_rw_signal(initial),
        armed: store_value(None),
    };

    create_effect(move |_| {
        let selection = project.get();
        let selected = selection.is_some();
        if selection.is_some() {
            handles.shown.set(selection);
        }
        if let Some(next) = handles
            .controller
            .try_update_value(|controller| controller.sync_selection(selected))
        {
            handles.publish(next);
        }
    });

    on_cleanup(move || lock.set_locked(false));

    let dismiss = move |reason: CloseReason| {
        handles.close(reason);
        on_close.call(());
    };

    view! {
        <Show when=move || handles.phase.get().is_visible()>
            <div
                class="modal-overlay"
                data-phase=move || handles.phase.get().as_str()
                on:click=move |_| dismiss(CloseReason::Overlay)
            ></div>
            <div
                class="project-modal"
                role="dialog"
                data-phase=move || handles.phase.get().as_str()
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <button
                    type="button"
                    class="modal-close"
                    on:click=move |_| dismiss(CloseReason::CloseButton)
                >
                    "×"
                </button>
                {move || handles.shown.get().map(|project| view! { <ProjectDetails project=project/> })}
            </div>
        </Show>
    }
}

#[component]
fn ProjectDetails(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        category,
        image,
        technologies,
        features,
        ..
    } = project;

    view! {
        <div class="project-modal-content">
            <div class="project-modal-image">
                <img src=image alt=title.clone()/>
            </div>

            <div class="project-modal-info">
                <div class="project-modal-header">
                    <span class="project-modal-category">{category}</span>
                    <h2 class="project-modal-title">{title}</h2>
                </div>

                <p class="project-modal-description">{description}</p>

                <div class="project-modal-section">
                    <h3 class="project-modal-section-title">"Key Features"</h3>
                    <div class="project-modal-features">
                        {features
                            .into_iter()
                            .map(|feature| view! {
                                <div class="project-modal-feature">
                                    <span class="feature-icon">"✓"</span>
                                    <span>{feature}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="project-modal-section">
                    <h3 class="project-modal-section-title">"Technologies"</h3>
                    <div class="project-modal-technologies">
                        {technologies
                            .into_iter()
                            .map(|tech| view! { <span class="project-tech-tag">{tech}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::modal::ScrollLockHandle;
    use crate::test_support::helpers::{detail_only_project, RecordingScrollLock};
    use crate::test_support::ssr::render_with;

    fn render_modal(lock: &RecordingScrollLock, project: Option<Project>) -> String {
        let handle: ScrollLockHandle = lock.handle();
        render_with(
            move || provide_context(handle),
            move || {
                view! {
                    <ProjectModal
                        project=Signal::derive(move || project.clone())
                        on_close=Callback::new(|_| {})
                    />
                }
            },
        )
    }

    #[test]
    fn open_modal_shows_record_verbatim() {
        let lock = RecordingScrollLock::default();
        let project = detail_only_project();
        let html = render_modal(&lock, Some(project.clone()));

        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("data-phase=\"opening\""));
        assert!(html.contains(&project.title));
        assert!(html.contains(&project.description));
        assert!(html.contains(&project.category));
        for feature in &project.features {
            assert!(html.contains(feature.as_str()));
        }
        for tech in &project.technologies {
            assert!(html.contains(tech.as_str()));
        }
        assert_eq!(lock.history().first(), Some(&true));
        // render_with disposes the runtime, which unmounts the modal.
        assert!(!lock.is_locked());
    }

    #[test]
    fn closed_modal_renders_nothing_and_never_locks() {
        let lock = RecordingScrollLock::default();
        let html = render_modal(&lock, None);
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("Key Features"));
        assert!(!lock.history().contains(&true));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::test_support::helpers::detail_only_project;
    use crate::utils::dom;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn overlay_click_dismisses_and_restores_scroll() {
        let host: HtmlElement = dom::document()
            .unwrap()
            .create_element("div")
            .unwrap()
            .unchecked_into();
        dom::body().unwrap().append_child(&host).unwrap();

        let closed = Rc::new(Cell::new(false));
        let notified = closed.clone();
        mount_to(host.clone(), move || {
            let selected = create_rw_signal(Some(detail_only_project()));
            view! {
                <ProjectModal
                    project=Signal::derive(move || selected.get())
                    on_close=Callback::new(move |_| {
                        notified.set(true);
                        selected.set(None);
                    })
                />
            }
        });
        assert_eq!(dom::body_overflow().unwrap(), "hidden");

        let overlay: HtmlElement = host
            .query_selector(".modal-overlay")
            .unwrap()
            .expect("overlay is mounted while the modal is open")
            .unchecked_into();
        overlay.click();

        assert!(closed.get());
        assert_eq!(dom::body_overflow().unwrap(), "unset");
        host.remove();
    }
}
