use crate::{
    state::scroll::{use_active_section, use_scrolled},
    utils::{dom, geometry::SectionId},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let scrolled = use_scrolled();
    let active = use_active_section();

    view! {
        <header
            class="header"
            class:scrolled=move || scrolled.get()
            data-scrolled=move || scrolled.get().to_string()
        >
            <div class="container">
                <div class="header-content">
                    <div class="logo-container">
                        <div class="logo-icon">
                            <span class="logo-glyph">{"↗"}</span>
                        </div>
                        <span class="logo-text">"NextTech"</span>
                    </div>

                    <nav class="nav">
                        <NavLink section=SectionId::Home label="Home" active=active/>
                        <NavLink section=SectionId::Cases label="Cases" active=active/>
                        <a href="#about" class="nav-link">"About"</a>
                        <button
                            type="button"
                            class="contact-btn"
                            on:click=move |_| dom::scroll_to_section(SectionId::Contact)
                        >
                            "Contact"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(
    section: SectionId,
    label: &'static str,
    active: ReadSignal<SectionId>,
) -> impl IntoView {
    let is_active = move || active.get() == section;
    view! {
        <a
            href=section.href()
            class="nav-link"
            class:active=is_active
            data-active=move || is_active().to_string()
        >
            {label}
        </a>
    }
}
