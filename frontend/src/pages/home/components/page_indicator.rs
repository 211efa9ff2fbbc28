use crate::{
    pages::home::utils::{bar_style, format_page_number, indicator_style, opacity_css},
    state::scroll::use_current_page,
    utils::geometry::PAGE_COUNT,
};
use leptos::*;

/// Fixed side indicator numbering the page sections.
#[component]
pub fn PageIndicator() -> impl IntoView {
    let current = use_current_page();

    view! {
        <div class="page-indicator">
            {(1..=PAGE_COUNT)
                .map(|page| {
                    let is_active = move || current.get() == page;
                    view! {
                        <div
                            class="indicator-line"
                            class:active=is_active
                            data-active=move || is_active().to_string()
                            style=move || format!("opacity: {};", opacity_css(indicator_style(is_active()).2))
                        >
                            <div class="indicator-number">{format_page_number(page)}</div>
                            <div
                                class="indicator-bar"
                                style=move || bar_style(is_active())
                            ></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
