//! Thin wrappers over the browser APIs the page touches. Every lookup returns
//! a `DomError` instead of panicking; callers at the component edge log it and
//! carry on.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, Window,
};

use crate::utils::geometry::{ScrollSnapshot, SectionBounds, SectionId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no window object")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, DomError> {
    Err(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Reads the scroll position, viewport height and every `section[id]` box.
pub fn measure_scroll() -> Result<ScrollSnapshot, DomError> {
    let window = window()?;
    let scroll_y = window.scroll_y()?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let nodes = document()?.query_selector_all("section[id]")?;

    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        sections.push(SectionBounds::new(
            element.id(),
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ));
    }

    Ok(ScrollSnapshot {
        scroll_y,
        viewport_height,
        sections,
    })
}

pub fn try_scroll_to(id: &str) -> Result<(), DomError> {
    let target = element_by_id(id)?;
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Smooth-scrolls to a section; does nothing if the anchor is missing.
pub fn scroll_to_section(section: SectionId) {
    if let Err(err) = try_scroll_to(section.anchor()) {
        log::debug!("Skipping scroll to #{}: {}", section, err);
    }
}

pub fn try_open_external(url: &str) -> Result<(), DomError> {
    window()?.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")?;
    Ok(())
}

/// Opens `url` in a new browsing context without an opener reference.
pub fn open_external(url: &str) {
    if let Err(err) = try_open_external(url) {
        log::debug!("Could not open {}: {}", url, err);
    }
}

pub fn set_body_overflow(value: &str) -> Result<(), DomError> {
    body()?.style().set_property("overflow", value)?;
    Ok(())
}

pub fn body_overflow() -> Result<String, DomError> {
    Ok(body()?.style().get_property_value("overflow")?)
}

/// Live IntersectionObserver; disconnects when dropped.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_visible` the first time `element` intersects the viewport, then
/// stops observing.
pub fn observe_visibility(
    element: &Element,
    threshold: f64,
    on_visible: impl Fn() + 'static,
) -> Result<ViewportWatch, DomError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                on_visible();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    observer.observe(element);

    Ok(ViewportWatch {
        observer,
        _callback: callback,
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn lookups_report_missing_window_off_browser() {
        assert_eq!(window().err(), Some(DomError::NoWindow));
        assert_eq!(element_by_id("contact").err(), Some(DomError::NoWindow));
        assert_eq!(measure_scroll().err(), Some(DomError::NoWindow));
    }

    #[test]
    fn scroll_and_open_helpers_no_op_without_browser() {
        scroll_to_section(SectionId::Contact);
        open_external("https://t.me/GiftsBattle_bot");
        assert!(set_body_overflow("hidden").is_err());
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(
            DomError::MissingElement("cases".into()).to_string(),
            "element #cases not found"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn body_overflow_round_trips() {
        set_body_overflow("hidden").unwrap();
        assert_eq!(body_overflow().unwrap(), "hidden");
        set_body_overflow("unset").unwrap();
        assert_eq!(body_overflow().unwrap(), "unset");
    }

    #[wasm_bindgen_test]
    fn scrolling_to_missing_anchor_reports_it() {
        assert_eq!(
            try_scroll_to("no-such-section").err(),
            Some(DomError::MissingElement("no-such-section".into()))
        );
    }

    #[wasm_bindgen_test]
    fn measure_finds_mounted_sections() {
        let document = document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_id("cases");
        body().unwrap().append_child(&section).unwrap();

        let snapshot = measure_scroll().unwrap();
        assert!(snapshot.section(SectionId::Cases).is_some());

        section.remove();
    }
}
