use leptos::html::Div;
use leptos::*;

use crate::utils::dom::{self, ViewportWatch};

/// Timing of a CSS transition, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
        }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Card entrance, staggered by position in the grid.
    pub fn staggered(duration: f64, index: usize) -> Self {
        Self::new(duration).delayed(index as f64 * 0.1)
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}s; transition-delay: {}s;",
            trim_seconds(self.duration),
            trim_seconds(self.delay)
        )
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(0.6)
    }
}

fn trim_seconds(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Wraps content that animates in the first time it scrolls into view. The
/// wrapper gains `is-visible` once and keeps it.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] transition: Transition,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let node = create_node_ref::<Div>();
    let (visible, set_visible) = create_signal(false);
    let watch = store_value(None::<ViewportWatch>);

    node.on_load(move |element| {
        match dom::observe_visibility(&element, 0.1, move || {
            let _ = set_visible.try_set(true);
        }) {
            Ok(handle) => watch.set_value(Some(handle)),
            Err(err) => {
                log::debug!("Viewport observer unavailable, revealing immediately: {}", err);
                set_visible.set(true);
            }
        }
    });
    on_cleanup(move || {
        let _ = watch.try_update_value(|slot| slot.take());
    });

    let classes = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {}", class)
    };

    view! {
        <div
            node_ref=node
            class=classes
            class:is-visible=move || visible.get()
            style=transition.style()
            on:click=move |_| {
                if let Some(cb) = on_click.as_ref() {
                    cb.call(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_style_lists_duration_and_delay() {
        assert_eq!(
            Transition::new(0.6).style(),
            "transition-duration: 0.6s; transition-delay: 0s;"
        );
        assert_eq!(
            Transition::new(0.6).delayed(0.2).style(),
            "transition-duration: 0.6s; transition-delay: 0.2s;"
        );
    }

    #[test]
    fn card_delays_step_by_a_tenth() {
        assert_eq!(Transition::staggered(0.6, 0).delay, 0.0);
        assert!((Transition::staggered(0.6, 2).delay - 0.2).abs() < 1e-9);
        assert_eq!(
            Transition::staggered(0.6, 3).style(),
            "transition-duration: 0.6s; transition-delay: 0.3s;"
        );
    }
}
