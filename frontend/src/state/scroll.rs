//! Page-wide scroll observable.
//!
//! One window `scroll` listener feeds a [`ScrollHub`]. The hub derives every
//! scroll-dependent value once per event and notifies a topic's subscribers
//! only when that value changed. Components subscribe through the `use_*`
//! hooks, which tie the subscription to the component's lifetime.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::*;

use crate::{
    config::{self, SiteConfig},
    utils::{
        dom,
        geometry::{self, HeroMotion, ScrollSnapshot, SectionId, NAV_SECTIONS},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTopic {
    Scrolled,
    ActiveSection,
    CurrentPage,
    HeroMotion,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollUpdate {
    Scrolled(bool),
    ActiveSection(SectionId),
    CurrentPage(usize),
    HeroMotion(HeroMotion),
}

impl ScrollUpdate {
    pub fn topic(&self) -> ScrollTopic {
        match self {
            ScrollUpdate::Scrolled(_) => ScrollTopic::Scrolled,
            ScrollUpdate::ActiveSection(_) => ScrollTopic::ActiveSection,
            ScrollUpdate::CurrentPage(_) => ScrollTopic::CurrentPage,
            ScrollUpdate::HeroMotion(_) => ScrollTopic::HeroMotion,
        }
    }
}

/// Thresholds the hub applies to each snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollPolicy {
    pub scrolled_threshold: f64,
    pub active_section_offset: f64,
    pub nav_sections: Vec<SectionId>,
}

impl ScrollPolicy {
    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self {
            scrolled_threshold: cfg.scrolled_threshold,
            active_section_offset: cfg.active_section_offset,
            nav_sections: NAV_SECTIONS.to_vec(),
        }
    }
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Most recent derived values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollLatest {
    pub scrolled: bool,
    pub active_section: SectionId,
    pub current_page: usize,
    pub hero: HeroMotion,
}

impl Default for ScrollLatest {
    fn default() -> Self {
        Self {
            scrolled: false,
            active_section: SectionId::Home,
            current_page: 1,
            hero: HeroMotion::REST,
        }
    }
}

impl ScrollLatest {
    fn derive(&self, policy: &ScrollPolicy, snapshot: &ScrollSnapshot) -> Self {
        let nav_probe = snapshot.scroll_y + policy.active_section_offset;
        Self {
            scrolled: geometry::is_scrolled(snapshot.scroll_y, policy.scrolled_threshold),
            active_section: geometry::active_section(
                &snapshot.sections,
                &policy.nav_sections,
                nav_probe,
            )
            .unwrap_or(self.active_section),
            current_page: geometry::current_page(&snapshot.sections, snapshot.viewport_center())
                .unwrap_or(self.current_page),
            hero: snapshot
                .section(SectionId::Home)
                .map(|hero| HeroMotion::at(hero, snapshot.scroll_y))
                .unwrap_or(self.hero),
        }
    }

    pub fn get(&self, topic: ScrollTopic) -> ScrollUpdate {
        match topic {
            ScrollTopic::Scrolled => ScrollUpdate::Scrolled(self.scrolled),
            ScrollTopic::ActiveSection => ScrollUpdate::ActiveSection(self.active_section),
            ScrollTopic::CurrentPage => ScrollUpdate::CurrentPage(self.current_page),
            ScrollTopic::HeroMotion => ScrollUpdate::HeroMotion(self.hero),
        }
    }

    fn changes_from(&self, previous: &Self) -> Vec<ScrollUpdate> {
        [
            ScrollTopic::Scrolled,
            ScrollTopic::ActiveSection,
            ScrollTopic::CurrentPage,
            ScrollTopic::HeroMotion,
        ]
        .into_iter()
        .map(|topic| self.get(topic))
        .filter(|update| *update != previous.get(update.topic()))
        .collect()
    }
}

type Listener = Rc<dyn Fn(ScrollUpdate)>;

struct Subscriber {
    id: u64,
    topic: ScrollTopic,
    listener: Listener,
}

struct HubInner {
    policy: ScrollPolicy,
    latest: ScrollLatest,
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

#[derive(Clone)]
pub struct ScrollHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ScrollHub {
    pub fn new(policy: ScrollPolicy) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                policy,
                latest: ScrollLatest::default(),
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn latest(&self) -> ScrollLatest {
        self.inner.borrow().latest
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Registers `listener` for `topic`. The listener stays registered until
    /// the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(
        &self,
        topic: ScrollTopic,
        listener: impl Fn(ScrollUpdate) + 'static,
    ) -> ScrollSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push(Subscriber {
            id,
            topic,
            listener: Rc::new(listener),
        });
        ScrollSubscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Recomputes every derived value from `snapshot` and notifies the
    /// subscribers of each value that changed.
    pub fn publish(&self, snapshot: &ScrollSnapshot) {
        let pending: Vec<(Listener, ScrollUpdate)> = {
            let mut inner = self.inner.borrow_mut();
            let next = inner.latest.derive(&inner.policy, snapshot);
            let changes = next.changes_from(&inner.latest);
            inner.latest = next;

            let mut pending = Vec::new();
            for update in changes {
                for sub in inner.subscribers.iter().filter(|sub| sub.topic == update.topic()) {
                    pending.push((sub.listener.clone(), update));
                }
            }
            pending
        };
        // Listeners run with the hub released so they may subscribe or drop
        // subscriptions themselves.
        for (listener, update) in pending {
            listener(update);
        }
    }
}

/// Guard returned by [`ScrollHub::subscribe`].
pub struct ScrollSubscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.subscribers.retain(|sub| sub.id != self.id);
            } else {
                log::warn!("Scroll subscription {} dropped during publish", self.id);
            }
        }
    }
}

/// Measures the page and publishes the result; a page without a window is
/// left untouched.
pub fn refresh(hub: &ScrollHub) {
    match dom::measure_scroll() {
        Ok(snapshot) => hub.publish(&snapshot),
        Err(err) => log::debug!("Scroll measurement skipped: {}", err),
    }
}

/// Creates the page hub, provides it as context and attaches the single window
/// scroll listener, which is removed when the owning scope is cleaned up.
pub fn provide_scroll_hub() -> ScrollHub {
    let hub = ScrollHub::new(ScrollPolicy::from_config(config::current()));
    provide_context(hub.clone());

    let publisher = hub.clone();
    let handle = window_event_listener(ev::scroll, move |_| refresh(&publisher));
    on_cleanup(move || handle.remove());

    refresh(&hub);
    hub
}

pub fn use_scroll_hub() -> ScrollHub {
    match use_context::<ScrollHub>() {
        Some(hub) => hub,
        None => provide_scroll_hub(),
    }
}

fn track<T>(topic: ScrollTopic, pick: impl Fn(ScrollUpdate) -> Option<T> + 'static) -> ReadSignal<T>
where
    T: Clone + Default + 'static,
{
    let hub = use_scroll_hub();
    let initial = pick(hub.latest().get(topic)).unwrap_or_default();
    let (value, set_value) = create_signal(initial);
    let subscription = hub.subscribe(topic, move |update| {
        if let Some(next) = pick(update) {
            // The owner may already be gone if it unsubscribed mid-publish.
            let _ = set_value.try_set(next);
        }
    });
    on_cleanup(move || drop(subscription));
    value
}

pub fn use_scrolled() -> ReadSignal<bool> {
    track(ScrollTopic::Scrolled, |update| match update {
        ScrollUpdate::Scrolled(value) => Some(value),
        _ => None,
    })
}

pub fn use_active_section() -> ReadSignal<SectionId> {
    track(ScrollTopic::ActiveSection, |update| match update {
        ScrollUpdate::ActiveSection(section) => Some(section),
        _ => None,
    })
}

pub fn use_current_page() -> ReadSignal<usize> {
    track(ScrollTopic::CurrentPage, |update| match update {
        ScrollUpdate::CurrentPage(index) => Some(index),
        _ => None,
    })
}

pub fn use_hero_motion() -> ReadSignal<HeroMotion> {
    track(ScrollTopic::HeroMotion, |update| match update {
        ScrollUpdate::HeroMotion(motion) => Some(motion),
        _ => None,
    })
}
