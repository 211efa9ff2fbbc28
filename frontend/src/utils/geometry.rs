//! Scroll geometry: section bounds and the policies that turn a scroll
//! position into header, indicator and hero state.

use std::fmt;

/// Anchored page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    Cases,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Home, SectionId::Cases, SectionId::Contact];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Cases => "cases",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Sections the header nav highlights, in priority order.
pub const NAV_SECTIONS: [SectionId; 2] = [SectionId::Home, SectionId::Cases];

/// Number of entries in the side page indicator.
pub const PAGE_COUNT: usize = 3;

/// Layout box of a `section[id]` element, as reported by
/// `offsetTop` / `offsetHeight`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub anchor: String,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    pub fn new(anchor: impl Into<String>, offset_top: f64, offset_height: f64) -> Self {
        Self {
            anchor: anchor.into(),
            offset_top,
            offset_height,
        }
    }

    /// Half-open: the top edge belongs to the section, the bottom edge to the
    /// next one.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.offset_height
    }
}

/// Everything the scroll policies need from one scroll event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Every `section[id]` on the page, in document order.
    pub sections: Vec<SectionBounds>,
}

impl ScrollSnapshot {
    pub fn section(&self, id: SectionId) -> Option<&SectionBounds> {
        self.sections.iter().find(|bounds| bounds.anchor == id.anchor())
    }

    /// Vertical centre of the viewport in document coordinates.
    pub fn viewport_center(&self) -> f64 {
        self.scroll_y + self.viewport_height / 2.0
    }
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Last section of `priority` whose bounds contain `probe`. `None` when no
/// listed section contains it (or none of them is on the page).
pub fn active_section(
    sections: &[SectionBounds],
    priority: &[SectionId],
    probe: f64,
) -> Option<SectionId> {
    let mut active = None;
    for id in priority {
        let hit = sections
            .iter()
            .find(|bounds| bounds.anchor == id.anchor())
            .is_some_and(|bounds| bounds.contains(probe));
        if hit {
            active = Some(*id);
        }
    }
    active
}

/// One-based index of the last section (in document order) containing `probe`.
pub fn current_page(sections: &[SectionBounds], probe: f64) -> Option<usize> {
    sections
        .iter()
        .enumerate()
        .filter(|(_, bounds)| bounds.contains(probe))
        .last()
        .map(|(index, _)| index + 1)
}

/// Parallax state of the hero content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroMotion {
    /// Downward translation in pixels.
    pub offset_y: f64,
    pub opacity: f64,
}

impl HeroMotion {
    pub const REST: HeroMotion = HeroMotion {
        offset_y: 0.0,
        opacity: 1.0,
    };

    const MAX_OFFSET: f64 = 100.0;
    const FADE_END: f64 = 0.5;

    /// Progress runs from 0 when the hero's top meets the viewport top to 1
    /// when its bottom does. The content drifts down 100px over the full range
    /// and is fully faded at the halfway point.
    pub fn at(hero: &SectionBounds, scroll_y: f64) -> Self {
        let progress = if hero.offset_height > 0.0 {
            ((scroll_y - hero.offset_top) / hero.offset_height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            offset_y: progress * Self::MAX_OFFSET,
            opacity: (1.0 - progress / Self::FADE_END).clamp(0.0, 1.0),
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({:.2}px)", self.offset_y)
    }
}

impl Default for HeroMotion {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("cases", 800.0, 1200.0),
            SectionBounds::new("contact", 2000.0, 600.0),
        ]
    }

    #[test]
    fn bounds_are_half_open() {
        let cases = SectionBounds::new("cases", 800.0, 1200.0);
        assert!(!cases.contains(799.9));
        assert!(cases.contains(800.0));
        assert!(cases.contains(1999.9));
        assert!(!cases.contains(2000.0));
    }

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(
            active_section(&page(), &NAV_SECTIONS, 0.0 + 200.0),
            Some(SectionId::Home)
        );
    }

    #[test]
    fn crossing_cases_top_minus_offset_activates_cases() {
        let sections = page();
        assert_eq!(
            active_section(&sections, &NAV_SECTIONS, 599.0 + 200.0),
            Some(SectionId::Home)
        );
        assert_eq!(
            active_section(&sections, &NAV_SECTIONS, 600.0 + 200.0),
            Some(SectionId::Cases)
        );
    }

    #[test]
    fn overlapping_sections_resolve_to_later_entry() {
        let sections = vec![
            SectionBounds::new("home", 0.0, 1000.0),
            SectionBounds::new("cases", 900.0, 1000.0),
        ];
        assert_eq!(
            active_section(&sections, &NAV_SECTIONS, 950.0),
            Some(SectionId::Cases)
        );
    }

    #[test]
    fn probe_outside_nav_sections_reports_nothing() {
        assert_eq!(active_section(&page(), &NAV_SECTIONS, 2100.0), None);
        assert_eq!(active_section(&[], &NAV_SECTIONS, 10.0), None);
    }

    #[test]
    fn current_page_counts_in_document_order() {
        let sections = page();
        assert_eq!(current_page(&sections, 400.0), Some(1));
        assert_eq!(current_page(&sections, 800.0), Some(2));
        assert_eq!(current_page(&sections, 2599.0), Some(3));
        assert_eq!(current_page(&sections, 2600.0), None);
    }

    #[test]
    fn hero_motion_tracks_progress_through_hero() {
        let hero = SectionBounds::new("home", 0.0, 800.0);
        assert_eq!(HeroMotion::at(&hero, 0.0), HeroMotion::REST);

        let quarter = HeroMotion::at(&hero, 200.0);
        assert!((quarter.offset_y - 25.0).abs() < 1e-9);
        assert!((quarter.opacity - 0.5).abs() < 1e-9);

        let past = HeroMotion::at(&hero, 5000.0);
        assert_eq!(past.offset_y, 100.0);
        assert_eq!(past.opacity, 0.0);
    }

    #[test]
    fn degenerate_hero_stays_at_rest() {
        let hero = SectionBounds::new("home", 0.0, 0.0);
        assert_eq!(HeroMotion::at(&hero, 300.0), HeroMotion::REST);
    }

    #[test]
    fn anchors_round_trip_through_ids() {
        assert_eq!(SectionId::from_anchor("cases"), Some(SectionId::Cases));
        assert_eq!(SectionId::from_anchor("about"), None);
        assert_eq!(SectionId::Contact.href(), "#contact");
    }
}
