use crate::utils::geometry::HeroMotion;

pub const ACTIVE_BAR_COLOR: &str = "#22c55e";
pub const IDLE_BAR_COLOR: &str = "#a3a3a3";

pub fn format_page_number(page: usize) -> String {
    format!("{:02}", page)
}

/// Width (px), colour and opacity of one page-indicator entry.
pub fn indicator_style(active: bool) -> (u32, &'static str, f64) {
    if active {
        (60, ACTIVE_BAR_COLOR, 1.0)
    } else {
        (40, IDLE_BAR_COLOR, 0.3)
    }
}

pub fn opacity_css(opacity: f64) -> String {
    format!("{:.3}", opacity)
}

pub fn bar_style(active: bool) -> String {
    let (width, color, _) = indicator_style(active);
    format!("width: {}px; background-color: {};", width, color)
}

pub fn hero_style(motion: HeroMotion) -> String {
    format!(
        "transform: {}; opacity: {};",
        motion.transform(),
        opacity_css(motion.opacity)
    )
}
