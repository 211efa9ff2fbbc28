use crate::{
    pages::home::{components::page_indicator::PageIndicator, utils::hero_style},
    state::scroll::use_hero_motion,
    utils::{dom, geometry::SectionId},
};
use leptos::*;

#[component]
fn WaveBackground() -> impl IntoView {
    view! {
        <div class="wave-bg">
            <svg class="wave-svg" viewBox="0 0 1200 800" preserveAspectRatio="none">
                <path
                    d="M0,200 Q300,150 600,200 T1200,200 L1200,800 L0,800 Z"
                    fill="rgba(34, 197, 94, 0.05)"
                />
                <path
                    d="M0,300 Q400,250 800,300 T1200,300 L1200,800 L0,800 Z"
                    fill="rgba(34, 197, 94, 0.03)"
                />
                <path
                    d="M0,400 Q200,350 400,400 T1200,400 L1200,800 L0,800 Z"
                    fill="rgba(34, 197, 94, 0.04)"
                />
            </svg>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let motion = use_hero_motion();

    view! {
        <section id=SectionId::Home.anchor() class="hero">
            <WaveBackground/>
            <PageIndicator/>

            <div class="container hero-container">
                <div
                    class="hero-content"
                    style=move || hero_style(motion.get())
                >
                    <div class="hero-badge">
                        <span>"Digital Excellence"</span>
                    </div>

                    <h1 class="hero-title">
                        "Building the " <span class="highlight">"Future"</span> " of Web Solutions"
                    </h1>

                    <p class="hero-subtitle">
                        "We create modern web applications and innovative Telegram Mini Apps "
                        "that transform businesses and engage users."
                    </p>

                    <div class="hero-buttons">
                        <button
                            type="button"
                            class="cta-button primary"
                            on:click=move |_| dom::scroll_to_section(SectionId::Cases)
                        >
                            "View Our Work →"
                        </button>
                        <button
                            type="button"
                            class="cta-button secondary"
                            on:click=move |_| dom::scroll_to_section(SectionId::Contact)
                        >
                            "Get in Touch"
                        </button>
                    </div>
                </div>
            </div>

            <div
                class="scroll-indicator"
                style="cursor: pointer;"
                on:click=move |_| dom::scroll_to_section(SectionId::Cases)
            >
                <div class="scroll-circle">
                    <div class="scroll-arrow">"↓"</div>
                </div>
                <p class="scroll-text">"Scroll down"</p>
            </div>
        </section>
    }
}
