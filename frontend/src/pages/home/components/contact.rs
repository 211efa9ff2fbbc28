use crate::{
    components::motion::{Reveal, Transition},
    config,
    utils::geometry::SectionId,
};
use leptos::*;

#[component]
pub fn Contact() -> impl IntoView {
    let cfg = config::current();

    view! {
        <section id=SectionId::Contact.anchor() class="contact-section">
            <div class="container">
                <Reveal class="contact-content">
                    <h2 class="contact-title">"Let's Build Something Amazing"</h2>
                    <p class="contact-subtitle">
                        "Ready to transform your business with cutting-edge technology?"
                    </p>

                    <Reveal class="contact-buttons" transition=Transition::new(0.6).delayed(0.2)>
                        <a href=cfg.mailto() class="contact-button primary">
                            {format!("✉️ {}", cfg.contact_email)}
                        </a>
                        <a
                            href=cfg.telegram_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="contact-button secondary"
                        >
                            "📱 Telegram for contact"
                        </a>
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}
