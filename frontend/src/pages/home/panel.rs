use crate::pages::home::components::{Cases, Contact, Header, Hero};
use crate::state::scroll::provide_scroll_hub;
use leptos::*;
use leptos_meta::{Meta, Title};

#[component]
pub fn HomePage() -> impl IntoView {
    // One scroll listener for the whole page; sections subscribe to it.
    provide_scroll_hub();

    view! {
        <Title text="NextTech | Web Solutions & Telegram Mini Apps"/>
        <Meta
            name="description"
            content="We create modern web applications and innovative Telegram Mini Apps that transform businesses and engage users."
        />
        <div class="app">
            <Header/>
            <Hero/>
            <Cases/>
            <Contact/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_with;

    #[test]
    fn home_page_stacks_sections_in_document_order() {
        let html = render_with(leptos_meta::provide_meta_context, || view! { <HomePage/> });
        let header = html.find("class=\"header").unwrap();
        let home = html.find("id=\"home\"").unwrap();
        let cases = html.find("id=\"cases\"").unwrap();
        let contact = html.find("id=\"contact\"").unwrap();
        assert!(header < home && home < cases && cases < contact);
    }
}
