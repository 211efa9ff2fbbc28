use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::pages::home::HomePage;

pub const ROUTE_PATHS: &[&str] = &["/", "/*any"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn home_route_is_first() {
        assert_eq!(ROUTE_PATHS.first(), Some(&"/"));
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert!(ROUTE_PATHS.contains(&"/*any"));
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
