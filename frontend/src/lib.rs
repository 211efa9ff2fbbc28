pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Installs logging and the panic hook, then mounts the site on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    let cfg = config::current();
    log::info!(
        "Starting NextTech site (scrolled threshold {}px, section offset {}px)",
        cfg.scrolled_threshold,
        cfg.active_section_offset
    );
    router::mount_app();
}
