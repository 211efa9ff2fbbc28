use std::time::Duration;

/// Runs `f` once after `delay` on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

/// Host builds have no event loop; the callback runs immediately.
#[cfg(not(target_arch = "wasm32"))]
pub fn after(_delay: Duration, f: impl FnOnce() + 'static) {
    f();
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn host_timers_fire_inline() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        after(Duration::from_millis(200), move || flag.set(true));
        assert!(fired.get());
    }
}
