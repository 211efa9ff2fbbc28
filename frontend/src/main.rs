#[cfg(target_arch = "wasm32")]
fn main() {
    nexttech_frontend::boot();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("nexttech-frontend runs in the browser; build it for wasm32 with trunk.");
}
