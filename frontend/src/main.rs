//! Eat n Split frontend - Dioxus app.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn main() {
    use eatnsplit_frontend::app::App;
    dioxus::logger::initialize_default();
    tracing::info!("starting Eat n Split");
    dioxus::launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    // Native `cargo run` with the web feature hands off to the Dioxus CLI, which builds
    // the wasm bundle and serves it. reference-types stays off so wasm-bindgen can link.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{} -C target-feature=-reference-types", rustflags)
    };
    let status = std::process::Command::new("dx")
        .arg("serve")
        .env("RUSTFLAGS", &rustflags)
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
