#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    frame_designer::run_app()
}

// The web build starts from `frame_designer::start_web`.
#[cfg(target_arch = "wasm32")]
fn main() {}
