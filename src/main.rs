#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG=dot_sketch=debug shows grid and shape events
    env_logger::init();

    dot_sketch::run_app()
}
