use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    init_tracing();
    tunshell_install::app::cli::run();
}

// Logs go to stderr so stdout carries only the rendered command.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
        eprintln!("⚠️  Logging disabled: {}", err);
    }
}
