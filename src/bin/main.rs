use compute_sales::app::{self, RunConfig};
use compute_sales::args::Args;
use compute_sales::diagnostics::ConsoleSink;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never mix with the report on stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let config = RunConfig::from(Args::parse());
    let mut sink = ConsoleSink::default();

    if let Err(err) = app::run(&config, &mut sink) {
        println!("[ERROR] {}", err);
        process::exit(1);
    }

    debug!(diagnostics = sink.reported(), "run complete");
}
