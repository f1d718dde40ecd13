use clap::Parser;
use stubgen_cli::{print_failure, run, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        print_failure(&error, &args);
        std::process::exit(1);
    }
}
