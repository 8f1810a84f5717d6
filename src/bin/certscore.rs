use activity_points::cli::{CertscoreArgs, run};
use ortho_config::OrthoConfig;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the JSON report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = CertscoreArgs::load()?;
    let report = run(&args, io::stdin().lock())?;
    println!("{}", report.render(args.pretty)?);
    Ok(())
}
