//! Print every catalog symbol as path text.
//!
//! Usage: `cargo run --example gallery --features tracing -- [radius] [angle] [standoff]`

use tracing_subscriber::EnvFilter;

fn arg(n: usize) -> Option<f64> {
    std::env::args().nth(n).and_then(|s| s.parse().ok())
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let radius = arg(1).unwrap_or(10.0);
    let angle = arg(2).or(Some(0.0));
    let standoff = arg(3);

    for (code, name) in plotmark::symbol_names().enumerate() {
        let path = plotmark::generate(name, radius, angle, standoff)?;
        println!("{code:>2} {name:<18} {path}");
    }
    Ok(())
}
