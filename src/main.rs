use std::io::Write;

use tracing_subscriber::EnvFilter;

use utmconvert::LatLon;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let coord = LatLon::new(42.3309794, 119.3169481);
    let utm = coord.to_utm();

    let mut stdout = std::io::stdout().lock();
    utm.write_report(&mut stdout)?;
    stdout.flush()
}
