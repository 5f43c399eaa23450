use counter_dashboard::terminal::TerminalSurface;
use counter_dashboard::ui::PERSONS;
use counter_dashboard::{DashboardConfig, dashboard};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = DashboardConfig::from_env()?;
    info!("polling {} every {:?}", config.counter_url, config.refresh_interval);

    let surface = TerminalSurface::new();
    let scheduler = dashboard(&config, surface.clone());
    tokio::spawn(Arc::clone(&surface).draw_loop());
    let _refresh = scheduler.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line? {
                None => break,
                Some(line) => {
                    surface.dismiss_notice();
                    match line.trim() {
                        "q" => break,
                        "f" => surface.elements().click_body(),
                        "" => {}
                        input => match input.parse::<usize>() {
                            Ok(n) if n >= 1 && surface.elements().click(PERSONS, n - 1) => {}
                            _ => warn!("no person button {input:?}"),
                        },
                    }
                }
            },
        }
    }

    info!("shutting down");
    Ok(())
}
