//! Drives a tracker from a scripted host and logs the published events.
//!
//! Run with: `cargo run --example viewport --features logging`

use std::sync::Arc;
use std::time::Duration;

use boomerang::{EventName, LogWriter, Payload, ScriptedHost, TrackerConfig, ViewportTracker};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boomerang=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = Arc::new(ScriptedHost::new().with_inner_size(1280, 720));
    let tracker = ViewportTracker::builder(host.clone())
        .with_config(TrackerConfig::uniform(Duration::from_millis(50)))
        .build()?;

    let writer = LogWriter::attach(tracker.events());
    tracker.events().on_fn(EventName::ViewportScroll, |p: &Payload| {
        if let Some(offset) = p.as_scroll() {
            println!("scrolled to {offset}");
        }
    })?;

    // A burst of resizes collapses into one event.
    for width in (1000..=1400).step_by(100) {
        host.resize_to(width, 800);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    tokio::time::sleep(Duration::from_millis(100)).await;
    println!("cached viewport: {:?}", tracker.screen());

    host.scroll_to(480.0);
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Nobody listens to this one: logs a BoomerangWarning.
    tracker.events().emit("demo.unobserved", &Payload::Empty)?;

    writer.detach(tracker.events());
    Ok(())
}
