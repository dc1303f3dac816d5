use savr_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = bootstrap::resolve_config()?;
    if let Err(err) = init_tracing_subscriber(&config) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let deps = bootstrap::wire_dependencies(&config)?;

    let mut diagnostics = deps.events.subscribe();
    tokio::spawn(async move {
        while let Ok(diagnostic) = diagnostics.recv().await {
            warn!(
                operation = ?diagnostic.operation,
                kind = ?diagnostic.kind,
                at = %diagnostic.at,
                "onboarding diagnostic received"
            );
        }
    });

    let route = deps.resolve_launch_route().execute().await;
    let status = deps.onboarding_status().execute().await;
    info!(?route, "onboarding status resolved");

    match serde_json::to_string_pretty(&status) {
        Ok(json) => println!("{json}"),
        Err(err) => error!(error = %err, "failed to encode onboarding status"),
    }

    Ok(())
}
