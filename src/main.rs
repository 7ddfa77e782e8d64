use std::sync::Arc;

use sms_assist::catalog::Catalog;
use sms_assist::catalog::explain::RuleBasedExplainer;
use sms_assist::channels::gateway::HttpSmsSender;
use sms_assist::channels::webhook::{AppState, routes};
use sms_assist::channels::{LogSender, SmsSender};
use sms_assist::config::AssistConfig;
use sms_assist::dialog::DialogManager;
use sms_assist::store::{LibSqlSessionStore, MemorySessionStore, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AssistConfig::from_env()?;
    let bind_addr = config.bind_addr_or_default().to_string();

    eprintln!("📱 SMS Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Webhook:   http://{bind_addr}/sms/webhook");
    eprintln!("   Recommend: http://{bind_addr}/recommend");

    // ── Session store ────────────────────────────────────────────────
    let store: Arc<dyn SessionStore> = match &config.db_path {
        Some(path) => {
            eprintln!("   Sessions:  {}", path.display());
            Arc::new(LibSqlSessionStore::new_local(path).await?)
        }
        None => {
            eprintln!("   Sessions:  in-memory (set SMS_ASSIST_DB_PATH to persist)");
            Arc::new(MemorySessionStore::new())
        }
    };

    // ── Opportunity catalog ──────────────────────────────────────────
    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)?;
            eprintln!("   Catalog:   {} ({} records)", path.display(), catalog.len());
            catalog
        }
        None => {
            tracing::warn!("No catalog configured; /recommend will return no matches");
            eprintln!("   Catalog:   empty (set SMS_ASSIST_CATALOG to load one)");
            Catalog::default()
        }
    };

    // ── Outbound channel ─────────────────────────────────────────────
    let sender: Arc<dyn SmsSender> = match config.gateway {
        Some(gateway) => {
            eprintln!("   Gateway:   {}", gateway.endpoint);
            Arc::new(HttpSmsSender::new(gateway.endpoint, gateway.token))
        }
        None => {
            eprintln!("   Gateway:   none (outbound sends are logged only)");
            Arc::new(LogSender)
        }
    };

    let state = AppState {
        dialog: Arc::new(DialogManager::new(store)),
        catalog: Arc::new(catalog),
        explainer: Arc::new(RuleBasedExplainer),
        sender,
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "HTTP server started");
    axum::serve(listener, routes(state)).await?;

    Ok(())
}
