//! Binary entry point for the CRM MCP server.

use tracing::info;

use crm_mcp_lib::mcp::{McpServer, ServerError};
use crm_mcp_lib::tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crm_mcp_lib=debug,info".parse().expect("valid env filter")),
        )
        .with_writer(std::io::stderr)
        .init();

    let server = McpServer::new(ToolRegistry::with_builtin_tools());

    tokio::select! {
        result = server.run() => result,
        _ = shutdown_signal() => {
            info!("shutdown signal received");
            Ok(())
        }
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
