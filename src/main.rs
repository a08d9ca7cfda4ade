use veterinaria_api::{
    datalayer::{
        db_ops::{constants::DEFAULT_PORT, missing_tables, verify_all_tables},
        initialize_database,
    },
    logging::{init_telemetry, shutdown_telemetry},
    routes::create_router,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables first
    dotenvy::dotenv().ok();

    init_telemetry(None)?;

    tracing::info!("Starting veterinary clinic API");

    let db = initialize_database().await?;

    match verify_all_tables(db.pool()).await {
        Ok(verifications) => {
            let missing = missing_tables(&verifications);
            if missing.is_empty() {
                tracing::info!("All required tables present");
            } else {
                tracing::warn!(
                    missing = ?missing,
                    "Some tables are missing; load sql/schema.sql before serving traffic"
                );
            }
        }
        Err(e) => tracing::warn!(error = %e, "Could not verify database tables"),
    }

    let app = create_router(AppState::new(db.clone()));

    let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        address = %addr,
        port = %port,
        "Server listening and ready to accept connections"
    );

    tracing::info!(
        endpoints = ?vec![
            "/ - banner",
            "/test-db - database round trip",
            "/health - health check",
            "/clients[/:id] - clients",
            "/clients/:id/pets - pets of a client",
            "/veterinarians[/:id] - veterinarians",
            "/pets[/:id] - pets",
            "/pets/:id/medical-records - records of a pet",
            "/appointments[/:id] - appointments",
            "/medical-records[/:id] - medical records",
        ],
        "Available API endpoints"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.shutdown().await;
    shutdown_telemetry();

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Shutdown signal received, cleaning up...");
}
