use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use fleet_management::config::EnvironmentConfig;
use fleet_management::database;
use fleet_management::repositories::PgFleetStore;
use fleet_management::routes::create_app;
use fleet_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚚 Fleet Management API v{}", env!("CARGO_PKG_VERSION"));
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);
    if !config.is_development() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío fuera de desarrollo: se acepta cualquier origen");
    }

    // Inicializar base de datos
    let pool = match database::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let store = Arc::new(PgFleetStore::new(pool));
    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Liveness probe");
    info!("🚗 Vehículos:");
    info!("   GET|POST /api/vehicles - PUT|DELETE /api/vehicles/:id");
    info!("👤 Conductores:");
    info!("   GET|POST /api/drivers - PUT|DELETE /api/drivers/:id");
    info!("🔗 Asignaciones:");
    info!("   GET|POST /api/assignments - PUT /api/assignments/:id/end");
    info!("🛣️ Viajes:");
    info!("   GET|POST /api/trips - PUT|DELETE /api/trips/:id");
    info!("⛽ Combustible:");
    info!("   GET|POST /api/fuel - PUT|DELETE /api/fuel/:id");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
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
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
