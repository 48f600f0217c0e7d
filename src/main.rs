use pantry_core::application::{
    ports::{
        security::{PasswordHasher, TokenService},
        time::Clock,
    },
    services::ApplicationServices,
};
use pantry_core::config::AppConfig;
use pantry_core::domain::{
    account::AccountRepository, cart::CartRepository, catalog::CatalogReadRepository,
};
use pantry_core::infrastructure::{
    database,
    repositories::{PostgresAccountRepository, PostgresCartRepository, PostgresCatalogRepository},
    security::{password::Argon2PasswordHasher, token::BiscuitTokenService},
    time::SystemClock,
};
use pantry_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use axum::{ServiceExt, body::Body};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(PostgresAccountRepository::new(pool.clone()));
    let cart_repo: Arc<dyn CartRepository> = Arc::new(PostgresCartRepository::new(pool.clone()));
    let catalog_repo: Arc<dyn CatalogReadRepository> =
        Arc::new(PostgresCatalogRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_service_impl =
        BiscuitTokenService::new(config.auth_root_private_key(), config.token_ttl())?;
    let token_service: Arc<dyn TokenService> = Arc::new(token_service_impl);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        account_repo,
        cart_repo,
        catalog_repo,
        password_hasher,
        token_service,
        clock,
    ));

    let state = HttpState { services };

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
