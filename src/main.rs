use std::{io::Error, sync::Arc};

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use users::{
    config::Config,
    infrastructure::repositories::InMemoryUserRepository,
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "users=info,poem=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::try_parse().map_err(|err| {
        error!("{}", err);
        Error::other(err)
    })?;

    let state = Arc::new(ApiState::new(Arc::new(InMemoryUserRepository::seeded())));
    let app = build_app(state);

    info!("Server starting on port {}", config.port);
    info!("Health check: http://localhost:{}/health", config.port);
    info!("API docs: http://localhost:{}/", config.port);

    Server::new(TcpListener::bind(config.listen_addr()))
        .run(app)
        .await
        .inspect_err(|err| error!("Server failed to start: {}", err))
}
