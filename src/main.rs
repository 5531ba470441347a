use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdf_chat::api::{create_router, AppState};
use pdf_chat::application::Assistant;
use pdf_chat::infrastructure::{
    Config, InMemoryVectorStore, OpenAiLlm, PdfTextExtractor, TextEmbedding,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_chat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let assistant = Arc::new(Assistant::new(
        Arc::new(PdfTextExtractor::new()),
        Arc::new(TextEmbedding::from_config(&config.embedding)),
        Arc::new(OpenAiLlm::new(&config.llm.model)),
        Arc::new(InMemoryVectorStore::new()),
        config.assistant_options(),
    ));

    let state = AppState::new(assistant);
    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("document chat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
