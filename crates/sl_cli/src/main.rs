use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sl_cms::CmsClient;
use sl_web::{create_app, AppState, SiteConfig};

#[derive(Debug, Parser)]
#[command(name = "starlog", about = "Blog front-end over a headless content API")]
struct Args {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Base URL of the content API (falls back to CMS_API_URL)
    #[arg(long)]
    cms_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sl_web=info,sl_cms=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let cms_url = match args.cms_url {
        Some(url) => url,
        None => std::env::var("CMS_API_URL")
            .context("content API not configured: pass --cms-url or set CMS_API_URL")?,
    };

    let config = SiteConfig::from_env()?;
    let content = CmsClient::new(&cms_url)?;
    let app = create_app(AppState::new(Arc::new(content), config));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid bind address")?;
    tracing::info!(%addr, cms = %cms_url, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
