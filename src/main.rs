use clap::Parser;

mod app_context;
mod cli;
mod geodesy;
mod health;
mod http;
mod logging;
mod positions;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();
    let app_context = app_context::init(&args).await;
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(listen_address = %args.listen_address, "Starting the server.");
    axum::serve(listener, router)
        .await
        .expect("Failed to run the server.");
}
