use std::io;
use std::sync::Arc;

use clap::Parser;

use pangolin::app::App;
use pangolin::cli::Cli;
use pangolin::domain::path::JailPath;
use pangolin::infra::service::HttpServiceClient;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Logging goes to a file when asked for; stdout belongs to the TUI.
    if let Some(log_path) = &cli.log_file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        tracing_subscriber::fmt()
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    }

    let start_path = JailPath::parse(&cli.path)
        .map_err(|error| io::Error::other(format!("Error: {error}")))?;
    let service = HttpServiceClient::new(&cli.server)
        .map_err(|error| io::Error::other(format!("Error: invalid server URL: {error}")))?;

    let mut app = App::new(Arc::new(service), start_path);

    pangolin::runtime::run(&mut app).await
}
