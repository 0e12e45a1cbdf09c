//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Terminal client for the file-manager backend.
#[derive(Debug, Parser)]
#[command(name = "pangolin", version, about)]
pub struct Cli {
    /// Base URL of the backend server.
    #[arg(long, default_value = "http://localhost:8084")]
    pub server: String,

    /// Directory to list on startup, absolute within the server's jail.
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Append structured logs to this file instead of discarding them.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Arrange & Act
        let cli = Cli::parse_from(["pangolin"]);

        // Assert
        assert_eq!(cli.server, "http://localhost:8084");
        assert_eq!(cli.path, "/");
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_flags_override_defaults() {
        // Arrange & Act
        let cli = Cli::parse_from([
            "pangolin",
            "--server",
            "http://media-box:9000",
            "--path",
            "/tv/",
            "--log-file",
            "/tmp/pangolin.log",
        ]);

        // Assert
        assert_eq!(cli.server, "http://media-box:9000");
        assert_eq!(cli.path, "/tv/");
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/pangolin.log")));
    }
}
