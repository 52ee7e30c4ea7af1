use clap::Parser;

/// Command line configuration for the fusen HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "fusen-api")]
#[command(about = "A minimal to-do item HTTP service")]
pub struct ServerConfig {
    /// Address the server listens on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind_addr: String,

    /// Enable verbose output.
    #[arg(long)]
    pub verbose: bool,
}
