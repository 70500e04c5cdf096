use clap::Parser;

/// Every flag left unset falls back to the config file, then to built-in
/// defaults.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "CDC connector registration service for Kafka Connect", long_about = None)]
pub struct Args {
    /// YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(short, long, env = "KAFKA_CONNECT_URL")]
    pub kafka_connect_url: Option<String>,

    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}
