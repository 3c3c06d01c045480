use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentimood")]
#[command(about = "Detect, translate and classify the mood of free text over HTTP.")]
#[command(version)]
pub struct Cli {
    /// Address to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT and config)
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Use this config file instead of the default location
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}
