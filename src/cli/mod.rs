use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "positions.seed.json")]
    pub seed_file: PathBuf,
    #[arg(long = "allowed-origin")]
    #[arg(default_values_t = [
        String::from("http://127.0.0.1:3000"),
        String::from("http://localhost:3000"),
    ])]
    pub allowed_origins: Vec<String>,
}
