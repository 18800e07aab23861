use crate::cli::Args;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        seed_file: PathBuf::from("positions.seed.json"),
        allowed_origins: vec![String::from("http://127.0.0.1:3000")],
    }
}
