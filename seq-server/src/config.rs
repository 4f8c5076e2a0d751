use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Command line options
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Listen address
    #[arg(long, default_value = "0.0.0.0:7002")]
    pub addr: SocketAddr,

    /// Directory served under `/`
    #[arg(long = "static-dir", default_value = "dist")]
    pub static_dir: PathBuf,

    /// YAML file holding today's counter
    #[arg(long = "biz-file", default_value = "config/biz.yaml")]
    pub biz_file: PathBuf,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long = "log-level", default_value = "debug")]
    pub log_level: String,
}
