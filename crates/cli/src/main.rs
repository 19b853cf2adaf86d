use clap::Parser;
use lynx_dns_application::DnsServer;
use lynx_dns_domain::CliOverrides;
use lynx_dns_infrastructure::dns::{RecordCache, UdpTransport};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "lynx-dns")]
#[command(version)]
#[command(about = "Lynx DNS - Minimal authoritative DNS server over UDP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Lynx DNS Server v{}", env!("CARGO_PKG_VERSION"));

    let cache = Arc::new(RecordCache::new());
    cache.populate(&config.records)?;

    let listen_addr = bootstrap::listen_addr(&config);
    let transport = UdpTransport::bind(listen_addr.as_str())?;
    info!(bind_address = %listen_addr, "DNS server listening");

    let dns_server = DnsServer::new(transport, cache);
    server::run(&dns_server)
}
