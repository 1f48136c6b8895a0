use clap::Parser;
use digkit_domain::CliOverrides;
use digkit_infrastructure::dns::DnsServerHandler;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "digkit")]
#[command(version)]
#[command(about = "digkit - DNS responder for subnet math, base64, time and IP lookups")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Number of UDP sockets sharing the port
    #[arg(long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        workers: cli.workers,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting digkit v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config);
    services.warm_public_ips();

    let dns_addr = config.server.dns_listen_address();
    let dns_handler = DnsServerHandler::new(services.handler_use_case, config.responder.answer_ttl);

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_handler, config.server.workers) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
