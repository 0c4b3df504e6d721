use clap::{Parser, ValueEnum};
use nsidenum_application::use_cases::SweepRequest;
use nsidenum_domain::{CliOverrides, OutputFormat, Verbosity};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod render;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "nsidenum")]
#[command(version)]
#[command(about = "Enumerate DNS servers behind anycast VIPs using the NSID EDNS option")]
struct Cli {
    /// Nameserver to enumerate (hostname or IP address); falls back to `target` in --config
    target: Option<String>,

    /// Query name [default: .]
    #[arg(short = 'n', long)]
    qname: Option<String>,

    /// Query type [default: A]
    #[arg(short = 't', long)]
    qtype: Option<String>,

    /// Query class [default: IN]
    #[arg(short = 'c', long)]
    qclass: Option<String>,

    /// Timeout per query, in seconds [default: 1.0]
    #[arg(short = 'T', long, value_name = "SECONDS")]
    timeout: Option<f64>,

    /// Base source port [default: 12345]
    #[arg(short = 's', long)]
    sport: Option<u16>,

    /// Destination port [default: 53]
    #[arg(short = 'd', long)]
    dport: Option<u16>,

    /// Number of additional source ports to try after the base one
    #[arg(short = 'e', long, value_name = "N")]
    enumerate: Option<u32>,

    /// Ask CH TXT id.server. (overrides --qname, --qclass and --qtype)
    #[arg(short = 'i', long)]
    id_server: bool,

    /// Force IPv4
    #[arg(short = '4')]
    ipv4: bool,

    /// Force IPv6
    #[arg(short = '6')]
    ipv6: bool,

    /// Trace every query
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print only the identifiers found
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Queries in flight at once [default: 1]
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,

    /// Advertised EDNS UDP payload size [default: 4096]
    #[arg(long)]
    payload_size: Option<u16>,

    /// Send plain DNS queries without an OPT record
    #[arg(long)]
    no_edns: bool,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            target: self.target.clone(),
            qname: self.qname.clone(),
            qtype: self.qtype.clone(),
            qclass: self.qclass.clone(),
            identity_probe: self.id_server.then_some(true),
            edns: self.no_edns.then_some(false),
            payload_size: self.payload_size,
            timeout_secs: self.timeout,
            source_port: self.sport,
            dest_port: self.dport,
            enumerate: self.enumerate,
            concurrency: self.concurrency,
            ipv4_only: self.ipv4.then_some(true),
            ipv6_only: self.ipv6.then_some(true),
            verbose: self.verbose.then_some(true),
            quiet: self.quiet.then_some(true),
            format: self.format.map(OutputFormat::from),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    let verbosity = config.verbosity()?;
    let query = config.query_spec()?;
    if query.identity_probe && verbosity != Verbosity::Quiet {
        warn!("Using --id-server overrides --qname, --qclass and --qtype");
    }

    let cancel = CancellationToken::new();
    let use_cases = di::UseCases::new(query, cancel.clone())?;

    let target = use_cases
        .resolve_target
        .execute(config.target_host()?, config.sweep.dest_port, config.address_family()?)
        .await?;

    let request = SweepRequest {
        target,
        ports: config.port_range()?,
        timeout: config.sweep.timeout(),
        concurrency: config.sweep.concurrency,
    };

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, waiting for in-flight queries");
            cancel.cancel();
        }
    });

    let result = use_cases.run_sweep.execute(&request).await?;
    let report = use_cases.summarize.execute(&result);

    info!(
        servers = report.server_count(),
        cancelled = report.cancelled,
        "Enumeration finished"
    );

    let stdout = std::io::stdout();
    render::render(&report, config.output.format, verbosity, &mut stdout.lock())?;

    Ok(())
}
