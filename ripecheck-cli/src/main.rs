use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ripecheck_core::output::get_formatter;
use ripecheck_core::{parse_expectations, run_check, CheckResult, OutputFormat, RipeClient};

#[derive(Parser)]
#[command(name = "check_ripe_db")]
#[command(about = "Monitoring check plugin to query the RIPE database and check if the values match the expectations")]
#[command(version)]
struct Cli {
    /// RIPE database source
    #[arg(short, long, default_value = "ripe")]
    source: String,

    /// RIPE database objecttype (e.g. aut-num, inetnum, person)
    #[arg(short, long)]
    objecttype: Option<String>,

    /// Primary key of the object to look up
    #[arg(short, long)]
    key: Option<String>,

    /// Expected values, e.g. "(status, SINGLEVALUE, ACTIVE), (mnt-by, EXACTLIST, [M1-MNT, M2-MNT])"
    #[arg(short, long)]
    expected: Option<String>,

    /// Output format (human or json)
    #[arg(short, long, default_value = "human")]
    format: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let output_format: OutputFormat = cli.format.parse().unwrap_or_default();

    let result = run(cli).await;

    let formatter = get_formatter(output_format);
    println!("{}", formatter.format_result(&result));
    std::process::exit(result.status.exit_code());
}

// Missing arguments are reported as UNKNOWN rather than left to clap: a usage
// error would exit 2, which monitoring frameworks read as CRITICAL.
async fn run(cli: Cli) -> CheckResult {
    let Some(objecttype) = cli.objecttype else {
        return CheckResult::unknown(
            "The DB objecttype (-o/--objecttype) is required, but was not given",
        );
    };
    let Some(key) = cli.key else {
        return CheckResult::unknown("The DB key (-k/--key) is required, but was not given");
    };
    let Some(expected) = cli.expected else {
        return CheckResult::unknown(
            "The expected values (-e/--expected) are required, but were not given",
        );
    };

    let expectations = match parse_expectations(&expected) {
        Ok(expectations) => expectations,
        Err(e) => return CheckResult::unknown(e),
    };

    let client = RipeClient::new().with_timeout(Duration::from_secs(cli.timeout));
    let doc = match client.fetch(&cli.source, &objecttype, &key).await {
        Ok(doc) => doc,
        Err(e) => return CheckResult::unknown(e),
    };

    run_check(&expectations, &doc)
}
