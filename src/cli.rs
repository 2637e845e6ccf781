use clap::{Parser, ValueEnum};

/// Adds or removes IP addresses from a Route53 "A" record set identified by
/// name and set identifier. Standard AWS environment variables supply the
/// authentication credentials.
#[derive(Parser, Debug)]
#[command(name = "r53tool", version, about)]
pub struct Cli {
    /// Record name, e.g. www.example.com (a trailing dot is appended if missing)
    #[arg(long)]
    pub name: String,

    /// Record type (only A is supported)
    #[arg(long = "type", value_name = "TYPE", default_value = "A", value_parser = ["A"])]
    pub record_type: String,

    /// Record set identifier for weighted/latency/failover sets
    #[arg(long)]
    pub setid: Option<String>,

    /// AWS region
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Action to perform
    #[arg(long, value_enum)]
    pub cmd: Action,

    /// IP addresses (required for add/del, forbidden for list)
    #[arg(value_name = "IP")]
    pub ips: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Del,
    List,
}

/// Cross-flag checks clap cannot express declaratively.
pub fn validate(cli: &Cli) -> Result<(), String> {
    match cli.cmd {
        Action::List if !cli.ips.is_empty() => {
            Err("list takes no IP address arguments".to_string())
        }
        Action::Add | Action::Del if cli.ips.is_empty() => {
            Err("at least one IP address must be supplied".to_string())
        }
        _ => Ok(()),
    }
}
