use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

pub const DEFAULT_FILTER_TYPE: &str = "tag:Name";

/// Version reported by `--version`; release builds stamp it through `EC2_SEARCH_VERSION`.
pub const VERSION: &str = match option_env!("EC2_SEARCH_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ec2-search",
    about = "Search EC2 instances by tag or attribute",
    disable_version_flag = true
)]
pub struct Cli {
    /// EC2 instance name search term
    #[arg(
        required_unless_present = "version",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub search: Option<String>,

    /// Output only private IPs
    #[arg(short = 'i', long)]
    pub ip_only: bool,

    /// Output each IP on a new line
    #[arg(short = 'n', long)]
    pub new_line: bool,

    /// IP delimiter
    #[arg(short = 'd', long, default_value = " ")]
    pub delimiter: String,

    /// EC2 filter type (https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeInstances.html)
    #[arg(short = 'f', long, default_value = DEFAULT_FILTER_TYPE)]
    pub filter_type: String,

    /// AWS region to query (defaults to the environment/config region)
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// AWS profile to use (defaults to AWS_PROFILE or the default profile)
    #[arg(short = 'p', long)]
    pub profile: Option<String>,

    /// Print version
    #[arg(short = 'v', long)]
    pub version: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    PrivateIps { one_per_line: bool, delimiter: String },
}

/// Everything a search needs, fixed once the arguments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub search: String,
    pub filter_type: String,
    pub mode: OutputMode,
}

impl From<&Cli> for SearchOptions {
    fn from(cli: &Cli) -> Self {
        let mode = if cli.ip_only {
            OutputMode::PrivateIps {
                one_per_line: cli.new_line,
                delimiter: cli.delimiter.clone(),
            }
        } else {
            OutputMode::Table
        };

        Self {
            // clap only lets `search` be empty alongside --version, which never gets here
            search: cli.search.clone().unwrap_or_default(),
            filter_type: cli.filter_type.clone(),
            mode,
        }
    }
}
