use aws_sdk_ec2::Client as Ec2Client;
use clap::Parser;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use ec2_search::aws_config::configure_aws;
use ec2_search::cli::{Cli, SearchOptions, VERSION};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", VERSION);
        return;
    }

    // Logs go to stderr so stdout stays pipeable, e.g. `ec2-search -i web | xargs ...`.
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("EC2_SEARCH_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let options = SearchOptions::from(&cli);
    let config = configure_aws(cli.region.clone(), cli.profile.clone()).await;
    let client = Ec2Client::new(&config);

    if let Err(e) = ec2_search::run(&client, &options, &mut std::io::stdout()).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
