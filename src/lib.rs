pub mod aws_config;
pub mod cli;
pub mod ec2;
pub mod error;
pub mod output;

use std::io::Write;

use cli::{OutputMode, SearchOptions};
use ec2::{InstanceSource, SearchFilter};
use error::SearchError;

/// Runs one search against `source` and writes the result to `out`.
///
/// Nothing is written when the describe call fails; the provider error is
/// returned for the caller to report.
pub async fn run<S, W>(source: &S, options: &SearchOptions, out: &mut W) -> Result<(), SearchError>
where
    S: InstanceSource,
    W: Write,
{
    let filter = SearchFilter::new(&options.filter_type, &options.search);
    tracing::debug!(name = %filter.name, value = %filter.value, "describing instances");

    let resp = source.fetch_instances(&filter).await?;
    tracing::debug!(reservations = resp.reservations().len(), "describe returned");

    if resp.reservations().is_empty() {
        output::write_no_matches(out)?;
        return Ok(());
    }

    match &options.mode {
        OutputMode::PrivateIps {
            one_per_line,
            delimiter,
        } => {
            let ips = ec2::private_ips(&resp);
            tracing::debug!(count = ips.len(), "private ips");
            output::write_private_ips(out, &ips, *one_per_line, delimiter)?;
        }
        OutputMode::Table => {
            let rows = ec2::table_rows(&resp);
            tracing::debug!(count = rows.len(), "table rows");
            output::write_table(out, &rows)?;
        }
    }

    Ok(())
}
