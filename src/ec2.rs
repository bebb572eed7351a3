use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use aws_sdk_ec2::primitives::DateTime;
use aws_sdk_ec2::types::{Filter, Instance};
use aws_sdk_ec2::Client as Ec2Client;

use crate::error::SearchError;

pub const LAUNCH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single provider-side substring match: `<name> = *<term>*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub name: String,
    pub value: String,
}

impl SearchFilter {
    pub fn new(filter_type: &str, search: &str) -> Self {
        Self {
            name: filter_type.to_string(),
            value: format!("*{}*", search),
        }
    }

    pub fn to_sdk(&self) -> Filter {
        Filter::builder()
            .name(&self.name)
            .values(&self.value)
            .build()
    }
}

/// Anything that can answer a DescribeInstances call for a filter.
#[allow(async_fn_in_trait)]
pub trait InstanceSource {
    async fn fetch_instances(
        &self,
        filter: &SearchFilter,
    ) -> Result<DescribeInstancesOutput, SearchError>;
}

impl InstanceSource for Ec2Client {
    async fn fetch_instances(
        &self,
        filter: &SearchFilter,
    ) -> Result<DescribeInstancesOutput, SearchError> {
        self.describe_instances()
            .filters(filter.to_sdk())
            .send()
            .await
            .map_err(|e| SearchError::Describe(DisplayErrorContext(&e).to_string()))
    }
}

/// Private IPs in response order. Instances without one are skipped.
pub fn private_ips(resp: &DescribeInstancesOutput) -> Vec<String> {
    resp.reservations()
        .iter()
        .flat_map(|res| res.instances())
        .filter_map(|inst| inst.private_ip_address().map(|ip| ip.to_string()))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceRow {
    pub name: String,
    pub private_ip: String,
    pub state: String,
    pub availability_zone: String,
    pub instance_id: String,
    pub instance_type: String,
    pub launch_time: String,
}

impl InstanceRow {
    pub const HEADERS: [&'static str; 7] = [
        "Name",
        "PrivateIp",
        "State",
        "AZ",
        "InstanceId",
        "InstanceType",
        "LaunchTime",
    ];

    pub fn cells(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.private_ip.as_str(),
            self.state.as_str(),
            self.availability_zone.as_str(),
            self.instance_id.as_str(),
            self.instance_type.as_str(),
            self.launch_time.as_str(),
        ]
    }
}

impl From<&Instance> for InstanceRow {
    fn from(inst: &Instance) -> Self {
        Self {
            name: name_tag(inst).unwrap_or_default().to_string(),
            private_ip: inst.private_ip_address().unwrap_or_default().to_string(),
            state: inst
                .state()
                .and_then(|s| s.name())
                .map(|n| n.as_str().to_string())
                .unwrap_or_default(),
            availability_zone: inst
                .placement()
                .and_then(|p| p.availability_zone())
                .unwrap_or_default()
                .to_string(),
            instance_id: inst.instance_id().unwrap_or_default().to_string(),
            instance_type: inst
                .instance_type()
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            launch_time: inst.launch_time().map(format_launch_time).unwrap_or_default(),
        }
    }
}

/// One row per instance, across every reservation.
pub fn table_rows(resp: &DescribeInstancesOutput) -> Vec<InstanceRow> {
    resp.reservations()
        .iter()
        .flat_map(|res| res.instances())
        .map(InstanceRow::from)
        .collect()
}

/// Value of the first `Name` tag, if any.
pub fn name_tag(inst: &Instance) -> Option<&str> {
    inst.tags()
        .iter()
        .find(|t| t.key() == Some("Name"))
        .map(|t| t.value().unwrap_or_default())
}

pub fn format_launch_time(time: &DateTime) -> String {
    chrono::DateTime::from_timestamp(time.secs(), time.subsec_nanos())
        .map(|t| t.format(LAUNCH_TIME_FORMAT).to_string())
        .unwrap_or_default()
}
