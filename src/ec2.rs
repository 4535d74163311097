use crate::error::ConnectError;
use aws_sdk_ec2::types::{Instance, Reservation};
use aws_sdk_ec2::Client as Ec2Client;
use tracing::{debug, warn};

/// Display name used when an instance carries no `Name` tag.
pub const UNKNOWN_NAME: &str = "Unknown";

/// An instance as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    pub instance_id: String,
    pub name: String,
}

/// Describe every instance visible to the caller, in the order EC2 returns them.
pub async fn list_instances(client: &Ec2Client) -> Result<Vec<InstanceRecord>, ConnectError> {
    let resp = client.describe_instances().send().await?;

    let instances = records_from_reservations(resp.reservations());
    debug!(count = instances.len(), "Described instances");

    Ok(instances)
}

/// Flatten reservations into records. Neither sorts nor deduplicates.
pub fn records_from_reservations(reservations: &[Reservation]) -> Vec<InstanceRecord> {
    reservations
        .iter()
        .flat_map(|res| res.instances())
        .filter_map(|inst| match inst.instance_id() {
            Some(id) => Some(InstanceRecord {
                instance_id: id.to_string(),
                name: instance_name(inst).to_string(),
            }),
            None => {
                warn!("Skipping instance without an instance id");
                None
            }
        })
        .collect()
}

fn instance_name(instance: &Instance) -> &str {
    instance
        .tags()
        .iter()
        .find(|tag| tag.key() == Some("Name"))
        .map(|tag| tag.value().unwrap_or_default())
        .unwrap_or(UNKNOWN_NAME)
}
