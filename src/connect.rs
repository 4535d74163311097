//! The `connect` workflow: list instances, pick one, open a session.
//!
//! Each step runs to completion before the next starts. An empty listing
//! or an abandoned prompt ends the run early without launching anything.

use crate::aws_config::configure_aws;
use crate::ec2::{list_instances, InstanceRecord};
use crate::error::ConnectError;
use crate::interactive::{MenuSelector, Selector};
use crate::ssm::{AwsCliLauncher, Launcher};
use aws_sdk_ec2::Client as Ec2Client;

/// Run `connect` against the ambient AWS account.
pub async fn run() -> Result<(), ConnectError> {
    let config = configure_aws().await;
    let client = Ec2Client::new(&config);

    let instances = list_instances(&client).await?;

    connect_to(instances, &MenuSelector, &AwsCliLauncher)
}

/// Select from already-listed instances and launch a session on the choice.
pub fn connect_to<S, L>(
    instances: Vec<InstanceRecord>,
    selector: &S,
    launcher: &L,
) -> Result<(), ConnectError>
where
    S: Selector,
    L: Launcher,
{
    if instances.is_empty() {
        return Err(ConnectError::NoInstances);
    }

    let instance_id = selector.select(&instances)?;
    println!("Connecting to Instance ID: {}", instance_id);

    launcher.launch(&instance_id)?;

    println!("Session ended.");
    Ok(())
}
