//! Errors raised while connecting to an instance.

use aws_sdk_ec2::config::http::HttpResponse;
use aws_sdk_ec2::error::{DisplayErrorContext, SdkError};
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesError;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectError {
    /// Credential resolution or the DescribeInstances call failed
    #[error("failed to describe instances: {}", DisplayErrorContext(.0))]
    Provider(#[from] SdkError<DescribeInstancesError, HttpResponse>),

    /// The account has no instances to pick from
    #[error("No instances found.")]
    NoInstances,

    /// The prompt was cancelled or could not read from the terminal
    #[error("Error: {0}")]
    Selection(#[from] inquire::InquireError),

    /// The session command could not be started
    #[error("failed to start session: {0}")]
    Spawn(#[source] std::io::Error),

    /// The session command ran but did not exit cleanly
    #[error("failed to start session: {0}")]
    SessionFailed(ExitStatus),
}

impl ConnectError {
    /// Whether the process should exit with a failure status.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConnectError::Provider(_) | ConnectError::Spawn(_) | ConnectError::SessionFailed(_)
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_fatal() {
            1
        } else {
            0
        }
    }
}
