pub mod aws_config;
pub mod cli;
pub mod connect;
pub mod ec2;
pub mod error;
pub mod interactive;
pub mod ssm;

pub use ec2::InstanceRecord;
pub use error::ConnectError;
