use crate::ec2::InstanceRecord;
use crate::error::ConnectError;
use inquire::Select;

/// Asks the operator which instance to connect to.
pub trait Selector {
    /// Returns the instance id of the chosen record.
    fn select(&self, instances: &[InstanceRecord]) -> Result<String, ConnectError>;
}

/// Single-choice menu on the terminal.
pub struct MenuSelector;

impl Selector for MenuSelector {
    fn select(&self, instances: &[InstanceRecord]) -> Result<String, ConnectError> {
        let selected = Select::new("Select an EC2 instance to connect:", menu_options(instances))
            // Preselect the first entry.
            .with_starting_cursor(0)
            .prompt()?;

        Ok(instance_id_from_option(&selected).to_string())
    }
}

/// Render records as `<id>:<name>` menu entries.
pub fn menu_options(instances: &[InstanceRecord]) -> Vec<String> {
    instances
        .iter()
        .map(|inst| format!("{}:{}", inst.instance_id, inst.name))
        .collect()
}

/// Recover the id from a menu entry. Names may contain `:`, ids never do.
pub fn instance_id_from_option(option: &str) -> &str {
    option
        .split_once(':')
        .map(|(id, _)| id)
        .unwrap_or(option)
}
