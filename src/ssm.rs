use crate::error::ConnectError;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// Starts an interactive session on an instance.
pub trait Launcher {
    fn launch(&self, instance_id: &str) -> Result<(), ConnectError>;
}

/// Hands the terminal to `aws ssm start-session`.
pub struct AwsCliLauncher;

impl Launcher for AwsCliLauncher {
    fn launch(&self, instance_id: &str) -> Result<(), ConnectError> {
        launch_session(instance_id).map(|_| ())
    }
}

/// Build `aws ssm start-session --target <instance_id>` wired to our own stdio.
pub fn start_session_command(instance_id: &str) -> Command {
    let mut command = Command::new("aws");
    command
        .arg("ssm")
        .arg("start-session")
        .arg("--target")
        .arg(instance_id)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Run a session for `instance_id` and block until it ends.
pub fn launch_session(instance_id: &str) -> Result<ExitStatus, ConnectError> {
    info!(instance_id = %instance_id, "Starting session");
    run_session(start_session_command(instance_id))
}

/// Run a prepared session command to completion.
///
/// A non-zero exit is an error. Ctrl-C inside the session reaches the child
/// first and comes back here as its exit status.
pub fn run_session(mut command: Command) -> Result<ExitStatus, ConnectError> {
    debug!(program = ?command.get_program(), args = ?command.get_args().collect::<Vec<_>>(), "Spawning session command");

    let status = command.status().map_err(ConnectError::Spawn)?;

    if status.success() {
        info!("Session command exited cleanly");
        Ok(status)
    } else {
        Err(ConnectError::SessionFailed(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_start_session_command_args() {
        let command = start_session_command("i-0123456789abcdef0");

        assert_eq!(command.get_program(), OsStr::new("aws"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(
            args,
            vec!["ssm", "start-session", "--target", "i-0123456789abcdef0"]
        );
    }

    #[test]
    fn test_target_passed_as_single_argument() {
        let command = start_session_command("i-0aaa --profile other");
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args.len(), 4);
        assert_eq!(args[3], "i-0aaa --profile other");
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_exit_is_ok() {
        let status = run_session(Command::new("true")).unwrap();
        assert!(status.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_fatal() {
        let err = run_session(Command::new("false")).unwrap_err();
        assert!(matches!(err, ConnectError::SessionFailed(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_executable_is_fatal() {
        let err = run_session(Command::new("ec2connect-no-such-binary")).unwrap_err();
        assert!(matches!(err, ConnectError::Spawn(_)));
        assert!(err.is_fatal());
    }
}
