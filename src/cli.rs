use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ec2connect")]
#[command(about = "EC2 Session Manager Connection Tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactively connect to an EC2 instance using Session Manager
    Connect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_connect_subcommand() {
        let cli = Cli::try_parse_from(["ec2connect", "connect"]).unwrap();
        assert_eq!(cli.command, Command::Connect);
    }

    #[test]
    fn test_connect_takes_no_flags() {
        assert!(Cli::try_parse_from(["ec2connect", "connect", "--region", "eu-west-1"]).is_err());
        assert!(Cli::try_parse_from(["ec2connect", "connect", "i-0aaa"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["ec2connect"]).is_err());
    }
}
