//! CLI argument parsing
//!
//! Flag names follow the classic pfctest tool: `--pN` enables class N and
//! `--qN` sets its pause time.

use clap::Parser;
use pfcgen_core::{GeneratorConfig, Result, PRIORITY_CLASSES};

#[derive(Parser, Debug)]
#[command(name = "pfcgen")]
#[command(
    version,
    about = "Generate IEEE 802.1Qbb Priority Flow Control frames",
    long_about = "Generate IEEE 802.1Qbb Priority Flow Control frames for testing \
                  PFC implementations. Frames are sent as fast as the link allows, \
                  use in a lab environment."
)]
pub struct Cli {
    /// The interface to egress packets
    #[arg(short = 'd', long = "device", value_name = "INTERFACE")]
    pub interface: Option<String>,

    /// Priority Flow Control Enable Class 0
    #[arg(long)]
    pub p0: bool,
    /// Priority Flow Control Enable Class 1
    #[arg(long)]
    pub p1: bool,
    /// Priority Flow Control Enable Class 2
    #[arg(long)]
    pub p2: bool,
    /// Priority Flow Control Enable Class 3
    #[arg(long)]
    pub p3: bool,
    /// Priority Flow Control Enable Class 4
    #[arg(long)]
    pub p4: bool,
    /// Priority Flow Control Enable Class 5
    #[arg(long)]
    pub p5: bool,
    /// Priority Flow Control Enable Class 6
    #[arg(long)]
    pub p6: bool,
    /// Priority Flow Control Enable Class 7
    #[arg(long)]
    pub p7: bool,

    /// Time in Quanta for Class 0
    #[arg(long, value_name = "QUANTA")]
    pub q0: Option<u32>,
    /// Time in Quanta for Class 1
    #[arg(long, value_name = "QUANTA")]
    pub q1: Option<u32>,
    /// Time in Quanta for Class 2
    #[arg(long, value_name = "QUANTA")]
    pub q2: Option<u32>,
    /// Time in Quanta for Class 3
    #[arg(long, value_name = "QUANTA")]
    pub q3: Option<u32>,
    /// Time in Quanta for Class 4
    #[arg(long, value_name = "QUANTA")]
    pub q4: Option<u32>,
    /// Time in Quanta for Class 5
    #[arg(long, value_name = "QUANTA")]
    pub q5: Option<u32>,
    /// Time in Quanta for Class 6
    #[arg(long, value_name = "QUANTA")]
    pub q6: Option<u32>,
    /// Time in Quanta for Class 7
    #[arg(long, value_name = "QUANTA")]
    pub q7: Option<u32>,

    /// Number of times to iterate
    #[arg(short = 'i', long = "iteration", value_name = "NUMBER", default_value = "1")]
    pub iteration: u32,

    /// Build the frame and print it without opening a socket
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    fn enabled(&self) -> [bool; PRIORITY_CLASSES] {
        [
            self.p0, self.p1, self.p2, self.p3, self.p4, self.p5, self.p6, self.p7,
        ]
    }

    fn raw_quanta(&self) -> [Option<u32>; PRIORITY_CLASSES] {
        [
            self.q0, self.q1, self.q2, self.q3, self.q4, self.q5, self.q6, self.q7,
        ]
    }

    /// Validate the arguments into an immutable generator configuration.
    ///
    /// Absent quanta become zero. Nothing is built or sent if this fails.
    pub fn to_config(&self) -> Result<GeneratorConfig> {
        let mut quanta = [0u16; PRIORITY_CLASSES];
        for (class, raw) in self.raw_quanta().into_iter().enumerate() {
            if let Some(raw) = raw {
                quanta[class] = GeneratorConfig::validate_quantum(class, raw)?;
            }
        }

        let config = GeneratorConfig {
            interface: self.interface.clone().unwrap_or_default(),
            enabled: self.enabled(),
            quanta,
            iterations: self.iteration,
        };

        if !self.dry_run {
            config.validate()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pfcgen_core::Error;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pfcgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["-d", "eth0"]);
        let config = cli.to_config().unwrap();

        assert_eq!(config.interface, "eth0");
        assert_eq!(config.iterations, 1);
        assert_eq!(config.enabled, [false; 8]);
        assert_eq!(config.quanta, [0; 8]);
    }

    #[test]
    fn test_class_flags_map_to_their_own_class() {
        let cli = parse(&[
            "--device", "eth1", "--p0", "--p3", "--p7", "--q0", "100", "--q3", "0", "--q7",
            "65535", "-i", "3",
        ]);
        let config = cli.to_config().unwrap();

        assert_eq!(config.enabled_classes(), vec![0, 3, 7]);
        assert_eq!(config.quanta, [100, 0, 0, 0, 0, 0, 0, 65535]);
        assert_eq!(config.iterations, 3);
    }

    #[test]
    fn test_quantum_out_of_range() {
        let cli = parse(&["-d", "eth0", "--q0", "65536"]);
        match cli.to_config() {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "q0"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_quantum_rejected_by_parser() {
        let result = Cli::try_parse_from(["pfcgen", "-d", "eth0", "--q1", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_interface() {
        let cli = parse(&["--p1"]);
        assert!(matches!(cli.to_config(), Err(Error::MissingInterface)));
    }

    #[test]
    fn test_dry_run_needs_no_interface() {
        let cli = parse(&["--dry-run", "--p2", "--q2", "10"]);
        let config = cli.to_config().unwrap();
        assert!(config.interface.is_empty());
        assert_eq!(config.quanta[2], 10);
    }

    #[test]
    fn test_zero_iterations() {
        let cli = parse(&["-d", "eth0", "-i", "0"]);
        assert!(matches!(
            cli.to_config(),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["pfcgen", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_verbosity_count() {
        let cli = parse(&["-d", "eth0", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }
}
