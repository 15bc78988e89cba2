//! Command execution: validate, build once, send N times

use pfcgen_core::{FrameSink, GeneratorConfig, Interface, Result, TransmitStats, Transmitter};
use pfcgen_packet::{PfcFrame, WireFrame};
use tracing::{debug, info};

use crate::args::Cli;

/// Execute the command described by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;
    let frame = build_frame(&config);

    if cli.dry_run {
        println!("{}", frame);
        return Ok(());
    }

    let interface = Interface::by_name(&config.interface)?;
    info!(interface = %interface, "Using egress interface");
    let sender = interface.open_sender()?;

    println!("Generating {} Packet(s)", config.iterations);
    send(sender, &frame, config.iterations)?;
    Ok(())
}

/// Write `frame` to `sink` `iterations` times.
pub fn send<S: FrameSink>(sink: S, frame: &WireFrame, iterations: u32) -> Result<TransmitStats> {
    Transmitter::new(sink).transmit(frame.as_bytes(), iterations)
}

fn build_frame(config: &GeneratorConfig) -> WireFrame {
    let frame = PfcFrame::from(config).build();
    debug!(
        vector = format_args!("{:#06x}", frame.enable_vector()),
        checksum = format_args!("{:#06x}", frame.checksum()),
        size = frame.len(),
        "PFC frame built"
    );
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pfcgen_core::Error;
    use std::io;

    #[derive(Default)]
    struct CountingSink {
        frames: Vec<Vec<u8>>,
    }

    impl FrameSink for &mut CountingSink {
        fn send_frame(&mut self, frame: &[u8]) -> io::Result<()> {
            self.frames.push(frame.to_vec());
            Ok(())
        }
    }

    fn config_for(args: &[&str]) -> GeneratorConfig {
        Cli::try_parse_from(std::iter::once("pfcgen").chain(args.iter().copied()))
            .unwrap()
            .to_config()
            .unwrap()
    }

    #[test]
    fn test_send_writes_identical_frames() {
        let config = config_for(&["-d", "eth0", "--p0", "--q0", "100", "-i", "3"]);
        let frame = build_frame(&config);

        let mut sink = CountingSink::default();
        let stats = send(&mut sink, &frame, config.iterations).unwrap();

        assert_eq!(stats.frames_sent, 3);
        assert_eq!(sink.frames.len(), 3);
        assert!(sink.frames.iter().all(|f| f.as_slice() == frame.as_bytes()));
        assert!(sink.frames.iter().all(|f| f.len() == 64));
    }

    #[test]
    fn test_built_frame_matches_flags() {
        let config = config_for(&[
            "-d", "eth0", "--p0", "--p3", "--p7", "--q0", "100", "--q7", "65535",
        ]);
        let frame = build_frame(&config);

        assert_eq!(frame.enable_vector(), 0x0089);
        assert_eq!(&frame.as_bytes()[18..20], &[0x00, 0x64]);
        assert_eq!(&frame.as_bytes()[32..34], &[0xFF, 0xFF]);
        assert!(frame.verify());
    }

    #[test]
    fn test_dry_run_succeeds_without_interface() {
        let cli = Cli::try_parse_from(["pfcgen", "--dry-run", "--p1"]).unwrap();
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_invalid_quantum_stops_before_lookup() {
        let cli = Cli::try_parse_from(["pfcgen", "-d", "nonexistent0", "--q4", "70000"]).unwrap();
        assert!(matches!(run(&cli), Err(Error::InvalidParameter { .. })));
    }

    #[test]
    fn test_unknown_interface() {
        let cli = Cli::try_parse_from(["pfcgen", "-d", "nonexistent_interface_xyz"]).unwrap();
        assert!(matches!(run(&cli), Err(Error::InterfaceNotFound(_))));
    }
}
