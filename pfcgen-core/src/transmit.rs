//! Send loop
//!
//! Writes one prebuilt frame a fixed number of times. There is no pacing, no
//! retry and no delivery check: the first failed write ends the run.

use crate::{Error, Result};
use pnet_datalink::DataLinkSender;
use std::io;
use tracing::{error, info, trace};

/// Anything a finished frame can be written to
pub trait FrameSink {
    /// Write one complete frame.
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()>;
}

impl FrameSink for Box<dyn DataLinkSender> {
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        send_outcome(self.send_to(frame, None))
    }
}

/// pnet reports a full send buffer as `None` rather than an I/O error.
fn send_outcome(outcome: Option<io::Result<()>>) -> io::Result<()> {
    outcome.unwrap_or_else(|| Err(io::Error::other("no room in the send buffer")))
}

/// Counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransmitStats {
    /// Frames written successfully
    pub frames_sent: u64,
    /// Bytes written successfully
    pub bytes_sent: u64,
}

/// Writes one frame repeatedly to a [`FrameSink`]
pub struct Transmitter<S: FrameSink> {
    sink: S,
}

impl<S: FrameSink> Transmitter<S> {
    /// Create a transmitter that owns `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Write `frame` exactly `iterations` times.
    ///
    /// On failure the returned [`Error::Transmission`] carries how many frames
    /// had already gone out.
    pub fn transmit(&mut self, frame: &[u8], iterations: u32) -> Result<TransmitStats> {
        if iterations == 0 {
            return Err(Error::invalid_parameter(
                "iteration",
                "must send at least one frame",
            ));
        }

        info!(iterations, size = frame.len(), "Transmission started");

        let mut stats = TransmitStats::default();
        for _ in 0..iterations {
            if let Err(source) = self.sink.send_frame(frame) {
                error!(sent = stats.frames_sent, %source, "Frame write failed, aborting");
                return Err(Error::Transmission {
                    sent: stats.frames_sent,
                    source,
                });
            }
            stats.frames_sent += 1;
            stats.bytes_sent += frame.len() as u64;
            trace!(seq = stats.frames_sent, "Frame sent");
        }

        info!(
            frames = stats.frames_sent,
            bytes = stats.bytes_sent,
            "Transmission complete"
        );
        Ok(stats)
    }

    /// Give back the sink
    pub fn into_inner(self) -> S {
        self.sink
    }
}
