//! Generator configuration
//!
//! A [`GeneratorConfig`] is built once from user input, validated, and then
//! handed by value to frame construction and transmission. Nothing downstream
//! reads ambient state.

use crate::{Error, Result, PRIORITY_CLASSES};

/// Everything needed to build and send one batch of PFC frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Egress interface name
    pub interface: String,
    /// Enable bit per priority class
    pub enabled: [bool; PRIORITY_CLASSES],
    /// Pause time in quanta per priority class
    pub quanta: [u16; PRIORITY_CLASSES],
    /// Number of times the frame is written
    pub iterations: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interface: String::new(),
            enabled: [false; PRIORITY_CLASSES],
            quanta: [0; PRIORITY_CLASSES],
            iterations: 1,
        }
    }
}

impl GeneratorConfig {
    pub fn new<S: Into<String>>(interface: S) -> Self {
        Self {
            interface: interface.into(),
            ..Self::default()
        }
    }

    pub fn with_enabled(mut self, class: usize) -> Result<Self> {
        check_class(class)?;
        self.enabled[class] = true;
        Ok(self)
    }

    pub fn with_quantum(mut self, class: usize, quanta: u16) -> Result<Self> {
        check_class(class)?;
        self.quanta[class] = quanta;
        Ok(self)
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Narrow a raw quantum value to the 16-bit wire field.
    pub fn validate_quantum(class: usize, raw: u32) -> Result<u16> {
        u16::try_from(raw).map_err(|_| {
            Error::invalid_parameter(
                format!("q{}", class),
                format!("{} is not a valid quanta value, must be in the range 0-65535", raw),
            )
        })
    }

    /// Check the invariants the frame builder and transmitter rely on.
    pub fn validate(&self) -> Result<()> {
        if self.interface.trim().is_empty() {
            return Err(Error::MissingInterface);
        }
        if self.iterations == 0 {
            return Err(Error::invalid_parameter(
                "iteration",
                "must send at least one frame",
            ));
        }
        Ok(())
    }

    /// Classes with their enable bit set, in ascending order
    pub fn enabled_classes(&self) -> Vec<usize> {
        self.enabled
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(class, _)| class)
            .collect()
    }
}

fn check_class(class: usize) -> Result<()> {
    if class >= PRIORITY_CLASSES {
        return Err(Error::invalid_parameter(
            "class",
            format!("{} is out of range, classes are 0-7", class),
        ));
    }
    Ok(())
}
