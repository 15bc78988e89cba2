//! Egress interface lookup and raw link-layer channel provisioning

use crate::{Error, MacAddr, Result};
use pnet_datalink::{self, Channel, DataLinkSender, NetworkInterface};
use std::fmt;
use std::io;
use tracing::{debug, info};

/// Network interface
#[derive(Debug, Clone)]
pub struct Interface {
    /// Interface name (e.g., "eth0", "en0")
    pub name: String,
    /// Interface index
    pub index: u32,
    /// Hardware address, zero if the interface has none
    pub mac_address: MacAddr,
}

impl Interface {
    /// Get interface by name
    pub fn by_name(name: &str) -> Result<Self> {
        find_interface(name).map(|iface| Self::from(&iface))
    }

    /// Open a raw Ethernet channel on this interface and keep only the sending half.
    pub fn open_sender(&self) -> Result<Box<dyn DataLinkSender>> {
        let interface = find_interface(&self.name)?;

        let tx = match pnet_datalink::channel(&interface, Default::default()) {
            Ok(Channel::Ethernet(tx, _rx)) => tx,
            Ok(_) => return Err(Error::Interface("Unsupported channel type".to_string())),
            Err(e) => return Err(channel_error(&self.name, e)),
        };

        info!(interface = %self.name, index = self.index, "Raw channel opened");
        Ok(tx)
    }
}

impl From<&NetworkInterface> for Interface {
    fn from(iface: &NetworkInterface) -> Self {
        let mac_address = iface
            .mac
            .map(|mac| MacAddr([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]))
            .unwrap_or_else(MacAddr::zero);

        Self {
            name: iface.name.clone(),
            index: iface.index,
            mac_address,
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.mac_address)
    }
}

/// Map a failure to open the raw channel onto the error the user sees.
fn channel_error(name: &str, e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::PermissionDenied {
        Error::InsufficientPrivileges(format!(
            "unable to open raw socket on {}, check your permissions \
             (run as root or grant CAP_NET_RAW)",
            name
        ))
    } else {
        Error::Interface(format!("Failed to create channel on {}: {}", name, e))
    }
}

fn find_interface(name: &str) -> Result<NetworkInterface> {
    let found = pnet_datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| Error::InterfaceNotFound(name.to_string()))?;
    debug!(interface = %found.name, index = found.index, "Interface resolved");
    Ok(found)
}
