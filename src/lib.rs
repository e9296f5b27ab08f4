//! Client for the Roku External Control Protocol (ECP)
//!
//! Find Roku devices on the local network with [`discover_devices()`], then query and
//! control one through a [`Device`].
//!
//! ```no_run
//! use rokuecp::{Device, Key};
//!
//! # async fn run() -> Result<(), rokuecp::Error> {
//! for url in rokuecp::discover_devices(4).await? {
//!     let dev = Device::from_url(&url).await?;
//!     println!("{} ({})", dev.name(), dev.info().model);
//!
//!     if dev.is_tv() {
//!         dev.send_key(Key::VolumeMute).await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod constants;
mod device;
mod discover;
mod error;
mod extract;
mod query;
mod transport;
use constants::*;

pub use device::{
    App, AppIcon, AppLaunchParams, Device, DeviceInfo, ExtendedTvChannel, Key, Locale,
    MediaType, SearchParams, SearchType, TvChannel, TvProgram, MAX_PROVIDERS, TV_INPUT_APP,
    TV_ONLY_KEYS,
};
pub use error::{CapabilityError, Error, ErrorKind, InputError, Result};
pub use transport::{HttpTransport, RequestType, Transport};

use std::net::{Ipv4Addr, SocketAddr};

/// Discover Roku devices on network
///
/// This function uses SSDP to find devices offering the `roku:ecp` service on the
/// local network. It returns the ECP base url of at most `max_devices` of them, in the
/// order they answered, after at most five seconds. Pass each url to
/// [`Device::from_url()`](Device::from_url).
///
/// No devices is not an error; the list is simply empty.
pub async fn discover_devices(max_devices: usize) -> Result<Vec<String>> {
    discover_devices_on(Ipv4Addr::UNSPECIFIED, max_devices).await
}

/// Like [`discover_devices()`], searching from the network interface with address `interface`
pub async fn discover_devices_on(interface: Ipv4Addr, max_devices: usize) -> Result<Vec<String>> {
    discover::ssdp(
        DEFAULT_SSDP_IP,
        DEFAULT_SSDP_SERVICE,
        DEFAULT_SSDP_MAXTIME,
        max_devices,
        DISCOVERY_BUDGET,
        SocketAddr::from((interface, 0)),
    )
    .await
}
