#![allow(dead_code)]

#[macro_use]
mod macros;
mod simulated_device;

pub use simulated_device::{DeviceType, EcpMode, SimulatedDevice, APP_IDS, ICON};

use rokuecp::Device;

use tokio::time::timeout;

use std::future::Future;
use std::time::Duration;

/// Run a test future, panicking after 5 seconds
pub async fn timed<F: Future>(test: F) -> F::Output {
    match timeout(Duration::from_secs(5), test).await {
        Ok(output) => output,
        Err(_) => panic!("Test took too long"),
    }
}

/// Function to begin emulation of a device
pub fn simulate(device_type: DeviceType, mode: EcpMode) -> SimulatedDevice {
    // Start Logger
    if let Err(e) = pretty_env_logger::try_init() {
        log::warn!(target: "test::simulated::simulate", "Logger init() returned '{}'", e);
    }

    // Build simulated device
    let device = SimulatedDevice::new(device_type, mode);

    // Start ECP server
    device.serve();
    device
}

/// Connect a `Device` to a simulated device. Unexpected errors will panic.
pub async fn connect_device(sim: &SimulatedDevice) -> Device {
    let dev = match Device::from_url(sim.url()).await {
        Ok(dev) => dev,
        Err(e) => panic!("{}", e),
    };
    sim.clear_requests();
    dev
}

/// Simulate a device and connect to it
pub async fn simulate_and_connect(
    device_type: DeviceType,
    mode: EcpMode,
) -> (SimulatedDevice, Device) {
    let sim = simulate(device_type, mode);
    let dev = connect_device(&sim).await;
    (sim, dev)
}

/// Random data helpers
pub mod rand_data {
    use rand::{distributions::Alphanumeric, Rng};

    pub fn string(len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .map(char::from)
            .take(len)
            .collect()
    }

    pub fn serial() -> String {
        format!("X00{}", string(9).to_uppercase())
    }
}
