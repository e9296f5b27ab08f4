use crate::extract::{self, Field};
use crate::Result;

use serde::{Deserialize, Serialize};

/// Identity and capabilities of a Roku device, as reported by `/query/device-info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// User-assigned name, up to 120 characters
    pub name: String,
    /// Location label such as "Bedroom", up to 15 characters
    pub location: String,
    pub model: String,
    pub serial: String,
    /// UI resolution such as "1080p"
    pub resolution: String,
    pub mac_address: String,
    pub software_version: String,
    pub is_tv: bool,
    pub is_on: bool,
    /// ECP is in Limited mode; most input operations are refused
    pub is_limited: bool,
    pub developer_mode: bool,
    pub has_search_support: bool,
    pub has_headphone_support: bool,
    pub headphones_connected: bool,
}

#[derive(Default)]
struct Slots {
    info: DeviceInfo,
    friendly_name: String,
    power_mode: String,
    is_tv: String,
    ecp_mode: String,
    developer: String,
    search: String,
    private_listening: String,
    headphones: String,
}

impl DeviceInfo {
    pub(crate) fn parse(body: &[u8]) -> Result<Self> {
        extract::with_root(body, "device-info", |root| {
            let mut slots = Slots::default();
            extract::extract(
                root,
                &mut slots,
                &[
                    Field::text("user-device-name", 120, |s: &mut Slots| &mut s.info.name),
                    Field::text("friendly-device-name", 120, |s: &mut Slots| &mut s.friendly_name),
                    Field::text("user-device-location", 15, |s: &mut Slots| &mut s.info.location),
                    Field::text("friendly-model-name", 31, |s: &mut Slots| &mut s.info.model),
                    Field::text("serial-number", 13, |s: &mut Slots| &mut s.info.serial),
                    Field::text("ui-resolution", 7, |s: &mut Slots| &mut s.info.resolution),
                    Field::text("wifi-mac", 17, |s: &mut Slots| &mut s.info.mac_address),
                    Field::text("software-version", 9, |s: &mut Slots| &mut s.info.software_version),
                    Field::raw("power-mode", |s: &mut Slots| &mut s.power_mode),
                    Field::raw("is-tv", |s: &mut Slots| &mut s.is_tv),
                    Field::raw("ecp-setting-mode", |s: &mut Slots| &mut s.ecp_mode),
                    Field::raw("developer-enabled", |s: &mut Slots| &mut s.developer),
                    Field::raw("search-enabled", |s: &mut Slots| &mut s.search),
                    Field::raw("supports-private-listening", |s: &mut Slots| &mut s.private_listening),
                    Field::raw("headphones-connected", |s: &mut Slots| &mut s.headphones),
                ],
            );

            let mut info = slots.info;
            if info.name.trim().is_empty() {
                info.name = slots.friendly_name;
            }
            info.is_on = slots.power_mode == "PowerOn";
            info.is_tv = extract::is_true(&slots.is_tv);
            info.is_limited = slots.ecp_mode == "limited";
            info.developer_mode = extract::is_true(&slots.developer);
            info.has_search_support = extract::is_true(&slots.search);
            info.has_headphone_support = extract::is_true(&slots.private_listening);
            info.headphones_connected = extract::is_true(&slots.headphones);

            log::debug!(target: "rokuecp::device::info", "{:?}", info);
            info
        })
    }
}
