use std::time::Duration;

pub const DEFAULT_TIMEOUT: u64 = 5;

pub const DEFAULT_SSDP_IP: &str = "239.255.255.250:1900";
pub const DEFAULT_SSDP_SERVICE: &str = "roku:ecp";
pub const DEFAULT_SSDP_MAXTIME: u8 = 3;

/// Discovery never runs longer than this
pub const DISCOVERY_BUDGET: Duration = Duration::from_secs(5);

/// M-SEARCH datagrams sent per discovery, spread evenly over the budget
pub const SSDP_SEARCHES: u32 = 3;

pub const ECP_PORT: u16 = 8060;
