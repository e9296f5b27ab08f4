mod fixtures;

use super::rand_data;

pub use fixtures::{APP_IDS, ICON};

use http::{Method, Response, StatusCode};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use warp::{filters::BoxedFilter, path::FullPath, Filter, Reply};

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, RwLock};

/// Random will choose a TV or a streaming stick at random
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceType {
    TV,
    Stick,
    /// Streaming stick without search support
    Legacy,
    Random,
}

impl DeviceType {
    fn choose(self) -> Self {
        match self {
            Self::Random => rand::random(),
            not_random => not_random,
        }
    }
}

impl Distribution<DeviceType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DeviceType {
        match rng.gen_range(0..3) {
            0 => DeviceType::TV,
            1 => DeviceType::Stick,
            2 => DeviceType::Legacy,
            _ => panic!("Rand Device Type - Bad Range"),
        }
    }
}

/// "Control by mobile apps" setting of the device
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EcpMode {
    Enabled,
    Limited,
    /// Every request is answered with 401
    Disabled,
}

impl EcpMode {
    fn setting(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Limited => "limited",
            Self::Disabled => "disabled",
        }
    }
}

/// Simulated Roku which tests will attempt to connect to
#[derive(Debug, Clone)]
pub struct SimulatedDevice {
    inner: Arc<SimulatedDeviceRef>,
}

#[derive(Debug)]
struct SimulatedDeviceRef {
    name: String,
    serial: String,
    device_type: DeviceType,
    mode: RwLock<EcpMode>,
    requests: Mutex<Vec<String>>,
    addr: RwLock<Option<SocketAddr>>,
}

impl SimulatedDevice {
    pub fn new(device_type: DeviceType, mode: EcpMode) -> Self {
        Self {
            inner: Arc::new(SimulatedDeviceRef {
                name: format!("Simulated {}", rand_data::string(4)),
                serial: rand_data::serial(),
                device_type: device_type.choose(),
                mode: RwLock::new(mode),
                requests: Mutex::new(Vec::new()),
                addr: RwLock::new(None),
            }),
        }
    }

    /// Start the ECP server on an ephemeral port
    pub fn serve(&self) {
        let (addr, server) = warp::serve(self.api()).bind_ephemeral(([127, 0, 0, 1], 0));
        *self.inner.addr.write().unwrap() = Some(addr);
        tokio::spawn(server);
        log::info!(target: "test::simulated_device::serve", "Starting ECP server on {}", addr);
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.inner.addr.read().unwrap().unwrap())
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn serial(&self) -> &str {
        &self.inner.serial
    }

    pub fn device_type(&self) -> DeviceType {
        self.inner.device_type
    }

    pub fn set_mode(&self, mode: EcpMode) {
        *self.inner.mode.write().unwrap() = mode;
    }

    /// Every request received so far, as "METHOD /path?query"
    pub fn requests(&self) -> Vec<String> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.inner.requests.lock().unwrap().clear();
    }

    fn api(&self) -> BoxedFilter<(impl Reply,)> {
        let query = warp::query::raw().or(warp::any().map(String::new)).unify();

        warp::method()
            .and(warp::path::full())
            .and(query)
            .map({
                let device = self.clone();
                move |method: Method, path: FullPath, query: String| {
                    device.handle(method, path.as_str(), &query)
                }
            })
            .with(warp::log("test::simulated_device::api"))
            .boxed()
    }

    fn handle(&self, method: Method, path: &str, query: &str) -> Response<Vec<u8>> {
        self.inner.requests.lock().unwrap().push(if query.is_empty() {
            format!("{} {}", method, path)
        } else {
            format!("{} {}?{}", method, path, query)
        });

        if *self.inner.mode.read().unwrap() == EcpMode::Disabled {
            return status(StatusCode::UNAUTHORIZED);
        }

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match (method.as_str(), segments.as_slice()) {
            ("GET", ["query", "device-info"]) => xml(self.device_info()),
            ("GET", ["query", "apps"]) => xml(fixtures::APPS.to_string()),
            ("GET", ["query", "active-app"]) => xml(fixtures::ACTIVE_APP.to_string()),
            ("GET", ["query", "tv-channels"]) if self.is_tv() => {
                xml(fixtures::TV_CHANNELS.to_string())
            }
            ("GET", ["query", "tv-active-channel"]) if self.is_tv() => {
                xml(fixtures::ACTIVE_CHANNEL.to_string())
            }
            ("GET", ["query", "icon", id]) if APP_IDS.contains(id) => Response::builder()
                .header("Content-Type", "image/png")
                .body(ICON.to_vec())
                .unwrap(),
            ("POST", ["keypress", _]) => status(StatusCode::OK),
            ("POST", ["launch", id]) if APP_IDS.contains(id) || *id == "tvinput.dtv" => {
                status(StatusCode::OK)
            }
            ("POST", ["input"]) => status(StatusCode::OK),
            ("POST", ["search", "browse"]) if self.has_search() => status(StatusCode::OK),
            _ => status(StatusCode::NOT_FOUND),
        }
    }

    fn device_info(&self) -> String {
        device_info!(
            self.inner.name,
            self.inner.serial,
            self.is_tv(),
            self.inner.mode.read().unwrap().setting(),
            self.has_search()
        )
    }

    fn is_tv(&self) -> bool {
        self.inner.device_type == DeviceType::TV
    }

    fn has_search(&self) -> bool {
        self.inner.device_type != DeviceType::Legacy
    }
}

fn xml(body: String) -> Response<Vec<u8>> {
    Response::builder()
        .header("Content-Type", "text/xml; charset=\"utf-8\"")
        .body(body.into_bytes())
        .unwrap()
}

fn status(code: StatusCode) -> Response<Vec<u8>> {
    Response::builder().status(code).body(Vec::new()).unwrap()
}
