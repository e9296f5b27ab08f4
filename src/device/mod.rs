use super::error::{CapabilityError, Error, Result};
use super::query;
use super::transport::{HttpTransport, RequestType, Transport};

mod apps;
mod channel;
mod info;
mod input;
mod remote;
mod search;

pub use self::apps::{App, AppIcon, AppLaunchParams, MediaType, TV_INPUT_APP};
pub use self::channel::{ExtendedTvChannel, TvChannel, TvProgram};
pub use self::info::DeviceInfo;
pub use self::input::Locale;
pub use self::remote::{Key, TV_ONLY_KEYS};
pub use self::search::{SearchParams, SearchType, MAX_PROVIDERS};

use std::fmt::{self, Debug};
use std::sync::Arc;

/// A Roku device
///
/// A `Device` is a snapshot of what `/query/device-info` reported when it was created,
/// plus the [`Transport`] used to talk to it. Nothing is cached between calls; use
/// [`refresh()`](Device::refresh) for a newer snapshot. Find devices on your local
/// network with [`discover_devices()`](crate::discover_devices), or connect directly
/// with [`Device::from_url()`](Device::from_url).
///
/// Cloning is cheap and clones can be moved to other threads.
#[derive(Clone)]
pub struct Device {
    url: String,
    info: DeviceInfo,
    transport: Arc<dyn Transport>,
}

impl Device {
    /// Connect to a Roku device from its ECP url
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use rokuecp::Device;
    /// #
    /// # async fn connect() -> Result<Device, rokuecp::Error> {
    /// let dev = Device::from_url("http://192.168.1.134:8060/").await?;
    /// println!("{}", dev.name());
    /// // > "Living Room"
    /// #
    /// # Ok(dev)
    /// # }
    /// ```
    pub async fn from_url<S: AsRef<str>>(url: S) -> Result<Self> {
        Self::with_transport(url, Arc::new(HttpTransport::new())).await
    }

    /// Like [`from_url()`](Device::from_url), sending every request through `transport`
    pub async fn with_transport<S: AsRef<str>>(
        url: S,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let url = query::base_url(url.as_ref())?;
        let body = transport
            .send(RequestType::Get, &format!("{}{}", url, query::DEVICE_INFO))
            .await?;
        let info = DeviceInfo::parse(&body)?;

        Ok(Self {
            url,
            info,
            transport,
        })
    }

    /// Query the device again and return a new snapshot
    pub async fn refresh(&self) -> Result<Self> {
        Self::with_transport(&self.url, self.transport.clone()).await
    }

    /// ECP base url, like "http://192.168.1.134:8060"
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Get device's user-assigned name
    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn is_tv(&self) -> bool {
        self.info.is_tv
    }

    pub fn is_limited(&self) -> bool {
        self.info.is_limited
    }

    pub fn has_search_support(&self) -> bool {
        self.info.has_search_support
    }

    /// Emulate a button press on the Roku remote
    ///
    /// TV-only keys (see [`TV_ONLY_KEYS`]) are refused for devices that are not TVs, and
    /// every key is refused in Limited mode, without contacting the device.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rokuecp::{Device, Key};
    ///
    /// # async fn volume_up() -> Result<(), rokuecp::Error> {
    /// let dev = Device::from_url("192.168.1.134").await?;
    ///
    /// dev.send_key(Key::Home).await?;
    /// if dev.is_tv() {
    ///     dev.send_key(Key::VolumeUp).await?;
    /// }
    /// // Key names work too
    /// dev.send_key("InstantReplay").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_key<K: Into<Key>>(&self, key: K) -> Result<()> {
        let key = key.into();
        if !self.info.is_tv && key.is_tv_only() {
            return Err(Error::not_tv());
        }
        if self.info.is_limited {
            return Err(Error::limited());
        }

        self.post(query::keypress(&self.url, &key)).await
    }

    /// Get up to `max` TV channels. Only available on Roku TVs.
    pub async fn tv_channels(&self, max: usize) -> Result<Vec<TvChannel>> {
        self.require_tv()?;
        self.require_full_control()?;

        let body = self.get(self.path(query::TV_CHANNELS)).await?;
        TvChannel::parse_list(&body, max)
    }

    /// Get the current or last active TV channel. Only available on Roku TVs.
    pub async fn active_tv_channel(&self) -> Result<ExtendedTvChannel> {
        self.require_tv()?;
        self.require_full_control()?;

        let body = self.get(self.path(query::TV_ACTIVE_CHANNEL)).await?;
        ExtendedTvChannel::parse(&body)
    }

    /// Tune the TV input to `channel`. Only available on Roku TVs.
    pub async fn launch_tv_channel(&self, channel: &TvChannel) -> Result<()> {
        self.require_tv()?;

        let params = AppLaunchParams::new(TV_INPUT_APP)
            .param("chan", channel.id.as_str())
            .param("lcn", channel.id.as_str())
            .param("ch", channel.id.as_str());
        self.launch_app(&params).await
    }

    /// Get up to `max` installed apps
    pub async fn apps(&self, max: usize) -> Result<Vec<App>> {
        self.require_full_control()?;

        let body = self.get(self.path(query::APPS)).await?;
        App::parse_list(&body, max)
    }

    /// Get the app currently in the foreground. On the home screen this is an app
    /// without an id.
    pub async fn active_app(&self) -> Result<App> {
        let body = self.get(self.path(query::ACTIVE_APP)).await?;
        App::parse_active(&body)
    }

    /// Download an app's icon
    pub async fn app_icon(&self, app: &App) -> Result<AppIcon> {
        self.require_full_control()?;

        let data = self.get(query::icon(&self.url, &app.id)).await?;
        Ok(AppIcon { data })
    }

    /// Launch an app, optionally deep linking into content
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rokuecp::{AppLaunchParams, Device, MediaType};
    ///
    /// # async fn launch() -> Result<(), rokuecp::Error> {
    /// let dev = Device::from_url("192.168.1.134").await?;
    /// let params = AppLaunchParams::new("12").content("80057281", MediaType::Series);
    /// dev.launch_app(&params).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn launch_app(&self, params: &AppLaunchParams) -> Result<()> {
        self.post(query::launch(&self.url, params)).await
    }

    /// Send custom `name=value` input to the active app
    pub async fn custom_input<N, V>(&self, params: &[(N, V)]) -> Result<()>
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        self.require_full_control()?;
        self.post(query::input(&self.url, params)).await
    }

    /// Search for a movie, show, person, app or game, and show or launch the results
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rokuecp::{Device, SearchParams, SearchType};
    ///
    /// # async fn search() -> Result<(), rokuecp::Error> {
    /// let dev = Device::from_url("192.168.1.134").await?;
    /// let params = SearchParams {
    ///     search_type: Some(SearchType::Show),
    ///     season: 2,
    ///     provider_ids: vec!["12".into()],
    ///     auto_launch: true,
    ///     ..Default::default()
    /// };
    /// dev.search("The Office", &params).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, keyword: &str, params: &SearchParams) -> Result<()> {
        if !self.info.has_search_support {
            return Err(CapabilityError::NoSearchSupport.into());
        }
        self.require_full_control()?;

        let url = query::search(&self.url, keyword, params)?;
        self.post(url).await
    }

    /// Type `text` on the device's on-screen keyboard, one key per character
    ///
    /// Each character is encoded with `locale` and sent as a `Lit_` key. Characters
    /// `locale` cannot represent are skipped. A failed key does not stop the rest of
    /// the string unless the device denies ECP access; the result is that of the last
    /// key sent.
    pub async fn type_string(&self, text: &str, locale: Locale) -> Result<()> {
        self.require_full_control()?;

        let mut result = Ok(());
        for c in text.chars() {
            let bytes = match locale.encode(c) {
                Some(bytes) => bytes,
                None => {
                    log::debug!(
                        target: "rokuecp::device::type_string",
                        "Skipping {:?}, not representable in {}",
                        c,
                        locale.name()
                    );
                    continue;
                }
            };

            result = match self.send_key(Key::literal(&bytes)).await {
                Err(Error::Unauthorized) => return Err(Error::Unauthorized),
                Err(e) => {
                    log::warn!(target: "rokuecp::device::type_string", "Key {:?} failed: {}", c, e);
                    Err(e)
                }
                Ok(()) => Ok(()),
            };
        }
        result
    }

    fn require_tv(&self) -> Result<()> {
        if self.info.is_tv {
            Ok(())
        } else {
            Err(Error::not_tv())
        }
    }

    fn require_full_control(&self) -> Result<()> {
        if self.info.is_limited {
            Err(Error::limited())
        } else {
            Ok(())
        }
    }

    fn path(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    async fn get(&self, url: String) -> Result<Vec<u8>> {
        self.transport.send(RequestType::Get, &url).await
    }

    async fn post(&self, url: String) -> Result<()> {
        self.transport.send(RequestType::Post, &url).await?;
        Ok(())
    }
}

impl Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("url", &self.url)
            .field("info", &self.info)
            .finish()
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && self.info == other.info
    }
}
