//! ECP url construction. Names and values are percent-encoded except for the
//! fixed literals ECP expects verbatim.

use super::constants::ECP_PORT;
use super::device::{AppLaunchParams, Key, SearchParams};
use super::error::{InputError, Result};

use percent_encoding::{percent_encode, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Everything but the RFC 3986 unreserved characters
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) const DEVICE_INFO: &str = "/query/device-info";
pub(crate) const TV_CHANNELS: &str = "/query/tv-channels";
pub(crate) const TV_ACTIVE_CHANNEL: &str = "/query/tv-active-channel";
pub(crate) const APPS: &str = "/query/apps";
pub(crate) const ACTIVE_APP: &str = "/query/active-app";

pub(crate) fn escape(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub(crate) fn escape_bytes(bytes: &[u8]) -> String {
    percent_encode(bytes, COMPONENT).to_string()
}

/// Keep `value` if it is already a valid encoded component, otherwise encode it
pub(crate) fn escape_unless_encoded(value: &str) -> String {
    if is_encoded(value.as_bytes()) {
        value.to_string()
    } else {
        escape(value)
    }
}

fn is_encoded(mut bytes: &[u8]) -> bool {
    while let Some((&b, rest)) = bytes.split_first() {
        match b {
            b'%' => match rest {
                [hi, lo, tail @ ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    bytes = tail;
                    continue;
                }
                _ => return false,
            },
            b'-' | b'.' | b'_' | b'~' => {}
            b if b.is_ascii_alphanumeric() => {}
            _ => return false,
        }
        bytes = rest;
    }
    true
}

/// Reduce a device location (`http://192.168.1.134:8060/`, `192.168.1.134`, ...)
/// to the ECP base url `scheme://host:port` without a trailing slash
pub(crate) fn base_url(location: &str) -> Result<String> {
    let re = Regex::new(r"^\s*(?:(https?)://)?([^/?#\s]+)").unwrap();
    let caps = match re.captures(location) {
        Some(caps) => caps,
        None => return Err(InputError::InvalidUrl(location.to_string()).into()),
    };

    let host = &caps[2];
    match caps.get(1) {
        Some(scheme) => Ok(format!("{}://{}", scheme.as_str(), host)),
        None if Regex::new(r":\d+$").unwrap().is_match(host) => Ok(format!("http://{}", host)),
        None => Ok(format!("http://{}:{}", host, ECP_PORT)),
    }
}

/// Url under construction, tracking whether the query string has started
#[derive(Debug, Clone)]
pub(crate) struct EcpUrl {
    url: String,
    params: usize,
}

impl EcpUrl {
    pub fn new(base: &str, path: &str) -> Self {
        Self {
            url: format!("{}{}", base, path),
            params: 0,
        }
    }

    /// Append an encoded path segment
    pub fn segment(mut self, segment: &str) -> Self {
        self.url.push('/');
        self.url.push_str(&escape(segment));
        self
    }

    /// Append a path segment that is already encoded
    pub fn raw_segment(mut self, segment: &str) -> Self {
        self.url.push('/');
        self.url.push_str(segment);
        self
    }

    /// `name=value`, both encoded
    pub fn param(&mut self, name: &str, value: &str) -> &mut Self {
        self.separator();
        self.url.push_str(&escape(name));
        self.url.push('=');
        self.url.push_str(&escape(value));
        self
    }

    /// `name=value` exactly as given
    pub fn literal(&mut self, name: &str, value: &str) -> &mut Self {
        self.separator();
        self.url.push_str(name);
        self.url.push('=');
        self.url.push_str(value);
        self
    }

    fn separator(&mut self) {
        self.url.push(if self.params == 0 { '?' } else { '&' });
        self.params += 1;
    }

    pub fn finish(self) -> String {
        self.url
    }
}

pub(crate) fn keypress(base: &str, key: &Key) -> String {
    EcpUrl::new(base, "/keypress")
        .raw_segment(&key.path_segment())
        .finish()
}

pub(crate) fn icon(base: &str, app_id: &str) -> String {
    EcpUrl::new(base, "/query/icon").segment(app_id).finish()
}

pub(crate) fn launch(base: &str, params: &AppLaunchParams) -> String {
    let mut url = EcpUrl::new(base, "/launch").segment(&params.app_id);

    if !params.content_id.is_empty() {
        url.param("contentId", &params.content_id);
    }
    if let Some(media_type) = params.media_type {
        url.literal("MediaType", media_type.as_str());
    }
    for (name, value) in &params.extra {
        url.param(name, value);
    }

    url.finish()
}

pub(crate) fn input<N, V>(base: &str, params: &[(N, V)]) -> String
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = EcpUrl::new(base, "/input");
    for (name, value) in params {
        url.param(name.as_ref(), value.as_ref());
    }
    url.finish()
}

/// Build `/search/browse`. The keyword must not be empty.
pub(crate) fn search(base: &str, keyword: &str, params: &SearchParams) -> Result<String> {
    if keyword.is_empty() {
        return Err(InputError::EmptyKeyword.into());
    }
    params.validate()?;

    let mut url = EcpUrl::new(base, "/search/browse");
    url.param("keyword", keyword);

    if let Some(search_type) = params.search_type {
        url.literal("type", search_type.as_str());
    }
    if params.include_unavailable {
        url.literal("show-unavailable", "true");
    }
    if params.auto_launch {
        url.literal("launch", "true");
    }
    if params.auto_select {
        url.literal("match-any", "true");
    }
    if params.season != 0 {
        url.literal("season", &params.season.to_string());
    }
    if !params.tms_id.is_empty() {
        url.param("tmsid", &params.tms_id);
    }

    let providers: Vec<String> = params
        .provider_ids
        .iter()
        .filter(|id| !id.is_empty())
        .map(|id| escape(id))
        .collect();
    if !providers.is_empty() {
        url.literal("provider-id", &providers.join(","));
    }

    Ok(url.finish())
}
