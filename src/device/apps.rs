use crate::extract::{self, Field};
use crate::{Error, Result};

use roxmltree::Node;
use serde::{Deserialize, Serialize};

use std::fmt::{self, Debug};

/// Id of the TV tuner input, launched by [`Device::launch_tv_channel()`](super::Device::launch_tv_channel)
pub const TV_INPUT_APP: &str = "tvinput.dtv";

/// A Roku channel (app)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Roku app id, like "12" for Netflix
    pub id: String,
    pub name: String,
    /// Usually "appl"
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

impl App {
    fn from_node(node: Node) -> Self {
        let mut app = App::default();
        extract::extract(
            node,
            &mut app,
            &[
                Field::attr("id", 13, |a: &mut App| &mut a.id),
                Field::attr("type", 4, |a: &mut App| &mut a.kind),
                Field::attr("version", 21, |a: &mut App| &mut a.version),
            ],
        );
        app.name = extract::content(node);
        extract::truncate(&mut app.name, 30);
        app
    }

    /// Parse `/query/apps`, keeping at most `max` apps
    pub(crate) fn parse_list(body: &[u8], max: usize) -> Result<Vec<Self>> {
        extract::with_root(body, "apps", |root| {
            root.children()
                .filter(|n| n.is_element())
                .take(max)
                .map(App::from_node)
                .collect()
        })
    }

    /// Parse `/query/active-app`. The home screen comes back as an app without an id.
    pub(crate) fn parse_active(body: &[u8]) -> Result<Self> {
        extract::with_root(body, "app", |root| {
            extract::first_element(root).map(App::from_node)
        })?
        .ok_or(Error::EmptyResponse("app"))
    }
}

/// Icon image of an app, owned by the caller
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AppIcon {
    pub data: Vec<u8>,
}

impl AppIcon {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for AppIcon {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Debug for AppIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppIcon").field("len", &self.len()).finish()
    }
}

/// Kind of content named by [`AppLaunchParams::content_id`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Film,
    Series,
    Season,
    Episode,
    ShortFormVideo,
    TvSpecial,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Film => "movie",
            Self::Series => "series",
            Self::Season => "season",
            Self::Episode => "episode",
            Self::ShortFormVideo => "shortFormVideo",
            Self::TvSpecial => "tvSpecial",
        }
    }
}

/// What to launch with [`Device::launch_app()`](super::Device::launch_app)
///
/// `extra` pairs are appended to the query string in order, after `contentId` and `MediaType`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLaunchParams {
    pub app_id: String,
    /// Deep link content id; empty to just open the app
    pub content_id: String,
    pub media_type: Option<MediaType>,
    pub extra: Vec<(String, String)>,
}

impl AppLaunchParams {
    pub fn new<S: Into<String>>(app_id: S) -> Self {
        Self {
            app_id: app_id.into(),
            ..Default::default()
        }
    }

    pub fn content<S: Into<String>>(mut self, content_id: S, media_type: MediaType) -> Self {
        self.content_id = content_id.into();
        self.media_type = Some(media_type);
        self
    }

    pub fn param<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }
}

impl From<&App> for AppLaunchParams {
    fn from(app: &App) -> Self {
        Self::new(app.id.clone())
    }
}
