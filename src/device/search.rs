use crate::error::{InputError, Result};

use serde::{Deserialize, Serialize};

/// Most provider ids a single search takes
pub const MAX_PROVIDERS: usize = 8;
const MAX_PROVIDER_ID_LEN: usize = 13;
const MAX_TMS_ID_LEN: usize = 14;

/// Search filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchType {
    Movie,
    Show,
    Person,
    /// Roku channel (app)
    App,
    Game,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "tv-show",
            Self::Person => "person",
            Self::App => "channel",
            Self::Game => "game",
        }
    }
}

/// Options for [`Device::search()`](super::Device::search). Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// `None` searches everything
    pub search_type: Option<SearchType>,
    /// Include results unavailable in the device's region
    pub include_unavailable: bool,
    /// Select the first result
    pub auto_select: bool,
    /// Launch the first provider in `provider_ids` that has a result
    pub auto_launch: bool,
    /// Season of the show, 0 for none
    pub season: u16,
    /// TMS id of the movie or show
    pub tms_id: String,
    /// App ids of providers to look in, at most [`MAX_PROVIDERS`]. Empty entries are ignored.
    pub provider_ids: Vec<String>,
}

impl SearchParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.tms_id.chars().count() > MAX_TMS_ID_LEN {
            return Err(InputError::TooLong {
                field: "tms_id",
                max: MAX_TMS_ID_LEN,
            }
            .into());
        }
        if self.provider_ids.len() > MAX_PROVIDERS {
            return Err(InputError::TooManyProviders(self.provider_ids.len()).into());
        }
        if self
            .provider_ids
            .iter()
            .any(|id| id.chars().count() > MAX_PROVIDER_ID_LEN)
        {
            return Err(InputError::TooLong {
                field: "provider_ids",
                max: MAX_PROVIDER_ID_LEN,
            }
            .into());
        }
        Ok(())
    }
}
