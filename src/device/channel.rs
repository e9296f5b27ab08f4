use crate::extract::{self, Field};
use crate::{Error, Result};

use roxmltree::Node;
use serde::{Deserialize, Serialize};

use std::convert::TryFrom;

/// Over-the-air channel known to a Roku TV
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvChannel {
    /// Usually the channel number, like "3.1"
    pub id: String,
    /// Short name, like "WEAU-HD"
    pub name: String,
    /// Channel type, like "air-digital"
    #[serde(rename = "type")]
    pub kind: String,
    /// Broadcast network label
    pub network: String,
    /// Hidden by the user
    pub is_hidden: bool,
    /// On the user's favorites list
    pub is_favorite: bool,
    /// Physical RF channel, nominally 2-69
    pub physical_channel: u16,
    /// Channel frequency in Hz
    pub frequency: u64,
}

/// Program currently airing on the active channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvProgram {
    pub title: String,
    pub description: String,
    /// Rating such as "TV-14"
    pub rating: String,
    pub has_cc: bool,
}

/// The current or last active channel of a Roku TV
///
/// When `is_active` is false, `program` and every signal field hold their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedTvChannel {
    pub channel: TvChannel,
    pub is_active: bool,
    pub program: TvProgram,
    /// False when the tuner has no signal
    pub signal_received: bool,
    /// Resolution the channel is broadcast in, like "1080i"
    pub resolution: String,
    /// 0-100
    pub signal_quality: u16,
    /// Signal strength in dB
    pub signal_strength: i16,
}

#[derive(Default)]
struct ChannelSlots {
    channel: TvChannel,
    hidden: String,
    favorite: String,
    physical_channel: String,
    frequency: String,
    active: String,
}

#[derive(Default)]
struct SignalSlots {
    ext: ExtendedTvChannel,
    has_cc: String,
    signal_state: String,
    signal_quality: String,
    signal_strength: String,
}

fn channel_fields() -> [Field<ChannelSlots>; 9] {
    [
        Field::text("channel-id", 7, |s: &mut ChannelSlots| &mut s.channel.id),
        Field::text("broadcast-network-label", 31, |s: &mut ChannelSlots| &mut s.channel.network),
        Field::text("name", 7, |s: &mut ChannelSlots| &mut s.channel.name),
        Field::text("type", 13, |s: &mut ChannelSlots| &mut s.channel.kind),
        Field::raw("user-hidden", |s: &mut ChannelSlots| &mut s.hidden),
        Field::raw("user-favorite", |s: &mut ChannelSlots| &mut s.favorite),
        Field::raw("physical-channel", |s: &mut ChannelSlots| &mut s.physical_channel),
        Field::raw("physical-frequency", |s: &mut ChannelSlots| &mut s.frequency),
        Field::raw("active-input", |s: &mut ChannelSlots| &mut s.active),
    ]
}

/// Returns the channel and whether it is the active input
fn parse_channel(node: Node) -> (TvChannel, bool) {
    let mut slots = ChannelSlots::default();
    extract::extract(node, &mut slots, &channel_fields());

    let mut channel = slots.channel;
    channel.is_hidden = extract::is_true(&slots.hidden);
    channel.is_favorite = extract::is_true(&slots.favorite);
    channel.physical_channel =
        u16::try_from(extract::leading_unsigned(&slots.physical_channel)).unwrap_or(u16::MAX);
    // ECP reports kHz
    channel.frequency = extract::leading_unsigned(&slots.frequency).saturating_mul(1000);

    (channel, extract::is_true(&slots.active))
}

fn parse_signal(node: Node, ext: ExtendedTvChannel) -> ExtendedTvChannel {
    let mut slots = SignalSlots {
        ext,
        ..Default::default()
    };
    extract::extract(
        node,
        &mut slots,
        &[
            Field::text("program-title", 111, |s: &mut SignalSlots| &mut s.ext.program.title),
            Field::text("program-description", 255, |s: &mut SignalSlots| {
                &mut s.ext.program.description
            }),
            Field::text("program-ratings", 14, |s: &mut SignalSlots| &mut s.ext.program.rating),
            Field::raw("program-has-cc", |s: &mut SignalSlots| &mut s.has_cc),
            Field::text("signal-mode", 7, |s: &mut SignalSlots| &mut s.ext.resolution),
            Field::raw("signal-state", |s: &mut SignalSlots| &mut s.signal_state),
            Field::raw("signal-quality", |s: &mut SignalSlots| &mut s.signal_quality),
            Field::raw("signal-strength", |s: &mut SignalSlots| &mut s.signal_strength),
        ],
    );

    let mut ext = slots.ext;
    ext.program.has_cc = extract::is_true(&slots.has_cc);
    ext.signal_received = slots.signal_state != "none";
    ext.signal_quality =
        u16::try_from(extract::leading_unsigned(&slots.signal_quality)).unwrap_or(u16::MAX);
    let strength = extract::leading_signed(&slots.signal_strength);
    ext.signal_strength = i16::try_from(strength)
        .unwrap_or(if strength < 0 { i16::MIN } else { i16::MAX });
    ext
}

impl TvChannel {
    /// Parse `/query/tv-channels`, keeping at most `max` channels
    pub(crate) fn parse_list(body: &[u8], max: usize) -> Result<Vec<Self>> {
        extract::with_root(body, "tv-channels", |root| {
            root.children()
                .filter(|n| n.is_element())
                .take(max)
                .map(|n| parse_channel(n).0)
                .collect()
        })
    }
}

impl ExtendedTvChannel {
    /// Parse `/query/tv-active-channel`
    pub(crate) fn parse(body: &[u8]) -> Result<Self> {
        extract::with_root(body, "channel", |root| {
            extract::first_element(root).map(|node| {
                let (channel, is_active) = parse_channel(node);
                let ext = ExtendedTvChannel {
                    channel,
                    is_active,
                    ..Default::default()
                };

                if ext.is_active {
                    parse_signal(node, ext)
                } else {
                    ext
                }
            })
        })?
        .ok_or(Error::EmptyResponse("channel"))
    }
}
