use crate::query;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Keys that only exist on Roku TVs
pub const TV_ONLY_KEYS: [&str; 12] = [
    "VolumeUp",
    "VolumeDown",
    "VolumeMute",
    "PowerOff",
    "ChannelUp",
    "ChannelDown",
    "InputTuner",
    "InputHDMI1",
    "InputHDMI2",
    "InputHDMI3",
    "InputHDMI4",
    "InputAV1",
];

/// Remote control keys you can send with [`Device::send_key()`](super::Device::send_key)
///
/// Any key ECP knows about but this enum does not can be sent with `Other`.
/// Parsing a key name with [`str::parse`] never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Home,
    Rev,
    Fwd,
    Play,
    Select,
    Left,
    Right,
    Down,
    Up,
    Back,
    InstantReplay,
    Info,
    Backspace,
    Search,
    Enter,
    FindRemote,
    /// TV only
    VolumeDown,
    /// TV only
    VolumeUp,
    /// TV only
    VolumeMute,
    /// TV only
    PowerOff,
    /// TV only
    ChannelUp,
    /// TV only
    ChannelDown,
    /// TV only
    InputTuner,
    /// TV only
    InputHdmi1,
    /// TV only
    InputHdmi2,
    /// TV only
    InputHdmi3,
    /// TV only
    InputHdmi4,
    /// TV only
    InputAv1,
    /// Keyboard character, holding its percent-encoded bytes. A payload that is
    /// not valid percent-encoding is encoded when the key is sent.
    Lit(String),
    /// Key name passed through to the device
    Other(String),
}

impl Key {
    /// Keyboard key for already encoded character bytes
    pub fn literal(bytes: &[u8]) -> Self {
        Self::Lit(query::escape_bytes(bytes))
    }

    pub fn is_tv_only(&self) -> bool {
        let name = self.to_string();
        TV_ONLY_KEYS.contains(&name.as_str())
    }

    pub(crate) fn path_segment(&self) -> String {
        match self {
            Self::Lit(payload) => format!("Lit_{}", query::escape_unless_encoded(payload)),
            Self::Other(name) => query::escape(name),
            key => key.to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Home => "Home",
            Self::Rev => "Rev",
            Self::Fwd => "Fwd",
            Self::Play => "Play",
            Self::Select => "Select",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Down => "Down",
            Self::Up => "Up",
            Self::Back => "Back",
            Self::InstantReplay => "InstantReplay",
            Self::Info => "Info",
            Self::Backspace => "Backspace",
            Self::Search => "Search",
            Self::Enter => "Enter",
            Self::FindRemote => "FindRemote",
            Self::VolumeDown => "VolumeDown",
            Self::VolumeUp => "VolumeUp",
            Self::VolumeMute => "VolumeMute",
            Self::PowerOff => "PowerOff",
            Self::ChannelUp => "ChannelUp",
            Self::ChannelDown => "ChannelDown",
            Self::InputTuner => "InputTuner",
            Self::InputHdmi1 => "InputHDMI1",
            Self::InputHdmi2 => "InputHDMI2",
            Self::InputHdmi3 => "InputHDMI3",
            Self::InputHdmi4 => "InputHDMI4",
            Self::InputAv1 => "InputAV1",
            Self::Lit(encoded) => return write!(f, "Lit_{}", encoded),
            Self::Other(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

impl FromStr for Key {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Home" => Self::Home,
            "Rev" => Self::Rev,
            "Fwd" => Self::Fwd,
            "Play" => Self::Play,
            "Select" => Self::Select,
            "Left" => Self::Left,
            "Right" => Self::Right,
            "Down" => Self::Down,
            "Up" => Self::Up,
            "Back" => Self::Back,
            "InstantReplay" => Self::InstantReplay,
            "Info" => Self::Info,
            "Backspace" => Self::Backspace,
            "Search" => Self::Search,
            "Enter" => Self::Enter,
            "FindRemote" => Self::FindRemote,
            "VolumeDown" => Self::VolumeDown,
            "VolumeUp" => Self::VolumeUp,
            "VolumeMute" => Self::VolumeMute,
            "PowerOff" => Self::PowerOff,
            "ChannelUp" => Self::ChannelUp,
            "ChannelDown" => Self::ChannelDown,
            "InputTuner" => Self::InputTuner,
            "InputHDMI1" => Self::InputHdmi1,
            "InputHDMI2" => Self::InputHdmi2,
            "InputHDMI3" => Self::InputHdmi3,
            "InputHDMI4" => Self::InputHdmi4,
            "InputAV1" => Self::InputAv1,
            other => match other.strip_prefix("Lit_") {
                Some(payload) => Self::Lit(query::escape_unless_encoded(payload)),
                None => Self::Other(other.to_string()),
            },
        })
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match s.parse::<Key>() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

/// UTF-8 keyboard key for a character
impl From<char> for Key {
    fn from(c: char) -> Self {
        let mut buf = [0; 4];
        Self::literal(c.encode_utf8(&mut buf).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tv_only() {
        for name in TV_ONLY_KEYS.iter() {
            let key: Key = name.parse().unwrap();
            assert!(key.is_tv_only(), "{}", name);
            assert!(!matches!(key, Key::Other(_)), "{}", name);
            assert_eq!(&key.to_string(), name);
        }
        assert!(Key::Other("VolumeUp".into()).is_tv_only());
        assert!(!Key::Home.is_tv_only());
        assert!(!Key::from('V').is_tv_only());
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Key::from("Select"), Key::Select);
        assert_eq!(Key::from("Lit_a"), Key::Lit("a".into()));
        assert_eq!(Key::from("PowerOn"), Key::Other("PowerOn".into()));
        assert_eq!(Key::from('a').to_string(), "Lit_a");
        assert_eq!(Key::from('+').to_string(), "Lit_%2B");
    }

    #[test]
    fn literal_names_are_encoded() {
        assert_eq!(Key::from("Lit_?x"), Key::Lit("%3Fx".into()));
        assert_eq!(Key::from("Lit_?x").to_string(), "Lit_%3Fx");
        assert_eq!(Key::from("Lit_%C3%A9"), Key::Lit("%C3%A9".into()));
        assert_eq!(Key::from("Lit_é"), Key::from('é'));
        assert_eq!(Key::Lit("a b".into()).path_segment(), "Lit_a%20b");
        assert_eq!(Key::Lit("%41".into()).path_segment(), "Lit_%41");
    }
}
