use std::fmt::{Debug, Display};

/// Result for API calls from [`Device`](super::Device) and discovery
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Operation does not apply to this device
    Capability(CapabilityError),
    /// Input rejected before any request was made
    Input(InputError),
    /// ECP access is disabled on the device (HTTP 401)
    Unauthorized,
    /// Device answered with a status other than 200 or 401
    Status(u16),
    /// Error from http client
    Reqwest(reqwest::Error),
    /// Response body is not well-formed XML
    Xml(roxmltree::Error),
    /// Response parsed but the named element was missing or empty
    EmptyResponse(&'static str),
    /// Error from std::io
    IO(std::io::Error),
}

/// Failure category of an [`Error`], each with a stable numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CapabilityDenied,
    InvalidInput,
    Transport,
    Unauthorized,
    HttpStatus,
    MalformedXml,
    EmptyResponse,
    Discovery,
}

impl ErrorKind {
    /// Small negative integer identifying the failure cause
    pub fn code(&self) -> i32 {
        match self {
            Self::CapabilityDenied => -1,
            Self::InvalidInput => -2,
            Self::Transport => -3,
            Self::Unauthorized => -4,
            Self::HttpStatus => -5,
            Self::MalformedXml => -6,
            Self::EmptyResponse => -7,
            Self::Discovery => -8,
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Capability(_) => ErrorKind::CapabilityDenied,
            Self::Input(_) => ErrorKind::InvalidInput,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::Status(_) => ErrorKind::HttpStatus,
            Self::Reqwest(_) => ErrorKind::Transport,
            Self::Xml(_) => ErrorKind::MalformedXml,
            Self::EmptyResponse(_) => ErrorKind::EmptyResponse,
            Self::IO(_) => ErrorKind::Discovery,
        }
    }

    /// Shorthand for `self.kind().code()`
    pub fn code(&self) -> i32 {
        self.kind().code()
    }

    pub fn is_capability(&self) -> bool {
        matches!(self, Error::Capability(_))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Error::Input(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }

    pub fn is_reqwest(&self) -> bool {
        matches!(self, Error::Reqwest(_))
    }

    pub fn is_xml(&self) -> bool {
        matches!(self, Error::Xml(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Error::IO(_))
    }

    pub(crate) fn not_tv() -> Error {
        CapabilityError::NotTv.into()
    }

    pub(crate) fn limited() -> Error {
        CapabilityError::LimitedMode.into()
    }
}

impl From<CapabilityError> for Error {
    fn from(e: CapabilityError) -> Self {
        Error::Capability(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IO(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capability(e) => write!(f, "{}", e),
            Self::Input(e) => write!(f, "{}", e),
            Self::Unauthorized => write!(
                f,
                "ECP access denied, enable control by mobile apps in the device settings"
            ),
            Self::Status(code) => write!(f, "Device responded with HTTP status {}", code),
            Self::Reqwest(e) => write!(f, "{}", e),
            Self::Xml(e) => write!(f, "Malformed XML response: {}", e),
            Self::EmptyResponse(element) => write!(f, "Response has no '{}' data", element),
            Self::IO(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reqwest(e) => Some(e),
            Self::Xml(e) => Some(e),
            Self::IO(e) => Some(e),
            _ => None,
        }
    }
}

/// Operations the device refuses because of its type or settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityError {
    /// Device is not a Roku TV
    NotTv,
    /// Device is in Limited control mode
    LimitedMode,
    /// Device does not support search
    NoSearchSupport,
}

impl Display for CapabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotTv => write!(f, "Operation is only available on Roku TVs"),
            Self::LimitedMode => write!(f, "Device is in Limited ECP mode"),
            Self::NoSearchSupport => write!(f, "Device does not support search"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Search keyword was empty
    EmptyKeyword,
    /// Value exceeds the maximum length ECP accepts for the field
    TooLong { field: &'static str, max: usize },
    /// More provider ids than a search accepts
    TooManyProviders(usize),
    /// Not an ECP url
    InvalidUrl(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKeyword => write!(f, "Search keyword is empty"),
            Self::TooLong { field, max } => {
                write!(f, "'{}' is longer than {} characters", field, max)
            }
            Self::TooManyProviders(count) => write!(
                f,
                "Search accepts at most {} provider ids, got {}",
                crate::device::MAX_PROVIDERS,
                count
            ),
            Self::InvalidUrl(url) => write!(f, "Not a valid ECP url: '{}'", url),
        }
    }
}
