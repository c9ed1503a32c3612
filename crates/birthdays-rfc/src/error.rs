use thiserror::Error;

/// RFC parsing errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<quick_xml::Error> for RfcError {
    fn from(err: quick_xml::Error) -> Self {
        Self::ParseError(format!("XML error: {err}"))
    }
}

impl From<quick_xml::encoding::EncodingError> for RfcError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        Self::ParseError(format!("encoding error: {err}"))
    }
}

impl From<std::io::Error> for RfcError {
    fn from(err: std::io::Error) -> Self {
        Self::ParseError(format!("XML write error: {err}"))
    }
}

impl From<std::string::FromUtf8Error> for RfcError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::ParseError(format!("encoding error: {err}"))
    }
}

impl From<std::str::Utf8Error> for RfcError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::ParseError(format!("encoding error: {err}"))
    }
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
