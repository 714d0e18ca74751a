use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    WhatsApp,
    Telegram,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported share platform `{0}`")]
pub struct UnsupportedPlatform(pub String);

impl FromStr for SharePlatform {
    type Err = UnsupportedPlatform;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "facebook" => Ok(Self::Facebook),
            "twitter" => Ok(Self::Twitter),
            "whatsapp" => Ok(Self::WhatsApp),
            "telegram" => Ok(Self::Telegram),
            other => Err(UnsupportedPlatform(other.to_string())),
        }
    }
}

impl SharePlatform {
    /// Builds the platform's external share URL for an article.
    pub fn share_url(self, url: &str, title: &str) -> String {
        match self {
            SharePlatform::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                encode_uri_component(url)
            ),
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encode_uri_component(url),
                encode_uri_component(title)
            ),
            SharePlatform::WhatsApp => format!(
                "https://api.whatsapp.com/send?text={}",
                encode_uri_component(&format!("{title} {url}"))
            ),
            SharePlatform::Telegram => format!(
                "https://t.me/share/url?url={}&text={}",
                encode_uri_component(url),
                encode_uri_component(title)
            ),
        }
    }
}

/// Percent-encodes a query component the way browsers' `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
