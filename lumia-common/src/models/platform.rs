// File: lumia-common/src/models/platform.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// The `site` an alert originated from. The overlay runtime adds platforms
/// over time, so unrecognised names are carried through as `Other`.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Site {
    Twitch,
    Kick,
    YouTube,
    TikTok,
    Facebook,
    Trovo,
    Other(String),
}

impl Site {
    pub fn as_str(&self) -> &str {
        match self {
            Site::Twitch => "twitch",
            Site::Kick => "kick",
            Site::YouTube => "youtube",
            Site::TikTok => "tiktok",
            Site::Facebook => "facebook",
            Site::Trovo => "trovo",
            Site::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Site::Other(_))
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "twitch" => Site::Twitch,
            "kick" => Site::Kick,
            "youtube" => Site::YouTube,
            "tiktok" => Site::TikTok,
            "facebook" => Site::Facebook,
            "trovo" => Site::Trovo,
            other => Site::Other(other.to_string()),
        })
    }
}

impl From<String> for Site {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(site) => site,
            Err(never) => match never {},
        }
    }
}

impl From<Site> for String {
    fn from(site: Site) -> Self {
        site.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_site_is_preserved() {
        let site: Site = serde_json::from_str("\"streamplace\"").unwrap();
        assert_eq!(site, Site::Other("streamplace".into()));
        assert!(!site.is_known());
        assert_eq!(serde_json::to_string(&site).unwrap(), "\"streamplace\"");
    }

    #[test]
    fn test_known_sites() {
        let site: Site = serde_json::from_str("\"youtube\"").unwrap();
        assert_eq!(site, Site::YouTube);
        assert_eq!(site.to_string(), "youtube");
    }
}
