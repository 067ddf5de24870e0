//! Subscription plans shared by household members
//!
//! Each member belongs to exactly one plan. A plan is identified by its
//! service name and determines the billing cadence used when counting how
//! many periods a balance covers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a plan charges its fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Monthly,
    Annual,
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Annual => write!(f, "Annual"),
        }
    }
}

/// A shared subscription plan
///
/// Stored as its plain service name. Names that don't match a known plan are
/// kept verbatim in `Other` and billed monthly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Service {
    /// Music plan, billed monthly
    Spotify,
    /// Video plan, billed monthly
    YouTube,
    /// Cloud storage plan, billed yearly
    Google,
    /// Any plan name not recognized above
    Other(String),
}

impl Service {
    /// The known plans, in board order
    pub fn known() -> [Service; 3] {
        [Service::Spotify, Service::YouTube, Service::Google]
    }

    /// Parse a plan name typed by a user (case-insensitive for known plans)
    ///
    /// Stored records go through `From<String>` instead, which only accepts
    /// the exact stored names.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "spotify" => Self::Spotify,
            "youtube" => Self::YouTube,
            "google" | "google one" => Self::Google,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// The plan's service name as stored
    pub fn name(&self) -> &str {
        match self {
            Self::Spotify => "Spotify",
            Self::YouTube => "YouTube",
            Self::Google => "Google",
            Self::Other(name) => name,
        }
    }

    /// Billing cadence; anything that isn't the annual plan is monthly
    pub fn cadence(&self) -> Cadence {
        match self {
            Self::Google => Cadence::Annual,
            _ => Cadence::Monthly,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Position of this plan on the board; unknown plans go last
    pub fn board_order(&self) -> usize {
        match self {
            Self::Spotify => 0,
            Self::YouTube => 1,
            Self::Google => 2,
            Self::Other(_) => 3,
        }
    }

    /// Icon shown in plan headers
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Spotify => "🎧",
            Self::YouTube => "📺",
            Self::Google => "☁️",
            Self::Other(_) => "❔",
        }
    }
}

impl From<String> for Service {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Spotify" => Self::Spotify,
            "YouTube" => Self::YouTube,
            "Google" => Self::Google,
            _ => Self::Other(s),
        }
    }
}

impl From<Service> for String {
    fn from(service: Service) -> Self {
        service.name().to_string()
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!(Service::parse("spotify"), Service::Spotify);
        assert_eq!(Service::parse("YouTube"), Service::YouTube);
        assert_eq!(Service::parse(" GOOGLE "), Service::Google);
    }

    #[test]
    fn test_unknown_kept_verbatim() {
        let service = Service::parse("Netflx");
        assert_eq!(service, Service::Other("Netflx".into()));
        assert!(!service.is_known());
        assert_eq!(service.cadence(), Cadence::Monthly);
    }

    #[test]
    fn test_cadence() {
        assert_eq!(Service::Google.cadence(), Cadence::Annual);
        assert_eq!(Service::Spotify.cadence(), Cadence::Monthly);
        assert_eq!(Service::YouTube.cadence(), Cadence::Monthly);
    }

    #[test]
    fn test_serialization_as_plain_name() {
        let json = serde_json::to_string(&Service::YouTube).unwrap();
        assert_eq!(json, "\"YouTube\"");

        let other: Service = serde_json::from_str("\"Disney\"").unwrap();
        assert_eq!(other, Service::Other("Disney".into()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"Disney\"");
    }

    #[test]
    fn test_stored_names_match_exactly() {
        let google: Service = serde_json::from_str("\"Google\"").unwrap();
        assert_eq!(google, Service::Google);

        let lower: Service = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(lower, Service::Other("google".into()));
        assert_eq!(lower.cadence(), Cadence::Monthly);
        assert_eq!(serde_json::to_string(&lower).unwrap(), "\"google\"");

        let padded: Service = serde_json::from_str("\" Spotify\"").unwrap();
        assert_eq!(padded, Service::Other(" Spotify".into()));
    }
}
