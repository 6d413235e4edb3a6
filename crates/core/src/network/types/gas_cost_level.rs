use core::fmt;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Hand-assigned, qualitative gas cost tier of a network.
///
/// This is not a price feed. Live prices come from `eth_gasPrice` on the
/// network's RPC endpoint.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GasCostLevel {
    Free,
    Low,
    Medium,
    High,
}

impl GasCostLevel {
    pub const ALL: [GasCostLevel; 4] =
        [GasCostLevel::Free, GasCostLevel::Low, GasCostLevel::Medium, GasCostLevel::High];

    /// Formats the tier as its lowercase wire representation.
    pub fn format(&self) -> &'static str {
        match self {
            GasCostLevel::Free => "free",
            GasCostLevel::Low => "low",
            GasCostLevel::Medium => "medium",
            GasCostLevel::High => "high",
        }
    }

    /// Whether users should be warned before transacting on this tier.
    pub fn is_expensive(&self) -> bool {
        matches!(self, GasCostLevel::High)
    }
}

impl Display for GasCostLevel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown gas cost level: {0}")]
pub struct ParseGasCostLevelError(pub String);

impl FromStr for GasCostLevel {
    type Err = ParseGasCostLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(GasCostLevel::Free),
            "low" => Ok(GasCostLevel::Low),
            "medium" => Ok(GasCostLevel::Medium),
            "high" => Ok(GasCostLevel::High),
            _ => Err(ParseGasCostLevelError(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse_agree() {
        for level in GasCostLevel::ALL {
            assert_eq!(level.to_string().parse::<GasCostLevel>().unwrap(), level);
        }
        assert_eq!("HIGH".parse::<GasCostLevel>().unwrap(), GasCostLevel::High);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let err = "~$0.001-0.01".parse::<GasCostLevel>().unwrap_err();
        assert_eq!(err.0, "~$0.001-0.01");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&GasCostLevel::Medium).unwrap(), "\"medium\"");
        let level: GasCostLevel = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(level, GasCostLevel::Free);
        assert!(serde_json::from_str::<GasCostLevel>("\"cheap\"").is_err());
    }

    #[test]
    fn test_only_high_is_expensive() {
        let expensive: Vec<_> = GasCostLevel::ALL.into_iter().filter(|l| l.is_expensive()).collect();
        assert_eq!(expensive, vec![GasCostLevel::High]);
    }
}
