//! Card network catalog.
//!
//! The catalog is a fixed, ordered table. Prefixes of different networks
//! overlap (every Elo number starting with `4` is also a Visa prefix match),
//! so the order of [`NETWORKS`] is the detection priority: the first entry
//! with a matching prefix wins.
//!
//! | Priority | Network | Prefixes |
//! |----------|---------|----------|
//! | 1 | Visa | 4 |
//! | 2 | Mastercard | 51-55 |
//! | 3 | American Express | 34, 37 |
//! | 4 | Elo | 4011, 431274, 438935, 451416, 457393, 504175, 506699, 5067, 509, 627780, 636297, 636368 |
//! | 5 | Hipercard | 606282, 3841 |

use std::fmt;
use std::str::FromStr;

/// Identifier used when no network matches.
pub const UNKNOWN_NETWORK_ID: &str = "unknown";

/// Asset shown on the card preview when no network is detected.
pub const DEFAULT_ASSET_ID: &str = "card-logo.svg";

/// Card networks recognized by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardNetwork {
    /// Visa - Prefix 4
    Visa,
    /// Mastercard - Prefix 51-55
    Mastercard,
    /// American Express - Prefix 34, 37
    Amex,
    /// Elo - Brazilian network, fixed list of issuer prefixes
    Elo,
    /// Hipercard - Brazilian network, Prefix 606282, 3841
    Hipercard,
}

impl CardNetwork {
    /// Returns the stable lowercase identifier (`"visa"`, `"amex"`, ...).
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Elo => "elo",
            Self::Hipercard => "hipercard",
        }
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Elo => "Elo",
            Self::Hipercard => "Hipercard",
        }
    }

    /// Returns the number of CVC digits printed on cards of this network.
    ///
    /// American Express uses a 4-digit code on the front, everyone else
    /// a 3-digit code on the back.
    #[inline]
    pub const fn cvc_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Returns the catalog entry for this network.
    pub fn definition(&self) -> &'static NetworkDefinition {
        // Every variant has exactly one catalog entry.
        match self {
            Self::Visa => &NETWORKS[0],
            Self::Mastercard => &NETWORKS[1],
            Self::Amex => &NETWORKS[2],
            Self::Elo => &NETWORKS[3],
            Self::Hipercard => &NETWORKS[4],
        }
    }

    /// Returns the preview asset identifier for this network.
    #[inline]
    pub fn asset_id(&self) -> &'static str {
        self.definition().asset_id
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown network identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetwork(pub String);

impl fmt::Display for UnknownNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown card network '{}'", self.0)
    }
}

impl std::error::Error for UnknownNetwork {}

impl FromStr for CardNetwork {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "amex" | "american express" => Ok(Self::Amex),
            "elo" => Ok(Self::Elo),
            "hipercard" => Ok(Self::Hipercard),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDefinition {
    /// The network this entry detects.
    pub network: CardNetwork,
    /// Literal digit prefixes; a number matches if it starts with any of them.
    pub prefixes: &'static [&'static str],
    /// Asset shown on the card preview.
    pub asset_id: &'static str,
}

impl NetworkDefinition {
    /// Returns true if `digits` starts with one of this entry's prefixes.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        self.prefixes.iter().any(|prefix| digits.starts_with(prefix))
    }
}

/// The catalog, in detection priority order.
pub static NETWORKS: [NetworkDefinition; 5] = [
    NetworkDefinition {
        network: CardNetwork::Visa,
        prefixes: &["4"],
        asset_id: "visa.svg",
    },
    NetworkDefinition {
        network: CardNetwork::Mastercard,
        prefixes: &["51", "52", "53", "54", "55"],
        asset_id: "mastercard.svg",
    },
    NetworkDefinition {
        network: CardNetwork::Amex,
        prefixes: &["34", "37"],
        asset_id: "amex-logo.svg",
    },
    NetworkDefinition {
        network: CardNetwork::Elo,
        prefixes: &[
            "4011", "431274", "438935", "451416", "457393", "504175", "506699", "5067", "509",
            "627780", "636297", "636368",
        ],
        asset_id: "elo-logo.svg",
    },
    NetworkDefinition {
        network: CardNetwork::Hipercard,
        prefixes: &["606282", "3841"],
        asset_id: "hipercard-logo.svg",
    },
];

/// Returns every catalog entry in detection priority order.
#[inline]
pub fn all_networks() -> &'static [NetworkDefinition] {
    &NETWORKS
}

/// Returns the identifier of an optional network, `"unknown"` for `None`.
#[inline]
pub fn network_id(network: Option<CardNetwork>) -> &'static str {
    network.map_or(UNKNOWN_NETWORK_ID, |n| n.id())
}

/// Returns the CVC length expected for an optional network.
#[inline]
pub fn cvc_length_for(network: Option<CardNetwork>) -> usize {
    network.map_or(3, |n| n.cvc_length())
}
