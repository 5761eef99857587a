use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, IOError};

pub trait FriendlyName {
    fn friendly_name(&self) -> &'static str;
}

/// Playing positions a player can be registered with.
///
/// The serialized form is the human readable label (e.g. `"Centre-Back"`),
/// which is also the text free-form search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionEnum {
    #[serde(rename = "Goalkeeper")]
    Goalkeeper,
    #[serde(rename = "Centre-Back")]
    CentreBack,
    #[serde(rename = "Right-Back")]
    RightBack,
    #[serde(rename = "Left-Back")]
    LeftBack,
    #[serde(rename = "Defensive Midfield")]
    DefensiveMidfield,
    #[serde(rename = "Central Midfield")]
    CentralMidfield,
    #[serde(rename = "Attacking Midfield")]
    AttackingMidfield,
    #[serde(rename = "Right Winger")]
    RightWinger,
    #[serde(rename = "Left Winger")]
    LeftWinger,
    #[serde(rename = "Centre-Forward")]
    CentreForward,
    #[serde(rename = "Second Striker")]
    SecondStriker,
}

impl PositionEnum {
    pub const ALL: [PositionEnum; 11] = [
        PositionEnum::Goalkeeper,
        PositionEnum::CentreBack,
        PositionEnum::RightBack,
        PositionEnum::LeftBack,
        PositionEnum::DefensiveMidfield,
        PositionEnum::CentralMidfield,
        PositionEnum::AttackingMidfield,
        PositionEnum::RightWinger,
        PositionEnum::LeftWinger,
        PositionEnum::CentreForward,
        PositionEnum::SecondStriker,
    ];
}

impl FriendlyName for PositionEnum {
    fn friendly_name(&self) -> &'static str {
        match self {
            PositionEnum::Goalkeeper => "Goalkeeper",
            PositionEnum::CentreBack => "Centre-Back",
            PositionEnum::RightBack => "Right-Back",
            PositionEnum::LeftBack => "Left-Back",
            PositionEnum::DefensiveMidfield => "Defensive Midfield",
            PositionEnum::CentralMidfield => "Central Midfield",
            PositionEnum::AttackingMidfield => "Attacking Midfield",
            PositionEnum::RightWinger => "Right Winger",
            PositionEnum::LeftWinger => "Left Winger",
            PositionEnum::CentreForward => "Centre-Forward",
            PositionEnum::SecondStriker => "Second Striker",
        }
    }
}

impl fmt::Display for PositionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.friendly_name())
    }
}

impl FromStr for PositionEnum {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PositionEnum::ALL
            .into_iter()
            .find(|p| p.friendly_name().to_lowercase() == wanted)
            .ok_or_else(|| AppError::IO(IOError::Msg(format!("invalid position: {}", s))))
    }
}

/// Preferred foot of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootEnum {
    Left,
    #[default]
    Right,
    Both,
}

impl FootEnum {
    pub const ALL: [FootEnum; 3] = [FootEnum::Right, FootEnum::Left, FootEnum::Both];
}

impl FriendlyName for FootEnum {
    fn friendly_name(&self) -> &'static str {
        match self {
            FootEnum::Left => "left",
            FootEnum::Right => "right",
            FootEnum::Both => "both",
        }
    }
}

impl fmt::Display for FootEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.friendly_name())
    }
}

impl FromStr for FootEnum {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(FootEnum::Left),
            "right" => Ok(FootEnum::Right),
            "both" => Ok(FootEnum::Both),
            _ => Err(AppError::IO(IOError::Msg(format!("invalid foot: {}", s)))),
        }
    }
}

/// Colour band of a market value in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketValueTier {
    High,
    Medium,
    Standard,
}
