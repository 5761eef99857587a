use crate::{
    catalog::id::parse_leading_int,
    constants::{
        MAX_AGE, MAX_HEIGHT_CM, MAX_SHIRT_NUMBER, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM,
        MIN_SHIRT_NUMBER, MIN_WEIGHT_KG, PLACEHOLDER_IMAGE,
    },
    shapes::{
        enums::{FootEnum, PositionEnum},
        player::{PlayerEntry, PlayerId, PlayerStatsEntry},
    },
};
use chrono::{DateTime, NaiveDate, Utc};
use std::{fmt, str::FromStr};

/// Player data as typed into the add-player form, before any coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDraft {
    pub name: String,
    pub age: String,
    pub position: String,
    pub nationality: String,
    pub team_id: String,
    pub market_value: String,
    pub contract_until: String,
    pub shirt_number: String,
    pub height: String,
    pub weight: String,
    pub foot: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftField {
    Name,
    Age,
    Position,
    Nationality,
    TeamId,
    MarketValue,
    ContractUntil,
    ShirtNumber,
    Height,
    Weight,
    Foot,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Name => "name",
            DraftField::Age => "age",
            DraftField::Position => "position",
            DraftField::Nationality => "nationality",
            DraftField::TeamId => "team",
            DraftField::MarketValue => "market value",
            DraftField::ContractUntil => "contract until",
            DraftField::ShirtNumber => "shirt number",
            DraftField::Height => "height",
            DraftField::Weight => "weight",
            DraftField::Foot => "foot",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: DraftField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: DraftField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn int_in_range(raw: &str, min: i64, max: i64) -> bool {
    parse_leading_int(raw).is_some_and(|v| v >= min && v <= max)
}

fn parse_required<T: TryFrom<i64>>(raw: &str, field: DraftField) -> Result<T, String> {
    parse_leading_int(raw)
        .and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| format!("invalid {} '{}'", field, raw))
}

/// Empty input and zero both mean "not supplied".
fn parse_optional<T: TryFrom<i64>>(raw: &str, field: DraftField) -> Result<Option<T>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match parse_leading_int(raw) {
        Some(0) => Ok(None),
        Some(v) => T::try_from(v)
            .map(Some)
            .map_err(|_| format!("invalid {} '{}'", field, raw)),
        None => Err(format!("invalid {} '{}'", field, raw)),
    }
}

impl PlayerDraft {
    /// Form rules checked before submitting. An empty result means the draft can be sent.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new(DraftField::Name, "name is required"));
        }
        if !int_in_range(&self.age, MIN_AGE.into(), MAX_AGE.into()) {
            errors.push(FieldError::new(
                DraftField::Age,
                &format!("age must be between {} and {}", MIN_AGE, MAX_AGE),
            ));
        }
        if self.position.trim().is_empty() {
            errors.push(FieldError::new(DraftField::Position, "position is required"));
        } else if PositionEnum::from_str(&self.position).is_err() {
            errors.push(FieldError::new(DraftField::Position, "unknown position"));
        }
        if self.nationality.trim().is_empty() {
            errors.push(FieldError::new(
                DraftField::Nationality,
                "nationality is required",
            ));
        }
        if self.team_id.trim().is_empty() {
            errors.push(FieldError::new(DraftField::TeamId, "team is required"));
        }
        if !int_in_range(&self.market_value, 0, i64::MAX) {
            errors.push(FieldError::new(
                DraftField::MarketValue,
                "market value must be a positive number",
            ));
        }
        if !self.contract_until.trim().is_empty()
            && NaiveDate::parse_from_str(self.contract_until.trim(), "%Y-%m-%d").is_err()
        {
            errors.push(FieldError::new(
                DraftField::ContractUntil,
                "contract end must be a YYYY-MM-DD date",
            ));
        }
        if !self.shirt_number.trim().is_empty()
            && !int_in_range(
                &self.shirt_number,
                MIN_SHIRT_NUMBER.into(),
                MAX_SHIRT_NUMBER.into(),
            )
        {
            errors.push(FieldError::new(
                DraftField::ShirtNumber,
                &format!(
                    "shirt number must be between {} and {}",
                    MIN_SHIRT_NUMBER, MAX_SHIRT_NUMBER
                ),
            ));
        }
        if !self.height.trim().is_empty()
            && !int_in_range(&self.height, MIN_HEIGHT_CM.into(), MAX_HEIGHT_CM.into())
        {
            errors.push(FieldError::new(
                DraftField::Height,
                &format!(
                    "height must be between {} and {} cm",
                    MIN_HEIGHT_CM, MAX_HEIGHT_CM
                ),
            ));
        }
        if !self.weight.trim().is_empty()
            && !int_in_range(&self.weight, MIN_WEIGHT_KG.into(), MAX_WEIGHT_KG.into())
        {
            errors.push(FieldError::new(
                DraftField::Weight,
                &format!(
                    "weight must be between {} and {} kg",
                    MIN_WEIGHT_KG, MAX_WEIGHT_KG
                ),
            ));
        }
        if !self.foot.trim().is_empty() && FootEnum::from_str(&self.foot).is_err() {
            errors.push(FieldError::new(DraftField::Foot, "unknown foot"));
        }
        errors
    }

    /// Coerces the raw fields into a player record. Only structural problems
    /// (text where a number is expected, unknown labels) are reported here.
    pub fn to_entry(&self, id: PlayerId, date_added: DateTime<Utc>) -> Result<PlayerEntry, String> {
        let position = PositionEnum::from_str(&self.position).map_err(|e| e.to_string())?;
        let foot = if self.foot.trim().is_empty() {
            FootEnum::default()
        } else {
            FootEnum::from_str(&self.foot).map_err(|e| e.to_string())?
        };
        let team_id = if self.team_id.trim().is_empty() {
            None
        } else {
            Some(parse_required(&self.team_id, DraftField::TeamId)?)
        };
        let contract_until = match self.contract_until.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| format!("invalid {} '{}'", DraftField::ContractUntil, raw))?,
            ),
        };
        Ok(PlayerEntry {
            id,
            name: self.name.trim().to_string(),
            age: parse_required(&self.age, DraftField::Age)?,
            position,
            nationality: self.nationality.trim().to_string(),
            team_id,
            market_value: parse_required(&self.market_value, DraftField::MarketValue)?,
            contract_until,
            shirt_number: parse_optional(&self.shirt_number, DraftField::ShirtNumber)?,
            height: parse_optional(&self.height, DraftField::Height)?,
            weight: parse_optional(&self.weight, DraftField::Weight)?,
            foot,
            stats: PlayerStatsEntry::default(),
            image: Some(PLACEHOLDER_IMAGE.to_string()),
            date_added: Some(date_added),
        })
    }
}
