use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CanvasError, CanvasResult};

/// Recognized rowing boat classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoatClass {
    /// `8+`: eight rowers and a coxswain.
    #[serde(rename = "8+")]
    Eight,
    /// `4+`: coxed four.
    #[serde(rename = "4+")]
    CoxedFour,
    /// `4-`: coxless four.
    #[serde(rename = "4-")]
    CoxlessFour,
    /// `4x`: quadruple scull.
    #[serde(rename = "4x")]
    Quad,
    /// `2x`: double scull.
    #[serde(rename = "2x")]
    Double,
    /// `2-`: coxless pair.
    #[serde(rename = "2-")]
    Pair,
    /// `1x`: single scull.
    #[serde(rename = "1x")]
    Single,
}

impl BoatClass {
    pub const ALL: [BoatClass; 7] = [
        BoatClass::Eight,
        BoatClass::CoxedFour,
        BoatClass::CoxlessFour,
        BoatClass::Quad,
        BoatClass::Double,
        BoatClass::Pair,
        BoatClass::Single,
    ];

    /// Parse a class code such as `8+` or `2x`. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code.trim())
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Eight => "8+",
            Self::CoxedFour => "4+",
            Self::CoxlessFour => "4-",
            Self::Quad => "4x",
            Self::Double => "2x",
            Self::Pair => "2-",
            Self::Single => "1x",
        }
    }

    /// Number of rowing seats, excluding the coxswain.
    pub fn rowers(self) -> usize {
        match self {
            Self::Eight => 8,
            Self::CoxedFour | Self::CoxlessFour | Self::Quad => 4,
            Self::Double | Self::Pair => 2,
            Self::Single => 1,
        }
    }

    pub fn has_cox(self) -> bool {
        matches!(self, Self::Eight | Self::CoxedFour)
    }

    /// Expected length of a fully populated crew-name list.
    pub fn roster_len(self) -> usize {
        self.rowers() + usize::from(self.has_cox())
    }

    /// Human-readable class name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Eight => "Eight",
            Self::CoxedFour => "Coxed Four",
            Self::CoxlessFour => "Coxless Four",
            Self::Quad => "Quad Scull",
            Self::Double => "Double Scull",
            Self::Pair => "Pair",
            Self::Single => "Single Scull",
        }
    }
}

impl fmt::Display for BoatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Boat type as stored with a crew: a free-form class code plus catalogue metadata.
///
/// The code is kept verbatim so that unrecognized classes survive round trips; rendering treats
/// them as documented in [`BoatType::class`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatType {
    /// Catalogue id, when the crew came from storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Class code, e.g. `8+`.
    #[serde(alias = "code")]
    pub value: String,
    /// Rowing seats (excluding cox).
    #[serde(default)]
    pub seats: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl BoatType {
    pub fn from_class(class: BoatClass) -> Self {
        Self {
            id: None,
            value: class.code().to_owned(),
            seats: class.rowers() as u32,
            name: class.display_name().to_owned(),
        }
    }

    /// Recognized class for this code, or `None` for codes outside the supported set.
    pub fn class(&self) -> Option<BoatClass> {
        BoatClass::from_code(&self.value)
    }
}

/// A crew roster ready to be rendered.
///
/// `crew_names` is indexed by seat. For coxed classes index 0 holds the coxswain; for coxless
/// classes index 0 is the bow seat. Entries may be missing (`None`) or blank; renderers skip them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CrewDef")]
pub struct Crew {
    pub id: String,
    pub name: String,
    pub club_name: String,
    pub race_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_name: Option<String>,
    pub boat_type: BoatType,
    pub crew_names: Vec<Option<String>>,
}

impl Crew {
    pub fn new(
        name: impl Into<String>,
        club_name: impl Into<String>,
        race_name: impl Into<String>,
        boat_type: BoatType,
        crew_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            club_name: club_name.into(),
            race_name: race_name.into(),
            coach_name: None,
            boat_type,
            crew_names: crew_names.into_iter().map(|n| Some(n.into())).collect(),
        }
    }

    pub fn with_coach(mut self, coach: impl Into<String>) -> Self {
        self.coach_name = Some(coach.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Name at `index`, or `None` when the slot is absent, null or blank.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.crew_names
            .get(index)
            .and_then(|n| n.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Coach name when present and non-blank.
    pub fn coach(&self) -> Option<&str> {
        self.coach_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// `"<crew name> | <boat code>"` header subtitle.
    pub fn subtitle(&self) -> String {
        format!("{} | {}", self.name, self.boat_type.value)
    }

    /// Parse a crew from JSON text. Any structural problem is a validation error.
    pub fn from_json_str(s: &str) -> CanvasResult<Self> {
        serde_json::from_str(s).map_err(|e| CanvasError::validation(format!("invalid crew data: {e}")))
    }

    /// Parse a crew from an already-decoded JSON value.
    pub fn from_value(v: serde_json::Value) -> CanvasResult<Self> {
        serde_json::from_value(v)
            .map_err(|e| CanvasError::validation(format!("invalid crew data: {e}")))
    }

    /// Parse a crew from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CanvasResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CanvasError::validation(format!("invalid crew data: {e}")))
    }

    /// Parse a crew from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CanvasError::validation(format!("open crew JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Wire form of [`Crew`], accepting the legacy snake_case field names.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CrewDef {
    #[serde(default)]
    id: Option<CrewId>,
    name: String,
    #[serde(alias = "club_name")]
    club_name: String,
    #[serde(alias = "race_name")]
    race_name: String,
    #[serde(default, alias = "coach_name")]
    coach_name: Option<String>,
    #[serde(alias = "boat_type")]
    boat_type: BoatType,
    #[serde(default, alias = "crew_names")]
    crew_names: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CrewId {
    Text(String),
    Number(i64),
}

impl TryFrom<CrewDef> for Crew {
    type Error = String;

    fn try_from(def: CrewDef) -> Result<Self, Self::Error> {
        let raw = def
            .crew_names
            .ok_or_else(|| "'crewNames' is missing".to_owned())?;
        let serde_json::Value::Array(items) = raw else {
            return Err("'crewNames' must be an array".to_owned());
        };
        let crew_names = items
            .into_iter()
            .enumerate()
            .map(|(i, v)| match v {
                serde_json::Value::Null => Ok(None),
                serde_json::Value::String(s) => Ok(Some(s)),
                other => Err(format!(
                    "'crewNames[{i}]' must be a string or null, got {other}"
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let id = match def.id {
            Some(CrewId::Text(s)) => s,
            Some(CrewId::Number(n)) => n.to_string(),
            None => String::new(),
        };

        Ok(Self {
            id,
            name: def.name,
            club_name: def.club_name,
            race_name: def.race_name,
            coach_name: def.coach_name,
            boat_type: def.boat_type,
            crew_names,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/crew.rs"]
mod tests;
