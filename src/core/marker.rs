use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::core::nucleobase::EncodedPair;

/// Marker identifier, e.g. `rs4680`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(pub String);

impl MarkerId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MarkerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strand a marker's letters are reported on
///
/// See <https://www.snpedia.com/index.php/Orientation>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Plus strand
    #[default]
    Forward,
    /// Minus strand
    Reverse,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

/// Category a marker is reported under
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum GroupName {
    /// Diseases, deficiencies and similar conditions
    MedicalConditions,
    /// Responses to particular medicines
    MedicineInteractions,
    /// Traits such as sleep need or muscle type
    PersonalCharacteristics,
}

/// Display metadata for a [`GroupName`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupInfo {
    pub name: GroupName,
    pub pretty_name: &'static str,
    pub description: &'static str,
}

static GROUPS: [GroupInfo; 3] = [
    GroupInfo {
        name: GroupName::MedicalConditions,
        pretty_name: "Medical Conditions",
        description: "Markers associated with medical conditions",
    },
    GroupInfo {
        name: GroupName::MedicineInteractions,
        pretty_name: "Medicine Interactions",
        description: "Markers associated with effects when using certain medicines",
    },
    GroupInfo {
        name: GroupName::PersonalCharacteristics,
        pretty_name: "Personal Characteristics",
        description: "Markers associated with personal characteristics",
    },
];

impl GroupName {
    pub const ALL: [GroupName; 3] = [
        Self::MedicalConditions,
        Self::MedicineInteractions,
        Self::PersonalCharacteristics,
    ];

    /// Name as written in catalog files, e.g. `medical_conditions`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MedicalConditions => "medical_conditions",
            Self::MedicineInteractions => "medicine_interactions",
            Self::PersonalCharacteristics => "personal_characteristics",
        }
    }

    #[must_use]
    pub fn info(self) -> &'static GroupInfo {
        match self {
            Self::MedicalConditions => &GROUPS[0],
            Self::MedicineInteractions => &GROUPS[1],
            Self::PersonalCharacteristics => &GROUPS[2],
        }
    }

    #[must_use]
    pub fn pretty_name(self) -> &'static str {
        self.info().pretty_name
    }

    #[must_use]
    pub fn all_info() -> &'static [GroupInfo] {
        &GROUPS
    }
}

impl std::fmt::Display for GroupName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty_name())
    }
}

/// What carrying a particular pair at a marker means
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairOutcome {
    pub pair: EncodedPair,
    pub outcome: String,
}

impl PairOutcome {
    pub fn new(pair: impl Into<EncodedPair>, outcome: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            outcome: outcome.into(),
        }
    }
}

/// A marker in the catalog together with its known outcomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry {
    pub id: MarkerId,

    pub group: GroupName,

    /// User-facing description of what the marker affects
    pub description: String,

    #[serde(default)]
    pub orientation: Orientation,

    /// Outcomes keyed by pair; pair values are unique within one entry
    pub outcomes: Vec<PairOutcome>,

    /// Reviewed sources backing the outcome claims
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl MarkerEntry {
    pub fn new(id: impl Into<String>, group: GroupName, description: impl Into<String>) -> Self {
        Self {
            id: MarkerId::new(id),
            group,
            description: description.into(),
            orientation: Orientation::Forward,
            outcomes: Vec::new(),
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, pair: impl Into<EncodedPair>, outcome: impl Into<String>) -> Self {
        self.outcomes.push(PairOutcome::new(pair, outcome));
        self
    }

    #[must_use]
    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.sources.push(url.into());
        self
    }

    /// The outcome recorded for `pair`, if any
    #[must_use]
    pub fn outcome_for(&self, pair: EncodedPair) -> Option<&PairOutcome> {
        self.outcomes.iter().find(|o| o.pair == pair)
    }

    #[must_use]
    pub fn group_info(&self) -> &'static GroupInfo {
        self.group.info()
    }
}
