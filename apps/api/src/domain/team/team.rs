use serde::{Deserialize, Deserializer, Serialize};

use super::value_objects::{MatchFilter, MatchResult};

/// Caller-assigned team identifier
///
/// Signed so that non-positive ids can reach the rules and be rejected there.
pub type TeamId = i64;

fn default_active() -> bool {
    true
}

/// Treats an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Team record
///
/// # Invariants
/// - `id` is assigned by the caller and never changes
/// - A team is only valid with a non-blank name and a positive id
/// - `matches` is append-only and never holds the `All` filter
/// - Deleting a team clears `is_active`; the record itself is kept
///
/// # Example
/// ```
/// use myteam_api::domain::team::Team;
///
/// let team = Team::new(1, "Sporting", Some("Damasio".to_string()));
///
/// assert!(team.is_valid());
/// assert!(team.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, deserialize_with = "null_as_default")]
    id: TeamId,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default)]
    coach_name: Option<String>,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(skip)]
    matches: Vec<MatchResult>,
}

impl Team {
    /// Creates an active team with no recorded matches
    ///
    /// No validation happens here; `is_valid` reports whether the rules
    /// would accept the record.
    pub fn new(id: TeamId, name: impl Into<String>, coach_name: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            coach_name,
            is_active: true,
            matches: Vec::new(),
        }
    }

    /// Whether the record has a non-blank name and a positive id
    pub fn is_valid(&self) -> bool {
        has_name(&self.name) && self.id > 0
    }

    /// Case-insensitive name comparison
    pub fn has_name_like(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Overwrites the metadata carried by a patch
    ///
    /// Name and coach are only replaced when the patch supplies a non-empty
    /// value; the active flag is always taken from the patch.
    pub fn apply_patch(&mut self, patch: &TeamPatch) {
        if let Some(name) = patch.name.as_deref().filter(|n| !n.is_empty()) {
            self.name = name.to_string();
        }
        if let Some(coach) = patch.coach_name.as_deref().filter(|c| !c.is_empty()) {
            self.coach_name = Some(coach.to_string());
        }
        self.is_active = patch.is_active;
    }

    /// Appends a match outcome
    pub fn record_match(&mut self, result: MatchResult) {
        self.matches.push(result);
    }

    /// Number of recorded matches selected by the filter
    pub fn total_matches(&self, filter: MatchFilter) -> usize {
        self.matches.iter().filter(|m| filter.matches(**m)).count()
    }

    /// Builds a patch that would write this team's current metadata back
    pub fn to_patch(&self) -> TeamPatch {
        TeamPatch {
            name: Some(self.name.clone()),
            coach_name: self.coach_name.clone(),
            is_active: self.is_active,
        }
    }

    /// Marks the team as soft-deleted
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    // ===== Getters =====

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coach_name(&self) -> Option<&str> {
        self.coach_name.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }
}

/// Metadata update for an existing team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coach_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl TeamPatch {
    /// Whether the patch carries a usable name
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(has_name)
    }
}

/// Optional name/coach filters for listing active teams
///
/// Blank values are ignored. Matching is exact but case-insensitive, and
/// both filters must match when both are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TeamFilter {
    pub name: Option<String>,
    pub coach: Option<String>,
}

impl TeamFilter {
    pub fn new(name: Option<&str>, coach: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            coach: coach.map(str::to_string),
        }
    }

    /// Checks the name and coach criteria (activity is checked by the store)
    pub fn matches(&self, team: &Team) -> bool {
        let name_ok = match non_blank(&self.name) {
            Some(name) => team.has_name_like(name),
            None => true,
        };
        let coach_ok = match non_blank(&self.coach) {
            Some(coach) => team
                .coach_name()
                .is_some_and(|c| c.to_lowercase() == coach.to_lowercase()),
            None => true,
        };
        name_ok && coach_ok
    }
}

fn has_name(name: &str) -> bool {
    !name.trim().is_empty()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| has_name(v))
}
