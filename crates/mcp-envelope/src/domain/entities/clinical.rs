//! Clinical - Patient records and condition guidelines

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Placeholder returned for a condition with no known guideline
pub const NO_GUIDELINE_FOUND: &str = "No guideline found.";

/// Patient record held by the EHR collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Stored order is preserved in the advice mapping
    pub conditions: Vec<String>,
    pub medications: Vec<String>,
}

impl Patient {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            conditions: Vec::new(),
            medications: Vec::new(),
        }
    }

    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_medications<I, S>(mut self, medications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medications = medications.into_iter().map(Into::into).collect();
        self
    }
}

/// Condition → guideline mapping that iterates in insertion order.
///
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advice {
    entries: Vec<(String, String)>,
}

impl Advice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced condition keeps its original position.
    pub fn insert(&mut self, condition: impl Into<String>, guideline: impl Into<String>) {
        let condition = condition.into();
        let guideline = guideline.into();
        match self.entries.iter_mut().find(|(c, _)| *c == condition) {
            Some(entry) => entry.1 = guideline,
            None => self.entries.push((condition, guideline)),
        }
    }

    pub fn get(&self, condition: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == condition)
            .map(|(_, g)| g.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, g)| (c.as_str(), g.as_str()))
    }
}

impl<C, G> FromIterator<(C, G)> for Advice
where
    C: Into<String>,
    G: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, G)>>(iter: I) -> Self {
        let mut advice = Advice::new();
        for (condition, guideline) in iter {
            advice.insert(condition, guideline);
        }
        advice
    }
}

impl Serialize for Advice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (condition, guideline) in &self.entries {
            map.serialize_entry(condition, guideline)?;
        }
        map.end()
    }
}

/// Result payload of `POST /mcp/clinical-advice`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClinicalAdvice {
    pub patient: String,
    pub advice: Advice,
    pub log_id: String,
}
