//! # Declarative Enum Loading
//!
//! Vocabularies can be declared in YAML or JSON instead of code. A
//! declaration names members explicitly and refers to them by name in the
//! `default` and `transitions` sections:
//!
//! ```yaml
//! name: PersonStatus
//! members:
//!   - { name: UNBORN, value: 0 }
//!   - { name: ALIVE, value: 1 }
//!   - { name: DEAD, value: 2, label: Deceased }
//! default: ALIVE
//! transitions:
//!   DEAD: [UNBORN, ALIVE]
//! ```
//!
//! Declarations are turned into [`EnumDefinition`]s through the same
//! builder as code declarations, so they are validated identically.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::definition::EnumDefinition;
use crate::error::DefinitionError;

/// Serializable declaration of one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDeclaration {
    /// Enumeration name.
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<MemberDeclaration>,
    /// Name of the default member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Destination name → origin names.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub transitions: BTreeMap<String, Vec<String>>,
}

/// One member of an [`EnumDeclaration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDeclaration {
    /// Member name.
    pub name: String,
    /// Integer value.
    pub value: i64,
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl EnumDeclaration {
    /// Parse a single declaration from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a single declaration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve names and build the definition.
    pub fn into_definition(self) -> Result<EnumDefinition, DefinitionError> {
        let values: HashMap<&str, i64> = self
            .members
            .iter()
            .map(|m| (m.name.as_str(), m.value))
            .collect();
        let resolve = |context: &'static str, name: &str| -> Result<i64, DefinitionError> {
            values
                .get(name)
                .copied()
                .ok_or_else(|| DefinitionError::UnknownName {
                    enum_name: self.name.clone(),
                    context,
                    name: name.to_string(),
                })
        };

        let mut builder = EnumDefinition::builder(self.name.clone());
        for member in &self.members {
            builder = builder.member(member.name.clone(), member.value);
            if let Some(label) = &member.label {
                builder = builder.label(member.value, label.clone());
            }
        }
        if let Some(default) = &self.default {
            builder = builder.default_value(resolve("default", default.as_str())?);
        }
        for (destination, origins) in &self.transitions {
            let destination = resolve("transition destination", destination.as_str())?;
            let origins = origins
                .iter()
                .map(|o| resolve("transition origin", o.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.transition(destination, origins);
        }
        builder.build()
    }
}

impl EnumDefinition {
    /// Render this definition back into a declaration, members ascending by value.
    pub fn to_declaration(&self) -> EnumDeclaration {
        let members = self
            .members()
            .map(|m| MemberDeclaration {
                name: m.name().to_string(),
                value: m.value(),
                label: self.entry_label(m.value()).map(str::to_string),
            })
            .collect();
        let transitions = self
            .transitions()
            .filter_map(|(to, origins)| {
                let to = self.get_name(to)?.to_string();
                let origins = origins
                    .iter()
                    .filter_map(|o| self.get_name(*o).map(str::to_string))
                    .collect();
                Some((to, origins))
            })
            .collect();
        EnumDeclaration {
            name: self.name().to_string(),
            members,
            default: self.default().map(|m| m.name().to_string()),
            transitions,
        }
    }

    fn entry_label(&self, value: i64) -> Option<&str> {
        let member = self.get(value)?;
        self.entry(member.index()).declared_label()
    }
}

/// Parse a YAML sequence of declarations and build every definition.
pub fn definitions_from_yaml(yaml: &str) -> Result<Vec<EnumDefinition>, DefinitionError> {
    let declarations: Vec<EnumDeclaration> = serde_yaml::from_str(yaml)?;
    declarations
        .into_iter()
        .map(EnumDeclaration::into_definition)
        .collect()
}
