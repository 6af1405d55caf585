//! # Enum Catalog
//!
//! Groups definitions by application label for template contexts, where a
//! mistyped name must fail loudly instead of rendering as empty. The
//! catalog is built explicitly by the caller; there is no global registry.

use std::collections::BTreeMap;

use enumfield_core::EnumDefinition;
use thiserror::Error;

/// Strict lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No enums were registered under this app label.
    #[error("Unknown app label {0}")]
    UnknownApp(String),

    /// The app exists but has no enum of this name.
    #[error("Unknown enum {name:?} in {app:?} app")]
    UnknownEnum {
        /// App label searched.
        app: String,
        /// Enum name requested.
        name: String,
    },

    /// An enum of the same name is already registered for the app.
    #[error("enum {name} is already registered in {app} app")]
    Duplicate {
        /// App label.
        app: String,
        /// Conflicting enum name.
        name: String,
    },
}

/// Enums registered for one app label.
#[derive(Debug, Clone, Default)]
pub struct AppEnums<'d> {
    label: String,
    enums: BTreeMap<String, &'d EnumDefinition>,
}

impl<'d> AppEnums<'d> {
    /// App label these enums are registered under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Strict lookup by enum name.
    pub fn get(&self, name: &str) -> Result<&'d EnumDefinition, CatalogError> {
        self.enums
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownEnum {
                app: self.label.clone(),
                name: name.to_string(),
            })
    }

    /// Enum names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.enums.keys().map(String::as_str)
    }
}

/// App label → enum name → definition.
#[derive(Debug, Clone, Default)]
pub struct EnumCatalog<'d> {
    apps: BTreeMap<String, AppEnums<'d>>,
}

impl<'d> EnumCatalog<'d> {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `definition` under `app`, keyed by the definition's name.
    pub fn register(
        &mut self,
        app: impl Into<String>,
        definition: &'d EnumDefinition,
    ) -> Result<(), CatalogError> {
        let app = app.into();
        let entry = self
            .apps
            .entry(app.clone())
            .or_insert_with(|| AppEnums {
                label: app.clone(),
                enums: BTreeMap::new(),
            });
        let name = definition.name().to_string();
        if entry.enums.contains_key(&name) {
            return Err(CatalogError::Duplicate { app, name });
        }
        tracing::debug!(app = %app, enum_name = %name, "enum registered in catalog");
        entry.enums.insert(name, definition);
        Ok(())
    }

    /// Strict lookup by app label.
    pub fn app(&self, label: &str) -> Result<&AppEnums<'d>, CatalogError> {
        self.apps
            .get(label)
            .ok_or_else(|| CatalogError::UnknownApp(label.to_string()))
    }

    /// Strict lookup by app label and enum name.
    pub fn get(&self, app: &str, name: &str) -> Result<&'d EnumDefinition, CatalogError> {
        self.app(app)?.get(name)
    }

    /// Every `(app, enum name, definition)`, sorted by app then name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &'d EnumDefinition)> + '_ {
        self.apps.iter().flat_map(|(app, enums)| {
            enums
                .enums
                .iter()
                .map(move |(name, def)| (app.as_str(), name.as_str(), *def))
        })
    }

    /// Total number of registered enums.
    pub fn len(&self) -> usize {
        self.apps.values().map(|a| a.enums.len()).sum()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
