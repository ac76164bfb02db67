use crate::conf::ConfigError;
use crate::conf::types::{FieldsConfig, OthersConfig};
use crate::field::descriptor::FieldDescriptor;
use crate::render::ColorSpec;
use std::collections::HashMap;
use std::sync::Arc;

/// Styling of keys that did not resolve to a standard field.
#[derive(Debug, Clone, Default)]
pub struct OthersStyle {
    pub name: ColorSpec,
    pub separator: String,
    pub separator_color: ColorSpec,
    pub value: ColorSpec,
}

impl OthersStyle {
    pub fn from_config(cfg: &OthersConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            name: ColorSpec::parse(&cfg.name.color)?,
            separator: cfg.separator.label.clone(),
            separator_color: ColorSpec::parse(&cfg.separator.color)?,
            value: ColorSpec::parse(&cfg.value.color)?,
        })
    }
}

/// The configured standard fields and the key lookup built over them.
#[derive(Debug)]
pub struct FieldSchema {
    fields: Vec<Arc<FieldDescriptor>>,
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
    others: OthersStyle,
}

impl FieldSchema {
    /// Builds the lookup tables.
    ///
    /// Every name and alias, lower-cased when its field is not
    /// case-sensitive, must belong to exactly one field.
    pub fn new(fields: Vec<FieldDescriptor>, others: OthersStyle) -> Result<Self, ConfigError> {
        let mut owners: HashMap<String, usize> = HashMap::new();
        let mut exact = HashMap::new();
        let mut folded = HashMap::new();

        for (i, field) in fields.iter().enumerate() {
            for key in field.keys() {
                let resolved = if field.is_case_sensitive() {
                    key.to_string()
                } else {
                    key.to_lowercase()
                };

                if let Some(&owner) = owners.get(&resolved) {
                    if owner != i {
                        return Err(ConfigError::DuplicateAlias {
                            key: key.to_string(),
                            first: fields[owner].name().to_string(),
                            second: field.name().to_string(),
                        });
                    }
                }
                owners.insert(resolved.clone(), i);

                exact.insert(key.to_string(), i);
                if !field.is_case_sensitive() {
                    folded.insert(resolved, i);
                }
            }
        }

        Ok(Self {
            fields: fields.into_iter().map(Arc::new).collect(),
            exact,
            folded,
            others,
        })
    }

    pub fn from_config(cfg: &FieldsConfig) -> Result<Self, ConfigError> {
        let fields = cfg
            .standards
            .iter()
            .map(|(name, field)| FieldDescriptor::from_config(name, field))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(fields, OthersStyle::from_config(&cfg.others)?)
    }

    /// Resolves a raw record key to its field.
    pub fn resolve(&self, key: &str) -> Option<&Arc<FieldDescriptor>> {
        self.exact
            .get(key)
            .or_else(|| self.folded.get(&key.to_lowercase()))
            .map(|&i| &self.fields[i])
    }

    /// Looks a field up by canonical name.
    pub fn field(&self, name: &str) -> Option<&Arc<FieldDescriptor>> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn fields(&self) -> &[Arc<FieldDescriptor>] {
        &self.fields
    }

    pub fn others(&self) -> &OthersStyle {
        &self.others
    }
}
