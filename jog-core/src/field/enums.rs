use crate::conf::ConfigError;
use crate::conf::types::EnumsConfig;
use crate::render::ColorSpec;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct EnumDescriptor {
    name: String,
    color: ColorSpec,
    aliases: Vec<String>,
}

impl EnumDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &ColorSpec {
        &self.color
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

/// Closed set of named values (e.g. log levels) with a default.
#[derive(Debug, Clone)]
pub struct EnumTable {
    case_sensitive: bool,
    values: Vec<EnumDescriptor>,
    index: HashMap<String, usize>,
    default: usize,
}

impl EnumTable {
    pub fn from_config(
        field: &str,
        cfg: &EnumsConfig,
        case_sensitive: bool,
    ) -> Result<Self, ConfigError> {
        let fold = |key: &str| {
            if case_sensitive {
                key.to_string()
            } else {
                key.to_lowercase()
            }
        };

        let mut values = Vec::with_capacity(cfg.values.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for (name, value_cfg) in &cfg.values {
            let position = values.len();

            for key in std::iter::once(name).chain(value_cfg.alias.iter()) {
                let folded = fold(key);
                match index.get(&folded) {
                    Some(&owner) if owner != position => {
                        return Err(ConfigError::DuplicateEnumAlias {
                            field: field.to_string(),
                            key: key.clone(),
                            first: values_name(&values, owner),
                            second: name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        index.insert(folded, position);
                    }
                }
            }

            values.push(EnumDescriptor {
                name: name.clone(),
                color: ColorSpec::parse(&value_cfg.color)?,
                aliases: value_cfg.alias.clone(),
            });
        }

        let default = index
            .get(&fold(&cfg.default))
            .copied()
            .ok_or_else(|| ConfigError::MissingEnumDefault {
                field: field.to_string(),
                default: cfg.default.clone(),
            })?;

        Ok(Self {
            case_sensitive,
            values,
            index,
            default,
        })
    }

    /// Resolves a value or alias, falling back to the default value.
    pub fn get(&self, value: &str) -> &EnumDescriptor {
        self.find(value).unwrap_or(&self.values[self.default])
    }

    /// Resolves a value or alias without falling back.
    pub fn find(&self, value: &str) -> Option<&EnumDescriptor> {
        let key = if self.case_sensitive {
            value.trim().to_string()
        } else {
            value.trim().to_lowercase()
        };
        self.index.get(&key).map(|&i| &self.values[i])
    }

    pub fn default_value(&self) -> &EnumDescriptor {
        &self.values[self.default]
    }

    pub fn values(&self) -> &[EnumDescriptor] {
        &self.values
    }
}

fn values_name(values: &[EnumDescriptor], position: usize) -> String {
    values
        .get(position)
        .map(|v| v.name.clone())
        .unwrap_or_default()
}
