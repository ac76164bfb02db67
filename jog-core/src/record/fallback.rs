use crate::conf::ConfigError;
use crate::conf::types::GrokConfig;
use grok::Grok;
use std::fmt;

/// Fallback matcher for lines that are not JSON.
///
/// Patterns are tried in configuration order; the first one whose captures
/// are accepted wins.
pub struct GrokMatcher {
    patterns: Vec<(String, grok::Pattern)>,
    matches_fields: Vec<String>,
}

impl fmt::Debug for GrokMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrokMatcher")
            .field(
                "patterns",
                &self.patterns.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("matches_fields", &self.matches_fields)
            .finish()
    }
}

impl GrokMatcher {
    /// Compiles the configured patterns; `None` when the fallback is off.
    pub fn from_config(cfg: &GrokConfig) -> Result<Option<Self>, ConfigError> {
        if !cfg.enabled || cfg.uses.is_empty() {
            return Ok(None);
        }

        let mut grok = Grok::default();
        for (name, definition) in &cfg.patterns {
            grok.add_pattern(name.clone(), definition.clone());
        }

        let patterns = cfg
            .uses
            .iter()
            .map(|name| {
                let expression = format!("%{{{name}}}");
                grok.compile(&expression, true)
                    .map(|compiled| (name.clone(), compiled))
                    .map_err(|e| ConfigError::Grok {
                        pattern: name.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(patterns = ?cfg.uses, "grok fallback enabled");

        Ok(Some(Self {
            patterns,
            matches_fields: cfg.matches_fields.clone(),
        }))
    }

    pub fn matches_fields(&self) -> &[String] {
        &self.matches_fields
    }

    /// Returns the non-empty captures of the first pattern that matches and
    /// whose captures satisfy `accept`.
    pub fn match_line<F>(&self, text: &str, accept: F) -> Option<Vec<(String, String)>>
    where
        F: Fn(&[(String, String)]) -> bool,
    {
        self.patterns.iter().find_map(|(name, pattern)| {
            let matches = pattern.match_against(text)?;
            let captures: Vec<(String, String)> = matches
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();

            if accept(&captures) {
                tracing::trace!(pattern = %name, "grok pattern matched");
                Some(captures)
            } else {
                None
            }
        })
    }
}
