use crate::conf::ConfigError;
use crate::conf::types::{CompressAction, CompressPrefixConfig};
use ahash::RandomState;
use dashmap::DashMap;

/// Shortens dotted identifiers such as `org.example.app.Service`.
///
/// Results are memoized per input for the lifetime of the compressor. The
/// cache is unbounded; its size is bounded by the number of distinct
/// logger/class names seen in one run.
#[derive(Debug)]
pub struct PrefixCompressor {
    separators: Vec<String>,
    white_list: Vec<String>,
    action: CompressAction,
    case_sensitive: bool,
    cache: DashMap<String, String, RandomState>,
}

impl PrefixCompressor {
    pub fn new(
        separators: Vec<String>,
        white_list: Vec<String>,
        action: CompressAction,
        case_sensitive: bool,
    ) -> Self {
        Self {
            separators,
            white_list,
            action,
            case_sensitive,
            cache: DashMap::with_hasher(RandomState::new()),
        }
    }

    /// Builds a compressor, or `None` when the rule is disabled.
    pub fn from_config(
        field: &str,
        cfg: &CompressPrefixConfig,
        case_sensitive: bool,
    ) -> Result<Option<Self>, ConfigError> {
        if !cfg.enabled {
            return Ok(None);
        }

        let separators: Vec<String> = cfg
            .separators
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();
        if separators.is_empty() {
            return Err(ConfigError::InvalidCompressPrefix {
                field: field.to_string(),
                reason: "at least one non-empty separator is required".to_string(),
            });
        }

        Ok(Some(Self::new(
            separators,
            cfg.white_list.clone(),
            cfg.action,
            case_sensitive,
        )))
    }

    pub fn action(&self) -> CompressAction {
        self.action
    }

    pub fn compress(&self, text: &str) -> String {
        if let Some(hit) = self.cache.get(text) {
            return hit.value().clone();
        }

        let compressed = self.compress_uncached(text);
        self.cache.insert(text.to_string(), compressed.clone());
        compressed
    }

    /// Number of memoized inputs.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn compress_uncached(&self, text: &str) -> String {
        if self.is_white_listed(text) {
            return text.to_string();
        }

        let Some(separator) = self.find_separator(text) else {
            return text.to_string();
        };

        let segments: Vec<&str> = text.split(separator.as_str()).collect();
        let Some((last, head)) = segments.split_last() else {
            return text.to_string();
        };

        match self.action {
            CompressAction::Remove => (*last).to_string(),
            CompressAction::RemoveNonFirstLetter => head
                .iter()
                .map(|segment| segment.chars().take(1).collect::<String>())
                .chain(std::iter::once((*last).to_string()))
                .collect::<Vec<_>>()
                .join(&separator),
        }
    }

    fn is_white_listed(&self, text: &str) -> bool {
        if self.case_sensitive {
            self.white_list.iter().any(|w| text.starts_with(w.as_str()))
        } else {
            let folded = text.to_lowercase();
            self.white_list
                .iter()
                .any(|w| folded.starts_with(&w.to_lowercase()))
        }
    }

    fn find_separator(&self, text: &str) -> Option<String> {
        if let Some(sep) = self.separators.iter().find(|s| text.contains(s.as_str())) {
            return Some(sep.clone());
        }
        if self.case_sensitive {
            return None;
        }

        self.separators.iter().find_map(|sep| {
            [sep.to_lowercase(), sep.to_uppercase()]
                .into_iter()
                .find(|variant| variant != sep && text.contains(variant.as_str()))
        })
    }
}
