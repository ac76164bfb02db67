/// Output pattern with `${name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Text(String),
    Placeholder(String),
}

impl Template {
    /// Parses a pattern. An unterminated `${` is kept as literal text.
    pub fn parse(pattern: &str) -> Self {
        let mut parts = Vec::new();
        let mut rest = pattern;

        while let Some(start) = rest.find("${") {
            let after_open = &rest[start + 2..];
            let Some(end) = after_open.find('}') else {
                break;
            };

            if start > 0 {
                parts.push(TemplatePart::Text(rest[..start].to_string()));
            }
            parts.push(TemplatePart::Placeholder(
                after_open[..end].trim().to_string(),
            ));
            rest = &after_open[end + 1..];
        }

        if !rest.is_empty() {
            parts.push(TemplatePart::Text(rest.to_string()));
        }

        Self { parts }
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|p| match p {
            TemplatePart::Placeholder(name) => Some(name.as_str()),
            TemplatePart::Text(_) => None,
        })
    }

    /// Substitutes placeholders; unknown names render as empty text.
    pub fn render<'a, F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Text(text) => out.push_str(text),
                TemplatePart::Placeholder(name) => out.push_str(lookup(name).unwrap_or("")),
            }
        }
        out
    }
}
