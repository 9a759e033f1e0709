use std::fs;

use crate::config_error::ConfigError;

/// One `[name]` block, keys kept in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl Section {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|s| !s.is_empty())
    }
}

/// INI-style configuration: `key = value` lines, `[section]` headers,
/// `#` comments. Sections and keys keep the order they appear in.
#[derive(Debug, Default)]
pub struct Config {
    pub globals: Vec<(String, String)>,
    pub sections: Vec<Section>,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut config = Self::empty();
        let mut current: Option<usize> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = line[1..line.len() - 1].trim();
                current = Some(config.section_index(name));
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim().to_string();
                let value = value_text(line[pos + 1..].trim()).to_string();

                match current {
                    None => config.globals.push((key, value)),
                    Some(idx) => config.sections[idx].entries.push((key, value)),
                }
            }
        }
        config
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            globals: Vec::new(),
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Sections whose name starts with `prefix`, in file order.
    pub fn sections_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections
            .iter()
            .filter(move |s| s.name.starts_with(prefix))
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|sec| sec.get(key))
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Reads a `true`/`false` value (also `yes`/`no`, `on`/`off`, `1`/`0`),
    /// falling back to globals and then to `default`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] for any other value.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> Result<bool, ConfigError> {
        match self
            .get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
        {
            None => Ok(default),
            Some(value) => parse_bool(key, value),
        }
    }

    /// Reopening a section appends to it instead of creating a duplicate.
    fn section_index(&mut self, name: &str) -> usize {
        if let Some(pos) = self.sections.iter().position(|s| s.name == name) {
            return pos;
        }
        self.sections.push(Section {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.sections.len() - 1
    }
}

/// Parses the boolean spellings accepted in config files.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBool`] for unrecognized values.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// The text of a raw value: what lies between the quotes of a quoted value,
/// or an unquoted value up to a trailing ` # comment`.
fn value_text(value: &str) -> &str {
    if let Some(quoted) = value.strip_prefix('"') {
        if let Some(end) = quoted.find('"') {
            return &quoted[..end];
        }
    }
    value
        .find(" #")
        .map_or(value, |pos| value[..pos].trim_end())
        .trim_matches('"')
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    const SAMPLE: &str = r#"
# global settings
app = "demo"

[Logging]
defaults = yes   # register the five default levels

[sink.b]
target = stderr

[sink.a]
target = "out # not a comment.log"
color = true
"#;

    #[test]
    fn parse_keeps_globals_and_section_order() {
        let cfg = Config::parse(SAMPLE);
        assert_eq!(cfg.get_global("app"), Some("demo"));

        let names: Vec<&str> = cfg.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Logging", "sink.b", "sink.a"]);

        let sinks: Vec<&str> = cfg
            .sections_with_prefix("sink.")
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(sinks, ["sink.b", "sink.a"]);
    }

    #[test]
    fn trailing_comments_are_stripped_outside_quotes() {
        let cfg = Config::parse(SAMPLE);
        assert_eq!(cfg.get("Logging", "defaults"), Some("yes"));
        assert_eq!(cfg.get("sink.a", "target"), Some("out # not a comment.log"));
    }

    #[test]
    fn quoted_value_drops_comment_after_closing_quote() {
        let cfg = Config::parse("[sink.f]\ntarget = \"app.log\"   # main file\n");
        assert_eq!(cfg.get("sink.f", "target"), Some("app.log"));

        let cfg = Config::parse("[sink.f]\ntarget = \"a # b.log\" # note\nempty = \"\"\n");
        assert_eq!(cfg.get("sink.f", "target"), Some("a # b.log"));
        assert_eq!(cfg.get("sink.f", "empty"), Some(""));
    }

    #[test]
    fn bools_accept_common_spellings() {
        let cfg = Config::parse(SAMPLE);
        assert!(cfg.get_bool("Logging", "defaults", false).unwrap());
        assert!(cfg.get_bool("sink.a", "color", false).unwrap());
        assert!(!cfg.get_bool("sink.b", "color", false).unwrap());

        let bad = Config::parse("[x]\ncolor = maybe\n");
        assert_eq!(
            bad.get_bool("x", "color", false),
            Err(ConfigError::InvalidBool {
                key: "color".into(),
                value: "maybe".into()
            })
        );
    }

    #[test]
    fn reopened_section_is_merged() {
        let cfg = Config::parse("[a]\nx = 1\n[b]\n[a]\ny = 2\n");
        assert_eq!(cfg.sections.len(), 2);
        assert_eq!(cfg.sections[0].name, "a");
        assert_eq!(cfg.get("a", "x"), Some("1"));
        assert_eq!(cfg.get("a", "y"), Some("2"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        match Config::load("/definitely/not/here.ini") {
            Err(ConfigError::Read { path, .. }) => assert_eq!(path, "/definitely/not/here.ini"),
            other => panic!("expected Read error, got: {:?}", other),
        }
    }
}
