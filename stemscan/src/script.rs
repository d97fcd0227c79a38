//! Script selection.

use super::config::HintConfig;
use raw::types::Tag;

/// Writing systems with segment and linking support.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Script {
    #[default]
    Latin,
}

impl Script {
    /// Returns the properties of the script.
    pub fn class(self) -> &'static ScriptClass {
        match self {
            Self::Latin => &LATIN,
        }
    }

    /// Returns the default constants for the script.
    pub fn config(self) -> HintConfig {
        self.class().config
    }
}

/// Defines the basic properties for each script.
#[derive(Clone, Debug)]
pub struct ScriptClass {
    /// Name used in log messages.
    pub name: &'static str,
    /// Unicode tag for the script.
    pub tag: Tag,
    /// Characters used to define standard width and height of stems.
    pub std_chars: &'static [char],
    /// Default heuristic constants.
    pub config: HintConfig,
}

static LATIN: ScriptClass = ScriptClass {
    name: "Latin",
    tag: Tag::new(b"Latn"),
    std_chars: &['o', 'O', '0'],
    config: HintConfig::LATIN,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_class() {
        let class = Script::Latin.class();
        assert_eq!(class.name, "Latin");
        assert_eq!(class.tag, Tag::new(b"Latn"));
        assert_eq!(class.std_chars.first(), Some(&'o'));
        assert_eq!(Script::default().config(), HintConfig::default());
    }
}
