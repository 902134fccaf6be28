use serde::Serialize;
use strum::{Display, IntoStaticStr};

/// Downstream branch selected from the classifier's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tone {
    Happy,
    Sad,
    Angry,
}

impl Tone {
    /// Evaluation order of the router's branches.
    pub const PRIORITY: [Tone; 3] = [Tone::Happy, Tone::Sad, Tone::Angry];

    /// Literal the classifier text must equal for this branch to fire.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Pick at most one branch: the first tone, in priority order, whose label
/// equals `text` exactly. No trimming or case folding; anything else selects
/// nothing.
pub fn route(text: &str) -> Option<Tone> {
    Tone::PRIORITY.into_iter().find(|tone| text == tone.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_literal_selects_only_its_branch() {
        assert_eq!(route("happy"), Some(Tone::Happy));
        assert_eq!(route("sad"), Some(Tone::Sad));
        assert_eq!(route("angry"), Some(Tone::Angry));
    }

    #[test]
    fn happy_never_reaches_later_branches() {
        let selected: Vec<Tone> = Tone::PRIORITY
            .into_iter()
            .filter(|tone| route("happy") == Some(*tone))
            .collect();
        assert_eq!(selected, vec![Tone::Happy]);
    }

    #[test]
    fn wrong_case_selects_nothing() {
        assert_eq!(route("HAPPY"), None);
        assert_eq!(route("Sad"), None);
    }

    #[test]
    fn unrecognized_text_selects_nothing() {
        assert_eq!(route("confused"), None);
        assert_eq!(route(""), None);
    }

    #[test]
    fn surrounding_whitespace_is_not_trimmed() {
        assert_eq!(route("happy\n"), None);
        assert_eq!(route(" angry"), None);
    }

    #[test]
    fn labels_match_display() {
        for tone in Tone::PRIORITY {
            assert_eq!(tone.to_string(), tone.label());
        }
    }
}
