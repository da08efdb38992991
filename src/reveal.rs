const REVEAL_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";
const HIDDEN_OFFSET_PX: u32 = 30;

/// Fade/slide-in state of a card. Once revealed it never goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn on_intersection(self, is_intersecting: bool) -> Self {
        match (self, is_intersecting) {
            (Self::Hidden, true) => Self::Revealed,
            (state, _) => state,
        }
    }

    /// State for a card no observer can watch. It is shown right away so a
    /// failed observer never leaves content hidden.
    pub fn without_observer(self) -> Self {
        Self::Revealed
    }

    #[cfg(test)]
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub fn style(self) -> String {
        match self {
            Self::Hidden => format!(
                "opacity: 0; transform: translateY({HIDDEN_OFFSET_PX}px); transition: {REVEAL_TRANSITION};"
            ),
            Self::Revealed => {
                format!("opacity: 1; transform: translateY(0); transition: {REVEAL_TRANSITION};")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_offset() {
        let state = RevealState::default();

        assert!(!state.is_revealed());
        assert_eq!(
            state.style(),
            "opacity: 0; transform: translateY(30px); transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1);"
        );
    }

    #[test]
    fn reveal_is_one_shot() {
        let state = RevealState::Hidden
            .on_intersection(false)
            .on_intersection(true)
            .on_intersection(false);

        assert_eq!(state, RevealState::Revealed);
        assert!(state.style().starts_with("opacity: 1; transform: translateY(0);"));
    }

    #[test]
    fn card_without_an_observer_is_shown() {
        let state = RevealState::default().without_observer();

        assert!(state.is_revealed());
        assert_eq!(state.on_intersection(false), RevealState::Revealed);
    }
}
