//! Open-panel state for accordion-style disclosure lists.
//!
//! A single `Option<PanelId>` tracks the whole group, so at most one panel
//! can be open no matter how the user clicks around.

pub type PanelId = &'static str;

/// Toggle semantics: clicking the open panel closes it, clicking any other
/// panel opens that one (closing whatever was open).
pub fn toggle(open: Option<PanelId>, id: PanelId) -> Option<PanelId> {
    if open == Some(id) {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_an_involution() {
        // Closed -> open -> closed.
        assert_eq!(toggle(toggle(None, "species"), "species"), None);
        // Open -> closed -> open again.
        assert_eq!(
            toggle(toggle(Some("species"), "species"), "species"),
            Some("species")
        );
    }

    #[test]
    fn double_toggle_from_another_panel_collapses_the_group() {
        // When a different panel was open, the first click moves the open
        // panel and the second closes it; the previous panel stays closed.
        let open = Some("deposit");
        assert_eq!(toggle(toggle(open, "species"), "species"), None);
    }

    #[test]
    fn opening_a_panel_closes_the_previous_one() {
        let open = toggle(None, "lead-time");
        assert_eq!(open, Some("lead-time"));
        let open = toggle(open, "deposit");
        assert_eq!(open, Some("deposit"));
    }

    #[test]
    fn any_click_sequence_leaves_at_most_one_panel_open() {
        let clicks = ["a", "b", "b", "c", "a", "a", "c"];
        let mut open = None;
        for id in clicks {
            open = toggle(open, id);
            // The state holds at most one id; it must be one we clicked.
            if let Some(current) = open {
                assert!(clicks.contains(&current));
            }
        }
    }
}
