use std::io::{self, Write};

/// One entry of the command menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayState,
    Rotate,
    ActivatePanels,
    DeactivatePanels,
    CollectData,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order; entry `i` is selected by `i + 1`.
    pub const ALL: [MenuChoice; 6] = [
        Self::DisplayState,
        Self::Rotate,
        Self::ActivatePanels,
        Self::DeactivatePanels,
        Self::CollectData,
        Self::Exit,
    ];

    /// Maps a selection (`"1"`..`"6"`, surrounding whitespace ignored).
    pub fn parse(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(Self::DisplayState),
            "2" => Some(Self::Rotate),
            "3" => Some(Self::ActivatePanels),
            "4" => Some(Self::DeactivatePanels),
            "5" => Some(Self::CollectData),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DisplayState => "Display State",
            Self::Rotate => "Rotate",
            Self::ActivatePanels => "Activate Solar Panels",
            Self::DeactivatePanels => "Deactivate Solar Panels",
            Self::CollectData => "Collect Data",
            Self::Exit => "Exit",
        }
    }
}

/// Writes the numbered menu.
pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Satellite Command System Menu:")?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, choice.label())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_map_in_menu_order() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(MenuChoice::parse(&(i + 1).to_string()), Some(*choice));
        }
    }

    #[test]
    fn padded_selection_is_accepted() {
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::CollectData));
    }

    #[test]
    fn unknown_selections_are_rejected() {
        for s in ["", "0", "7", "9", "abc", "1.0", "one"] {
            assert_eq!(MenuChoice::parse(s), None, "{s:?} should not map");
        }
    }

    #[test]
    fn menu_lists_six_numbered_options() {
        let mut out = Vec::new();
        write_menu(&mut out).expect("menu should render");
        let text = String::from_utf8(out).unwrap_or_default();
        assert!(text.contains("Satellite Command System Menu:"));
        assert!(text.contains("1. Display State"));
        assert!(text.contains("6. Exit"));
        assert_eq!(text.lines().filter(|l| l.contains(". ")).count(), 6);
    }
}
