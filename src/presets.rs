//! Bundled terminal color schemes.
//!
//! These are well-known published palettes, kept here so `huegen
//! analyze` can score them by name without the user pasting hex codes.

use okcolor::{Palette, PaletteError};

/// A bundled scheme: a background and its six accent colors.
#[derive(Debug, Clone, Copy)]
pub struct Scheme {
    pub name: &'static str,
    pub background: &'static str,
    pub colors: [&'static str; 6],
}

/// All bundled schemes, in display order.
pub const SCHEMES: [Scheme; 5] = [
    Scheme {
        name: "Nord",
        background: "2E3440",
        colors: ["BF616A", "A3BE8C", "EBCB8B", "81A1C1", "B48EAD", "8FBCBB"],
    },
    Scheme {
        name: "Dracula",
        background: "282A36",
        colors: ["FF5555", "50FA7B", "F1FA8C", "BD93F9", "FF79C6", "8BE9FD"],
    },
    Scheme {
        name: "Catppuccin",
        background: "1E1E2E",
        colors: ["F38BA8", "A6E3A1", "F9E2AF", "89B4FA", "CBA6F7", "94E2D5"],
    },
    Scheme {
        name: "Gruvbox",
        background: "1D2021",
        colors: ["FB4934", "B8BB26", "FABD2F", "83A598", "D3869B", "8EC07C"],
    },
    Scheme {
        name: "Rosepine",
        background: "191724",
        colors: ["EB6F92", "31748F", "F6C177", "C4A7E7", "EBBCBA", "9CCFD8"],
    },
];

impl Scheme {
    /// Build the scheme's [`Palette`] for analysis.
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        Palette::from_hex(self.background, &self.colors)
    }
}

/// Look up a bundled scheme by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static Scheme> {
    SCHEMES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Scheme names for error messages and the status screen.
pub fn scheme_names() -> Vec<&'static str> {
    SCHEMES.iter().map(|s| s.name).collect()
}
