//! Keystroke types: Modifiers, KeyCode, Keystroke
//!
//! Host-neutral: whatever widget toolkit delivers key events converts them into a
//! [`Keystroke`] before asking the chord table.

use std::fmt;

/// Held modifier keys, one bit each
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    /// Cmd on macOS, Win elsewhere
    pub const META: Modifiers = Modifiers(1 << 3);

    /// The platform's primary shortcut modifier (Cmd on macOS, Ctrl elsewhere)
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn without(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 & !other.0)
    }

    /// Labels of the held modifiers in display order
    fn labels(self, glyphs: bool) -> impl Iterator<Item = &'static str> {
        MODIFIER_LABELS
            .iter()
            .filter(move |label| self.contains(label.modifier))
            .map(move |label| if glyphs { label.glyph } else { label.name })
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

struct ModifierLabel {
    modifier: Modifiers,
    /// macOS menu glyph
    glyph: &'static str,
    name: &'static str,
}

const MODIFIER_LABELS: [ModifierLabel; 4] = [
    ModifierLabel {
        modifier: Modifiers::CTRL,
        glyph: "⌃",
        name: "Ctrl",
    },
    ModifierLabel {
        modifier: Modifiers::ALT,
        glyph: "⌥",
        name: "Alt",
    },
    ModifierLabel {
        modifier: Modifiers::SHIFT,
        glyph: "⇧",
        name: "Shift",
    },
    ModifierLabel {
        modifier: Modifiers::META,
        glyph: "⌘",
        name: "Meta",
    },
];

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.labels(false).collect();
        f.write_str(&names.join("+"))
    }
}

/// The keys a chord can be bound to.
///
/// Caret movement and deletion stay with the host widget, so only character
/// keys and a few named keys appear here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (letters normalized to lowercase)
    Char(char),
    Enter,
    Escape,
    Tab,
    Space,
    F(u8),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Escape => f.write_str("Esc"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::Space => f.write_str("Space"),
            KeyCode::F(n) => write!(f, "F{n}"),
        }
    }
}

/// A key plus the modifiers held with it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// A bare character key
    pub fn char(c: char) -> Self {
        Self::char_with_mods(c, Modifiers::NONE)
    }

    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), mods)
    }

    /// Symbol keys (`*`, `~`, ...) arrive with Shift held on most layouts.
    /// Returns the same keystroke without Shift when that applies.
    pub fn without_symbol_shift(&self) -> Option<Keystroke> {
        match self.key {
            KeyCode::Char(c) if !c.is_alphanumeric() && self.mods.contains(Modifiers::SHIFT) => {
                Some(Keystroke::new(self.key, self.mods.without(Modifiers::SHIFT)))
            }
            _ => None,
        }
    }

    /// Chord label for tooltips and the `chords` listing
    pub fn display_string(&self) -> String {
        if cfg!(target_os = "macos") {
            let glyphs: String = self.mods.labels(true).collect();
            format!("{glyphs}{}", self.key)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::ALT | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::ALT));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::CTRL));
        assert_eq!(mods.without(Modifiers::SHIFT), Modifiers::ALT);
    }

    #[test]
    fn test_keystroke_char_lowercase() {
        assert_eq!(Keystroke::char('A'), Keystroke::char('a'));
    }

    #[test]
    fn test_symbol_shift_is_dropped() {
        let stroke = Keystroke::char_with_mods('*', Modifiers::SHIFT);
        assert_eq!(stroke.without_symbol_shift(), Some(Keystroke::char('*')));

        let letter = Keystroke::char_with_mods('a', Modifiers::SHIFT);
        assert_eq!(letter.without_symbol_shift(), None);
    }

    #[test]
    fn test_display_orders_modifiers() {
        let stroke = Keystroke::char_with_mods('a', Modifiers::SHIFT | Modifiers::ALT);
        assert_eq!(stroke.to_string(), "Alt+Shift+A");
        assert_eq!(Keystroke::char('*').to_string(), "*");
        assert_eq!(Keystroke::new(KeyCode::F(5), Modifiers::NONE).to_string(), "F5");
    }
}
