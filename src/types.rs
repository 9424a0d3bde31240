//! Type-safe menu choices for the interactive shell

use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

/// Main menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MenuOption {
    #[strum(serialize = "Select File or URL")]
    SelectSource = 1,
    #[strum(serialize = "Enter Rail Fence Key")]
    EnterKey = 2,
    #[strum(serialize = "Encrypt")]
    Encrypt = 3,
    #[strum(serialize = "Decrypt")]
    Decrypt = 4,
    #[strum(serialize = "Display Rail Fence")]
    DisplayFence = 5,
    #[strum(serialize = "Quit")]
    Quit = 6,
}

impl MenuOption {
    /// Number typed to pick this entry
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Parse a menu selection as typed by the user
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_repr)
    }

    /// Highest menu number
    pub fn last() -> u8 {
        Self::iter().map(Self::number).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_numbers() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::SelectSource));
        assert_eq!(MenuOption::parse(" 6 \n"), Some(MenuOption::Quit));
        assert_eq!(MenuOption::parse("0"), None);
        assert_eq!(MenuOption::parse("7"), None);
        assert_eq!(MenuOption::parse("encrypt"), None);
        assert_eq!(MenuOption::parse("-1"), None);
    }

    #[test]
    fn test_numbers_are_contiguous() {
        let numbers: Vec<u8> = MenuOption::iter().map(MenuOption::number).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5, 6]);
        assert_eq!(MenuOption::last(), 6);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MenuOption::DisplayFence.to_string(), "Display Rail Fence");
        assert_eq!(MenuOption::EnterKey.to_string(), "Enter Rail Fence Key");
    }
}
