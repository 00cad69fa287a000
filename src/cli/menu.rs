//! The main menu and its selections.

use crate::error::DriverError;
use crate::presentation::{Table, TableStyle};
use std::str::FromStr;

/// An action picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    ViewContacts,
    SearchContact,
    DeleteContact,
    UpdateContact,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddContact,
        MenuChoice::ViewContacts,
        MenuChoice::SearchContact,
        MenuChoice::DeleteContact,
        MenuChoice::UpdateContact,
        MenuChoice::Exit,
    ];

    /// The token the user types to pick this choice.
    pub fn token(self) -> &'static str {
        match self {
            MenuChoice::AddContact => "1",
            MenuChoice::ViewContacts => "2",
            MenuChoice::SearchContact => "3",
            MenuChoice::DeleteContact => "4",
            MenuChoice::UpdateContact => "5",
            MenuChoice::Exit => "6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddContact => "Add Contact",
            MenuChoice::ViewContacts => "View Contacts",
            MenuChoice::SearchContact => "Search Contact",
            MenuChoice::DeleteContact => "Delete Contact",
            MenuChoice::UpdateContact => "Update Contact",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = DriverError;

    /// Tokens must match exactly; `" 1"` is not `"1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.token() == s)
            .ok_or_else(|| DriverError::InvalidMenuChoice(s.to_string()))
    }
}

/// Render the menu table.
pub fn render_menu() -> String {
    let mut table = Table::new(["Number", "Action"]);
    for choice in MenuChoice::ALL {
        table.push_row([choice.token(), choice.label()]);
    }
    table.render(TableStyle::Github)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_token() {
        for choice in MenuChoice::ALL {
            assert_eq!(choice.token().parse::<MenuChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "0", "7", "add", " 1", "1 "] {
            assert_eq!(
                input.parse::<MenuChoice>(),
                Err(DriverError::InvalidMenuChoice(input.to_string()))
            );
        }
    }

    #[test]
    fn test_render_menu() {
        let expected = "\
| Number | Action         |
|--------|----------------|
| 1      | Add Contact    |
| 2      | View Contacts  |
| 3      | Search Contact |
| 4      | Delete Contact |
| 5      | Update Contact |
| 6      | Exit           |";
        assert_eq!(render_menu(), expected);
    }
}
