//! Text rendering for console output.

pub mod table;

pub use table::{Table, TableStyle};

use crate::models::{Contact, CONTACT_HEADERS};

/// Build a table of contacts with the standard contact headers.
pub fn contact_table<'a, I>(contacts: I) -> Table
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut table = Table::new(CONTACT_HEADERS);
    for contact in contacts {
        table.push_row(contact.table_row());
    }
    table
}
