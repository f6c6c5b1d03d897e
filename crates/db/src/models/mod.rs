//! Row models read from the `author` table.

pub mod author;
