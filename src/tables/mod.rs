//! Static interval data, generated offline from the Unicode Character Database.

pub(crate) mod ambiguous;
pub(crate) mod combining;
