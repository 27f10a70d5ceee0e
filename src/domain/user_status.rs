use strum_macros::{Display, EnumString};

/// Subscription state of a user row; the wire and column form is the
/// lowercase variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum UserStatus {
    Paid,
    Unpaid,
}
