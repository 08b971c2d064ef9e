//! Authorization policy.
//!
//! Pure predicates over the caller's [`Account`]. `None` is the anonymous caller.

use crate::server::model::account::{Account, FLIGHT_MANAGERS_GROUP};

/// Any authenticated caller.
pub fn is_authenticated_user(account: Option<&Account>) -> bool {
    account.is_some()
}

/// Staff accounts and members of the "Flight Managers" group.
pub fn is_manager_or_admin(account: Option<&Account>) -> bool {
    account.is_some_and(|account| account.is_staff || account.in_group(FLIGHT_MANAGERS_GROUP))
}

/// Staff accounts only.
pub fn is_staff(account: Option<&Account>) -> bool {
    account.is_some_and(|account| account.is_staff)
}
