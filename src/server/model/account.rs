//! The authenticated caller as seen by the authorization policy.

use std::collections::BTreeSet;

use crate::server::model::user::User;

/// Name of the group whose members may administer flights.
pub const FLIGHT_MANAGERS_GROUP: &str = "Flight Managers";

/// Identity and role facts about the caller, resolved fresh on every request.
///
/// Built from the user row and the names of every group the user belongs to, so
/// group membership changes take effect on the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub is_staff: bool,
    pub groups: BTreeSet<String>,
}

impl Account {
    pub fn new(user: &User, groups: impl IntoIterator<Item = String>) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            is_staff: user.is_staff,
            groups: groups.into_iter().collect(),
        }
    }

    pub fn in_group(&self, name: &str) -> bool {
        self.groups.contains(name)
    }
}
