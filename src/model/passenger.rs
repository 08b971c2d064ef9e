use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PassengerDto {
    pub id: i32,
    /// Username of the owning account.
    pub user: String,
    pub name: String,
    pub passport: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePassengerDto {
    pub name: String,
    #[serde(default)]
    pub phone: String,
}
