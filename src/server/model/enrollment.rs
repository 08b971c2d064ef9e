use crate::model::flight::{JoinFlightDto, JoinStatusDto};

/// Result of asking to join a flight. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// A new enrollment edge was written.
    Joined,
    /// The edge already existed; nothing changed.
    AlreadyJoined,
}

impl JoinOutcome {
    pub fn into_dto(self) -> JoinFlightDto {
        match self {
            Self::Joined => JoinFlightDto {
                status: JoinStatusDto::Joined,
                message: "Successfully joined flight".to_string(),
            },
            Self::AlreadyJoined => JoinFlightDto {
                status: JoinStatusDto::AlreadyJoined,
                message: "Already joined this flight".to_string(),
            },
        }
    }
}
