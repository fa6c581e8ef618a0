use thiserror::Error;

/// Caller input errors raised by roster operations.
///
/// A failed operation never mutates the roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Email must not be empty")]
    InvalidEmail,
}

/// Errors raised while loading a roster seed file
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Activity names must not be empty")]
    EmptyActivityName,

    #[error("Duplicate participant {email} in {activity}")]
    DuplicateParticipant { activity: String, email: String },
}
