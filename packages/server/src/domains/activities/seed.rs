//! Roster seed data.
//!
//! The roster is built once at startup, either from the built-in Mergington
//! High School catalogue or from a JSON file shaped like the
//! `GET /activities` response.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use tracing::info;

use crate::domains::activities::errors::SeedError;
use crate::domains::activities::models::activity::Activity;
use crate::domains::activities::models::roster::Roster;

/// Activity record as written in a seed file.
///
/// Participants are read as a list so duplicates can be reported instead of
/// silently collapsing into the set.
#[derive(Debug, Deserialize)]
struct SeedActivity {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// The built-in activity catalogue.
pub fn default_roster() -> Roster {
    Roster::from_iter([
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team".to_string(),
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club".to_string(),
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ])
}

/// Parse a roster from seed JSON.
pub fn roster_from_json(json: &str) -> Result<Roster, SeedError> {
    let records: IndexMap<String, SeedActivity> = serde_json::from_str(json)?;

    let mut activities = IndexMap::with_capacity(records.len());
    for (name, record) in records {
        if name.trim().is_empty() {
            return Err(SeedError::EmptyActivityName);
        }

        let mut participants = IndexSet::with_capacity(record.participants.len());
        for email in record.participants {
            if participants.contains(&email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name,
                    email,
                });
            }
            participants.insert(email);
        }

        activities.insert(
            name,
            Activity {
                description: record.description,
                schedule: record.schedule,
                max_participants: record.max_participants,
                participants,
            },
        );
    }

    Ok(Roster::new(activities))
}

/// Read and parse a seed file.
pub fn load_roster(path: &Path) -> Result<Roster, SeedError> {
    let json = std::fs::read_to_string(path)?;
    let roster = roster_from_json(&json)?;
    info!(
        path = %path.display(),
        activities = roster.len(),
        "Loaded roster seed file"
    );
    Ok(roster)
}
