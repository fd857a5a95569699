// Seeded, read-only collections behind the list views. Rebuilt on every start.

pub mod fixtures;
pub mod jitter;

use crate::models::favorite::Favorite;
use crate::models::job::JobPosting;
use crate::models::project::Project;
use crate::models::talent::TalentProfile;
use crate::models::user::UserRecord;

pub use jitter::ScoreJitter;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub users: Vec<UserRecord>,
    pub jobs: Vec<JobPosting>,
    pub projects: Vec<Project>,
    pub talent: Vec<TalentProfile>,
    pub favorites: Vec<Favorite>,
}

impl Catalog {
    pub fn seeded() -> Self {
        Self {
            users: fixtures::users(),
            jobs: fixtures::jobs(),
            projects: fixtures::projects(),
            talent: fixtures::talent(),
            favorites: fixtures::favorites(),
        }
    }
}
