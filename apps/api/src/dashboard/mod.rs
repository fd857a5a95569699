// Role dashboards: a handful of stat cards derived from the seed catalog.

pub mod icons;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::project::ProjectStatus;
use crate::models::talent::Availability;
use crate::models::user::UserStatus;
use crate::session::Role;

pub use icons::{render_icon, IconSpec};

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub change: Option<String>,
    pub icon: IconSpec,
    /// `icon` already resolved through `render_icon`.
    pub icon_markup: String,
}

impl StatCard {
    fn new(label: &str, value: impl ToString, change: Option<&str>, icon: IconSpec) -> Self {
        let icon_markup = render_icon(&icon);
        Self {
            label: label.to_string(),
            value: value.to_string(),
            change: change.map(str::to_string),
            icon,
            icon_markup,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub role: Role,
    pub cards: Vec<StatCard>,
}

pub fn dashboard_for(role: Role, catalog: &Catalog, unread_messages: u32) -> Dashboard {
    let cards = match role {
        Role::Admin => admin_cards(catalog),
        Role::Business => business_cards(catalog, unread_messages),
        Role::Talent => talent_cards(catalog, unread_messages),
    };
    Dashboard { role, cards }
}

fn admin_cards(catalog: &Catalog) -> Vec<StatCard> {
    let active = catalog
        .users
        .iter()
        .filter(|u| u.status == UserStatus::Active)
        .count();
    let pending = catalog
        .users
        .iter()
        .filter(|u| u.status == UserStatus::Pending)
        .count();
    let talent = catalog.users.iter().filter(|u| u.role == Role::Talent).count();

    vec![
        StatCard::new("Total Users", catalog.users.len(), Some("+12%"), IconSpec::named("users")),
        StatCard::new("Active Users", active, Some("+4%"), IconSpec::named("activity")),
        StatCard::new("Pending Review", pending, None, IconSpec::named("briefcase")),
        StatCard::new("Talent Accounts", talent, Some("+8%"), IconSpec::named("star")),
    ]
}

fn business_cards(catalog: &Catalog, unread_messages: u32) -> Vec<StatCard> {
    let active_projects = catalog
        .projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .count();
    let applicants: u32 = catalog.projects.iter().map(|p| p.applicants).sum();
    let spend: u32 = catalog
        .projects
        .iter()
        .filter(|p| p.status != ProjectStatus::Draft)
        .map(|p| p.budget)
        .sum();

    vec![
        StatCard::new("Active Projects", active_projects, Some("+2"), IconSpec::named("briefcase")),
        StatCard::new("Applicants", applicants, Some("+18%"), IconSpec::named("users")),
        StatCard::new("Saved Talent", catalog.favorites.len(), None, IconSpec::named("heart")),
        StatCard::new("Committed Budget", format!("${spend}"), None, IconSpec::named("dollar")),
        StatCard::new("Unread Messages", unread_messages, None, IconSpec::named("message")),
    ]
}

fn talent_cards(catalog: &Catalog, unread_messages: u32) -> Vec<StatCard> {
    let top_match = catalog.jobs.iter().map(|j| j.match_score).max().unwrap_or(0);
    let open_to_hire = catalog
        .talent
        .iter()
        .filter(|t| t.availability == Availability::Available)
        .count();

    vec![
        StatCard::new("Matched Jobs", catalog.jobs.len(), Some("+3"), IconSpec::named("briefcase")),
        StatCard::new("Top Match", format!("{top_match}%"), None, IconSpec::named("star")),
        StatCard::new("Profile Views", 1240, Some("+22%"), IconSpec::named("activity")),
        StatCard::new("Available Talent", open_to_hire, None, IconSpec::named("users")),
        StatCard::new("Unread Messages", unread_messages, None, IconSpec::named("message")),
    ]
}
