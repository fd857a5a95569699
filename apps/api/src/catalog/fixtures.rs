//! Seed fixtures for every list view. Ids are stable so clients can deep-link.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::conversation::{Conversation, Message};
use crate::models::favorite::Favorite;
use crate::models::job::JobPosting;
use crate::models::project::{Project, ProjectStatus};
use crate::models::talent::{Availability, TalentProfile};
use crate::models::user::{UserRecord, UserStatus};
use crate::session::Role;

const USER_KIND: u128 = 1;
const JOB_KIND: u128 = 2;
const PROJECT_KIND: u128 = 3;
const TALENT_KIND: u128 = 4;
const FAVORITE_KIND: u128 = 5;
const CONVERSATION_KIND: u128 = 6;
const MESSAGE_KIND: u128 = 7;

pub fn fixture_id(kind: u128, n: u128) -> Uuid {
    Uuid::from_u128((kind << 64) | n)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn users() -> Vec<UserRecord> {
    let rows = [
        ("Emma Rodriguez", "emma.rodriguez@example.com", Role::Talent, UserStatus::Active, "Los Angeles, CA", date(2024, 1, 15), 12),
        ("Sarah Johnson", "sarah@lumenstudios.com", Role::Business, UserStatus::Active, "New York, NY", date(2023, 11, 2), 8),
        ("Marcus Chen", "marcus.chen@example.com", Role::Talent, UserStatus::Pending, "San Francisco, CA", date(2024, 3, 9), 0),
        ("Olivia Brown", "olivia.b@example.com", Role::Talent, UserStatus::Active, "Miami, FL", date(2023, 8, 21), 23),
        ("Daniel Kim", "daniel@northpeak.co", Role::Business, UserStatus::Suspended, "Seattle, WA", date(2023, 5, 30), 3),
        ("Aisha Patel", "aisha.patel@example.com", Role::Talent, UserStatus::Inactive, "Chicago, IL", date(2022, 12, 11), 5),
        ("James Wilson", "james@brightframe.io", Role::Business, UserStatus::Active, "Austin, TX", date(2024, 2, 18), 14),
        ("Krystal Ops", "ops@krystal.com", Role::Admin, UserStatus::Active, "Remote", date(2022, 6, 1), 0),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (name, email, role, status, location, joined, projects))| UserRecord {
                id: fixture_id(USER_KIND, i as u128 + 1),
                name: name.to_string(),
                email: email.to_string(),
                role,
                status,
                location: location.to_string(),
                joined,
                projects,
            },
        )
        .collect()
}

pub fn jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: fixture_id(JOB_KIND, 1),
            title: "Summer Campaign Model".to_string(),
            company: "Lumen Studios".to_string(),
            description: "Outdoor lifestyle shoot for a swimwear summer campaign.".to_string(),
            category: "modeling".to_string(),
            location: "Los Angeles, CA".to_string(),
            budget: 2500,
            skills: strings(&["Runway", "Editorial", "Commercial"]),
            match_score: 95,
            posted: date(2024, 5, 2),
        },
        JobPosting {
            id: fixture_id(JOB_KIND, 2),
            title: "Voice Actor for Animated Series".to_string(),
            company: "Brightframe Animation".to_string(),
            description: "Lead character voice for a 10-episode animated pilot.".to_string(),
            category: "acting".to_string(),
            location: "Remote".to_string(),
            budget: 4800,
            skills: strings(&["Voice Acting", "Character Work"]),
            match_score: 87,
            posted: date(2024, 4, 28),
        },
        JobPosting {
            id: fixture_id(JOB_KIND, 3),
            title: "Instagram Product Launch".to_string(),
            company: "Northpeak Outdoors".to_string(),
            description: "Three sponsored posts and stories for a new hiking line.".to_string(),
            category: "influencer".to_string(),
            location: "Remote".to_string(),
            budget: 1800,
            skills: strings(&["Content Creation", "Instagram", "Outdoor"]),
            match_score: 82,
            posted: date(2024, 5, 6),
        },
        JobPosting {
            id: fixture_id(JOB_KIND, 4),
            title: "Brand Photographer".to_string(),
            company: "Lumen Studios".to_string(),
            description: "Studio product photography for a spring catalogue.".to_string(),
            category: "photography".to_string(),
            location: "New York, NY".to_string(),
            budget: 3200,
            skills: strings(&["Photography", "Lighting", "Retouching"]),
            match_score: 74,
            posted: date(2024, 4, 15),
        },
        JobPosting {
            id: fixture_id(JOB_KIND, 5),
            title: "Music Video Lead Dancer".to_string(),
            company: "Seven Hills Records".to_string(),
            description: "Choreographed lead role in an upcoming pop music video.".to_string(),
            category: "dance".to_string(),
            location: "Atlanta, GA".to_string(),
            budget: 2200,
            skills: strings(&["Dance", "Choreography"]),
            match_score: 68,
            posted: date(2024, 5, 1),
        },
        JobPosting {
            id: fixture_id(JOB_KIND, 6),
            title: "Commercial Actor".to_string(),
            company: "Northpeak Outdoors".to_string(),
            description: "On-camera talent for a 30-second national TV spot.".to_string(),
            category: "acting".to_string(),
            location: "Seattle, WA".to_string(),
            budget: 5500,
            skills: strings(&["On-Camera", "Improv", "Commercial"]),
            match_score: 87,
            posted: date(2024, 3, 30),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: fixture_id(PROJECT_KIND, 1),
            title: "Fall Collection Lookbook".to_string(),
            description: "Editorial lookbook for the fall apparel line.".to_string(),
            category: "modeling".to_string(),
            status: ProjectStatus::Active,
            budget: 12000,
            applicants: 34,
            deadline: date(2024, 8, 15),
        },
        Project {
            id: fixture_id(PROJECT_KIND, 2),
            title: "Holiday TV Spot".to_string(),
            description: "Family-oriented holiday commercial, two shoot days.".to_string(),
            category: "acting".to_string(),
            status: ProjectStatus::InReview,
            budget: 25000,
            applicants: 58,
            deadline: date(2024, 10, 1),
        },
        Project {
            id: fixture_id(PROJECT_KIND, 3),
            title: "Influencer Launch Week".to_string(),
            description: "Coordinated posts from five creators during launch week.".to_string(),
            category: "influencer".to_string(),
            status: ProjectStatus::Draft,
            budget: 8000,
            applicants: 0,
            deadline: date(2024, 7, 20),
        },
        Project {
            id: fixture_id(PROJECT_KIND, 4),
            title: "Spring Catalogue Shoot".to_string(),
            description: "Product and lifestyle photography for the spring catalogue.".to_string(),
            category: "photography".to_string(),
            status: ProjectStatus::Completed,
            budget: 6500,
            applicants: 21,
            deadline: date(2024, 3, 1),
        },
        Project {
            id: fixture_id(PROJECT_KIND, 5),
            title: "Podcast Voiceover".to_string(),
            description: "Intro and ad-read voiceover for a weekly podcast.".to_string(),
            category: "acting".to_string(),
            status: ProjectStatus::Active,
            budget: 1500,
            applicants: 12,
            deadline: date(2024, 6, 30),
        },
    ]
}

pub fn talent() -> Vec<TalentProfile> {
    vec![
        TalentProfile {
            id: fixture_id(TALENT_KIND, 1),
            name: "Emma Rodriguez".to_string(),
            title: "Fashion & Commercial Model".to_string(),
            bio: "Runway and editorial work for national brands.".to_string(),
            category: "modeling".to_string(),
            location: "Los Angeles, CA".to_string(),
            skills: strings(&["Runway", "Editorial", "Commercial"]),
            rating: 4.9,
            hourly_rate: 150,
            availability: Availability::Available,
            match_score: 95,
        },
        TalentProfile {
            id: fixture_id(TALENT_KIND, 2),
            name: "Marcus Chen".to_string(),
            title: "Voice & Screen Actor".to_string(),
            bio: "Animation voice work and on-camera commercials.".to_string(),
            category: "acting".to_string(),
            location: "San Francisco, CA".to_string(),
            skills: strings(&["Voice Acting", "On-Camera", "Improv"]),
            rating: 4.7,
            hourly_rate: 120,
            availability: Availability::Busy,
            match_score: 88,
        },
        TalentProfile {
            id: fixture_id(TALENT_KIND, 3),
            name: "Olivia Brown".to_string(),
            title: "Lifestyle Influencer".to_string(),
            bio: "Travel and wellness content with 450k followers.".to_string(),
            category: "influencer".to_string(),
            location: "Miami, FL".to_string(),
            skills: strings(&["Content Creation", "Instagram", "TikTok"]),
            rating: 4.8,
            hourly_rate: 200,
            availability: Availability::Available,
            match_score: 88,
        },
        TalentProfile {
            id: fixture_id(TALENT_KIND, 4),
            name: "Aisha Patel".to_string(),
            title: "Portrait Photographer".to_string(),
            bio: "Natural-light portraits and brand storytelling.".to_string(),
            category: "photography".to_string(),
            location: "Chicago, IL".to_string(),
            skills: strings(&["Photography", "Lighting", "Retouching"]),
            rating: 4.6,
            hourly_rate: 95,
            availability: Availability::Unavailable,
            match_score: 72,
        },
        TalentProfile {
            id: fixture_id(TALENT_KIND, 5),
            name: "Leo Martins".to_string(),
            title: "Dancer & Choreographer".to_string(),
            bio: "Music video and stage choreography.".to_string(),
            category: "dance".to_string(),
            location: "Atlanta, GA".to_string(),
            skills: strings(&["Dance", "Choreography", "Hip Hop"]),
            rating: 4.5,
            hourly_rate: 85,
            availability: Availability::Available,
            match_score: 79,
        },
    ]
}

pub fn favorites() -> Vec<Favorite> {
    let talent = talent();
    let notes = [
        (0usize, "Perfect for the fall lookbook", date(2024, 4, 20), 95u8),
        (2, "Strong engagement numbers", date(2024, 5, 3), 88),
        (4, "Keep in mind for the music campaign", date(2024, 2, 11), 79),
    ];

    notes
        .into_iter()
        .enumerate()
        .filter_map(|(i, (talent_index, note, saved, match_score))| {
            let profile = talent.get(talent_index)?;
            Some(Favorite {
                id: fixture_id(FAVORITE_KIND, i as u128 + 1),
                talent_id: profile.id,
                name: profile.name.clone(),
                title: profile.title.clone(),
                category: profile.category.clone(),
                note: note.to_string(),
                match_score,
                saved,
            })
        })
        .collect()
}

/// Seed conversations and their messages, timestamped relative to `now`.
pub fn conversations(now: DateTime<Utc>) -> Vec<(Conversation, Vec<Message>)> {
    let threads: [(&[&str], &[(&str, &str, bool)], i64); 3] = [
        (
            &["Business Account", "Emma Rodriguez"],
            &[
                ("Business Account", "Hi Emma, are you free for a lookbook shoot in August?", true),
                ("Emma Rodriguez", "Yes! Can you share the mood board?", false),
            ],
            30,
        ),
        (
            &["Business Account", "Marcus Chen"],
            &[
                ("Marcus Chen", "Thanks for the callback, sending my reel now.", true),
                ("Business Account", "Received, we'll review it this week.", true),
            ],
            180,
        ),
        (
            &["Talent Profile", "Lumen Studios"],
            &[
                ("Lumen Studios", "We loved your portfolio. Interested in our summer campaign?", false),
                ("Lumen Studios", "Budget details are in the posting.", false),
            ],
            60,
        ),
    ];

    let mut message_counter = 0u128;
    threads
        .iter()
        .enumerate()
        .map(|(i, (participants, lines, minutes_ago))| {
            let conversation_id = fixture_id(CONVERSATION_KIND, i as u128 + 1);
            let started = now - Duration::minutes(*minutes_ago);

            let messages: Vec<Message> = lines
                .iter()
                .enumerate()
                .map(|(j, (sender, text, read))| {
                    message_counter += 1;
                    Message {
                        id: fixture_id(MESSAGE_KIND, message_counter),
                        conversation_id,
                        sender: sender.to_string(),
                        text: text.to_string(),
                        timestamp: started + Duration::minutes(j as i64 * 5),
                        read: *read,
                    }
                })
                .collect();

            let conversation = Conversation {
                id: conversation_id,
                participants: strings(participants),
                last_message: messages.last().map(|m| m.text.clone()).unwrap_or_default(),
                unread: messages.iter().filter(|m| !m.read).count() as u32,
                updated_at: messages.last().map(|m| m.timestamp).unwrap_or(started),
            };
            (conversation, messages)
        })
        .collect()
}
