//! Compiled-in demo accounts. These stand in for real authentication: passwords
//! are compared as plaintext, exactly and case-sensitively.

use uuid::Uuid;

use crate::session::models::{Role, Session};

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub display_name: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CredentialRecord {
    pub id: Uuid,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub profile: Profile,
}

pub const ADMIN_ID: Uuid = Uuid::from_u128(0x6b72_7973_7461_6c00_0000_0000_0000_0001);
pub const BUSINESS_ID: Uuid = Uuid::from_u128(0x6b72_7973_7461_6c00_0000_0000_0000_0002);
pub const TALENT_ID: Uuid = Uuid::from_u128(0x6b72_7973_7461_6c00_0000_0000_0000_0003);

pub const DEMO_ACCOUNTS: [CredentialRecord; 3] = [
    CredentialRecord {
        id: ADMIN_ID,
        email: "admin@krystal.com",
        password: "admin123",
        role: Role::Admin,
        profile: Profile {
            display_name: "Admin User",
            avatar: "/avatars/admin.png",
        },
    },
    CredentialRecord {
        id: BUSINESS_ID,
        email: "business@example.com",
        password: "business123",
        role: Role::Business,
        profile: Profile {
            display_name: "Business Account",
            avatar: "/avatars/business.png",
        },
    },
    CredentialRecord {
        id: TALENT_ID,
        email: "talent@example.com",
        password: "talent123",
        role: Role::Talent,
        profile: Profile {
            display_name: "Talent Profile",
            avatar: "/avatars/talent.png",
        },
    },
];

impl CredentialRecord {
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id,
            email: self.email.to_string(),
            display_name: self.profile.display_name.to_string(),
            role: self.role,
            avatar: self.profile.avatar.to_string(),
        }
    }
}

/// Exact match on both fields. No trimming, no case folding.
pub fn find_by_credentials(email: &str, password: &str) -> Option<&'static CredentialRecord> {
    DEMO_ACCOUNTS
        .iter()
        .find(|record| record.email == email && record.password == password)
}

pub fn find_by_id(id: Uuid) -> Option<&'static CredentialRecord> {
    DEMO_ACCOUNTS.iter().find(|record| record.id == id)
}
