use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compact `{id, name}` reference used by the backend's `*_details` fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    MunicipalityAdmin,
    ClubAdmin,
    YouthMember,
    Guardian,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::MunicipalityAdmin,
        Role::ClubAdmin,
        Role::YouthMember,
        Role::Guardian,
    ];

    pub fn from_query_value(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_query_value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::MunicipalityAdmin => "Municipality Admin",
            Role::ClubAdmin => "Club Admin",
            Role::YouthMember => "Youth Member",
            Role::Guardian => "Guardian",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::MunicipalityAdmin => "MUNICIPALITY_ADMIN",
            Role::ClubAdmin => "CLUB_ADMIN",
            Role::YouthMember => "YOUTH_MEMBER",
            Role::Guardian => "GUARDIAN",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Unverified,
}

impl VerificationStatus {
    pub const ALL: [VerificationStatus; 3] = [
        VerificationStatus::Verified,
        VerificationStatus::Pending,
        VerificationStatus::Unverified,
    ];

    pub fn as_query_value(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "VERIFIED",
            VerificationStatus::Pending => "PENDING",
            VerificationStatus::Unverified => "UNVERIFIED",
        }
    }

    pub fn from_query_value(value: &str) -> Option<VerificationStatus> {
        VerificationStatus::ALL
            .into_iter()
            .find(|s| s.as_query_value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Pending => "Pending",
            VerificationStatus::Unverified => "Unverified",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub role: Role,
    pub assigned_club: Option<i64>,
    pub assigned_club_details: Option<NamedRef>,
    pub assigned_municipality: Option<i64>,
    pub assigned_municipality_details: Option<NamedRef>,
    pub verification_status: Option<VerificationStatus>,
    pub legal_gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub grade: Option<i32>,
    #[serde(default)]
    pub interests: Vec<i64>,
    #[serde(default)]
    pub interests_details: Vec<NamedRef>,
    pub avatar: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/partial-update payload for `/users/`. `None` fields are omitted so
/// PATCH bodies only carry what changed.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_club: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_municipality: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<i64>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostType {
    Text,
    Image,
    Video,
}

impl PostType {
    pub const ALL: [PostType; 3] = [PostType::Text, PostType::Image, PostType::Video];

    pub fn as_query_value(&self) -> &'static str {
        match self {
            PostType::Text => "TEXT",
            PostType::Image => "IMAGE",
            PostType::Video => "VIDEO",
        }
    }

    pub fn from_query_value(value: &str) -> Option<PostType> {
        PostType::ALL.into_iter().find(|t| t.as_query_value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostType::Text => "Text",
            PostType::Image => "Image",
            PostType::Video => "Video",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
    Archived,
}

impl PostStatus {
    pub const ALL: [PostStatus; 4] = [
        PostStatus::Draft,
        PostStatus::Scheduled,
        PostStatus::Published,
        PostStatus::Archived,
    ];

    pub fn as_query_value(&self) -> &'static str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Scheduled => "SCHEDULED",
            PostStatus::Published => "PUBLISHED",
            PostStatus::Archived => "ARCHIVED",
        }
    }

    pub fn from_query_value(value: &str) -> Option<PostStatus> {
        PostStatus::ALL
            .into_iter()
            .find(|s| s.as_query_value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Scheduled => "Scheduled",
            PostStatus::Published => "Published",
            PostStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    /// Rich-text HTML produced by the external editor component.
    pub content: String,
    pub post_type: PostType,
    pub status: PostStatus,
    #[serde(default)]
    pub is_global: bool,
    #[serde(default)]
    pub target_municipalities: Vec<i64>,
    #[serde(default)]
    pub target_municipalities_details: Vec<NamedRef>,
    #[serde(default)]
    pub target_clubs: Vec<i64>,
    #[serde(default)]
    pub target_clubs_details: Vec<NamedRef>,
    #[serde(default)]
    pub target_groups: Vec<i64>,
    pub age_from: Option<i32>,
    pub age_to: Option<i32>,
    #[serde(default)]
    pub grades: Vec<i32>,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub interests: Vec<i64>,
    #[serde(default)]
    pub custom_fields: HashMap<String, String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PostPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<PostType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_municipalities: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_clubs: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_groups: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_to: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grades: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PostComment {
    pub id: i64,
    pub post: i64,
    pub author_details: Option<NamedRef>,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurringType {
    Forever,
    Weeks,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub resource: i64,
    pub resource_details: Option<NamedRef>,
    pub user: i64,
    pub user_details: Option<NamedRef>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    #[serde(default)]
    pub is_recurring: bool,
    pub recurring_type: Option<RecurringType>,
    pub recurring_weeks: Option<u32>,
    #[serde(default)]
    pub participants: Vec<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewBooking {
    pub resource: i64,
    pub user: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_type: Option<RecurringType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_weeks: Option<u32>,
    #[serde(default)]
    pub participants: Vec<i64>,
}

/// Scope selector for cancelling one instance of a recurring series versus
/// the instance plus everything after it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancelScope {
    Single,
    ThisAndFuture,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingResource {
    pub id: i64,
    pub name: String,
    pub club: Option<i64>,
    pub club_details: Option<NamedRef>,
    pub description: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
}

/// One bookable window returned by `/bookings/resources/{id}/availability/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AvailabilitySlot {
    pub id: i64,
    pub resource: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub municipality: Option<i64>,
    pub municipality_details: Option<NamedRef>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub member_count: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ClubPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Municipality {
    pub id: i64,
    pub name: String,
    pub country: Option<i64>,
    pub country_details: Option<NamedRef>,
    #[serde(default)]
    pub club_count: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Interest {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub club: Option<i64>,
    #[serde(default)]
    pub member_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CustomField {
    pub id: i64,
    pub name: String,
    pub field_type: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Visit {
    pub id: i64,
    pub user: i64,
    pub user_details: Option<NamedRef>,
    pub club: i64,
    pub club_details: Option<NamedRef>,
    pub check_in_at: DateTime<Utc>,
    pub check_out_at: Option<DateTime<Utc>>,
}

/// Result of a QR check-in attempt, already classified on the server side so
/// the scanner view only has to switch on the variant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckinOutcome {
    Success {
        member_name: String,
        club_name: String,
    },
    InvalidQr {
        message: String,
    },
    ClubNotFound,
    ClubClosed {
        next_opening: Option<String>,
    },
    Error {
        message: String,
    },
}
