//! Core shared types and identifiers
//!
//! Every record here is persisted as part of a JSON collection, so field
//! names are camelCase to stay readable by the browser-era data files.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Identifier for any persisted record (players, bookings, payments)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh id carrying the record-kind prefix
    pub fn generate(kind: RecordKind) -> Self {
        Self(format!("{}_{}", kind.prefix(), Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Kind of record an id is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Player,
    Guest,
    Registration,
    HotelBooking,
    MealBooking,
    Payment,
    Transaction,
}

impl RecordKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            RecordKind::Player => "player",
            RecordKind::Guest => "temp",
            RecordKind::Registration => "reg",
            RecordKind::HotelBooking => "hotel",
            RecordKind::MealBooking => "meal",
            RecordKind::Payment => "pay",
            RecordKind::Transaction => "TXN",
        }
    }
}

/// Declares a lowercase string enum with `Display` and `FromStr` that agree
/// with its serde representation.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SharedError;

            fn from_str(s: &str) -> SharedResult<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(SharedError::UnknownVariant {
                        kind: stringify!($name).to_string(),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    pub enum Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

string_enum! {
    pub enum SkillLevel {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
        Professional => "professional",
    }
}

string_enum! {
    pub enum ShirtSize {
        Xs => "XS",
        S => "S",
        M => "M",
        L => "L",
        Xl => "XL",
        Xxl => "XXL",
    }
}

string_enum! {
    /// Lifecycle of registrations and bookings
    pub enum BookingStatus {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
    }
}

string_enum! {
    pub enum RoomType {
        Single => "single",
        Double => "double",
        Suite => "suite",
    }
}

string_enum! {
    pub enum MealPlan {
        Breakfast => "breakfast",
        Lunch => "lunch",
        Dinner => "dinner",
        FullBoard => "full-board",
    }
}

string_enum! {
    pub enum PaymentMethod {
        Card => "card",
        BankTransfer => "bank_transfer",
        Cash => "cash",
    }
}

string_enum! {
    pub enum PaymentStatus {
        Pending => "pending",
        Completed => "completed",
        Failed => "failed",
        Refunded => "refunded",
    }
}

string_enum! {
    /// What a payment line item charges for
    pub enum LineItemKind {
        Registration => "registration",
        Hotel => "hotel",
        Meals => "meals",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// A registered (or guest) tournament player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: RecordId,
    pub email: String,
    pub name: String,
    pub phone: String,
    /// Free-form, empty for guests and the admin identity
    pub date_of_birth: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_name: Option<String>,
    pub emergency_contact: EmergencyContact,
    pub created_at: DateTime<Utc>,
}

/// Profile fields supplied at sign-up; id and timestamp are assigned on register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: Gender,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub coach_name: Option<String>,
    pub emergency_contact: EmergencyContact,
}

impl PlayerProfile {
    pub fn into_player(self, id: RecordId, created_at: DateTime<Utc>) -> Player {
        Player {
            id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            team_name: self.team_name,
            club_name: self.club_name,
            coach_name: self.coach_name,
            emergency_contact: self.emergency_contact,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RecordId,
    pub player_id: RecordId,
    pub tournament_category: String,
    pub skill_level: SkillLevel,
    #[serde(rename = "tshirtSize")]
    pub shirt_size: ShirtSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    pub amount: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelBooking {
    pub id: RecordId,
    pub player_id: RecordId,
    pub hotel_name: String,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub price_per_night: f64,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealBooking {
    pub id: RecordId,
    pub player_id: RecordId,
    pub meal_plan: MealPlan,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<String>,
    pub number_of_meals: u32,
    /// Plan price per day, kept under its historical name
    pub price_per_meal: f64,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of one charged component at checkout time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "type")]
    pub kind: LineItemKind,
    pub id: RecordId,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: RecordId,
    pub player_id: RecordId,
    pub amount: f64,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
}

/// Who is logged in and whether they hold admin privileges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub player: Player,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_and_prefixed() {
        let ids: std::collections::HashSet<RecordId> =
            (0..1000).map(|_| RecordId::generate(RecordKind::HotelBooking)).collect();

        assert_eq!(ids.len(), 1000, "Ids generated back to back must not collide");
        assert!(ids.iter().all(|id| id.as_str().starts_with("hotel_")));
    }

    #[test]
    fn test_string_enums_match_persisted_spelling() {
        assert_eq!(serde_json::to_string(&MealPlan::FullBoard).unwrap(), "\"full-board\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(), "\"bank_transfer\"");
        assert_eq!(serde_json::to_string(&ShirtSize::Xxl).unwrap(), "\"XXL\"");
        assert_eq!("full-board".parse::<MealPlan>().unwrap(), MealPlan::FullBoard);
        assert!("brunch".parse::<MealPlan>().is_err());
    }

    #[test]
    fn test_registration_uses_browser_field_names() {
        let registration = Registration {
            id: RecordId::from("reg_1"),
            player_id: RecordId::from("player_1"),
            tournament_category: "singles-men".to_string(),
            skill_level: SkillLevel::Advanced,
            shirt_size: ShirtSize::M,
            medical_conditions: None,
            dietary_restrictions: None,
            amount: 150.0,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["playerId"], "player_1");
        assert_eq!(value["tshirtSize"], "M");
        assert_eq!(value["tournamentCategory"], "singles-men");
        assert!(value.get("medicalConditions").is_none());
    }
}
