//! Consistent test data for portal tests

use chrono::NaiveDate;
use portal::{HotelSelection, MealSelection, PaymentDetails, RegistrationForm};
use shared::{Gender, MealPlan, PaymentMethod, RoomType, ShirtSize, SkillLevel};

pub struct TestFixtures;

impl TestFixtures {
    pub const PLAYER_EMAIL: &'static str = "ana@example.com";
    pub const OTHER_EMAIL: &'static str = "bruno@example.com";
    pub const ADMIN_EMAIL: &'static str = "admin@tournament.com";
    pub const ADMIN_PASSWORD: &'static str = "admin123";

    pub fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    /// A registration form that passes every step
    pub fn registration_form(email: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Ana Lima".to_string(),
            email: email.to_string(),
            phone: "555-0100".to_string(),
            date_of_birth: "1995-04-02".to_string(),
            gender: Some(Gender::Female),
            club_name: Some("Riverside Club".to_string()),
            emergency_name: "Rui Lima".to_string(),
            emergency_phone: "555-0101".to_string(),
            emergency_relationship: "Brother".to_string(),
            tournament_category: "singles-women".to_string(),
            skill_level: Some(SkillLevel::Advanced),
            shirt_size: Some(ShirtSize::M),
            ..RegistrationForm::default()
        }
    }

    /// Grand Plaza double room for two nights (2 x 180)
    pub fn hotel_selection() -> HotelSelection {
        HotelSelection {
            hotel_id: "grand-plaza".to_string(),
            room_type: Some(RoomType::Double),
            check_in: Some(Self::date("2025-07-01")),
            check_out: Some(Self::date("2025-07-03")),
            guests: 2,
            special_requests: Some("Late check-in".to_string()),
        }
    }

    /// Full board for two days (2 x 50)
    pub fn meal_selection() -> MealSelection {
        MealSelection {
            plan: Some(MealPlan::FullBoard),
            start_date: Some(Self::date("2025-07-01")),
            end_date: Some(Self::date("2025-07-02")),
            dietary_preferences: Some("Vegetarian".to_string()),
        }
    }

    pub fn card_payment() -> PaymentDetails {
        PaymentDetails::card("4242 4242 4242 4242", "12/30", "123", "Ana Lima")
    }

    pub fn cash_payment() -> PaymentDetails {
        PaymentDetails::method(PaymentMethod::Cash)
    }
}
