//! Fixed tournament offer: hotels, meal plans, categories and the entry fee

use serde::Serialize;

use crate::error::{PortalError, PortalResult};
use shared::{MealPlan, RoomType};

/// Flat tournament entry fee
pub const REGISTRATION_FEE: f64 = 150.0;

/// Currency every amount is quoted in
pub const CURRENCY: &str = "USD";

#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub room_type: RoomType,
    pub name: &'static str,
    pub price: f64,
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    pub id: &'static str,
    pub name: &'static str,
    pub rating: u8,
    pub distance: &'static str,
    pub amenities: &'static [&'static str],
    pub rooms: [Room; 3],
}

impl Hotel {
    pub fn room(&self, room_type: RoomType) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_type == room_type)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MealPlanOffer {
    pub plan: MealPlan,
    pub name: &'static str,
    pub description: &'static str,
    /// Price per day
    pub price: f64,
    pub includes: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

/// Everything a player can pick from
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub registration_fee: f64,
    pub currency: &'static str,
    pub categories: Vec<Category>,
    pub hotels: Vec<Hotel>,
    pub meal_plans: Vec<MealPlanOffer>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The tournament's published offer
    pub fn standard() -> Self {
        Self {
            registration_fee: REGISTRATION_FEE,
            currency: CURRENCY,
            categories: vec![
                Category { id: "singles-men", name: "Men's Singles" },
                Category { id: "singles-women", name: "Women's Singles" },
                Category { id: "doubles-men", name: "Men's Doubles" },
                Category { id: "doubles-women", name: "Women's Doubles" },
                Category { id: "doubles-mixed", name: "Mixed Doubles" },
            ],
            hotels: vec![
                Hotel {
                    id: "grand-plaza",
                    name: "Grand Plaza Hotel",
                    rating: 5,
                    distance: "0.5 km from venue",
                    amenities: &["Free WiFi", "Gym", "Restaurant", "Parking"],
                    rooms: [
                        Room { room_type: RoomType::Single, name: "Single Room", price: 120.0, capacity: 1 },
                        Room { room_type: RoomType::Double, name: "Double Room", price: 180.0, capacity: 2 },
                        Room { room_type: RoomType::Suite, name: "Executive Suite", price: 300.0, capacity: 3 },
                    ],
                },
                Hotel {
                    id: "sports-inn",
                    name: "Sports Inn & Suites",
                    rating: 4,
                    distance: "1.2 km from venue",
                    amenities: &["Free WiFi", "Gym", "Breakfast", "Parking"],
                    rooms: [
                        Room { room_type: RoomType::Single, name: "Standard Single", price: 90.0, capacity: 1 },
                        Room { room_type: RoomType::Double, name: "Standard Double", price: 140.0, capacity: 2 },
                        Room { room_type: RoomType::Suite, name: "Family Suite", price: 220.0, capacity: 4 },
                    ],
                },
                Hotel {
                    id: "comfort-stay",
                    name: "Comfort Stay Hotel",
                    rating: 3,
                    distance: "2.0 km from venue",
                    amenities: &["Free WiFi", "Breakfast", "Parking"],
                    rooms: [
                        Room { room_type: RoomType::Single, name: "Economy Single", price: 70.0, capacity: 1 },
                        Room { room_type: RoomType::Double, name: "Economy Double", price: 110.0, capacity: 2 },
                        Room { room_type: RoomType::Suite, name: "Deluxe Room", price: 160.0, capacity: 3 },
                    ],
                },
            ],
            meal_plans: vec![
                MealPlanOffer {
                    plan: MealPlan::Breakfast,
                    name: "Breakfast Only",
                    description: "Start your day right with a hearty breakfast",
                    price: 15.0,
                    includes: &["Continental breakfast", "Fresh juice", "Coffee/Tea", "Seasonal fruits"],
                },
                MealPlanOffer {
                    plan: MealPlan::Lunch,
                    name: "Lunch Only",
                    description: "Nutritious lunch to fuel your performance",
                    price: 20.0,
                    includes: &["Main course", "Side dish", "Salad", "Beverage"],
                },
                MealPlanOffer {
                    plan: MealPlan::Dinner,
                    name: "Dinner Only",
                    description: "Delicious dinner after a day of competition",
                    price: 25.0,
                    includes: &["Appetizer", "Main course", "Dessert", "Beverage"],
                },
                MealPlanOffer {
                    plan: MealPlan::FullBoard,
                    name: "Full Board",
                    description: "All meals included - best value!",
                    price: 50.0,
                    includes: &["Breakfast", "Lunch", "Dinner", "Snacks", "All beverages"],
                },
            ],
        }
    }

    pub fn hotel(&self, hotel_id: &str) -> PortalResult<&Hotel> {
        self.hotels
            .iter()
            .find(|h| h.id == hotel_id)
            .ok_or_else(|| PortalError::invalid_selection("hotel", hotel_id))
    }

    pub fn meal_plan(&self, plan: MealPlan) -> PortalResult<&MealPlanOffer> {
        self.meal_plans
            .iter()
            .find(|p| p.plan == plan)
            .ok_or_else(|| PortalError::invalid_selection("meal_plan", plan.as_str()))
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_hotel_offers_every_room_type() {
        let catalog = Catalog::standard();
        for hotel in &catalog.hotels {
            for room_type in RoomType::ALL {
                assert!(hotel.room(*room_type).is_some(), "{} lacks {}", hotel.id, room_type);
            }
        }
    }

    #[test]
    fn test_every_meal_plan_has_an_offer() {
        let catalog = Catalog::standard();
        for plan in MealPlan::ALL {
            assert!(catalog.meal_plan(*plan).is_ok());
        }
        assert_eq!(catalog.meal_plan(MealPlan::FullBoard).unwrap().price, 50.0);
    }

    #[test]
    fn test_unknown_hotel_is_invalid_selection() {
        let catalog = Catalog::standard();
        assert!(matches!(
            catalog.hotel("motel-6"),
            Err(PortalError::InvalidSelection { .. })
        ));
        assert_eq!(catalog.hotel("grand-plaza").unwrap().room(RoomType::Double).unwrap().price, 180.0);
    }

    #[test]
    fn test_category_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.category("doubles-mixed").unwrap().name, "Mixed Doubles");
        assert!(catalog.category("triples").is_none());
    }
}
