//! Meal plan add-on booking

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{non_empty, BookingOutcome, NextStage};
use crate::core::catalog::Catalog;
use crate::core::pricing;
use crate::error::{PortalError, PortalResult};
use crate::store::AppStore;
use crate::traits::KeyValueStore;
use shared::{component_info, BookingStatus, Component, MealBooking, MealPlan, RecordId, RecordKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealSelection {
    pub plan: Option<MealPlan>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub dietary_preferences: Option<String>,
}

impl MealSelection {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("plan", self.plan.is_none()),
            ("start_date", self.start_date.is_none()),
            ("end_date", self.end_date.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealQuote {
    pub plan: MealPlan,
    pub plan_name: String,
    pub price_per_day: f64,
    /// Inclusive day count; zero until both dates are set and ordered
    pub days: i64,
    pub meals_per_day: u32,
    pub total_meals: u32,
    pub total_amount: f64,
}

impl MealQuote {
    pub fn is_complete(&self) -> bool {
        self.days > 0
    }
}

pub fn quote(catalog: &Catalog, selection: &MealSelection) -> PortalResult<MealQuote> {
    let plan = selection.plan.ok_or_else(|| PortalError::incomplete(["plan"]))?;
    let offer = catalog.meal_plan(plan)?;

    let days = match (selection.start_date, selection.end_date) {
        (Some(start), Some(end)) => pricing::days(start, end).max(0),
        _ => 0,
    };
    let meals_per_day = pricing::meals_per_day(plan);

    Ok(MealQuote {
        plan,
        plan_name: offer.name.to_string(),
        price_per_day: offer.price,
        days,
        meals_per_day,
        total_meals: u32::try_from(days).unwrap_or(0) * meals_per_day,
        total_amount: pricing::meal_total(offer.price, days),
    })
}

/// Book the plan for the logged-in player
pub async fn book<K: KeyValueStore>(
    store: &AppStore<K>,
    catalog: &Catalog,
    selection: &MealSelection,
) -> PortalResult<BookingOutcome<MealBooking>> {
    let player = store.require_player().await?;

    let missing = selection.missing_fields();
    if !missing.is_empty() {
        return Err(PortalError::incomplete(missing));
    }

    let quote = quote(catalog, selection)?;
    let (Some(start_date), Some(end_date)) = (selection.start_date, selection.end_date) else {
        return Err(PortalError::incomplete(["start_date", "end_date"]));
    };
    if !quote.is_complete() {
        return Err(PortalError::incomplete(["end_date"]));
    }

    let booking = MealBooking {
        id: RecordId::generate(RecordKind::MealBooking),
        player_id: player.id,
        meal_plan: quote.plan,
        start_date,
        end_date,
        dietary_preferences: non_empty(selection.dietary_preferences.as_deref()),
        number_of_meals: quote.total_meals,
        price_per_meal: quote.price_per_day,
        total_amount: quote.total_amount,
        status: BookingStatus::Confirmed,
        created_at: Utc::now(),
    };

    store.add_meal_booking(booking.clone()).await?;
    component_info!(
        Component::Meals,
        "🍽️ Booked {} for {} days ({})",
        booking.meal_plan,
        quote.days,
        booking.id
    );

    Ok(BookingOutcome {
        record: booking,
        next_stage: NextStage::Checkout,
    })
}

/// Meals are optional too
pub fn skip() -> NextStage {
    NextStage::Checkout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn selection(plan: MealPlan) -> MealSelection {
        MealSelection {
            plan: Some(plan),
            start_date: Some(date("2025-07-01")),
            end_date: Some(date("2025-07-02")),
            dietary_preferences: None,
        }
    }

    #[test]
    fn test_full_board_quote() {
        let quote = quote(&Catalog::standard(), &selection(MealPlan::FullBoard)).unwrap();
        assert_eq!(quote.days, 2);
        assert_eq!(quote.meals_per_day, 3);
        assert_eq!(quote.total_meals, 6);
        assert_eq!(quote.total_amount, 100.0);
    }

    #[test]
    fn test_single_day_counts_once() {
        let mut same_day = selection(MealPlan::Lunch);
        same_day.end_date = same_day.start_date;

        let quote = quote(&Catalog::standard(), &same_day).unwrap();
        assert_eq!(quote.days, 1);
        assert_eq!(quote.total_meals, 1);
        assert_eq!(quote.total_amount, 20.0);
    }

    #[test]
    fn test_end_before_start_is_incomplete() {
        let mut reversed = selection(MealPlan::Dinner);
        reversed.end_date = Some(date("2025-06-25"));

        let quote = quote(&Catalog::standard(), &reversed).unwrap();
        assert_eq!(quote.days, 0);
        assert_eq!(quote.total_amount, 0.0);
        assert!(!quote.is_complete());
    }

    #[test]
    fn test_missing_plan() {
        let empty = MealSelection::default();
        assert_eq!(empty.missing_fields(), vec!["plan", "start_date", "end_date"]);
        assert!(matches!(
            quote(&Catalog::standard(), &empty),
            Err(PortalError::IncompleteForm { .. })
        ));
    }
}
