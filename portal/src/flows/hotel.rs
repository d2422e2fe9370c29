//! Hotel add-on booking
//!
//! The player picks a hotel and room type from the catalog, a date range and
//! a guest count. The quote multiplies the room's nightly price by the
//! nights in the range; a range of zero or fewer nights is an incomplete
//! selection and is never booked.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{is_blank, non_empty, BookingOutcome, NextStage};
use crate::core::catalog::Catalog;
use crate::core::pricing;
use crate::error::{PortalError, PortalResult};
use crate::store::AppStore;
use crate::traits::KeyValueStore;
use shared::{component_info, BookingStatus, Component, HotelBooking, RecordId, RecordKind, RoomType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelSelection {
    pub hotel_id: String,
    pub room_type: Option<RoomType>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub special_requests: Option<String>,
}

impl Default for HotelSelection {
    fn default() -> Self {
        Self {
            hotel_id: String::new(),
            room_type: None,
            check_in: None,
            check_out: None,
            guests: 1,
            special_requests: None,
        }
    }
}

impl HotelSelection {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("hotel_id", is_blank(&self.hotel_id)),
            ("room_type", self.room_type.is_none()),
            ("check_in", self.check_in.is_none()),
            ("check_out", self.check_out.is_none()),
            ("guests", self.guests == 0),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect()
    }
}

/// Price breakdown shown next to the booking form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelQuote {
    pub hotel_name: String,
    pub room_name: String,
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub nights: i64,
    /// Zero until the date range covers at least one night
    pub total_amount: f64,
}

impl HotelQuote {
    pub fn is_complete(&self) -> bool {
        self.nights > 0
    }
}

/// Quote whatever has been picked so far
///
/// Needs a hotel and room; without both dates the quote covers zero nights.
pub fn quote(catalog: &Catalog, selection: &HotelSelection) -> PortalResult<HotelQuote> {
    let hotel = catalog.hotel(&selection.hotel_id)?;
    let room_type = selection
        .room_type
        .ok_or_else(|| PortalError::incomplete(["room_type"]))?;
    let room = hotel
        .room(room_type)
        .ok_or_else(|| PortalError::invalid_selection("room_type", room_type.as_str()))?;

    let nights = match (selection.check_in, selection.check_out) {
        (Some(check_in), Some(check_out)) => pricing::nights(check_in, check_out),
        _ => 0,
    };
    let total_amount = if nights > 0 {
        pricing::hotel_total(room.price, nights)
    } else {
        0.0
    };

    Ok(HotelQuote {
        hotel_name: hotel.name.to_string(),
        room_name: room.name.to_string(),
        room_type,
        price_per_night: room.price,
        nights,
        total_amount,
    })
}

/// Book the stay for the logged-in player
pub async fn book<K: KeyValueStore>(
    store: &AppStore<K>,
    catalog: &Catalog,
    selection: &HotelSelection,
) -> PortalResult<BookingOutcome<HotelBooking>> {
    let player = store.require_player().await?;

    let missing = selection.missing_fields();
    if !missing.is_empty() {
        return Err(PortalError::incomplete(missing));
    }

    let quote = quote(catalog, selection)?;
    let (Some(check_in), Some(check_out)) = (selection.check_in, selection.check_out) else {
        return Err(PortalError::incomplete(["check_in", "check_out"]));
    };
    if !quote.is_complete() {
        return Err(PortalError::incomplete(["check_out"]));
    }

    let booking = HotelBooking {
        id: RecordId::generate(RecordKind::HotelBooking),
        player_id: player.id,
        hotel_name: quote.hotel_name,
        room_type: quote.room_type,
        check_in,
        check_out,
        number_of_guests: selection.guests,
        special_requests: non_empty(selection.special_requests.as_deref()),
        price_per_night: quote.price_per_night,
        total_amount: quote.total_amount,
        status: BookingStatus::Confirmed,
        created_at: Utc::now(),
    };

    store.add_hotel_booking(booking.clone()).await?;
    component_info!(
        Component::Hotel,
        "🏨 Booked {} {} for {} nights ({})",
        booking.hotel_name,
        booking.room_type,
        quote.nights,
        booking.id
    );

    Ok(BookingOutcome {
        record: booking,
        next_stage: NextStage::BookMeals,
    })
}

/// Hotel booking is optional; skipping goes straight to meals
pub fn skip() -> NextStage {
    NextStage::BookMeals
}
