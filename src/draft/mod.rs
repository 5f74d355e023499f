//! Client-owned view model of an event being edited.
//!
//! A draft is built from the server's event detail payload, mutated in
//! place, and only ever reaches the server again through
//! [`crate::submission`]. Nothing here touches the network.

pub mod media;
pub mod tags;

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::error::DraftError;
use crate::models::{form_string, value_to_f64, EventDetail, RemoteId, ServerTicket};

pub use media::{
    DeletionLedger, LocalFile, MediaEditor, MediaItemDraft, MediaKind, MediaSource, PendingUpload,
};
pub use tags::{remove_tag, TagInput, TagKey};

const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub tags: Vec<String>,
    pub tiers: Vec<TicketTierDraft>,
    pub media: MediaEditor,
}

/// One ticket type. Addressed by position; `id` is present only for tiers the server already knows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketTierDraft {
    pub id: Option<RemoteId>,
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

impl TicketTierDraft {
    fn from_server(ticket: &ServerTicket) -> Self {
        Self {
            id: ticket.id.clone(),
            name: ticket.title.clone(),
            price: ticket.price.as_ref().map(form_string).unwrap_or_default(),
            quantity: tier_quantity(ticket),
            description: ticket.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierField {
    Name,
    Price,
    Quantity,
    Description,
}

impl FromStr for TierField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "type" => Ok(TierField::Name),
            "price" => Ok(TierField::Price),
            "quantity" | "qty" => Ok(TierField::Quantity),
            "description" => Ok(TierField::Description),
            other => Err(format!("unknown ticket field: {other}")),
        }
    }
}

impl EventDraft {
    /// Builds a draft from `GET /user/host/events/{id}`.
    ///
    /// Timestamps are split into date and time strings in `tz`. With no server
    /// tiers the draft starts with one blank tier for the host to fill in.
    pub fn hydrate(detail: &EventDetail, tz: Tz) -> Result<Self, DraftError> {
        let event = &detail.event;
        let (start_date, start_time) = split_optional(event.start_date.as_deref(), tz)?;
        let (end_date, end_time) = split_optional(event.end_date.as_deref(), tz)?;

        let tiers = if detail.tickets.is_empty() {
            vec![TicketTierDraft::default()]
        } else {
            detail.tickets.iter().map(TicketTierDraft::from_server).collect()
        };

        Ok(Self {
            title: event.title.clone(),
            category: event.category.clone(),
            description: event.description.clone(),
            start_date,
            start_time,
            end_date,
            end_time,
            location: event.location.clone(),
            lat: event.lat.as_ref().and_then(non_zero_coordinate),
            lng: event.lng.as_ref().and_then(non_zero_coordinate),
            tags: event.tags.clone(),
            tiers,
            media: MediaEditor::from_server(&event.media, event.image_url.as_deref()),
        })
    }

    pub fn add_tier(&mut self) {
        self.tiers.push(TicketTierDraft::default());
    }

    pub fn remove_tier(&mut self, index: usize) -> Result<TicketTierDraft, DraftError> {
        if index >= self.tiers.len() {
            return Err(DraftError::TierOutOfRange(index));
        }
        Ok(self.tiers.remove(index))
    }

    pub fn update_tier(
        &mut self,
        index: usize,
        field: TierField,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        let tier = self
            .tiers
            .get_mut(index)
            .ok_or(DraftError::TierOutOfRange(index))?;
        let value = value.into();
        match field {
            TierField::Name => tier.name = value,
            TierField::Price => tier.price = value,
            TierField::Quantity => tier.quantity = value,
            TierField::Description => tier.description = value,
        }
        Ok(())
    }
}

fn tier_quantity(ticket: &ServerTicket) -> String {
    let primary = ticket
        .quantity
        .as_ref()
        .map(form_string)
        .filter(|qty| !qty.trim().is_empty() && qty.trim() != "0");
    primary
        .or_else(|| ticket.available_count.as_ref().map(form_string))
        .unwrap_or_default()
}

fn non_zero_coordinate(value: &serde_json::Value) -> Option<f64> {
    value_to_f64(value).filter(|coord| *coord != 0.0)
}

fn split_optional(raw: Option<&str>, tz: Tz) -> Result<(String, String), DraftError> {
    match raw.map(str::trim) {
        None | Some("") => Ok((String::new(), String::new())),
        Some(text) => split_timestamp(text, tz),
    }
}

/// Splits a server timestamp into `YYYY-MM-DD` and `HH:MM`.
///
/// Offset-carrying timestamps are shown in `tz`; naive ones are taken as already local.
pub fn split_timestamp(raw: &str, tz: Tz) -> Result<(String, String), DraftError> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        let local = stamp.with_timezone(&tz);
        return Ok((
            local.format("%Y-%m-%d").to_string(),
            local.format("%H:%M").to_string(),
        ));
    }

    for fmt in NAIVE_TIMESTAMP_FORMATS.iter() {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok((
                naive.format("%Y-%m-%d").to_string(),
                naive.format("%H:%M").to_string(),
            ));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok((date.format("%Y-%m-%d").to_string(), String::new()));
    }

    Err(DraftError::Timestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: serde_json::Value) -> EventDetail {
        serde_json::from_value(value).expect("event detail")
    }

    #[test]
    fn hydrates_core_fields_and_tiers() {
        let detail = detail(json!({
            "event": {
                "id": 12,
                "title": "Afrobeat Night",
                "category": "Music",
                "description": "Live band",
                "start_date": "2025-05-01 18:30:00",
                "end_date": null,
                "location": "Eko Hotel",
                "lat": "6.4281",
                "lng": 3.4219,
                "tags": ["Music", "Live"],
                "media": []
            },
            "tickets": [
                { "id": 3, "title": "VIP", "price": "25000.00", "quantity": 50, "description": null },
                { "id": 4, "title": "Regular", "price": 5000, "quantity": null, "available_count": 120 }
            ]
        }));

        let draft = EventDraft::hydrate(&detail, Tz::UTC).expect("hydrate");
        assert_eq!(draft.start_date, "2025-05-01");
        assert_eq!(draft.start_time, "18:30");
        assert_eq!(draft.end_date, "");
        assert_eq!(draft.end_time, "");
        assert_eq!(draft.lat, Some(6.4281));
        assert_eq!(draft.lng, Some(3.4219));
        assert_eq!(draft.tags, vec!["Music", "Live"]);

        assert_eq!(draft.tiers.len(), 2);
        assert_eq!(draft.tiers[0].id, Some(RemoteId::from(3u64)));
        assert_eq!(draft.tiers[0].name, "VIP");
        assert_eq!(draft.tiers[0].price, "25000.00");
        assert_eq!(draft.tiers[0].quantity, "50");
        assert_eq!(draft.tiers[0].description, "");
        assert_eq!(draft.tiers[1].quantity, "120");
        assert_eq!(draft.tiers[1].price, "5000");
    }

    #[test]
    fn offset_timestamps_convert_to_display_zone() {
        let (date, time) =
            split_timestamp("2025-05-01T23:15:00Z", chrono_tz::Africa::Lagos).expect("split");
        assert_eq!(date, "2025-05-02");
        assert_eq!(time, "00:15");
    }

    #[test]
    fn bare_dates_leave_time_empty() {
        assert_eq!(
            split_timestamp("2025-05-02", Tz::UTC).expect("split"),
            ("2025-05-02".to_string(), String::new())
        );
        assert!(split_timestamp("next friday", Tz::UTC).is_err());
    }

    #[test]
    fn unparseable_start_fails_hydration() {
        let detail = detail(json!({
            "event": { "title": "Broken", "start_date": "soon" },
            "tickets": []
        }));
        assert_eq!(
            EventDraft::hydrate(&detail, Tz::UTC),
            Err(DraftError::Timestamp("soon".to_string()))
        );
    }

    #[test]
    fn no_server_tiers_yields_one_blank_tier() {
        let detail = detail(json!({
            "event": { "title": "Fresh", "start_date": "2025-06-01 10:00", "lat": 0 },
            "tickets": []
        }));
        let draft = EventDraft::hydrate(&detail, Tz::UTC).expect("hydrate");
        assert_eq!(draft.tiers, vec![TicketTierDraft::default()]);
        assert_eq!(draft.lat, None);
    }

    #[test]
    fn tier_editing_is_positional() {
        let mut draft = EventDraft::default();
        draft.add_tier();
        draft.add_tier();
        draft
            .update_tier(1, TierField::Name, "Early Bird")
            .expect("update");
        draft
            .update_tier(1, TierField::Quantity, "40")
            .expect("update");

        let removed = draft.remove_tier(0).expect("remove");
        assert_eq!(removed, TicketTierDraft::default());
        assert_eq!(draft.tiers.len(), 1);
        assert_eq!(draft.tiers[0].name, "Early Bird");

        assert_eq!(
            draft.update_tier(3, TierField::Price, "10"),
            Err(DraftError::TierOutOfRange(3))
        );
        draft.remove_tier(0).expect("remove last");
        assert!(draft.tiers.is_empty());
        assert_eq!(draft.remove_tier(0), Err(DraftError::TierOutOfRange(0)));
    }

    #[test]
    fn tier_fields_parse_from_labels() {
        assert_eq!("type".parse::<TierField>(), Ok(TierField::Name));
        assert_eq!("Qty".parse::<TierField>(), Ok(TierField::Quantity));
        assert!("colour".parse::<TierField>().is_err());
    }
}
