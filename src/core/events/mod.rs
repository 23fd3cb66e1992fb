//! Event catalog: types and API calls for browsing, organizing, and tickets.

pub mod api;
pub mod types;

pub use types::{
    CATEGORIES, CheckinResult, EventDetail, EventFilter, EventInput, EventListResponse,
    EventSummary, Ticket, TicketTier, TierInput, format_price, format_when,
};
