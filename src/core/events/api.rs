//! Event and ticket API calls, all through the gateway.

use uuid::Uuid;

use crate::core::http::ApiError;
use crate::core::http::gateway;

use super::types::{
    CheckinResult, EventDetail, EventFilter, EventInput, EventListResponse, Ticket,
    TicketListResponse,
};

/// List published events matching the filter.
pub async fn list_events(filter: &EventFilter) -> Result<EventListResponse, ApiError> {
    gateway::get_json(&format!("/api/events{}", filter.to_query_string())).await
}

/// Fetch one event with its ticket tiers.
pub async fn fetch_event(id: Uuid) -> Result<EventDetail, ApiError> {
    gateway::get_json(&format!("/api/events/{id}")).await
}

/// Create an event (organizer).
pub async fn create_event(input: &EventInput) -> Result<EventDetail, ApiError> {
    gateway::post_json("/api/events", input).await
}

/// Update an event (organizer/admin).
pub async fn update_event(id: Uuid, input: &EventInput) -> Result<EventDetail, ApiError> {
    gateway::put_json(&format!("/api/events/{id}"), input).await
}

/// Delete an event (organizer/admin).
pub async fn delete_event(id: Uuid) -> Result<(), ApiError> {
    gateway::delete(&format!("/api/events/{id}")).await
}

/// Buy one ticket for a tier.
pub async fn purchase_ticket(event_id: Uuid, tier_id: Uuid) -> Result<Ticket, ApiError> {
    #[derive(serde::Serialize)]
    struct PurchaseRequest {
        event_id: Uuid,
        tier_id: Uuid,
    }
    gateway::post_json("/api/tickets", &PurchaseRequest { event_id, tier_id }).await
}

/// The current customer's tickets.
pub async fn my_tickets() -> Result<Vec<Ticket>, ApiError> {
    let response: TicketListResponse = gateway::get_json("/api/tickets/mine").await?;
    Ok(response.tickets)
}

/// Staff check-in by ticket code.
pub async fn check_in(code: &str) -> Result<CheckinResult, ApiError> {
    gateway::post_json(
        &format!("/api/tickets/{code}/checkin"),
        &serde_json::json!({}),
    )
    .await
}
