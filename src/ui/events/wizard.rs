//! Event creation wizard
//!
//! Three steps: basics, schedule/venue, ticket tiers. Validation per step is
//! a pure function over the draft so the form component stays thin; the
//! final step submits through the gateway and lands back on the organizer
//! dashboard.

use chrono::{DateTime, NaiveDateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::events::{CATEGORIES, EventDetail, EventInput, TierInput, api};
use crate::ui::notifications::use_notifications;

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Basics,
    Schedule,
    Tiers,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Basics, WizardStep::Schedule, WizardStep::Tiers];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Basics => 0,
            WizardStep::Schedule => 1,
            WizardStep::Tiers => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Basics => "Basics",
            WizardStep::Schedule => "Schedule & Venue",
            WizardStep::Tiers => "Tickets & Review",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Basics => Some(WizardStep::Schedule),
            WizardStep::Schedule => Some(WizardStep::Tiers),
            WizardStep::Tiers => None,
        }
    }

    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Basics => None,
            WizardStep::Schedule => Some(WizardStep::Basics),
            WizardStep::Tiers => Some(WizardStep::Schedule),
        }
    }
}

/// One ticket tier as entered in the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierDraft {
    pub name: String,
    /// Dollar amount, e.g. "12.50".
    pub price: String,
    pub quantity: String,
}

/// The whole form state.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub venue: String,
    pub city: String,
    /// datetime-local values, e.g. "2026-09-12T19:30".
    pub starts_at: String,
    pub ends_at: String,
    pub tiers: Vec<TierDraft>,
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            venue: String::new(),
            city: String::new(),
            starts_at: String::new(),
            ends_at: String::new(),
            tiers: vec![TierDraft::default()],
        }
    }
}

/// Parse a `datetime-local` input value as UTC.
pub fn parse_local_datetime(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Render a timestamp back into a `datetime-local` input value.
pub fn format_local_datetime(when: &DateTime<Utc>) -> String {
    when.format("%Y-%m-%dT%H:%M").to_string()
}

/// Render a cents amount back into the dollar form the price field edits.
pub fn format_price_input(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}

/// Seed the form from an existing event for the edit flow.
pub fn draft_from(detail: &EventDetail) -> WizardDraft {
    WizardDraft {
        title: detail.title.clone(),
        description: detail.description.clone().unwrap_or_default(),
        category: detail.category.clone(),
        venue: detail.venue.clone(),
        city: detail.city.clone(),
        starts_at: format_local_datetime(&detail.starts_at),
        ends_at: detail
            .ends_at
            .as_ref()
            .map(format_local_datetime)
            .unwrap_or_default(),
        tiers: detail
            .tiers
            .iter()
            .map(|tier| TierDraft {
                name: tier.name.clone(),
                price: format_price_input(tier.price_cents),
                quantity: tier.quantity.to_string(),
            })
            .collect(),
    }
}

/// Parse a dollar amount into cents. At most two decimal places, no sign.
pub fn parse_price_cents(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with('-') || raw.starts_with('+') {
        return None;
    }
    let (dollars, cents) = match raw.split_once('.') {
        Some((dollars, cents)) => (dollars, cents),
        None => (raw, ""),
    };
    if cents.len() > 2 {
        return None;
    }
    let dollars: i64 = if dollars.is_empty() {
        0
    } else {
        dollars.parse().ok()?
    };
    let cents: i64 = if cents.is_empty() {
        0
    } else {
        // Pad "5" to "50" so "12.5" means $12.50.
        format!("{cents:0<2}").parse().ok()?
    };
    Some(dollars * 100 + cents)
}

/// Validate one step of the draft, first problem wins.
pub fn validate_step(draft: &WizardDraft, step: WizardStep) -> Result<(), String> {
    match step {
        WizardStep::Basics => {
            if draft.title.trim().is_empty() {
                return Err("Title is required".to_string());
            }
            if !CATEGORIES.contains(&draft.category.as_str()) {
                return Err("Pick a category".to_string());
            }
            Ok(())
        }
        WizardStep::Schedule => {
            if draft.venue.trim().is_empty() {
                return Err("Venue is required".to_string());
            }
            if draft.city.trim().is_empty() {
                return Err("City is required".to_string());
            }
            let Some(starts_at) = parse_local_datetime(&draft.starts_at) else {
                return Err("Start date and time are required".to_string());
            };
            if !draft.ends_at.is_empty() {
                match parse_local_datetime(&draft.ends_at) {
                    Some(ends_at) if ends_at > starts_at => {}
                    Some(_) => return Err("End must be after the start".to_string()),
                    None => return Err("End date is not valid".to_string()),
                }
            }
            Ok(())
        }
        WizardStep::Tiers => {
            if draft.tiers.is_empty() {
                return Err("Add at least one ticket tier".to_string());
            }
            for (i, tier) in draft.tiers.iter().enumerate() {
                let label = format!("Tier {}", i + 1);
                if tier.name.trim().is_empty() {
                    return Err(format!("{label}: name is required"));
                }
                if parse_price_cents(&tier.price).is_none() {
                    return Err(format!("{label}: price is not valid"));
                }
                match tier.quantity.parse::<u32>() {
                    Ok(quantity) if quantity > 0 => {}
                    _ => return Err(format!("{label}: quantity must be a positive number")),
                }
            }
            Ok(())
        }
    }
}

impl WizardDraft {
    /// Validate everything and produce the API payload.
    pub fn to_input(&self) -> Result<EventInput, String> {
        for step in WizardStep::ALL {
            validate_step(self, step)?;
        }

        let tiers = self
            .tiers
            .iter()
            .map(|tier| {
                Some(TierInput {
                    name: tier.name.trim().to_string(),
                    price_cents: parse_price_cents(&tier.price)?,
                    quantity: tier.quantity.parse().ok()?,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| "Ticket tiers are not valid".to_string())?;

        Ok(EventInput {
            title: self.title.trim().to_string(),
            description: (!self.description.trim().is_empty())
                .then(|| self.description.trim().to_string()),
            category: self.category.clone(),
            venue: self.venue.trim().to_string(),
            city: self.city.trim().to_string(),
            starts_at: parse_local_datetime(&self.starts_at)
                .ok_or_else(|| "Start date is not valid".to_string())?,
            ends_at: (!self.ends_at.is_empty())
                .then(|| parse_local_datetime(&self.ends_at))
                .flatten(),
            tiers,
        })
    }
}

/// Event creation wizard component. With `existing` set it edits that event
/// in place instead of creating a new one.
#[component]
pub fn EventWizard(#[prop(optional, into)] existing: Option<EventDetail>) -> impl IntoView {
    let notifications = use_notifications();

    let editing = existing.as_ref().map(|detail| detail.id);
    let step = RwSignal::new(WizardStep::Basics);
    let draft = RwSignal::new(
        existing
            .as_ref()
            .map(draft_from)
            .unwrap_or_default(),
    );
    let step_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let go_back = move |_| {
        step_error.set(None);
        if let Some(prev) = step.get().prev() {
            step.set(prev);
        }
    };

    let go_next = move |_| {
        let current = step.get();
        if let Err(error) = validate_step(&draft.get(), current) {
            step_error.set(Some(error));
            return;
        }
        step_error.set(None);

        match current.next() {
            Some(next) => step.set(next),
            None => {
                // Final step: submit.
                let input = match draft.get().to_input() {
                    Ok(input) => input,
                    Err(error) => {
                        step_error.set(Some(error));
                        return;
                    }
                };
                submitting.set(true);
                spawn_local(async move {
                    let result = match editing {
                        Some(id) => api::update_event(id, &input).await,
                        None => api::create_event(&input).await,
                    };
                    match result {
                        Ok(event) => {
                            let verb = if editing.is_some() { "updated" } else { "live" };
                            notifications.success(format!("\"{}\" is {verb}.", event.title));
                            let navigate = use_navigate();
                            navigate("/organizer", Default::default());
                        }
                        Err(_) => {
                            // Gateway already surfaced the failure.
                        }
                    }
                    submitting.set(false);
                });
            }
        }
    };

    view! {
        <div class="max-w-2xl mx-auto">
            // Step indicator
            <div class="flex items-center gap-2 mb-8">
                {WizardStep::ALL
                    .iter()
                    .map(|s| {
                        let this = *s;
                        view! {
                            <div class="flex-1 flex flex-col items-center gap-1">
                                <div class=move || {
                                    let reached = step.get().index() >= this.index();
                                    format!(
                                        "w-8 h-8 rounded-full flex items-center justify-center text-sm font-semibold transition-colors {}",
                                        if reached {
                                            "bg-accent-primary text-white"
                                        } else {
                                            "bg-theme-secondary text-theme-tertiary"
                                        }
                                    )
                                }>
                                    {this.index() + 1}
                                </div>
                                <span class="text-xs text-theme-secondary hidden sm:block">{this.title()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                step_error.get().map(|error| {
                    view! {
                        <div class="mb-4 p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                            <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                        </div>
                    }
                })
            }}

            // Step body
            {move || match step.get() {
                WizardStep::Basics => view! { <BasicsStep draft=draft /> }.into_any(),
                WizardStep::Schedule => view! { <ScheduleStep draft=draft /> }.into_any(),
                WizardStep::Tiers => view! { <TiersStep draft=draft /> }.into_any(),
            }}

            // Navigation
            <div class="flex items-center justify-between mt-8">
                <button
                    class="px-4 py-2 border border-theme text-theme-primary rounded-lg hover:bg-theme-secondary
                           disabled:opacity-40 disabled:cursor-not-allowed transition-colors"
                    disabled=move || step.get().prev().is_none()
                    on:click=go_back
                >
                    "Back"
                </button>
                <button
                    class="px-6 py-2 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg
                           disabled:opacity-60 disabled:cursor-not-allowed transition-colors"
                    disabled=move || submitting.get()
                    on:click=go_next
                >
                    {move || match (step.get().next().is_some(), submitting.get()) {
                        (true, _) => "Next",
                        (false, false) if editing.is_some() => "Save Changes",
                        (false, false) => "Create Event",
                        (false, true) => "Saving...",
                    }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn BasicsStep(draft: RwSignal<WizardDraft>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <label class="block text-sm font-medium text-theme-primary mb-1">"Title"</label>
                <input
                    type="text"
                    placeholder="Rust Meetup #42"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary"
                    prop:value=move || draft.get().title
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-theme-primary mb-1">"Category"</label>
                <select
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary"
                    on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                >
                    <option value="" selected=move || draft.get().category.is_empty()>
                        "Pick a category"
                    </option>
                    {CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <option
                                    value=*category
                                    selected=move || draft.get().category == *category
                                    class="capitalize"
                                >
                                    {category.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-theme-primary mb-1">"Description"</label>
                <textarea
                    rows=4
                    placeholder="What should attendees expect?"
                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary"
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </div>
        </div>
    }
}

#[component]
fn ScheduleStep(draft: RwSignal<WizardDraft>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">"Venue"</label>
                    <input
                        type="text"
                        placeholder="The Warehouse"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || draft.get().venue
                        on:input=move |ev| draft.update(|d| d.venue = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">"City"</label>
                    <input
                        type="text"
                        placeholder="Rotterdam"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || draft.get().city
                        on:input=move |ev| draft.update(|d| d.city = event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">"Starts"</label>
                    <input
                        type="datetime-local"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || draft.get().starts_at
                        on:input=move |ev| draft.update(|d| d.starts_at = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">"Ends (optional)"</label>
                    <input
                        type="datetime-local"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary"
                        prop:value=move || draft.get().ends_at
                        on:input=move |ev| draft.update(|d| d.ends_at = event_target_value(&ev))
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn TiersStep(draft: RwSignal<WizardDraft>) -> impl IntoView {
    let add_tier = move |_| {
        draft.update(|d| d.tiers.push(TierDraft::default()));
    };

    view! {
        <div class="space-y-4">
            {move || {
                draft
                    .get()
                    .tiers
                    .iter()
                    .enumerate()
                    .map(|(i, tier)| {
                        view! {
                            <div class="flex items-end gap-3 p-3 bg-theme-secondary border border-theme rounded-lg">
                                <div class="flex-1">
                                    <label class="block text-xs text-theme-tertiary mb-1">"Name"</label>
                                    <input
                                        type="text"
                                        placeholder="General Admission"
                                        class="w-full px-2 py-1.5 bg-theme-primary border border-theme rounded text-sm text-theme-primary
                                               focus:outline-none focus:ring-1 focus:ring-accent-primary"
                                        prop:value=tier.name.clone()
                                        on:input=move |ev| draft.update(|d| {
                                            if let Some(tier) = d.tiers.get_mut(i) {
                                                tier.name = event_target_value(&ev);
                                            }
                                        })
                                    />
                                </div>
                                <div class="w-24">
                                    <label class="block text-xs text-theme-tertiary mb-1">"Price ($)"</label>
                                    <input
                                        type="text"
                                        placeholder="25.00"
                                        class="w-full px-2 py-1.5 bg-theme-primary border border-theme rounded text-sm text-theme-primary
                                               focus:outline-none focus:ring-1 focus:ring-accent-primary"
                                        prop:value=tier.price.clone()
                                        on:input=move |ev| draft.update(|d| {
                                            if let Some(tier) = d.tiers.get_mut(i) {
                                                tier.price = event_target_value(&ev);
                                            }
                                        })
                                    />
                                </div>
                                <div class="w-24">
                                    <label class="block text-xs text-theme-tertiary mb-1">"Quantity"</label>
                                    <input
                                        type="text"
                                        placeholder="100"
                                        class="w-full px-2 py-1.5 bg-theme-primary border border-theme rounded text-sm text-theme-primary
                                               focus:outline-none focus:ring-1 focus:ring-accent-primary"
                                        prop:value=tier.quantity.clone()
                                        on:input=move |ev| draft.update(|d| {
                                            if let Some(tier) = d.tiers.get_mut(i) {
                                                tier.quantity = event_target_value(&ev);
                                            }
                                        })
                                    />
                                </div>
                                <button
                                    class="p-2 text-theme-tertiary hover:text-red-500 transition-colors"
                                    on:click=move |_| draft.update(|d| {
                                        if d.tiers.len() > 1 {
                                            d.tiers.remove(i);
                                        }
                                    })
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <button
                class="px-3 py-1.5 text-sm border border-theme text-theme-primary rounded-lg hover:bg-theme-secondary transition-colors"
                on:click=add_tier
            >
                "+ Add tier"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> WizardDraft {
        WizardDraft {
            title: "Rust Meetup".to_string(),
            description: "Talks and pizza".to_string(),
            category: "tech".to_string(),
            venue: "The Warehouse".to_string(),
            city: "Rotterdam".to_string(),
            starts_at: "2026-09-12T19:30".to_string(),
            ends_at: "2026-09-12T22:00".to_string(),
            tiers: vec![TierDraft {
                name: "General".to_string(),
                price: "12.50".to_string(),
                quantity: "100".to_string(),
            }],
        }
    }

    #[test]
    fn steps_walk_forward_and_back() {
        assert_eq!(WizardStep::Basics.next(), Some(WizardStep::Schedule));
        assert_eq!(WizardStep::Schedule.next(), Some(WizardStep::Tiers));
        assert_eq!(WizardStep::Tiers.next(), None);
        assert_eq!(WizardStep::Tiers.prev(), Some(WizardStep::Schedule));
        assert_eq!(WizardStep::Basics.prev(), None);
    }

    #[test]
    fn price_parsing_handles_dollar_forms() {
        assert_eq!(parse_price_cents("12"), Some(1200));
        assert_eq!(parse_price_cents("12.5"), Some(1250));
        assert_eq!(parse_price_cents("12.50"), Some(1250));
        assert_eq!(parse_price_cents("0.99"), Some(99));
        assert_eq!(parse_price_cents(".50"), Some(50));
        assert_eq!(parse_price_cents("0"), Some(0));
    }

    #[test]
    fn price_parsing_rejects_bad_input() {
        assert_eq!(parse_price_cents(""), None);
        assert_eq!(parse_price_cents("abc"), None);
        assert_eq!(parse_price_cents("-3"), None);
        assert_eq!(parse_price_cents("12.345"), None);
        assert_eq!(parse_price_cents("12.x"), None);
    }

    #[test]
    fn local_datetime_parsing() {
        assert!(parse_local_datetime("2026-09-12T19:30").is_some());
        assert!(parse_local_datetime("2026-09-12").is_none());
        assert!(parse_local_datetime("").is_none());
    }

    #[test]
    fn a_valid_draft_passes_every_step() {
        let draft = valid_draft();
        for step in WizardStep::ALL {
            assert_eq!(validate_step(&draft, step), Ok(()));
        }
        let input = draft.to_input().expect("valid draft converts");
        assert_eq!(input.title, "Rust Meetup");
        assert_eq!(input.tiers.len(), 1);
        assert_eq!(input.tiers[0].price_cents, 1250);
        assert_eq!(input.tiers[0].quantity, 100);
        assert!(input.ends_at.is_some());
    }

    #[test]
    fn basics_requires_title_and_known_category() {
        let mut draft = valid_draft();
        draft.title = "  ".to_string();
        assert!(validate_step(&draft, WizardStep::Basics).is_err());

        let mut draft = valid_draft();
        draft.category = "polka".to_string();
        assert!(validate_step(&draft, WizardStep::Basics).is_err());
    }

    #[test]
    fn schedule_requires_start_before_end() {
        let mut draft = valid_draft();
        draft.ends_at = "2026-09-12T18:00".to_string();
        assert_eq!(
            validate_step(&draft, WizardStep::Schedule),
            Err("End must be after the start".to_string())
        );

        // An open end is fine.
        draft.ends_at = String::new();
        assert_eq!(validate_step(&draft, WizardStep::Schedule), Ok(()));
    }

    #[test]
    fn tiers_require_valid_price_and_quantity() {
        let mut draft = valid_draft();
        draft.tiers[0].price = "twelve".to_string();
        assert!(validate_step(&draft, WizardStep::Tiers).is_err());

        let mut draft = valid_draft();
        draft.tiers[0].quantity = "0".to_string();
        assert!(validate_step(&draft, WizardStep::Tiers).is_err());

        let mut draft = valid_draft();
        draft.tiers.clear();
        assert_eq!(
            validate_step(&draft, WizardStep::Tiers),
            Err("Add at least one ticket tier".to_string())
        );
    }

    #[test]
    fn to_input_drops_blank_description() {
        let mut draft = valid_draft();
        draft.description = "   ".to_string();
        let input = draft.to_input().expect("valid draft");
        assert_eq!(input.description, None);
    }

    #[test]
    fn price_input_round_trips_through_cents() {
        for cents in [0, 99, 1250, 150_000] {
            assert_eq!(parse_price_cents(&format_price_input(cents)), Some(cents));
        }
        assert_eq!(format_price_input(1205), "12.05");
    }

    #[test]
    fn local_datetime_round_trips() {
        let raw = "2026-09-12T19:30";
        let parsed = parse_local_datetime(raw).expect("parses");
        assert_eq!(format_local_datetime(&parsed), raw);
    }

    #[test]
    fn draft_from_seeds_every_field() {
        use crate::core::events::TicketTier;
        use uuid::Uuid;

        let detail = EventDetail {
            id: Uuid::nil(),
            title: "Rust Meetup".to_string(),
            description: Some("Talks and pizza".to_string()),
            category: "tech".to_string(),
            venue: "The Warehouse".to_string(),
            city: "Rotterdam".to_string(),
            starts_at: parse_local_datetime("2026-09-12T19:30").unwrap(),
            ends_at: None,
            organizer_id: Uuid::nil(),
            tiers: vec![TicketTier {
                id: Uuid::nil(),
                name: "General".to_string(),
                price_cents: 1250,
                quantity: 100,
                remaining: Some(40),
            }],
        };

        let draft = draft_from(&detail);
        assert_eq!(draft.starts_at, "2026-09-12T19:30");
        assert_eq!(draft.ends_at, "");
        assert_eq!(draft.tiers[0].price, "12.50");
        assert_eq!(draft.tiers[0].quantity, "100");
        // A seeded draft is immediately valid again.
        assert!(draft.to_input().is_ok());
    }
}
