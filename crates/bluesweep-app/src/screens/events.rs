//! Cleanup events: featured catalog, community events and event creation

use bluesweep_core::{CleanupEvent, EventId, Registration};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::create_event::{CreateEventAction, CreateEventForm};
use super::format_event_date;
use super::map::{MapAction, PollutionMapState};
use crate::content::featured_events;
use crate::core::{Command, UpdateContext};
use crate::toast::Toast;

/// Toast after a successful registration.
pub const REGISTERED_MESSAGE: &str = "Successfully registered for event!";
/// Toast when the event has no places left.
pub const FULL_MESSAGE: &str = "This event is full";
/// Toast after an event is saved.
pub const CREATED_MESSAGE: &str = "Event created successfully!";

/// Which list an event lives in. Featured and community ids overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventRef {
    /// Built-in event by id
    Featured(u32),
    /// User-created event
    Community(EventId),
}

/// One card on the events screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventListing {
    /// Which list the event is in
    pub reference: EventRef,
    /// The event
    pub event: CleanupEvent,
    /// e.g. "Saturday, March 7, 2026"
    pub formatted_date: String,
}

impl EventListing {
    /// "24/50 participants"
    pub fn participants_label(&self) -> String {
        format!(
            "{}/{} participants",
            self.event.participants, self.event.max_participants
        )
    }

    /// "26 spots left", "1 spot left" or "Full"
    pub fn spots_label(&self) -> String {
        match self.event.spots_left() {
            0 => "Full".to_string(),
            1 => "1 spot left".to_string(),
            n => format!("{n} spots left"),
        }
    }
}

/// Events screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsState {
    /// Built-in events; registrations only live in memory
    pub featured: Vec<CleanupEvent>,
    /// Latest snapshot of the event store
    pub community: Vec<CleanupEvent>,
    /// Open create-event dialog
    pub create: Option<CreateEventForm>,
    /// Map opened from an event card
    pub map: Option<PollutionMapState>,
}

/// Events screen actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventsAction {
    /// Leave the screen
    Back,
    /// Take a place at an event
    Register(EventRef),
    /// A community registration finished
    RegistrationFinished {
        /// Event registered for
        id: EventId,
        /// What happened
        outcome: Registration,
    },
    /// New community event list from the store
    CommunityEventsChanged(Vec<CleanupEvent>),

    /// Open the create-event dialog
    OpenCreateForm,
    /// Close the dialog without saving
    CloseCreateForm,
    /// Forward an action to the dialog
    Form(CreateEventAction),
    /// The create request finished
    CreateFinished {
        /// Whether the write succeeded
        ok: bool,
    },

    /// Open the map centred on an event's location
    ShowMap(EventRef),
    /// Forward an action to the open map
    Map(MapAction),
    /// Close the map
    CloseMap,
}

impl EventsState {
    /// Screen at `now`, with or without the featured catalog.
    pub fn new(now: DateTime<Utc>, show_featured: bool) -> Self {
        Self {
            featured: if show_featured {
                featured_events(now)
            } else {
                Vec::new()
            },
            community: Vec::new(),
            create: None,
            map: None,
        }
    }

    /// Featured and community events, date ascending.
    pub fn listings(&self) -> Vec<EventListing> {
        let featured = self
            .featured
            .iter()
            .map(|e| (EventRef::Featured(e.id.value()), e));
        let community = self
            .community
            .iter()
            .map(|e| (EventRef::Community(e.id), e));
        let mut listings: Vec<_> = featured
            .chain(community)
            .map(|(reference, event)| EventListing {
                reference,
                formatted_date: format_event_date(&event.date),
                event: event.clone(),
            })
            .collect();
        listings.sort_by_key(|listing| listing.event.date);
        listings
    }

    /// Event behind a reference.
    pub fn find(&self, reference: EventRef) -> Option<&CleanupEvent> {
        match reference {
            EventRef::Featured(id) => self.featured.iter().find(|e| e.id.value() == id),
            EventRef::Community(id) => self.community.iter().find(|e| e.id == id),
        }
    }

    /// Number of events the user created.
    pub fn organized(&self) -> usize {
        self.community.len()
    }

    /// Apply an action.
    pub fn update(&mut self, action: EventsAction, ctx: &UpdateContext) -> Vec<Command> {
        match action {
            EventsAction::Back => vec![Command::Back],
            EventsAction::Register(reference) => self.register(reference),
            EventsAction::RegistrationFinished { id, outcome } => match outcome {
                Registration::Registered { .. } => registered(),
                Registration::Full => vec![Command::Toast(Toast::warning(FULL_MESSAGE))],
                Registration::Unknown => {
                    tracing::debug!(%id, "Registration for unknown event");
                    Vec::new()
                }
            },
            EventsAction::CommunityEventsChanged(events) => {
                self.community = events;
                Vec::new()
            }
            EventsAction::OpenCreateForm => {
                self.create = Some(CreateEventForm::new(ctx));
                Vec::new()
            }
            EventsAction::CloseCreateForm => {
                self.create = None;
                Vec::new()
            }
            EventsAction::Form(action) => match &mut self.create {
                Some(form) => form.update(action, ctx),
                None => Vec::new(),
            },
            EventsAction::CreateFinished { ok } => {
                if ok {
                    self.create = None;
                    vec![Command::Toast(Toast::success(CREATED_MESSAGE))]
                } else {
                    if let Some(form) = &mut self.create {
                        form.submitting = false;
                    }
                    Vec::new()
                }
            }
            EventsAction::ShowMap(reference) => {
                if let Some(event) = self.find(reference) {
                    self.map = Some(PollutionMapState::new(event.location.clone(), false));
                }
                Vec::new()
            }
            EventsAction::Map(action) => {
                if let Some(map) = &mut self.map {
                    map.update(action);
                }
                Vec::new()
            }
            EventsAction::CloseMap => {
                self.map = None;
                Vec::new()
            }
        }
    }

    fn register(&mut self, reference: EventRef) -> Vec<Command> {
        match reference {
            EventRef::Featured(id) => {
                let Some(event) = self.featured.iter_mut().find(|e| e.id.value() == id) else {
                    return Vec::new();
                };
                if event.try_register() {
                    registered()
                } else {
                    vec![Command::Toast(Toast::warning(FULL_MESSAGE))]
                }
            }
            EventRef::Community(id) => vec![Command::RegisterEvent(id)],
        }
    }
}

fn registered() -> Vec<Command> {
    vec![
        Command::Toast(Toast::success(REGISTERED_MESSAGE)),
        Command::RecordAttendance,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluesweep_core::time::epoch;
    use bluesweep_core::ImageRef;
    use chrono::Duration;

    fn ctx() -> UpdateContext {
        UpdateContext::new(epoch())
    }

    fn community(id: u32, days: i64) -> CleanupEvent {
        CleanupEvent {
            id: EventId::new(id),
            title: format!("Community sweep {id}"),
            description: String::new(),
            date: epoch() + Duration::days(days),
            time: "09:00 AM - 12:00 PM".into(),
            location: "Port Dickson, Negeri Sembilan".into(),
            participants: 0,
            max_participants: 1,
            image: ImageRef::default(),
        }
    }

    #[test]
    fn listings_merge_by_date() {
        let mut state = EventsState::new(epoch(), true);
        state.update(
            EventsAction::CommunityEventsChanged(vec![community(1, 1), community(2, 15)]),
            &ctx(),
        );
        let refs: Vec<_> = state.listings().into_iter().map(|l| l.reference).collect();
        assert_eq!(
            refs,
            vec![
                EventRef::Community(EventId::new(1)),
                EventRef::Featured(1),
                EventRef::Featured(2),
                EventRef::Community(EventId::new(2)),
                EventRef::Featured(3),
                EventRef::Featured(4),
                EventRef::Featured(5),
            ]
        );
        assert_eq!(state.listings()[1].participants_label(), "24/50 participants");
        assert_eq!(state.listings()[1].spots_label(), "26 spots left");
    }

    #[test]
    fn spots_label_counts_down_to_full() {
        let mut state = EventsState::new(epoch(), true);
        state.featured[0].participants = 49;
        let listing = |state: &EventsState| {
            state
                .listings()
                .into_iter()
                .find(|l| l.reference == EventRef::Featured(1))
                .unwrap()
        };
        assert_eq!(listing(&state).spots_label(), "1 spot left");
        state.featured[0].participants = 50;
        assert_eq!(listing(&state).spots_label(), "Full");
    }

    #[test]
    fn featured_registration_is_capped() {
        let mut state = EventsState::new(epoch(), true);
        state.featured[0].participants = 49;

        let commands = state.update(EventsAction::Register(EventRef::Featured(1)), &ctx());
        assert_eq!(
            commands,
            vec![
                Command::Toast(Toast::success(REGISTERED_MESSAGE)),
                Command::RecordAttendance
            ]
        );
        assert_eq!(state.featured[0].participants, 50);

        let commands = state.update(EventsAction::Register(EventRef::Featured(1)), &ctx());
        assert_eq!(commands, vec![Command::Toast(Toast::warning(FULL_MESSAGE))]);
        assert_eq!(state.featured[0].participants, 50);
    }

    #[test]
    fn community_registration_goes_through_the_store() {
        let mut state = EventsState::new(epoch(), false);
        assert!(state.listings().is_empty());

        let id = EventId::new(3);
        assert_eq!(
            state.update(EventsAction::Register(EventRef::Community(id)), &ctx()),
            vec![Command::RegisterEvent(id)]
        );
        assert_eq!(
            state.update(
                EventsAction::RegistrationFinished {
                    id,
                    outcome: Registration::Full
                },
                &ctx()
            ),
            vec![Command::Toast(Toast::warning(FULL_MESSAGE))]
        );
        assert!(state
            .update(
                EventsAction::RegistrationFinished {
                    id,
                    outcome: Registration::Unknown
                },
                &ctx()
            )
            .is_empty());
    }

    #[test]
    fn create_form_closes_on_success_only() {
        let mut state = EventsState::new(epoch(), true);
        state.update(EventsAction::OpenCreateForm, &ctx());
        state.update(EventsAction::CreateFinished { ok: false }, &ctx());
        assert!(state.create.is_some());

        let commands = state.update(EventsAction::CreateFinished { ok: true }, &ctx());
        assert_eq!(commands, vec![Command::Toast(Toast::success(CREATED_MESSAGE))]);
        assert!(state.create.is_none());
    }

    #[test]
    fn map_centres_on_event_location() {
        let mut state = EventsState::new(epoch(), true);
        state.update(EventsAction::ShowMap(EventRef::Featured(5)), &ctx());
        let map = state.map.as_ref().unwrap();
        assert_eq!(map.center, bluesweep_core::LatLng::new(2.9188, 101.6520));
        assert!(!map.allow_location_pick);
    }
}
