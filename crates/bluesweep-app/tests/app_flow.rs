#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! End-to-end flows through `AppCore` with in-memory handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use bluesweep_app::screens::{
    CreateEventAction, EventRef, EventsAction, HomeAction, LoginAction, ProfileAction,
    WasteAction, CREATED_MESSAGE, FULL_MESSAGE, REGISTERED_MESSAGE, SUBMITTED_MESSAGE,
};
use bluesweep_app::{
    AppConfig, AppCore, AppEffects, Intent, IntentError, PhotoSource, Screen, StoreChange,
    Toast,
};
use bluesweep_core::{EventId, StorageEffects, StorageError, TimeEffects};
use bluesweep_effects::{
    FixedClock, LocalAuthHandler, LocationMode, MemoryStorageHandler, SampleLocationProvider,
    SamplePhotoProvider,
};
use chrono::{Duration, TimeZone, Utc};
use futures::StreamExt;

const EMAIL: &str = "marina@bluesweep.my";
const PASSWORD: &str = "seaturtle";

/// Memory storage that can be told to reject writes.
#[derive(Clone, Default)]
struct FlakyStorage {
    inner: MemoryStorageHandler,
    fail_writes: Arc<AtomicBool>,
}

#[async_trait]
impl StorageEffects for FlakyStorage {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed("disk full".into()));
        }
        self.inner.store(key, value).await
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.retrieve(key).await
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        self.inner.remove(key).await
    }

    async fn list_keys(&self, prefix: Option<&str>) -> Result<Vec<String>, StorageError> {
        self.inner.list_keys(prefix).await
    }
}

struct Harness {
    storage: FlakyStorage,
    clock: Arc<FixedClock>,
}

impl Harness {
    fn new() -> Self {
        let start = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        Self {
            storage: FlakyStorage::default(),
            clock: Arc::new(FixedClock::new(start)),
        }
    }

    fn effects(&self) -> AppEffects {
        let storage: Arc<dyn StorageEffects> = Arc::new(self.storage.clone());
        let clock: Arc<dyn TimeEffects> = self.clock.clone();
        AppEffects {
            auth: Arc::new(LocalAuthHandler::new(storage.clone())),
            location: Arc::new(SampleLocationProvider::new(LocationMode::RoundRobin, true)),
            photo: Arc::new(SamplePhotoProvider::new(clock.clone())),
            storage,
            clock,
        }
    }

    async fn open(&self) -> AppCore {
        AppCore::open(AppConfig::default(), self.effects()).await.unwrap()
    }

    /// Open and sign up, leaving the app on Home.
    async fn signed_up(&self) -> AppCore {
        let mut app = self.open().await;
        login(&mut app, LoginAction::SetEmail(EMAIL.into())).await;
        login(&mut app, LoginAction::SetPassword(PASSWORD.into())).await;
        login(&mut app, LoginAction::SignUp).await;
        app.drain_toasts();
        app
    }
}

async fn login(app: &mut AppCore, action: LoginAction) {
    app.dispatch(Intent::Login(action)).await.unwrap();
}

async fn events(app: &mut AppCore, action: EventsAction) {
    app.dispatch(Intent::Events(action)).await.unwrap();
}

async fn waste(app: &mut AppCore, action: WasteAction) {
    app.dispatch(Intent::Waste(action)).await.unwrap();
}

fn messages(app: &mut AppCore) -> Vec<String> {
    app.drain_toasts().into_iter().map(|t| t.message).collect()
}

#[tokio::test]
async fn starts_on_login_and_guards_other_screens() {
    let harness = Harness::new();
    let mut app = harness.open().await;

    assert_eq!(app.screen(), Screen::Login);
    assert!(app.session().is_none());
    assert_matches!(
        app.dispatch(Intent::Navigate(Screen::Events)).await,
        Err(IntentError::Unauthenticated {
            screen: Screen::Events
        })
    );
    assert_matches!(
        app.dispatch(Intent::Home(HomeAction::OpenProfile)).await,
        Err(IntentError::Unauthenticated { .. })
    );
}

#[tokio::test]
async fn blank_login_never_signs_in() {
    let harness = Harness::new();
    let mut app = harness.open().await;

    login(&mut app, LoginAction::SetEmail(EMAIL.into())).await;
    login(&mut app, LoginAction::SignIn).await;

    assert_eq!(app.screen(), Screen::Login);
    assert!(app.session().is_none());
    assert_eq!(messages(&mut app), vec!["Email and password cannot be empty"]);
}

#[tokio::test]
async fn sign_up_lands_home_and_sends_verification() {
    let harness = Harness::new();
    let mut app = harness.open().await;
    login(&mut app, LoginAction::SetEmail(EMAIL.into())).await;
    login(&mut app, LoginAction::SetPassword(PASSWORD.into())).await;
    login(&mut app, LoginAction::SignUp).await;

    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(app.navigator().depth(), 1);
    assert_eq!(app.greeting(), format!("Welcome, {EMAIL}!"));
    assert_eq!(messages(&mut app), vec!["Verification email sent"]);

    // The signed-in user survives a restart.
    let reopened = harness.open().await;
    assert_eq!(reopened.screen(), Screen::Home);
    assert_eq!(reopened.session().unwrap().email, EMAIL);
}

#[tokio::test]
async fn wrong_password_reports_provider_message() {
    let harness = Harness::new();
    let mut app = harness.signed_up().await;
    app.dispatch(Intent::Profile(ProfileAction::Logout))
        .await
        .unwrap();
    app.drain_toasts();

    login(&mut app, LoginAction::SetEmail(EMAIL.into())).await;
    login(&mut app, LoginAction::SetPassword("not-it".into())).await;
    login(&mut app, LoginAction::SignIn).await;

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(
        messages(&mut app),
        vec!["Login failed: The password is invalid."]
    );
}

#[tokio::test]
async fn create_and_register_community_event() {
    let harness = Harness::new();
    let mut app = harness.signed_up().await;
    app.dispatch(Intent::Home(HomeAction::OpenEvents))
        .await
        .unwrap();
    assert_eq!(app.screen(), Screen::Events);
    assert_eq!(app.events().listings().len(), 5);

    events(&mut app, EventsAction::OpenCreateForm).await;
    for action in [
        CreateEventAction::SetTitle("Port Dickson Shore Sweep".into()),
        CreateEventAction::SetDescription("Sweep the shoreline after the weekend".into()),
        CreateEventAction::OpenLocationSearch,
        CreateEventAction::SetLocationQuery("port dickson".into()),
        CreateEventAction::SelectLocation(0),
        CreateEventAction::SetMaxParticipants("1".into()),
        CreateEventAction::Submit,
    ] {
        events(&mut app, EventsAction::Form(action)).await;
    }

    assert_eq!(messages(&mut app), vec![CREATED_MESSAGE]);
    assert!(app.events().create.is_none());
    assert_eq!(app.events().community.len(), 1);
    let created = &app.events().community[0];
    assert_eq!(created.id, EventId::new(1));
    assert_eq!(created.location, "Port Dickson, Negeri Sembilan");
    assert_eq!(app.events().listings().len(), 6);
    assert_eq!(app.profile().profile.events_organized, 1);

    let reference = EventRef::Community(EventId::new(1));
    events(&mut app, EventsAction::Register(reference)).await;
    assert_eq!(messages(&mut app), vec![REGISTERED_MESSAGE]);
    assert_eq!(app.events().find(reference).unwrap().participants, 1);
    assert_eq!(app.profile().profile.events_attended, 1);

    events(&mut app, EventsAction::Register(reference)).await;
    assert_eq!(messages(&mut app), vec![FULL_MESSAGE]);
    assert_eq!(app.profile().profile.events_attended, 1);

    app.dispatch(Intent::Back).await.unwrap();
    assert_eq!(app.screen(), Screen::Home);
}

#[tokio::test]
async fn featured_registration_counts_attendance() {
    let harness = Harness::new();
    let mut app = harness.signed_up().await;

    events(&mut app, EventsAction::Register(EventRef::Featured(1))).await;
    assert_eq!(messages(&mut app), vec![REGISTERED_MESSAGE]);
    assert_eq!(
        app.events().find(EventRef::Featured(1)).unwrap().participants,
        25
    );
    assert_eq!(app.profile().profile.events_attended, 1);
    assert_eq!(app.profile().profile.impact_score, 5);
}

#[tokio::test]
async fn waste_report_round_trip() {
    let harness = Harness::new();
    let mut app = harness.signed_up().await;
    app.dispatch(Intent::Navigate(Screen::WasteTracking))
        .await
        .unwrap();

    waste(&mut app, WasteAction::UseCurrentLocation).await;
    assert_eq!(app.waste().location, "Kuala Lumpur, Malaysia");
    waste(
        &mut app,
        WasteAction::SetDescription("Styrofoam boxes along the river".into()),
    )
    .await;
    waste(&mut app, WasteAction::OpenPhotoOptions).await;
    waste(&mut app, WasteAction::TakePhoto(PhotoSource::Gallery)).await;
    let photo = app.waste().photo_uri.clone().unwrap();
    assert!(photo.ends_with(".jpg"));

    waste(&mut app, WasteAction::Submit).await;
    let state = app.waste();
    assert_eq!(state.reports.len(), 1);
    assert_eq!(state.reports[0].photo_uri.as_deref(), Some(photo.as_str()));
    assert!(state.description.is_empty());
    assert_eq!(state.location, "Kuala Lumpur, Malaysia");
    assert_eq!(state.success_message(), Some(SUBMITTED_MESSAGE));
    assert_eq!(app.profile().profile.waste_reports, 1);

    harness.clock.advance(Duration::seconds(3));
    app.tick().await;
    assert_eq!(app.waste().success_message(), None);

    let id = app.waste().reports[0].id;
    waste(&mut app, WasteAction::DeleteReport(id)).await;
    assert!(app.waste().reports.is_empty());
    assert_eq!(app.profile().profile.waste_reports, 0);
}

#[tokio::test]
async fn failed_write_is_silent() {
    let harness = Harness::new();
    let mut app = harness.signed_up().await;

    events(&mut app, EventsAction::OpenCreateForm).await;
    for action in [
        CreateEventAction::SetTitle("Kuching Waterfront".into()),
        CreateEventAction::SetDescription("Evening litter pick".into()),
        CreateEventAction::OpenLocationSearch,
        CreateEventAction::SelectLocation(0),
    ] {
        events(&mut app, EventsAction::Form(action)).await;
    }

    harness.storage.fail_writes.store(true, Ordering::SeqCst);
    events(&mut app, EventsAction::Form(CreateEventAction::Submit)).await;

    assert!(app.drain_toasts().is_empty());
    assert!(app.events().community.is_empty());
    let form = app.events().create.as_ref().unwrap();
    assert!(!form.submitting);
    assert_eq!(form.title, "Kuching Waterfront");
}

#[tokio::test]
async fn profile_edit_and_logout() {
    let harness = Harness::new();
    let mut app = harness.signed_up().await;
    assert_eq!(app.profile().profile.name, "marina");
    assert_eq!(app.profile().profile.username, "@marina");

    for action in [
        ProfileAction::OpenEdit,
        ProfileAction::SetName("Marina Tan".into()),
        ProfileAction::SetBio("Weekend diver".into()),
        ProfileAction::SaveEdit,
    ] {
        app.dispatch(Intent::Profile(action)).await.unwrap();
    }
    assert_eq!(messages(&mut app), vec!["Profile updated successfully"]);
    assert_eq!(app.profile().profile.name, "Marina Tan");
    assert_eq!(app.profile().profile.bio, "Weekend diver");
    assert_eq!(app.profile().profile.username, "@marina");

    app.dispatch(Intent::Navigate(Screen::Profile))
        .await
        .unwrap();
    app.dispatch(Intent::Profile(ProfileAction::Logout))
        .await
        .unwrap();
    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(app.navigator().depth(), 1);
    assert!(app.session().is_none());
    assert_eq!(
        app.drain_toasts(),
        vec![Toast::info("Logged out successfully")]
    );
}

#[tokio::test]
async fn failed_sign_out_keeps_session() {
    let harness = Harness::new();
    let mut app = harness.signed_up().await;
    app.dispatch(Intent::Navigate(Screen::Profile))
        .await
        .unwrap();

    harness.storage.fail_writes.store(true, Ordering::SeqCst);
    app.dispatch(Intent::Profile(ProfileAction::Logout))
        .await
        .unwrap();

    assert_eq!(app.screen(), Screen::Profile);
    assert_eq!(app.session().unwrap().email, EMAIL);
    assert_eq!(
        app.drain_toasts(),
        vec![Toast::error("Logout failed. Please try again.")]
    );

    // The persisted session agrees with the one in memory.
    let reopened = harness.open().await;
    assert_eq!(reopened.session().unwrap().email, EMAIL);

    harness.storage.fail_writes.store(false, Ordering::SeqCst);
    app.dispatch(Intent::Profile(ProfileAction::Logout))
        .await
        .unwrap();
    assert_eq!(app.screen(), Screen::Login);
    assert!(app.session().is_none());
}

#[tokio::test]
async fn store_changes_start_with_current_snapshots() {
    let harness = Harness::new();
    let app = harness.signed_up().await;

    let changes: Vec<_> = app.store_changes().take(3).collect().await;
    assert_eq!(changes.len(), 3);
    assert!(changes.iter().any(|c| matches!(c, StoreChange::Events(e) if e.is_empty())));
    assert!(changes
        .iter()
        .any(|c| matches!(c, StoreChange::Profile(p) if p.events_attended == 0)));
}
