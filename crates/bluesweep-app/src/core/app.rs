//! # App Core
//!
//! [`AppCore`] is the single owner of application state. A host feeds it
//! [`Intent`]s; the addressed screen reducer returns [`Command`]s, which
//! the core executes against the stores and effect handlers. Each result
//! goes back into the reducers as a follow-up action until no command is
//! left.
//!
//! ```text
//! Intent → reducer → Command → effect/store → follow-up action → reducer …
//! ```
//!
//! Persistence failures are logged and otherwise swallowed; the reducer that
//! asked sees an `ok: false` outcome where it cares.

use std::collections::VecDeque;
use std::sync::Arc;

use bluesweep_core::{
    AuthEffects, AuthError, AuthUser, CleanupEvent, LocationEffects, PhotoEffects, Result,
    StorageEffects, TimeEffects, WasteReport,
};
use bluesweep_effects::{
    FilesystemStorageHandler, LocalAuthHandler, SampleLocationProvider, SamplePhotoProvider,
    SystemClock,
};
use bluesweep_store::{EventDataStore, StoredProfile, UserDataStore, WasteReportStore};
use futures::stream::{self, BoxStream, StreamExt};

use super::{AuthFlow, Command, Intent, IntentError, PhotoTarget, UpdateContext};
use crate::config::AppConfig;
use crate::navigation::{Navigator, Screen};
use crate::screens::{
    AwarenessState, CreateEventAction, EventsAction, EventsState, HomeAction, HomeState,
    LoginAction, LoginState, ProfileAction, ProfileState, WasteAction, WasteState,
};
use crate::toast::Toast;

/// Effect handlers the core runs commands against.
#[derive(Clone)]
pub struct AppEffects {
    /// Document storage shared by the stores
    pub storage: Arc<dyn StorageEffects>,
    /// Auth provider
    pub auth: Arc<dyn AuthEffects>,
    /// Device location
    pub location: Arc<dyn LocationEffects>,
    /// Camera and gallery
    pub photo: Arc<dyn PhotoEffects>,
    /// Wall clock
    pub clock: Arc<dyn TimeEffects>,
}

impl AppEffects {
    /// Local handlers: documents under `config.data_dir`, storage-backed
    /// auth, sample location and photo providers, system clock.
    pub fn local(config: &AppConfig) -> Self {
        let storage: Arc<dyn StorageEffects> =
            Arc::new(FilesystemStorageHandler::new(config.data_dir.clone()));
        let clock: Arc<dyn TimeEffects> = Arc::new(SystemClock);
        Self {
            auth: Arc::new(LocalAuthHandler::new(storage.clone())),
            location: Arc::new(SampleLocationProvider::new(
                config.location_mode,
                config.location_permission,
            )),
            photo: Arc::new(SamplePhotoProvider::new(clock.clone())),
            storage,
            clock,
        }
    }
}

/// A fresh snapshot published by one of the stores.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    /// Community events, date ascending
    Events(Vec<CleanupEvent>),
    /// Waste reports, newest first
    Reports(Vec<WasteReport>),
    /// Profile fields
    Profile(StoredProfile),
}

/// Application state plus the stores and handlers it runs against.
pub struct AppCore {
    config: AppConfig,
    effects: AppEffects,
    events_store: Arc<EventDataStore>,
    reports_store: Arc<WasteReportStore>,
    user_store: Arc<UserDataStore>,

    session: Option<AuthUser>,
    navigator: Navigator,
    toasts: VecDeque<Toast>,

    login: LoginState,
    home: HomeState,
    events: EventsState,
    waste: WasteState,
    profile: ProfileState,
    awareness: AwarenessState,
}

impl AppCore {
    /// Open the stores and start on `Home` if the auth provider already has
    /// a user, otherwise on `Login`.
    pub async fn open(config: AppConfig, effects: AppEffects) -> Result<Self> {
        let events_store = Arc::new(EventDataStore::open(effects.storage.clone()).await?);
        let reports_store = Arc::new(
            WasteReportStore::open(effects.storage.clone(), effects.clock.clone()).await?,
        );
        let user_store = Arc::new(UserDataStore::open(effects.storage.clone()).await?);

        let session = effects.auth.current_user().await;
        let root = if session.is_some() {
            Screen::Home
        } else {
            Screen::Login
        };
        let now = effects.clock.now();

        let mut core = Self {
            events: EventsState::new(now, config.show_featured_events),
            home: HomeState::new(now),
            login: LoginState::default(),
            waste: WasteState::default(),
            profile: ProfileState::default(),
            awareness: AwarenessState::default(),
            navigator: Navigator::new(root),
            toasts: VecDeque::new(),
            session,
            events_store,
            reports_store,
            user_store,
            effects,
            config,
        };
        core.sync_from_stores();
        tracing::info!(screen = %root, "App core ready");
        Ok(core)
    }

    /// Open with the local handlers described by `config`.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let effects = AppEffects::local(&config);
        Self::open(config, effects).await
    }

    /// Configuration the core was opened with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The signed-in user.
    pub fn session(&self) -> Option<&AuthUser> {
        self.session.as_ref()
    }

    /// Navigation history.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Screen currently showing.
    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Login screen state.
    pub fn login(&self) -> &LoginState {
        &self.login
    }

    /// Home screen state.
    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// Events screen state.
    pub fn events(&self) -> &EventsState {
        &self.events
    }

    /// Waste tracking screen state.
    pub fn waste(&self) -> &WasteState {
        &self.waste
    }

    /// Profile screen state.
    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    /// Awareness screen state.
    pub fn awareness(&self) -> &AwarenessState {
        &self.awareness
    }

    /// "Welcome, {email}!"
    pub fn greeting(&self) -> String {
        HomeState::greeting(&self.context())
    }

    /// Toasts raised since the last call, oldest first.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }

    /// Inputs handed to the reducers: the time and the signed-in email.
    pub fn context(&self) -> UpdateContext {
        let ctx = UpdateContext::new(self.effects.clock.now());
        match &self.session {
            Some(user) => ctx.with_user(user.email.clone()),
            None => ctx,
        }
    }

    /// Run an intent and every command it leads to.
    pub async fn dispatch(&mut self, intent: Intent) -> std::result::Result<(), IntentError> {
        if let Some(screen) = intent.screen() {
            if screen.requires_auth() && self.session.is_none() {
                tracing::warn!(%screen, "Refused intent without a signed-in user");
                return Err(IntentError::Unauthenticated { screen });
            }
        }
        tracing::debug!(?intent, "Dispatching intent");

        let mut pending: VecDeque<Command> = self.reduce(intent).into();
        while let Some(command) = pending.pop_front() {
            for follow_up in self.execute(command).await {
                pending.extend(self.reduce(follow_up));
            }
        }
        Ok(())
    }

    /// Advance time-driven state.
    pub async fn tick(&mut self) {
        // Tick addresses no screen, so it cannot be refused.
        let _ = self.dispatch(Intent::Tick).await;
    }

    fn reduce(&mut self, intent: Intent) -> Vec<Command> {
        let ctx = self.context();
        match intent {
            Intent::Navigate(screen) => vec![Command::Navigate(screen)],
            Intent::Back => vec![Command::Back],
            Intent::Tick => {
                let mut commands = self.home.update(HomeAction::Tick, &ctx);
                commands.extend(self.waste.update(WasteAction::Tick, &ctx));
                commands
            }
            Intent::Login(action) => self.login.update(action, &ctx),
            Intent::Home(action) => self.home.update(action, &ctx),
            Intent::Events(action) => self.events.update(action, &ctx),
            Intent::Waste(action) => self.waste.update(action, &ctx),
            Intent::Profile(action) => self.profile.update(action, &ctx),
            Intent::Awareness(action) => self.awareness.update(action, &ctx),
        }
    }

    async fn execute(&mut self, command: Command) -> Vec<Intent> {
        match command {
            Command::Toast(toast) => {
                tracing::debug!(%toast, "Toast");
                self.toasts.push_back(toast);
                Vec::new()
            }
            Command::Navigate(screen) => {
                if screen.requires_auth() && self.session.is_none() {
                    tracing::warn!(%screen, "Navigation needs a signed-in user");
                } else {
                    self.navigator.navigate(screen);
                }
                Vec::new()
            }
            Command::Back => {
                self.navigator.back();
                Vec::new()
            }
            Command::ResetTo(screen) => {
                self.navigator.reset(screen);
                Vec::new()
            }

            Command::SignIn { email, password } => {
                let result = self.effects.auth.sign_in(&email, &password).await;
                self.signed_in(AuthFlow::SignIn, result)
            }
            Command::SignUp { email, password } => {
                let result = self.effects.auth.sign_up(&email, &password).await;
                self.signed_in(AuthFlow::SignUp, result)
            }
            Command::SendEmailVerification => {
                let result = self.effects.auth.send_email_verification().await;
                auth_sent(AuthFlow::EmailVerification, result)
            }
            Command::SendPasswordReset { email } => {
                let result = self.effects.auth.send_password_reset(&email).await;
                auth_sent(AuthFlow::PasswordReset, result)
            }
            Command::SignOut => {
                let ok = match self.effects.auth.sign_out().await {
                    Ok(()) => {
                        self.session = None;
                        self.reset_screens();
                        true
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Sign-out failed; keeping session");
                        false
                    }
                };
                vec![Intent::Profile(ProfileAction::LogoutFinished { ok })]
            }

            Command::RegisterEvent(id) => match self.events_store.register(id).await {
                Ok(outcome) => {
                    self.sync_from_stores();
                    vec![Intent::Events(EventsAction::RegistrationFinished { id, outcome })]
                }
                Err(e) => {
                    tracing::warn!(%id, error = %e, "Registration not saved");
                    Vec::new()
                }
            },
            Command::CreateEvent(event) => {
                let ok = match self.events_store.add(event).await {
                    Ok(_) => true,
                    Err(e) => {
                        tracing::warn!(error = %e, "Event not saved");
                        false
                    }
                };
                self.sync_from_stores();
                vec![Intent::Events(EventsAction::CreateFinished { ok })]
            }
            Command::RecordAttendance => {
                match self.user_store.increment_events_attended().await {
                    Ok(total) => tracing::debug!(total, "Recorded attendance"),
                    Err(e) => tracing::warn!(error = %e, "Attendance not saved"),
                }
                self.sync_from_stores();
                Vec::new()
            }

            Command::RequestLocation => {
                let address = if self.effects.location.has_permission() {
                    self.effects
                        .location
                        .current_location()
                        .await
                        .map(|location| location.address)
                } else {
                    None
                };
                vec![Intent::Waste(WasteAction::LocationResolved(address))]
            }
            Command::CapturePhoto { source, target } => {
                match self.effects.photo.capture().await {
                    Ok(uri) => {
                        tracing::debug!(?source, %uri, "Captured photo");
                        vec![match target {
                            PhotoTarget::WasteReport => {
                                Intent::Waste(WasteAction::PhotoCaptured(uri))
                            }
                            PhotoTarget::EventImage => Intent::Events(EventsAction::Form(
                                CreateEventAction::ImageCaptured(uri),
                            )),
                        }]
                    }
                    Err(e) => {
                        tracing::warn!(?source, error = %e, "Photo capture failed");
                        Vec::new()
                    }
                }
            }
            Command::SubmitReport(report) => {
                let ok = match self.reports_store.add(report).await {
                    Ok(_) => true,
                    Err(e) => {
                        tracing::warn!(error = %e, "Report not saved");
                        false
                    }
                };
                self.sync_from_stores();
                vec![Intent::Waste(WasteAction::SubmitFinished { ok })]
            }
            Command::DeleteReport(id) => {
                if let Err(e) = self.reports_store.delete(id).await {
                    tracing::warn!(%id, error = %e, "Report not deleted");
                }
                self.sync_from_stores();
                Vec::new()
            }

            Command::SaveProfile(fields) => {
                let result = self
                    .user_store
                    .update_profile(fields.name, fields.username, fields.bio, fields.location)
                    .await;
                let ok = match result {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!(error = %e, "Profile not saved");
                        false
                    }
                };
                self.sync_from_stores();
                vec![Intent::Profile(ProfileAction::SaveFinished { ok })]
            }
        }
    }

    fn signed_in(
        &mut self,
        flow: AuthFlow,
        result: std::result::Result<AuthUser, AuthError>,
    ) -> Vec<Intent> {
        match result {
            Ok(user) => {
                tracing::info!(uid = %user.uid, ?flow, "Signed in");
                self.session = Some(user);
                self.sync_from_stores();
                vec![Intent::Login(LoginAction::AuthSucceeded(flow))]
            }
            Err(e) => vec![Intent::Login(LoginAction::AuthFailed {
                flow,
                message: e.message,
            })],
        }
    }

    fn reset_screens(&mut self) {
        let now = self.effects.clock.now();
        self.login = LoginState::default();
        self.home = HomeState::new(now);
        self.events = EventsState::new(now, self.config.show_featured_events);
        self.waste = WasteState::default();
        self.profile = ProfileState::default();
        self.awareness = AwarenessState::default();
        self.sync_from_stores();
    }

    /// Pull the current snapshot of every store into the screen states.
    fn sync_from_stores(&mut self) {
        self.apply_store_change(StoreChange::Events(self.events_store.list()));
        self.apply_store_change(StoreChange::Reports(self.reports_store.list()));
        self.apply_store_change(StoreChange::Profile(self.user_store.profile()));
    }

    /// Fold one store snapshot into the screen states.
    pub fn apply_store_change(&mut self, change: StoreChange) {
        let ctx = self.context();
        let stored = match change {
            StoreChange::Events(events) => {
                self.events
                    .update(EventsAction::CommunityEventsChanged(events), &ctx);
                self.profile.stored.clone()
            }
            StoreChange::Reports(reports) => {
                self.waste.update(WasteAction::ReportsChanged(reports), &ctx);
                self.profile.stored.clone()
            }
            StoreChange::Profile(stored) => stored,
        };
        let email = self.session.as_ref().map_or("", |user| user.email.as_str());
        self.profile.refresh(
            email,
            &stored,
            self.waste.reports.len(),
            self.events.organized(),
        );
    }

    /// Every snapshot the stores publish from now on, merged.
    pub fn store_changes(&self) -> BoxStream<'static, StoreChange> {
        let events = self.events_store.subscribe().map(StoreChange::Events);
        let reports = self.reports_store.subscribe().map(StoreChange::Reports);
        let profile = self.user_store.subscribe().map(StoreChange::Profile);
        stream::select(stream::select(events, reports), profile).boxed()
    }
}

fn auth_sent(flow: AuthFlow, result: std::result::Result<(), AuthError>) -> Vec<Intent> {
    let action = match result {
        Ok(()) => LoginAction::AuthSucceeded(flow),
        Err(e) => LoginAction::AuthFailed {
            flow,
            message: e.message,
        },
    };
    vec![Intent::Login(action)]
}
