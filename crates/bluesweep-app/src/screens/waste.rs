//! Waste tracking: report form, report history and the pollution map

use bluesweep_core::{NewWasteReport, ReportId, WasteReport};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::format_report_date;
use super::map::{MapAction, MapOutcome, PollutionMapState};
use crate::core::{Command, PhotoSource, PhotoTarget, UpdateContext};
use crate::toast::Toast;

/// Toast and banner text after a report is saved.
pub const SUBMITTED_MESSAGE: &str = "Report submitted successfully!";
/// Toast when the location provider has no permission.
pub const PERMISSION_REQUIRED: &str = "Location permission required";
/// How long the success banner stays up.
pub const SUCCESS_BANNER_SECS: i64 = 3;

/// Tabs on the waste tracking screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WasteTab {
    /// The report form
    #[default]
    Report,
    /// Submitted reports
    History,
}

impl WasteTab {
    /// Tab heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Report => "Report",
            Self::History => "History",
        }
    }
}

/// Waste tracking screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WasteState {
    /// Tab showing
    pub tab: WasteTab,
    /// Report description field
    pub description: String,
    /// Report location field
    pub location: String,
    /// Attached photo
    pub photo_uri: Option<String>,
    /// A location lookup or submission is in flight
    pub loading: bool,
    /// Whether the camera/gallery chooser is open
    pub photo_options_open: bool,
    /// Newest first
    pub reports: Vec<WasteReport>,
    /// The success banner shows until this instant
    pub success_until: Option<DateTime<Utc>>,
    /// Open pollution map
    pub map: Option<PollutionMapState>,
}

/// Waste tracking screen actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WasteAction {
    /// Leave the screen
    Back,
    /// Switch tabs
    SelectTab(WasteTab),
    /// Edit the description
    SetDescription(String),
    /// Edit the location
    SetLocation(String),
    /// Fill the location from the device
    UseCurrentLocation,
    /// Address from the location provider; `None` without permission
    LocationResolved(Option<String>),

    /// Open the camera/gallery chooser
    OpenPhotoOptions,
    /// Close the chooser
    ClosePhotoOptions,
    /// Ask the photo provider for a picture
    TakePhoto(PhotoSource),
    /// A photo URI arrived
    PhotoCaptured(String),
    /// Drop the attached photo
    RemovePhoto,

    /// Save the report
    Submit,
    /// The save finished
    SubmitFinished {
        /// Whether the write succeeded
        ok: bool,
    },
    /// Hide the success banner
    DismissSuccess,
    /// Expire the success banner
    Tick,

    /// New report list from the store
    ReportsChanged(Vec<WasteReport>),
    /// Delete a report from the history
    DeleteReport(ReportId),

    /// Open the pollution map around a location
    OpenMap(String),
    /// Forward an action to the open map
    Map(MapAction),
    /// Close the map without picking
    CloseMap,
}

impl WasteState {
    /// Whether the form can be submitted.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.description.trim().is_empty() && !self.location.trim().is_empty()
    }

    /// Banner text while it is showing.
    pub fn success_message(&self) -> Option<&'static str> {
        self.success_until.map(|_| SUBMITTED_MESSAGE)
    }

    /// History rows as (report, formatted date).
    pub fn history(&self) -> impl Iterator<Item = (&WasteReport, String)> {
        self.reports
            .iter()
            .map(|report| (report, format_report_date(&report.date)))
    }

    /// Apply an action.
    pub fn update(&mut self, action: WasteAction, ctx: &UpdateContext) -> Vec<Command> {
        match action {
            WasteAction::Back => return vec![Command::Back],
            WasteAction::SelectTab(tab) => self.tab = tab,
            WasteAction::SetDescription(description) => self.description = description,
            WasteAction::SetLocation(location) => self.location = location,
            WasteAction::UseCurrentLocation => {
                if !self.loading {
                    self.loading = true;
                    return vec![Command::RequestLocation];
                }
            }
            WasteAction::LocationResolved(address) => {
                self.loading = false;
                self.location = address.unwrap_or_else(|| PERMISSION_REQUIRED.to_string());
            }

            WasteAction::OpenPhotoOptions => self.photo_options_open = true,
            WasteAction::ClosePhotoOptions => self.photo_options_open = false,
            WasteAction::TakePhoto(source) => {
                if self.photo_options_open {
                    return vec![Command::CapturePhoto {
                        source,
                        target: PhotoTarget::WasteReport,
                    }];
                }
            }
            WasteAction::PhotoCaptured(uri) => {
                self.photo_uri = Some(uri);
                self.photo_options_open = false;
            }
            WasteAction::RemovePhoto => self.photo_uri = None,

            WasteAction::Submit => return self.submit(),
            WasteAction::SubmitFinished { ok } => {
                self.loading = false;
                if ok {
                    self.description.clear();
                    self.photo_uri = None;
                    self.success_until = Some(ctx.now + Duration::seconds(SUCCESS_BANNER_SECS));
                    self.tab = WasteTab::History;
                }
            }
            WasteAction::DismissSuccess => self.success_until = None,
            WasteAction::Tick => {
                if self.success_until.is_some_and(|until| ctx.now >= until) {
                    self.success_until = None;
                }
            }

            WasteAction::ReportsChanged(reports) => self.reports = reports,
            WasteAction::DeleteReport(id) => {
                if self.reports.iter().any(|r| r.id == id) {
                    return vec![Command::DeleteReport(id)];
                }
            }

            WasteAction::OpenMap(location) => {
                self.map = Some(PollutionMapState::new(location, true));
            }
            WasteAction::Map(action) => {
                let outcome = self.map.as_mut().and_then(|map| map.update(action));
                if let Some(MapOutcome::LocationPicked(location)) = outcome {
                    self.location = location;
                    self.map = None;
                }
            }
            WasteAction::CloseMap => self.map = None,
        }
        Vec::new()
    }

    fn submit(&mut self) -> Vec<Command> {
        if self.loading {
            return Vec::new();
        }
        if self.description.trim().is_empty() {
            return vec![Command::Toast(Toast::warning("Please add a description"))];
        }
        if self.location.trim().is_empty() {
            return vec![Command::Toast(Toast::warning("Please add a location"))];
        }
        self.loading = true;
        vec![Command::SubmitReport(NewWasteReport {
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            photo_uri: self.photo_uri.clone(),
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluesweep_core::time::epoch;
    use bluesweep_core::LatLng;

    fn ctx() -> UpdateContext {
        UpdateContext::new(epoch())
    }

    fn form(description: &str, location: &str) -> WasteState {
        WasteState {
            description: description.into(),
            location: location.into(),
            ..WasteState::default()
        }
    }

    #[test]
    fn submit_enablement() {
        assert!(!form("", "Penang").can_submit());
        assert!(!form("Bottles", "  ").can_submit());
        assert!(form("Bottles", "Penang").can_submit());

        let mut busy = form("Bottles", "Penang");
        busy.loading = true;
        assert!(!busy.can_submit());
        assert!(busy.update(WasteAction::Submit, &ctx()).is_empty());
    }

    #[test]
    fn submit_clears_form_but_keeps_location() {
        let mut state = form("Fishing nets on the rocks", "Langkawi, Kedah");
        state.photo_uri = Some("content://photo".into());

        let commands = state.update(WasteAction::Submit, &ctx());
        assert_eq!(
            commands,
            vec![Command::SubmitReport(NewWasteReport {
                description: "Fishing nets on the rocks".into(),
                location: "Langkawi, Kedah".into(),
                photo_uri: Some("content://photo".into()),
            })]
        );
        assert!(state.loading);

        state.update(WasteAction::SubmitFinished { ok: true }, &ctx());
        assert!(state.description.is_empty());
        assert_eq!(state.photo_uri, None);
        assert_eq!(state.location, "Langkawi, Kedah");
        assert_eq!(state.success_message(), Some(SUBMITTED_MESSAGE));
        assert_eq!(state.tab, WasteTab::History);
    }

    #[test]
    fn success_banner_expires_after_three_seconds() {
        let mut state = form("Bottles", "Penang");
        state.update(WasteAction::Submit, &ctx());
        state.update(WasteAction::SubmitFinished { ok: true }, &ctx());

        state.update(
            WasteAction::Tick,
            &UpdateContext::new(epoch() + Duration::seconds(2)),
        );
        assert!(state.success_message().is_some());
        state.update(
            WasteAction::Tick,
            &UpdateContext::new(epoch() + Duration::seconds(3)),
        );
        assert!(state.success_message().is_none());
    }

    #[test]
    fn failed_submit_keeps_input() {
        let mut state = form("Bottles", "Penang");
        state.update(WasteAction::Submit, &ctx());
        state.update(WasteAction::SubmitFinished { ok: false }, &ctx());
        assert_eq!(state.description, "Bottles");
        assert!(!state.loading);
        assert!(state.success_message().is_none());
    }

    #[test]
    fn location_without_permission() {
        let mut state = WasteState::default();
        assert_eq!(
            state.update(WasteAction::UseCurrentLocation, &ctx()),
            vec![Command::RequestLocation]
        );
        state.update(WasteAction::LocationResolved(None), &ctx());
        assert_eq!(state.location, PERMISSION_REQUIRED);
        assert!(!state.loading);
    }

    #[test]
    fn photo_options_capture() {
        let mut state = WasteState::default();
        state.update(WasteAction::OpenPhotoOptions, &ctx());
        assert_eq!(
            state.update(WasteAction::TakePhoto(PhotoSource::Camera), &ctx()),
            vec![Command::CapturePhoto {
                source: PhotoSource::Camera,
                target: PhotoTarget::WasteReport,
            }]
        );
        state.update(WasteAction::PhotoCaptured("content://x".into()), &ctx());
        assert_eq!(state.photo_uri.as_deref(), Some("content://x"));
        assert!(!state.photo_options_open);
    }

    #[test]
    fn map_tap_picks_location() {
        let mut state = WasteState::default();
        state.update(WasteAction::OpenMap("Johor Bahru".into()), &ctx());
        state.update(WasteAction::Map(MapAction::Tap(LatLng::new(5.2, 100.3))), &ctx());
        assert_eq!(state.location, "Penang, Malaysia");
        assert!(state.map.is_none());
    }
}
