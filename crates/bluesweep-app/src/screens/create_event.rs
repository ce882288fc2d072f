//! Create-event dialog with its location search and image picker

use bluesweep_core::{BundledImage, ImageRef, NewEvent};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::content::{initial_suggestions, search_locations, LocationSuggestion};
use crate::core::{Command, PhotoSource, PhotoTarget, UpdateContext};
use crate::toast::Toast;

/// Capacity prefilled in the form.
pub const DEFAULT_MAX_PARTICIPANTS: &str = "10";
/// Start time prefilled in the form.
pub const DEFAULT_START_TIME: &str = "09:00 AM";
/// End time prefilled in the form.
pub const DEFAULT_END_TIME: &str = "12:00 PM";
/// Days between today and the preselected event date.
pub const DEFAULT_DAYS_AHEAD: i64 = 7;

/// Location search sub-dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSearch {
    /// Text typed so far
    pub query: String,
    /// Matching places
    pub results: Vec<LocationSuggestion>,
}

impl Default for LocationSearch {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: initial_suggestions(),
        }
    }
}

impl LocationSearch {
    /// Replace the query and rerun the search.
    pub fn set_query(&mut self, query: String) {
        self.results = search_locations(&query);
        self.query = query;
    }

    /// True when a typed query matched nothing.
    pub fn no_results(&self) -> bool {
        self.results.is_empty() && !self.query.trim().is_empty()
    }

    /// Heading shown above the untouched list.
    pub fn heading(&self) -> Option<&'static str> {
        self.query.trim().is_empty().then_some("Popular Locations")
    }
}

/// Image picker sub-dialog. A captured photo is previewed before use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePicker {
    /// Captured photo awaiting confirmation
    pub preview: Option<String>,
}

/// Create-event dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventForm {
    /// Title field
    pub title: String,
    /// Description field
    pub description: String,
    /// Chosen location
    pub location: String,
    /// Digits only
    pub max_participants: String,
    /// Event day
    pub date: NaiveDate,
    /// Start time text
    pub start_time: String,
    /// End time text
    pub end_time: String,
    /// Chosen image
    pub image: Option<ImageRef>,
    /// Open location search
    pub location_search: Option<LocationSearch>,
    /// Open image picker
    pub image_picker: Option<ImagePicker>,
    /// Create request in flight
    pub submitting: bool,
}

/// Create-event dialog actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreateEventAction {
    /// Edit the title
    SetTitle(String),
    /// Edit the description
    SetDescription(String),
    /// Edit the capacity; anything but digits is ignored
    SetMaxParticipants(String),
    /// Pick the day
    SetDate(NaiveDate),
    /// Edit the start time
    SetStartTime(String),
    /// Edit the end time
    SetEndTime(String),

    /// Open the location search
    OpenLocationSearch,
    /// Type into the location search
    SetLocationQuery(String),
    /// Pick a result by its index in the current list
    SelectLocation(usize),
    /// Use the typed query as the location
    UseCustomLocation,
    /// Close the search without picking
    CloseLocationSearch,

    /// Open the image picker
    OpenImagePicker,
    /// Use one of the bundled event images
    PickDefaultImage(BundledImage),
    /// Ask the photo provider for a picture
    RequestImage(PhotoSource),
    /// A photo URI arrived
    ImageCaptured(String),
    /// Accept the previewed photo
    UseCustomImage,
    /// Close the picker without choosing
    CloseImagePicker,

    /// Validate and save
    Submit,
}

impl CreateEventForm {
    /// Empty form with the defaults, dated a week after today.
    pub fn new(ctx: &UpdateContext) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            max_participants: DEFAULT_MAX_PARTICIPANTS.to_string(),
            date: ctx.today() + Duration::days(DEFAULT_DAYS_AHEAD),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            image: Some(ImageRef::Bundled(BundledImage::Beach)),
            location_search: None,
            image_picker: None,
            submitting: false,
        }
    }

    fn capacity(&self) -> Option<u32> {
        self.max_participants.parse::<u32>().ok().filter(|n| *n > 0)
    }

    /// Names of the fields that keep the form from being submitted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.capacity().is_none() {
            missing.push("maximum participants");
        }
        if self.image.is_none() {
            missing.push("image");
        }
        missing
    }

    /// Whether every required field is filled.
    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// "09:00 AM - 12:00 PM"
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// Event fields for a valid form.
    pub fn to_new_event(&self) -> Option<NewEvent> {
        let max_participants = self.capacity()?;
        let image = self.image.clone()?;
        if !self.is_valid() {
            return None;
        }
        Some(NewEvent {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date.and_time(NaiveTime::MIN).and_utc(),
            time: self.time_range(),
            location: self.location.clone(),
            max_participants,
            image,
        })
    }

    /// Apply an action.
    pub fn update(&mut self, action: CreateEventAction, _ctx: &UpdateContext) -> Vec<Command> {
        match action {
            CreateEventAction::SetTitle(title) => self.title = title,
            CreateEventAction::SetDescription(description) => self.description = description,
            CreateEventAction::SetMaxParticipants(value) => {
                if value.chars().all(|c| c.is_ascii_digit()) {
                    self.max_participants = value;
                }
            }
            CreateEventAction::SetDate(date) => self.date = date,
            CreateEventAction::SetStartTime(time) => self.start_time = time,
            CreateEventAction::SetEndTime(time) => self.end_time = time,

            CreateEventAction::OpenLocationSearch => {
                self.location_search = Some(LocationSearch::default());
            }
            CreateEventAction::SetLocationQuery(query) => {
                if let Some(search) = &mut self.location_search {
                    search.set_query(query);
                }
            }
            CreateEventAction::SelectLocation(index) => {
                let picked = self
                    .location_search
                    .as_ref()
                    .and_then(|search| search.results.get(index))
                    .map(|suggestion| suggestion.name.clone());
                if let Some(name) = picked {
                    self.location = name;
                    self.location_search = None;
                }
            }
            CreateEventAction::UseCustomLocation => {
                let typed = self
                    .location_search
                    .as_ref()
                    .map(|search| search.query.clone())
                    .filter(|query| !query.trim().is_empty());
                if let Some(query) = typed {
                    self.location = query;
                    self.location_search = None;
                }
            }
            CreateEventAction::CloseLocationSearch => self.location_search = None,

            CreateEventAction::OpenImagePicker => self.image_picker = Some(ImagePicker::default()),
            CreateEventAction::PickDefaultImage(image) => {
                if self.image_picker.is_some() && BundledImage::event_defaults().contains(&image) {
                    self.image = Some(ImageRef::Bundled(image));
                    self.image_picker = None;
                }
            }
            CreateEventAction::RequestImage(source) => {
                if self.image_picker.is_some() {
                    return vec![Command::CapturePhoto {
                        source,
                        target: PhotoTarget::EventImage,
                    }];
                }
            }
            CreateEventAction::ImageCaptured(uri) => {
                if let Some(picker) = &mut self.image_picker {
                    picker.preview = Some(uri);
                }
            }
            CreateEventAction::UseCustomImage => {
                if let Some(uri) = self.image_picker.as_mut().and_then(|p| p.preview.take()) {
                    self.image = Some(ImageRef::Uri(uri));
                    self.image_picker = None;
                }
            }
            CreateEventAction::CloseImagePicker => self.image_picker = None,

            CreateEventAction::Submit => return self.submit(),
        }
        Vec::new()
    }

    fn submit(&mut self) -> Vec<Command> {
        if self.submitting {
            return Vec::new();
        }
        match self.to_new_event() {
            Some(event) => {
                self.submitting = true;
                vec![Command::CreateEvent(event)]
            }
            None => vec![Command::Toast(Toast::warning(format!(
                "Please provide: {}",
                self.missing_fields().join(", ")
            )))],
        }
    }
}
