//! Event commands

use anyhow::{anyhow, Result};
use bluesweep_app::content::{initial_suggestions, search_locations};
use bluesweep_app::screens::{CreateEventAction, EventListing, EventRef, EventsAction};
use bluesweep_app::{AppCore, Intent, Screen};
use bluesweep_core::{BundledImage, EventId, ImageRef};
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use super::{open_screen, PhotoArg};

#[derive(Subcommand)]
pub enum EventsCommand {
    /// List featured and community events by date
    List,
    /// Register for an event: `f<id>` for featured, `c<id>` for community
    Register {
        #[arg(value_parser = parse_event_ref)]
        event: EventRef,
    },
    /// Create a community event
    Create(CreateArgs),
    /// Show where an event takes place
    Map {
        #[arg(value_parser = parse_event_ref)]
        event: EventRef,
    },
    /// Search location suggestions
    Locations {
        /// Blank shows the popular locations
        query: Option<String>,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    /// A suggested location name, or any free text
    #[arg(long)]
    location: String,
    #[arg(long)]
    max_participants: Option<String>,
    /// YYYY-MM-DD, a week from today by default
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long)]
    start: Option<String>,
    #[arg(long)]
    end: Option<String>,
    #[arg(long, value_enum)]
    image: Option<ImageArg>,
    /// Use a photo instead of a bundled image
    #[arg(long, value_enum, conflicts_with = "image")]
    photo: Option<PhotoArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageArg {
    Beach,
    River,
    Lake,
    Mangrove,
}

impl From<ImageArg> for BundledImage {
    fn from(arg: ImageArg) -> Self {
        match arg {
            ImageArg::Beach => Self::Beach,
            ImageArg::River => Self::River,
            ImageArg::Lake => Self::Lake,
            ImageArg::Mangrove => Self::Mangrove,
        }
    }
}

pub async fn run(app: &mut AppCore, cmd: EventsCommand) -> Result<()> {
    if let EventsCommand::Locations { query } = cmd {
        print_locations(query.as_deref().unwrap_or_default());
        return Ok(());
    }

    open_screen(app, Screen::Events).await?;
    match cmd {
        EventsCommand::List => {
            let listings = app.events().listings();
            if listings.is_empty() {
                println!("No events yet");
            }
            for listing in &listings {
                print_listing(listing);
            }
        }
        EventsCommand::Register { event } => {
            if app.events().find(event).is_none() {
                return Err(anyhow!("No event {}", event_tag(event)));
            }
            events(app, EventsAction::Register(event)).await?;
            if let Some(found) = app.events().find(event) {
                println!(
                    "{}: {}/{} participants",
                    found.title, found.participants, found.max_participants
                );
            }
        }
        EventsCommand::Create(args) => create(app, args).await?,
        EventsCommand::Map { event } => {
            events(app, EventsAction::ShowMap(event)).await?;
            let Some(map) = &app.events().map else {
                return Err(anyhow!("No event {}", event_tag(event)));
            };
            println!(
                "{} at {:.4}, {:.4}",
                map.location, map.center.latitude, map.center.longitude
            );
            events(app, EventsAction::CloseMap).await?;
        }
        EventsCommand::Locations { .. } => {}
    }
    Ok(())
}

async fn create(app: &mut AppCore, args: CreateArgs) -> Result<()> {
    events(app, EventsAction::OpenCreateForm).await?;

    let mut actions = vec![
        CreateEventAction::SetTitle(args.title),
        CreateEventAction::SetDescription(args.description),
        CreateEventAction::OpenLocationSearch,
        CreateEventAction::SetLocationQuery(args.location.clone()),
    ];
    if let Some(max) = args.max_participants {
        actions.push(CreateEventAction::SetMaxParticipants(max));
    }
    if let Some(date) = args.date {
        actions.push(CreateEventAction::SetDate(date));
    }
    if let Some(start) = args.start {
        actions.push(CreateEventAction::SetStartTime(start));
    }
    if let Some(end) = args.end {
        actions.push(CreateEventAction::SetEndTime(end));
    }
    for action in actions {
        form(app, action).await?;
    }

    // An exact suggestion wins over the typed text.
    let exact = app
        .events()
        .create
        .as_ref()
        .and_then(|f| f.location_search.as_ref())
        .and_then(|search| {
            search
                .results
                .iter()
                .position(|s| s.name.eq_ignore_ascii_case(args.location.trim()))
        });
    match exact {
        Some(index) => form(app, CreateEventAction::SelectLocation(index)).await?,
        None => form(app, CreateEventAction::UseCustomLocation).await?,
    }

    if let Some(image) = args.image {
        form(app, CreateEventAction::OpenImagePicker).await?;
        form(app, CreateEventAction::PickDefaultImage(image.into())).await?;
    } else if let Some(photo) = args.photo {
        form(app, CreateEventAction::OpenImagePicker).await?;
        form(app, CreateEventAction::RequestImage(photo.into())).await?;
        form(app, CreateEventAction::UseCustomImage).await?;
    }

    form(app, CreateEventAction::Submit).await?;
    if app.events().create.is_none() {
        if let Some(created) = app.events().community.iter().max_by_key(|e| e.id) {
            println!("Created {} as c{}", created.title, created.id.value());
        }
    }
    Ok(())
}

async fn events(app: &mut AppCore, action: EventsAction) -> Result<()> {
    app.dispatch(Intent::Events(action)).await?;
    Ok(())
}

async fn form(app: &mut AppCore, action: CreateEventAction) -> Result<()> {
    events(app, EventsAction::Form(action)).await
}

fn print_listing(listing: &EventListing) {
    let event = &listing.event;
    println!(
        "{:<5} {} [{}]",
        event_tag(listing.reference),
        event.title,
        event.action_label()
    );
    println!("      {} | {}", listing.formatted_date, event.time);
    println!("      {}", event.location);
    println!(
        "      {} ({})",
        listing.participants_label(),
        listing.spots_label()
    );
    match &event.image {
        ImageRef::Bundled(image) => println!("      Image: {}", image.label()),
        ImageRef::Uri(uri) => println!("      Image: {uri}"),
    }
}

fn print_locations(query: &str) {
    let (heading, results) = if query.trim().is_empty() {
        ("Popular Locations", initial_suggestions())
    } else {
        ("Search Results", search_locations(query))
    };
    if results.is_empty() {
        println!("No locations found. `events create --location` accepts any text.");
        return;
    }
    println!("{heading}");
    for suggestion in results {
        match suggestion.description {
            Some(description) => println!("  {} - {description}", suggestion.name),
            None => println!("  {}", suggestion.name),
        }
    }
}

pub fn event_tag(reference: EventRef) -> String {
    match reference {
        EventRef::Featured(id) => format!("f{id}"),
        EventRef::Community(id) => format!("c{}", id.value()),
    }
}

pub fn parse_event_ref(text: &str) -> Result<EventRef, String> {
    let invalid = || format!("'{text}' is not an event: use f<id> or c<id>");
    let mut chars = text.trim().chars();
    let kind = chars.next();
    let id = chars.as_str().parse::<u32>().map_err(|_| invalid())?;
    match kind {
        Some('f' | 'F') => Ok(EventRef::Featured(id)),
        Some('c' | 'C') => Ok(EventRef::Community(EventId::new(id))),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_refs_parse_and_print() {
        assert_eq!(parse_event_ref("f2"), Ok(EventRef::Featured(2)));
        assert_eq!(
            parse_event_ref("C14"),
            Ok(EventRef::Community(EventId::new(14)))
        );
        assert_eq!(event_tag(EventRef::Community(EventId::new(14))), "c14");
        assert_eq!(event_tag(EventRef::Featured(3)), "f3");
    }

    #[test]
    fn bad_event_refs_are_rejected() {
        for text in ["", "f", "x3", "3", "c-1", "fé", "é3"] {
            assert!(parse_event_ref(text).is_err(), "{text} should not parse");
        }
    }
}
