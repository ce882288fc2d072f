use serde::{Deserialize, Serialize};
use std::fmt;

/// Images shipped with the app.
///
/// The integer code is what the event store persists under `_image_type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BundledImage {
    /// Sandy shoreline; the fallback image
    #[default]
    Beach,
    /// River bank
    River,
    /// Lake shore
    Lake,
    /// Mangrove forest
    Mangrove,
    /// Plastic washed up on a beach
    PlasticPollution,
    /// Microplastic close-up
    MicroplasticPollution,
    /// Acidification infographic
    OceanAcidification,
    /// App mascot
    Mascot,
}

impl BundledImage {
    /// All bundled images in code order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Beach,
            Self::River,
            Self::Lake,
            Self::Mangrove,
            Self::PlasticPollution,
            Self::MicroplasticPollution,
            Self::OceanAcidification,
            Self::Mascot,
        ]
    }

    /// Images offered by the event image picker.
    pub fn event_defaults() -> &'static [Self] {
        &[Self::Beach, Self::River, Self::Lake, Self::Mangrove]
    }

    /// Stable persisted code.
    pub fn code(self) -> i64 {
        match self {
            Self::Beach => 1,
            Self::River => 2,
            Self::Lake => 3,
            Self::Mangrove => 4,
            Self::PlasticPollution => 5,
            Self::MicroplasticPollution => 6,
            Self::OceanAcidification => 7,
            Self::Mascot => 8,
        }
    }

    /// Decode a persisted code.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::all().iter().copied().find(|image| image.code() == code)
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beach => "Beach",
            Self::River => "River",
            Self::Lake => "Lake",
            Self::Mangrove => "Mangrove",
            Self::PlasticPollution => "Plastic Pollution",
            Self::MicroplasticPollution => "Microplastic Pollution",
            Self::OceanAcidification => "Ocean Acidification",
            Self::Mascot => "Mascot",
        }
    }

    /// Resource name the platform image loader resolves.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::River => "river",
            Self::Lake => "lake",
            Self::Mangrove => "mangrove",
            Self::PlasticPollution => "plastic_pollution",
            Self::MicroplasticPollution => "microplastic_pollution",
            Self::OceanAcidification => "ocean_acidification",
            Self::Mascot => "mascot",
        }
    }
}

impl fmt::Display for BundledImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Either a bundled resource or an external URI (gallery, camera).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageRef {
    /// An image shipped with the app
    Bundled(BundledImage),
    /// A picked or captured image
    Uri(String),
}

impl ImageRef {
    /// The URI, if this is not a bundled image.
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Uri(uri) => Some(uri),
            Self::Bundled(_) => None,
        }
    }

    /// The bundled image, if this is one.
    pub fn bundled(&self) -> Option<BundledImage> {
        match self {
            Self::Bundled(image) => Some(*image),
            Self::Uri(_) => None,
        }
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self::Bundled(BundledImage::default())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled(image) => write!(f, "res:{}", image.resource_name()),
            Self::Uri(uri) => f.write_str(uri),
        }
    }
}
