use bluesweep_core::BundledImage;
use serde::Serialize;

/// Home screen tips, shown in rotation.
pub const ECO_TIPS: [&str; 5] = [
    "Use reusable water bottles to reduce plastic waste",
    "Participate in local beach cleanups",
    "Reduce single-use plastics in your daily life",
    "Support ocean conservation organizations",
    "Learn about marine ecosystems and their importance",
];

/// "Did you know?" facts.
pub const TRIVIA_FACTS: [&str; 5] = [
    "Did you know? 8 million tons of plastic are dumped into the ocean every year.",
    "Did you know? By 2050, there could be more plastic than fish in the oceans by weight.",
    "Did you know? Only 9% of all plastic ever produced has been recycled.",
    "Did you know? A single plastic bottle can take up to 450 years to decompose.",
    "Did you know? Microplastics have been found in 90% of bottled water.",
];

/// A slide in the awareness carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Infographic {
    /// Slide heading
    pub title: &'static str,
    /// Caption under the image
    pub description: &'static str,
    /// Slide artwork
    pub image: BundledImage,
}

/// Carousel slides in display order.
pub const INFOGRAPHICS: [Infographic; 3] = [
    Infographic {
        title: "Ocean Plastic Pollution",
        description: "Learn about the impact of plastic on marine ecosystems",
        image: BundledImage::PlasticPollution,
    },
    Infographic {
        title: "Microplastics",
        description: "Tiny plastic particles that harm marine life and enter our food chain",
        image: BundledImage::MicroplasticPollution,
    },
    Infographic {
        title: "Ocean Acidification",
        description: "How CO2 emissions are changing ocean chemistry",
        image: BundledImage::OceanAcidification,
    },
];

/// A common pollutant with a short explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pollutant {
    /// Pollutant name
    pub name: &'static str,
    /// What it does to the ocean
    pub description: &'static str,
    /// List icon
    pub icon: BundledImage,
}

/// Pollutants listed on the awareness screen.
pub const POLLUTANTS: [Pollutant; 4] = [
    Pollutant {
        name: "Plastic",
        description: "Non-biodegradable material that breaks down into microplastics",
        icon: BundledImage::PlasticPollution,
    },
    Pollutant {
        name: "Microplastics",
        description: "Tiny plastic particles that enter the food chain",
        icon: BundledImage::MicroplasticPollution,
    },
    Pollutant {
        name: "Ocean Acidification",
        description: "Industrial chemicals that disrupt marine ecosystems",
        icon: BundledImage::OceanAcidification,
    },
    Pollutant {
        name: "Marine Ecosystems",
        description: "Protecting our ocean's diverse ecosystems",
        icon: BundledImage::Mangrove,
    },
];
