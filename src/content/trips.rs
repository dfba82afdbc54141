//! Trip packages and the booking calendar candidates.
//!
//! All offerings are fixed content compiled into the binary. Availability
//! will eventually come from a real calendar; until then the booking page
//! works off the candidate lists below.

use chrono::NaiveDate;

/// One guided trip offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripPackage {
    HalfDay,
    FullDay,
    MultiDay,
}

impl TripPackage {
    pub fn all() -> Vec<Self> {
        vec![TripPackage::HalfDay, TripPackage::FullDay, TripPackage::MultiDay]
    }

    pub fn id(&self) -> &'static str {
        match self {
            TripPackage::HalfDay => "half-day",
            TripPackage::FullDay => "full-day",
            TripPackage::MultiDay => "multi-day",
        }
    }

    /// Short card title used on the services page.
    pub fn title(&self) -> &'static str {
        match self {
            TripPackage::HalfDay => "Half-Day Adventure",
            TripPackage::FullDay => "Full-Day Expedition",
            TripPackage::MultiDay => "Multi-Day Package",
        }
    }

    /// Full display name used in the booking selector and summary.
    pub fn label(&self) -> &'static str {
        match self {
            TripPackage::HalfDay => "Half-Day Adventure (4 hours)",
            TripPackage::FullDay => "Full-Day Expedition (8 hours)",
            TripPackage::MultiDay => "Multi-Day Package",
        }
    }

    pub fn duration(&self) -> &'static str {
        match self {
            TripPackage::HalfDay => "4 hours",
            TripPackage::FullDay => "8 hours",
            TripPackage::MultiDay => "2-3 days",
        }
    }

    pub fn price_label(&self) -> &'static str {
        match self {
            TripPackage::HalfDay => "$350",
            TripPackage::FullDay => "$650",
            TripPackage::MultiDay => "$1,200/day",
        }
    }

    pub fn price_note(&self) -> &'static str {
        match self {
            TripPackage::HalfDay | TripPackage::FullDay => "for 1-2 people",
            TripPackage::MultiDay => "per day (1-2 people)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TripPackage::HalfDay => {
                "Perfect for beginners or those with limited time. Experience Ely's \
                 best fishing spots with professional guidance."
            }
            TripPackage::FullDay => {
                "The complete Ely fishing experience. Explore multiple prime locations \
                 and target various species throughout the day."
            }
            TripPackage::MultiDay => {
                "Immerse yourself in the Boundary Waters experience with consecutive \
                 days of guided fishing across different lakes."
            }
        }
    }

    pub fn inclusions(&self) -> &'static [&'static str] {
        match self {
            TripPackage::HalfDay => &[
                "Professional guide (James)",
                "Fishing equipment & tackle",
                "Bait and lures",
                "Basic fish cleaning",
                "Safety equipment",
                "Local knowledge & techniques",
            ],
            TripPackage::FullDay => &[
                "Professional guide (James)",
                "All fishing equipment & premium tackle",
                "Variety of baits and lures",
                "Shore lunch (fresh catch prepared lakeside)",
                "Complete fish cleaning & packaging",
                "Safety equipment & first aid",
                "Boat, motor & fuel",
                "Cooler with ice",
            ],
            TripPackage::MultiDay => &[
                "Daily professional guiding",
                "Premium equipment for entire stay",
                "Multiple lake access",
                "Daily shore lunch",
                "Fish cleaning & packaging",
                "Lodging recommendations",
                "Trip planning & coordination",
            ],
        }
    }

    pub fn best_for(&self) -> &'static str {
        match self {
            TripPackage::HalfDay => "Beginners, families with young kids, time-constrained visitors",
            TripPackage::FullDay => "Serious anglers, groups wanting full experience, trophy hunters",
            TripPackage::MultiDay => "Fishing enthusiasts, special occasions, ultimate wilderness experience",
        }
    }

    pub fn photo(&self) -> &'static str {
        match self {
            TripPackage::HalfDay => "/photos/fish3.jpg",
            TripPackage::FullDay => "/photos/fish1.jpg",
            TripPackage::MultiDay => "/photos/fish2.jpg",
        }
    }

    pub fn is_popular(&self) -> bool {
        matches!(self, TripPackage::FullDay)
    }
}

/// Specialized trips and add-ons listed below the main packages.
pub struct AddOn {
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

pub const ADD_ONS: &[AddOn] = &[
    AddOn {
        title: "Ice Fishing (Winter)",
        price: "$400/day",
        description: "Experience Minnesota winter fishing at its finest with heated \
                      shelters and specialized equipment.",
    },
    AddOn {
        title: "Family Packages",
        price: "Custom pricing",
        description: "Specially designed trips for families with children, including \
                      kid-friendly equipment and techniques.",
    },
    AddOn {
        title: "Corporate Groups",
        price: "Group rates available",
        description: "Team building and corporate outings with customized packages \
                      for larger groups.",
    },
    AddOn {
        title: "Photography Trips",
        price: "+$100",
        description: "Capture your adventure with professional guidance for the best \
                      fishing photography opportunities.",
    },
];

// Placeholder availability until a real calendar backend exists.
const OPEN_DATES: &[&str] = &[
    "2025-01-15",
    "2025-01-16",
    "2025-01-18",
    "2025-01-20",
    "2025-01-22",
    "2025-01-25",
    "2025-01-27",
    "2025-01-29",
    "2025-02-01",
    "2025-02-03",
];

pub const DEPARTURE_TIMES: &[&str] = &["6:00 AM", "7:00 AM", "8:00 AM", "1:00 PM", "2:00 PM"];

/// The candidate dates offered on the booking page, in calendar order.
pub fn open_dates() -> Vec<NaiveDate> {
    OPEN_DATES
        .iter()
        .map(|s| s.parse().expect("open date in calendar list"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_ids_are_unique() {
        let ids: Vec<_> = TripPackage::all().iter().map(|t| t.id()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn every_trip_has_inclusions() {
        for trip in TripPackage::all() {
            assert!(!trip.inclusions().is_empty(), "{} has no inclusions", trip.id());
        }
    }

    #[test]
    fn half_day_pricing_matches_listing() {
        assert_eq!(TripPackage::HalfDay.label(), "Half-Day Adventure (4 hours)");
        assert_eq!(TripPackage::HalfDay.price_label(), "$350");
    }

    #[test]
    fn only_full_day_is_popular() {
        let popular: Vec<_> = TripPackage::all()
            .into_iter()
            .filter(|t| t.is_popular())
            .collect();
        assert_eq!(popular, vec![TripPackage::FullDay]);
    }

    #[test]
    fn open_dates_parse_and_stay_ordered() {
        let dates = open_dates();
        assert_eq!(dates.len(), OPEN_DATES.len());
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}
