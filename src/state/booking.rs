//! Booking selector state.
//!
//! The booking page is a linear wizard: trip, then date and time, then a
//! read-only summary. The page component owns one `BookingSelection` and
//! passes setter callbacks down to the stage views; each stage renders only
//! once every earlier stage has a selection.

use chrono::NaiveDate;

use crate::config;
use crate::content::trips::TripPackage;

/// Which stage of the wizard is currently the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    ChooseTrip,
    ChooseSchedule,
    Review,
}

/// In-memory selection for one visit to the booking page. Created empty on
/// view entry, mutated only by explicit selection events, discarded on view
/// exit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSelection {
    trip: Option<TripPackage>,
    date: Option<NaiveDate>,
    time: Option<&'static str>,
}

/// Read-only recap rendered once the selection is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub trip_name: &'static str,
    pub date: String,
    pub time: &'static str,
    pub price: &'static str,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trip(&self) -> Option<TripPackage> {
        self.trip
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&'static str> {
        self.time
    }

    pub fn stage(&self) -> BookingStage {
        match (self.trip, self.date, self.time) {
            (None, ..) => BookingStage::ChooseTrip,
            (Some(_), None, _) | (Some(_), Some(_), None) => BookingStage::ChooseSchedule,
            (Some(_), Some(_), Some(_)) => BookingStage::Review,
        }
    }

    /// Picking a trip replaces any previous pick. Switching to a different
    /// trip clears the date and time so the schedule never describes an
    /// offering the visitor no longer has selected.
    pub fn choose_trip(&mut self, trip: TripPackage) {
        if self.trip != Some(trip) {
            self.date = None;
            self.time = None;
        }
        self.trip = Some(trip);
    }

    /// Only meaningful once a trip is chosen; ignored before that so the
    /// state can never run ahead of the stage gating. Moving to a different
    /// date clears the chosen time.
    pub fn choose_date(&mut self, date: NaiveDate) {
        if self.trip.is_none() {
            return;
        }
        if self.date != Some(date) {
            self.time = None;
        }
        self.date = Some(date);
    }

    pub fn choose_time(&mut self, time: &'static str) {
        if self.date.is_none() {
            return;
        }
        self.time = Some(time);
    }

    pub fn schedule_open(&self) -> bool {
        self.trip.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.trip.is_some() && self.date.is_some() && self.time.is_some()
    }

    pub fn summary(&self) -> Option<BookingSummary> {
        let trip = self.trip?;
        let date = self.date?;
        let time = self.time?;
        Some(BookingSummary {
            trip_name: trip.label(),
            date: long_date(date),
            time,
            price: trip.price_label(),
        })
    }

    /// Prefilled mailto link so a completed selection can be sent by hand
    /// while the real booking backend does not exist yet.
    pub fn inquiry_mailto(&self) -> Option<String> {
        let summary = self.summary()?;
        let subject = format!("Booking inquiry: {}", summary.trip_name);
        let body = format!(
            "Hi,\n\nI'd like to book the {} on {} at {}. Listed price: {}.\n\nThanks!",
            summary.trip_name, summary.date, summary.time, summary.price
        );
        Some(format!(
            "mailto:{}?subject={}&body={}",
            config::BOOKING_EMAIL,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}

/// Long-form date used in the schedule heading and the summary,
/// e.g. "Wednesday, January 15, 2025".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).expect("valid test date")
    }

    #[test]
    fn stages_gate_monotonically() {
        let mut selection = BookingSelection::new();
        assert_eq!(selection.stage(), BookingStage::ChooseTrip);
        assert!(!selection.schedule_open());

        selection.choose_trip(TripPackage::HalfDay);
        assert_eq!(selection.stage(), BookingStage::ChooseSchedule);
        assert!(selection.schedule_open());
        assert!(!selection.is_complete());

        selection.choose_date(jan(15));
        assert_eq!(selection.stage(), BookingStage::ChooseSchedule);

        selection.choose_time("7:00 AM");
        assert_eq!(selection.stage(), BookingStage::Review);
        assert!(selection.is_complete());
    }

    #[test]
    fn selections_before_their_stage_are_ignored() {
        let mut selection = BookingSelection::new();
        selection.choose_date(jan(15));
        assert_eq!(selection.date(), None);

        selection.choose_time("6:00 AM");
        assert_eq!(selection.time(), None);
        assert_eq!(selection.stage(), BookingStage::ChooseTrip);
    }

    #[test]
    fn reselecting_replaces_never_appends() {
        let mut selection = BookingSelection::new();
        selection.choose_trip(TripPackage::HalfDay);
        selection.choose_trip(TripPackage::FullDay);
        assert_eq!(selection.trip(), Some(TripPackage::FullDay));
    }

    #[test]
    fn changing_the_trip_resets_the_schedule() {
        let mut selection = BookingSelection::new();
        selection.choose_trip(TripPackage::HalfDay);
        selection.choose_date(jan(15));
        selection.choose_time("7:00 AM");

        selection.choose_trip(TripPackage::MultiDay);
        assert_eq!(selection.date(), None);
        assert_eq!(selection.time(), None);
        assert_eq!(selection.stage(), BookingStage::ChooseSchedule);
    }

    #[test]
    fn repicking_the_same_trip_keeps_the_schedule() {
        let mut selection = BookingSelection::new();
        selection.choose_trip(TripPackage::HalfDay);
        selection.choose_date(jan(15));
        selection.choose_time("7:00 AM");

        selection.choose_trip(TripPackage::HalfDay);
        assert!(selection.is_complete());
    }

    #[test]
    fn changing_the_date_resets_the_time() {
        let mut selection = BookingSelection::new();
        selection.choose_trip(TripPackage::HalfDay);
        selection.choose_date(jan(15));
        selection.choose_time("7:00 AM");

        selection.choose_date(jan(16));
        assert_eq!(selection.time(), None);
        assert_eq!(selection.stage(), BookingStage::ChooseSchedule);
    }

    #[test]
    fn summary_recaps_the_half_day_fixture() {
        let mut selection = BookingSelection::new();
        selection.choose_trip(TripPackage::HalfDay);
        selection.choose_date(jan(15));
        selection.choose_time("7:00 AM");

        let summary = selection.summary().expect("complete selection");
        assert_eq!(summary.trip_name, "Half-Day Adventure (4 hours)");
        assert_eq!(summary.date, "Wednesday, January 15, 2025");
        assert_eq!(summary.time, "7:00 AM");
        assert_eq!(summary.price, "$350");
    }

    #[test]
    fn summary_is_absent_until_complete() {
        let mut selection = BookingSelection::new();
        assert!(selection.summary().is_none());
        selection.choose_trip(TripPackage::FullDay);
        selection.choose_date(jan(20));
        assert!(selection.summary().is_none());
    }

    #[test]
    fn inquiry_mailto_is_escaped() {
        let mut selection = BookingSelection::new();
        selection.choose_trip(TripPackage::HalfDay);
        selection.choose_date(jan(15));
        selection.choose_time("7:00 AM");

        let link = selection.inquiry_mailto().expect("complete selection");
        assert!(link.starts_with("mailto:book@thorstenson.guide?subject="));
        assert!(!link.contains(' '));
        assert!(link.contains("Half-Day%20Adventure"));
    }

    #[test]
    fn long_date_is_unpadded() {
        assert_eq!(long_date(jan(3)), "Friday, January 3, 2025");
    }
}
