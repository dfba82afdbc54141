//! Mock social feed for the gallery page.
//!
//! The posts live in a bundled JSON fixture shaped like the payload a real
//! Instagram integration would return, so swapping in the live API later
//! only changes where the bytes come from.

use chrono::NaiveDate;
use serde::Deserialize;

pub const FOLLOWER_COUNT_LABEL: &str = "2.3k";
pub const PROFILE_BIO: &str =
    "🎣 Ely, MN Fishing Guides | 🌲 Boundary Waters Adventures | 👨‍👩‍👧‍👦 Family Business | 📧 Book your trip below!";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedPost {
    pub id: String,
    pub image: String,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    pub posted_on: NaiveDate,
}

const FEED_FIXTURE: &str = include_str!("feed_posts.json");

/// Newest-first posts from the bundled fixture.
pub fn feed_posts() -> Vec<FeedPost> {
    serde_json::from_str(FEED_FIXTURE).expect("bundled feed fixture parses")
}

/// Relative age shown under each post, matching how the feed will label
/// posts once it is live: "2 days ago", "3 weeks ago", "1 month ago".
pub fn age_label(posted_on: NaiveDate, today: NaiveDate) -> String {
    let days = (today - posted_on).num_days();
    if days <= 0 {
        return "Today".to_string();
    }
    if days < 7 {
        return if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        };
    }
    if days < 30 {
        let weeks = days / 7;
        return if weeks == 1 {
            "1 week ago".to_string()
        } else {
            format!("{weeks} weeks ago")
        };
    }
    let months = days / 30;
    if months == 1 {
        "1 month ago".to_string()
    } else {
        format!("{months} months ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parses_newest_first() {
        let posts = feed_posts();
        assert_eq!(posts.len(), 8);
        for pair in posts.windows(2) {
            assert!(pair[0].posted_on >= pair[1].posted_on);
        }
    }

    #[test]
    fn fixture_ids_are_unique() {
        let posts = feed_posts();
        let mut ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn age_labels_cover_the_fixture_range() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 20).expect("valid date");
        let on = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date");

        assert_eq!(age_label(today, today), "Today");
        assert_eq!(age_label(on(2025, 7, 19), today), "1 day ago");
        assert_eq!(age_label(on(2025, 7, 18), today), "2 days ago");
        assert_eq!(age_label(on(2025, 7, 13), today), "1 week ago");
        assert_eq!(age_label(on(2025, 7, 5), today), "2 weeks ago");
        assert_eq!(age_label(on(2025, 6, 28), today), "3 weeks ago");
        assert_eq!(age_label(on(2025, 6, 18), today), "1 month ago");
        assert_eq!(age_label(on(2025, 4, 1), today), "3 months ago");
    }
}
