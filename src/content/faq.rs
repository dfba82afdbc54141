//! FAQ content: ordered categories, each an ordered list of entries.
//! Read-only reference data built once at compile time.

pub struct FaqEntry {
    /// Stable identifier used by the open-panel state.
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct FaqCategory {
    pub title: &'static str,
    pub entries: &'static [FaqEntry],
}

pub const FAQ: &[FaqCategory] = &[
    FaqCategory {
        title: "Booking & Pricing",
        entries: &[
            FaqEntry {
                id: "lead-time",
                question: "How far in advance should I book?",
                answer: "We recommend booking 2-4 weeks in advance, especially during peak \
                         season (June-August). However, we sometimes have last-minute \
                         availability, so don't hesitate to call even for short notice trips.",
            },
            FaqEntry {
                id: "inclusions",
                question: "What's included in the price?",
                answer: "All trips include professional guide service, high-quality fishing \
                         equipment, tackle, bait, safety equipment, and fish cleaning. \
                         Full-day trips also include shore lunch and cooler with ice. See \
                         our Services page for detailed inclusions.",
            },
            FaqEntry {
                id: "deposit",
                question: "Do I need to pay a deposit?",
                answer: "Yes, we require a 50% deposit to secure your booking. The remaining \
                         balance is due on the day of your trip. We accept cash, check, or \
                         card payments.",
            },
            FaqEntry {
                id: "cancellation",
                question: "What's your cancellation policy?",
                answer: "We offer full refunds for cancellations made 72 hours or more before \
                         your trip. Weather-related cancellations (determined by the guide for \
                         safety) are fully refundable or can be rescheduled.",
            },
        ],
    },
    FaqCategory {
        title: "What to Expect",
        entries: &[
            FaqEntry {
                id: "what-to-bring",
                question: "What should I bring?",
                answer: "Bring a valid Minnesota fishing license, weather-appropriate clothing, \
                         sunglasses, sunscreen, camera, and snacks/drinks. We provide all \
                         fishing equipment. A cooler for your fish is optional - we can provide \
                         one if needed.",
            },
            FaqEntry {
                id: "beginners",
                question: "Do you provide equipment for beginners?",
                answer: "Absolutely! We provide all fishing equipment including rods, reels, \
                         tackle, and bait. James will teach you proper techniques and help you \
                         throughout the trip. No prior experience necessary.",
            },
            FaqEntry {
                id: "bad-weather",
                question: "What if the weather is bad?",
                answer: "Safety is our top priority. If conditions are unsafe, we'll contact \
                         you 24 hours before (or morning of) to reschedule or provide a full \
                         refund. Light rain usually doesn't stop us - fish often bite better in \
                         overcast conditions!",
            },
            FaqEntry {
                id: "group-size",
                question: "How many people can go on one trip?",
                answer: "We limit trips to a maximum of 2 people for safety and to ensure a \
                         quality experience. Additional people can be accommodated for an extra \
                         $100/day. Children under 12 receive a 50% discount.",
            },
        ],
    },
    FaqCategory {
        title: "Fishing Details",
        entries: &[
            FaqEntry {
                id: "species",
                question: "What types of fish can we catch?",
                answer: "Ely's waters are home to walleye, northern pike, bass (largemouth and \
                         smallmouth), lake trout, and various panfish. Species availability \
                         depends on season, location, and conditions. James will target species \
                         based on your preferences and current conditions.",
            },
            FaqEntry {
                id: "best-season",
                question: "What's the best time of year to fish?",
                answer: "Open water season runs May through October. June-August is peak season \
                         with warmest weather. May and September offer excellent fishing with \
                         fewer crowds. We also offer ice fishing December through March for a \
                         unique winter experience.",
            },
            FaqEntry {
                id: "keeping-fish",
                question: "Can we keep the fish we catch?",
                answer: "Yes! We follow Minnesota fishing regulations and practice sustainable \
                         fishing. James will help you understand limits and select the best \
                         fish to keep. We provide basic fish cleaning, and full \
                         cleaning/packaging is available.",
            },
            FaqEntry {
                id: "no-catch",
                question: "What if we don't catch anything?",
                answer: "While we can't guarantee fish (that's why it's called fishing, not \
                         catching!), James's local knowledge and 38+ years of experience give \
                         you the best possible chance. We focus on the complete experience - \
                         enjoying nature, learning techniques, and having fun on the water.",
            },
        ],
    },
    FaqCategory {
        title: "Logistics",
        entries: &[
            FaqEntry {
                id: "meeting-point",
                question: "Where do we meet?",
                answer: "Meeting locations vary depending on which lakes we'll be fishing. \
                         James will provide specific directions and GPS coordinates when you \
                         book. Most launches are within 30 minutes of Ely.",
            },
            FaqEntry {
                id: "transportation",
                question: "Do you provide transportation?",
                answer: "Transportation to the boat launch is not included - you'll need to \
                         meet us there. However, we provide the boat, motor, fuel, and all \
                         on-water transportation during your trip.",
            },
            FaqEntry {
                id: "shore-lunch",
                question: "What about lunch on full-day trips?",
                answer: "Full-day trips include a traditional shore lunch where we prepare your \
                         fresh-caught fish over an open fire, along with sides. It's a \
                         highlight of the experience! We can accommodate dietary restrictions \
                         with advance notice.",
            },
            FaqEntry {
                id: "facilities",
                question: "Are there bathroom facilities?",
                answer: "Most launch sites have basic facilities. During the trip, we're in \
                         wilderness areas where facilities aren't available. James will brief \
                         you on what to expect and provide guidance for longer trips.",
            },
        ],
    },
    FaqCategory {
        title: "Special Situations",
        entries: &[
            FaqEntry {
                id: "children",
                question: "Can you accommodate children?",
                answer: "Absolutely! We love taking families fishing. Children under 12 receive \
                         a 50% discount. We have smaller equipment and adjust techniques for \
                         young anglers. James is experienced working with kids and making it \
                         fun for the whole family.",
            },
            FaqEntry {
                id: "mobility",
                question: "What about people with mobility issues?",
                answer: "We can accommodate many mobility needs with advance notice. Our boat \
                         has comfortable seating and we can adjust fishing techniques \
                         accordingly. Please discuss any specific needs when booking so we can \
                         ensure a great experience.",
            },
            FaqEntry {
                id: "gift-certificates",
                question: "Do you offer gift certificates?",
                answer: "Yes! Fishing trips make great gifts for birthdays, holidays, or \
                         special occasions. Contact us to arrange gift certificates. They're \
                         valid for one year from purchase date.",
            },
            FaqEntry {
                id: "alcohol",
                question: "Can we bring alcohol?",
                answer: "We don't permit alcohol during fishing trips for safety reasons. \
                         However, we're happy to celebrate your catches with photos and \
                         stories! Non-alcoholic beverages are encouraged.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // The single-open accordion keys panels by id, so ids must be distinct
    // across every category.
    #[test]
    fn entry_ids_are_unique_across_categories() {
        let mut seen = HashSet::new();
        for category in FAQ {
            for entry in category.entries {
                assert!(seen.insert(entry.id), "duplicate faq id {}", entry.id);
            }
        }
    }

    #[test]
    fn no_empty_categories_or_entries() {
        assert!(!FAQ.is_empty());
        for category in FAQ {
            assert!(!category.entries.is_empty(), "{} is empty", category.title);
            for entry in category.entries {
                assert!(!entry.question.is_empty());
                assert!(!entry.answer.is_empty());
            }
        }
    }
}
