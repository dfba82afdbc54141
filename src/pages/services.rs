use yew::prelude::*;
use yew_router::components::Link;

use crate::content::trips::{TripPackage, ADD_ONS};
use crate::Route;

const PROVIDED_EQUIPMENT: &[&str] = &[
    "High-quality rods and reels",
    "Tackle box with variety of lures",
    "Live bait and artificial baits",
    "Landing nets and tools",
    "Safety equipment and life jackets",
    "Boat, motor, and fuel",
];

const WHAT_TO_BRING: &[&str] = &[
    "Valid Minnesota fishing license",
    "Weather-appropriate clothing",
    "Sunglasses and sunscreen",
    "Camera for your catches",
    "Snacks and drinks",
    "Cooler for your fish (optional)",
];

const POLICIES: &[(&str, &[&str])] = &[
    (
        "Booking & Cancellation",
        &[
            "50% deposit required to secure booking",
            "72-hour cancellation for full refund",
            "Weather cancellations fully refundable",
            "Rescheduling available based on availability",
        ],
    ),
    (
        "Group Size & Pricing",
        &[
            "Maximum 2 people per trip (safety & quality)",
            "Additional person: +$100/day",
            "Children under 12: 50% discount",
            "Group discounts for 3+ day packages",
        ],
    ),
    (
        "Season & Availability",
        &[
            "Open water: May through October",
            "Ice fishing: December through March",
            "Peak season: June through August",
            "Advanced booking recommended",
        ],
    ),
];

fn trip_card(trip: TripPackage) -> Html {
    html! {
        <div class={classes!("trip-card", trip.is_popular().then_some("popular"))} key={trip.id()}>
            {
                if trip.is_popular() {
                    html! { <span class="popular-tag">{"Most Popular"}</span> }
                } else {
                    html! {}
                }
            }
            <img class="trip-photo" src={trip.photo()} alt={trip.title()} />
            <div class="trip-card-body">
                <h3>{trip.title()}</h3>
                <div class="trip-pricing">
                    <span class="trip-amount">{trip.price_label()}</span>
                    <span class="trip-note">{trip.price_note()}</span>
                </div>
                <p class="trip-tagline">{format!("{} • {}", trip.duration(), trip.best_for())}</p>
                <p class="trip-description">{trip.description()}</p>

                <h4>{"What's Included:"}</h4>
                <ul class="trip-inclusions">
                    { for trip.inclusions().iter().map(|item| html! {
                        <li key={*item}>{item}</li>
                    }) }
                </ul>

                <Link<Route>
                    to={Route::Booking}
                    classes={classes!("trip-book-link", trip.is_popular().then_some("primary"))}
                >
                    {"Book This Trip"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="services-hero">
                <h1>{"Fishing Guide Services"}</h1>
                <p>
                    {"Professional guided fishing experiences in Ely, Minnesota and the \
                      Boundary Waters Canoe Area"}
                </p>
            </section>

            <section class="services-body">
                <div class="section-intro">
                    <h2>{"Choose Your Adventure"}</h2>
                    <p>
                        {"From quick half-day trips to multi-day expeditions, we have the \
                          perfect fishing experience for every angler."}
                    </p>
                </div>

                <div class="trip-grid">
                    { for TripPackage::all().into_iter().map(trip_card) }
                </div>
            </section>

            <section class="services-addons">
                <div class="section-intro">
                    <h2>{"Additional Services"}</h2>
                    <p>{"Specialized trips and add-ons to enhance your fishing experience"}</p>
                </div>

                <div class="addon-grid">
                    { for ADD_ONS.iter().map(|addon| html! {
                        <div class="addon-card" key={addon.title}>
                            <div class="addon-head">
                                <h3>{addon.title}</h3>
                                <span class="addon-price">{addon.price}</span>
                            </div>
                            <p>{addon.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="services-info">
                <div class="info-column">
                    <h2>{"Equipment & Gear"}</h2>
                    <h3>{"Provided Equipment"}</h3>
                    <ul>
                        { for PROVIDED_EQUIPMENT.iter().map(|item| html! { <li key={*item}>{item}</li> }) }
                    </ul>
                    <h3>{"What to Bring"}</h3>
                    <ul>
                        { for WHAT_TO_BRING.iter().map(|item| html! { <li key={*item}>{item}</li> }) }
                    </ul>
                </div>

                <div class="info-column">
                    <h2>{"Policies & Information"}</h2>
                    { for POLICIES.iter().map(|(title, items)| html! {
                        <div key={*title}>
                            <h3>{*title}</h3>
                            <ul>
                                { for items.iter().map(|item| html! { <li key={*item}>{item}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <section class="services-cta">
                <h2>{"Ready to Book Your Adventure?"}</h2>
                <p>
                    {"Contact us to check availability and secure your guided fishing \
                      experience in beautiful Ely, Minnesota."}
                </p>
                <div class="services-cta-actions">
                    <Link<Route> to={Route::Booking} classes="cta-button solid">
                        {"Book Online"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="cta-button outline">
                        {"Contact Us"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .services-page {
                    padding-top: 64px;
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f8fafc, #ffffff);
                }

                .services-hero {
                    background: #1e3a8a;
                    color: #fff;
                    text-align: center;
                    padding: 5rem 1.5rem;
                }

                .services-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .services-hero p {
                    font-size: 1.2rem;
                    color: #dbeafe;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .services-body,
                .services-addons,
                .services-info {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }

                .section-intro {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-intro h2 {
                    font-size: 2rem;
                    color: #111827;
                    margin-bottom: 0.75rem;
                }

                .section-intro p {
                    color: #4b5563;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .trip-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }

                .trip-card {
                    position: relative;
                    background: #fff;
                    border-radius: 14px;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                }

                .trip-card.popular {
                    outline: 2px solid #3b82f6;
                }

                .popular-tag {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: #3b82f6;
                    color: #fff;
                    padding: 0.3rem 0.8rem;
                    border-radius: 999px;
                    font-size: 0.8rem;
                    font-weight: 600;
                    z-index: 1;
                }

                .trip-photo {
                    width: 100%;
                    height: 190px;
                    object-fit: cover;
                    display: block;
                }

                .trip-card-body {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                }

                .trip-card-body h3 {
                    font-size: 1.3rem;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .trip-pricing {
                    display: flex;
                    align-items: baseline;
                    gap: 0.75rem;
                    margin-bottom: 0.5rem;
                }

                .trip-amount {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #2563eb;
                }

                .trip-note {
                    font-size: 0.85rem;
                    color: #6b7280;
                }

                .trip-tagline {
                    font-size: 0.85rem;
                    color: #6b7280;
                    margin-bottom: 0.75rem;
                }

                .trip-description {
                    color: #374151;
                    margin-bottom: 1rem;
                    line-height: 1.6;
                }

                .trip-card-body h4 {
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .trip-inclusions {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                    font-size: 0.9rem;
                    color: #4b5563;
                    flex: 1;
                }

                .trip-inclusions li {
                    padding: 0.25rem 0 0.25rem 1.4rem;
                    position: relative;
                }

                .trip-inclusions li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #22c55e;
                }

                .trip-book-link {
                    display: block;
                    text-align: center;
                    padding: 0.7rem;
                    border-radius: 8px;
                    background: #f3f4f6;
                    color: #111827;
                    text-decoration: none;
                    font-weight: 600;
                }

                .trip-book-link.primary {
                    background: #2563eb;
                    color: #fff;
                }

                .services-addons {
                    background: #f8fafc;
                    max-width: none;
                }

                .addon-grid {
                    max-width: 880px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }

                .addon-card {
                    background: #fff;
                    border-radius: 10px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                }

                .addon-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: baseline;
                    gap: 1rem;
                    margin-bottom: 0.75rem;
                }

                .addon-head h3 {
                    color: #111827;
                }

                .addon-price {
                    color: #2563eb;
                    font-weight: 600;
                    white-space: nowrap;
                }

                .addon-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }

                .services-info {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 3rem;
                }

                .services-info h2 {
                    font-size: 1.5rem;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }

                .services-info h3 {
                    color: #111827;
                    margin: 1.25rem 0 0.5rem;
                }

                .services-info ul {
                    list-style: none;
                    padding: 0;
                    color: #4b5563;
                }

                .services-info li {
                    padding: 0.25rem 0 0.25rem 1.2rem;
                    position: relative;
                }

                .services-info li::before {
                    content: '•';
                    position: absolute;
                    left: 0;
                    color: #2563eb;
                }

                .services-cta {
                    background: #1e3a8a;
                    color: #fff;
                    text-align: center;
                    padding: 4rem 1.5rem;
                }

                .services-cta h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .services-cta p {
                    color: #dbeafe;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    font-size: 1.1rem;
                }

                .services-cta-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .cta-button {
                    padding: 0.75rem 1.75rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }

                .cta-button.solid {
                    background: #fff;
                    color: #1e3a8a;
                }

                .cta-button.outline {
                    border: 2px solid #fff;
                    color: #fff;
                }

                @media (max-width: 640px) {
                    .services-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
