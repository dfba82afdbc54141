use chrono::NaiveDate;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::notification::Notification;
use crate::config;
use crate::content::trips::{open_dates, TripPackage, DEPARTURE_TIMES};
use crate::state::booking::{long_date, BookingSelection, BookingStage};
use crate::Route;

#[function_component(Booking)]
pub fn booking() -> Html {
    let selection = use_state(BookingSelection::new);
    let submitted = use_state(|| false);

    let on_trip = {
        let selection = selection.clone();
        Callback::from(move |trip: TripPackage| {
            let mut next = (*selection).clone();
            next.choose_trip(trip);
            selection.set(next);
        })
    };

    let on_date = {
        let selection = selection.clone();
        Callback::from(move |date: NaiveDate| {
            let mut next = (*selection).clone();
            next.choose_date(date);
            selection.set(next);
        })
    };

    let on_time = {
        let selection = selection.clone();
        Callback::from(move |time: &'static str| {
            let mut next = (*selection).clone();
            next.choose_time(time);
            selection.set(next);
        })
    };

    // Real booking is deferred to manual contact; submitting just confirms
    // that the request was noted.
    let on_submit = {
        let submitted = submitted.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            submitted.set(true);
        })
    };

    let dismiss_notice = {
        let submitted = submitted.clone();
        Callback::from(move |_| submitted.set(false))
    };

    html! {
        <div class="booking-page">
            <section class="booking-hero">
                <h1>{"Book Your Adventure"}</h1>
                <p>{"Schedule your guided fishing experience in beautiful Ely, Minnesota"}</p>
            </section>

            <section class="booking-body">
                { step_indicator(&selection) }

                <div class="booking-card">
                    <h2>{"Step 1: Choose Your Service"}</h2>
                    <div class="trip-options">
                        { for TripPackage::all().into_iter().map(|trip| {
                            let on_trip = on_trip.clone();
                            let onchange = Callback::from(move |_: Event| on_trip.emit(trip));
                            html! {
                                <label class="trip-option" key={trip.id()}>
                                    <input
                                        type="radio"
                                        name="trip"
                                        checked={selection.trip() == Some(trip)}
                                        {onchange}
                                    />
                                    <span class="trip-name">{trip.label()}</span>
                                    <span class="trip-price">{trip.price_label()}</span>
                                </label>
                            }
                        }) }
                    </div>
                    <p class="trip-details-link">
                        <Link<Route> to={Route::Services}>
                            {"View detailed service information and what's included"}
                        </Link<Route>>
                    </p>
                </div>

                {
                    if selection.schedule_open() {
                        html! {
                            <div class="booking-card">
                                <h2>{"Step 2: Select Date & Time"}</h2>

                                <h3>{"Available Dates"}</h3>
                                <div class="slot-grid dates">
                                    { for open_dates().into_iter().map(|date| {
                                        let on_date = on_date.clone();
                                        let onclick = Callback::from(move |e: MouseEvent| {
                                            e.prevent_default();
                                            on_date.emit(date);
                                        });
                                        let picked = selection.date() == Some(date);
                                        html! {
                                            <button
                                                class={classes!("slot", picked.then_some("picked"))}
                                                {onclick}
                                            >
                                                <span class="slot-day">{date.format("%-d").to_string()}</span>
                                                <span class="slot-sub">{date.format("%a, %b").to_string()}</span>
                                            </button>
                                        }
                                    }) }
                                </div>

                                {
                                    if let Some(date) = selection.date() {
                                        html! {
                                            <>
                                                <h3>{format!("Available Times for {}", long_date(date))}</h3>
                                                <div class="slot-grid times">
                                                    { for DEPARTURE_TIMES.iter().map(|time| {
                                                        let time = *time;
                                                        let on_time = on_time.clone();
                                                        let onclick = Callback::from(move |e: MouseEvent| {
                                                            e.prevent_default();
                                                            on_time.emit(time);
                                                        });
                                                        let picked = selection.time() == Some(time);
                                                        html! {
                                                            <button
                                                                class={classes!("slot", picked.then_some("picked"))}
                                                                {onclick}
                                                            >
                                                                {time}
                                                            </button>
                                                        }
                                                    }) }
                                                </div>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if selection.is_complete() {
                        html! {
                            <>
                                <div class="booking-card">
                                    <h2>{"Step 3: Contact Information"}</h2>
                                    <div class="contact-grid">
                                        <label>
                                            {"First Name *"}
                                            <input type="text" required=true />
                                        </label>
                                        <label>
                                            {"Last Name *"}
                                            <input type="text" required=true />
                                        </label>
                                        <label>
                                            {"Email *"}
                                            <input type="email" required=true />
                                        </label>
                                        <label>
                                            {"Phone *"}
                                            <input type="tel" required=true />
                                        </label>
                                        <label class="contact-wide">
                                            {"Number of People"}
                                            <select>
                                                <option>{"1 person"}</option>
                                                <option>{"2 people"}</option>
                                                <option>{"3 people (+$100)"}</option>
                                            </select>
                                        </label>
                                        <label class="contact-wide">
                                            {"Special Requests or Questions"}
                                            <textarea
                                                rows="4"
                                                placeholder="Any special requirements, experience level, or questions for James?"
                                            />
                                        </label>
                                    </div>
                                </div>

                                { summary_card(&selection, on_submit.clone()) }
                            </>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="coming-soon">
                    <h3>{"Coming Soon: Full Online Booking"}</h3>
                    <p>
                        {"This booking form is currently in development. For now, please \
                          contact us directly to check availability and make your \
                          reservation. We'll have full online booking with payment \
                          processing available soon!"}
                    </p>
                    <Link<Route> to={Route::Contact} classes="coming-soon-link">
                        {"Contact Us to Book"}
                    </Link<Route>>
                </div>
            </section>

            {
                if *submitted {
                    html! {
                        <Notification
                            message={"Request noted! We'll confirm availability by phone or email.".to_string()}
                            on_dismiss={dismiss_notice}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .booking-page {
                    padding-top: 64px;
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f8fafc, #ffffff);
                }

                .booking-hero {
                    background: #1e3a8a;
                    color: #fff;
                    text-align: center;
                    padding: 5rem 1.5rem;
                }

                .booking-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .booking-hero p {
                    font-size: 1.2rem;
                    color: #dbeafe;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .booking-body {
                    max-width: 880px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }

                .step-indicator {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                    flex-wrap: wrap;
                }

                .step {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #374151;
                }

                .step-bubble {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                    background: #e5e7eb;
                    color: #9ca3af;
                }

                .step.reached .step-bubble {
                    background: #2563eb;
                    color: #fff;
                }

                .step-rule {
                    width: 2rem;
                    height: 1px;
                    background: #d1d5db;
                }

                .booking-card {
                    background: #fff;
                    border-radius: 14px;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                    padding: 2rem;
                    margin-bottom: 2rem;
                }

                .booking-card h2 {
                    font-size: 1.5rem;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }

                .booking-card h3 {
                    font-size: 1.1rem;
                    color: #111827;
                    margin: 1.5rem 0 1rem;
                }

                .trip-options {
                    display: grid;
                    gap: 1rem;
                }

                .trip-option {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 10px;
                    cursor: pointer;
                    transition: background 0.15s ease;
                }

                .trip-option:hover {
                    background: #f9fafb;
                }

                .trip-name {
                    font-weight: 600;
                    color: #111827;
                    flex: 1;
                }

                .trip-price {
                    font-weight: 600;
                    color: #2563eb;
                }

                .trip-details-link {
                    margin-top: 1rem;
                    font-size: 0.9rem;
                }

                .trip-details-link a {
                    color: #2563eb;
                }

                .slot-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(110px, 1fr));
                    gap: 0.75rem;
                }

                .slot {
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 10px;
                    background: #fff;
                    color: #374151;
                    cursor: pointer;
                    text-align: center;
                    transition: border-color 0.15s ease;
                }

                .slot:hover {
                    border-color: #93c5fd;
                }

                .slot.picked {
                    background: #2563eb;
                    border-color: #2563eb;
                    color: #fff;
                }

                .slot-day {
                    display: block;
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .slot-sub {
                    display: block;
                    font-size: 0.75rem;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }

                .contact-grid label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #374151;
                }

                .contact-grid input,
                .contact-grid select,
                .contact-grid textarea {
                    padding: 0.6rem 0.9rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font: inherit;
                }

                .contact-wide {
                    grid-column: 1 / -1;
                }

                .summary-rows {
                    background: #f9fafb;
                    border-radius: 10px;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .summary-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.4rem 0;
                    color: #374151;
                }

                .summary-row span:first-child {
                    font-weight: 500;
                }

                .summary-total {
                    border-top: 1px solid #e5e7eb;
                    margin-top: 0.75rem;
                    padding-top: 0.9rem;
                    font-size: 1.1rem;
                    font-weight: 700;
                }

                .summary-total span:last-child {
                    color: #2563eb;
                }

                .deposit-note {
                    background: #eff6ff;
                    border-radius: 10px;
                    padding: 1rem;
                    font-size: 0.9rem;
                    color: #1e40af;
                    margin-bottom: 1.5rem;
                }

                .submit-button {
                    width: 100%;
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 10px;
                    padding: 0.9rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.15s ease;
                }

                .submit-button:hover {
                    background: #1d4ed8;
                }

                .summary-contact {
                    text-align: center;
                    font-size: 0.9rem;
                    color: #6b7280;
                    margin-top: 1.25rem;
                }

                .summary-contact a {
                    color: #2563eb;
                    margin: 0 0.5rem;
                }

                .coming-soon {
                    background: #fefce8;
                    border: 1px solid #fde68a;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-top: 1rem;
                }

                .coming-soon h3 {
                    color: #92400e;
                    margin-bottom: 0.5rem;
                }

                .coming-soon p {
                    color: #a16207;
                    line-height: 1.6;
                }

                .coming-soon-link {
                    display: inline-block;
                    margin-top: 1rem;
                    background: #fde68a;
                    color: #92400e;
                    padding: 0.6rem 1.1rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 500;
                }

                @media (max-width: 640px) {
                    .booking-hero h1 {
                        font-size: 2.2rem;
                    }

                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn step_indicator(selection: &BookingSelection) -> Html {
    let stage = selection.stage();
    let schedule_reached = stage != BookingStage::ChooseTrip;
    let review_reached = stage == BookingStage::Review;
    html! {
        <div class="step-indicator">
            <div class="step reached">
                <span class="step-bubble">{"1"}</span>
                <span>{"Choose Service"}</span>
            </div>
            <div class="step-rule"></div>
            <div class={classes!("step", schedule_reached.then_some("reached"))}>
                <span class="step-bubble">{"2"}</span>
                <span>{"Select Date & Time"}</span>
            </div>
            <div class="step-rule"></div>
            <div class={classes!("step", review_reached.then_some("reached"))}>
                <span class="step-bubble">{"3"}</span>
                <span>{"Contact Details"}</span>
            </div>
        </div>
    }
}

fn summary_card(selection: &BookingSelection, on_submit: Callback<MouseEvent>) -> Html {
    let Some(summary) = selection.summary() else {
        return html! {};
    };
    let mailto = selection
        .inquiry_mailto()
        .unwrap_or_else(|| config::BOOKING_EMAIL_URI.to_string());

    html! {
        <div class="booking-card">
            <h2>{"Booking Summary"}</h2>

            <div class="summary-rows">
                <div class="summary-row">
                    <span>{"Service:"}</span>
                    <span>{summary.trip_name}</span>
                </div>
                <div class="summary-row">
                    <span>{"Date:"}</span>
                    <span>{summary.date.clone()}</span>
                </div>
                <div class="summary-row">
                    <span>{"Time:"}</span>
                    <span>{summary.time}</span>
                </div>
                <div class="summary-row summary-total">
                    <span>{"Total:"}</span>
                    <span>{summary.price}</span>
                </div>
            </div>

            <div class="deposit-note">
                <strong>{"Deposit Required: "}</strong>
                {"A 50% deposit is required to secure your booking. The remaining \
                  balance is due on the day of your trip."}
            </div>

            <button class="submit-button" onclick={on_submit}>
                {"Request This Trip"}
            </button>

            <div class="summary-contact">
                <p>{"Or contact us directly:"}</p>
                <a href={config::PHONE_URI}>{format!("📞 {}", config::PHONE_DISPLAY)}</a>
                <a href={mailto}>{format!("✉️ {}", config::BOOKING_EMAIL)}</a>
            </div>
        </div>
    }
}
