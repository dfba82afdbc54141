use yew::prelude::*;

use crate::config;
use crate::content::trips::TripPackage;

struct ContactMethod {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    detail: Html,
}

fn contact_methods() -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            icon: "📞",
            title: "Phone",
            blurb: "Call or text for immediate response",
            detail: html! {
                <a href={config::PHONE_URI}>{config::PHONE_DISPLAY}</a>
            },
        },
        ContactMethod {
            icon: "✉️",
            title: "Email",
            blurb: "Best for detailed inquiries and planning",
            detail: html! {
                <a href={config::BOOKING_EMAIL_URI}>{config::BOOKING_EMAIL}</a>
            },
        },
        ContactMethod {
            icon: "📍",
            title: "Location",
            blurb: "Serving Ely, Minnesota and surrounding lakes",
            detail: html! { <span>{"Ely, MN 55731"}</span> },
        },
        ContactMethod {
            icon: "🕐",
            title: "Response Time",
            blurb: "We typically respond within 2-4 hours",
            detail: html! { <span>{"7 AM - 8 PM Daily"}</span> },
        },
    ]
}

const PLANNING_TIPS: &[(&str, &str)] = &[
    ("Best times to call:", "Evenings after 6 PM or early mornings"),
    ("Booking lead time:", "2-4 weeks recommended for peak season"),
    ("Weather updates:", "We'll contact you 24 hours before your trip"),
    ("Group size:", "Maximum 2 people per trip for optimal experience"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Contact Us"}</h1>
                <p>
                    {"Ready to book your adventure? Have questions? We're here to help plan \
                      your perfect fishing experience."}
                </p>
            </section>

            <section class="contact-body">
                <div class="contact-info">
                    <h2>{"Get In Touch"}</h2>
                    { for contact_methods().into_iter().map(|method| html! {
                        <div class="contact-method" key={method.title}>
                            <span class="method-icon">{method.icon}</span>
                            <div>
                                <h3>{method.title}</h3>
                                <p>{method.blurb}</p>
                                <div class="method-detail">{method.detail}</div>
                            </div>
                        </div>
                    }) }

                    <div class="planning-tips">
                        <h3>{"Planning Your Trip?"}</h3>
                        <ul>
                            { for PLANNING_TIPS.iter().map(|(lead, rest)| html! {
                                <li key={*lead}>
                                    <strong>{*lead}</strong>{" "}{*rest}
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="contact-form-card">
                    <h2>{"Send Us a Message"}</h2>
                    <form class="contact-form">
                        <div class="form-pair">
                            <label>
                                {"First Name *"}
                                <input type="text" required=true />
                            </label>
                            <label>
                                {"Last Name *"}
                                <input type="text" required=true />
                            </label>
                        </div>
                        <label>
                            {"Email *"}
                            <input type="email" required=true />
                        </label>
                        <label>
                            {"Phone"}
                            <input type="tel" />
                        </label>
                        <label>
                            {"Preferred Trip Type"}
                            <select>
                                <option value="">{"Select a service..."}</option>
                                { for TripPackage::all().into_iter().map(|trip| html! {
                                    <option value={trip.id()} key={trip.id()}>{trip.label()}</option>
                                }) }
                                <option value="custom">{"Custom / Not Sure"}</option>
                            </select>
                        </label>
                        <label>
                            {"Preferred Dates (if known)"}
                            <input type="text" placeholder="e.g., July 15-20, 2025 or 'flexible'" />
                        </label>
                        <label>
                            {"Message"}
                            <textarea
                                rows="4"
                                placeholder="Tell us about your group size, experience level, and any special requests..."
                            />
                        </label>
                        <button type="submit" class="form-submit">{"Send Message"}</button>
                    </form>
                    <p class="form-footnote">
                        {"Prefer to call? We're always happy to chat! "}
                        <a href={config::PHONE_URI}>{config::PHONE_DISPLAY}</a>
                    </p>
                </div>
            </section>

            <section class="contact-people">
                <h2>{"Meet Your Contacts"}</h2>
                <div class="people-grid">
                    <div class="person-card">
                        <img src="/photos/fish1.jpg" alt="James Thorstenson" />
                        <h3>{"James Thorstenson"}</h3>
                        <p class="person-role blue">{"Your Fishing Guide"}</p>
                        <p>
                            {"James will be your guide on the water. Feel free to ask him any \
                              questions about fishing techniques, local conditions, or what to \
                              expect on your trip."}
                        </p>
                    </div>
                    <div class="person-card">
                        <img src="/photos/britt-and-ella1.png" alt="Brittney Thorstenson" />
                        <h3>{"Brittney Thorstenson"}</h3>
                        <p class="person-role green">{"Booking & Operations"}</p>
                        <p>
                            {"Brittney handles all scheduling, payments, and trip coordination. \
                              She's your go-to person for booking details and any special \
                              arrangements."}
                        </p>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .contact-page {
                    padding-top: 64px;
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f8fafc, #ffffff);
                }

                .contact-hero {
                    background: #1e3a8a;
                    color: #fff;
                    text-align: center;
                    padding: 5rem 1.5rem;
                }

                .contact-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .contact-hero p {
                    font-size: 1.2rem;
                    color: #dbeafe;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .contact-body {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 3rem;
                }

                .contact-info h2 {
                    font-size: 2rem;
                    color: #111827;
                    margin-bottom: 2rem;
                }

                .contact-method {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.75rem;
                }

                .method-icon {
                    font-size: 1.4rem;
                    background: #eff6ff;
                    border-radius: 10px;
                    padding: 0.6rem;
                    align-self: flex-start;
                }

                .contact-method h3 {
                    color: #111827;
                    margin-bottom: 0.25rem;
                }

                .contact-method p {
                    color: #6b7280;
                    font-size: 0.9rem;
                }

                .method-detail {
                    margin-top: 0.25rem;
                    font-weight: 500;
                }

                .method-detail a {
                    color: #2563eb;
                }

                .planning-tips {
                    background: #eff6ff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-top: 2rem;
                }

                .planning-tips h3 {
                    color: #111827;
                    margin-bottom: 0.75rem;
                }

                .planning-tips ul {
                    list-style: none;
                    padding: 0;
                    font-size: 0.9rem;
                    color: #374151;
                }

                .planning-tips li {
                    padding: 0.3rem 0;
                }

                .contact-form-card {
                    background: #fff;
                    border-radius: 14px;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                    padding: 2rem;
                }

                .contact-form-card h2 {
                    font-size: 1.5rem;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }

                .form-pair {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }

                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #374151;
                }

                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    padding: 0.65rem 0.9rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font: inherit;
                }

                .form-submit {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.8rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .form-submit:hover {
                    background: #1d4ed8;
                }

                .form-footnote {
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #e5e7eb;
                    text-align: center;
                    font-size: 0.9rem;
                    color: #6b7280;
                }

                .form-footnote a {
                    color: #2563eb;
                    font-weight: 500;
                }

                .contact-people {
                    background: #f8fafc;
                    padding: 4rem 1.5rem;
                    text-align: center;
                }

                .contact-people h2 {
                    font-size: 2rem;
                    color: #111827;
                    margin-bottom: 2.5rem;
                }

                .people-grid {
                    max-width: 880px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .person-card {
                    background: #fff;
                    border-radius: 14px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                }

                .person-card img {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    object-fit: cover;
                    margin-bottom: 1rem;
                }

                .person-card h3 {
                    color: #111827;
                    margin-bottom: 0.25rem;
                }

                .person-role {
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }

                .person-role.blue { color: #2563eb; }
                .person-role.green { color: #047857; }

                .person-card p {
                    color: #4b5563;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }

                @media (max-width: 640px) {
                    .contact-hero h1 {
                        font-size: 2.2rem;
                    }

                    .form-pair {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
