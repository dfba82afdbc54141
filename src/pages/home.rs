use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "📍",
        title: "Local Knowledge",
        blurb: "James knows the best spots and signs for catching walleye, northern \
                pike, and everything in between. Five years in Ely means he knows where \
                the fish are hiding.",
    },
    Feature {
        icon: "⛅",
        title: "All-Weather Experience",
        blurb: "No weather can stop this family. From ice fishing in winter to perfect \
                summer days, James knows how to find fish in any conditions.",
    },
    Feature {
        icon: "🎣",
        title: "Lifetime of Fishing",
        blurb: "Fishing since childhood with his parents, James brings decades of \
                experience and genuine passion for the sport to every trip.",
    },
    Feature {
        icon: "🤝",
        title: "Community Focused",
        blurb: "As owner of James of All Trades contracting, James is invested in the \
                community and dedicated to making a difference for families in Ely.",
    },
];

struct CatchCard {
    photo: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const RECENT_CATCHES: &[CatchCard] = &[
    CatchCard {
        photo: "/photos/fish2.jpg",
        title: "Trophy Northern Pike",
        blurb: "This beauty was caught on a perfect summer day",
    },
    CatchCard {
        photo: "/photos/fish3.jpg",
        title: "Beautiful Rainbow Trout",
        blurb: "Birthday boy caught 16 rainbows yesterday!",
    },
    CatchCard {
        photo: "/photos/fish4.jpg",
        title: "Multiple Fishing Methods",
        blurb: "From boats to kayaks, we adapt to your style",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="home-hero">
                <div class="home-hero-overlay"></div>
                <div class="home-hero-content">
                    <h1>{"Discover Ely's Best Fishing"}</h1>
                    <p>
                        {"Experience world-class fishing in Minnesota's Boundary Waters with \
                          expert guide James Thorstenson. From walleye to northern pike, \
                          create memories that last a lifetime."}
                    </p>
                    <div class="home-hero-actions">
                        <Link<Route> to={Route::Booking} classes="hero-button solid">
                            {"Book Your Trip"}
                        </Link<Route>>
                        <Link<Route> to={Route::About} classes="hero-button ghost">
                            {"Meet Your Guide →"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="home-features">
                <div class="section-intro">
                    <h2>{"Why Choose Thorstenson Guide Service?"}</h2>
                    <p>{"Five years of local expertise combined with a lifetime of fishing passion"}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature" key={feature.title}>
                            <span class="feature-icon">{feature.icon}</span>
                            <div>
                                <h3>{feature.title}</h3>
                                <p>{feature.blurb}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="home-catches">
                <div class="section-intro">
                    <h2>{"Recent Catches"}</h2>
                    <p>{"See what our clients have been catching in Ely's pristine waters"}</p>
                </div>
                <div class="catch-grid">
                    { for RECENT_CATCHES.iter().map(|card| html! {
                        <figure class="catch-card" key={card.title}>
                            <img src={card.photo} alt={card.title} />
                            <figcaption>
                                <h3>{card.title}</h3>
                                <p>{card.blurb}</p>
                            </figcaption>
                        </figure>
                    }) }
                </div>
                <div class="catch-more">
                    <Link<Route> to={Route::Gallery} classes="catch-more-link">
                        {"View Full Gallery"}
                    </Link<Route>>
                </div>
            </section>

            <section class="home-cta">
                <h2>{"Ready for Your Next Adventure?"}</h2>
                <p>
                    {"Book your guided fishing trip today and experience the best that Ely, \
                      Minnesota has to offer."}
                </p>
                <div class="home-cta-actions">
                    <Link<Route> to={Route::Booking} classes="cta-button solid">
                        {"Book Now"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="cta-button plain">
                        {"Contact Us →"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    background: #fff;
                }

                .home-hero {
                    position: relative;
                    min-height: 86vh;
                    display: flex;
                    align-items: flex-end;
                    background-image: url('/photos/fish1.jpg');
                    background-size: cover;
                    background-position: center;
                }

                .home-hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(255, 255, 255, 0.2), rgba(0, 0, 0, 0.6));
                }

                .home-hero-content {
                    position: relative;
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    text-align: center;
                    color: #fff;
                }

                .home-hero-content h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    letter-spacing: -0.02em;
                }

                .home-hero-content p {
                    font-size: 1.2rem;
                    line-height: 1.8;
                    color: #f3f4f6;
                    margin-bottom: 2rem;
                }

                .home-hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1.25rem;
                    flex-wrap: wrap;
                }

                .hero-button {
                    padding: 0.8rem 2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }

                .hero-button.solid {
                    background: #2563eb;
                    color: #fff;
                    box-shadow: 0 6px 20px rgba(37, 99, 235, 0.4);
                }

                .hero-button.solid:hover {
                    background: #1d4ed8;
                }

                .hero-button.ghost {
                    color: #fff;
                }

                .hero-button.ghost:hover {
                    color: #bfdbfe;
                }

                .home-features,
                .home-catches {
                    padding: 5rem 1.5rem;
                }

                .home-catches {
                    background: #f8fafc;
                }

                .section-intro {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3.5rem;
                }

                .section-intro h2 {
                    font-size: 2.2rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .section-intro p {
                    font-size: 1.1rem;
                    color: #4b5563;
                }

                .feature-grid {
                    max-width: 880px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2.5rem;
                }

                .feature {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .feature-icon {
                    font-size: 1.6rem;
                    background: #eff6ff;
                    border-radius: 10px;
                    padding: 0.5rem;
                }

                .feature h3 {
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .feature p {
                    color: #4b5563;
                    line-height: 1.7;
                }

                .catch-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .catch-card {
                    position: relative;
                    border-radius: 16px;
                    overflow: hidden;
                    min-height: 380px;
                    display: flex;
                    align-items: flex-end;
                    background: #111827;
                }

                .catch-card img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.85;
                }

                .catch-card figcaption {
                    position: relative;
                    margin: 1.5rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    border-radius: 10px;
                    padding: 1rem;
                    color: #fff;
                }

                .catch-card figcaption p {
                    font-size: 0.9rem;
                    color: #e5e7eb;
                }

                .catch-more {
                    text-align: center;
                    margin-top: 2.5rem;
                }

                .catch-more-link {
                    background: #fff;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    padding: 0.75rem 1.5rem;
                    color: #111827;
                    text-decoration: none;
                    font-weight: 600;
                }

                .home-cta {
                    border-top: 1px solid #e5e7eb;
                    text-align: center;
                    padding: 6rem 1.5rem;
                }

                .home-cta h2 {
                    font-size: 2.2rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .home-cta p {
                    color: #4b5563;
                    max-width: 560px;
                    margin: 0 auto 2rem;
                    font-size: 1.1rem;
                }

                .home-cta-actions {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }

                .cta-button {
                    text-decoration: none;
                    font-weight: 600;
                }

                .cta-button.solid {
                    background: #fff;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    padding: 0.75rem 1.5rem;
                    color: #111827;
                }

                .cta-button.plain {
                    color: #111827;
                }

                .cta-button.plain:hover {
                    color: #2563eb;
                }

                @media (max-width: 640px) {
                    .home-hero-content h1 {
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
