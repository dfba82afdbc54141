use chrono::Local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::content::feed::{age_label, feed_posts, FOLLOWER_COUNT_LABEL, PROFILE_BIO};
use crate::Route;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    // Mock feed until the Instagram integration lands; ages are computed
    // against the real clock so the fixture reads naturally.
    let posts = feed_posts();
    let today = Local::now().date_naive();

    html! {
        <div class="gallery-page">
            <section class="gallery-hero">
                <h1>{"Adventure Gallery"}</h1>
                <p>
                    {"Follow our daily adventures, client catches, and family moments in \
                      beautiful Ely, Minnesota"}
                </p>
                <span class="gallery-handle">{config::INSTAGRAM_HANDLE}</span>
            </section>

            <section class="gallery-body">
                <div class="profile-card">
                    <div class="profile-row">
                        <div class="profile-avatar">{"TG"}</div>
                        <div class="profile-names">
                            <h2>{config::BUSINESS_NAME}</h2>
                            <p>{config::INSTAGRAM_HANDLE}</p>
                        </div>
                        <div class="profile-followers">
                            <strong>{FOLLOWER_COUNT_LABEL}</strong>
                            <span>{"followers"}</span>
                        </div>
                    </div>
                    <p class="profile-bio">{PROFILE_BIO}</p>
                </div>

                <div class="post-grid">
                    { for posts.iter().map(|post| html! {
                        <article class="post-card" key={post.id.clone()}>
                            <img class="post-image" src={post.image.clone()} alt="Gallery post" />
                            <div class="post-meta">
                                <span class="post-count">{format!("♥ {}", post.likes)}</span>
                                <span class="post-count">{format!("💬 {}", post.comments)}</span>
                                <span class="post-age">{age_label(post.posted_on, today)}</span>
                            </div>
                            <p class="post-caption">{post.caption.clone()}</p>
                        </article>
                    }) }
                </div>

                <div class="gallery-cta">
                    <h3>{"Follow Our Adventures"}</h3>
                    <p>
                        {"Stay up to date with daily catches, family moments, and \
                          behind-the-scenes glimpses of life as fishing guides in beautiful \
                          Ely, Minnesota."}
                    </p>
                    <div class="gallery-cta-actions">
                        <a
                            href={config::INSTAGRAM_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="follow-button"
                        >
                            {format!("Follow {}", config::INSTAGRAM_HANDLE)}
                        </a>
                        <Link<Route> to={Route::Booking} classes="book-button">
                            {"Book Your Trip"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .gallery-page {
                    padding-top: 64px;
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f8fafc, #ffffff);
                }

                .gallery-hero {
                    background: #1e3a8a;
                    color: #fff;
                    text-align: center;
                    padding: 5rem 1.5rem;
                }

                .gallery-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .gallery-hero p {
                    font-size: 1.2rem;
                    color: #dbeafe;
                    max-width: 640px;
                    margin: 0 auto 1.5rem;
                }

                .gallery-handle {
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .gallery-body {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }

                .profile-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                }

                .profile-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .profile-avatar {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #a855f7, #ec4899);
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .profile-names {
                    flex: 1;
                }

                .profile-names h2 {
                    font-size: 1.2rem;
                    color: #111827;
                }

                .profile-names p {
                    color: #6b7280;
                }

                .profile-followers {
                    text-align: right;
                    display: flex;
                    flex-direction: column;
                }

                .profile-followers strong {
                    font-size: 1.4rem;
                    color: #111827;
                }

                .profile-followers span {
                    color: #6b7280;
                }

                .profile-bio {
                    margin-top: 1rem;
                    color: #374151;
                }

                .post-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                }

                .post-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    overflow: hidden;
                    transition: box-shadow 0.2s ease;
                }

                .post-card:hover {
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.12);
                }

                .post-image {
                    width: 100%;
                    aspect-ratio: 1 / 1;
                    object-fit: cover;
                    display: block;
                }

                .post-meta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 1rem 0.5rem;
                    font-size: 0.9rem;
                    color: #374151;
                }

                .post-age {
                    margin-left: auto;
                    font-size: 0.8rem;
                    color: #9ca3af;
                }

                .post-caption {
                    padding: 0 1rem 1rem;
                    font-size: 0.9rem;
                    color: #4b5563;
                    line-height: 1.6;
                }

                .gallery-cta {
                    margin-top: 3rem;
                    background: #eff6ff;
                    border-radius: 14px;
                    padding: 2.5rem;
                    text-align: center;
                }

                .gallery-cta h3 {
                    font-size: 1.5rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .gallery-cta p {
                    color: #4b5563;
                    max-width: 640px;
                    margin: 0 auto 1.5rem;
                    line-height: 1.6;
                }

                .gallery-cta-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .follow-button {
                    background: linear-gradient(to right, #a855f7, #ec4899);
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }

                .book-button {
                    background: #fff;
                    color: #111827;
                    border: 2px solid #d1d5db;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }

                @media (max-width: 640px) {
                    .gallery-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
