use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-links">
                    <Link<Route> to={Route::Contact} classes="footer-link">
                        {"Contact"}
                    </Link<Route>>
                    <Link<Route> to={Route::Faq} classes="footer-link">
                        {"FAQ"}
                    </Link<Route>>
                    <Link<Route> to={Route::Booking} classes="footer-link">
                        {"Book Now"}
                    </Link<Route>>
                </div>
                <p class="footer-copyright">
                    {format!("© 2025 {}. All rights reserved.", config::BUSINESS_NAME)}
                </p>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #9ca3af;
                    padding: 3rem 1.5rem;
                }

                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column-reverse;
                    align-items: center;
                    gap: 2rem;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-link {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-link:hover {
                    color: #d1d5db;
                }

                .footer-copyright {
                    font-size: 0.8rem;
                    text-align: center;
                }

                @media (min-width: 768px) {
                    .footer-content {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
