use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::content::faq::FAQ;
use crate::state::disclosure::{toggle, PanelId};
use crate::Route;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: PanelId,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<PanelId>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let id = props.id;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" {onclick}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            {
                if props.open {
                    html! {
                        <div class="faq-answer">
                            <p>{props.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    // One open panel for the whole page; opening a question collapses
    // whichever one was open before.
    let open = use_state(|| None::<PanelId>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |id: PanelId| {
            open.set(toggle(*open, id));
        })
    };

    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{format!("Everything you need to know about fishing with {}", config::BUSINESS_NAME)}</p>
            </section>

            <section class="faq-body">
                <div class="faq-callout">
                    <h2>{"Still have questions?"}</h2>
                    <p>{"We're here to help! Contact us directly for personalized answers."}</p>
                    <div class="faq-callout-actions">
                        <a href={config::PHONE_URI} class="callout-button solid">{"📞 Call Us"}</a>
                        <a href={config::BOOKING_EMAIL_URI} class="callout-button outline">{"✉️ Email Us"}</a>
                    </div>
                </div>

                { for FAQ.iter().map(|category| html! {
                    <div class="faq-category" key={category.title}>
                        <h2 class="faq-category-title">{category.title}</h2>
                        { for category.entries.iter().map(|entry| html! {
                            <FaqItem
                                key={entry.id}
                                id={entry.id}
                                question={entry.question}
                                answer={entry.answer}
                                open={*open == Some(entry.id)}
                                on_toggle={on_toggle.clone()}
                            />
                        }) }
                    </div>
                }) }

                <div class="faq-cta">
                    <h2>{"Ready to Book Your Adventure?"}</h2>
                    <p>
                        {"Don't see your question answered? We'd love to chat and help plan \
                          your perfect fishing trip."}
                    </p>
                    <div class="faq-cta-actions">
                        <Link<Route> to={Route::Booking} classes="cta-button solid">
                            {"Book Your Trip"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contact} classes="cta-button outline">
                            {"Contact Us"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 64px;
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f8fafc, #ffffff);
                }

                .faq-hero {
                    background: #1e3a8a;
                    color: #fff;
                    text-align: center;
                    padding: 5rem 1.5rem;
                }

                .faq-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .faq-hero p {
                    font-size: 1.2rem;
                    color: #dbeafe;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .faq-body {
                    max-width: 880px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }

                .faq-callout {
                    background: #eff6ff;
                    border-radius: 14px;
                    padding: 1.5rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .faq-callout h2 {
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .faq-callout p {
                    color: #4b5563;
                    margin-bottom: 1rem;
                }

                .faq-callout-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .callout-button {
                    padding: 0.6rem 1.1rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 500;
                }

                .callout-button.solid {
                    background: #2563eb;
                    color: #fff;
                }

                .callout-button.outline {
                    background: #fff;
                    color: #2563eb;
                    border: 1px solid #2563eb;
                }

                .faq-category {
                    margin-bottom: 2.5rem;
                }

                .faq-category-title {
                    font-size: 1.5rem;
                    color: #111827;
                    padding-bottom: 0.75rem;
                    border-bottom: 2px solid #bfdbfe;
                    margin-bottom: 1.5rem;
                }

                .faq-item {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 10px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.1rem 1.5rem;
                    background: none;
                    border: none;
                    font: inherit;
                    font-weight: 600;
                    color: #111827;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .faq-question:hover {
                    background: #f9fafb;
                }

                .toggle-icon {
                    color: #2563eb;
                    font-size: 1.3rem;
                }

                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-answer p {
                    color: #4b5563;
                    line-height: 1.7;
                }

                .faq-cta {
                    background: #1e3a8a;
                    color: #fff;
                    border-radius: 14px;
                    padding: 2.5rem;
                    text-align: center;
                    margin-top: 3rem;
                }

                .faq-cta p {
                    color: #dbeafe;
                    margin: 1rem 0 1.5rem;
                }

                .faq-cta-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .cta-button {
                    padding: 0.75rem 1.5rem;
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
                    .faq-hero h1 {
                        font-size: 2.2rem;
                    }

                    .faq-body {
                        padding: 2rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
