use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"Meet the Thorstensons"}</h1>
                <p>
                    {"Your guides to the pristine waters of Ely, Minnesota and the \
                      Boundary Waters Canoe Area"}
                </p>
            </section>

            <section class="about-section">
                <div class="about-content">
                    <div class="about-text">
                        <h2>{"James \"Jamie\" Thorstenson"}</h2>
                        <h3 class="role blue">{"Your Fishing Guide & Local Expert"}</h3>
                        <p>
                            {"At 38, James has spent his entire life connected to the waters of \
                              northern Minnesota. What started as childhood fishing trips has \
                              evolved into a deep passion for sharing the magic of Ely's \
                              pristine lakes with visitors from around the world."}
                        </p>
                        <p>
                            {"For over 5 years, James has called Ely home, establishing himself \
                              not just as a fishing guide but as a pillar of the community \
                              through his contracting business, \"James of All Trades.\" His \
                              dual expertise in construction and guiding gives him unique \
                              insights into both the natural and built environments of the area."}
                        </p>
                        <p>
                            {"When James takes you out on the water, you're getting more than \
                              just a fishing trip. You're experiencing the lakes through the \
                              eyes of someone who understands every seasonal change, every \
                              hidden spot, and every technique that makes the difference \
                              between a good day and an unforgettable adventure."}
                        </p>
                        <p>
                            {"Beyond fishing, James is an avid bow hunter and outdoor \
                              enthusiast who believes in living naturally and sustainably. His \
                              authentic approach to wilderness living and deep respect for the \
                              environment shine through in every guided experience."}
                        </p>
                    </div>
                    <div class="about-photo">
                        <img src="/photos/fish1.jpg" alt="James Thorstenson with a beautiful walleye catch" />
                        <blockquote class="photo-quote blue">
                            {"\"Every cast tells a story, every catch creates a memory\""}
                        </blockquote>
                    </div>
                </div>
            </section>

            <section class="about-section alternate">
                <div class="about-content reverse">
                    <div class="about-photo">
                        <img src="/photos/britt-and-ella1.png" alt="Brittney Thorstenson with daughter Ella on the beach" />
                        <blockquote class="photo-quote green">
                            {"\"Behind every great adventure is great planning\""}
                        </blockquote>
                    </div>
                    <div class="about-text">
                        <h2>{"Brittney Thorstenson"}</h2>
                        <h3 class="role green">{"Operations Manager & Adventure Partner"}</h3>
                        <p>
                            {"Brittney is the organizational force behind Thorstenson Guide \
                              Service, handling everything from scheduling and finances to \
                              ensuring every detail of your trip is perfectly planned. Her \
                              attention to detail and warm communication style make booking \
                              your adventure as smooth as the calm morning waters of Ely."}
                        </p>
                        <p>
                            {"But Brittney is far more than just the business manager - she's \
                              James's true adventure partner. Whether it's exploring new \
                              fishing spots, hiking remote trails, or discovering hidden gems \
                              throughout northern Minnesota, Brittney shares Jamie's passion \
                              for the outdoors and authentic wilderness experiences."}
                        </p>
                        <p>
                            {"As a devoted mother to 22-month-old Ella (with baby number two on \
                              the way in October), Brittney understands the importance of \
                              creating family memories in nature. She brings a unique \
                              perspective to family-friendly trip planning and knows exactly \
                              how to make outdoor adventures accessible and enjoyable for all \
                              ages."}
                        </p>
                        <p>
                            {"When you contact Thorstenson Guide Service, you'll likely speak \
                              with Brittney first. Her insider knowledge of the area, combined \
                              with her talent for matching the perfect trip to your interests \
                              and experience level, ensures your Ely adventure exceeds \
                              expectations from the very first conversation."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="about-section">
                <div class="family-block">
                    <h2>{"The Thorstenson Family"}</h2>
                    <div class="family-photos">
                        <img src="/photos/family1.png" alt="The Thorstenson family enjoying the beach together" />
                        <img src="/photos/big-sis.png" alt="Family announcement photo with Ella as big sister" />
                    </div>
                    <div class="promise">
                        <h3>{"Our Promise to You"}</h3>
                        <p>
                            {"As a family business rooted in the Ely community, we understand \
                              that your fishing trip is more than just a day on the water - \
                              it's an investment in memories that will last a lifetime. We \
                              treat every guest like family because we know that the best \
                              adventures happen when you feel truly welcome and cared for."}
                        </p>
                        <p>
                            {"Whether you're a seasoned angler looking to land the fish of a \
                              lifetime, a family wanting to introduce kids to the magic of \
                              fishing, or someone seeking the peace and beauty of Minnesota's \
                              wilderness, we're here to make it happen. Our local expertise, \
                              genuine hospitality, and passion for these waters ensure that \
                              your time with us will be everything you hoped for and more."}
                        </p>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    padding-top: 64px;
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f8fafc, #ffffff);
                }

                .about-hero {
                    background: #1e3a8a;
                    color: #fff;
                    text-align: center;
                    padding: 5rem 1.5rem;
                }

                .about-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .about-hero p {
                    font-size: 1.2rem;
                    color: #dbeafe;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .about-section {
                    padding: 4rem 1.5rem;
                }

                .about-section.alternate {
                    background: #f8fafc;
                }

                .about-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 3rem;
                    align-items: center;
                }

                .about-text h2 {
                    font-size: 2.2rem;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .role {
                    font-size: 1.1rem;
                    margin-bottom: 1.5rem;
                }

                .role.blue { color: #1d4ed8; }
                .role.green { color: #047857; }

                .about-text p {
                    color: #374151;
                    line-height: 1.8;
                    margin-bottom: 1rem;
                }

                .about-photo {
                    position: relative;
                }

                .about-photo img {
                    width: 100%;
                    border-radius: 12px;
                    box-shadow: 0 16px 40px rgba(15, 23, 42, 0.18);
                    display: block;
                }

                .photo-quote {
                    position: absolute;
                    bottom: -1.25rem;
                    right: -0.5rem;
                    max-width: 260px;
                    color: #fff;
                    padding: 1rem;
                    border-radius: 10px;
                    box-shadow: 0 10px 24px rgba(15, 23, 42, 0.25);
                    font-size: 0.9rem;
                }

                .photo-quote.blue { background: #1d4ed8; }
                .photo-quote.green { background: #047857; left: -0.5rem; right: auto; }

                .family-block {
                    max-width: 880px;
                    margin: 0 auto;
                    text-align: center;
                }

                .family-block h2 {
                    font-size: 2.2rem;
                    color: #111827;
                    margin-bottom: 2.5rem;
                }

                .family-photos {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    margin-bottom: 3rem;
                }

                .family-photos img {
                    width: 100%;
                    border-radius: 12px;
                    box-shadow: 0 16px 40px rgba(15, 23, 42, 0.18);
                }

                .promise {
                    background: #eff6ff;
                    border-radius: 14px;
                    padding: 2rem;
                    text-align: left;
                }

                .promise h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .promise p {
                    color: #374151;
                    line-height: 1.8;
                    margin-bottom: 1rem;
                }

                @media (max-width: 640px) {
                    .about-hero h1 {
                        font-size: 2.2rem;
                    }

                    .about-content.reverse {
                        display: flex;
                        flex-direction: column-reverse;
                    }
                }
                "#}
            </style>
        </div>
    }
}
