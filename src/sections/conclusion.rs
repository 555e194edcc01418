use yew::prelude::*;
use crate::components::reveal::Reveal;

#[function_component(FinalConclusion)]
pub fn final_conclusion() -> Html {
    html! {
        <section class="conclusion">
            <div class="conclusion-backdrop"></div>
            <div class="conclusion-content">
                <Reveal>
                    <h2>
                        {"Intern to"}<br/>
                        <span class="conclusion-accent">{"Manager"}</span>
                    </h2>
                </Reveal>
                <Reveal delay_ms={200}>
                    <p>{"Don't just use AI. Lead it."}</p>
                </Reveal>
            </div>
            <style>
                {r#"
                    .conclusion {
                        position: relative;
                        padding: 8rem 0;
                        background: #000;
                        color: #fff;
                        text-align: center;
                        overflow: hidden;
                    }

                    .conclusion-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(22, 78, 99, 0.2), #000);
                    }

                    .conclusion-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .conclusion h2 {
                        font-size: clamp(3.75rem, 10vw, 6rem);
                        font-weight: 900;
                        font-style: italic;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        line-height: 1;
                        margin: 0 0 2rem;
                    }

                    .conclusion-accent {
                        color: #22d3ee;
                    }

                    .conclusion p {
                        font-size: 1.25rem;
                        font-weight: 300;
                        color: #94a3b8;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                    }
                "#}
            </style>
        </section>
    }
}
