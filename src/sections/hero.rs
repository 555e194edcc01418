use yew::prelude::*;
use crate::components::reveal::Reveal;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-grid">
                <svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
                    <defs>
                        <pattern id="hero-grid-pattern" width="40" height="40" patternUnits="userSpaceOnUse">
                            <path d="M 40 0 L 0 0 0 40" fill="none" stroke="rgba(255,255,255,0.05)" stroke-width="1" />
                        </pattern>
                    </defs>
                    <rect width="100%" height="100%" fill="url(#hero-grid-pattern)" />
                </svg>
            </div>
            <div class="hero-content">
                <Reveal>
                    <div class="hero-badge">
                        <span class="hero-badge-glyph">{"🌐"}</span>
                        <span class="hero-badge-text">{"St. Paul's Mentorship Keynote"}</span>
                    </div>
                </Reveal>
                <Reveal delay_ms={200}>
                    <h1 class="hero-title">
                        {"Manager of"}<br/>
                        <span class="hero-title-gradient">{"Intelligence"}</span>
                    </h1>
                </Reveal>
                <Reveal delay_ms={400}>
                    <p class="hero-quote">
                        {"\"The world where you 'use' tools is ending. For the Class of 2026, you start as management.\""}
                    </p>
                </Reveal>
                <Reveal delay_ms={600}>
                    <div class="hero-scroll-cue animate-bounce">
                        <div class="hero-scroll-line"></div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: #000;
                        color: #fff;
                        padding: 0 1rem;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(ellipse at top, #0f172a, #000 60%, #000);
                    }

                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        pointer-events: none;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                        margin: 3rem auto 0;
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(15, 23, 42, 0.8);
                        border: 1px solid #334155;
                        border-radius: 9999px;
                        padding: 0.5rem 1.25rem;
                        margin-bottom: 2rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
                    }

                    .hero-badge-glyph {
                        font-size: 0.9rem;
                    }

                    .hero-badge-text {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #cbd5e1;
                    }

                    .hero-title {
                        font-size: clamp(3.75rem, 10vw, 6rem);
                        font-weight: 900;
                        font-style: italic;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        line-height: 1;
                        margin: 0 0 1.5rem;
                    }

                    .hero-title-gradient {
                        background: linear-gradient(to right, #22d3ee, #fff, #d946ef);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        filter: drop-shadow(0 0 10px rgba(34, 211, 238, 0.3));
                    }

                    .hero-quote {
                        font-size: clamp(1.25rem, 3vw, 1.5rem);
                        font-weight: 300;
                        font-style: italic;
                        color: #94a3b8;
                        line-height: 1.6;
                        border-left: 4px solid #22d3ee;
                        padding-left: 1.5rem;
                        text-align: left;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                    }

                    .hero-scroll-cue {
                        margin-top: 3rem;
                    }

                    .hero-scroll-line {
                        width: 1px;
                        height: 4rem;
                        margin: 0 auto;
                        background: linear-gradient(to bottom, #22d3ee, transparent);
                    }
                "#}
            </style>
        </section>
    }
}
