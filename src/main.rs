use yew::prelude::*;
use log::{info, Level};

mod components {
    pub mod reveal;
    pub mod simulator;
}

mod sections {
    pub mod hero;
    pub mod paradigm;
    pub mod comparison;
    pub mod competencies;
    pub mod conclusion;
}

use sections::{
    hero::HeroSection,
    paradigm::ParadigmShift,
    comparison::SyntaxVsImagination,
    competencies::CompetenciesSection,
    conclusion::FinalConclusion,
};

// Sections are independent and stacked in presentation order; none of them
// share state with a sibling.
#[function_component]
fn App() -> Html {
    html! {
        <div class="keynote-page">
            <HeroSection />
            <ParadigmShift />
            <SyntaxVsImagination />
            <CompetenciesSection />
            <FinalConclusion />
            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                    }

                    body {
                        margin: 0;
                        background: #000;
                        color: #f8fafc;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        overflow-x: hidden;
                    }

                    ::selection {
                        background: rgba(34, 211, 238, 0.3);
                    }

                    .keynote-page button {
                        font-family: inherit;
                        cursor: pointer;
                    }

                    .reveal {
                        opacity: 0;
                        transform: translateY(3rem);
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }

                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    @keyframes dash {
                        to { stroke-dashoffset: -20; }
                    }

                    .animate-dash {
                        stroke-dasharray: 4;
                        animation: dash 1s linear infinite;
                    }

                    @keyframes spin {
                        from { transform: rotate(0deg); }
                        to { transform: rotate(360deg); }
                    }

                    .animate-spin-slow {
                        animation: spin 20s linear infinite;
                    }

                    .animate-spin-reverse-slow {
                        animation: spin 15s linear infinite reverse;
                    }

                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }

                    .animate-pulse {
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(-12%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                        50% { transform: translateY(0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                    }

                    .animate-bounce {
                        animation: bounce 1s infinite;
                    }

                    input[type=range].era-slider {
                        -webkit-appearance: none;
                        appearance: none;
                        width: 100%;
                        height: 12px;
                        border-radius: 6px;
                        background: #1e293b;
                        outline: none;
                    }

                    input[type=range].era-slider::-webkit-slider-thumb {
                        -webkit-appearance: none;
                        height: 28px;
                        width: 28px;
                        border-radius: 50%;
                        background: #22d3ee;
                        cursor: pointer;
                        box-shadow: 0 0 10px rgba(34, 211, 238, 0.5);
                        border: 2px solid white;
                    }

                    input[type=range].era-slider::-moz-range-thumb {
                        height: 28px;
                        width: 28px;
                        border-radius: 50%;
                        background: #22d3ee;
                        cursor: pointer;
                        box-shadow: 0 0 10px rgba(34, 211, 238, 0.5);
                        border: 2px solid white;
                    }

                    .scrollbar-hide::-webkit-scrollbar {
                        display: none;
                    }

                    .scrollbar-hide {
                        -ms-overflow-style: none;
                        scrollbar-width: none;
                    }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
