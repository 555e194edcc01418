use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::components::reveal::Reveal;
use crate::components::simulator::{use_simulator, StepSpec};

#[derive(Clone, Copy, PartialEq)]
pub struct TimelineStage {
    pub year: &'static str,
    pub tech: &'static str,
    pub accent: &'static str,
    pub desc: &'static str,
}

pub const TIMELINE: [TimelineStage; 4] = [
    TimelineStage {
        year: "1980s",
        tech: "Mainframe",
        accent: "#94a3b8",
        desc: "Centralized computing. Humans were input operators.",
    },
    TimelineStage {
        year: "1990s",
        tech: "PC & Web",
        accent: "#60a5fa",
        desc: "Decentralized. We became active 'Users' of software.",
    },
    TimelineStage {
        year: "2010s",
        tech: "Mobile & Cloud",
        accent: "#e879f9",
        desc: "Always-on SaaS. The era of the digital citizen.",
    },
    TimelineStage {
        year: "2026",
        tech: "Agentic Swarms",
        accent: "#22d3ee",
        desc: "Generative intelligence. You are the orchestrator.",
    },
];

// The scrubber is freely bidirectional: every stage can be picked from
// every other, and nothing moves on its own.
const EVERY_STAGE: &[u8] = &[0, 1, 2, 3];

pub const SCRUBBER_STEPS: &[StepSpec] = &[
    StepSpec { choices: EVERY_STAGE, ..StepSpec::DEFAULT },
    StepSpec { choices: EVERY_STAGE, ..StepSpec::DEFAULT },
    StepSpec { choices: EVERY_STAGE, ..StepSpec::DEFAULT },
    StepSpec { choices: EVERY_STAGE, ..StepSpec::DEFAULT },
];

fn mainframe_diagram() -> Html {
    html! {
        <svg width="100%" height="100%" viewBox="0 0 400 200">
            <rect x="170" y="70" width="60" height="60" fill="#334155" stroke="#64748b" stroke-width="2" />
            <text x="200" y="105" fill="white" font-size="10" text-anchor="middle" font-family="monospace">{"HOST"}</text>
            {
                for [20, 100, 180, 260, 340].iter().enumerate().map(|(i, x)| html! {
                    <g key={i}>
                        <path d={format!("M {} 180 L 200 130", x + 20)} stroke="#475569" stroke-width="1" fill="none" />
                        <rect x={x.to_string()} y="170" width="40" height="20" fill="#1e293b" stroke="#475569" />
                    </g>
                })
            }
        </svg>
    }
}

fn web_diagram() -> Html {
    html! {
        <svg width="100%" height="100%" viewBox="0 0 400 200">
            {
                for [50, 150, 250, 350].iter().enumerate().flat_map(|(i, x)| {
                    [40, 100, 160].iter().enumerate().map(move |(j, y)| html! {
                        <g key={format!("{}-{}", i, j)}>
                            <line x1={x.to_string()} y1={y.to_string()} x2="200" y2="100" stroke="rgba(30, 58, 138, 0.3)" stroke-width="1" />
                            <rect x={(x - 15).to_string()} y={(y - 10).to_string()} width="30" height="20" fill="#1e293b" stroke="#3b82f6" stroke-width="1.5" />
                        </g>
                    }).collect::<Vec<_>>()
                })
            }
            <circle cx="200" cy="100" r="30" fill="rgba(30, 58, 138, 0.5)" stroke="#60a5fa" class="animate-pulse" />
            <text x="200" y="104" fill="white" font-size="10" text-anchor="middle" font-family="monospace">{"WWW"}</text>
        </svg>
    }
}

fn cloud_diagram() -> Html {
    html! {
        <svg width="100%" height="100%" viewBox="0 0 400 200">
            <path
                d="M 120 80 Q 150 40 200 80 T 280 80 Q 300 120 250 140 T 150 140 Q 100 120 120 80"
                fill="rgba(112, 26, 117, 0.2)"
                stroke="#d946ef"
                stroke-width="2"
            />
            <text x="200" y="105" fill="white" font-size="12" text-anchor="middle" font-weight="bold" letter-spacing="4">{"CLOUD"}</text>
            {
                for [30, 90, 150, 210, 270, 330].iter().enumerate().map(|(i, x)| html! {
                    <circle key={i} cx={(x + 20).to_string()} cy="180" r="6" fill="#1e293b" stroke="#e879f9" />
                })
            }
            <path
                d="M 200 140 L 50 180 M 200 140 L 110 180 M 200 140 L 170 180 M 200 140 L 230 180 M 200 140 L 290 180 M 200 140 L 350 180"
                stroke="rgba(217, 70, 239, 0.5)"
                stroke-width="2"
                fill="none"
                class="animate-dash"
            />
        </svg>
    }
}

fn swarm_diagram() -> Html {
    html! {
        <svg width="100%" height="100%" viewBox="0 0 400 200">
            <circle cx="200" cy="100" r="80" fill="none" stroke="#164e63" stroke-width="1" stroke-dasharray="4 4" />
            <circle cx="200" cy="100" r="50" fill="none" stroke="#155e75" stroke-width="1" stroke-dasharray="2 2" />
            <g class="animate-spin-slow" style="transform-origin: 200px 100px;">
                <circle cx="120" cy="100" r="10" fill="#0f172a" stroke="#22d3ee" stroke-width="2" />
                <text x="120" y="95" fill="#22d3ee" font-size="8" text-anchor="middle">{"Code"}</text>
                <circle cx="280" cy="100" r="10" fill="#0f172a" stroke="#22d3ee" stroke-width="2" />
                <text x="280" y="95" fill="#22d3ee" font-size="8" text-anchor="middle">{"Data"}</text>
            </g>
            <g class="animate-spin-reverse-slow" style="transform-origin: 200px 100px;">
                <circle cx="200" cy="50" r="8" fill="#0f172a" stroke="#e879f9" stroke-width="2" />
                <circle cx="200" cy="150" r="8" fill="#0f172a" stroke="#e879f9" stroke-width="2" />
            </g>
            <circle cx="200" cy="100" r="20" fill="rgba(34, 211, 238, 0.2)" stroke="#67e8f9" stroke-width="2" class="animate-pulse" />
            <text x="200" y="104" fill="white" font-size="10" text-anchor="middle" font-weight="bold">{"YOU"}</text>
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopologyVisualizerProps {
    pub stage: u8,
}

// All four diagrams stay mounted; the active one is cross-faded in so the
// slider feels continuous.
#[function_component(TopologyVisualizer)]
pub fn topology_visualizer(props: &TopologyVisualizerProps) -> Html {
    let diagrams = [
        mainframe_diagram(),
        web_diagram(),
        cloud_diagram(),
        swarm_diagram(),
    ];

    html! {
        <div class="topology">
            {
                for diagrams.into_iter().enumerate().map(|(idx, diagram)| html! {
                    <div
                        key={idx}
                        class={classes!("topology-layer", (props.stage == idx as u8).then_some("visible"))}
                    >
                        { diagram }
                    </div>
                })
            }
        </div>
    }
}

#[function_component(ParadigmShift)]
pub fn paradigm_shift() -> Html {
    let scrubber = use_simulator(SCRUBBER_STEPS, 3);
    let stage = scrubber.step();
    let active = &TIMELINE[stage as usize];

    let on_slide = {
        let scrubber = scrubber.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(picked) = input.value().parse::<u8>() {
                scrubber.choose(picked);
            }
        })
    };

    html! {
        <section class="paradigm">
            <div class="paradigm-inner">
                <Reveal>
                    <div class="paradigm-header">
                        <h2>{"The $10 Trillion Shift"}</h2>
                        <p>{"Drag to visualize the reinvention of the stack"}</p>
                    </div>
                </Reveal>

                <div class="paradigm-grid">
                    <Reveal>
                        <div class="paradigm-card">
                            <TopologyVisualizer stage={stage} />
                            <div class="era-controls">
                                <input
                                    type="range"
                                    class="era-slider"
                                    min="0"
                                    max="3"
                                    step="1"
                                    value={stage.to_string()}
                                    oninput={on_slide}
                                />
                                <div class="era-markers">
                                    {
                                        for TIMELINE.iter().enumerate().map(|(idx, entry)| {
                                            let picked = idx as u8;
                                            let onclick = {
                                                let scrubber = scrubber.clone();
                                                Callback::from(move |_| scrubber.choose(picked))
                                            };
                                            html! {
                                                <button
                                                    key={idx}
                                                    {onclick}
                                                    class={classes!("era-marker", (stage == picked).then_some("active"))}
                                                    style={format!("color: {};", entry.accent)}
                                                >
                                                    <div class="era-marker-dot"></div>
                                                    <div class="era-marker-year">{entry.year}</div>
                                                </button>
                                            }
                                        })
                                    }
                                </div>
                            </div>
                            <div class="era-caption">
                                <h3 style={format!("color: {};", active.accent)}>{active.tech}</h3>
                                <p>{active.desc}</p>
                            </div>
                        </div>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <div class="rotation-card">
                            <div class="rotation-figure">{"$10.0T"}</div>
                            <h4>{"Capital Rotation"}</h4>
                            <p>
                                {"The infrastructure of the world is shifting from code that is "}
                                <strong>{"hand-written"}</strong>
                                {" to logic that is "}
                                <strong>{"generated by intent"}</strong>
                                {"."}
                            </p>
                            <div class="rotation-quote">
                                <span class="rotation-quote-mark">{"❝"}</span>
                                <p>
                                    <em>{"\"You no longer program the software. You train the software. You orchestrate it.\""}</em>
                                    <span class="rotation-quote-source">{"— Jensen Huang, CES 2026"}</span>
                                </p>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
            <style>
                {r#"
                    .paradigm {
                        padding: 6rem 0;
                        background: #020617;
                        border-top: 1px solid #0f172a;
                        border-bottom: 1px solid #0f172a;
                    }

                    .paradigm-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .paradigm-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .paradigm-header h2 {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 900;
                        font-style: italic;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        color: #fff;
                        margin: 0;
                    }

                    .paradigm-header p {
                        color: #94a3b8;
                        margin-top: 1rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-weight: 700;
                        font-size: 0.875rem;
                    }

                    .paradigm-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    @media (min-width: 1024px) {
                        .paradigm-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .paradigm-card {
                        background: #0f172a;
                        padding: 2rem;
                        border-radius: 2rem;
                        border: 1px solid #1e293b;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                    }

                    .topology {
                        position: relative;
                        width: 100%;
                        height: 16rem;
                        background: #020617;
                        border-radius: 1rem;
                        border: 1px solid #1e293b;
                        overflow: hidden;
                    }

                    .topology-layer {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 1s ease;
                    }

                    .topology-layer.visible {
                        opacity: 1;
                    }

                    .era-controls {
                        margin-top: 2rem;
                    }

                    .era-markers {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 1.5rem;
                    }

                    .era-marker {
                        background: none;
                        border: none;
                        padding: 0;
                        text-align: center;
                        opacity: 0.4;
                        transition: all 0.3s ease;
                    }

                    .era-marker:hover {
                        opacity: 0.8;
                    }

                    .era-marker.active {
                        opacity: 1;
                        transform: scale(1.1);
                    }

                    .era-marker-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        margin: 0 auto 0.5rem;
                        border-radius: 50%;
                        border: 2px solid #475569;
                        background: transparent;
                    }

                    .era-marker.active .era-marker-dot {
                        border-color: currentColor;
                        background: currentColor;
                    }

                    .era-marker-year {
                        font-size: 10px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .era-caption {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1e293b;
                    }

                    .era-caption h3 {
                        font-size: 1.5rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: -0.025em;
                        margin: 0 0 0.5rem;
                    }

                    .era-caption p {
                        color: #cbd5e1;
                        min-height: 3rem;
                        margin: 0;
                    }

                    .rotation-card {
                        padding: 2rem;
                        border-radius: 2rem;
                        border: 1px solid rgba(6, 182, 212, 0.2);
                        background: linear-gradient(to bottom right, rgba(22, 78, 99, 0.2), #0f172a);
                    }

                    .rotation-figure {
                        font-size: 4.5rem;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        color: #22d3ee;
                        margin-bottom: 1rem;
                    }

                    .rotation-card h4 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0 0 1rem;
                    }

                    .rotation-card > p {
                        color: #94a3b8;
                        line-height: 1.75;
                    }

                    .rotation-quote {
                        margin-top: 1.5rem;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.3);
                        border-radius: 0.75rem;
                        border: 1px solid #1e293b;
                    }

                    .rotation-quote-mark {
                        color: #06b6d4;
                        font-size: 1.5rem;
                        line-height: 1;
                    }

                    .rotation-quote p {
                        font-size: 0.875rem;
                        color: #cbd5e1;
                        margin: 0;
                    }

                    .rotation-quote-source {
                        display: block;
                        margin-top: 0.5rem;
                        color: #22d3ee;
                        font-weight: 700;
                        font-style: normal;
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::simulator::Simulator;

    #[test]
    fn every_stage_is_reachable_from_every_other() {
        for from in 0..TIMELINE.len() as u8 {
            for to in 0..TIMELINE.len() as u8 {
                if from == to {
                    continue;
                }
                let mut scrubber = Simulator::at(SCRUBBER_STEPS, from);
                assert!(scrubber.choose(to), "stage {} -> {}", from, to);
                assert_eq!(scrubber.step(), to);
            }
        }
    }

    #[test]
    fn scrubbing_is_bidirectional() {
        let mut scrubber = Simulator::at(SCRUBBER_STEPS, 3);
        assert!(scrubber.choose(0));
        assert!(scrubber.choose(2));
        assert!(scrubber.choose(1));
        assert_eq!(scrubber.step(), 1);
    }

    #[test]
    fn reselecting_the_current_stage_changes_nothing() {
        let mut scrubber = Simulator::at(SCRUBBER_STEPS, 2);
        assert!(!scrubber.choose(2));
        assert_eq!(scrubber.step(), 2);
    }

    #[test]
    fn nothing_moves_without_user_input() {
        let sim = Simulator::at(SCRUBBER_STEPS, 1);
        assert!(sim.auto().is_none());
    }

    #[test]
    fn timeline_payloads_are_fixed_per_stage() {
        assert_eq!(TIMELINE[0].year, "1980s");
        assert_eq!(TIMELINE[0].tech, "Mainframe");
        assert_eq!(TIMELINE[1].tech, "PC & Web");
        assert_eq!(TIMELINE[2].tech, "Mobile & Cloud");
        assert_eq!(TIMELINE[3].year, "2026");
        assert_eq!(TIMELINE[3].tech, "Agentic Swarms");
        assert_eq!(TIMELINE[3].accent, "#22d3ee");
    }
}
