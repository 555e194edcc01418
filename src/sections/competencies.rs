use yew::prelude::*;
use crate::components::reveal::Reveal;
use crate::components::simulator::{use_simulator, Auto, StepSpec};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Competency {
    Orchestrator,
    Designer,
    Polymath,
    Moat,
}

pub struct TabSpec {
    pub id: Competency,
    pub title: &'static str,
    pub glyph: &'static str,
    pub accent: &'static str,
    pub tint: &'static str,
}

pub const TABS: [TabSpec; 4] = [
    TabSpec {
        id: Competency::Orchestrator,
        title: "The Orchestrator",
        glyph: "🕸",
        accent: "#60a5fa",
        tint: "rgba(30, 58, 138, 0.2)",
    },
    TabSpec {
        id: Competency::Designer,
        title: "Smart Designer",
        glyph: "🛡",
        accent: "#34d399",
        tint: "rgba(6, 78, 59, 0.2)",
    },
    TabSpec {
        id: Competency::Polymath,
        title: "Synthetic Polymath",
        glyph: "🧠",
        accent: "#e879f9",
        tint: "rgba(112, 26, 117, 0.2)",
    },
    TabSpec {
        id: Competency::Moat,
        title: "The Human Moat",
        glyph: "🤝",
        accent: "#fb923c",
        tint: "rgba(124, 45, 18, 0.2)",
    },
];

fn tab_spec(id: Competency) -> &'static TabSpec {
    TABS.iter().find(|tab| tab.id == id).unwrap()
}

/// Picking the already-active tab is a no-op, not a re-selection.
fn retarget(current: Competency, picked: Competency) -> Option<Competency> {
    (current != picked).then_some(picked)
}

// Orchestrator demo: a click starts the fan-out, which then completes on a
// timer. The terminal state offers a manual reset.
const IDLE: u8 = 0;
const DECOMPOSING: u8 = 1;
const DECOMPOSED: u8 = 2;

pub const ORCHESTRATOR_STEPS: &[StepSpec] = &[
    StepSpec {
        next: Some(DECOMPOSING),
        ..StepSpec::DEFAULT
    },
    StepSpec {
        auto: Some(Auto {
            delay_ms: 1500,
            next: DECOMPOSED,
        }),
        ..StepSpec::DEFAULT
    },
    StepSpec {
        terminal: true,
        ..StepSpec::DEFAULT
    },
];

// Approval-gate demo: generation hops to the audit on a timer; the audit
// waits for a human verdict. Either outcome loops back for the next batch.
const GENERATING: u8 = 0;
const AUDITING: u8 = 1;
const APPROVED: u8 = 2;
const REJECTED: u8 = 3;

pub const APPROVAL_STEPS: &[StepSpec] = &[
    StepSpec {
        auto: Some(Auto {
            delay_ms: 1000,
            next: AUDITING,
        }),
        ..StepSpec::DEFAULT
    },
    StepSpec {
        choices: &[APPROVED, REJECTED],
        ..StepSpec::DEFAULT
    },
    StepSpec {
        terminal: true,
        ..StepSpec::DEFAULT
    },
    StepSpec {
        terminal: true,
        ..StepSpec::DEFAULT
    },
];

#[function_component(OrchestratorSim)]
fn orchestrator_sim() -> Html {
    let sim = use_simulator(ORCHESTRATOR_STEPS, IDLE);
    let step = sim.step();

    let decompose = {
        let sim = sim.clone();
        Callback::from(move |_| sim.advance())
    };
    let reset = {
        let sim = sim.clone();
        Callback::from(move |_| sim.reset())
    };

    html! {
        <div class="sim-body">
            <p class="sim-lede">
                {"Mastering "}<strong>{"Workflow Decomposition"}</strong>
                {". Break a massive problem into agent-executable tasks."}
            </p>
            <div class="sim-arena orchestrator-arena">
                {
                    if step == IDLE {
                        html! {
                            <button class="decompose-button" onclick={decompose}>
                                {"Decompose Project"}
                            </button>
                        }
                    } else {
                        html! {
                            <div class="fanout">
                                <div class="fanout-origin">
                                    <div class="fanout-origin-node">{"👤"}</div>
                                    <span class="fanout-origin-label">{"You"}</span>
                                </div>
                                <svg class="fanout-wires">
                                    <path d="M 100 100 L 260 50" class={classes!((step == DECOMPOSED).then_some("animate-dash"))} stroke="rgba(59, 130, 246, 0.5)" stroke-width="2" fill="none" />
                                    <path d="M 100 100 L 260 100" class={classes!((step == DECOMPOSED).then_some("animate-dash"))} stroke="rgba(6, 182, 212, 0.5)" stroke-width="2" fill="none" />
                                    <path d="M 100 100 L 260 150" class={classes!((step == DECOMPOSED).then_some("animate-dash"))} stroke="rgba(59, 130, 246, 0.5)" stroke-width="2" fill="none" />
                                </svg>
                                <div class={classes!("fanout-agent", "fanout-agent-top", (step == DECOMPOSED).then_some("landed"))}>
                                    <div class="fanout-agent-node agent-blue">{"🤖"}</div>
                                    <span>{"Agent: Research"}</span>
                                </div>
                                <div class={classes!("fanout-agent", "fanout-agent-mid", (step == DECOMPOSED).then_some("landed"))}>
                                    <div class="fanout-agent-node agent-cyan">{"💻"}</div>
                                    <span>{"Agent: Code"}</span>
                                </div>
                                <div class={classes!("fanout-agent", "fanout-agent-low", (step == DECOMPOSED).then_some("landed"))}>
                                    <div class="fanout-agent-node agent-blue">{"📊"}</div>
                                    <span>{"Agent: QA Test"}</span>
                                </div>
                            </div>
                        }
                    }
                }
            </div>
            {
                if step == DECOMPOSED {
                    html! {
                        <button class="sim-quiet-button" onclick={reset}>
                            {"Reset Simulation"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(ApprovalGateSim)]
fn approval_gate_sim() -> Html {
    let sim = use_simulator(APPROVAL_STEPS, GENERATING);
    let step = sim.step();

    let approve = {
        let sim = sim.clone();
        Callback::from(move |_| sim.choose(APPROVED))
    };
    let reject = {
        let sim = sim.clone();
        Callback::from(move |_| sim.choose(REJECTED))
    };
    let next_batch = {
        let sim = sim.clone();
        Callback::from(move |_| sim.reset())
    };

    let dot_class = match step {
        GENERATING => "dot-generating",
        AUDITING => "dot-auditing",
        APPROVED => "dot-approved",
        _ => "dot-rejected",
    };

    html! {
        <div class="sim-body">
            <p class="sim-lede">
                {"You are the "}<strong class="lede-emerald">{"Human-in-the-Loop"}</strong>
                {". Do not re-perform the work; validate the intent."}
            </p>
            <div class="sim-arena approval-arena">
                <div class="approval-track">
                    <div class={classes!("approval-dot", dot_class)}></div>
                    <div class={classes!("audit-station", (step == AUDITING).then_some("auditing"), (step == APPROVED).then_some("cleared"))}>
                        {"🛡"}
                    </div>
                </div>
                <div class="approval-labels">
                    <span>{"AI Generation"}</span>
                    <span class={classes!((step == AUDITING).then_some("label-live"))}>{"Intent Audit"}</span>
                    <span>{"Execution"}</span>
                </div>
                <div class="approval-controls">
                    {
                        match step {
                            AUDITING => html! {
                                <>
                                    <button class="approve-button" onclick={approve}>
                                        {"✓ Approve"}
                                    </button>
                                    <button class="reject-button" onclick={reject}>
                                        {"✕ Reject"}
                                    </button>
                                </>
                            },
                            APPROVED | REJECTED => html! {
                                <button class="sim-quiet-button" onclick={next_batch}>
                                    {"Run Next Batch"}
                                </button>
                            },
                            _ => html! {
                                <span class="generating-note">
                                    <span class="generating-gear">{"⚙"}</span>
                                    {"Generating..."}
                                </span>
                            },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn polymath_panel() -> Html {
    html! {
        <div class="sim-body polymath-panel">
            <p class="sim-lede centered">
                {"AI separates domains. Your value is "}
                <strong class="lede-fuchsia">{"Synthesis"}</strong>{"."}
            </p>
            <div class="synthesis-diagram">
                <div class="synthesis-node node-top">{"Biology"}</div>
                <div class="synthesis-node node-left">{"Code"}</div>
                <div class="synthesis-node node-right">{"Ethics"}</div>
                <svg class="synthesis-wires" viewBox="0 0 320 160" preserveAspectRatio="none">
                    <path d="M 160 30 L 60 130 L 260 130 Z" fill="none" stroke="rgba(217, 70, 239, 0.3)" stroke-width="2" />
                    <circle cx="160" cy="95" r="30" fill="rgba(217, 70, 239, 0.1)" stroke="#e879f9" class="animate-pulse" />
                </svg>
                <div class="synthesis-you">{"YOU"}</div>
            </div>
        </div>
    }
}

fn moat_panel() -> Html {
    html! {
        <div class="sim-body moat-panel">
            <div class="moat-glyph">{"🤝"}</div>
            <p class="moat-quote">{"\"The only thing that cannot be tokenized is human connection.\""}</p>
            <div class="moat-grid">
                <div class="moat-tile">
                    <span class="moat-kicker">{"Moat 1"}</span>
                    <span class="moat-name">{"Accountability"}</span>
                </div>
                <div class="moat-tile">
                    <span class="moat-kicker">{"Moat 2"}</span>
                    <span class="moat-name">{"Empathy"}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(CompetenciesSection)]
pub fn competencies_section() -> Html {
    let active = use_state(|| Competency::Orchestrator);
    let spec = tab_spec(*active);

    let content = match *active {
        Competency::Orchestrator => html! { <OrchestratorSim /> },
        Competency::Designer => html! { <ApprovalGateSim /> },
        Competency::Polymath => polymath_panel(),
        Competency::Moat => moat_panel(),
    };

    html! {
        <section class="competencies">
            <div class="competencies-inner">
                <Reveal>
                    <div class="competencies-header">
                        <span class="competencies-kicker">{"Core Competencies"}</span>
                        <h2>{"The Evolutions of You"}</h2>
                    </div>
                </Reveal>
                <div class="competencies-layout">
                    <Reveal delay_ms={200} class="tab-rail">
                        {
                            for TABS.iter().map(|tab| {
                                let is_active = *active == tab.id;
                                let onclick = {
                                    let active = active.clone();
                                    let picked = tab.id;
                                    Callback::from(move |_| {
                                        if let Some(next) = retarget(*active, picked) {
                                            active.set(next);
                                        }
                                    })
                                };
                                html! {
                                    <button
                                        {onclick}
                                        class={classes!("tab-button", is_active.then_some("active"))}
                                        style={is_active.then(|| format!("border-color: {};", tab.accent))}
                                    >
                                        <div
                                            class="tab-chip"
                                            style={is_active.then(|| format!("background: {};", tab.tint))}
                                        >
                                            <span>{tab.glyph}</span>
                                        </div>
                                        <h3>{tab.title}</h3>
                                    </button>
                                }
                            })
                        }
                    </Reveal>
                    <Reveal delay_ms={400} class="tab-stage">
                        <div class="sim-panel" style={format!("border-color: {};", spec.accent)}>
                            <h3 class="sim-title" style={format!("color: {};", spec.accent)}>
                                {format!("{} Simulator", spec.title)}
                            </h3>
                            <div class="sim-content">
                                { content }
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
            <style>
                {r#"
                    .competencies {
                        padding: 6rem 0;
                        background: #020617;
                        color: #fff;
                        border-bottom: 1px solid #0f172a;
                    }

                    .competencies-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .competencies-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .competencies-kicker {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.4em;
                        color: #22d3ee;
                        text-transform: uppercase;
                    }

                    .competencies-header h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 900;
                        font-style: italic;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        margin: 1rem 0 0;
                    }

                    .competencies-layout {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }

                    @media (min-width: 1024px) {
                        .competencies-layout {
                            flex-direction: row;
                        }

                        .tab-rail {
                            width: 33%;
                        }

                        .tab-stage {
                            width: 67%;
                        }
                    }

                    .tab-rail {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .tab-button {
                        width: 100%;
                        text-align: left;
                        padding: 1.25rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        background: #000;
                        border: 1px solid #1e293b;
                        opacity: 0.6;
                        transition: all 0.3s ease;
                    }

                    .tab-button:hover {
                        border-color: #475569;
                        opacity: 1;
                    }

                    .tab-button.active {
                        background: #0f172a;
                        opacity: 1;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.4);
                    }

                    .tab-chip {
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        margin-right: 1rem;
                        background: #0f172a;
                        font-size: 1.1rem;
                        line-height: 1;
                    }

                    .tab-button h3 {
                        font-weight: 700;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #64748b;
                        margin: 0;
                    }

                    .tab-button.active h3 {
                        color: #fff;
                    }

                    .sim-panel {
                        background: #0f172a;
                        border: 1px solid #1e293b;
                        border-radius: 2rem;
                        padding: 2rem;
                        height: 450px;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                        position: relative;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        transition: border-color 0.5s ease;
                    }

                    .sim-title {
                        font-size: 1.5rem;
                        font-weight: 900;
                        font-style: italic;
                        text-transform: uppercase;
                        letter-spacing: -0.025em;
                        margin: 0 0 1.5rem;
                    }

                    .sim-content {
                        flex: 1;
                        display: flex;
                        min-height: 0;
                    }

                    .sim-body {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        padding: 0.5rem;
                        min-width: 0;
                    }

                    .sim-lede {
                        color: #94a3b8;
                        font-size: 0.875rem;
                        margin: 0 0 1.5rem;
                    }

                    .sim-lede strong {
                        color: #fff;
                    }

                    .sim-lede.centered {
                        text-align: center;
                        margin-bottom: 2rem;
                    }

                    .lede-emerald { color: #34d399 !important; }

                    .lede-fuchsia {
                        color: #e879f9 !important;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .sim-arena {
                        flex: 1;
                        background: #020617;
                        border-radius: 0.75rem;
                        border: 1px solid #1e293b;
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .decompose-button {
                        padding: 0.75rem 1.5rem;
                        background: #2563eb;
                        color: #fff;
                        border: none;
                        border-radius: 9999px;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        box-shadow: 0 0 15px rgba(37, 99, 235, 0.5);
                        transition: all 0.3s ease;
                    }

                    .decompose-button:hover {
                        background: #3b82f6;
                    }

                    .fanout {
                        width: 100%;
                        height: 100%;
                        position: relative;
                    }

                    .fanout-origin {
                        position: absolute;
                        top: 50%;
                        left: 25%;
                        transform: translate(-50%, -50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        z-index: 10;
                    }

                    .fanout-origin-node {
                        width: 3rem;
                        height: 3rem;
                        background: #3b82f6;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 0 20px rgba(59, 130, 246, 0.6);
                    }

                    .fanout-origin-label {
                        font-size: 10px;
                        font-weight: 700;
                        color: #60a5fa;
                        margin-top: 0.5rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .fanout-wires {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        pointer-events: none;
                    }

                    .fanout-agent {
                        position: absolute;
                        left: 65%;
                        transform: translate(-50%, -50%) translateX(-20px);
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        opacity: 0;
                        transition: all 0.5s ease;
                        font-size: 10px;
                        font-family: monospace;
                        color: #cbd5e1;
                        white-space: nowrap;
                    }

                    .fanout-agent.landed {
                        opacity: 1;
                        transform: translate(-50%, -50%);
                    }

                    .fanout-agent-top { top: 25%; }
                    .fanout-agent-mid { top: 50%; transition-delay: 150ms; }
                    .fanout-agent-low { top: 75%; transition-delay: 300ms; }

                    .fanout-agent-node {
                        width: 2rem;
                        height: 2rem;
                        background: #1e293b;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.8rem;
                    }

                    .agent-blue { border: 1px solid #3b82f6; }
                    .agent-cyan { border: 1px solid #06b6d4; }

                    .sim-quiet-button {
                        margin-top: 1rem;
                        background: none;
                        border: none;
                        color: #64748b;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        text-align: center;
                        width: 100%;
                        transition: color 0.3s ease;
                    }

                    .sim-quiet-button:hover {
                        color: #fff;
                    }

                    .approval-arena {
                        flex-direction: column;
                        justify-content: center;
                        align-items: stretch;
                        padding: 0 2rem;
                        border-color: rgba(6, 78, 59, 0.5);
                    }

                    .approval-track {
                        position: relative;
                        height: 0.5rem;
                        background: #1e293b;
                        border-radius: 9999px;
                        margin-bottom: 2rem;
                    }

                    .approval-dot {
                        position: absolute;
                        top: 50%;
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        background: #fff;
                        box-shadow: 0 0 10px white;
                        transition: all 1s linear;
                        transform: translateY(-50%);
                    }

                    .dot-generating { left: 10%; }

                    .dot-auditing {
                        left: 50%;
                        transform: translateY(-50%) translateX(-50%);
                    }

                    .dot-approved { left: 90%; }

                    .dot-rejected {
                        left: 50%;
                        transform: translateY(-50%) translateX(-50%) scale(1.5);
                        background: #ef4444;
                        opacity: 0;
                    }

                    .audit-station {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        border: 2px solid #334155;
                        background: #0f172a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.1rem;
                        filter: grayscale(1) opacity(0.6);
                        transition: border-color 0.3s ease, background 0.3s ease;
                    }

                    .audit-station.auditing {
                        border-color: #34d399;
                        background: rgba(6, 78, 59, 0.3);
                        filter: none;
                    }

                    .audit-station.cleared {
                        border-color: #334155;
                        background: #1e293b;
                    }

                    .approval-labels {
                        display: flex;
                        justify-content: space-between;
                        font-size: 10px;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #64748b;
                        margin-bottom: 2rem;
                    }

                    .approval-labels .label-live {
                        color: #34d399;
                    }

                    .approval-controls {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        height: 3rem;
                        align-items: center;
                    }

                    .approve-button {
                        padding: 0.75rem 1.5rem;
                        background: #059669;
                        color: #fff;
                        border: none;
                        border-radius: 0.25rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        box-shadow: 0 0 15px rgba(5, 150, 105, 0.4);
                    }

                    .approve-button:hover {
                        background: #10b981;
                    }

                    .reject-button {
                        padding: 0.75rem 1.5rem;
                        background: rgba(127, 29, 29, 0.5);
                        border: 1px solid rgba(239, 68, 68, 0.5);
                        color: #fecaca;
                        border-radius: 0.25rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .reject-button:hover {
                        background: #991b1b;
                    }

                    .generating-note {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #475569;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .generating-gear {
                        display: inline-block;
                        animation: spin 3s linear infinite;
                    }

                    .polymath-panel {
                        justify-content: center;
                        text-align: center;
                        padding: 1.5rem;
                    }

                    .synthesis-diagram {
                        position: relative;
                        height: 10rem;
                        width: 100%;
                        max-width: 24rem;
                        margin: 0 auto;
                    }

                    .synthesis-node {
                        position: absolute;
                        padding: 0.5rem 1rem;
                        background: #0f172a;
                        border: 1px solid #334155;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #fff;
                        text-transform: uppercase;
                        z-index: 10;
                    }

                    .node-top {
                        top: 0;
                        left: 50%;
                        transform: translateX(-50%);
                    }

                    .node-left { bottom: 0; left: 0; }
                    .node-right { bottom: 0; right: 0; }

                    .synthesis-wires {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }

                    .synthesis-you {
                        position: absolute;
                        top: 60%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        color: #e879f9;
                        font-size: 0.75rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }

                    .moat-panel {
                        justify-content: center;
                        text-align: center;
                        padding: 1.5rem;
                    }

                    .moat-glyph {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }

                    .moat-quote {
                        color: #fff;
                        font-size: 1.125rem;
                        font-style: italic;
                        margin: 0 0 1.5rem;
                    }

                    .moat-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        text-align: left;
                    }

                    .moat-tile {
                        background: rgba(69, 26, 3, 0.3);
                        border: 1px solid rgba(124, 45, 18, 0.5);
                        padding: 1rem;
                        border-radius: 0.75rem;
                    }

                    .moat-kicker {
                        display: block;
                        color: #fb923c;
                        font-size: 10px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.25rem;
                    }

                    .moat-name {
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 700;
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
    fn orchestrator_runs_click_then_timer_then_reset() {
        let mut sim = Simulator::new(ORCHESTRATOR_STEPS);
        assert_eq!(sim.step(), IDLE);

        assert!(sim.advance());
        assert_eq!(sim.step(), DECOMPOSING);

        let hop = sim.auto().unwrap();
        assert_eq!(hop.delay_ms, 1500);
        assert!(sim.fire_auto());
        assert_eq!(sim.step(), DECOMPOSED);

        assert!(sim.reset());
        assert_eq!(sim.step(), IDLE);
    }

    #[test]
    fn orchestrator_reset_is_ignored_before_the_end() {
        let mut sim = Simulator::new(ORCHESTRATOR_STEPS);
        assert!(!sim.reset());

        sim.advance();
        assert!(!sim.reset());
        assert_eq!(sim.step(), DECOMPOSING);
    }

    #[test]
    fn orchestrator_terminal_step_holds() {
        let mut sim = Simulator::at(ORCHESTRATOR_STEPS, DECOMPOSED);
        assert!(!sim.advance());
        assert!(sim.auto().is_none());
        assert_eq!(sim.step(), DECOMPOSED);
    }

    #[test]
    fn approval_generation_hops_to_audit_on_its_own() {
        let mut sim = Simulator::new(APPROVAL_STEPS);
        let hop = sim.auto().unwrap();
        assert_eq!(hop.delay_ms, 1000);
        assert_eq!(hop.next, AUDITING);

        assert!(sim.fire_auto());
        assert_eq!(sim.step(), AUDITING);
        // The audit waits for a human verdict.
        assert!(sim.auto().is_none());
    }

    #[test]
    fn audit_branches_on_the_verdict() {
        let mut sim = Simulator::at(APPROVAL_STEPS, AUDITING);
        assert!(sim.choose(APPROVED));
        assert_eq!(sim.step(), APPROVED);

        let mut sim = Simulator::at(APPROVAL_STEPS, AUDITING);
        assert!(sim.choose(REJECTED));
        assert_eq!(sim.step(), REJECTED);
    }

    #[test]
    fn audit_ignores_undefined_verdicts() {
        let mut sim = Simulator::at(APPROVAL_STEPS, AUDITING);
        assert!(!sim.choose(GENERATING));
        assert_eq!(sim.step(), AUDITING);
    }

    #[test]
    fn both_outcomes_loop_back_and_rearm_generation() {
        for outcome in [APPROVED, REJECTED] {
            let mut sim = Simulator::at(APPROVAL_STEPS, outcome);
            assert!(sim.reset());
            assert_eq!(sim.step(), GENERATING);
            assert_eq!(sim.auto().unwrap().next, AUDITING);
        }
    }

    #[test]
    fn tabs_form_a_closed_set() {
        assert_eq!(TABS.len(), 4);
        for (i, a) in TABS.iter().enumerate() {
            for b in &TABS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn tab_payloads_are_fixed() {
        assert_eq!(tab_spec(Competency::Orchestrator).title, "The Orchestrator");
        assert_eq!(tab_spec(Competency::Designer).title, "Smart Designer");
        assert_eq!(tab_spec(Competency::Polymath).title, "Synthetic Polymath");
        assert_eq!(tab_spec(Competency::Moat).title, "The Human Moat");
    }

    #[test]
    fn reselecting_the_active_tab_is_a_no_op() {
        assert_eq!(retarget(Competency::Designer, Competency::Designer), None);
        assert_eq!(
            retarget(Competency::Designer, Competency::Moat),
            Some(Competency::Moat)
        );
    }
}
