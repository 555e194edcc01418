use yew::prelude::*;
use crate::components::reveal::Reveal;

#[derive(Clone, Copy, PartialEq)]
enum EraMode {
    Syntax,
    Vibe,
}

#[function_component(SyntaxVsImagination)]
pub fn syntax_vs_imagination() -> Html {
    let mode = use_state(|| EraMode::Vibe);

    let pick = |target: EraMode| {
        let mode = mode.clone();
        Callback::from(move |_| mode.set(target))
    };

    html! {
        <section class="comparison">
            <div class="comparison-inner">
                <Reveal>
                    <div class="comparison-header">
                        <h2>{"Imagination is the New Syntax"}</h2>
                        <p>{"Interactive Comparison"}</p>
                    </div>
                </Reveal>

                <Reveal delay_ms={200}>
                    <div class="mode-toggle-row">
                        <div class="mode-toggle">
                            <button
                                onclick={pick(EraMode::Syntax)}
                                class={classes!("mode-pill", "mode-pill-syntax", (*mode == EraMode::Syntax).then_some("active"))}
                            >
                                {"💻 2015: Syntax"}
                            </button>
                            <button
                                onclick={pick(EraMode::Vibe)}
                                class={classes!("mode-pill", "mode-pill-vibe", (*mode == EraMode::Vibe).then_some("active"))}
                            >
                                {"💡 2026: Vibe"}
                            </button>
                        </div>
                    </div>

                    // Both panels stay mounted; the inactive one is
                    // cross-faded out and made inert.
                    <div class="era-stage">
                        <div class={classes!("era-panel", "syntax-panel", (*mode == EraMode::Syntax).then_some("active"))}>
                            <div class="syntax-titlebar">
                                <span class="syntax-label">{"⌨ IDE Workspace"}</span>
                                <span class="syntax-filename">{"efficiency_tracker.cpp"}</span>
                            </div>
                            <div class="syntax-listing scrollbar-hide">
                                <p class="tok-include">{"#include <iostream>"}</p>
                                <p class="tok-include">{"#include <vector>"}</p>
                                <p class="tok-include tok-gap">{"#include <algorithm>"}</p>
                                <p class="tok-keyword">{"class EfficiencyTracker {"}</p>
                                <p class="indent-1">{"std::vector<int> data;"}</p>
                                <p class="indent-1 tok-access">{"public:"}</p>
                                <p class="indent-2 tok-fn">{"void addData(int val) { data.push_back(val); }"}</p>
                                <p class="indent-2 tok-fn">{"void process() {"}</p>
                                <p class="indent-3 tok-comment">{"// 4 hours of debugging sorting logic..."}</p>
                                <p class="indent-3">{"std::sort(data.begin(), data.end());"}</p>
                                <p class="indent-2">{"}"}</p>
                                <p class="indent-2 tok-fn">{"int main() {"}</p>
                                <p class="indent-3">{"EfficiencyTracker et;"}</p>
                                <p class="indent-3">{"et.addData(95);"}</p>
                                <p class="indent-3">{"return 0;"}</p>
                                <p class="indent-2">{"}"}</p>
                                <p class="tok-keyword">{"};"}</p>
                            </div>
                            <div class="era-panel-footer syntax-footer">
                                {"80% of time spent fighting the machine."}
                            </div>
                        </div>

                        <div class={classes!("era-panel", "vibe-panel", (*mode == EraMode::Vibe).then_some("active"))}>
                            <div class="vibe-titlebar">
                                <span class="vibe-label">{"✨ Imagination Canvas"}</span>
                            </div>
                            <div class="vibe-prompt">
                                <p>{"\"Build me a web app that tracks homework efficiency and visualizes my study habits using a minimalist dashboard.\""}</p>
                            </div>
                            <div class="vibe-preview">
                                <div class="vibe-preview-glow"></div>
                                <div class="vibe-mock">
                                    <div class="mock-bar mock-title animate-pulse"></div>
                                    <div class="mock-tiles">
                                        <div class="mock-tile">
                                            <span class="mock-tile-glyph">{"📈"}</span>
                                            <div class="mock-bar mock-half"></div>
                                        </div>
                                        <div class="mock-tile">
                                            <span class="mock-tile-glyph">{"🕸"}</span>
                                            <div class="mock-bar mock-half"></div>
                                        </div>
                                    </div>
                                    <div class="mock-panel">
                                        <div class="mock-bar"></div>
                                        <div class="mock-bar mock-four-fifths"></div>
                                        <div class="mock-bar mock-two-thirds"></div>
                                    </div>
                                </div>
                                <div class="vibe-ready-pill">{"App Ready: Visualizing..."}</div>
                            </div>
                            <div class="era-panel-footer vibe-footer">
                                {"100% of time spent on architecture & impact."}
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .comparison {
                        padding: 6rem 0;
                        background: #000;
                        overflow: hidden;
                        border-bottom: 1px solid #0f172a;
                    }

                    .comparison-inner {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .comparison-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .comparison-header h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 900;
                        font-style: italic;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        color: #fff;
                        margin: 0;
                    }

                    .comparison-header p {
                        color: #64748b;
                        margin-top: 1rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-weight: 700;
                        font-size: 0.875rem;
                    }

                    .mode-toggle-row {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 3rem;
                    }

                    .mode-toggle {
                        display: inline-flex;
                        background: #0f172a;
                        padding: 0.375rem;
                        border-radius: 9999px;
                        border: 1px solid #1e293b;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                    }

                    .mode-pill {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 2rem;
                        border: 1px solid transparent;
                        border-radius: 9999px;
                        background: none;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.75rem;
                        color: #64748b;
                        transition: all 0.3s ease;
                    }

                    .mode-pill:hover {
                        color: #cbd5e1;
                    }

                    .mode-pill-syntax.active {
                        background: #1e293b;
                        color: #e879f9;
                        box-shadow: 0 0 15px rgba(217, 70, 239, 0.3);
                    }

                    .mode-pill-vibe.active {
                        background: #083344;
                        color: #22d3ee;
                        border-color: rgba(6, 182, 212, 0.3);
                        box-shadow: 0 0 15px rgba(34, 211, 238, 0.3);
                    }

                    .era-stage {
                        position: relative;
                        min-height: 500px;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        border: 1px solid #1e293b;
                        background: #020617;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                    }

                    .era-panel {
                        position: absolute;
                        inset: 0;
                        padding: 2.5rem;
                        display: flex;
                        flex-direction: column;
                        opacity: 0;
                        transition: all 0.5s ease-in-out;
                        pointer-events: none;
                    }

                    .syntax-panel {
                        transform: translateX(-100%);
                    }

                    .vibe-panel {
                        transform: translateX(100%);
                    }

                    .era-panel.active {
                        opacity: 1;
                        transform: translateX(0);
                        pointer-events: auto;
                    }

                    .syntax-titlebar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 1.5rem;
                        border-bottom: 1px solid #1e293b;
                        padding-bottom: 1rem;
                    }

                    .syntax-label {
                        color: #e879f9;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.75rem;
                    }

                    .syntax-filename {
                        color: #475569;
                        font-size: 10px;
                        font-family: monospace;
                    }

                    .syntax-listing {
                        font-family: monospace;
                        font-size: 0.8rem;
                        color: #94a3b8;
                        line-height: 2;
                        overflow-y: auto;
                        padding-right: 0.5rem;
                    }

                    .syntax-listing p {
                        margin: 0;
                    }

                    .tok-include { color: #60a5fa; }
                    .tok-keyword { color: #c084fc; }
                    .tok-access { color: #fb923c; }
                    .tok-fn { color: #34d399; }
                    .tok-comment { color: #64748b; }
                    .tok-gap { margin-bottom: 1rem; }
                    .indent-1 { padding-left: 1rem; }
                    .indent-2 { padding-left: 2rem; }
                    .indent-3 { padding-left: 3rem; }

                    .era-panel-footer {
                        margin-top: auto;
                        padding-top: 1.5rem;
                        text-align: center;
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-weight: 900;
                    }

                    .syntax-footer {
                        color: #f0abfc;
                        border-top: 1px solid rgba(217, 70, 239, 0.2);
                        padding-top: 1rem;
                    }

                    .vibe-footer {
                        color: #67e8f9;
                        border-top: 1px solid rgba(6, 182, 212, 0.2);
                        padding-top: 1rem;
                    }

                    .vibe-titlebar {
                        margin-bottom: 1.5rem;
                    }

                    .vibe-label {
                        color: #22d3ee;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.75rem;
                    }

                    .vibe-prompt {
                        background: rgba(8, 51, 68, 0.3);
                        border: 1px solid rgba(6, 182, 212, 0.3);
                        padding: 1.5rem;
                        border-radius: 1rem;
                        margin-bottom: 2rem;
                        box-shadow: 0 0 20px rgba(34, 211, 238, 0.1);
                    }

                    .vibe-prompt p {
                        color: #fff;
                        font-size: 1.125rem;
                        font-style: italic;
                        font-weight: 500;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .vibe-preview {
                        flex: 1;
                        border: 1px solid #1e293b;
                        border-radius: 0.75rem;
                        background: rgba(15, 23, 42, 0.5);
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        position: relative;
                        overflow: hidden;
                    }

                    .vibe-preview-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom right, rgba(6, 182, 212, 0.05), transparent);
                        opacity: 0.5;
                    }

                    .vibe-mock {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 24rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .mock-bar {
                        height: 0.5rem;
                        width: 100%;
                        background: #1e293b;
                        border-radius: 0.25rem;
                    }

                    .mock-title {
                        height: 1rem;
                        width: 33%;
                    }

                    .mock-half { width: 50%; }
                    .mock-four-fifths { width: 80%; }
                    .mock-two-thirds { width: 66%; }

                    .mock-tiles {
                        display: flex;
                        gap: 1rem;
                    }

                    .mock-tile {
                        height: 5rem;
                        flex: 1;
                        background: rgba(22, 78, 99, 0.2);
                        border: 1px solid rgba(6, 182, 212, 0.2);
                        border-radius: 0.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.25rem;
                    }

                    .mock-tile-glyph {
                        opacity: 0.5;
                    }

                    .mock-panel {
                        height: 8rem;
                        width: 100%;
                        background: rgba(30, 41, 59, 0.3);
                        border: 1px solid rgba(30, 41, 59, 0.5);
                        border-radius: 0.5rem;
                        display: flex;
                        flex-direction: column;
                        padding: 1rem;
                        gap: 0.5rem;
                    }

                    .vibe-ready-pill {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        background: #22d3ee;
                        color: #020617;
                        font-weight: 900;
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        border: 2px solid white;
                        box-shadow: 0 0 30px rgba(34, 211, 238, 0.6);
                        z-index: 20;
                        white-space: nowrap;
                    }
                "#}
            </style>
        </section>
    }
}
