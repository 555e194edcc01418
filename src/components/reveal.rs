use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One-way latch behind the viewport reveal: flips on the first
/// intersecting observation and ignores everything after that.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observation into the latch. Returns true only on the
    /// false-to-true transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// Watches the node behind the returned ref and reports whether it has been
/// on screen at least once. The observer is registered on mount and
/// disconnected again when the component goes away; if the ref is never
/// attached to a node nothing is registered and the flag stays false.
#[hook]
pub fn use_on_screen(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut registration = None;

                if let Some(element) = node.cast::<Element>() {
                    let mut latch = RevealLatch::default();
                    let revealed = visible.setter();
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, _observer: IntersectionObserver| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .unchecked_into::<IntersectionObserverEntry>()
                                    .is_intersecting()
                            });
                            if latch.observe(intersecting) {
                                revealed.set(true);
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));

                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        // The closure has to outlive the observer, so both
                        // ride along into the cleanup below.
                        registration = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, _callback)) = registration {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    (node, *visible)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that slides its children in the first time they scroll into
/// view. The entrance never replays.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, visible) = use_on_screen(0.1);

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("revealed"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        let latch = RevealLatch::default();
        assert!(!latch.revealed());
    }

    #[test]
    fn latch_flips_on_first_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.revealed());
    }

    #[test]
    fn latch_never_unsets() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        // Scrolling back out, or in again, changes nothing.
        for intersecting in [false, true, false, false, true] {
            assert!(!latch.observe(intersecting));
            assert!(latch.revealed());
        }
    }

    #[test]
    fn latch_reports_transition_only_once() {
        let mut latch = RevealLatch::default();
        let transitions = [false, true, true, false, true]
            .into_iter()
            .filter(|&seen| latch.observe(seen))
            .count();
        assert_eq!(transitions, 1);
    }
}
