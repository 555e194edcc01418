use yew::prelude::*;
use gloo_timers::callback::Timeout;

/// Scheduled hop taken a fixed delay after its step is entered.
#[derive(Clone, Copy, PartialEq)]
pub struct Auto {
    pub delay_ms: u32,
    pub next: u8,
}

/// Static description of one step in a simulator. A table of these is the
/// whole behaviour of a demo; rendering is a pure function of the current
/// step index.
#[derive(Clone, Copy)]
pub struct StepSpec {
    /// Successor for the primary user action, if any.
    pub next: Option<u8>,
    /// Successors reachable through an explicit branch choice.
    pub choices: &'static [u8],
    /// Scheduled hop armed while this step is active.
    pub auto: Option<Auto>,
    /// Whether `reset` is honoured from this step.
    pub terminal: bool,
}

impl StepSpec {
    pub const DEFAULT: StepSpec = StepSpec {
        next: None,
        choices: &[],
        auto: None,
        terminal: false,
    };
}

/// Step state over a static transition table. Triggers without a defined
/// successor are silent no-ops; every mutator reports whether the step
/// actually changed.
pub struct Simulator {
    step: u8,
    steps: &'static [StepSpec],
}

impl Simulator {
    pub fn new(steps: &'static [StepSpec]) -> Self {
        Self::at(steps, 0)
    }

    pub fn at(steps: &'static [StepSpec], step: u8) -> Self {
        Self { step, steps }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    fn spec(&self) -> &StepSpec {
        &self.steps[self.step as usize]
    }

    /// Follows the primary successor of the current step.
    pub fn advance(&mut self) -> bool {
        match self.spec().next {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Jumps to `target` if the current step lists it as a choice.
    pub fn choose(&mut self, target: u8) -> bool {
        if target != self.step && self.spec().choices.contains(&target) {
            self.step = target;
            return true;
        }
        false
    }

    /// Returns to step 0. Honoured only from a terminal step.
    pub fn reset(&mut self) -> bool {
        if self.spec().terminal && self.step != 0 {
            self.step = 0;
            return true;
        }
        false
    }

    /// The scheduled hop pending for the current step, if any.
    pub fn auto(&self) -> Option<Auto> {
        self.spec().auto
    }

    /// Takes the scheduled hop of the current step.
    pub fn fire_auto(&mut self) -> bool {
        match self.spec().auto {
            Some(hop) => {
                self.step = hop.next;
                true
            }
            None => false,
        }
    }
}

/// Handle returned by [`use_simulator`]. Cloned freely into callbacks.
#[derive(Clone)]
pub struct UseSimulatorHandle {
    step: UseStateHandle<u8>,
    steps: &'static [StepSpec],
}

impl UseSimulatorHandle {
    pub fn step(&self) -> u8 {
        *self.step
    }

    fn apply(&self, mutate: impl FnOnce(&mut Simulator) -> bool) {
        let mut machine = Simulator::at(self.steps, *self.step);
        if mutate(&mut machine) {
            self.step.set(machine.step());
        }
    }

    pub fn advance(&self) {
        self.apply(|machine| machine.advance());
    }

    pub fn choose(&self, target: u8) {
        self.apply(|machine| machine.choose(target));
    }

    pub fn reset(&self) {
        self.apply(|machine| machine.reset());
    }
}

/// Drives a step table from Yew state. Whenever the current step carries a
/// scheduled hop a one-shot timer is armed for it; leaving the step, or
/// unmounting, drops the timer before it can fire against a stale step.
#[hook]
pub fn use_simulator(steps: &'static [StepSpec], initial: u8) -> UseSimulatorHandle {
    let step = use_state(move || initial);

    {
        let dep = *step;
        let step = step.clone();
        use_effect_with_deps(
            move |&current: &u8| {
                let timer = Simulator::at(steps, current).auto().map(|hop| {
                    let setter = step.setter();
                    Timeout::new(hop.delay_ms, move || {
                        let mut machine = Simulator::at(steps, current);
                        if machine.fire_auto() {
                            setter.set(machine.step());
                        }
                    })
                });
                move || drop(timer)
            },
            dep,
        );
    }

    UseSimulatorHandle { step, steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A little table exercising every kind of transition: 0 advances to 1,
    // 1 hops to 2 on a timer, 2 branches to 3 or 4, both of which are
    // terminal.
    const TABLE: &[StepSpec] = &[
        StepSpec {
            next: Some(1),
            ..StepSpec::DEFAULT
        },
        StepSpec {
            auto: Some(Auto {
                delay_ms: 500,
                next: 2,
            }),
            ..StepSpec::DEFAULT
        },
        StepSpec {
            choices: &[3, 4],
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

    #[test]
    fn advance_follows_defined_successor() {
        let mut sim = Simulator::new(TABLE);
        assert!(sim.advance());
        assert_eq!(sim.step(), 1);
    }

    #[test]
    fn advance_without_successor_is_a_no_op() {
        let mut sim = Simulator::at(TABLE, 1);
        assert!(!sim.advance());
        assert_eq!(sim.step(), 1);
    }

    #[test]
    fn auto_is_reported_only_where_defined() {
        let sim = Simulator::new(TABLE);
        assert!(sim.auto().is_none());

        let sim = Simulator::at(TABLE, 1);
        let hop = sim.auto().unwrap();
        assert_eq!(hop.delay_ms, 500);
        assert_eq!(hop.next, 2);
    }

    #[test]
    fn fire_auto_takes_the_scheduled_hop() {
        let mut sim = Simulator::at(TABLE, 1);
        assert!(sim.fire_auto());
        assert_eq!(sim.step(), 2);
        // Nothing scheduled on the new step, so firing again does nothing.
        assert!(!sim.fire_auto());
        assert_eq!(sim.step(), 2);
    }

    #[test]
    fn choose_respects_the_choice_list() {
        let mut sim = Simulator::at(TABLE, 2);
        assert!(!sim.choose(1));
        assert_eq!(sim.step(), 2);
        assert!(sim.choose(4));
        assert_eq!(sim.step(), 4);
    }

    #[test]
    fn choosing_the_current_step_reports_no_change() {
        let mut sim = Simulator::at(TABLE, 2);
        assert!(!sim.choose(2));
        assert_eq!(sim.step(), 2);
    }

    #[test]
    fn reset_only_from_terminal_steps() {
        let mut sim = Simulator::at(TABLE, 1);
        assert!(!sim.reset());
        assert_eq!(sim.step(), 1);

        let mut sim = Simulator::at(TABLE, 3);
        assert!(sim.reset());
        assert_eq!(sim.step(), 0);
    }

    #[test]
    fn one_trigger_moves_at_most_one_transition() {
        let mut sim = Simulator::new(TABLE);
        sim.advance();
        // The timed hop has not fired yet; a single trigger never skips
        // through an intermediate step.
        assert_eq!(sim.step(), 1);
        sim.fire_auto();
        assert_eq!(sim.step(), 2);
    }
}
