use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::TIMELINE_STEP_MS;
use crate::content::PROCESS_STEPS;
use crate::reveal::{reveal_class, use_reveal, RevealOptions};
use crate::Route;

/// Which step of the timeline is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineCursor {
    active: usize,
    len: usize,
}

pub enum CursorAction {
    /// Moves to the next step, wrapping after the last one.
    Advance,
    Select(usize),
}

impl TimelineCursor {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn apply(self, action: CursorAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let active = match action {
            CursorAction::Advance => (self.active + 1) % self.len,
            CursorAction::Select(index) if index < self.len => index,
            CursorAction::Select(_) => self.active,
        };
        Self { active, ..self }
    }
}

impl Reducible for TimelineCursor {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessTimelineProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Show a link to the full process page under the active step.
    #[prop_or(true)]
    pub details_link: bool,
}

/// Six-step overview. Once on screen the highlighted step advances on its
/// own; clicking a step selects it.
#[function_component(ProcessTimeline)]
pub fn process_timeline(props: &ProcessTimelineProps) -> Html {
    let (node, visible) = use_reveal(RevealOptions::default());
    let cursor = use_reducer(|| TimelineCursor::new(PROCESS_STEPS.len()));

    {
        let cursor = cursor.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                let interval = visible.then(|| {
                    Interval::new(TIMELINE_STEP_MS, move || cursor.dispatch(CursorAction::Advance))
                });
                move || drop(interval)
            },
            visible,
        );
    }

    let active = cursor.active();
    let current = &PROCESS_STEPS[active];

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("site-section", "theme-sand", reveal_class(visible))}
        >
            <div class="section-inner">
                <h2 class="section-title">
                    {"Ma méthode pour votre "}<span class="accent">{"autonomie"}</span>
                </h2>
                <p class="section-subtitle">{"6 étapes optimisées pour votre indépendance digitale"}</p>

                <div class="timeline-steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| {
                        let onclick = {
                            let cursor = cursor.clone();
                            Callback::from(move |_: MouseEvent| cursor.dispatch(CursorAction::Select(index)))
                        };
                        html! {
                            <button
                                class={classes!("timeline-tile", (index == active).then(|| "active"))}
                                {onclick}
                            >
                                <span class="card-icon">{step.icon}</span>
                                <strong>{step.title}</strong>
                                <span class="step-duration">{step.duration}</span>
                            </button>
                        }
                    }) }
                </div>

                <div class="timeline-detail card">
                    <h3>{format!("Étape {} : {}", current.number, current.title)}</h3>
                    <p>{current.description}</p>
                    <ul class="card-bullets">
                        { for current.deliverables.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                    if props.details_link {
                        <Link<Route> to={Route::Process} classes="link-button">
                            {"Voir la méthode complète"}
                        </Link<Route>>
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_wraps_after_the_last_step() {
        let mut cursor = TimelineCursor::new(3);
        assert_eq!(cursor.active(), 0);
        cursor = cursor.apply(CursorAction::Advance);
        cursor = cursor.apply(CursorAction::Advance);
        assert_eq!(cursor.active(), 2);
        cursor = cursor.apply(CursorAction::Advance);
        assert_eq!(cursor.active(), 0);
    }

    #[test]
    fn selecting_jumps_and_advancing_continues_from_there() {
        let cursor = TimelineCursor::new(PROCESS_STEPS.len()).apply(CursorAction::Select(4));
        assert_eq!(cursor.active(), 4);
        assert_eq!(cursor.apply(CursorAction::Advance).active(), 5);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let cursor = TimelineCursor::new(6).apply(CursorAction::Select(1));
        assert_eq!(cursor.apply(CursorAction::Select(6)).active(), 1);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let cursor = Rc::new(TimelineCursor::new(6));
        let same = cursor.clone().reduce(CursorAction::Select(0));
        assert!(Rc::ptr_eq(&cursor, &same));
        let moved = cursor.reduce(CursorAction::Advance);
        assert_eq!(moved.active(), 1);
    }

    #[test]
    fn empty_timeline_never_moves() {
        let cursor = TimelineCursor::new(0);
        assert_eq!(cursor.apply(CursorAction::Advance).active(), 0);
    }
}
