//! Theme context: owns the browser [`ThemeSession`] and paints the ripple.

use std::rc::Rc;

use yew::prelude::*;

use crate::app::preferences::BrowserStore;
use crate::app::scheduler::BrowserScheduler;
use crate::app::style::{DocumentStyleSink, inline_vars};
use crate::app::viewport;
use crate::core::config::ThemeTuning;
use crate::core::geometry::Point;
use crate::core::session::{RippleTransition, ThemeSession, ThemeTask};
use crate::core::theme::{ThemeDescriptor, ThemeName, descriptor};

type BrowserSession = ThemeSession<BrowserStore, BrowserScheduler<ThemeTask>, DocumentStyleSink>;

/// Value handed to theme consumers.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ThemeCtx {
    pub name: ThemeName,
    /// Advance to the next theme, rippling from the given point.
    pub cycle: Callback<Option<Point>>,
    /// Switch straight to a theme, rippling from the given point.
    pub set: Callback<(ThemeName, Option<Point>)>,
}

impl ThemeCtx {
    pub(crate) fn descriptor(&self) -> &'static ThemeDescriptor {
        descriptor(self.name)
    }
}

/// Current theme; the default theme outside a provider.
#[hook]
pub(crate) fn use_theme() -> ThemeCtx {
    use_context::<ThemeCtx>().unwrap_or_else(|| ThemeCtx {
        name: ThemeName::default(),
        cycle: Callback::noop(),
        set: Callback::noop(),
    })
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeProviderProps {
    pub tuning: ThemeTuning,
    pub storage_key: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub(crate) fn theme_provider(props: &ThemeProviderProps) -> Html {
    let session = use_mut_ref(|| None::<BrowserSession>);
    let refresh = use_force_update();

    if session.borrow().is_none() {
        let slot = Rc::downgrade(&session);
        let on_fire = {
            let refresh = refresh.clone();
            Callback::from(move |(handle, task)| {
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                let ended = slot
                    .borrow_mut()
                    .as_mut()
                    .is_some_and(|session| session.run_task(handle, task));
                if ended {
                    refresh.force_update();
                }
            })
        };
        *session.borrow_mut() = Some(ThemeSession::initialize(
            props.tuning.clone(),
            props.storage_key.to_string(),
            BrowserStore::Local,
            BrowserScheduler::new(on_fire),
            DocumentStyleSink,
        ));
    }

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(session) = session.borrow_mut().as_mut() {
                        session.teardown();
                    }
                }
            },
            (),
        );
    }

    let cycle = {
        let session = session.clone();
        let refresh = refresh.clone();
        use_callback(
            move |origin: Option<Point>, _| {
                let changed = session.borrow_mut().as_mut().is_some_and(|session| {
                    let before = session.name();
                    session.cycle(origin, viewport()) != before
                });
                if changed {
                    refresh.force_update();
                }
            },
            (),
        )
    };

    let set = {
        let session = session.clone();
        let refresh = refresh.clone();
        use_callback(
            move |(name, origin): (ThemeName, Option<Point>), _| {
                let changed = session
                    .borrow_mut()
                    .as_mut()
                    .is_some_and(|session| session.set(name, origin, viewport()));
                if changed {
                    refresh.force_update();
                }
            },
            (),
        )
    };

    let (name, ripple) = session
        .borrow()
        .as_ref()
        .map_or((ThemeName::default(), None), |session| {
            (session.name(), session.transition().copied())
        });
    let context = ThemeCtx { name, cycle, set };

    html! {
        <ContextProvider<ThemeCtx> {context}>
            { for props.children.iter() }
            { ripple.map(ripple_overlay).unwrap_or_default() }
        </ContextProvider<ThemeCtx>>
    }
}

fn ripple_overlay(ripple: RippleTransition) -> Html {
    html! {
        <div
            key={ripple.iteration.to_string()}
            class="theme-ripple-overlay"
            aria-hidden="true"
            style={inline_vars(&ripple.style_vars())}
        />
    }
}
