//! Typewriter text component
//!
//! Renders a span whose content is driven by a [`Typewriter`] once the span is
//! mounted. The running animation is owned by a [`ScopedAnimation`] that is
//! released when the component's owner is cleaned up, so no timer outlives the
//! component.

use leptos::html;
use leptos::prelude::*;

use crate::core::TypingConfig;
#[cfg(not(feature = "ssr"))]
use crate::core::ScopedAnimation;

#[component]
pub fn TypedText(
    /// Strings and timings to cycle through
    config: TypingConfig,
    /// CSS classes for the text span
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let target = NodeRef::<html::Span>::new();

    #[cfg(not(feature = "ssr"))]
    {
        let running = StoredValue::new_local(None::<ScopedAnimation<driver::TimerDriver>>);

        // Runs once the span exists
        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            let element: leptos::web_sys::HtmlElement = element.into();
            running.update_value(|slot| {
                if slot.is_none() {
                    *slot = Some(ScopedAnimation::acquire(
                        driver::TimerDriver,
                        &element,
                        &config,
                    ));
                }
            });
        });

        on_cleanup(move || {
            running.try_update_value(|slot| {
                if let Some(animation) = slot.take() {
                    animation.release();
                }
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = config;
    }

    view! {
        <span node_ref=target class=class></span>
        <span class="typed-cursor" aria-hidden="true">"|"</span>
    }
}

#[cfg(not(feature = "ssr"))]
mod driver {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use gloo_timers::callback::Timeout;
    use leptos::web_sys::HtmlElement;

    use crate::core::{AnimationDriver, TypingConfig, TypingRun};

    struct TypingLoop {
        run: TypingRun,
        element: HtmlElement,
        pending: Option<Timeout>,
    }

    /// Drives a [`Typewriter`] with browser timeouts
    pub struct TimerDriver;

    pub struct TimerHandle(Rc<RefCell<TypingLoop>>);

    impl AnimationDriver for TimerDriver {
        type Target = HtmlElement;
        type Handle = TimerHandle;

        fn create(&mut self, target: &HtmlElement, config: &TypingConfig) -> TimerHandle {
            target.set_text_content(Some(""));

            let state = Rc::new(RefCell::new(TypingLoop {
                run: TypingRun::new(config.clone()),
                element: target.clone(),
                pending: None,
            }));
            schedule(&state, config.start_delay());

            TimerHandle(state)
        }

        fn destroy(&mut self, handle: TimerHandle) {
            let mut inner = handle.0.borrow_mut();
            inner.run.stop();
            if let Some(timeout) = inner.pending.take() {
                timeout.cancel();
            }
        }
    }

    fn schedule(state: &Rc<RefCell<TypingLoop>>, delay: Duration) {
        let weak = Rc::downgrade(state);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || step(&weak));
        state.borrow_mut().pending = Some(timeout);
    }

    fn step(weak: &Weak<RefCell<TypingLoop>>) {
        let Some(state) = weak.upgrade() else {
            return;
        };

        let next_delay = {
            let mut inner = state.borrow_mut();
            let Some((text, next)) = inner.run.advance() else {
                inner.pending = None;
                return;
            };
            inner.element.set_text_content(Some(&text));
            next
        };

        match next_delay {
            Some(delay) => schedule(&state, delay),
            None => state.borrow_mut().pending = None,
        }
    }
}
