//! Touch-driven carousel component.

use leptos::callback::{Callable, Callback};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use mmart_carousel::{Carousel, CarouselConfig, DEFAULT_VIEWPORT_WIDTH_PX};
use std::time::Duration;
use tracing::warn;

/// Current viewport width in CSS pixels.
fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        window()
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH_PX)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_VIEWPORT_WIDTH_PX
    }
}

fn first_touch_x(ev: &ev::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|touch| f64::from(touch.client_x()))
}

/// Run `step` against the carousel and pass any new index to `on_change`.
///
/// The callback runs after the state update has finished, so it may read
/// the carousel itself.
fn drive(
    state: RwSignal<Carousel>,
    on_change: Option<Callback<usize>>,
    step: impl FnOnce(&mut Carousel) -> Option<usize>,
) {
    let changed = state.try_update(step).flatten();
    if let (Some(index), Some(on_change)) = (changed, on_change) {
        on_change.run(index);
    }
}

/// A horizontally swipeable row of slides.
///
/// Each child is one slide; wrap them in [`CarouselSlide`] so they size
/// themselves to the current slides-per-view.
#[component]
pub fn TouchCarousel(
    /// Behavior for this call site.
    config: CarouselConfig,
    /// Number of children passed in.
    #[prop(into)]
    slide_count: Signal<usize>,
    /// Accessible name for the region.
    #[prop(optional, into)]
    label: String,
    /// Called with the new index whenever the current slide changes.
    #[prop(optional, into)]
    on_slide_change: Option<Callback<usize>>,
    children: Children,
) -> impl IntoView {
    let carousel =
        match Carousel::with_viewport(config, slide_count.get_untracked(), viewport_width()) {
            Ok(carousel) => carousel,
            Err(e) => {
                warn!(error = %e, "invalid carousel config, rendering slides statically");
                return view! { <div class="carousel" aria-label=label>{children()}</div> }
                    .into_any();
            }
        };
    let interval = Duration::from_millis(carousel.config().rotation_interval_ms);
    let state = RwSignal::new(carousel);
    let container = NodeRef::<Div>::new();

    Effect::new(move |_| {
        let count = slide_count.get();
        drive(state, on_slide_change, |c| c.set_slide_count(count));
    });

    // Only the interval follows rotation_active; it is cleared while a
    // finger is down and restarted with a full interval on release.
    let rotating = Memo::new(move |_| state.with(|c| c.rotation_active()));
    let timer = StoredValue::new(None::<IntervalHandle>);
    let stop_timer = move || {
        if let Some(handle) = timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        stop_timer();
        if !rotating.get() {
            return;
        }
        let advance = move || drive(state, on_slide_change, Carousel::auto_advance);
        match set_interval_with_handle(advance, interval) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => warn!(error = ?e, "failed to start carousel rotation"),
        }
    });
    on_cleanup(stop_timer);

    #[cfg(target_arch = "wasm32")]
    {
        let resize = window_event_listener(ev::resize, move |_| {
            let width = viewport_width();
            drive(state, on_slide_change, |c| c.set_viewport_width(width));
        });
        on_cleanup(move || resize.remove());
    }

    let on_touch_start = move |ev: ev::TouchEvent| {
        let Some(x) = first_touch_x(&ev) else {
            return;
        };
        let width = container
            .get_untracked()
            .map(|el| f64::from(el.offset_width()));
        state.update(|c| {
            if let Some(width) = width {
                c.set_container_width(width);
            }
            c.touch_start(x);
        });
    };
    let on_touch_move = move |ev: ev::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            state.update(|c| c.touch_move(x));
        }
    };
    let on_touch_end = move |_: ev::TouchEvent| drive(state, on_slide_change, Carousel::touch_end);
    let on_touch_cancel = move |_: ev::TouchEvent| state.update(|c| c.touch_cancel());

    let track_style = move || {
        state.with(|c| {
            let transform = c.transform();
            format!(
                "display: flex; transform: {}; transition: {}; --slides-per-view: {};",
                transform.css_transform(),
                transform.css_transition(),
                c.slides_per_view(),
            )
        })
    };

    view! {
        <div
            class="carousel"
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            node_ref=container
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            <div class="carousel-viewport" style="overflow: hidden;">
                <div class="carousel-track" style=track_style>
                    {children()}
                </div>
            </div>
            <Show when=move || state.with(|c| c.arrows_visible())>
                <button
                    class="carousel-arrow carousel-prev"
                    aria-label="Previous"
                    disabled=move || !state.with(|c| c.can_go_prev())
                    on:click=move |_| drive(state, on_slide_change, Carousel::prev)
                >
                    "\u{2039}"
                </button>
                <button
                    class="carousel-arrow carousel-next"
                    aria-label="Next"
                    disabled=move || !state.with(|c| c.can_go_next())
                    on:click=move |_| drive(state, on_slide_change, Carousel::next)
                >
                    "\u{203a}"
                </button>
            </Show>
            <Show when=move || state.with(|c| c.dots_visible())>
                <div class="carousel-dots">
                    {move || {
                        (0..state.with(|c| c.dot_count()))
                            .map(|index| {
                                let active = move || state.with(|c| c.current_index() == index);
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class:active=active
                                        aria-label=format!("Go to slide {}", index + 1)
                                        on:click=move |_| {
                                            drive(state, on_slide_change, |c| c.go_to(index))
                                        }
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

/// One slide inside a [`TouchCarousel`].
#[component]
pub fn CarouselSlide(children: Children) -> impl IntoView {
    view! {
        <div
            class="carousel-slide"
            style="flex: 0 0 calc(100% / var(--slides-per-view)); min-width: 0;"
        >
            {children()}
        </div>
    }
}
