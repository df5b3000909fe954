use yew::prelude::*;

use crate::content::Testimonial;
use crate::drivers::carousel::{AutoRotation, Direction, Transition};
use crate::drivers::schedule::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Testimonial>,
    pub interval_ms: u32,
}

const START: Transition = Transition {
    from: 0,
    to: 0,
    direction: Direction::Forward,
};

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let shown = use_state_eq(|| START);
    let rotation = use_mut_ref(|| None::<AutoRotation>);

    {
        let shown = shown.clone();
        let rotation = rotation.clone();
        use_effect_with_deps(
            move |(len, interval_ms)| {
                shown.set(START);
                let started = AutoRotation::start(&BrowserScheduler, *len, *interval_ms, move |t| {
                    shown.set(t)
                });
                *rotation.borrow_mut() = Some(started);
                move || {
                    rotation.borrow_mut().take();
                }
            },
            (props.items.len(), props.interval_ms),
        );
    }

    let control = |step: fn(&AutoRotation)| {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(rotation) = rotation.borrow().as_ref() {
                step(rotation);
            }
        })
    };
    let on_previous = control(AutoRotation::previous);
    let on_next = control(AutoRotation::next);

    let len = props.items.len();
    let cursor = shown.to.min(len.saturating_sub(1));
    let Some(item) = props.items.get(cursor) else {
        return html! {};
    };

    let slide_class = match shown.direction {
        Direction::Forward => "slide-forward",
        Direction::Backward => "slide-backward",
    };

    let dots = (0..len)
        .map(|index| {
            let onclick = {
                let rotation = rotation.clone();
                Callback::from(move |_: MouseEvent| {
                    if let Some(rotation) = rotation.borrow().as_ref() {
                        if let Err(e) = rotation.select(index) {
                            log::warn!("testimonial dot: {e}");
                        }
                    }
                })
            };
            html! {
                <button
                    key={index.to_string()}
                    class={classes!("carousel-dot", (index == cursor).then_some("active"))}
                    aria-label={format!("Show testimonial {}", index + 1)}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section id="testimonials" class="section section-muted">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &props.heading }</h2>
                    <p>{ &props.intro }</p>
                </div>
                <div class="carousel">
                    <button class="carousel-arrow" onclick={on_previous} aria-label="Previous testimonial">
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <div key={cursor.to_string()} class={classes!("testimonial-card", slide_class)}>
                        <div class="stars">
                            { for (0..item.rating).map(|_| html! { <i class="fas fa-star"></i> }) }
                        </div>
                        <p class="testimonial-text">{ format!("\u{201c}{}\u{201d}", item.text) }</p>
                        <div class="testimonial-name">{ &item.name }</div>
                        <div class="testimonial-role">{ &item.role }</div>
                    </div>
                    <button class="carousel-arrow" onclick={on_next} aria-label="Next testimonial">
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>
                <div class="carousel-dots">{ dots }</div>
            </div>
        </section>
    }
}
