use web_sys::js_sys;
use yew::prelude::*;

const PARTICLES: usize = 20;
const LINES: usize = 8;

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    drift_x: f64,
    drift_y: f64,
    duration: f64,
}

#[derive(Clone, PartialEq)]
struct Line {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

fn percent() -> f64 {
    js_sys::Math::random() * 100.0
}

/// Floating dots and faint network lines behind the hero. Positions are
/// picked once per mount.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let particles = use_memo(
        |_| {
            (0..PARTICLES)
                .map(|_| Particle {
                    left: percent(),
                    top: percent(),
                    drift_x: percent() - 50.0,
                    drift_y: percent() - 50.0,
                    duration: js_sys::Math::random() * 20.0 + 10.0,
                })
                .collect::<Vec<_>>()
        },
        (),
    );
    let lines = use_memo(
        |_| {
            (0..LINES)
                .map(|_| Line {
                    x1: percent(),
                    y1: percent(),
                    x2: percent(),
                    y2: percent(),
                })
                .collect::<Vec<_>>()
        },
        (),
    );

    html! {
        <div class="animated-background" aria-hidden="true">
            { for particles.iter().map(|p| html! {
                <div
                    class="particle"
                    style={format!(
                        "left: {:.1}%; top: {:.1}%; --drift-x: {:.1}vw; --drift-y: {:.1}vh; animation-duration: {:.1}s;",
                        p.left, p.top, p.drift_x, p.drift_y, p.duration
                    )}
                />
            }) }
            <svg class="network-lines">
                { for lines.iter().enumerate().map(|(i, l)| html! {
                    <line
                        x1={format!("{:.1}%", l.x1)}
                        y1={format!("{:.1}%", l.y1)}
                        x2={format!("{:.1}%", l.x2)}
                        y2={format!("{:.1}%", l.y2)}
                        stroke="white"
                        stroke-width="1"
                        style={format!("animation-delay: {:.1}s;", i as f64 * 0.2)}
                    />
                }) }
            </svg>
        </div>
    }
}
