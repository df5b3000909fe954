use yew::prelude::*;

use crate::drivers::progress::scroll_progress;
use crate::utils::dom::{self, WindowListener};

/// Thin bar across the top of the page that fills as the visitor scrolls.
#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(metrics) = dom::scroll_metrics() {
                        progress.set(scroll_progress(&metrics));
                    }
                };
                // Initial call
                update();
                let listener = WindowListener::new(&["scroll", "resize"], update)
                    .map_err(|e| log::warn!("scroll progress disabled: {e}"))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <div class="scroll-progress">
            <div
                class="scroll-progress-fill"
                style={format!("transform: scaleX({:.4});", *progress)}
            />
        </div>
    }
}
