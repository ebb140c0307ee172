//! Progress bar shown while a run is in flight.

use extraction_client::ProgressDisplay;
use leptos::*;

#[component]
pub fn ProgressPanel(
    processing: ReadSignal<bool>,
    progress: ReadSignal<ProgressDisplay>,
) -> impl IntoView {
    view! {
        <Show when=move || processing.get() fallback=|| view! { }>
            <div class="progress-section show" id="progressContainer">
                <div class="progress-info">
                    <span id="progressText">{move || progress.get().text}</span>
                    <span id="progressPercentage">{move || progress.get().percentage_label()}</span>
                </div>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        id="progressFill"
                        style=move || format!("width: {};", progress.get().fill_width)
                    ></div>
                </div>
            </div>
        </Show>
    }
}
