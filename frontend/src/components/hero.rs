//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"PDF Report Extraction"</h1>
            <p class="subtitle">
                "Select the PDF files and the percentage spreadsheet, then start the extraction. "
                "The generated reports can be downloaded when the run finishes."
            </p>
        </div>
    }
}
