//! Download links for the generated reports.

use extraction_client::DownloadLink;
use leptos::*;

#[component]
pub fn ResultsPanel(links: ReadSignal<Option<Vec<DownloadLink>>>) -> impl IntoView {
    view! {
        <Show when=move || links.get().is_some() fallback=|| view! { }>
            <div class="results-area" id="resultsArea">
                <h2>"Reports"</h2>
                <div class="download-links" id="downloadLinks">
                    <For
                        each=move || links.get().unwrap_or_default().into_iter().enumerate()
                        key=|(_, link)| link.href.clone()
                        children=move |(_, link)| {
                            view! {
                                <a class="download-link" href=link.href target="_blank">
                                    {link.kind.label()}
                                </a>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
