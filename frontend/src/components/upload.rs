//! Extraction form: PDF picker, spreadsheet picker, skip option, trigger.
//!
//! The selection is read from the inputs when the trigger is clicked, never
//! cached.

use std::rc::Rc;

use extraction_client::{Selection, SpreadsheetInput, PROCESSING_LABEL, TRIGGER_LABEL};
use leptos::*;
use web_sys::{File, HtmlInputElement};

use crate::{FormController, ACCEPT_PDF, ACCEPT_SPREADSHEET, SHOW_SKIP_OPTION, SKIP_DEFAULT_CHECKED};

fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}

#[component]
pub fn UploadForm(
    controller: Rc<FormController>,
    processing: ReadSignal<bool>,
) -> impl IntoView {
    let pdf_input = create_node_ref::<leptos::html::Input>();
    let excel_input = create_node_ref::<leptos::html::Input>();
    let (skip, set_skip) = create_signal(SHOW_SKIP_OPTION && SKIP_DEFAULT_CHECKED);

    let spreadsheet = move || SpreadsheetInput::for_skip(skip.get());

    let on_extract = move |_| {
        let pdf_files = pdf_input.get_untracked().map(|el| selected_files(&el)).unwrap_or_default();
        let excel_file = excel_input
            .get_untracked()
            .and_then(|el| selected_files(&el).into_iter().next());
        let selection = Selection::new(pdf_files, excel_file, skip.get_untracked());

        let controller = Rc::clone(&controller);
        spawn_local(async move {
            let outcome = controller.submit(selection).await;
            log::debug!("Run finished: {:?}", outcome);
        });
    };

    view! {
        <div class="upload-section" id="uploadForm">
            <div class="file-field">
                <label for="pdfFiles">"PDF files"</label>
                <input
                    type="file"
                    id="pdfFiles"
                    accept=ACCEPT_PDF
                    multiple=true
                    node_ref=pdf_input
                />
            </div>

            <div class=move || match spreadsheet().css_class {
                Some(class) => format!("file-field {}", class),
                None => "file-field".to_string(),
            }>
                <label for="excelFile">"Percentage spreadsheet"</label>
                <input
                    type="file"
                    id="excelFile"
                    accept=ACCEPT_SPREADSHEET
                    disabled=move || spreadsheet().disabled
                    node_ref=excel_input
                />
            </div>

            <Show when=move || SHOW_SKIP_OPTION fallback=|| view! { }>
                <label class="skip-option">
                    <input
                        type="checkbox"
                        id="skipPercentuais"
                        prop:checked=move || skip.get()
                        on:change=move |ev| set_skip.set(event_target_checked(&ev))
                    />
                    " Extract without percentage file"
                </label>
            </Show>

            <button
                class="upload-button"
                id="extractButton"
                disabled=move || processing.get()
                on:click=on_extract
            >
                {move || if processing.get() { PROCESSING_LABEL } else { TRIGGER_LABEL }}
            </button>
        </div>
    }
}
