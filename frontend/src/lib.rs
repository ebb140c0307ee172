//! PDF Report Extraction - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads PDF files (plus an optional
//! percentage spreadsheet) to the extraction service, follows its progress
//! stream and lists the generated reports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadForm (pickers, skip option, trigger)             │
//! │  ├── ProgressPanel (while a run is in flight)               │
//! │  ├── ResultsPanel (download links)                          │
//! │  └── MessagesPanel (append-only log)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The run itself is driven by [`extraction_client::ExtractionController`];
//! this crate only supplies its browser bindings.
//!
//! # Modules
//!
//! - [`types`] - Timestamped log entries
//! - [`components`] - UI components
//! - [`services`] - Upload, progress stream and signal bindings

use std::rc::Rc;

use extraction_client::{DownloadLink, Endpoints, ExtractionController, ProgressDisplay};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::LogEntry;
pub use components::*;
pub use services::*;

/// The controller wired to the browser.
pub type FormController = ExtractionController<HttpExtractionApi, EventSourceProgress, SignalView>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Sets up logging and mounts the application.
#[wasm_bindgen]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 PDF Report Extraction - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="PDF Report Extraction"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());
    let (processing, set_processing) = create_signal(false);
    let (progress, set_progress) = create_signal(ProgressDisplay::preparing());
    let (links, set_links) = create_signal(None::<Vec<DownloadLink>>);

    let view_bindings = SignalView {
        set_logs,
        set_processing,
        set_progress,
        set_links,
    };
    let controller: Rc<FormController> = Rc::new(ExtractionController::new(
        HttpExtractionApi,
        EventSourceProgress,
        view_bindings,
        Endpoints::with_base_url(BACKEND_URL),
    ));
    controller.ready();

    view! {
        <div class="container">
            <Hero/>
            <UploadForm controller=controller processing=processing/>
            <ProgressPanel processing=processing progress=progress/>
            <ResultsPanel links=links/>
            <MessagesPanel logs=logs/>
        </div>

        <Footer/>
    }
}
