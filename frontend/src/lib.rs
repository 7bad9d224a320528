//! WTOP - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for converting office documents (doc, docx, odt)
//! to PDF through a remote conversion API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HeaderBar (brand bar, static)                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPanel                                                 │
//! │  ├── drop zone (idle prompt / spinner / error banner)        │
//! │  └── result list with per-file Download                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - common types (ConvertedFile, UploadState, AppError)
//! - [`components`] - UI components (HeaderBar, UploadPanel)
//! - [`services`] - backend communication (convert, download)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{AppError, AppResult, ConvertedFile, UploadState};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 WTOP - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}

#[component]
pub fn App() -> impl IntoView {
    view! {
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
    view! {
        <HeaderBar/>

        <div class="container">
            <UploadPanel/>
        </div>
    }
}
