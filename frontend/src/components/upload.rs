//! Document upload panel with drag & drop support.
//!
//! Owns the whole upload → convert → list → download cycle: file
//! selection, the upload state machine, the converted-file list, and the
//! per-result download action.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, DataTransfer, DragEvent, Event, File, HtmlInputElement};

use crate::config::{is_accepted_file, is_accepted_mime, ACCEPT_ATTR, BACKEND_URL};
use crate::services::{convert_document, fetch_converted, pdf_filename, save_as};
use crate::types::{ConvertedFile, UploadState};

/// Visual feedback while a drag interaction is over the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
enum DragStatus {
    None,
    Accept,
    Reject,
}

/// Whether the dragged payload would be accepted on drop.
///
/// Only MIME types are visible during drag-over; filenames are not.
fn drag_payload_accepted(dt: &DataTransfer) -> bool {
    let items = dt.items();
    let mut saw_file = false;
    for i in 0..items.length() {
        if let Some(item) = items.get(i) {
            if item.kind() == "file" {
                saw_file = true;
                if !is_accepted_mime(&item.type_()) {
                    return false;
                }
            }
        }
    }
    saw_file
}

#[component]
pub fn UploadPanel() -> impl IntoView {
    let (state, set_state) = create_signal(UploadState::Idle);
    let (converted, set_converted) = create_signal(Vec::<ConvertedFile>::new());
    let (drag, set_drag) = create_signal(DragStatus::None);
    let (download_error, set_download_error) = create_signal(None::<String>);

    // Requests are scoped to the panel: tearing it down aborts anything
    // still in flight.
    let controller = AbortController::new().ok();
    let abort_signal = store_value(controller.as_ref().map(|c| c.signal()));
    on_cleanup(move || {
        if let Some(controller) = controller {
            controller.abort();
        }
    });

    let submit = move |file: File| {
        if state.get_untracked().is_uploading() {
            log::warn!("upload already in flight, ignoring {}", file.name());
            return;
        }
        if !is_accepted_file(&file.name(), &file.type_()) {
            log::warn!("rejected {}: unsupported file type", file.name());
            return;
        }

        // Entering Uploading also clears any previous error.
        set_state.set(UploadState::Uploading);
        let name = file.name();
        spawn_local(async move {
            log::info!("📤 converting {}", name);
            let signal = abort_signal.get_value();
            match convert_document(file, BACKEND_URL, signal.as_ref()).await {
                Ok(result) => {
                    log::info!("✅ converted {} -> {}", result.original_name, result.name);
                    set_converted.update(|list| list.push(result));
                    set_state.set(UploadState::Idle);
                }
                Err(e) => {
                    log::error!("❌ conversion failed: {}", e);
                    set_state.set(UploadState::Error(e.message().to_string()));
                }
            }
        });
    };

    let on_download = move |file: ConvertedFile| {
        spawn_local(async move {
            let signal = abort_signal.get_value();
            let saved = fetch_converted(BACKEND_URL, &file.name, signal.as_ref())
                .await
                .and_then(|bytes| save_as(&bytes, &pdf_filename(&file.original_name)));
            match saved {
                Ok(()) => log::info!("💾 saved {}", pdf_filename(&file.original_name)),
                Err(e) => {
                    log::error!("❌ download failed: {}", e);
                    set_download_error.set(Some(e.message().to_string()));
                }
            }
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            submit(file);
        }
        // Allow re-selecting the same file.
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        let accepted = ev
            .data_transfer()
            .map(|dt| drag_payload_accepted(&dt))
            .unwrap_or(false);
        set_drag.set(if accepted {
            DragStatus::Accept
        } else {
            DragStatus::Reject
        });
    };

    let on_drag_leave = move |_: DragEvent| {
        set_drag.set(DragStatus::None);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag.set(DragStatus::None);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            submit(file);
        }
    };

    // Clicking the zone opens the picker, but only from the idle prompt.
    let trigger_file_input = move |_| {
        if state.get_untracked() != UploadState::Idle {
            return;
        }
        if let Some(input) = window()
            .document()
            .and_then(|document| document.get_element_by_id("fileInput"))
        {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    view! {
        <div
            class="upload-panel"
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            // full-screen drop feedback
            {move || match drag.get() {
                DragStatus::None => ().into_view(),
                DragStatus::Accept => view! {
                    <div class="drag-overlay accept"><p>"Just drop it!"</p></div>
                }.into_view(),
                DragStatus::Reject => view! {
                    <div class="drag-overlay reject"><p>"Invalid file type!"</p></div>
                }.into_view(),
            }}

            <h1>"Upload Document"</h1>
            <p class="subtitle">"Convert doc, docx, odt to pdf."</p>

            <div class="dropzone" on:click=trigger_file_input>
                {move || match state.get() {
                    UploadState::Uploading => view! {
                        <div class="upload-progress">
                            <div class="spinner"></div>
                            <p>"uploading..."</p>
                        </div>
                    }.into_view(),
                    UploadState::Error(message) => view! {
                        <div class="upload-error">
                            <button
                                class="close-button"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    set_state.update(|s| s.dismiss());
                                }
                            >
                                "close (x)"
                            </button>
                            <p class="error-text">{message}</p>
                        </div>
                    }.into_view(),
                    UploadState::Idle => view! {
                        <input
                            type="file"
                            id="fileInput"
                            accept=ACCEPT_ATTR
                            style="display:none"
                            on:change=on_file_change
                        />
                        <p class="prompt">"Drag and drop files here, or click to browse"</p>
                    }.into_view(),
                }}
            </div>

            <Show
                when=move || download_error.get().is_some()
                fallback=|| view! {}
            >
                <div class="download-error">
                    <p>{move || download_error.get().unwrap_or_default()}</p>
                    <button
                        class="close-button"
                        on:click=move |_| set_download_error.set(None)
                    >
                        "close (x)"
                    </button>
                </div>
            </Show>

            <Show
                when=move || !converted.get().is_empty()
                fallback=|| view! {}
            >
                <div class="separator">
                    <div class="line"></div>
                    <p>"Result"</p>
                    <div class="line"></div>
                </div>
                <div class="results">
                    <For
                        each=move || converted.get().into_iter().enumerate()
                        key=|(idx, _)| *idx
                        children=move |(_, file)| {
                            let label = file.original_name.clone();
                            view! {
                                <div class="result-row">
                                    <div class="file-icon"></div>
                                    <p>{label}</p>
                                    <button
                                        class="download-button"
                                        on:click=move |_| on_download(file.clone())
                                    >
                                        "Download"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
