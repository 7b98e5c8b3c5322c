//! Document upload panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uploads go to the same-origin `/api/upload` proxy, which forwards them to
//! the ingestion backend. The browser `File` handle lives in a local stored
//! value; `UploadState` only tracks its metadata and the lifecycle flags.

use leptos::prelude::*;

use crate::state::upload::UploadState;
#[cfg(feature = "hydrate")]
use crate::state::upload::SelectedFile;

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.txt,.docx,.doc";

/// File picker, upload button, and last-outcome status line.
#[component]
pub fn FileUpload() -> impl IntoView {
    let upload = RwSignal::new(UploadState::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(feature = "hydrate")]
    let picked = StoredValue::new_local(None::<web_sys::File>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|list| list.get(0));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let meta = file
                .as_ref()
                .map(|f| SelectedFile { name: f.name(), size: f.size() as u64 });
            picked.set_value(file);
            upload.update(|u| u.select_file(meta));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_upload = move |_| {
        let Some(selected) = upload.try_update(UploadState::begin_upload).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = picked.get_value() else {
                upload.update(|u| u.finish_upload(Err(crate::net::api::ApiError::Transport("file is no longer available".to_owned()))));
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_document(&file).await;
                match &result {
                    Ok(resp) => log::info!("uploaded {} as {}", selected.name, resp.filename),
                    Err(e) => log::warn!("upload of {} failed: {e}", selected.name),
                }
                let succeeded = result.is_ok();
                upload.update(|u| u.finish_upload(result));
                if succeeded {
                    picked.set_value(None);
                    if let Some(el) = input_ref.get_untracked() {
                        el.set_value("");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (selected, input_ref);
        }
    };

    view! {
        <div class="file-upload">
            <input
                class="file-upload__input"
                type="file"
                accept=ACCEPTED_EXTENSIONS
                node_ref=input_ref
                on:change=on_change
            />
            <button
                class="btn btn--primary file-upload__button"
                on:click=on_upload
                disabled=move || !upload.with(UploadState::can_upload)
            >
                {move || if upload.with(|u| u.uploading) { "Uploading..." } else { "Upload" }}
            </button>
            {move || {
                upload
                    .with(|u| u.status.clone())
                    .map(|status| {
                        view! {
                            <p
                                class="file-upload__status"
                                class:file-upload__status--success=status.is_success()
                                class:file-upload__status--error=!status.is_success()
                            >
                                {status.text().to_owned()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
