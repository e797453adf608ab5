//! Drag-and-drop and file-transfer executors.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;
use webgrip_protocols::{
    ActionError, ActionResult, DragDropParams, EnhancedDragDropParams, SimulateFileUploadParams,
    UploadFileParams,
};

use crate::dom::{EventDetail, StagedFile};
use crate::session::{PageSession, colored_highlight};

use super::resolver;

/// MIME type inferred from a filename extension; unknown extensions fall
/// back to the generic binary type.
pub fn mime_from_file_name(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().unwrap_or("").to_lowercase();
    match extension.as_str() {
        "txt" => "text/plain",
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "zip" => "application/zip",
        "rar" => "application/x-rar-compressed",
        _ => "application/octet-stream",
    }
}

/// Build staged files from raw payloads: data URLs are base64-decoded,
/// anything else is taken as plain text.
fn stage_files(
    file_data: &[String],
    file_names: Option<&[String]>,
) -> Result<Vec<StagedFile>, ActionError> {
    file_data
        .iter()
        .enumerate()
        .map(|(index, data)| {
            let name = file_names
                .and_then(|names| names.get(index))
                .cloned()
                .unwrap_or_else(|| format!("file_{}.txt", index + 1));
            let mime = mime_from_file_name(&name).to_string();
            let bytes = if let Some(rest) = data.strip_prefix("data:") {
                let encoded = rest.split_once(',').map(|(_, b)| b).unwrap_or(rest);
                BASE64.decode(encoded).map_err(|e| {
                    ActionError::Validation(format!("Invalid file payload for {name}: {e}"))
                })?
            } else {
                data.as_bytes().to_vec()
            };
            Ok(StagedFile { name, mime, bytes })
        })
        .collect()
}

/// Simple drag and drop: dragstart on the source, then a drop on the target.
pub async fn drag_drop(
    session: &PageSession,
    params: DragDropParams,
) -> Result<ActionResult, ActionError> {
    let resolved = session.with_doc(|doc| {
        let r = resolver(session);
        (
            r.resolve_text(doc, &params.source, None),
            r.resolve_text(doc, &params.target, None),
        )
    });
    let (Some(source), Some(target)) = resolved else {
        return Err(ActionError::NotFound(format!(
            "{} or {}",
            params.source, params.target
        )));
    };

    session.with_doc_mut(|doc| doc.dispatch(Some(source), "dragstart", EventDetail::None));
    tokio::time::sleep(session.policy().drag_gap).await;
    session.with_doc_mut(|doc| doc.dispatch(Some(target), "drop", EventDetail::None));

    Ok(ActionResult::success(format!(
        "Dragged {} to {}",
        params.source, params.target
    )))
}

/// Full drag sequence with file payload and highlight feedback.
///
/// Dispatches dragover before drop because many real drop handlers only
/// accept a drop after dragover has fired, and dragend so the source can
/// clean up.
pub async fn enhanced_drag_drop(
    session: &PageSession,
    params: EnhancedDragDropParams,
) -> Result<ActionResult, ActionError> {
    let resolved = session.with_doc(|doc| {
        let r = resolver(session);
        (
            r.resolve_text(doc, &params.source, None),
            r.resolve_text(doc, &params.target, None),
        )
    });
    let (Some(source), Some(target)) = resolved else {
        return Err(ActionError::NotFound(format!(
            "{} or {}",
            params.source, params.target
        )));
    };

    let duration = std::time::Duration::from_millis(params.duration);
    if params.visual_feedback {
        session.highlight(source, &colored_highlight("blue"), duration);
        session.highlight(target, &colored_highlight("green"), duration);
    }

    let file_count = params.files.as_ref().map_or(0, Vec::len);
    let payload = || {
        if file_count > 0 {
            EventDetail::Files { count: file_count }
        } else {
            EventDetail::None
        }
    };

    session.with_doc_mut(|doc| {
        doc.scroll_into_view(source);
        doc.scroll_into_view(target);
    });
    tokio::time::sleep(session.policy().drag_start_settle).await;

    session.with_doc_mut(|doc| doc.dispatch(Some(source), "dragstart", payload()));
    tokio::time::sleep(session.policy().drag_enter_gap).await;
    session.with_doc_mut(|doc| doc.dispatch(Some(target), "dragover", payload()));
    tokio::time::sleep(session.policy().drag_over_gap).await;
    session.with_doc_mut(|doc| doc.dispatch(Some(target), "drop", payload()));
    tokio::time::sleep(session.policy().drag_drop_gap).await;
    session.with_doc_mut(|doc| doc.dispatch(Some(source), "dragend", EventDetail::None));

    Ok(ActionResult::success(format!(
        "Enhanced drag and drop: {} -> {}",
        params.source, params.target
    ))
    .with_field("files_transferred", json!(file_count)))
}

/// Attach constructed files to a file input and fire change.
pub async fn upload_file(
    session: &PageSession,
    params: UploadFileParams,
) -> Result<ActionResult, ActionError> {
    let target = session.with_doc(|doc| match &params.selector {
        Some(selector) => doc.query_selector(selector),
        None => doc.query_selector("input[type=\"file\"]"),
    });
    let Some(id) = target else {
        return Err(ActionError::Validation(
            "File input element not found".to_string(),
        ));
    };

    let (Some(file_data), file_names) = (&params.file_data, &params.file_names) else {
        return Err(ActionError::Validation("No file data provided".to_string()));
    };
    let files = stage_files(file_data, file_names.as_deref())?;
    let count = files.len();
    let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();

    session.with_doc_mut(|doc| {
        doc.attach_files(id, files);
        doc.dispatch(Some(id), "change", EventDetail::Files { count });
    });

    let destination = params.selector.as_deref().unwrap_or("file input");
    Ok(
        ActionResult::success(format!("Uploaded {count} files to {destination}"))
            .with_field("files_uploaded", json!(count))
            .with_field("file_names", json!(names)),
    )
}

/// Simulate dropping files onto a drop zone: dragover, then drop carrying
/// the constructed file list.
pub async fn simulate_file_upload(
    session: &PageSession,
    params: SimulateFileUploadParams,
) -> Result<ActionResult, ActionError> {
    let target = session.with_doc(|doc| match &params.target_selector {
        Some(selector) => doc.query_selector(selector),
        None => doc.query_selector("[class*=\"drop\"], [class*=\"upload\"], [class*=\"drag\"]"),
    });
    let Some(id) = target else {
        return Err(ActionError::Validation("Drop target not found".to_string()));
    };

    let files = match (&params.file_data, &params.file_names) {
        (Some(data), names) => stage_files(data, names.as_deref())?,
        (None, _) => Vec::new(),
    };
    let count = files.len();

    session.highlight(
        id,
        &colored_highlight("green"),
        session.policy().upload_highlight,
    );
    session.with_doc_mut(|doc| doc.scroll_into_view(id));
    tokio::time::sleep(session.policy().settle).await;

    session.with_doc_mut(|doc| doc.dispatch(Some(id), "dragover", EventDetail::Files { count }));
    tokio::time::sleep(session.policy().sim_drop_gap).await;
    session.with_doc_mut(|doc| {
        doc.attach_files(id, files);
        doc.dispatch(Some(id), "drop", EventDetail::Files { count });
    });

    let target_name = params.target_selector.as_deref().unwrap_or("auto-detected");
    Ok(
        ActionResult::success(format!("Simulated file upload: {count} files"))
            .with_field("files_uploaded", json!(count))
            .with_field("target", json!(target_name)),
    )
}

#[cfg(test)]
#[path = "transfer_tests.rs"]
mod tests;
