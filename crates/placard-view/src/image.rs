//! Image element view over the file-picker/decoder collaborator.

use placard_core::{CanvasController, DecodedImage, ElementId, UploadError};

/// File extensions the upload input accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// External file-picker + decoder collaborator. One-shot and without
/// cancellation: once the user picks a file, the host resolves it into a
/// data URI plus natural pixel dimensions (or a failure) exactly once.
pub trait ImagePicker {
    /// Poll the pipeline. `None` while nothing has resolved yet.
    fn poll(&mut self) -> Option<Result<DecodedImage, UploadError>>;
}

/// Image element view: shows the upload placeholder until content arrives,
/// then hands the data URI to the host to paint.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    pub content: &'a str,
}

impl ImageView<'_> {
    /// Still waiting for an upload; the placeholder is shown.
    pub fn is_pending(&self) -> bool {
        self.content.is_empty()
    }

    /// The stored data URI to paint, once an upload landed.
    pub fn data_uri(&self) -> Option<&str> {
        if self.is_pending() {
            None
        } else {
            Some(self.content)
        }
    }

    /// Drive the upload flow for a pending image. A resolved decode is
    /// committed (auto-fit included); a failure leaves the element untouched
    /// in its pending state.
    pub fn show(
        &self,
        controller: &mut CanvasController,
        id: &ElementId,
        picker: &mut dyn ImagePicker,
    ) {
        if !self.is_pending() {
            return;
        }
        match picker.poll() {
            Some(Ok(image)) => controller.apply_upload(id, image),
            Some(Err(error)) => controller.upload_failed(id, &error),
            None => {}
        }
    }
}
