use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

/// An image file dropped onto the window
#[derive(Debug, Clone)]
pub struct DroppedImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Images delivered outside the frame loop, e.g. by an async file dialog
pub type PendingImages = Rc<RefCell<Vec<DroppedImage>>>;

/// Collects image files dragged and dropped onto the application, plus any
/// picked through an async dialog
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
    pending: PendingImages,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot an async task can push picked images into
    pub fn pending(&self) -> PendingImages {
        Rc::clone(&self.pending)
    }

    /// Takes any newly dropped files from the UI context.
    /// Returns true if there is something to process.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty() || !self.pending.borrow().is_empty()
    }

    /// Reads the pending files, skipping anything that is not an image
    pub fn take_images(&mut self) -> Vec<DroppedImage> {
        let mut images: Vec<DroppedImage> = std::mem::take(&mut self.dropped_files)
            .into_iter()
            .filter_map(|file| {
                let name = display_name(&file);
                if !is_image_file(&file) {
                    log::warn!("Dropped file is not a supported type: {}", name);
                    return None;
                }
                read_bytes(&file, &name).map(|bytes| DroppedImage { name, bytes })
            })
            .collect();
        images.append(&mut self.pending.borrow_mut());
        images
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Dropping image:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let name = file
        .path
        .as_ref()
        .and_then(|path| path.extension())
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .or_else(|| file.name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()));
    matches!(name.as_deref(), Some("png" | "jpg" | "jpeg" | "gif" | "bmp"))
}

fn read_bytes(file: &egui::DroppedFile, name: &str) -> Option<Vec<u8>> {
    if let Some(bytes) = &file.bytes {
        log::info!("Processing image from memory: {} ({} bytes)", name, bytes.len());
        return Some(bytes.to_vec());
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        log::info!("Processing image from path: {}", path.display());
        return match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                log::error!("Failed to read image file: {}: {}", path.display(), err);
                None
            }
        };
    }

    log::warn!("Dropped file has no accessible data: {}", name);
    None
}

/// Offers `bytes` to the browser as a download named `file_name`
#[cfg(target_arch = "wasm32")]
pub fn download_bytes(bytes: &[u8], mime: &str, file_name: &str) -> Result<(), String> {
    use eframe::wasm_bindgen::JsCast as _;

    let describe = |err: eframe::wasm_bindgen::JsValue| format!("{err:?}");

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(describe)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(describe)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no document to attach the download to".to_owned())?;
    let anchor = document
        .create_element("a")
        .map_err(describe)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(describe)
}
