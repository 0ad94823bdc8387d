use crate::canvas::PictureCanvas;
use crate::codec::EXPORT_FILE_NAME;
use crate::config::EditorConfig;
use crate::editor::PixelEditor;
use crate::file_handler::FileHandler;
#[cfg(target_arch = "wasm32")]
use crate::file_handler::DroppedImage;
use crate::input::{CanvasGeometry, GestureEvent, GestureTracker, PointerSample};
use crate::panels::{self, Control, ControlRequest};
use crate::state::{Action, EditorState};

/// The pixel editor application.
///
/// Every change goes through [`PixelEditor::dispatch`], after which the
/// canvas and every control are synced with the new state.
pub struct PixelEditorApp {
    editor: PixelEditor,
    canvas: PictureCanvas,
    controls: Vec<Box<dyn Control>>,
    tracker: GestureTracker,
    file_handler: FileHandler,
    /// Last error worth showing to the user
    last_error: Option<String>,
}

impl PixelEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        let mut app = Self::with_config(config);
        app.sync(&cc.egui_ctx);
        app
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let editor = PixelEditor::new(config);
        let controls = panels::base_controls(editor.state(), editor.config().max_tiles);
        Self {
            editor,
            canvas: PictureCanvas::new(),
            controls,
            tracker: GestureTracker::new(),
            file_handler: FileHandler::new(),
            last_error: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        self.editor.state()
    }

    pub fn canvas(&self) -> &PictureCanvas {
        &self.canvas
    }

    pub fn controls_mut(&mut self) -> &mut [Box<dyn Control>] {
        &mut self.controls
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn scale(&self) -> f32 {
        self.editor.config().scale
    }

    /// Hands the current state to the canvas and every control
    fn sync(&mut self, ctx: &egui::Context) {
        let state = self.editor.state();
        if self.canvas.sync_state(ctx, state) {
            ctx.request_repaint();
        }
        for control in &mut self.controls {
            control.sync_state(state);
        }
    }

    pub fn dispatch(&mut self, ctx: &egui::Context, action: Action) {
        self.editor.dispatch(action);
        self.sync(ctx);
    }

    pub fn handle_request(&mut self, ctx: &egui::Context, request: ControlRequest) {
        match request {
            ControlRequest::Dispatch(action) => {
                if let Some(tiles) = action.resize {
                    self.tracker = GestureTracker::new();
                    if let Err(err) = self.editor.resize(tiles) {
                        self.report(err);
                    }
                    self.sync(ctx);
                } else {
                    self.dispatch(ctx, action);
                }
            }
            ControlRequest::Save => self.save(),
            ControlRequest::Load => self.load(ctx),
        }
    }

    /// Feeds this frame's pointer state to the active tool.
    ///
    /// A gesture can only start while the canvas is hovered.
    pub fn handle_pointer(&mut self, ctx: &egui::Context, geometry: &CanvasGeometry, hovered: bool) {
        let mut sample = PointerSample::read(ctx);
        sample.pressed &= hovered;
        let events = self.tracker.update(sample, geometry);
        if events.is_empty() {
            return;
        }
        for event in events {
            match event {
                GestureEvent::Start(pos) => self.editor.pointer_down(pos),
                GestureEvent::Move(pos) => self.editor.pointer_move(pos),
                GestureEvent::End => self.editor.pointer_up(),
            }
        }
        self.sync(ctx);
    }

    fn import(&mut self, ctx: &egui::Context, name: &str, bytes: &[u8]) {
        self.tracker = GestureTracker::new();
        match self.editor.import_image(bytes) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                log::error!("Failed to import {name}: {err}");
                self.report(err);
            }
        }
        self.sync(ctx);
    }

    fn report(&mut self, err: impl std::fmt::Display) {
        self.last_error = Some(err.to_string());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };
        let result = self
            .editor
            .export_png()
            .map_err(crate::error::EditorError::from)
            .and_then(|bytes| {
                std::fs::write(&path, bytes).map_err(|source| crate::error::EditorError::Io {
                    path: path.display().to_string(),
                    source,
                })
            });
        match result {
            Ok(()) => log::info!("Saved picture to {}", path.display()),
            Err(err) => {
                log::error!("Failed to save picture: {err}");
                self.report(err);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn save(&mut self) {
        let result = self
            .editor
            .export_png()
            .map_err(|err| err.to_string())
            .and_then(|bytes| crate::file_handler::download_bytes(&bytes, "image/png", EXPORT_FILE_NAME));
        match result {
            Ok(()) => log::info!("Offered picture as {EXPORT_FILE_NAME}"),
            Err(err) => {
                log::error!("Failed to save picture: {err}");
                self.report(err);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", &["png", "jpg", "jpeg", "gif", "bmp"])
            .pick_file()
        else {
            return;
        };
        match std::fs::read(&path) {
            Ok(bytes) => self.import(ctx, &path.display().to_string(), &bytes),
            Err(err) => {
                log::error!("Failed to read {}: {err}", path.display());
                self.report(err);
            }
        }
    }

    /// Opens the browser file picker; the chosen image is imported on a later
    /// frame once its bytes have been read
    #[cfg(target_arch = "wasm32")]
    fn load(&mut self, ctx: &egui::Context) {
        let pending = self.file_handler.pending();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(file) = rfd::AsyncFileDialog::new()
                .add_filter("Image", &["png", "jpg", "jpeg", "gif", "bmp"])
                .pick_file()
                .await
            else {
                return;
            };
            let bytes = file.read().await;
            log::info!("Read {} ({} bytes)", file.file_name(), bytes.len());
            pending.borrow_mut().push(DroppedImage {
                name: file.file_name(),
                bytes,
            });
            ctx.request_repaint();
        });
    }
}

/// Ctrl+Z (Cmd+Z on Mac). A focused text field keeps it for its own undo.
fn consume_undo_shortcut(ctx: &egui::Context) -> bool {
    let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
    !ctx.wants_keyboard_input() && ctx.input_mut(|i| i.consume_shortcut(&undo))
}

impl eframe::App for PixelEditorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync(ctx);

        if consume_undo_shortcut(ctx) {
            self.dispatch(ctx, Action::undo());
        }

        if self.file_handler.check_for_dropped_files(ctx) {
            for image in self.file_handler.take_images() {
                self.import(ctx, &image.name, &image.bytes);
            }
        }

        for request in panels::controls_panel(self, ctx) {
            self.handle_request(ctx, request);
        }
        panels::central_panel(self, ctx);

        self.file_handler.preview_files_being_dropped(ctx);
    }
}
