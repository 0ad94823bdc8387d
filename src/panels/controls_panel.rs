use crate::PixelEditorApp;
use crate::panels::ControlRequest;

/// Shows every control below the canvas and collects what they ask for
pub fn controls_panel(app: &mut PixelEditorApp, ctx: &egui::Context) -> Vec<ControlRequest> {
    let mut requests = Vec::new();
    let error = app.last_error().map(str::to_owned);

    egui::TopBottomPanel::bottom("controls_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for control in app.controls_mut() {
                    if let Some(request) = control.ui(ui) {
                        requests.push(request);
                    }
                    ui.separator();
                }
            });

            if let Some(error) = error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }
            ui.add_space(4.0);
        });

    requests
}
