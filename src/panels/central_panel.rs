use crate::PixelEditorApp;

pub fn central_panel(app: &mut PixelEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let state = app.state();
        let status = format!(
            "{}x{} px · tool: {} · color: {} · undo steps: {}",
            state.picture.width(),
            state.picture.height(),
            state.tool,
            state.color,
            state.done.len()
        );
        ui.label(status);

        egui::ScrollArea::both().show(ui, |ui| {
            let origin = ui.cursor().min;
            let Some(geometry) = app.canvas().geometry(origin, app.scale()) else {
                return;
            };
            let (response, painter) = ui.allocate_painter(geometry.rect().size(), egui::Sense::drag());

            // Scrolling may have moved the canvas since the cursor was read
            let geometry = crate::input::CanvasGeometry {
                origin: response.rect.min,
                ..geometry
            };

            app.handle_pointer(ctx, &geometry, response.hovered());
            app.canvas().paint(&painter, &geometry);
        });
    });
}
