//! Szenen-Darstellung: Pole, Bodenplatte und Disks als gefüllte Rechtecke.

use crate::app::AppState;
use crate::core::layout;

/// Rendert die Szene in den CentralPanel-Painter.
pub fn render_scene(ctx: &egui::Context, state: &AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let origin = response.rect.min.to_vec2();

        // Bodenplatte
        let base_left = layout::POLE_MID_X[0] - layout::BASE_OVERHANG;
        let base_width = layout::POLE_MID_X[2] - layout::POLE_MID_X[0] + 2.0 * layout::BASE_OVERHANG;
        painter.rect_filled(
            egui::Rect::from_min_size(
                egui::pos2(base_left, layout::POLE_BOTTOM_Y) + origin,
                egui::vec2(base_width, layout::BASE_HEIGHT),
            ),
            egui::CornerRadius::same(2),
            color32(state.options.base_color),
        );

        // Pole
        for mid_x in layout::POLE_MID_X {
            painter.rect_filled(
                egui::Rect::from_min_size(
                    egui::pos2(mid_x - layout::POLE_WIDTH / 2.0, layout::POLE_TOP_Y) + origin,
                    egui::vec2(layout::POLE_WIDTH, layout::POLE_BOTTOM_Y - layout::POLE_TOP_Y),
                ),
                egui::CornerRadius::same(2),
                color32(state.options.pole_color),
            );
        }

        // Disks, abwechselnd eingefärbt
        for (id, disk) in state.puzzle.disks.iter().enumerate() {
            let color = if id % 2 == 0 {
                state.options.disk_color
            } else {
                state.options.disk_color_alt
            };
            painter.rect_filled(
                egui::Rect::from_min_size(
                    egui::pos2(disk.pos.x, disk.pos.y) + origin,
                    egui::vec2(disk.width, layout::DISK_HEIGHT),
                ),
                egui::CornerRadius::same(4),
                color32(color),
            );
        }
    });
}

/// Konvertiert eine RGBA-Farbe aus den Optionen in `egui::Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
