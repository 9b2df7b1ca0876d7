pub const HEADING: egui::Color32 = egui::Color32::from_rgb(16, 55, 92);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
pub const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
pub const ITEM_FILL: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

pub const CONTENT_MAX_WIDTH: f32 = 560.0;

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = egui::Color32::from_rgb(249, 250, 251);
    visuals.selection.bg_fill = ACCENT;
    ctx.set_visuals(visuals);
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(220)))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(20))
}

pub fn item_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(ITEM_FILL)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
}

pub fn primary_button(label: &str) -> egui::Button<'_> {
    egui::Button::new(
        egui::RichText::new(label)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(ACCENT)
    .corner_radius(8.0)
    .min_size(egui::vec2(140.0, 36.0))
}
