//! Notification presenter: renders the current message and a close control.
//! Timing and overwrite policy live in the controller.

use crate::controller::notification::{Notification, NotificationKind};
use crate::ui::theme;

pub fn notification_fill(kind: NotificationKind) -> egui::Color32 {
    match kind {
        NotificationKind::Success => theme::SUCCESS_FILL,
        NotificationKind::Error => theme::ERROR_FILL,
    }
}

/// Draws `notification` in the bottom-right corner. Returns whether close was pressed.
pub fn show_notification(ctx: &egui::Context, notification: &Notification) -> bool {
    let mut close_clicked = false;
    egui::Area::new(egui::Id::new("dashboard_notification"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(notification_fill(notification.kind))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&notification.message)
                                .color(egui::Color32::WHITE),
                        );
                        ui.add_space(12.0);
                        let close = egui::Button::new(
                            egui::RichText::new("\u{00d7}")
                                .strong()
                                .size(18.0)
                                .color(egui::Color32::WHITE),
                        )
                        .frame(false);
                        if ui.add(close).clicked() {
                            close_clicked = true;
                        }
                    });
                });
        });
    close_clicked
}
