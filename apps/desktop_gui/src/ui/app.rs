use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use shared::domain::DraftField;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::DashboardState,
};
use crate::ui::{
    notification::show_notification,
    theme,
    view_model::{
        comments_view, post_json, user_picker, CommentsView, UserPicker, NO_COMMENTS_PLACEHOLDER,
        SELECT_USER_DEFAULT,
    },
};

const IDLE_REPAINT: Duration = Duration::from_millis(100);
const POSTS_MAX_HEIGHT: f32 = 384.0;

pub struct DashboardApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: DashboardState,
    theme_applied: bool,
}

impl DashboardApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        notification_ttl: Duration,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: DashboardState::new(notification_ttl),
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event, Instant::now());
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state, Instant::now());
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new("API Chaining Dashboard")
                .size(40.0)
                .strong()
                .color(theme::HEADING),
        );
        ui.label(
            egui::RichText::new("Fetch users, create posts, and see comments.")
                .color(theme::MUTED_TEXT),
        );
        ui.add_space(16.0);

        if ui.add(theme::primary_button("Fetch Users")).clicked() {
            let cmd = self.state.fetch_users();
            self.dispatch(cmd);
        }
        ui.add_space(16.0);
    }

    fn show_user_picker(&mut self, ui: &mut egui::Ui) {
        match user_picker(self.state.users()) {
            UserPicker::Placeholder(text) => {
                ui.label(egui::RichText::new(text).color(theme::MUTED_TEXT));
            }
            UserPicker::Options(options) => {
                ui.label(
                    egui::RichText::new("Select User:")
                        .size(22.0)
                        .strong()
                        .color(theme::HEADING),
                );
                let current = self.state.selected_user().map(|user| user.id);
                let selected_text = self
                    .state
                    .selected_user()
                    .map_or_else(|| SELECT_USER_DEFAULT.to_string(), |user| user.name.clone());
                let mut selected = current;
                egui::ComboBox::from_id_salt("user_select")
                    .selected_text(selected_text)
                    .width(theme::CONTENT_MAX_WIDTH * 0.6)
                    .show_ui(ui, |ui| {
                        for option in &options {
                            ui.selectable_value(&mut selected, option.id, option.label.as_str());
                        }
                    });
                if selected != current {
                    self.state.select_user(selected);
                }
            }
        }
        ui.add_space(16.0);
    }

    fn show_post_form(&mut self, ui: &mut egui::Ui) {
        if self.state.selected_user().is_none() {
            return;
        }

        theme::card_frame().show(ui, |ui| {
            ui.set_max_width(theme::CONTENT_MAX_WIDTH);
            ui.label(
                egui::RichText::new("Create a Post")
                    .size(28.0)
                    .strong()
                    .color(theme::HEADING),
            );
            ui.add_space(8.0);

            let mut title = self.state.draft().title.clone();
            let title_edit = egui::TextEdit::singleline(&mut title)
                .hint_text("Post Title")
                .desired_width(f32::INFINITY);
            if ui.add(title_edit).changed() {
                self.state.update_draft(DraftField::Title, title);
            }

            let mut body = self.state.draft().body.clone();
            let body_edit = egui::TextEdit::multiline(&mut body)
                .hint_text("Post Body")
                .desired_rows(4)
                .desired_width(f32::INFINITY);
            if ui.add(body_edit).changed() {
                self.state.update_draft(DraftField::Body, body);
            }

            ui.add_space(8.0);
            if ui.add(theme::primary_button("Create Post")).clicked() {
                if let Some(cmd) = self.state.create_post(Instant::now()) {
                    self.dispatch(cmd);
                }
            }
        });
        ui.add_space(16.0);
    }

    fn show_posts(&mut self, ui: &mut egui::Ui) {
        if self.state.posts().is_empty() {
            return;
        }

        theme::card_frame().show(ui, |ui| {
            ui.set_max_width(theme::CONTENT_MAX_WIDTH);
            ui.label(
                egui::RichText::new("Created Posts")
                    .size(28.0)
                    .strong()
                    .color(theme::HEADING),
            );
            egui::ScrollArea::vertical()
                .id_salt("created_posts")
                .max_height(POSTS_MAX_HEIGHT)
                .show(ui, |ui| {
                    for post in self.state.posts() {
                        theme::item_frame().show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(egui::RichText::new(post_json(post)).monospace());
                        });
                        ui.add_space(8.0);
                    }
                });
        });
        ui.add_space(12.0);

        if ui.add(theme::primary_button("Fetch Comments")).clicked() {
            if let Some(post_id) = self.state.latest_post_id() {
                let cmd = self.state.fetch_comments(post_id);
                self.dispatch(cmd);
            }
        }
        if self.state.take_scroll_request() {
            ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
        }
        ui.add_space(16.0);
    }

    fn show_comments(&mut self, ui: &mut egui::Ui) {
        match comments_view(self.state.comments()) {
            CommentsView::Hidden => {}
            CommentsView::Empty => {
                ui.label(egui::RichText::new(NO_COMMENTS_PLACEHOLDER).color(theme::MUTED_TEXT));
            }
            CommentsView::List(comments) => {
                theme::card_frame().show(ui, |ui| {
                    ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                    ui.label(egui::RichText::new("Comments").size(28.0).strong());
                    for comment in comments {
                        theme::item_frame().show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(egui::RichText::new(&comment.name).strong());
                            ui.label(egui::RichText::new(&comment.body).color(theme::MUTED_TEXT));
                        });
                        ui.add_space(8.0);
                    }
                });
            }
        }
    }

    fn show_error_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.state.error().map(str::to_owned) else {
            return;
        };
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(message).color(theme::ERROR_TEXT));
            if ui.link("Dismiss").clicked() {
                self.state.dismiss_error();
            }
        });
    }

    fn show_loading_overlay(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("loading_overlay"))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.add(egui::Spinner::new().size(48.0));
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        self.process_ui_events();
        let now = Instant::now();
        self.state.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        self.show_header(ui);
                        self.show_user_picker(ui);
                        self.show_post_form(ui);
                        self.show_posts(ui);
                        self.show_comments(ui);
                        self.show_error_banner(ui);
                    });
                });
        });

        if self.state.is_loading() {
            self.show_loading_overlay(ctx);
        }

        if let Some(notification) = self.state.notification().cloned() {
            if show_notification(ctx, &notification) {
                self.state.dismiss_notification();
            }
        }

        let repaint_after = self
            .state
            .notification_remaining(now)
            .map_or(IDLE_REPAINT, |remaining| remaining.min(IDLE_REPAINT));
        ctx.request_repaint_after(repaint_after);
    }
}
