use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::core::{
    CardSide,
    StudyState,
    ViewMode,
};

/// A button press on the card table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Flip,
    Next,
    Mastered,
    Favorite,
}

pub struct CardPanel;

impl CardPanel {
    /// Draws the card and the four study buttons. `terminal` disables the
    /// study buttons once the to-learn view is fully mastered.
    pub fn show(
        ctx: &egui::Context,
        study: &StudyState,
        theme: &Theme,
        terminal: bool,
        status: Option<&str>,
    ) -> Option<CardAction> {
        let mut action = None;

        egui::TopBottomPanel::bottom("button_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let enabled = !terminal && study.current().is_some();

                ui.columns(4, |columns| {
                    let buttons: [(usize, &str, CardAction, bool); 4] = [
                        (0, "✘  Don't Know", CardAction::Flip, enabled),
                        (1, "♥  Favorite", CardAction::Favorite, enabled),
                        (
                            2,
                            "✔  Mastered",
                            CardAction::Mastered,
                            enabled && study.view() == ViewMode::ToLearn,
                        ),
                        (3, "➜  Next", CardAction::Next, enabled),
                    ];
                    for (idx, label, button_action, button_enabled) in buttons {
                        columns[idx].vertical_centered_justified(|ui| {
                            let response =
                                ui.add_enabled(button_enabled, egui::Button::new(label));
                            if response.clicked() {
                                action = Some(button_action);
                            }
                        });
                    }
                });
            });

            ui.add_space(4.0);
            ui.vertical_centered(|ui| match status {
                Some(text) => {
                    ui.label(RichText::new(text).color(theme.orange));
                }
                None => {
                    ui.label(
                        RichText::new("Enter: flip   N: next   M: mastered   F: favorite")
                            .small()
                            .color(theme.muted),
                    );
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.background))
            .show(ctx, |ui| {
                Self::show_card(ui, study, theme, terminal);
            });

        action
    }

    fn show_card(ui: &mut egui::Ui, study: &StudyState, theme: &Theme, terminal: bool) {
        let front = study.side() == CardSide::Front;
        let card_rect = {
            let available = ui.available_rect_before_wrap();
            let size = egui::vec2(
                (available.width() - 80.0).clamp(320.0, 760.0),
                (available.height() - 60.0).clamp(240.0, 500.0),
            );
            egui::Rect::from_center_size(available.center(), size)
        };

        let painter = ui.painter();
        painter.rect_filled(card_rect, egui::CornerRadius::same(18), theme.card_fill(front));
        painter.rect_stroke(
            card_rect,
            egui::CornerRadius::same(18),
            egui::Stroke::new(1.5, theme.muted),
            egui::StrokeKind::Outside,
        );

        if terminal {
            Self::centered_texts(
                ui,
                card_rect,
                theme.card_text(front),
                RichText::new("Congratulations!").size(40.0).italics(),
                Some(RichText::new("You've mastered all words!").size(26.0)),
            );
            return;
        }

        match study.display_text() {
            Some(text) => {
                Self::centered_texts(
                    ui,
                    card_rect,
                    theme.card_text(front),
                    RichText::new(study.language_label()).size(32.0).italics(),
                    Some(RichText::new(text.to_string()).size(52.0).strong()),
                );
            }
            None => {
                Self::centered_texts(
                    ui,
                    card_rect,
                    theme.card_text(front),
                    RichText::new(study.view().label()).size(32.0).italics(),
                    Some(RichText::new("Nothing to show here yet").size(26.0)),
                );
            }
        }
    }

    fn centered_texts(
        ui: &mut egui::Ui,
        card_rect: egui::Rect,
        color: egui::Color32,
        title: RichText,
        body: Option<RichText>,
    ) {
        let mut content = egui::UiBuilder::new().max_rect(card_rect.shrink(24.0));
        content = content.layout(egui::Layout::top_down(egui::Align::Center));
        ui.scope_builder(content, |ui| {
            ui.add_space(card_rect.height() * 0.12);
            ui.label(title.color(color));
            if let Some(body) = body {
                ui.add_space(card_rect.height() * 0.18);
                ui.label(body.color(color));
            }
        });
    }
}
