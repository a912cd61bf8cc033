use eframe::egui::{
    self,
    containers,
};

use crate::core::{
    Direction,
    StudyState,
    TraversalMode,
    ViewMode,
};

/// A menu selection the app needs to act on. The bar itself never touches
/// the study state; it only reports what was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    SelectView(ViewMode),
    SetDirection(Direction),
    SetTraversal(TraversalMode),
    SetFlipDelay(u32),
    OpenRange,
    ClearRange,
    RequestReset,
    Quit,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, study: &StudyState) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("View", |ui| {
                    for mode in [ViewMode::ToLearn, ViewMode::Learned, ViewMode::Favorites] {
                        if ui.radio(study.view() == mode, mode.label()).clicked() {
                            action = Some(TopBarAction::SelectView(mode));
                            ui.close();
                        }
                    }
                });

                ui.menu_button("Direction", |ui| {
                    let entries = [
                        (Direction::SpanishToEnglish, "Spanish → English (Front: Spanish)"),
                        (Direction::EnglishToSpanish, "English → Spanish (Front: English)"),
                    ];
                    for (direction, label) in entries {
                        if ui.radio(study.direction() == direction, label).clicked() {
                            action = Some(TopBarAction::SetDirection(direction));
                            ui.close();
                        }
                    }
                });

                ui.menu_button("Traversal", |ui| {
                    let entries =
                        [(TraversalMode::Random, "Random"), (TraversalMode::Linear, "Linear")];
                    for (mode, label) in entries {
                        if ui.radio(study.traversal() == mode, label).clicked() {
                            action = Some(TopBarAction::SetTraversal(mode));
                            ui.close();
                        }
                    }
                });

                ui.menu_button("Auto-Flip Timer", |ui| {
                    let current = study.flip_delay().as_secs() as u32;
                    for seconds in 3..=10 {
                        let label = format!("{} seconds", seconds);
                        if ui.radio(current == seconds, label).clicked() {
                            action = Some(TopBarAction::SetFlipDelay(seconds));
                            ui.close();
                        }
                    }
                });

                ui.menu_button("Study", |ui| {
                    if ui.button("Set Range…").clicked() {
                        action = Some(TopBarAction::OpenRange);
                        ui.close();
                    }
                    let clear =
                        ui.add_enabled(study.range().is_some(), egui::Button::new("Clear Range"));
                    if clear.clicked() {
                        action = Some(TopBarAction::ClearRange);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Reset Study List…").clicked() {
                        action = Some(TopBarAction::RequestReset);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        action = Some(TopBarAction::Quit);
                        ui.close();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_counts(ui, study);
                });
            });
        });

        action
    }

    fn show_counts(ui: &mut egui::Ui, study: &StudyState) {
        let range_note = match study.range() {
            Some(range) => format!("  ·  range {}–{}", range.start, range.end),
            None => String::new(),
        };
        ui.label(format!(
            "{}: {} of {} words{}",
            study.view().label(),
            study.active().len(),
            study.catalog().len(),
            range_note,
        ));
    }
}
