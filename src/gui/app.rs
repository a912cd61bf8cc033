use std::time::{
    Duration,
    Instant,
};

use eframe::egui;
use tracing::error;

use super::{
    card_panel::{
        CardAction,
        CardPanel,
    },
    modal::{
        confirmation_dialog,
        Modal,
        ModalResult,
    },
    range_modal::RangeModal,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        CardSide,
        StudyPaths,
        StudySignal,
        StudyState,
        TarjetaError,
        WordCatalog,
    },
    persistence,
};

const STATUS_LINGER: Duration = Duration::from_secs(3);

pub struct TarjetaApp {
    session: Result<StudyState, String>,
    settings: SettingsData,
    theme: Theme,

    status: Option<(String, Instant)>,
    flip_deadline: Option<Instant>,
    /// Set when the to-learn view is fully mastered; study buttons stay
    /// disabled until the user switches view or resets.
    terminal: bool,

    range_modal: RangeModal,
    reset_modal: Modal<()>,
}

impl TarjetaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        let settings = persistence::load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let session = WordCatalog::load(&persistence::catalog_path())
            .map(|catalog| {
                let mut study =
                    StudyState::load(catalog, StudyPaths::in_dir(&persistence::app_data_dir()));
                study.set_direction(settings.direction);
                study.set_traversal(settings.traversal);
                study.set_flip_delay(settings.flip_delay_secs);
                study
            })
            .map_err(|e| e.to_string());

        let mut app = TarjetaApp {
            session,
            settings,
            theme,
            status: None,
            flip_deadline: None,
            terminal: false,
            range_modal: RangeModal::new(),
            reset_modal: Modal::new("Reset Study List"),
        };
        app.after_card_change();
        app
    }

    /// Re-arms or cancels the auto-flip timer to match what is on screen:
    /// a front side with a card behind it gets one pending flip, everything
    /// else gets none.
    fn after_card_change(&mut self) {
        let Ok(study) = &self.session else {
            self.flip_deadline = None;
            return;
        };
        if !self.terminal && study.side() == CardSide::Front && study.current().is_some() {
            self.flip_deadline = Some(Instant::now() + study.flip_delay());
        } else {
            self.flip_deadline = None;
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some((text.into(), Instant::now()));
    }

    fn apply_signal(&mut self, signal: Option<StudySignal>) {
        let Some(signal) = signal else {
            return;
        };
        if signal == StudySignal::AllMastered {
            self.terminal = true;
        }
        self.set_status(signal.message());
    }

    fn apply_mutation(&mut self, result: Result<Option<StudySignal>, TarjetaError>) {
        match result {
            Ok(signal) => self.apply_signal(signal),
            Err(e) => {
                error!(error = %e, "persistence failure, change not applied");
                self.set_status(format!("Could not save: {}", e));
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = persistence::save_json(&self.settings, SETTINGS_FILE) {
            error!(error = %e, "failed to save settings");
        }
    }

    fn handle_top_bar(&mut self, action: TopBarAction, ctx: &egui::Context) {
        let Ok(study) = &mut self.session else {
            return;
        };
        match action {
            TopBarAction::SelectView(mode) => {
                self.terminal = false;
                let signal = study.select_view(mode);
                self.apply_signal(signal);
                self.after_card_change();
            }
            TopBarAction::SetDirection(direction) => {
                study.set_direction(direction);
                self.settings.direction = direction;
                self.save_settings();
                self.after_card_change();
            }
            TopBarAction::SetTraversal(mode) => {
                study.set_traversal(mode);
                self.settings.traversal = mode;
                self.save_settings();
            }
            TopBarAction::SetFlipDelay(seconds) => {
                study.set_flip_delay(seconds);
                self.settings.flip_delay_secs = seconds;
                self.save_settings();
                // The latest delay wins for any pending flip.
                self.after_card_change();
            }
            TopBarAction::OpenRange => {
                let current = study.range().map(|range| (range.start, range.end));
                let catalog_len = study.catalog().len();
                self.range_modal.open(current, catalog_len);
                self.flip_deadline = None;
            }
            TopBarAction::ClearRange => {
                self.terminal = false;
                let signal = study.clear_range();
                self.apply_signal(signal);
                self.after_card_change();
            }
            TopBarAction::RequestReset => {
                self.reset_modal.open_with(());
                self.flip_deadline = None;
            }
            TopBarAction::Quit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn handle_card_action(&mut self, action: CardAction) {
        let Ok(study) = &mut self.session else {
            return;
        };
        match action {
            CardAction::Flip => {
                study.flip();
                self.after_card_change();
            }
            CardAction::Next => {
                let signal = study.next();
                self.apply_signal(signal);
                self.after_card_change();
            }
            CardAction::Mastered => {
                let result = study.mark_mastered();
                self.apply_mutation(result);
                self.after_card_change();
            }
            CardAction::Favorite => {
                let result = study.toggle_favorite();
                self.apply_mutation(result);
                self.after_card_change();
            }
        }
    }

    fn keyboard_action(&self, ctx: &egui::Context) -> Option<CardAction> {
        if self.range_modal.is_open() || self.reset_modal.is_open() {
            return None;
        }
        ctx.input(|input| {
            if input.key_pressed(egui::Key::Enter) {
                Some(CardAction::Flip)
            } else if input.key_pressed(egui::Key::N) {
                Some(CardAction::Next)
            } else if input.key_pressed(egui::Key::M) {
                Some(CardAction::Mastered)
            } else if input.key_pressed(egui::Key::F) {
                Some(CardAction::Favorite)
            } else {
                None
            }
        })
    }

    fn tick_auto_flip(&mut self, ctx: &egui::Context) {
        let Some(deadline) = self.flip_deadline else {
            return;
        };
        let now = Instant::now();
        if now >= deadline {
            if let Ok(study) = &mut self.session {
                study.flip();
            }
            self.flip_deadline = None;
        } else {
            ctx.request_repaint_after(deadline - now);
        }
    }

    fn tick_status(&mut self, ctx: &egui::Context) {
        if let Some((_, since)) = &self.status {
            let age = since.elapsed();
            if age >= STATUS_LINGER {
                self.status = None;
            } else {
                ctx.request_repaint_after(STATUS_LINGER - age);
            }
        }
    }

    fn show_modals(&mut self, ctx: &egui::Context) {
        if let Some((start, end)) = self.range_modal.show(ctx) {
            if let Ok(study) = &mut self.session {
                self.terminal = false;
                match study.set_range(start, end) {
                    Ok(signal) => self.apply_signal(signal),
                    Err(e) => self.set_status(e.to_string()),
                }
            }
            self.after_card_change();
        }

        let reset_confirmed = matches!(
            confirmation_dialog(
                &mut self.reset_modal,
                ctx,
                "Move every word back to the study list and clear the learned list?",
            ),
            Some(ModalResult::Confirmed(()))
        );
        if reset_confirmed {
            if let Ok(study) = &mut self.session {
                self.terminal = false;
                match study.reset_study_list() {
                    Ok(()) => self.set_status("Study list reset"),
                    Err(e) => {
                        error!(error = %e, "reset failed");
                        self.set_status(format!("Could not save: {}", e));
                    }
                }
            }
            self.after_card_change();
        }
    }

    fn show_fatal_error(ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading("Tarjeta could not start");
                ui.add_space(12.0);
                ui.label(message);
                ui.add_space(12.0);
                ui.label(format!(
                    "Place '{}' in the working directory or in {}.",
                    persistence::CATALOG_FILE,
                    persistence::app_data_dir().display(),
                ));
                ui.add_space(20.0);
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}

impl eframe::App for TarjetaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(message) = &self.session {
            let message = message.clone();
            Self::show_fatal_error(ctx, &message);
            return;
        }

        self.tick_auto_flip(ctx);
        self.tick_status(ctx);
        self.show_modals(ctx);

        if let Ok(study) = &self.session {
            if let Some(action) = TopBar::show(ctx, study) {
                self.handle_top_bar(action, ctx);
            }
        }

        let keyboard = self.keyboard_action(ctx);

        let card_action = match &self.session {
            Ok(study) => {
                let status = self.status.as_ref().map(|(text, _)| text.as_str());
                CardPanel::show(ctx, study, &self.theme, self.terminal, status)
            }
            Err(_) => None,
        };

        if let Some(action) = card_action.or(keyboard) {
            if !self.terminal {
                self.handle_card_action(action);
            }
        }
    }
}
