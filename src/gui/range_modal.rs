use eframe::egui;

use super::modal::{
    action_buttons,
    Modal,
    ModalResult,
};

/// Draft bounds for the study range while the dialog is open. 1-based
/// inclusive catalog positions, matching what the user sees.
#[derive(Debug, Clone, Default)]
pub struct RangeDraft {
    pub start: usize,
    pub end: usize,
}

pub struct RangeModal {
    modal: Modal<RangeDraft>,
    catalog_len: usize,
}

impl RangeModal {
    pub fn new() -> Self {
        RangeModal { modal: Modal::new("Set Study Range"), catalog_len: 0 }
    }

    pub fn open(&mut self, current: Option<(usize, usize)>, catalog_len: usize) {
        let (start, end) = current.unwrap_or((1, catalog_len));
        self.catalog_len = catalog_len;
        self.modal.open_with(RangeDraft { start, end });
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Returns the confirmed bounds once the user applies the dialog.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<(usize, usize)> {
        let catalog_len = self.catalog_len;
        let result = self.modal.show(ctx, |ui, draft| {
            ui.label(format!("Limit studying to a slice of the {} catalog words.", catalog_len));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("From");
                ui.add(
                    egui::DragValue::new(&mut draft.start)
                        .range(1..=catalog_len.max(1)),
                );
                ui.label("to");
                ui.add(
                    egui::DragValue::new(&mut draft.end)
                        .range(1..=catalog_len.max(1)),
                );
                ui.label("(inclusive)");
            });

            ui.add_space(10.0);
            action_buttons(ui, draft, "Apply", "Cancel")
        });

        match result {
            Some(ModalResult::Confirmed(draft)) => Some((draft.start, draft.end)),
            _ => None,
        }
    }
}

impl Default for RangeModal {
    fn default() -> Self {
        Self::new()
    }
}
