use eframe::egui;

/// A small centered dialog with a dimmed backdrop. Holds a draft value of
/// type `T` while open; closing hands the draft back through `ModalResult`.
pub struct Modal<T> {
    open: bool,
    title: String,
    pub data: T,
}

#[derive(Debug, Clone)]
pub enum ModalResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T: Default> Modal<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Modal { open: false, title: title.into(), data: T::default() }
    }
}

impl<T> Modal<T> {
    pub fn open_with(&mut self, data: T) {
        self.data = data;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show<F>(&mut self, ctx: &egui::Context, content: F) -> Option<ModalResult<T>>
    where
        F: FnOnce(&mut egui::Ui, &mut T) -> Option<ModalResult<T>>,
        T: Clone,
    {
        if !self.open {
            return None;
        }

        self.show_backdrop(ctx);

        let mut result = None;
        egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                result = content(ui, &mut self.data);
            });

        if result.is_some() {
            self.open = false;
        }
        result
    }

    fn show_backdrop(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("modal_backdrop"))
            .order(egui::Order::Background)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.allocate_exact_size(screen_rect.size(), egui::Sense::hover());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(100));
            });
    }
}

pub fn action_buttons<T: Clone>(
    ui: &mut egui::Ui,
    data: &T,
    confirm_text: &str,
    cancel_text: &str,
) -> Option<ModalResult<T>> {
    ui.horizontal(|ui| {
        if ui.button(confirm_text).clicked() {
            Some(ModalResult::Confirmed(data.clone()))
        } else if ui.button(cancel_text).clicked() {
            Some(ModalResult::Cancelled)
        } else {
            None
        }
    })
    .inner
}

/// Yes/no dialog used for destructive actions.
pub fn confirmation_dialog(
    modal: &mut Modal<()>,
    ctx: &egui::Context,
    message: &str,
) -> Option<ModalResult<()>> {
    modal.show(ctx, |ui, _data| {
        ui.label(message);
        ui.add_space(10.0);
        action_buttons(ui, &(), "Yes", "No")
    })
}
