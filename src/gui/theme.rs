use eframe::egui::{
    self,
    Color32,
    Stroke,
    Visuals,
};

/// Palette for the card table. One fixed light scheme; the pastel blue
/// table and white/blue card faces follow the classic flashcard look.
#[derive(Clone)]
pub struct Theme {
    pub background: Color32,
    pub panel: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub card_front: Color32,
    pub card_front_text: Color32,
    pub card_back: Color32,
    pub card_back_text: Color32,
    pub green: Color32,
    pub red: Color32,
    pub orange: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::pastel()
    }
}

impl Theme {
    pub fn pastel() -> Self {
        Theme {
            background: Color32::from_rgb(0xbf, 0xdf, 0xff),
            panel: Color32::from_rgb(0xd4, 0xe9, 0xff),
            foreground: Color32::from_rgb(0x22, 0x2a, 0x35),
            muted: Color32::from_rgb(0x5d, 0x6d, 0x85),
            card_front: Color32::from_rgb(0xff, 0xff, 0xfa),
            card_front_text: Color32::from_rgb(0x1a, 0x1a, 0x1a),
            card_back: Color32::from_rgb(0x35, 0x65, 0x9e),
            card_back_text: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            green: Color32::from_rgb(0x3f, 0xa3, 0x5f),
            red: Color32::from_rgb(0xc8, 0x50, 0x50),
            orange: Color32::from_rgb(0xdc, 0x96, 0x5a),
        }
    }

    pub fn card_fill(&self, front: bool) -> Color32 {
        if front {
            self.card_front
        } else {
            self.card_back
        }
    }

    pub fn card_text(&self, front: bool) -> Color32 {
        if front {
            self.card_front_text
        } else {
            self.card_back_text
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let default = Visuals::light();

    ctx.set_visuals(Visuals {
        dark_mode: false,
        override_text_color: Some(theme.foreground),
        panel_fill: theme.panel,
        window_fill: theme.panel,
        window_stroke: Stroke { color: theme.muted, ..default.window_stroke },
        extreme_bg_color: theme.background,
        faint_bg_color: theme.background,
        hyperlink_color: theme.card_back,
        error_fg_color: theme.red,
        warn_fg_color: theme.orange,
        ..default
    });

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
