use std::time::Instant;

use eframe::egui::{self, Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};
use sortscope_core::Palette;
use sortscope_playback::{PlaybackState, Session};
use sortscope_sorters::Algorithm;

/// The egui [`eframe::App`] that plays a session.
pub(crate) struct SortApp {
    session: Session,
    palette: Palette<Color32>,
    pseudo_code: bool,
    last_frame: Option<Instant>,
}

impl SortApp {
    pub(crate) fn new(session: Session, palette: Palette<Color32>, pseudo_code: bool) -> Self {
        Self {
            session,
            palette,
            pseudo_code,
            last_frame: None,
        }
    }

    /// Feeds the time since the previous frame to the session.
    fn advance(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame.replace(now) {
            self.session.tick(now - last);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let state = self.session.state();
        let running = state == PlaybackState::Running;

        ui.horizontal(|ui| {
            if ui.add_enabled(!running, egui::Button::new("New Array")).clicked() {
                self.session.regenerate();
            }

            ui.add_enabled_ui(!running, |ui| {
                let mut selected = self.session.algorithm();
                egui::ComboBox::from_id_salt("algorithm")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for algorithm in Algorithm::ALL {
                            ui.selectable_value(&mut selected, algorithm, algorithm.label());
                        }
                    });
                if selected != self.session.algorithm() {
                    self.session.select_algorithm(selected);
                }

                let mut options = self.session.options();
                ui.checkbox(&mut options.source_lines, "Step through lines");
                ui.checkbox(&mut options.highlight_runs, "Highlight runs");
                if options != self.session.options() {
                    self.session.set_options(options);
                }
            });

            ui.separator();

            let start = if state == PlaybackState::Paused { "Resume" } else { "Start" };
            if ui
                .add_enabled(!running, egui::Button::new(start))
                .clicked()
            {
                self.session.start();
            }
            if ui
                .add_enabled(running, egui::Button::new("Pause"))
                .clicked()
            {
                self.session.pause();
            }
            let can_step = !running && state != PlaybackState::Finished;
            if ui
                .add_enabled(can_step, egui::Button::new("Next Step"))
                .clicked()
            {
                self.session.next_step();
            }

            ui.separator();
            ui.label(self.status());
        });
    }

    fn status(&self) -> String {
        match self.session.player() {
            Some(player) => format!(
                "{:?}: step {} of {}",
                player.state(),
                player.cursor() + 1,
                player.len()
            ),
            None => format!("Idle: {} values", self.session.values().len()),
        }
    }

    fn pseudo_code_panel(&self, ui: &mut egui::Ui, code: &[&str]) {
        ui.heading(self.session.algorithm().label());
        ui.separator();

        let active = self.session.current_source_line();
        let highlight = ui.visuals().selection.bg_fill;
        for (line, text) in code.iter().enumerate() {
            let mut text = RichText::new(*text).monospace();
            if active == Some(line) {
                text = text.strong().background_color(highlight);
            }
            ui.label(text);
        }

        if !self.session.options().source_lines {
            ui.add_space(8.0);
            ui.weak("Enable \"Step through lines\" to follow along.");
        }
    }

    fn bars(&self, ui: &mut egui::Ui) {
        let snapshot = self.session.current_snapshot();
        let bars: Vec<Bar> = self
            .palette
            .paint(snapshot)
            .enumerate()
            .map(|(idx, (value, color))| {
                Bar::new(idx as f64, f64::from(value))
                    .fill(*color)
                    .width(0.8)
            })
            .collect();

        let len = snapshot.len() as f64;
        let top = f64::from(self.session.array_config().max_value());

        Plot::new("bars")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_grid(false)
            .show_axes([false, true])
            .include_x(-0.5)
            .include_x(len - 0.5)
            .include_y(0.0)
            .include_y(top)
            .show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new(bars)));
    }
}

impl eframe::App for SortApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.controls(ui);
            ui.add_space(4.0);
        });

        if self.pseudo_code {
            if let Some(code) = self.session.pseudo_code() {
                egui::SidePanel::right("pseudo_code")
                    .resizable(false)
                    .show(ctx, |ui| self.pseudo_code_panel(ui, code));
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| self.bars(ui));

        match self.session.until_next_tick() {
            Some(wait) => ctx.request_repaint_after(wait),
            // Idle frames never count toward the next tick.
            None => self.last_frame = None,
        }
    }
}
