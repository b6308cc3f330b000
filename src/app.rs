use egui::{Rect, vec2};

use crate::canvas::Canvas;
use crate::config::DrawPadConfig;
use crate::event::RepaintHandler;
use crate::input::InputHandler;
use crate::palette::Palette;
use crate::renderer::Renderer;
use crate::tools::Tool;

const SWATCH_SIZE: f32 = 28.0;

/// The draw pad window: toolbar, color swatches and the canvas.
#[derive(Debug)]
pub struct DrawPadApp {
    canvas: Canvas,
    palette: Palette,
    renderer: Renderer,
    input: InputHandler,
    show_clear_confirmation: bool,
}

impl DrawPadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DrawPadConfig) -> Self {
        let app = Self::from_config(&config);
        app.canvas
            .subscribe(Box::new(RepaintHandler::new(cc.egui_ctx.clone())));
        app
    }

    pub fn from_config(config: &DrawPadConfig) -> Self {
        let palette = config.palette();
        let mut canvas = Canvas::new();
        canvas.set_stroke_color(palette.selected());

        Self {
            canvas,
            palette,
            renderer: Renderer::new(config.background_color()),
            input: InputHandler::new(Rect::NOTHING),
            show_clear_confirmation: false,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.show_clear_confirmation
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.canvas.set_tool(tool);
    }

    pub fn select_color(&mut self, index: usize) {
        if let Some(color) = self.palette.select(index) {
            self.canvas.set_stroke_color(color);
        }
    }

    pub fn undo(&mut self) {
        self.canvas.undo();
    }

    /// Asks for confirmation before clearing. Nothing to confirm on an untouched canvas.
    pub fn request_clear(&mut self) {
        if self.canvas.has_started_drawing() {
            self.show_clear_confirmation = true;
        }
    }

    pub fn confirm_clear(&mut self) {
        self.show_clear_confirmation = false;
        self.canvas.clear();
    }

    pub fn cancel_clear(&mut self) {
        self.show_clear_confirmation = false;
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let active = self.canvas.active_tool();
            for tool in Tool::ALL {
                let label = format!("{} {}", tool.icon(), tool.name());
                if ui.selectable_label(active == tool, label).clicked() {
                    log::info!("Tool selected from UI: {tool}");
                    self.select_tool(tool);
                }
            }

            ui.separator();

            if ui
                .add_enabled(self.canvas.has_started_drawing(), egui::Button::new("↩ Undo"))
                .clicked()
            {
                self.undo();
            }
            if ui.button("🗑 Clear").clicked() {
                self.request_clear();
            }
        });
    }

    fn color_bar(&mut self, ui: &mut egui::Ui) {
        let selected = self.palette.selected_index();
        let highlight = ui.visuals().selection.stroke.color;

        ui.horizontal_wrapped(|ui| {
            for (index, color) in self.palette.colors().to_vec().into_iter().enumerate() {
                let mut swatch = egui::Button::new("")
                    .fill(color)
                    .min_size(vec2(SWATCH_SIZE, SWATCH_SIZE));
                if selected == Some(index) {
                    swatch = swatch.stroke(egui::Stroke::new(3.0, highlight));
                }
                if ui.add(swatch).clicked() {
                    self.select_color(index);
                }
            }
        });
    }

    fn clear_confirmation(&mut self, ctx: &egui::Context) {
        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new("Clear drawing?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Every stroke will be removed.");
                ui.horizontal(|ui| {
                    confirmed = ui.button("Clear").clicked();
                    cancelled = ui.button("Cancel").clicked();
                });
            });

        if confirmed {
            self.confirm_clear();
        } else if cancelled {
            self.cancel_clear();
        }
    }
}

impl eframe::App for DrawPadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));

        // Colors only apply to the paintbrush.
        if !self.canvas.is_erasing() {
            egui::TopBottomPanel::bottom("colors").show(ctx, |ui| self.color_bar(ui));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                self.input.set_canvas_rect(response.rect);

                if !self.show_clear_confirmation {
                    for event in self.input.process_input(ctx) {
                        self.canvas.handle_input(event);
                    }
                }

                self.renderer
                    .render(ctx, &painter, response.rect, &mut self.canvas);
            });

        if self.show_clear_confirmation {
            self.clear_confirmation(ctx);
        }
    }
}
