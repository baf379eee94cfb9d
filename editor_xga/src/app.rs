use std::path::PathBuf;

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, Vec2};
use eframe::Frame;
use log::{info, warn};

use lib_xga::{Canvas, CanvasError, ColorIndex, Palette, Rgb};

use crate::config::EditorConfig;
use crate::filemanager::{self, FileError};
use crate::keymap;

fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Integer cell size that fits the whole canvas into the available space.
fn cell_size(available: Vec2, canvas_dims: (u32, u32)) -> f32 {
    let zoom_x = available.x / canvas_dims.0 as f32;
    let zoom_y = available.y / canvas_dims.1 as f32;
    zoom_x.min(zoom_y).floor().max(1.0)
}

fn screen_to_grid(
    canvas_rect: Rect,
    cell: f32,
    canvas_dims: (u32, u32),
    pos: Pos2,
) -> Option<(u32, u32)> {
    if !canvas_rect.contains(pos) {
        return None;
    }

    let x = ((pos.x - canvas_rect.min.x) / cell).floor() as u32;
    let y = ((pos.y - canvas_rect.min.y) / cell).floor() as u32;

    if x >= canvas_dims.0 || y >= canvas_dims.1 {
        return None;
    }
    Some((x, y))
}

pub struct XgaEditor {
    canvas: Canvas,
    palette: Palette,
    brush: ColorIndex,
    save_path: PathBuf,
    draw_grid: bool,
}

impl XgaEditor {
    pub fn new(config: EditorConfig) -> Result<Self, CanvasError> {
        let editor = Self {
            canvas: Canvas::new(config.width, config.height)?,
            palette: Palette::new(),
            brush: ColorIndex::BLACK,
            save_path: config.path,
            draw_grid: false,
        };

        // The target file exists from the first frame, as an all-background
        // image.
        editor.autosave();
        Ok(editor)
    }

    /// Re-encodes the full grid and overwrites the target file. A failed
    /// save is logged and otherwise ignored; the next mutation writes again.
    fn autosave(&self) {
        if let Err(err) = self.canvas.to_image().save(&self.save_path) {
            warn!("autosave to {} failed: {}", self.save_path.display(), err);
        }
    }

    fn handle_palette_keys(&mut self, ctx: &egui::Context) {
        let pressed: Vec<egui::Key> = ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        ..
                    } => Some(*key),
                    _ => None,
                })
                .collect()
        });

        for key in pressed {
            if let Some(brush) = keymap::brush_for_key(key) {
                self.brush = brush;
            }
        }
    }

    fn draw_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), Sense::click_and_drag());
            let visible_rect = response.rect;

            let input = ui.input(|i| i.clone());
            let canvas_dims = self.canvas.dimensions();

            let cell = cell_size(visible_rect.size(), canvas_dims);
            let image_size = Vec2::new(
                canvas_dims.0 as f32 * cell,
                canvas_dims.1 as f32 * cell,
            );
            let canvas_rect = Rect::from_center_size(visible_rect.center(), image_size);

            let painter = ui.painter();

            // Triple border in the brush color, doubling as a brush preview.
            let brush_color = color32(self.palette.color(self.brush));
            for inset in 1..=3 {
                painter.rect_stroke(
                    canvas_rect.expand(inset as f32),
                    0.0,
                    Stroke::new(1.0, brush_color),
                );
            }

            for y in 0..canvas_dims.1 {
                for x in 0..canvas_dims.0 {
                    let Some(index) = self.canvas.get(x, y) else {
                        continue;
                    };
                    let min = canvas_rect.min + Vec2::new(x as f32 * cell, y as f32 * cell);
                    let cell_rect = Rect::from_min_size(min, Vec2::splat(cell));
                    painter.rect_filled(cell_rect, 0.0, color32(self.palette.color(index)));
                }
            }

            // Grid overlay only once cells are big enough to separate.
            if self.draw_grid && cell >= 4.0 {
                let stroke = Stroke::new(0.4, Color32::DARK_GRAY);
                for x in 0..=canvas_dims.0 {
                    let screen_x = canvas_rect.min.x + x as f32 * cell;
                    painter.line_segment(
                        [
                            Pos2::new(screen_x, canvas_rect.min.y),
                            Pos2::new(screen_x, canvas_rect.max.y),
                        ],
                        stroke,
                    );
                }
                for y in 0..=canvas_dims.1 {
                    let screen_y = canvas_rect.min.y + y as f32 * cell;
                    painter.line_segment(
                        [
                            Pos2::new(canvas_rect.min.x, screen_y),
                            Pos2::new(canvas_rect.max.x, screen_y),
                        ],
                        stroke,
                    );
                }
            }

            // Paint only on press or motion, not once per frame while the
            // button is held still; every mutation triggers an immediate save.
            let moved_or_pressed =
                input.pointer.delta() != Vec2::ZERO || input.pointer.any_pressed();
            if moved_or_pressed {
                if let Some(pos) = input.pointer.interact_pos() {
                    if let Some((x, y)) = screen_to_grid(canvas_rect, cell, canvas_dims, pos) {
                        if input.pointer.primary_down() {
                            self.canvas.paint(x, y, self.brush);
                            self.autosave();
                        } else if input.pointer.secondary_down() {
                            self.canvas.erase(x, y);
                            self.autosave();
                        }
                    }
                }
            }
        });
    }

    fn draw_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("📂 Open").clicked() {
                    self.open_image();
                }

                if ui.button("Save As").clicked() {
                    self.save_image_as();
                }

                if ui.button("Export PNG").clicked() {
                    self.export_png();
                }

                ui.separator();

                ui.checkbox(&mut self.draw_grid, "🔲 Show Grid");

                ui.separator();

                ui.label(format!("Saving to {}", self.save_path.display()));
            });
        });
    }

    fn draw_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("color_panel")
            .resizable(false)
            .min_width(200.0)
            .max_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Color Palette");
                ui.add_space(8.0);

                ui.label(format!("Brush: {}", self.palette.name(self.brush)));
                ui.add_space(4.0);

                let swatch_size = Vec2::new(30.0, 30.0);
                for row in 0..4u8 {
                    ui.horizontal(|ui| {
                        for col in 0..4u8 {
                            let Some(index) = ColorIndex::new(row * 4 + col) else {
                                continue;
                            };

                            let stroke = if self.brush == index {
                                Stroke::new(4.0, Color32::WHITE)
                            } else {
                                Stroke::new(1.0, Color32::WHITE)
                            };

                            let button = egui::Button::new("")
                                .fill(color32(self.palette.color(index)))
                                .stroke(stroke)
                                .min_size(swatch_size);

                            let response = ui.add(button).on_hover_text(format!(
                                "{} (key {})",
                                self.palette.name(index),
                                keymap::key_label(index)
                            ));
                            if response.clicked() {
                                self.brush = index;
                            }
                        }
                    });
                }

                ui.add_space(8.0);
                if ui.button("Clear Canvas").clicked() {
                    self.canvas.clear();
                    self.autosave();
                }

                ui.add_space(16.0);
                ui.label("Controls:");
                ui.label("• Left drag to paint");
                ui.label("• Right drag to erase");
                ui.label("• Keys q-p and a-h pick a color");
            });
    }

    fn open_image(&mut self) {
        match filemanager::open_image() {
            Ok((path, image)) => match Canvas::from_image(&image) {
                Ok(canvas) => {
                    info!("opened {}", path.display());
                    self.canvas = canvas;
                    self.save_path = path;
                }
                Err(err) => warn!("failed to open image: {}", err),
            },
            Err(FileError::DialogCanceled) => {}
            Err(err) => warn!("failed to open image: {}", err),
        }
    }

    fn save_image_as(&mut self) {
        match filemanager::save_image_as(&self.canvas.to_image()) {
            Ok(path) => {
                info!("saved image to {}", path.display());
                self.save_path = path;
            }
            Err(FileError::DialogCanceled) => {}
            Err(err) => warn!("failed to save image: {}", err),
        }
    }

    fn export_png(&self) {
        match filemanager::export_png(&self.canvas.to_image(), &self.palette) {
            Ok(path) => info!("exported PNG to {}", path.display()),
            Err(FileError::DialogCanceled) => {}
            Err(err) => warn!("failed to export PNG: {}", err),
        }
    }
}

impl eframe::App for XgaEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_palette_keys(ctx);
        self.draw_central_panel(ctx);
        self.draw_side_panel(ctx);
        self.draw_toolbar(ctx);
    }
}
