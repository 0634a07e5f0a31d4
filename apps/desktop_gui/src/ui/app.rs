use std::time::Duration;

use eframe::egui;
use shared::domain::RecommendationType;

use crate::controller::{
    events::UiErrorCategory,
    form::{FlashSeverity, FormState},
    orchestration::{FormAction, FormController},
    render::RESULT_COLUMNS,
};

const FIELD_WIDTH: f32 = 260.0;

pub struct RecommendationsApp {
    controller: FormController,
    base_url: String,
}

impl RecommendationsApp {
    pub fn new(controller: FormController, base_url: String) -> Self {
        Self {
            controller,
            base_url,
        }
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Recommendations");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.base_url);
                });
            });
        });
    }

    fn show_flash(ui: &mut egui::Ui, state: &FormState) {
        let Some(flash) = &state.flash else {
            return;
        };
        let color = match flash.severity {
            FlashSeverity::Info => egui::Color32::from_rgb(72, 160, 96),
            FlashSeverity::Error(UiErrorCategory::NotFound | UiErrorCategory::Validation) => {
                egui::Color32::from_rgb(214, 160, 60)
            }
            FlashSeverity::Error(_) => egui::Color32::from_rgb(200, 80, 80),
        };
        egui::Frame::NONE
            .stroke(egui::Stroke::new(1.0, color))
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(&flash.text).color(color));
            });
    }

    fn show_pet_form(ui: &mut egui::Ui, state: &mut FormState) {
        let pet = &mut state.pet;
        egui::Grid::new("pet_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                text_row(ui, "Pet ID", "pet_id", &mut pet.id);
                text_row(ui, "Name", "pet_name", &mut pet.name);
                text_row(ui, "Category", "pet_category", &mut pet.category);

                ui.label("Available");
                egui::ComboBox::from_id_salt("pet_available")
                    .selected_text(pet.available.as_str())
                    .width(FIELD_WIDTH)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut pet.available, "true".to_string(), "true");
                        ui.selectable_value(&mut pet.available, "false".to_string(), "false");
                    });
                ui.end_row();

                text_row(ui, "Gender", "pet_gender", &mut pet.gender);
                text_row(ui, "Birthday", "pet_birthday", &mut pet.birthday);
            });
    }

    fn show_recommendation_form(ui: &mut egui::Ui, state: &mut FormState) {
        let recommendation = &mut state.recommendation;
        egui::Grid::new("recommendation_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                text_row(ui, "ID", "recommendation_id", &mut recommendation.id);
                text_row(
                    ui,
                    "Product A SKU",
                    "recommendation_product_a_sku",
                    &mut recommendation.product_a_sku,
                );
                text_row(
                    ui,
                    "Product B SKU",
                    "recommendation_product_b_sku",
                    &mut recommendation.product_b_sku,
                );

                ui.label("Type");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut recommendation.recommendation_type)
                            .id_salt("recommendation_recommendation_type")
                            .desired_width(FIELD_WIDTH - 40.0),
                    );
                    let current = RecommendationType::parse(&recommendation.recommendation_type);
                    ui.menu_button("▾", |ui| {
                        for kind in RecommendationType::ALL {
                            if ui.selectable_label(current == Some(kind), kind.as_str()).clicked() {
                                recommendation.recommendation_type = kind.as_str().to_string();
                                ui.close();
                            }
                        }
                    });
                });
                ui.end_row();

                text_row(ui, "Likes", "recommendation_likes", &mut recommendation.likes);
            });
    }

    fn show_actions(ui: &mut egui::Ui) -> Vec<FormAction> {
        let mut clicked = Vec::new();
        ui.horizontal(|ui| {
            for action in FormAction::ALL {
                if ui.button(action.label()).clicked() {
                    clicked.push(action);
                }
            }
        });
        clicked
    }

    fn show_search_results(ui: &mut egui::Ui, state: &FormState) {
        let Some(table) = &state.search_results else {
            return;
        };

        ui.horizontal(|ui| {
            ui.strong(format!("Search results ({})", table.len()));
            if ui.small_button("Copy as HTML").clicked() {
                ui.ctx().copy_text(table.to_html());
            }
        });

        if table.is_empty() {
            ui.weak("No recommendations matched.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("search_results")
                .num_columns(RESULT_COLUMNS.len())
                .striped(true)
                .spacing([18.0, 6.0])
                .show(ui, |ui| {
                    for column in RESULT_COLUMNS {
                        ui.strong(column);
                    }
                    ui.end_row();
                    for row in table.rows() {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
    }
}

fn text_row(ui: &mut egui::Ui, label: &str, id: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .id_salt(id)
            .desired_width(FIELD_WIDTH),
    );
    ui.end_row();
}

impl eframe::App for RecommendationsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.process_ui_events();
        self.show_header(ctx);

        let mut clicked = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &mut self.controller.state;
            ui.columns(2, |columns| {
                columns[0].group(|ui| {
                    ui.strong("Pet");
                    Self::show_pet_form(ui, state);
                });
                columns[1].group(|ui| {
                    ui.strong("Recommendation");
                    Self::show_recommendation_form(ui, state);
                });
            });

            ui.add_space(8.0);
            clicked = Self::show_actions(ui);
            ui.add_space(8.0);
            Self::show_flash(ui, state);
            ui.separator();
            Self::show_search_results(ui, state);
        });

        for action in clicked {
            self.controller.trigger(action);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
