/*!
 * GUI application for cwi-rs - country facts and same-day weather widget
 *
 * A cross-platform desktop widget providing:
 * - A country dropdown (with an explicit "no selection" entry)
 * - A populated field grid with map/flag links once a lookup completes
 * - A loading spinner and an error label while things are in flight
 *
 * Platform support: Windows, macOS, Linux
 */

use cwi_rs::{
    Controller, CountryClient, DisplayModel, DisplaySurface, PipelineError, RunToken, UiState,
    WeatherClient, run_pipeline, storage,
};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Countries offered in the dropdown. The lookup itself accepts any name
/// REST Countries understands; this list just keeps the widget small.
const COUNTRIES: &[&str] = &[
    "Australia",
    "Brazil",
    "Canada",
    "China",
    "Egypt",
    "France",
    "Germany",
    "India",
    "Italy",
    "Japan",
    "Kenya",
    "Mexico",
    "Netherlands",
    "Norway",
    "Poland",
    "South Africa",
    "Spain",
    "Sweden",
    "United Kingdom",
    "United States",
];

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([420.0, 420.0])
            .with_title("Country Weather - cwi-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "Country Weather",
        options,
        Box::new(|_cc| Ok(Box::new(CwiApp::new()))),
    )
}

/// The widget's display fields. Written only through the
/// [`DisplaySurface`] trait, so the controller's whole-model guarantee
/// holds: either nothing, one full report, or one error message.
#[derive(Debug, Default)]
struct FieldSurface {
    model: Option<DisplayModel>,
    is_loading: bool,
    error_message: String,
}

impl DisplaySurface for FieldSurface {
    fn clear(&mut self) {
        self.model = None;
        self.error_message.clear();
    }

    fn set_loading(&mut self, on: bool) {
        self.is_loading = on;
    }

    fn show_error(&mut self, message: &str) {
        self.error_message = message.to_string();
    }

    fn render(&mut self, model: &DisplayModel) {
        self.model = Some(model.clone());
    }
}

type Outcome = (RunToken, Result<DisplayModel, PipelineError>);

/// Main application state
struct CwiApp {
    controller: Controller<FieldSurface>,
    selected_country: String,
    locale: String,
    status_message: String,

    // Long-lived channel: stale runs still deliver their outcome and the
    // controller's token guard drops it.
    sender: mpsc::Sender<Outcome>,
    receiver: mpsc::Receiver<Outcome>,
}

impl CwiApp {
    fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            controller: Controller::new(FieldSurface::default()),
            selected_country: String::new(),
            locale: "en".to_string(),
            status_message: String::new(),
            sender,
            receiver,
        }
    }

    /// React to a dropdown change: clear, then spawn the pipeline run on a
    /// background thread so the event loop stays live.
    fn start_lookup(&mut self) {
        self.status_message.clear();

        let Some(token) = self.controller.select(&self.selected_country) else {
            return; // placeholder selected, surface cleared, done
        };

        let name = self.selected_country.clone();
        let locale = self.locale.clone();
        let sender = self.sender.clone();

        thread::spawn(move || {
            let countries = CountryClient::default();
            let weather = WeatherClient::default();
            let result = run_pipeline(&countries, &weather, &name, &locale);
            let _ = sender.send((token, result));
        });
    }

    fn drain_outcomes(&mut self) {
        while let Ok((token, outcome)) = self.receiver.try_recv() {
            self.controller.finish(token, outcome);
        }
    }

    fn save_report(&mut self, model: &DisplayModel) {
        let default_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let Some(path) = rfd::FileDialog::new()
            .set_directory(default_dir)
            .add_filter("JSON", &["json"])
            .add_filter("CSV", &["csv"])
            .set_file_name("country_weather.json")
            .save_file()
        else {
            return;
        };

        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        let result = if is_csv {
            storage::save_csv(model, &path)
        } else {
            storage::save_json(model, &path)
        };

        match result {
            Ok(()) => self.status_message = format!("Saved report to {}", path.display()),
            Err(err) => self.status_message = format!("Failed to save report: {err}"),
        }
    }
}

impl eframe::App for CwiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply completed background lookups first
        self.drain_outcomes();

        // Request repaint if loading (for spinner animation)
        if self.controller.surface().is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Country facts & today's weather");
                ui.add_space(10.0);

                let previous = self.selected_country.clone();
                ui.horizontal(|ui| {
                    ui.label("Country:");
                    egui::ComboBox::from_id_salt("country_select")
                        .selected_text(if self.selected_country.is_empty() {
                            "— select a country —"
                        } else {
                            self.selected_country.as_str()
                        })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.selected_country,
                                String::new(),
                                "— select a country —",
                            );
                            for name in COUNTRIES {
                                ui.selectable_value(
                                    &mut self.selected_country,
                                    (*name).to_string(),
                                    *name,
                                );
                            }
                        });

                    ui.label("Locale:");
                    egui::ComboBox::from_id_salt("locale_select")
                        .selected_text(&self.locale)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.locale, "en".to_string(), "English (en)");
                            ui.selectable_value(&mut self.locale, "de".to_string(), "German (de)");
                            ui.selectable_value(&mut self.locale, "fr".to_string(), "French (fr)");
                            ui.selectable_value(&mut self.locale, "es".to_string(), "Spanish (es)");
                            ui.selectable_value(&mut self.locale, "it".to_string(), "Italian (it)");
                        });
                });
                if self.selected_country != previous {
                    self.start_lookup();
                }

                ui.add_space(10.0);

                if self.controller.surface().is_loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Fetching country and weather data...");
                    });
                }

                let error = self.controller.surface().error_message.clone();
                if !error.is_empty() {
                    ui.colored_label(egui::Color32::RED, error);
                }

                if let Some(model) = &self.controller.surface().model {
                    egui::Grid::new("report_grid")
                        .num_columns(2)
                        .spacing([16.0, 6.0])
                        .striped(true)
                        .show(ui, |ui| {
                            ui.label("Country:");
                            ui.label(&model.country_name);
                            ui.end_row();

                            ui.label("Official name:");
                            ui.label(&model.official_name);
                            ui.end_row();

                            ui.label("Capital:");
                            ui.label(&model.capital);
                            ui.end_row();

                            ui.label("Languages:");
                            ui.label(&model.languages);
                            ui.end_row();

                            ui.label("Population:");
                            ui.label(&model.population);
                            ui.end_row();

                            ui.label("Coordinates:");
                            ui.label(&model.lat_lng);
                            ui.end_row();

                            ui.label("Map:");
                            match &model.map_url {
                                Some(url) => {
                                    ui.hyperlink_to("View Map", url);
                                }
                                None => {
                                    ui.label("N/A");
                                }
                            }
                            ui.end_row();

                            ui.label("Flag:");
                            match &model.flag_url {
                                Some(url) => {
                                    ui.hyperlink_to("View Flag", url);
                                }
                                None => {
                                    ui.label("N/A");
                                }
                            }
                            ui.end_row();

                            ui.label("Rainfall today:");
                            ui.label(&model.rainfall);
                            ui.end_row();

                            ui.label("Avg temperature:");
                            ui.label(&model.temperature);
                            ui.end_row();
                        });
                }

                ui.add_space(12.0);

                let populated = matches!(self.controller.state(), UiState::Populated);
                if ui
                    .add_enabled(populated, egui::Button::new("Save report..."))
                    .clicked()
                    && let Some(model) = self.controller.surface().model.clone()
                {
                    self.save_report(&model);
                }

                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
            });
        });
    }
}
