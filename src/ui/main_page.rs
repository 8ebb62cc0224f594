use crate::core::comparator::DirectoryComparator;
use crate::core::localizer::{LocalizedText, Localizer};
use crate::core::report_formatter::ReportFormatter;
use crate::interface::text_lookup::TextLookup;
use crate::model::error::Error;
use crate::model::error::comparison::ComparisonError;
use crate::model::error::misc::MiscError;
use crate::model::locale::Locale;
use crate::model::log::system::SystemLog;
use crate::model::message_key::MessageKey;
use crate::model::report::DirectoryReport;
use crate::model::selection::FolderSelection;
use crate::ui::common::FolderSelectionMode;
use eframe::egui;
use eframe::{App, Frame};
use egui_file_dialog::FileDialog;
use macros::log;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;
use tokio::runtime::Handle;

type ComparisonResult = Result<DirectoryReport, ComparisonError>;

enum Status {
    Idle,
    Comparing,
    Finished,
    Failed(Error),
}

pub struct MainPage {
    localizer: Arc<Localizer>,
    locale: Locale,
    comparator: Arc<DirectoryComparator>,
    runtime: Handle,

    // Folder form
    selection: FolderSelection,
    file_dialog: FileDialog,
    folder_selection_mode: Option<FolderSelectionMode>,

    // Comparison state
    pending: Option<Receiver<ComparisonResult>>,
    status: Status,
    report: Option<DirectoryReport>,
    show_differences: bool,
}

impl MainPage {
    pub fn new(
        localizer: Arc<Localizer>,
        locale: Locale,
        comparator: Arc<DirectoryComparator>,
        runtime: Handle,
    ) -> Self {
        Self {
            localizer,
            locale,
            comparator,
            runtime,
            selection: FolderSelection::default(),
            file_dialog: FileDialog::new(),
            folder_selection_mode: None,
            pending: None,
            status: Status::Idle,
            report: None,
            show_differences: false,
        }
    }

    fn start_comparison(&mut self, ctx: &egui::Context) {
        let (first, second) = match self.selection.validate() {
            Ok(paths) => paths,
            Err(err) => {
                log!(err);
                self.status = Status::Failed(err.into());
                return;
            }
        };

        let (sender, receiver) = mpsc::channel();
        let comparator = self.comparator.clone();
        let ctx = ctx.clone();
        self.runtime.spawn_blocking(move || {
            let result = comparator.compare(&first, &second);
            // The page may have been closed in the meantime
            let _ = sender.send(result);
            ctx.request_repaint();
        });

        self.pending = Some(receiver);
        self.status = Status::Comparing;
        self.show_differences = false;
    }

    fn poll_comparison(&mut self) {
        let Some(receiver) = &self.pending else {
            return;
        };

        match receiver.try_recv() {
            Ok(Ok(report)) => {
                self.show_differences = !report.is_identical();
                self.report = Some(report);
                self.status = Status::Finished;
                self.pending = None;
            }
            Ok(Err(err)) => {
                log!(err);
                self.report = None;
                self.status = Status::Failed(err.into());
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                let err = MiscError::WorkerDisconnected;
                log!(err);
                self.status = Status::Failed(err.into());
                self.pending = None;
            }
        }
    }

    fn change_language(&mut self, ctx: &egui::Context, locale: Locale) {
        if locale == self.locale {
            return;
        }
        self.locale = locale;
        log!(SystemLog::LanguageChanged {
            code: locale.code().to_string(),
        });
        let title = self.localizer.lookup(locale).text(MessageKey::AppTitle);
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
    }

    fn status_text(&self, lookup: &LocalizedText<'_>) -> Option<(String, egui::Color32)> {
        match &self.status {
            Status::Idle => None,
            Status::Comparing => Some((lookup.text(MessageKey::Comparing), egui::Color32::GRAY)),
            Status::Finished => {
                let report = self.report.as_ref()?;
                let color = if report.is_identical() {
                    egui::Color32::LIGHT_GREEN
                } else {
                    egui::Color32::YELLOW
                };
                Some((ReportFormatter::summary(report, lookup), color))
            }
            Status::Failed(err) => Some((
                ReportFormatter::error_message(err, lookup),
                egui::Color32::LIGHT_RED,
            )),
        }
    }

    fn draw_main_panel(&mut self, ctx: &egui::Context) {
        let localizer = self.localizer.clone();
        let lookup = localizer.lookup(self.locale);
        let busy = self.pending.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("folder_grid")
                .num_columns(3)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    ui.label(lookup.text(MessageKey::LanguageLabel));
                    let mut selected = self.locale;
                    egui::ComboBox::from_id_salt("language")
                        .selected_text(selected.display_name())
                        .show_ui(ui, |ui| {
                            for locale in Locale::ALL {
                                ui.selectable_value(&mut selected, locale, locale.display_name());
                            }
                        });
                    self.change_language(ctx, selected);
                    ui.end_row();

                    ui.label("1");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.selection.first)
                            .desired_width(420.0),
                    );
                    if ui.button(lookup.text(MessageKey::SelectFirstFolder)).clicked() {
                        self.folder_selection_mode = Some(FolderSelectionMode::First);
                        self.file_dialog.pick_directory();
                    }
                    ui.end_row();

                    ui.label("2");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.selection.second)
                            .desired_width(420.0),
                    );
                    if ui.button(lookup.text(MessageKey::SelectSecondFolder)).clicked() {
                        self.folder_selection_mode = Some(FolderSelectionMode::Second);
                        self.file_dialog.pick_directory();
                    }
                    ui.end_row();
                });

            ui.add_space(10.0);

            ui.vertical_centered(|ui| {
                let compare_button = egui::Button::new(lookup.text(MessageKey::CompareFolders));
                if ui.add_enabled(!busy, compare_button).clicked() {
                    self.start_comparison(ctx);
                }

                ui.add_space(8.0);

                if busy {
                    ui.spinner();
                }
                if let Some((text, color)) = self.status_text(&lookup) {
                    ui.colored_label(color, text);
                }
            });
        });
    }

    fn draw_differences_window(&mut self, ctx: &egui::Context) {
        if !self.show_differences {
            return;
        }
        let Some(report) = &self.report else {
            self.show_differences = false;
            return;
        };

        let localizer = self.localizer.clone();
        let lookup = localizer.lookup(self.locale);
        let lines = ReportFormatter::format(report, &lookup);
        let summary = ReportFormatter::summary(report, &lookup);
        let compared_at = ReportFormatter::compared_at(report, &lookup);

        let mut open = true;
        let mut close_requested = false;

        egui::Window::new(lookup.text(MessageKey::DifferencesTitle))
            .id(egui::Id::new("differences_window"))
            .open(&mut open)
            .resizable(true)
            .default_width(640.0)
            .default_height(400.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(summary);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(compared_at);
                    });
                });

                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .max_height(ui.available_height() - 36.0)
                    .show(ui, |ui| {
                        for (i, line) in lines.iter().enumerate() {
                            egui::Frame::new()
                                .fill(if i % 2 == 0 {
                                    ui.visuals().faint_bg_color
                                } else {
                                    egui::Color32::TRANSPARENT
                                })
                                .inner_margin(4.0)
                                .show(ui, |ui| {
                                    ui.label(line);
                                });
                        }
                    });

                ui.separator();

                if ui.button(lookup.text(MessageKey::Close)).clicked() {
                    close_requested = true;
                }
            });

        self.show_differences = open && !close_requested;
    }

    fn handle_file_dialog(&mut self, ctx: &egui::Context) {
        self.file_dialog.update(ctx);

        if let Some(path) = self.file_dialog.take_picked() {
            if let Some(mode) = self.folder_selection_mode {
                let path = path.to_string_lossy().to_string();
                match mode {
                    FolderSelectionMode::First => self.selection.first = path,
                    FolderSelectionMode::Second => self.selection.second = path,
                }
            }
            self.folder_selection_mode = None;
        }
    }
}

impl App for MainPage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_comparison();

        if self.pending.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.draw_main_panel(ctx);
        self.draw_differences_window(ctx);
        self.handle_file_dialog(ctx);
    }
}
