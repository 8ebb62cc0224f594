use eframe::egui;
use font_kit::family_name::FamilyName;
use font_kit::properties::{Properties, Stretch, Style, Weight};
use font_kit::source::SystemSource;
use std::sync::Arc;

const UI_FAMILIES: [&str; 5] = ["Segoe UI", "Noto Sans", "DejaVu Sans", "Helvetica Neue", "Arial"];
const SYMBOL_FAMILIES: [&str; 3] = ["Segoe UI Symbol", "Segoe UI Emoji", "Noto Color Emoji"];

/// Prefers an installed UI font over egui's bundled one; egui's defaults stay as fallback.
pub fn setup_system_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let system_source = SystemSource::new();

    let regular = Properties {
        weight: Weight::NORMAL,
        style: Style::Normal,
        stretch: Stretch::NORMAL,
    };

    if let Some(font_data) = load_family(&system_source, &UI_FAMILIES, &regular) {
        fonts
            .font_data
            .insert("system_ui".to_owned(), Arc::new(font_data));
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .insert(0, "system_ui".to_owned());
    }

    if let Some(font_data) = load_family(&system_source, &SYMBOL_FAMILIES, &Properties::default()) {
        fonts
            .font_data
            .insert("system_symbols".to_owned(), Arc::new(font_data));
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push("system_symbols".to_owned());
    }

    ctx.set_fonts(fonts);
}

fn load_family(
    system_source: &SystemSource,
    families: &[&str],
    properties: &Properties,
) -> Option<egui::FontData> {
    let families: Vec<FamilyName> = families
        .iter()
        .map(|family| FamilyName::Title(family.to_string()))
        .collect();
    let handle = system_source.select_best_match(&families, properties).ok()?;
    let font = handle.load().ok()?;
    let font_data = font.copy_font_data()?;
    Some(egui::FontData::from_owned(font_data.to_vec()))
}
