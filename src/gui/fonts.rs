// src/gui/fonts.rs
//
// egui's bundled fonts carry no CJK glyphs. Pick up a system font as a
// fallback so the Chinese labels render.
use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CANDIDATES: &[&str] = &[
    // Windows
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simhei.ttf",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];

pub fn install_cjk_fallback(ctx: &egui::Context) {
    let Some((path, bytes)) = CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
    else {
        logd!("Fonts: no CJK font found, using egui defaults");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(s!("cjk"), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!("cjk"));
    }
    ctx.set_fonts(fonts);
    logf!("Fonts: CJK fallback from {path}");
}
