//! Vertical bar chart written as a single-page PDF.

use crate::report::comparison::ComparisonReport;
use crate::utils::fmt_percentage;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

type Rgb = (f32, f32, f32);

const BAR_COLOR: Rgb = (0.12, 0.47, 0.71);
const HIGHLIGHT_COLOR: Rgb = (0.17, 0.63, 0.17);
const REFERENCE_COLOR: Rgb = (0.84, 0.15, 0.16);

pub struct ChartPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_id: Ref,
    content_id: Ref,
    font_id: Ref,

    page_w: f32,
    page_h: f32,
    margin: f32,
    /// Space below the plot for the rotated participant names.
    label_band: f32,

    font_size: f32,
    title_font_size: f32,
}

impl Default for ChartPdf {
    fn default() -> Self {
        Self::new()
    }
}

/// Type1 Helvetica only covers Latin-1; anything else becomes '?'.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

impl ChartPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // fixed object ids for the single-page chart
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_id = Ref::new(4);
        let content_id = Ref::new(5);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_id,
            content_id,
            font_id,

            // A4 landscape
            page_w: 842.0,
            page_h: 595.0,
            margin: 60.0,
            label_band: 90.0,

            font_size: 9.0,
            title_font_size: 16.0,
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        self.draw_text_rotated(content, x, y, size, 0.0, text);
    }

    fn draw_text_rotated(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        degrees: f32,
        text: &str,
    ) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let bytes = latin1(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([cos, sin, -sin, cos, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn fill_rect(&self, content: &mut Content, rect: (f32, f32, f32, f32), color: Rgb) {
        content.save_state();
        content.set_fill_rgb(color.0, color.1, color.2);
        content.rect(rect.0, rect.1, rect.2, rect.3);
        content.fill_nonzero();
        content.restore_state();
    }

    fn line(
        &self,
        content: &mut Content,
        from: (f32, f32),
        to: (f32, f32),
        color: Rgb,
        width: f32,
    ) {
        content.save_state();
        content.set_stroke_rgb(color.0, color.1, color.2);
        content.set_line_width(width);
        content.move_to(from.0, from.1);
        content.line_to(to.0, to.1);
        content.stroke();
        content.restore_state();
    }

    /// Draw the whole chart on the single page.
    pub fn draw(&mut self, report: &ComparisonReport, title: &str) {
        let mut content = Content::new();

        let plot_x = self.margin + 20.0;
        let plot_y = self.margin + self.label_band;
        let plot_w = self.page_w - plot_x - self.margin;
        let plot_h = self.page_h - plot_y - self.margin - 30.0;
        let y_for = |v: f64| plot_y + (v.clamp(0.0, 100.0) as f32 / 100.0) * plot_h;

        // Title
        self.draw_text(
            &mut content,
            plot_x,
            self.page_h - self.margin,
            self.title_font_size,
            title,
        );

        // Y axis, ticks every 20%
        let grey = (0.4, 0.4, 0.4);
        let origin = (plot_x, plot_y);
        self.line(&mut content, origin, (plot_x, plot_y + plot_h), grey, 1.0);
        self.line(&mut content, origin, (plot_x + plot_w, plot_y), grey, 1.0);
        for tick in (0..=100).step_by(20) {
            let y = y_for(tick as f64);
            self.line(&mut content, (plot_x - 4.0, y), (plot_x, y), grey, 1.0);
            let label = tick.to_string();
            self.draw_text(&mut content, plot_x - 24.0, y - 3.0, self.font_size, &label);
        }
        self.draw_text_rotated(
            &mut content,
            self.margin - 22.0,
            plot_y + plot_h / 2.0 - 25.0,
            self.font_size + 1.0,
            90.0,
            "Score (%)",
        );
        self.draw_text(
            &mut content,
            plot_x + plot_w / 2.0 - 30.0,
            self.margin - 30.0,
            self.font_size + 1.0,
            "Participants",
        );

        // Bars + rotated category labels
        let n = report.bars.len().max(1) as f32;
        let slot = plot_w / n;
        let bar_w = (slot * 0.7).max(1.0);
        for (i, bar) in report.bars.iter().enumerate() {
            let x = plot_x + slot * i as f32 + (slot - bar_w) / 2.0;
            let h = y_for(bar.value) - plot_y;
            let color = if report.highlight == Some(i) {
                HIGHLIGHT_COLOR
            } else {
                BAR_COLOR
            };
            self.fill_rect(&mut content, (x, plot_y, bar_w, h), color);
            self.draw_text_rotated(
                &mut content,
                x + bar_w / 2.0,
                plot_y - 10.0,
                self.font_size,
                -45.0,
                &bar.label,
            );
        }

        // Dashed reference line
        let ref_y = y_for(report.reference);
        content.save_state();
        content.set_dash_pattern([6.0, 4.0], 0.0);
        content.set_stroke_rgb(REFERENCE_COLOR.0, REFERENCE_COLOR.1, REFERENCE_COLOR.2);
        content.set_line_width(1.5);
        content.move_to(plot_x, ref_y);
        content.line_to(plot_x + plot_w, ref_y);
        content.stroke();
        content.restore_state();

        // Legend (top right)
        let lx = self.page_w - self.margin - 170.0;
        let ly = self.page_h - self.margin - 4.0;
        let (from, to) = ((lx, ly + 3.0), (lx + 20.0, ly + 3.0));
        self.line(&mut content, from, to, REFERENCE_COLOR, 1.5);
        let pct = fmt_percentage(report.reference);
        let legend = format!("{} ({})", report.reference_label, pct);
        self.draw_text(&mut content, lx + 26.0, ly, self.font_size, &legend);
        if report.highlight.is_some() {
            let size = self.font_size;
            self.fill_rect(&mut content, (lx, ly - 16.0, 20.0, 8.0), HIGHLIGHT_COLOR);
            self.draw_text(&mut content, lx + 26.0, ly - 16.0, size, "Current attempt");
        }

        {
            let mut page = self.pdf.page(self.page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(self.content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.pdf.stream(self.content_id, &content.finish());
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf.pages(self.pages_id).count(1).kids([self.page_id]);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Render `report` to `path`.
pub fn write_chart(report: &ComparisonReport, path: &Path) -> std::io::Result<()> {
    let mut chart = ChartPdf::new();
    chart.draw(report, "Quiz Results Comparison");
    chart.save(path)
}
