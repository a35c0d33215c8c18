//! HTML rendering of styled runs.
//!
//! Runs become `<span>` elements carrying `c-<color>` and `s-<code>` classes
//! for the host stylesheet. Obfuscated runs are expanded per character into
//! a two-layer grid: a hidden copy of the true glyph that fixes the layout,
//! and a visible `obfuscated` span with a `data-width` bucket that the
//! animator rewrites.

use std::fmt::Write;

use loretip_style::StyleFlags;

use crate::glyph::char_width;
use crate::markup::StyledRun;

/// Configuration for HTML export.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    /// Emit `color:#rrggbb` inline in addition to the color class.
    pub inline_colors: bool,
    /// Seconds between the chroma phases of consecutive chroma runs.
    pub chroma_step: f64,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self {
            inline_colors: false,
            chroma_step: 0.3,
        }
    }
}

impl HtmlExporter {
    /// Render a single line of runs.
    #[must_use]
    pub fn export_runs(&self, runs: &[StyledRun]) -> String {
        let mut out = String::new();
        let mut chroma_index = 0;
        self.write_runs(&mut out, runs, &mut chroma_index);
        out
    }

    /// Render a title and lore lines as tooltip content.
    ///
    /// The lore container is omitted when there are no lore lines.
    #[must_use]
    pub fn export_tooltip(&self, title: &[StyledRun], lore: &[Vec<StyledRun>]) -> String {
        let mut out = String::from("<div class=\"tooltip-content\">");
        let mut chroma_index = 0;

        out.push_str("<div class=\"tooltip-title\">");
        self.write_runs(&mut out, title, &mut chroma_index);
        out.push_str("</div>");

        if !lore.is_empty() {
            out.push_str("<div class=\"tooltip-lore\">");
            for line in lore {
                self.write_runs(&mut out, line, &mut chroma_index);
                out.push_str("<br>");
            }
            out.push_str("</div>");
        }

        out.push_str("</div>");
        out
    }

    fn write_runs(&self, out: &mut String, runs: &[StyledRun], chroma_index: &mut usize) {
        for run in runs {
            let classes = self.classes(run);
            let color_style = if self.inline_colors {
                format!("color:{};", run.color().rgb().to_hex())
            } else {
                String::new()
            };

            if run.flags().contains(StyleFlags::CHROMA) {
                *chroma_index += 1;
                let delay = *chroma_index as f64 * self.chroma_step;
                let _ = write!(
                    out,
                    "<span class=\"{classes}\" style=\"{color_style}animation-delay:-{delay:.1}s;\">"
                );
                html_escape_into(out, &run.text);
                out.push_str("</span>");
            } else if run.is_obfuscated() {
                for c in run.text.chars() {
                    if c == ' ' {
                        let _ = write!(out, "<span class=\"{classes}\"> </span>");
                        continue;
                    }
                    let mut glyph = [0u8; 4];
                    let glyph = html_escape(c.encode_utf8(&mut glyph));
                    let _ = write!(
                        out,
                        concat!(
                            "<span style=\"display:inline-grid;vertical-align:bottom;\">",
                            "<span class=\"{classes}\" style=\"{color}grid-area:1/1;visibility:hidden;\">{glyph}</span>",
                            "<span class=\"obfuscated {classes}\" style=\"{color}grid-area:1/1;text-align:center;\" data-width=\"{width}\">{glyph}</span>",
                            "</span>"
                        ),
                        classes = classes,
                        color = color_style,
                        glyph = glyph,
                        width = char_width(c),
                    );
                }
            } else {
                if color_style.is_empty() {
                    let _ = write!(out, "<span class=\"{classes}\">");
                } else {
                    let _ = write!(out, "<span class=\"{classes}\" style=\"{color_style}\">");
                }
                html_escape_into(out, &run.text);
                out.push_str("</span>");
            }
        }
    }

    fn classes(&self, run: &StyledRun) -> String {
        let mut classes = format!("c-{}", run.color().as_char());
        for code in run.flags().code_chars() {
            classes.push_str(" s-");
            classes.push(code);
        }
        classes
    }
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    html_escape_into(&mut out, s);
    out
}

/// HTML-escape a string into the output buffer.
fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
