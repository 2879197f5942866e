//! Terminal presentation of the simplifier view.

use parking_lot::Mutex;
use serde_json::json;
use std::io::Write;
use ts_core::Stats;
use ts_session::{RemovedEntry, Surface, ViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain,
    /// One JSON object per repaint.
    Json,
}

/// The regions that change when a response is applied or the view is cleared.
type Display = (String, Stats, Vec<RemovedEntry>);

fn display_of(view: &ViewModel) -> Display {
    (view.output.clone(), view.stats, view.removed.clone())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repaint {
    /// Print whenever the output regions change.
    OnChange,
    /// Never print on render; the caller prints the final view.
    Never,
}

/// Terminal [`Surface`]. Alerts always go to stderr. Input and control
/// changes alone are never echoed.
pub struct TerminalSurface {
    format: Format,
    repaint: Repaint,
    last: Mutex<Display>,
}

impl TerminalSurface {
    /// Repaints every time the displayed regions change (watch mode).
    pub fn follow(format: Format) -> Self {
        Self::with_repaint(format, Repaint::OnChange)
    }

    /// Stays quiet on render. One-shot runs print the applied view with
    /// [`print`](TerminalSurface::print), so an empty result is still shown.
    pub fn one_shot(format: Format) -> Self {
        Self::with_repaint(format, Repaint::Never)
    }

    fn with_repaint(format: Format, repaint: Repaint) -> Self {
        Self { format, repaint, last: Mutex::new(display_of(&ViewModel::default())) }
    }

    /// Text to print for this render, if any.
    fn frame(&self, view: &ViewModel) -> Option<String> {
        if self.repaint == Repaint::Never {
            return None;
        }
        let display = display_of(view);
        let mut last = self.last.lock();
        if *last == display {
            return None;
        }
        *last = display;
        Some(self.text(view))
    }

    fn text(&self, view: &ViewModel) -> String {
        match self.format {
            Format::Plain => format_plain(view),
            Format::Json => format_json(view),
        }
    }

    /// Print `view` unconditionally.
    pub fn print(&self, view: &ViewModel) {
        write_stdout(&self.text(view));
    }
}

fn write_stdout(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{text}");
    let _ = stdout.flush();
}

impl Surface for TerminalSurface {
    fn render(&self, view: &ViewModel) {
        if let Some(text) = self.frame(view) {
            write_stdout(&text);
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

pub fn format_plain(view: &ViewModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} | {}\n", view.ratio_label, view.threshold_label));
    out.push_str("--- output ---\n");
    out.push_str(&view.output);
    out.push('\n');
    out.push_str(&format!(
        "--- stats ---\noriginal {} | simplified {} | reduction {}%\n",
        view.stats.orig_len, view.stats.new_len, view.stats.reduction
    ));
    out.push_str("--- removed ---");
    for entry in &view.removed {
        out.push_str("\n  - ");
        out.push_str(entry.text());
    }
    out
}

pub fn format_json(view: &ViewModel) -> String {
    json!({
        "output": view.output,
        "stats": view.stats,
        "removed": view.removed_items().collect::<Vec<_>>(),
        "controls": view.controls,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::SimplifyResponse;

    fn sample() -> ViewModel {
        let mut view = ViewModel::default();
        view.apply_response(&SimplifyResponse::new("abc", 10, 3, vec!["x".into(), "y".into()]));
        view
    }

    fn empty_result() -> ViewModel {
        let mut view = ViewModel::default();
        view.apply_response(&SimplifyResponse::new("", 0, 0, Vec::new()));
        view
    }

    #[test]
    fn test_follow_repaints_on_change_only() {
        let surface = TerminalSurface::follow(Format::Plain);
        assert!(surface.frame(&ViewModel::default()).is_none());
        assert!(surface.frame(&sample()).is_some());
        assert!(surface.frame(&sample()).is_none());
        let mut edited = sample();
        edited.input = "typing".into();
        assert!(surface.frame(&edited).is_none());
        assert!(surface.frame(&ViewModel::default()).is_some());
    }

    #[test]
    fn test_one_shot_never_repaints() {
        let surface = TerminalSurface::one_shot(Format::Json);
        assert!(surface.frame(&ViewModel::default()).is_none());
        assert!(surface.frame(&sample()).is_none());
    }

    #[test]
    fn test_empty_result_still_has_text() {
        let view = empty_result();
        let plain = TerminalSurface::one_shot(Format::Plain).text(&view);
        assert!(plain.contains("original 0 | simplified 0 | reduction 0%"));
        let json = TerminalSurface::one_shot(Format::Json).text(&view);
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["output"], "");
        assert_eq!(v["removed"], json!([]));
    }

    #[test]
    fn test_plain_lists_everything() {
        let text = format_plain(&sample());
        assert!(text.starts_with("Keep 60% | Similarity threshold 0.80\n"));
        assert!(text.contains("--- output ---\nabc\n"));
        assert!(text.contains("original 10 | simplified 3 | reduction 70%"));
        assert!(text.ends_with("--- removed ---\n  - x\n  - y"));
    }

    #[test]
    fn test_plain_placeholder() {
        let text = format_plain(&ViewModel::default());
        assert!(text.ends_with("--- removed ---\n  - (none)"));
    }

    #[test]
    fn test_json_skips_placeholder() {
        let v: serde_json::Value = serde_json::from_str(&format_json(&ViewModel::default())).unwrap();
        assert_eq!(v["removed"], json!([]));
        let v: serde_json::Value = serde_json::from_str(&format_json(&sample())).unwrap();
        assert_eq!(v["output"], "abc");
        assert_eq!(v["stats"]["reduction"], 70);
        assert_eq!(v["removed"], json!(["x", "y"]));
        assert_eq!(v["controls"]["ratio"], 40);
    }
}
