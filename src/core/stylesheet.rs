use crate::domain::model::{ColorTokenMap, MergeReport, MergedStylesheet};
use crate::utils::error::Result;
use regex::{Captures, Regex};

pub const HEADER_IMPORT: &str = r#"@import "tailwindcss";"#;
pub const UTILITIES_LAYER_OPEN: &str = "@layer utilities {";
pub const UTILITIES_LAYER_CLOSE: &str = "}";
pub const LEGACY_DISPLAY_FONT: &str = r#"--font-display: var(--font-inter, "Inter"), -apple-system, "Segoe UI", Roboto, Arial, sans-serif;"#;
pub const JAKOB_DISPLAY_FONT: &str =
    r#"--font-display: "dT Jakob", var(--font-inter, "Inter"), system-ui, sans-serif;"#;

/// 以正規表達式對未解析的 CSS 原文做合併。
///
/// 區塊比對只認得不含巢狀大括號的 `selector { ... }`，少了結尾大括號的
/// 區塊就不會被擷取或移除。
pub struct StylesheetMerger {
    font_face: Regex,
    structural: Vec<Regex>,
    blue_token: Regex,
    brand_token: Regex,
}

impl StylesheetMerger {
    pub fn new() -> Result<Self> {
        Ok(Self {
            font_face: Regex::new(r"@font-face\s*\{[^}]*\}")?,
            structural: vec![
                Regex::new(r":root\s*\{[^}]*\}")?,
                Regex::new(r"body\s*\{[^}]*\}")?,
                Regex::new(r"h[1-4]\s*\{[^}]*\}")?,
            ],
            blue_token: Regex::new(r"--color-blue-(\d+):\s*([^;]+);")?,
            brand_token: Regex::new(r"--color-brand-(\d+):\s*[^;]+;")?,
        })
    }

    pub fn merge(&self, theme: &str, design_system: &str) -> String {
        self.merge_with_report(theme, design_system).css
    }

    pub fn merge_with_report(&self, theme: &str, design_system: &str) -> MergedStylesheet {
        let (font_faces, design_system_body) = self.extract_font_faces(design_system);
        let (stripped, stripped_blocks) = self.strip_structural(&design_system_body);
        let utilities = compact_blank_lines(&stripped);

        let blues = self.collect_blue_shades(theme);
        let (theme, rebranded) = self.rebrand(theme, &blues);
        let (theme, display_font_substituted) = substitute_display_font(&theme);

        tracing::debug!(
            font_faces = font_faces.len(),
            stripped_blocks,
            blue_shades = blues.len(),
            rebranded,
            "Stylesheet transforms applied"
        );

        MergedStylesheet {
            css: reassemble(&font_faces, &theme, &utilities),
            report: MergeReport {
                font_faces: font_faces.len(),
                stripped_blocks,
                blue_shades: blues.len(),
                rebranded,
                display_font_substituted,
            },
        }
    }

    /// 取出所有 `@font-face` 區塊 (依原始順序)，並回傳移除後的剩餘內容
    pub fn extract_font_faces(&self, design_system: &str) -> (Vec<String>, String) {
        let blocks = self
            .font_face
            .find_iter(design_system)
            .map(|m| m.as_str().to_string())
            .collect();
        let body = self.font_face.replace_all(design_system, "").into_owned();
        (blocks, body)
    }

    /// Removes `:root`, `body` and single `h1`..`h4` blocks, in that order.
    pub fn strip_structural(&self, body: &str) -> (String, usize) {
        let mut text = body.to_string();
        let mut removed = 0;
        for pattern in &self.structural {
            let (next, count) = strip_standalone(pattern, &text);
            text = next;
            removed += count;
        }
        (text, removed)
    }

    pub fn collect_blue_shades(&self, theme: &str) -> ColorTokenMap {
        let mut blues = ColorTokenMap::default();
        for caps in self.blue_token.captures_iter(theme) {
            blues.insert(&caps[1], caps[2].trim());
        }
        blues
    }

    pub fn rebrand(&self, theme: &str, blues: &ColorTokenMap) -> (String, usize) {
        let mut rebranded = 0;
        let text = self
            .brand_token
            .replace_all(theme, |caps: &Captures| {
                let shade = &caps[1];
                match blues.get(shade) {
                    Some(value) => {
                        rebranded += 1;
                        format!("--color-brand-{}: {};", shade, value)
                    }
                    None => caps[0].to_string(),
                }
            })
            .into_owned();
        (text, rebranded)
    }
}

// 選擇器前面只能是文件開頭、區塊邊界或註解結尾，
// 這樣 `h1, h2 { }` 這類選擇器清單與 `.card-body { }` 都不會被比對到
fn strip_standalone(pattern: &Regex, text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut removed = 0;

    for m in pattern.find_iter(text) {
        if !is_selector_start(&text[..m.start()]) {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        last = m.end();
        removed += 1;
    }
    out.push_str(&text[last..]);

    (out, removed)
}

fn is_selector_start(preceding: &str) -> bool {
    let preceding = preceding.trim_end();
    preceding.is_empty() || preceding.ends_with(&['{', '}', ';'][..]) || preceding.ends_with("*/")
}

pub fn compact_blank_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 只做完全相符的字串替換，空白有任何差異都不會動
pub fn substitute_display_font(theme: &str) -> (String, bool) {
    if theme.contains(LEGACY_DISPLAY_FONT) {
        (theme.replace(LEGACY_DISPLAY_FONT, JAKOB_DISPLAY_FONT), true)
    } else {
        (theme.to_string(), false)
    }
}

fn reassemble(font_faces: &[String], theme: &str, utilities: &str) -> String {
    let mut css = String::new();
    css.push_str(HEADER_IMPORT);
    css.push_str("\n\n");
    css.push_str(&font_faces.join("\n\n"));
    css.push_str("\n\n");
    css.push_str(theme);
    css.push_str("\n\n");
    css.push_str(UTILITIES_LAYER_OPEN);
    css.push('\n');
    css.push_str(utilities);
    css.push('\n');
    css.push_str(UTILITIES_LAYER_CLOSE);
    css.push('\n');
    css
}

/// Convenience wrapper building a fresh merger for one call.
pub fn merge(theme: &str, design_system: &str) -> Result<String> {
    Ok(StylesheetMerger::new()?.merge(theme, design_system))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merger() -> StylesheetMerger {
        StylesheetMerger::new().unwrap()
    }

    #[test]
    fn test_extract_font_faces_in_order() {
        let css = "@font-face { font-family: 'A'; }\n.x { color: red; }\n@font-face{font-family:'B';}";
        let (blocks, body) = merger().extract_font_faces(css);

        assert_eq!(
            blocks,
            vec![
                "@font-face { font-family: 'A'; }".to_string(),
                "@font-face{font-family:'B';}".to_string()
            ]
        );
        assert_eq!(body, "\n.x { color: red; }\n");
    }

    #[test]
    fn test_font_face_selector_is_case_sensitive() {
        let (blocks, body) = merger().extract_font_faces("@FONT-FACE { a: b; }");
        assert!(blocks.is_empty());
        assert_eq!(body, "@FONT-FACE { a: b; }");
    }

    #[test]
    fn test_unclosed_block_is_left_alone() {
        let css = "@font-face { font-family: 'A';";
        let (blocks, body) = merger().extract_font_faces(css);
        assert!(blocks.is_empty());
        assert_eq!(body, css);
    }

    #[test]
    fn test_nested_font_face_is_cut_at_first_closing_brace() {
        let css = "@font-face { x: { } }\n.a { b: c; }";
        let (blocks, body) = merger().extract_font_faces(css);

        assert_eq!(blocks, vec!["@font-face { x: { }".to_string()]);
        assert_eq!(body, " }\n.a { b: c; }");
    }

    #[test]
    fn test_heading_inside_media_query_leaves_wrapper() {
        let css = "@media (x) {\n  h1 { a: b; }\n}\n.foo { c: d; }";
        let (text, removed) = merger().strip_structural(css);

        assert_eq!(removed, 1);
        assert_eq!(text, "@media (x) {\n  \n}\n.foo { c: d; }");
        assert_eq!(compact_blank_lines(&text), "@media (x) {\n}\n.foo { c: d; }");
    }

    #[test]
    fn test_strip_structural_blocks() {
        let css = ":root { --x: 1; }\nbody { margin: 0; }\nh1 { font-size: 2rem; }\nh4{a:b}\n.card { padding: 1rem; }";
        let (text, removed) = merger().strip_structural(css);

        assert_eq!(removed, 4);
        assert!(!text.contains(":root"));
        assert!(!text.contains("margin"));
        assert!(!text.contains("font-size"));
        assert!(text.contains(".card { padding: 1rem; }"));
    }

    #[test]
    fn test_selector_lists_are_not_stripped() {
        let css = "h1, h2 { font-weight: 700; }\n.card-body { padding: 0; }\nh5 { x: y; }";
        let (text, removed) = merger().strip_structural(css);

        assert_eq!(removed, 0);
        assert_eq!(text, css);
    }

    #[test]
    fn test_compact_blank_lines() {
        assert_eq!(compact_blank_lines("a\n\n\nb\n"), "a\nb");
        assert_eq!(compact_blank_lines("  .x {\n   \n    color: red;\n  }"), "  .x {\n    color: red;\n  }");
        assert_eq!(compact_blank_lines(""), "");
    }

    #[test]
    fn test_rebrand_uses_blue_values() {
        let theme = "--color-blue-500: #112233;\n--color-brand-500: #000000;";
        let m = merger();
        let blues = m.collect_blue_shades(theme);
        let (text, rebranded) = m.rebrand(theme, &blues);

        assert_eq!(rebranded, 1);
        assert!(text.contains("--color-brand-500: #112233;"));
        assert!(!text.contains("#000000"));
    }

    #[test]
    fn test_rebrand_passes_unknown_shades_through() {
        let theme = "--color-blue-500: #112233;\n--color-brand-999: #abcdef;";
        let m = merger();
        let blues = m.collect_blue_shades(theme);
        let (text, rebranded) = m.rebrand(theme, &blues);

        assert_eq!(rebranded, 0);
        assert_eq!(text, theme);
    }

    #[test]
    fn test_blue_values_are_trimmed_and_last_write_wins() {
        let theme = "--color-blue-100:   #aaa  ;\n--color-blue-100: #bbb;";
        let blues = merger().collect_blue_shades(theme);
        assert_eq!(blues.len(), 1);
        assert_eq!(blues.get("100"), Some("#bbb"));

        let blues = merger().collect_blue_shades("--color-blue-200:   #aaa  ;");
        assert_eq!(blues.get("200"), Some("#aaa"));
    }

    #[test]
    fn test_display_font_exact_literal() {
        let theme = format!("@theme {{\n  {}\n}}", LEGACY_DISPLAY_FONT);
        let (text, substituted) = substitute_display_font(&theme);
        assert!(substituted);
        assert!(text.contains(JAKOB_DISPLAY_FONT));
        assert!(!text.contains(LEGACY_DISPLAY_FONT));

        let spaced = LEGACY_DISPLAY_FONT.replace(", -apple-system", ",  -apple-system");
        let (text, substituted) = substitute_display_font(&spaced);
        assert!(!substituted);
        assert_eq!(text, spaced);
    }

    #[test]
    fn test_reassembly_layout() {
        let css = merger().merge("@theme { --x: 1; }", ".a { b: c; }");
        assert_eq!(
            css,
            "@import \"tailwindcss\";\n\n\n\n@theme { --x: 1; }\n\n@layer utilities {\n.a { b: c; }\n}\n"
        );
    }
}
