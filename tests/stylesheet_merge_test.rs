use theme_etl::core::stylesheet::{
    merge, HEADER_IMPORT, JAKOB_DISPLAY_FONT, LEGACY_DISPLAY_FONT, UTILITIES_LAYER_OPEN,
};
use theme_etl::StylesheetMerger;

const DESIGN_SYSTEM: &str = r#"@font-face {
  font-family: "dT Jakob";
  src: url("/fonts/dTJakob-Regular.woff2") format("woff2");
  font-weight: 400;
}

@font-face {
  font-family: "dT Jakob";
  src: url("/fonts/dTJakob-Bold.woff2") format("woff2");
  font-weight: 700;
}

:root {
  --void-bg: #05070d;
  --void-fg: #f5f7fa;
}

body {
  background: var(--void-bg);
}

h1 {
  font-family: "dT Jakob", sans-serif;
}

h2 {
  letter-spacing: -0.02em;
}


.glass-panel {
  backdrop-filter: blur(12px);
}

@keyframes float {
  0% { transform: translateY(0); }
}
"#;

const THEME: &str = r#"@theme {
  --font-display: var(--font-inter, "Inter"), -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
  --color-blue-50: rgb(239 248 255);
  --color-blue-500: rgb(46 144 250);
  --color-brand-50: rgb(249 245 255);
  --color-brand-500: rgb(158 119 237);
  --color-brand-950: rgb(44 28 95);
}"#;

#[test]
fn test_end_to_end_scenario() {
    let theme = "--color-blue-100: #fff; --color-brand-100: #000;";
    let design_system = "@font-face{font-family:'X';} :root{--x:1;} .foo{color:red;}";

    let output = merge(theme, design_system).unwrap();

    assert!(output.contains("@font-face{font-family:'X';}"));
    assert!(output.contains("--color-brand-100: #fff;"));
    assert!(!output.contains("--color-brand-100: #000;"));
    assert!(!output.contains(":root"));

    let layer_start = output.find(UTILITIES_LAYER_OPEN).unwrap();
    let utilities = &output[layer_start..];
    assert!(utilities.contains(".foo{color:red;}"));
    assert!(utilities.ends_with("\n}\n"));
}

#[test]
fn test_merge_is_deterministic() {
    let merger = StylesheetMerger::new().unwrap();
    let first = merger.merge(THEME, DESIGN_SYSTEM);
    let second = merger.merge(THEME, DESIGN_SYSTEM);
    assert_eq!(first, second);
    assert_eq!(first, merge(THEME, DESIGN_SYSTEM).unwrap());
}

#[test]
fn test_design_system_without_font_faces() {
    let output = merge(THEME, ".btn { padding: 0; }").unwrap();

    assert!(output.starts_with(&format!("{}\n\n\n\n@theme {{", HEADER_IMPORT)));
    assert!(!output.contains("@font-face"));
    assert!(output.contains("@layer utilities {\n.btn { padding: 0; }\n}\n"));
}

#[test]
fn test_realistic_merge() {
    let merged = StylesheetMerger::new()
        .unwrap()
        .merge_with_report(THEME, DESIGN_SYSTEM);
    let css = &merged.css;

    assert_eq!(merged.report.font_faces, 2);
    assert_eq!(merged.report.stripped_blocks, 4);
    assert_eq!(merged.report.blue_shades, 2);
    assert_eq!(merged.report.rebranded, 2);
    assert!(merged.report.display_font_substituted);

    // font-face 區塊在 theme 之前
    let bold = css.find("dTJakob-Bold.woff2").unwrap();
    let regular = css.find("dTJakob-Regular.woff2").unwrap();
    let theme_start = css.find("@theme {").unwrap();
    assert!(regular < bold && bold < theme_start);

    assert!(css.contains("--color-brand-50: rgb(239 248 255);"));
    assert!(css.contains("--color-brand-500: rgb(46 144 250);"));
    assert!(css.contains("--color-brand-950: rgb(44 28 95);"));
    assert!(css.contains(JAKOB_DISPLAY_FONT));
    assert!(!css.contains(LEGACY_DISPLAY_FONT));

    assert!(!css.contains("--void-bg: #05070d"));
    assert!(!css.contains("letter-spacing"));
    assert!(css.contains(
        "@layer utilities {\n.glass-panel {\n  backdrop-filter: blur(12px);\n}\n@keyframes float {\n  0% { transform: translateY(0); }\n}\n}\n"
    ));
}

#[test]
fn test_theme_without_legacy_font_is_untouched() {
    let theme = "@theme {\n  --font-display: \"Inter\", sans-serif;\n}";
    let merged = StylesheetMerger::new().unwrap().merge_with_report(theme, "");

    assert!(!merged.report.display_font_substituted);
    assert!(merged.css.contains(theme));
    assert!(merged.css.ends_with("@layer utilities {\n\n}\n"));
}
