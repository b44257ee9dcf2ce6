//! Color palette for the APAC page.
//!
//! Blue-to-purple brand gradient over soft slate backgrounds.

// === BRAND ===
pub const BRAND_BLUE: &str = "#2563eb";
pub const BRAND_BLUE_DARK: &str = "#1d4ed8";
pub const BRAND_PURPLE: &str = "#9333ea";
pub const BRAND_PURPLE_DARK: &str = "#7e22ce";
pub const BRAND_TINT: &str = "#eff6ff";

// === SURFACES ===
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_SLATE: &str = "#f8fafc";
pub const BORDER: &str = "#e2e8f0";
pub const FOOTER: &str = "#111827";

// === TEXT ===
pub const TEXT_STRONG: &str = "#111827";
pub const TEXT_BODY: &str = "#374151";
pub const TEXT_MUTED: &str = "#4b5563";
pub const TEXT_FAINT: &str = "#9ca3af";

// === ACCENTS ===
pub const GOLD: &str = "#eab308";
pub const GREEN: &str = "#16a34a";

/// CSS custom property name and value for every palette entry.
const PALETTE: [(&str, &str); 15] = [
    ("brand-blue", BRAND_BLUE),
    ("brand-blue-dark", BRAND_BLUE_DARK),
    ("brand-purple", BRAND_PURPLE),
    ("brand-purple-dark", BRAND_PURPLE_DARK),
    ("brand-tint", BRAND_TINT),
    ("surface", SURFACE),
    ("surface-slate", SURFACE_SLATE),
    ("border", BORDER),
    ("footer", FOOTER),
    ("text-strong", TEXT_STRONG),
    ("text-body", TEXT_BODY),
    ("text-muted", TEXT_MUTED),
    ("text-faint", TEXT_FAINT),
    ("gold", GOLD),
    ("green", GREEN),
];

/// `:root` block declaring the palette as CSS custom properties.
pub fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in PALETTE {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variables_declares_palette() {
        let css = root_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--brand-blue: #2563eb;"));
        assert!(css.contains("--footer: #111827;"));
        assert_eq!(css.matches("--").count(), PALETTE.len());
    }
}
