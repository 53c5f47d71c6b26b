//! Post-processing hooks for rendered code fences.
//!
//! The engine renders fenced code samples to HTML and hands each block to
//! [`postprocess_fence`] together with the page's locale code. Both passes
//! are pure string transforms with no failure modes.

use std::sync::LazyLock;

use regex::Regex;

use crate::locale::copy_button_label;

/// Escaped form writers use to show a fence without opening one.
const ESCAPED_FENCE: &str = "\\```";

/// The literal fence marker the escape stands for.
const FENCE: &str = "```";

// The engine renders the copy control as `<button class="copy" title="...">`,
// with attribute order unspecified.
static COPY_BUTTON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<button[^>]*\bclass="copy"[^>]*>"#).expect("copy button pattern")
});

static TITLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\stitle="[^"]*""#).expect("title attribute pattern"));

/// Replace the copy button label in rendered fence markup with the
/// translation for `locale_code`.
///
/// Unknown codes fall back to the default English label, and markup without
/// a copy button is returned unchanged.
pub fn localize_copy_button(html: &str, locale_code: &str) -> String {
    let label = copy_button_label(locale_code);
    COPY_BUTTON
        .replace_all(html, |caps: &regex::Captures<'_>| {
            TITLE_ATTR
                .replace(&caps[0], format!(r#" title="{label}""#).as_str())
                .into_owned()
        })
        .into_owned()
}

/// Restore escaped fence markers to the literal fence-opening sequence.
///
/// Example documents write `\`\`\`` behind a backslash so the renderer does
/// not open a block; the rendered markup still carries the backslash, which
/// this pass removes. Applying the pass to markup already free of the
/// escaped form is a no-op.
pub fn restore_escaped_fences(html: &str) -> String {
    html.replace(ESCAPED_FENCE, FENCE)
}

/// Run both fence passes: restore escaped markers, then localize the copy
/// button for `locale_code`.
pub fn postprocess_fence(html: &str, locale_code: &str) -> String {
    localize_copy_button(&restore_escaped_fences(html), locale_code)
}
