//! HTML for the page
//!
//! Output depends only on the view model, so the exported document and the
//! markup the wasm module produces on start are byte-identical.

use std::fmt::Write;

use glam::Vec2;

use super::model::{AcceptedView, AskingView, Subtree, ViewModel};
use crate::consts::HEART_COLOR;
use crate::layout::{DecorationDescriptor, HeartSize};

/// Decorative glyph
const HEART: &str = "❤️";

/// Element ids the host binding looks up
pub mod ids {
    pub const ROOT: &str = "proposal";
    pub const STAGE: &str = "stage";
    pub const SCATTER: &str = "scatter";
    pub const CARD: &str = "ask-card";
    pub const YES: &str = "yes-btn";
    pub const NO: &str = "no-btn";
    pub const NO_LABEL: &str = "no-label";
}

/// Classes driving the subtree cross-fade
pub mod transition {
    pub const SUBTREE: &str = "subtree";
    pub const ENTER: &str = "subtree-enter";
    pub const EXIT: &str = "subtree-exit";
    /// Matches the CSS exit animation
    pub const EXIT_MS: i32 = 300;
}

/// Escape text for element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// CSS transform for the No button offset
pub fn no_button_transform(offset: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

/// Complete static document around the page body.
///
/// `config_json` is embedded for the wasm module to read back, so an
/// exported page and its live module agree on counts and assets.
pub fn render_document(model: &ViewModel, config_json: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Will You Be My Valentine?</title>
<link rel="stylesheet" href="./style.css">
<script src="https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js"></script>
<script id="{config_id}" type="application/json">{config}</script>
</head>
<body>
<div id="app">{body}</div>
<script type="module">import init from "./valentine_proposal.js"; init();</script>
</body>
</html>
"#,
        config_id = crate::config::PageConfig::ELEMENT_ID,
        config = config_json.replace("</", "<\\/"),
        body = render_page(model)
    )
}

/// Full page body: rising layer plus the proposal container
pub fn render_page(model: &ViewModel) -> String {
    let mut html = String::new();
    html.push_str(&render_rising_layer(&model.rising));
    let _ = write!(
        html,
        r#"<div id="{root}" class="relative flex h-screen w-full flex-col items-center justify-center p-4 overflow-hidden romantic-gradient font-display">"#,
        root = ids::ROOT
    );
    html.push_str(&render_header());
    let _ = write!(
        html,
        r#"<main id="{stage}" class="relative z-10 w-full max-w-[500px] flex flex-col items-center gap-4">"#,
        stage = ids::STAGE
    );
    // First paint fades the card in too
    html.push_str(&render_subtree(&model.subtree, true));
    html.push_str("</main>");
    html.push_str(
        r#"<div class="stack-card -rotate-2" aria-hidden="true"></div><div class="stack-card rotate-2" aria-hidden="true"></div>"#,
    );
    html.push_str("</div>");
    html
}

/// One subtree; `entering` adds the enter animation class
pub fn render_subtree(subtree: &Subtree, entering: bool) -> String {
    match subtree {
        Subtree::Asking(ask) => render_asking(ask, entering),
        Subtree::Accepted(acc) => render_accepted(acc, entering),
    }
}

fn subtree_class(extra: &str, entering: bool) -> String {
    if entering {
        format!("{} {} {}", transition::SUBTREE, transition::ENTER, extra)
    } else {
        format!("{} {}", transition::SUBTREE, extra)
    }
}

fn render_header() -> String {
    r#"<div class="fixed top-0 w-full max-w-[960px] mx-auto z-10"><header class="flex items-center justify-between px-6 py-3"><div class="flex items-center gap-2 text-[#181112]"><div class="size-5 text-primary" aria-hidden="true"><svg fill="none" viewBox="0 0 48 48" xmlns="http://www.w3.org/2000/svg"><path clip-rule="evenodd" d="M47.2426 24L24 47.2426L0.757355 24L24 0.757355L47.2426 24ZM12.2426 21H35.7574L24 9.24264L12.2426 21Z" fill="currentColor" fill-rule="evenodd"></path></svg></div><h2 class="text-base font-bold leading-tight tracking-tight">Special Moments For Someone Special</h2></div><button class="flex size-8 items-center justify-center rounded-full bg-white shadow-sm text-primary"><span class="material-symbols-outlined text-lg">favorite</span></button></header></div>"#
        .to_string()
}

fn render_illustration(path: &str, glow: &str) -> String {
    format!(
        r#"<div class="w-full aspect-square max-w-[200px] mb-4 relative"><div class="absolute inset-0 {glow} rounded-full blur-2xl"></div><div class="relative w-full h-full bg-center bg-no-repeat bg-contain" style="background-image: url(&quot;{path}&quot;)"></div></div>"#,
        glow = glow,
        path = escape(path)
    )
}

fn render_asking(ask: &AskingView, entering: bool) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="{class}" data-phase="asking">"#,
        class = subtree_class("w-full", entering)
    );
    html.push_str(&render_scatter_layer(&ask.hearts));
    let _ = write!(
        html,
        r#"<div id="{card}" class="relative flex flex-col items-center justify-center rounded-xl bg-white shadow-xl p-6 border border-primary/5">"#,
        card = ids::CARD
    );
    html.push_str(&render_illustration(&ask.illustration, "bg-primary/5"));
    html.push_str(
        r#"<div class="text-center mb-6"><h1 class="text-[#181112] tracking-tight text-3xl md:text-4xl font-bold leading-tight mb-2">Will You Please Be My <span class="text-primary">Valentine?</span></h1><p class="text-[#896168] text-base">I&#39;ve been thinking of asking you this for a while...</p></div>"#,
    );
    html.push_str(r#"<div class="flex flex-col sm:flex-row items-center justify-center gap-3 w-full px-4 relative min-h-[80px]">"#);
    let _ = write!(
        html,
        r#"<button id="{yes}" class="yes-btn group flex min-w-[180px] cursor-pointer items-center justify-center gap-2 rounded-full h-12 px-8 bg-primary text-white text-lg font-bold shadow-md z-20"><span class="truncate">Yes!</span><span class="material-symbols-outlined">favorite</span></button>"#,
        yes = ids::YES
    );
    let _ = write!(
        html,
        r#"<button id="{no}" class="no-btn flex min-w-[100px] cursor-pointer items-center justify-center rounded-full h-10 px-6 bg-background-light border border-zinc-200 text-[#181112] text-sm font-medium whitespace-nowrap" style="transform: {transform}"><span id="{label_id}" class="truncate">{label}</span></button>"#,
        no = ids::NO,
        transform = no_button_transform(ask.no_offset),
        label_id = ids::NO_LABEL,
        label = escape(&ask.label)
    );
    html.push_str("</div></div>");
    html.push_str(
        r#"<div class="flex items-center gap-2 text-primary/60 font-medium"><p class="text-[10px] uppercase tracking-widest">...~WN~~Designed with love~~WN~...</p></div>"#,
    );
    html.push_str("</div>");
    html
}

fn render_accepted(acc: &AcceptedView, entering: bool) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="{class}" data-phase="accepted">"#,
        class = subtree_class("text-center flex flex-col items-center gap-4", entering)
    );
    html.push_str(&render_illustration(&acc.illustration, "bg-primary/20 animate-pulse"));
    let _ = write!(
        html,
        r#"<h1 class="text-4xl md:text-5xl font-bold text-primary animate-bounce">Yay!!! {heart}</h1><p class="text-xl text-[#896168]">I knew you&#39;d say yes! I love you {heart}!</p>"#,
        heart = HEART
    );
    html.push_str("</div>");
    html
}

/// Hearts scattered over the proposal container
pub fn render_scatter_layer(hearts: &[DecorationDescriptor]) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div id="{id}" class="absolute inset-0 pointer-events-none overflow-hidden" aria-hidden="true">"#,
        id = ids::SCATTER
    );
    html.push_str(&render_scatter_hearts(hearts));
    html.push_str("</div>");
    html
}

/// Contents of the scatter layer, for re-rendering it on resize
pub fn render_scatter_hearts(hearts: &[DecorationDescriptor]) -> String {
    let mut html = String::new();
    for h in hearts {
        let class = match h.size {
            HeartSize::Class(c) => c.css_class().to_string(),
            HeartSize::Px(px) => format!("text-[{}px]", px),
        };
        let _ = write!(
            html,
            r#"<div class="heart-scatter absolute pointer-events-none" style="left: {left:.4}%; top: {top:.4}%; color: {color}; animation-delay: {delay:.2}s; animation-duration: {dur}s"><span class="{class}" aria-hidden="true">{heart}</span></div>"#,
            left = h.position_x,
            top = h.position_y.unwrap_or(0.0),
            color = HEART_COLOR,
            delay = h.animation_delay,
            dur = h.duration,
            class = class,
            heart = HEART
        );
    }
    html
}

/// Page-level layer of rising hearts
pub fn render_rising_layer(hearts: &[DecorationDescriptor]) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="hearts-container pointer-events-none fixed inset-0 z-0" aria-hidden="true">"#);
    for h in hearts {
        let px = match h.size {
            HeartSize::Px(px) => px,
            HeartSize::Class(_) => 24,
        };
        let _ = write!(
            html,
            r#"<span class="floating-heart" aria-hidden="true" style="left: {left:.4}%; font-size: {px}px; line-height: 1; color: {color}; opacity: {opacity:.2}; animation-delay: {delay:.2}s; animation-duration: {dur:.0}s">{heart}</span>"#,
            left = h.position_x,
            px = px,
            color = HEART_COLOR,
            opacity = h.opacity,
            delay = h.animation_delay,
            dur = h.duration,
            heart = HEART
        );
    }
    html.push_str("</div>");
    html
}
