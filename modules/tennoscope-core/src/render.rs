//! Pure rendering of decoded worldstate into chat-sized text blocks.
//!
//! Output is deterministic for a given input: fixed block order, verbatim
//! `timeLeft` strings, and no allocation-order dependence anywhere.

use crate::worldstate::{Faction, Sortie, WorldState};

const DIVIDER: &str = "----------------\n";

/// Ordinal words for the first three sortie stages; later positions fall
/// back to plain numerals.
const ORDINALS: [&str; 3] = ["一", "二", "三"];

/// Render the open-world cycle overview. Absent cycles are skipped
/// silently; order is Cetus, Vallis, Cambion, Duviri, Earth.
pub fn render_plains(ws: &WorldState) -> String {
    let mut out = String::from("🌌 各平原时间状态：\n");

    if let Some(cetus) = &ws.cetus {
        let state = if cetus.is_day { "☀️白天" } else { "🌙夜晚" };
        out.push_str(&format!("【夜灵平原】: {state}\n- 剩余: {}\n", cetus.time_left));
    }

    if let Some(vallis) = &ws.vallis {
        let state = if vallis.is_warm { "🔥温暖" } else { "❄️寒冷" };
        out.push_str(&format!("【福尔图娜】: {state}\n- 剩余: {}\n", vallis.time_left));
    }

    if let Some(cambion) = &ws.cambion {
        out.push_str(&format!(
            "【魔胎之境】: {}\n- 剩余: {}\n",
            faction_label(&cambion.active),
            cambion.time_left
        ));
    }

    if let Some(duviri) = &ws.duviri {
        out.push_str(&format!(
            "【双衍王境】: {}\n- 剩余: {}\n",
            capitalize(&duviri.state),
            duviri.time_left
        ));
    }

    if let Some(earth) = &ws.earth {
        let state = if earth.is_day { "☀️白天" } else { "🌙夜晚" };
        // Last block, no trailing newline.
        out.push_str(&format!("【地球】: {state}\n- 剩余: {}", earth.time_left));
    }

    out
}

/// Render the daily sortie. An absent or expired sortie yields a single
/// fixed notice.
pub fn render_sortie(sortie: Option<&Sortie>) -> String {
    let Some(sortie) = sortie.filter(|s| !s.expired) else {
        return "⚠️ 当前无突击任务".to_string();
    };

    let mut out = format!("⚔️ 今日突击: {} ({})\n", sortie.boss, sortie.faction);

    for (i, variant) in sortie.variants.iter().enumerate() {
        out.push_str(DIVIDER);
        out.push_str(&format!(
            "[{}] {}\n📍 {}\n⚠️ {}\n",
            ordinal(i),
            variant.mission_type,
            variant.node,
            variant.modifier
        ));
    }

    out.push_str(DIVIDER);
    out.push_str(&format!("⏳ 剩余: {}", sortie.eta));
    out
}

fn faction_label(faction: &Faction) -> String {
    match faction {
        Faction::Fass => "🔴Fass".to_string(),
        Faction::Vome => "🔵Vome".to_string(),
        Faction::Other(raw) => raw.clone(),
    }
}

/// 0-based position to 1-indexed display ordinal. Positions past the word
/// table degrade to numerals rather than failing.
fn ordinal(index: usize) -> String {
    match ORDINALS.get(index) {
        Some(word) => (*word).to_string(),
        None => (index + 1).to_string(),
    }
}

/// First character uppercased, the rest lowercased, so upstream values
/// like "JOY" and "sorrow" both display consistently.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
