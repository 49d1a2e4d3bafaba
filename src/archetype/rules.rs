//! Ordered archetype rule table.
//!
//! Rules are evaluated top to bottom and the first match wins, so a
//! specific combination must always sit above the broader rule it refines.

use super::signals::ShotSignals;
use super::ArchetypeFamily::*;
use super::{Archetype, ArchetypeFamily};

/// A condition over the signals and the archetype it yields
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    pub when: fn(&ShotSignals) -> bool,
    pub archetype: Archetype,
}

impl ArchetypeRule {
    pub fn matches(&self, signals: &ShotSignals) -> bool {
        (self.when)(signals)
    }
}

const fn rule(
    when: fn(&ShotSignals) -> bool,
    family: ArchetypeFamily,
    label: &'static str,
    tagline: &'static str,
    explanation: &'static str,
    icon: &'static str,
) -> ArchetypeRule {
    ArchetypeRule {
        when,
        archetype: Archetype {
            family,
            label,
            tagline,
            explanation,
            icon,
        },
    }
}

/// Returned when no rule in [`RULES`] matches
pub const BALANCED: Archetype = Archetype {
    family: ArchetypeFamily::Balanced,
    label: "Balanced attack",
    tagline: "No clear signature zone",
    explanation: "No zone share or rank band stands out. Shots, goals and finishing all sit near the middle of the pool.",
    icon: "⚖️",
};

pub static RULES: &[ArchetypeRule] = &[
    // Elite combinations
    rule(
        |s| s.elite() && s.high_danger.is_high(),
        Elite,
        "Unstoppable",
        "Elite danger from everywhere",
        "Top-10% shot volume and finishing, with a high-danger share among the league's highest.",
        "⚡",
    ),
    rule(
        |s| s.elite() && s.low_slot.is_high(),
        Elite,
        "Slot dominators",
        "Volume meets precision",
        "Top-10% volume and finishing built on one of the heaviest low-slot shares in the pool.",
        "🎯",
    ),
    rule(
        |s| s.elite() && s.net_front.is_high(),
        Elite,
        "Elite at the doorstep",
        "Top volume, finished in close",
        "Top-10% volume and finishing with an unusually large share of shots from the crease and net sides.",
        "🚪",
    ),
    rule(
        |s| s.elite() && s.point.is_high(),
        Elite,
        "Complete from the point",
        "Elite attack with a blue-line edge",
        "Top-10% volume and finishing while taking a high share of shots from the points.",
        "🔷",
    ),
    rule(
        |s| s.elite(),
        Elite,
        "Complete attack",
        "No weaknesses",
        "Top-10% in both shots on goal and shooting percentage. Volume and finishing with no zone dependence.",
        "👑",
    ),
    // Crease and net front
    rule(
        |s| s.crease.is_high() && s.net_front.is_high() && s.very_clinical(),
        NetFront,
        "Net-front assassins",
        "Punish every scramble",
        "High crease and net-front shares paired with top-10% shooting percentage.",
        "🔪",
    ),
    rule(
        |s| s.crease.is_high() && s.net_front.is_high() && s.high_volume(),
        NetFront,
        "Crease crashers",
        "Swarm the paint relentlessly",
        "High crease and net-front shares on top-25% shot volume.",
        "💥",
    ),
    rule(
        |s| s.crease.is_mid() && s.high_danger.is_high() && s.clinical(),
        NetFront,
        "High-danger hunters",
        "Finish in tight",
        "Above-average crease share inside a high high-danger share, converted at a top-25% rate.",
        "🎯",
    ),
    rule(
        |s| s.net_front.is_high() && s.wild(),
        NetFront,
        "Traffic seekers",
        "Quantity game near the net",
        "A high net-front share with bottom-25% shooting percentage. Lots of bodies, few clean looks.",
        "📦",
    ),
    rule(
        |s| s.crease.is_mid() && s.high_danger.is_mid(),
        NetFront,
        "Net-front heavy",
        "Life in the crease",
        "Above-average crease and high-danger shares without a standout rank signal.",
        "🏒",
    ),
    // Low slot
    rule(
        |s| s.low_slot.is_high() && s.very_clinical(),
        LowSlot,
        "Low slot snipers",
        "Make every chance count",
        "A high low-slot share finished at a top-10% shooting percentage.",
        "🎯",
    ),
    rule(
        |s| s.low_slot.is_high() && s.high_volume() && s.wild(),
        LowSlot,
        "Volume merchants",
        "Flood the slot",
        "Top-25% volume and a high low-slot share, but bottom-25% finishing.",
        "📊",
    ),
    rule(
        |s| s.low_slot.is_high() && s.high_volume(),
        LowSlot,
        "Slot-hungry",
        "Shoot first, ask later",
        "A high low-slot share on top-25% shot volume.",
        "🔥",
    ),
    rule(
        |s| s.low_slot.is_mid() && s.clinical(),
        LowSlot,
        "Direct and deadly",
        "Straight to the slot",
        "An above-average low-slot share with top-25% shooting percentage.",
        "⚡",
    ),
    rule(
        |s| s.low_slot.is_high(),
        LowSlot,
        "Slot-first system",
        "Everything runs through centre",
        "One of the highest low-slot shares in the pool without an outlying volume or finishing rank.",
        "🏒",
    ),
    rule(
        |s| s.low_slot.is_mid() && s.prolific(),
        LowSlot,
        "Structured attack",
        "Earn the slot every time",
        "An above-average low-slot share feeding a top-25% goal total.",
        "🧩",
    ),
    // High danger
    rule(
        |s| s.high_danger.is_high() && s.high_volume() && s.clinical(),
        HighDanger,
        "Danger zone addicts",
        "High volume, high quality",
        "A high high-danger share with top-25% volume and top-25% finishing.",
        "🔥",
    ),
    rule(
        |s| s.high_danger.is_high() && s.high_volume(),
        HighDanger,
        "Inside-out attack",
        "Earn it the hard way",
        "A high high-danger share on top-25% shot volume.",
        "💪",
    ),
    rule(
        |s| s.high_danger.is_high() && s.clinical(),
        HighDanger,
        "Selective but lethal",
        "Choose danger, convert",
        "A high high-danger share converted at a top-25% shooting percentage.",
        "🎯",
    ),
    rule(
        |s| s.high_danger.is_mid() && s.low_volume(),
        HighDanger,
        "Opportunists",
        "Wait for danger, then strike",
        "Bottom-25% shot volume, but an above-average share of it from high-danger ice.",
        "🦊",
    ),
    rule(
        |s| s.high_danger.is_high(),
        HighDanger,
        "High-danger focused",
        "Willing to pay the price",
        "One of the highest high-danger shares in the pool.",
        "💥",
    ),
    // Point shots
    rule(
        |s| s.point.is_high() && s.defense_driven && s.very_clinical(),
        Point,
        "Blue-line snipers",
        "Pinching defenders who finish",
        "A high point share, defense-driven shot mix and top-10% shooting percentage.",
        "🎯",
    ),
    rule(
        |s| s.point.is_high() && s.defense_driven && s.high_volume(),
        Point,
        "Blue-line blitz",
        "Active D driving offence",
        "A high point share and defense-driven shot mix on top-25% volume.",
        "🔵",
    ),
    rule(
        |s| s.point.is_mid() && s.defense_driven && s.clinical(),
        Point,
        "Point shot precision",
        "Smart D with north-south reach",
        "An above-average point share from a defense-driven attack with top-25% finishing.",
        "📐",
    ),
    rule(
        |s| s.point.is_mid() && s.defense_driven,
        Point,
        "Blue-line heavy",
        "Defenders carry the load",
        "An above-average point share and a defense share of skater shots above the D-driven line.",
        "🔵",
    ),
    rule(
        |s| s.point.is_mid() && s.high_volume(),
        Point,
        "Point shot barrage",
        "Screen and tip everything",
        "An above-average point share on top-25% shot volume.",
        "🌊",
    ),
    rule(
        |s| s.point.is_high() && s.clinical(),
        Point,
        "Long-range specialists",
        "Make distance shots count",
        "A high point share with top-25% shooting percentage.",
        "🎯",
    ),
    rule(
        |s| s.point.is_high(),
        Point,
        "Perimeter to slot",
        "Point shots feeding chaos",
        "One of the highest point shares in the pool.",
        "🔀",
    ),
    // Circles
    rule(
        |s| s.circle.is_high() && s.very_clinical(),
        Circle,
        "Circle snipers",
        "Ice-cold from the dots",
        "A high faceoff-circle share finished at a top-10% shooting percentage.",
        "❄️",
    ),
    rule(
        |s| s.circle.is_high() && s.high_volume() && s.clinical(),
        Circle,
        "Faceoff circle threats",
        "Wide and accurate",
        "A high circle share with top-25% volume and top-25% finishing.",
        "🎯",
    ),
    rule(
        |s| s.circle.is_mid() && s.high_volume(),
        Circle,
        "Wide-angle offence",
        "Circles as the launchpad",
        "An above-average circle share on top-25% shot volume.",
        "🔄",
    ),
    rule(
        |s| s.circle.is_mid() && s.clinical(),
        Circle,
        "Patient outside-in",
        "Pick the spot, hit it",
        "An above-average circle share with top-25% shooting percentage.",
        "🧊",
    ),
    rule(
        |s| s.circle.is_mid() && s.wild(),
        Circle,
        "Spray and pray",
        "Circles without the finish",
        "An above-average circle share with bottom-25% shooting percentage.",
        "🌀",
    ),
    rule(
        |s| s.circle.is_high(),
        Circle,
        "Outside-in system",
        "Circle shots feeding the slot",
        "One of the highest faceoff-circle shares in the pool.",
        "↩️",
    ),
    // Corners and behind the net
    rule(
        |s| s.corner.is_high() && s.high_danger.is_mid(),
        Corner,
        "Cycle masters",
        "Work the corners, cash in close",
        "A high corner and behind-the-net share alongside an above-average high-danger share.",
        "🔄",
    ),
    rule(
        |s| s.corner.is_high() && s.prolific(),
        Corner,
        "Below the goal line",
        "Corners that turn into goals",
        "A high corner share feeding a top-25% goal total.",
        "🧲",
    ),
    rule(
        |s| s.corner.is_high(),
        Corner,
        "Grind it out",
        "Board battles feeding the crease",
        "One of the highest corner and behind-the-net shares in the pool.",
        "💪",
    ),
    // Forward versus defense driven
    rule(
        |s| s.defense_driven && s.clinical() && s.prolific(),
        ForwardDefense,
        "Blue-line excellence",
        "Defenders make the difference",
        "A defense-driven shot mix with top-25% finishing and top-25% goals.",
        "🛡️",
    ),
    rule(
        |s| s.defense_driven && s.high_volume(),
        ForwardDefense,
        "D-led attack",
        "Blueline carries the offensive load",
        "A defense-driven shot mix on top-25% shot volume.",
        "🔵",
    ),
    rule(
        |s| s.defense_driven && s.starved(),
        ForwardDefense,
        "Thin attack",
        "Defenders carrying a stalled offence",
        "A defense-driven shot mix and a bottom-25% goal total.",
        "🧱",
    ),
    rule(
        |s| s.forward_driven && s.very_clinical(),
        ForwardDefense,
        "Forward-driven",
        "Elite scorers do the heavy lifting",
        "A forward-driven shot mix with top-10% shooting percentage.",
        "⭐",
    ),
    rule(
        |s| s.forward_driven && s.high_volume(),
        ForwardDefense,
        "Forward-centric machine",
        "D stay home",
        "A forward-driven shot mix on top-25% shot volume.",
        "🏹",
    ),
    rule(
        |s| s.forward_driven && s.starved(),
        ForwardDefense,
        "Forwards alone",
        "Little support from the back end",
        "A forward-driven shot mix and a bottom-25% goal total.",
        "🏝️",
    ),
    // Volume extremes
    rule(
        |s| s.high_volume() && s.very_clinical(),
        Volume,
        "Offensive powerhouse",
        "Generate and convert",
        "Top-25% shot volume with top-10% shooting percentage.",
        "⚡",
    ),
    rule(
        |s| s.high_volume() && s.very_wild(),
        Volume,
        "Shoot-first mentality",
        "Quantity over quality",
        "Top-25% shot volume with bottom-10% shooting percentage.",
        "🌀",
    ),
    rule(
        |s| s.high_volume() && s.clinical(),
        Volume,
        "High-tempo machine",
        "Volume with purpose",
        "Top-25% shot volume and top-25% shooting percentage.",
        "🔥",
    ),
    rule(
        |s| s.high_volume() && s.wild(),
        Volume,
        "All gas no brakes",
        "Shots from everywhere",
        "Top-25% shot volume and bottom-25% shooting percentage.",
        "💨",
    ),
    rule(
        |s| s.high_volume(),
        Volume,
        "Volume-driven attack",
        "Keep the goalie busy",
        "Top-25% shots on goal without a zone or finishing signature.",
        "📊",
    ),
    // Low volume
    rule(
        |s| s.low_volume() && s.very_clinical() && s.prolific(),
        LowVolume,
        "Less is more",
        "Ruthless efficiency",
        "Bottom-25% shot volume, yet top-10% finishing and top-25% goals.",
        "🔪",
    ),
    rule(
        |s| s.low_volume() && s.clinical(),
        LowVolume,
        "Patient and precise",
        "Low volume, high impact",
        "Bottom-25% shot volume with top-25% shooting percentage.",
        "🧊",
    ),
    rule(
        |s| s.low_volume() && s.wild() && s.starved(),
        LowVolume,
        "Offensively challenged",
        "Rare shots, rare goals",
        "Bottom-25% in shots, shooting percentage and goals.",
        "😬",
    ),
    rule(
        |s| s.low_volume() && s.starved(),
        LowVolume,
        "Quiet attack",
        "Struggle to generate and convert",
        "Bottom-25% shot volume and a bottom-25% goal total.",
        "📉",
    ),
    rule(
        |s| s.low_volume(),
        LowVolume,
        "Conservative offence",
        "Choose moments carefully",
        "Bottom-25% shots on goal without a finishing signal either way.",
        "🕰️",
    ),
    // Efficiency fallbacks
    rule(
        |s| s.very_clinical() && s.prolific(),
        Efficiency,
        "Clinical finishers",
        "Make every chance pay",
        "Top-10% shooting percentage and a top-25% goal total.",
        "💎",
    ),
    rule(
        |s| s.very_clinical(),
        Efficiency,
        "Precision attack",
        "Ice water in their veins",
        "Top-10% shooting percentage on ordinary volume.",
        "❄️",
    ),
    rule(
        |s| s.clinical() && s.prolific(),
        Efficiency,
        "Efficient and dangerous",
        "Quality over quantity",
        "Top-25% shooting percentage and a top-25% goal total.",
        "🎯",
    ),
    rule(
        |s| s.clinical(),
        Efficiency,
        "Selective shooters",
        "Make every shot count",
        "Top-25% shooting percentage on ordinary volume.",
        "🧠",
    ),
    rule(
        |s| s.very_wild() && s.starved(),
        Efficiency,
        "Snakebitten",
        "Chances that will not go in",
        "Bottom-10% shooting percentage and a bottom-25% goal total.",
        "🐍",
    ),
    rule(
        |s| s.wild(),
        Efficiency,
        "Streaky attack",
        "Hot and cold in waves",
        "Bottom-25% shooting percentage on ordinary volume.",
        "🌊",
    ),
    rule(
        |s| s.prolific(),
        Efficiency,
        "Finds a way",
        "Goals without a signature",
        "A top-25% goal total with no standout zone, volume or finishing rank.",
        "🧭",
    ),
    rule(
        |s| s.starved(),
        Efficiency,
        "Goal-starved",
        "Shots that rarely turn into goals",
        "A bottom-25% goal total with no standout zone, volume or finishing rank.",
        "🥶",
    ),
];

/// First archetype whose rule matches, or [`BALANCED`]
pub fn first_match(signals: &ShotSignals) -> &'static Archetype {
    RULES
        .iter()
        .find(|rule| rule.matches(signals))
        .map(|rule| &rule.archetype)
        .unwrap_or(&BALANCED)
}
