//! The built-in rule set for field-maintenance reports.
//!
//! Four rule families: equipment, condition, location, severity. Patterns
//! are written lowercase because the engine matches them against lowercased
//! input text. Priorities rank severity (3) over conditions (2) over
//! equipment and locations (1) when confidence ties.

use crate::models::RuleDef;

fn rule(
    name: &str,
    keywords: &[&str],
    patterns: &[&str],
    priority: i32,
    description: &str,
) -> RuleDef {
    RuleDef {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        priority,
        description: description.to_string(),
    }
}

pub(super) fn defs() -> Vec<RuleDef> {
    vec![
        // Equipment
        rule(
            "Valve",
            &["valve", "gate", "ball valve", "check valve", "relief valve"],
            &[r"\bvalve\b", r"\bgate\b", r"\bball\s+valve\b"],
            1,
            "Valve-related equipment",
        ),
        rule(
            "Compressor",
            &["compressor", "pump", "blower"],
            &[r"\bcompressor\b", r"\bpump\b", r"\bblower\b"],
            1,
            "Compression equipment",
        ),
        rule(
            "Pipeline",
            &["pipe", "pipeline", "piping", "line"],
            &[r"\bpipe\b", r"\bpipeline\b", r"\bpiping\b", r"\bline\b"],
            1,
            "Pipeline infrastructure",
        ),
        rule(
            "Tank",
            &["tank", "vessel", "container", "storage"],
            &[r"\btank\b", r"\bvessel\b", r"\bcontainer\b", r"\bstorage\b"],
            1,
            "Storage equipment",
        ),
        rule(
            "Sensor",
            &["sensor", "gauge", "meter", "detector"],
            &[r"\bsensor\b", r"\bgauge\b", r"\bmeter\b", r"\bdetector\b"],
            1,
            "Monitoring equipment",
        ),
        // Conditions
        rule(
            "Corrosion",
            &["rust", "rusted", "corrosion", "corroded", "oxidation"],
            &[r"\brust\w*\b", r"\bcorrod\w*\b", r"\boxid\w*\b"],
            2,
            "Corrosion-related issues",
        ),
        rule(
            "Leak",
            &["leak", "leaking", "drip", "seepage", "spill"],
            &[r"\bleak\w*\b", r"\bdrip\w*\b", r"\bseep\w*\b", r"\bspill\w*\b"],
            2,
            "Leakage issues",
        ),
        rule(
            "Vibration",
            &["vibration", "vibrating", "shake", "shaking", "tremor"],
            &[r"\bvibrat\w*\b", r"\bshak\w*\b", r"\btremor\b"],
            2,
            "Vibration issues",
        ),
        rule(
            "Noise",
            &["noise", "loud", "grinding", "squealing", "rattling"],
            &[
                r"\bnoise\b",
                r"\bloud\b",
                r"\bgrind\w*\b",
                r"\bsqueal\w*\b",
                r"\brattl\w*\b",
            ],
            2,
            "Noise issues",
        ),
        rule(
            "Temperature",
            &["hot", "cold", "overheating", "temperature", "thermal"],
            &[
                r"\bhot\b",
                r"\bcold\b",
                r"\boverheat\w*\b",
                r"\btemperature\b",
                r"\bthermal\b",
            ],
            2,
            "Temperature issues",
        ),
        rule(
            "Pressure",
            &["pressure", "high pressure", "low pressure", "psi"],
            &[r"\bpressure\b", r"\bpsi\b", r"\bbar\b"],
            2,
            "Pressure-related issues",
        ),
        rule(
            "Damage",
            &["damage", "damaged", "broken", "cracked", "fractured"],
            &[r"\bdamag\w*\b", r"\bbroken\b", r"\bcrack\w*\b", r"\bfractur\w*\b"],
            2,
            "Physical damage",
        ),
        // Locations
        rule(
            "Compressor Zone",
            &["compressor 1", "compressor 2", "compressor area", "comp zone"],
            &[r"\bcompressor\s+\d+\b", r"\bcomp\s+zone\b", r"\bcompressor\s+area\b"],
            1,
            "Compressor area",
        ),
        rule(
            "Pump Station",
            &["pump station", "pump house", "pump room"],
            &[r"\bpump\s+station\b", r"\bpump\s+house\b", r"\bpump\s+room\b"],
            1,
            "Pump station area",
        ),
        rule(
            "Control Room",
            &["control room", "control panel", "operator station"],
            &[r"\bcontrol\s+room\b", r"\bcontrol\s+panel\b", r"\boperator\s+station\b"],
            1,
            "Control room area",
        ),
        rule(
            "Field",
            &["field", "outdoor", "outside", "external"],
            &[r"\bfield\b", r"\boutdoor\b", r"\boutside\b", r"\bexternal\b"],
            1,
            "Field location",
        ),
        // Severity
        rule(
            "Critical",
            &["critical", "urgent", "immediate", "emergency", "severe"],
            &[
                r"\bcritical\b",
                r"\burgent\b",
                r"\bimmediate\b",
                r"\bemergency\b",
                r"\bsevere\b",
            ],
            3,
            "Critical severity",
        ),
        rule(
            "High Priority",
            &["high", "priority", "important", "significant"],
            &[r"\bhigh\s+priority\b", r"\bimportant\b", r"\bsignificant\b"],
            3,
            "High priority",
        ),
        rule(
            "Routine",
            &["routine", "normal", "regular", "scheduled"],
            &[r"\broutine\b", r"\bnormal\b", r"\bregular\b", r"\bscheduled\b"],
            3,
            "Routine maintenance",
        ),
    ]
}
