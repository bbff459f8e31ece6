//! CVSS v4.0 equivalence-class engine
//!
//! Scoring derives six equivalence classes (EQ1..EQ6) from the
//! effective metric values, anchors the score at the MacroVector table
//! entry for that tuple, then interpolates downward: for every class
//! with a lower-severity MacroVector, the distance of the actual
//! selections from the class's highest-severity vector is normalized by
//! the class depth, scaled by the scoring range down to the next lower
//! MacroVector, and the mean of those contributions is subtracted from
//! the anchor.
//!
//! Severity distances are tracked in integer units of 0.05 so the
//! valid-max-vector search compares exactly (the Safety level sits
//! half a step below High).

use crate::macrovector;
use crate::metrics::MetricsRecord;

/// Effective metric value with the v4 fallback rules
///
/// Modified metrics override their base counterpart; an unset Exploit
/// Maturity defaults to Attacked and unset requirements default to
/// High.
fn eff<'a>(record: &'a MetricsRecord, key: &str) -> &'a str {
    let value = record.effective(key);
    if value == "X" {
        match key {
            "E" => return "A",
            "CR" | "IR" | "AR" => return "H",
            _ => {}
        }
    }
    value
}

/// Equivalence-class tuple for a record
fn classes(record: &MetricsRecord) -> (u8, u8, u8, u8, u8, u8) {
    let m = |key: &str| eff(record, key);

    let (av, pr, ui) = (m("AV"), m("PR"), m("UI"));
    let eq1 = if av == "N" && pr == "N" && ui == "N" {
        0
    } else if (av == "N" || pr == "N" || ui == "N") && av != "P" {
        1
    } else {
        2
    };

    let eq2 = u8::from(!(m("AC") == "L" && m("AT") == "N"));

    let (vc, vi, va) = (m("VC"), m("VI"), m("VA"));
    let eq3 = if vc == "H" && vi == "H" {
        0
    } else if vc == "H" || vi == "H" || va == "H" {
        1
    } else {
        2
    };

    let (sc, si, sa) = (m("SC"), m("SI"), m("SA"));
    let eq4 = if si == "S" || sa == "S" {
        0
    } else if sc == "H" || si == "H" || sa == "H" {
        1
    } else {
        2
    };

    let eq5 = match m("E") {
        "P" => 1,
        "U" => 2,
        _ => 0,
    };

    let eq6 = u8::from(
        !((m("CR") == "H" && vc == "H")
            || (m("IR") == "H" && vi == "H")
            || (m("AR") == "H" && va == "H")),
    );

    (eq1, eq2, eq3, eq4, eq5, eq6)
}

/// Severity level of an option in 0.05 units; higher is less severe
fn level(key: &str, code: &str) -> i32 {
    match (key, code) {
        ("AV", "N") => 0,
        ("AV", "A") => 2,
        ("AV", "L") => 4,
        ("AV", "P") => 6,
        ("PR", "N") | ("UI", "N") => 0,
        ("PR", "L") | ("UI", "P") => 2,
        ("PR", "H") | ("UI", "A") => 4,
        ("AC", "L") | ("AT", "N") => 0,
        ("AC", "H") | ("AT", "P") => 2,
        ("VC" | "VI" | "VA", "H") => 0,
        ("VC" | "VI" | "VA", "L") => 2,
        ("VC" | "VI" | "VA", "N") => 4,
        ("SI" | "SA", "S") => 1,
        ("SC" | "SI" | "SA", "H") => 2,
        ("SC" | "SI" | "SA", "L") => 4,
        ("SC" | "SI" | "SA", "N") => 6,
        ("CR" | "IR" | "AR", "H") => 0,
        ("CR" | "IR" | "AR", "M") => 2,
        ("CR" | "IR" | "AR", "L") => 4,
        // unknown codes contribute no distance
        _ => 0,
    }
}

// Highest-severity vectors per equivalence-class level. Fixed data
// from the standard, like the MacroVector table itself.

/// EQ1 max vectors as (AV, PR, UI)
const EQ1_MAX: [&[[&str; 3]]; 3] = [
    &[["N", "N", "N"]],
    &[["A", "N", "N"], ["N", "L", "N"], ["N", "N", "P"]],
    &[["P", "N", "N"], ["A", "L", "P"]],
];

/// EQ2 max vectors as (AC, AT)
const EQ2_MAX: [&[[&str; 2]]; 2] = [&[["L", "N"]], &[["H", "N"], ["L", "P"]]];

/// EQ3/EQ6 joint max vectors as (VC, VI, VA, CR, IR, AR)
fn eq3eq6_max(eq3: u8, eq6: u8) -> &'static [[&'static str; 6]] {
    match (eq3, eq6) {
        (0, 0) => &[["H", "H", "H", "H", "H", "H"]],
        (0, 1) => &[
            ["H", "H", "L", "M", "M", "H"],
            ["H", "H", "H", "M", "M", "M"],
        ],
        (1, 0) => &[
            ["L", "H", "H", "H", "H", "H"],
            ["H", "L", "H", "H", "H", "H"],
        ],
        (1, 1) => &[
            ["L", "H", "L", "H", "M", "H"],
            ["L", "H", "H", "H", "M", "M"],
            ["H", "L", "H", "M", "H", "M"],
            ["H", "L", "L", "M", "H", "H"],
            ["L", "L", "H", "H", "H", "M"],
        ],
        _ => &[["L", "L", "L", "H", "H", "H"]],
    }
}

/// EQ4 max vectors as (SC, SI, SA)
const EQ4_MAX: [&[[&str; 3]]; 3] = [&[["H", "S", "S"]], &[["H", "H", "H"]], &[["L", "L", "L"]]];

/// Class depth (maximal severity distance) in 0.05 units
fn depths(eq1: u8, eq2: u8, eq3: u8, eq4: u8, eq6: u8) -> (i32, i32, i32, i32) {
    let d1 = [2, 8, 10][eq1 as usize];
    let d2 = [2, 4][eq2 as usize];
    let d3eq6 = match (eq3, eq6) {
        (0, 0) => 14,
        (0, 1) => 12,
        (1, 0) | (1, 1) => 16,
        _ => 20,
    };
    let d4 = [12, 10, 8][eq4 as usize];
    (d1, d2, d3eq6, d4)
}

/// Per-class severity distances of the record from the highest-severity
/// vector inside its own MacroVector
fn severity_distances(
    record: &MetricsRecord,
    eq1: u8,
    eq2: u8,
    eq3: u8,
    eq4: u8,
    eq6: u8,
) -> (i32, i32, i32, i32) {
    let d = |key: &str, max_code: &str| level(key, eff(record, key)) - level(key, max_code);

    for m1 in EQ1_MAX[eq1 as usize] {
        for m2 in EQ2_MAX[eq2 as usize] {
            for m36 in eq3eq6_max(eq3, eq6) {
                for m4 in EQ4_MAX[eq4 as usize] {
                    let dist = [
                        d("AV", m1[0]),
                        d("PR", m1[1]),
                        d("UI", m1[2]),
                        d("AC", m2[0]),
                        d("AT", m2[1]),
                        d("VC", m36[0]),
                        d("VI", m36[1]),
                        d("VA", m36[2]),
                        d("CR", m36[3]),
                        d("IR", m36[4]),
                        d("AR", m36[5]),
                        d("SC", m4[0]),
                        d("SI", m4[1]),
                        d("SA", m4[2]),
                    ];
                    // Only a max vector dominating the record on every
                    // axis anchors the distance.
                    if dist.iter().all(|&x| x >= 0) {
                        return (
                            dist[0] + dist[1] + dist[2],
                            dist[3] + dist[4],
                            dist[5] + dist[6] + dist[7] + dist[8] + dist[9] + dist[10],
                            dist[11] + dist[12] + dist[13],
                        );
                    }
                }
            }
        }
    }
    (0, 0, 0, 0)
}

/// Score of the next lower MacroVector along each class axis
///
/// `None` when the class is already at its lowest level (that class
/// then drops out of the interpolation mean). EQ3 and EQ6 move jointly;
/// from (0,0) both neighbors exist and the higher score is used.
fn lower_scores(
    eq1: u8,
    eq2: u8,
    eq3: u8,
    eq4: u8,
    eq5: u8,
    eq6: u8,
) -> (Option<f64>, Option<f64>, Option<f64>, Option<f64>, Option<f64>) {
    let look = |a, b, c, d, e, f| macrovector::lookup(&macrovector::key(a, b, c, d, e, f));

    let l1 = if eq1 < 2 { look(eq1 + 1, eq2, eq3, eq4, eq5, eq6) } else { None };
    let l2 = if eq2 < 1 { look(eq1, eq2 + 1, eq3, eq4, eq5, eq6) } else { None };
    let l3eq6 = match (eq3, eq6) {
        (0, 0) => {
            let left = look(eq1, eq2, eq3, eq4, eq5, eq6 + 1);
            let right = look(eq1, eq2, eq3 + 1, eq4, eq5, eq6);
            match (left, right) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, b) => a.or(b),
            }
        }
        (0, 1) | (1, 1) => look(eq1, eq2, eq3 + 1, eq4, eq5, eq6),
        (1, 0) => look(eq1, eq2, eq3, eq4, eq5, eq6 + 1),
        _ => None,
    };
    let l4 = if eq4 < 2 { look(eq1, eq2, eq3, eq4 + 1, eq5, eq6) } else { None };
    let l5 = if eq5 < 2 { look(eq1, eq2, eq3, eq4, eq5 + 1, eq6) } else { None };

    (l1, l2, l3eq6, l4, l5)
}

/// Compute the v4.0 score for a record as-is (threat and environmental
/// selections included)
pub fn score(record: &MetricsRecord) -> f64 {
    // No impact anywhere scores zero outright.
    if ["VC", "VI", "VA", "SC", "SI", "SA"]
        .iter()
        .all(|key| eff(record, key) == "N")
    {
        return 0.0;
    }

    let (eq1, eq2, eq3, eq4, eq5, eq6) = classes(record);
    let value = match macrovector::lookup(&macrovector::key(eq1, eq2, eq3, eq4, eq5, eq6)) {
        Some(v) => v,
        // unreachable for class tuples derived above
        None => return 0.0,
    };

    let (l1, l2, l3eq6, l4, l5) = lower_scores(eq1, eq2, eq3, eq4, eq5, eq6);
    let (dist1, dist2, dist3eq6, dist4) = severity_distances(record, eq1, eq2, eq3, eq4, eq6);
    let (depth1, depth2, depth3eq6, depth4) = depths(eq1, eq2, eq3, eq4, eq6);

    // EQ5 has a single valid vector per level: zero distance, but it
    // still participates in the mean when a lower MacroVector exists.
    let contributions = [
        (l1, dist1, depth1),
        (l2, dist2, depth2),
        (l3eq6, dist3eq6, depth3eq6),
        (l4, dist4, depth4),
        (l5, 0, 1),
    ];

    let mut total = 0.0;
    let mut existing = 0u32;
    for (lower, dist, depth) in contributions {
        if let Some(lower) = lower {
            existing += 1;
            total += (value - lower) * (dist as f64 / depth as f64);
        }
    }

    let mean = if existing == 0 { 0.0 } else { total / f64::from(existing) };
    let score = (value - mean).clamp(0.0, 10.0);
    (score * 10.0).round() / 10.0
}
