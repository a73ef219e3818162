use crate::core::algorithms::pathfinding::ASTAR;
use crate::core::algorithms::sorting::SortKind;
use crate::core::data::pseudocode::AlgorithmInfo;
use std::fmt::Write;

/// Renders every algorithm's title, complexity and pseudocode.
#[must_use]
pub fn describe_algorithms() -> String {
    let mut infos: Vec<&AlgorithmInfo> = SortKind::ALL.iter().map(|kind| kind.info()).collect();
    infos.push(&ASTAR);

    let mut out = String::new();
    for info in infos {
        let _ = writeln!(out, "{} [{}]", info.title, info.complexity);
        for (index, line) in info.pseudocode.iter().enumerate() {
            let _ = writeln!(out, "  {index:>2} | {}", line.text);
        }
        out.push('\n');
    }
    out
}
