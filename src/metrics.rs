use std::collections::HashSet;

use crate::accumulator::AMORPHOUS_MARKER;
use crate::survey::RunReport;

/// How repetitive a survey's printed output is: brotli-compressed length
/// (quality 2) over raw length.
///
/// Surveys whose programs mostly print markers or the same digits land far
/// below 1.0. Empty output scores 0.0.
pub fn high_order_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut compressed = Vec::new();
    let params = brotli::enc::BrotliEncoderParams {
        quality: 2,
        ..Default::default()
    };
    if brotli::BrotliCompress(&mut &data[..], &mut compressed, &params).is_err() {
        return 1.0;
    }

    compressed.len() as f64 / data.len() as f64
}

/// Concatenate every kept output, in report order.
pub fn output_bytes(reports: &[RunReport]) -> Vec<u8> {
    reports
        .iter()
        .flat_map(|r| r.output.as_bytes())
        .copied()
        .collect()
}

/// Fraction of programs that reached a halt glyph before the step limit.
pub fn halting_fraction(reports: &[RunReport]) -> f64 {
    if reports.is_empty() {
        return 0.0;
    }
    let halted = reports.iter().filter(|r| r.halted).count();
    halted as f64 / reports.len() as f64
}

/// Number of times the amorphous marker appears across all kept outputs.
pub fn amorphous_count(reports: &[RunReport]) -> usize {
    reports
        .iter()
        .map(|r| r.output.matches(AMORPHOUS_MARKER).count())
        .sum()
}

/// Number of distinct kept outputs.
pub fn unique_output_count(reports: &[RunReport]) -> usize {
    let set: HashSet<&str> = reports.iter().map(|r| r.output.as_str()).collect();
    set.len()
}

/// Mean steps per program.
pub fn mean_steps(reports: &[RunReport]) -> f64 {
    if reports.is_empty() {
        return 0.0;
    }
    let total: usize = reports.iter().map(|r| r.steps).sum();
    total as f64 / reports.len() as f64
}
