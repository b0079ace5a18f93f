//! Human-readable output

use polarity_engine::Analysis;
use std::fmt::Write;

/// Format a score the way every command prints it
pub fn score(score: f64) -> String {
    format!("{score:.4}")
}

/// Multi-line breakdown of an analysis
pub fn inspect(analysis: &Analysis) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "normalized: {}", analysis.normalized);

    for (i, sentence) in analysis.sentences.iter().enumerate() {
        let _ = writeln!(out, "sentence {}: {}", i + 1, sentence.text);

        for (j, clause) in sentence.clauses.iter().enumerate() {
            let b = &clause.breakdown;
            let _ = writeln!(out, "  clause {}: {}", j + 1, clause.text);
            let _ = writeln!(
                out,
                "    counts: +{} -{} negations {}{}",
                b.positive_count,
                b.negative_count,
                b.negation_count,
                if b.fallback_applied { " (fallback)" } else { "" }
            );
            let _ = writeln!(
                out,
                "    multipliers: quantifier {:.4} diminisher {:.4}",
                b.quantifier_multiplier, b.diminisher_multiplier
            );
            let _ = writeln!(out, "    {}", clause.vector);
            let _ = writeln!(out, "    scalar: {}", score(clause.scalar));
        }

        if let Some(combined) = &sentence.combined {
            let _ = writeln!(out, "  combined: {combined}");
        }
        let scores: Vec<String> = sentence.scores.iter().map(|s| score(*s)).collect();
        let _ = writeln!(out, "  scores: [{}]", scores.join(", "));
    }

    let _ = write!(out, "score: {}", score(analysis.score));
    out
}
