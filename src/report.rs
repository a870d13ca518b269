use std::io::{self, Write};

use crate::game::{Stats, SPACE_NAMES};
use crate::simulation::SimulationConfig;

/// The name printed at the top of every report.
pub const SIMULATOR_NAME: &str = "MONO-RS";

/// Print the banner shown before any game is played.
pub fn write_header<W: Write>(out: &mut W, config: &SimulationConfig) -> io::Result<()> {
    writeln!(out, "{}", SIMULATOR_NAME)?;
    writeln!(out, "RUNNING {} GAMES", config.games)?;
    writeln!(out, "PLAYING {} MOVES", config.turns)?;
    out.flush()
}

/// Print both histograms, one count per line in board order.
/// With `with_names`, each count is followed by the name of its space.
pub fn write_results<W: Write>(out: &mut W, stats: &Stats, with_names: bool) -> io::Result<()> {
    writeln!(out, "DONE!")?;

    writeln!(out, "LANDS")?;
    write_counts(out, &stats.lands, with_names)?;

    writeln!(out, "ENDS")?;
    write_counts(out, &stats.ends, with_names)?;

    out.flush()
}

fn write_counts<W: Write>(out: &mut W, counts: &[u64], with_names: bool) -> io::Result<()> {
    for (count, name) in counts.iter().zip(SPACE_NAMES.iter()) {
        if with_names {
            writeln!(out, "{} {}", count, name)?;
        } else {
            writeln!(out, "{}", count)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_layout() {
        let config = SimulationConfig::new(3, 7, 0).unwrap();
        let mut stats = Stats::new();
        stats.record_land(4);
        stats.record_end(10);

        let mut out = Vec::new();
        write_header(&mut out, &config).unwrap();
        write_results(&mut out, &stats, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[..5],
            [
                "MONO-RS",
                "RUNNING 3 GAMES",
                "PLAYING 7 MOVES",
                "DONE!",
                "LANDS"
            ]
        );
        assert_eq!(lines.len(), 5 + 40 + 1 + 40);
        assert_eq!(lines[5 + 4], "1");
        assert_eq!(lines[45], "ENDS");
        assert_eq!(lines[46 + 10], "1");
        assert_eq!(lines[46], "0");
    }

    #[test]
    fn named_report() {
        let mut stats = Stats::new();
        stats.record_end(39);

        let mut out = Vec::new();
        write_results(&mut out, &stats, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n0 GO\n"));
        assert!(text.ends_with("1 Boardwalk\n"));
    }
}
