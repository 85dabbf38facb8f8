// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use tidbit_scan_engine::RunReports;
use tidbit_scan_engine::report::{NameGroup, RankedMatch, StatsSnapshot};

pub fn print_reports(reports: &RunReports, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(reports)?,
        OutputFormat::Table => {
            if let Some(matches) = &reports.matches {
                print_matches(matches);
            }
            if let Some(groups) = &reports.name_counts {
                print_name_counts(groups);
            }
            if let Some(stats) = &reports.stats {
                print_stats(stats);
            }
        }
    }
    Ok(())
}

fn print_json(reports: &RunReports) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

fn print_matches(matches: &[RankedMatch]) {
    for m in matches {
        println!(
            "{:>5}. {} {}:{}",
            group_digits(m.rank),
            m.name,
            m.path.display(),
            m.line_number
        );
    }
}

fn print_name_counts(groups: &[NameGroup]) {
    println!(
        "Name duplicates (>= 2), total: {}",
        group_digits(groups.len())
    );
    for g in groups {
        println!("{}: {}", g.name, g.count);
        for place in &g.locations {
            println!("    {place}");
        }
    }
}

fn print_stats(stats: &StatsSnapshot) {
    println!("File Line Counts:");
    for (path, count) in &stats.file_line_counts {
        println!("{:>10}: {}", group_digits(*count), path.display());
    }
    println!(
        "{:>10}: Total Line Count",
        group_digits(stats.total_line_count)
    );
    println!();
    println!("File Matched Line Counts:");
    for (path, count) in &stats.file_matched_line_counts {
        println!("{:>10}: {}", group_digits(*count), path.display());
    }
    println!(
        "{:>10}: Total Matched Line Count",
        group_digits(stats.total_matched_line_count)
    );
}

/// Insert thousands separators: 1234567 -> "1,234,567".
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
