//! Plain text output and terminal message helpers.

use crate::tally::SeverityTally;
use crate::types::Finding;
use console::style;

/// Render findings as a plain text listing.
pub fn render(tally: &SeverityTally, findings: &[Finding]) -> String {
    let mut output = String::new();

    output.push_str("Dependency Audit Report\n");
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    let counts: Vec<String> = tally
        .buckets()
        .map(|(severity, count)| format!("{} {}", count, severity))
        .collect();
    output.push_str(&format!(
        "Summary: {} advisories ({})\n\n",
        findings.len(),
        counts.join(", ")
    ));

    if !findings.is_empty() {
        output.push_str(&format!(
            "{:>8}  {:<10}  {:<20}  {:<12}  {}\n",
            "ID", "SEVERITY", "MODULE", "VERSION", "VULNERABILITY"
        ));
        output.push_str(&format!("{}\n", "-".repeat(60)));

        for finding in findings {
            output.push_str(&format!(
                "{:>8}  {:<10}  {:<20}  {:<12}  {}\n",
                finding.id,
                finding.severity.label(),
                finding.module_name,
                finding.version,
                finding.title,
            ));
        }
    }

    output
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print an informational message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("•").dim(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_render_empty() {
        let tally = SeverityTally::new(&SeverityTally::default_buckets());
        let text = render(&tally, &[]);
        assert!(text.contains("Summary: 0 advisories (0 moderate, 0 high, 0 critical)"));
        assert!(!text.contains("SEVERITY"));
    }

    #[test]
    fn test_render_lists_findings() {
        let findings = vec![Finding {
            id: 42,
            title: "Command Injection".to_string(),
            module_name: "shelljs".to_string(),
            version: "0.8.3".to_string(),
            vulnerable_versions: "<0.8.5".to_string(),
            patched_versions: ">=0.8.5".to_string(),
            recommendation: "Upgrade to 0.8.5".to_string(),
            severity: Severity::High,
            dependency_path: "app>shelljs".to_string(),
            dev: false,
            url: "https://example.com".to_string(),
        }];
        let tally = SeverityTally::from_findings(&findings, &SeverityTally::default_buckets());
        let text = render(&tally, &findings);
        assert!(text.contains("shelljs"));
        assert!(text.contains("Command Injection"));
        assert!(text.contains("1 high"));
    }
}
