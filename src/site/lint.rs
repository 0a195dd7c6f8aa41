use std::fmt;
use std::io::{self, Write};
use tracing::warn;

use super::SiteConfig;
use crate::nav::{is_active, MatchType};
use crate::route_config::dynamic_pattern;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// The site definition is rejected by [`SiteConfig::validate`]
    Error,
    /// Legal, but almost certainly not what was meant
    Warning,
    /// Worth a look
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => f.write_str("error"),
            LintSeverity::Warning => f.write_str("warning"),
            LintSeverity::Info => f.write_str("info"),
        }
    }
}

/// A lint issue found in a site definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Where the issue occurred (e.g. `nav:Work`, `route:/work/[slug]`)
    pub location: String,
    pub severity: LintSeverity,
    /// Type of issue (e.g. `shadowed_nav_item`)
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a site definition.
///
/// Errors are the same problems [`SiteConfig::validate`] rejects. On top of
/// those:
///
/// - `shadowed_nav_item` (warning): an earlier item already matches every path
///   the later one matches, so the later one can never be highlighted
/// - `trailing_slash` (warning): a nav path other than `/` ending in `/`
///   never equals a normalized current path
/// - `prefix_without_route` (info): a `prefix` item whose path has neither a
///   literal nor a `[slug]` route entry
#[must_use]
pub fn lint_site(site: &SiteConfig) -> Vec<LintIssue> {
    let mut issues: Vec<LintIssue> = site
        .errors()
        .into_iter()
        .map(|err| LintIssue::new(err.location(), LintSeverity::Error, err.kind(), err.to_string()))
        .collect();

    for (j, later) in site.nav.iter().enumerate() {
        let shadowing = site.nav[..j].iter().find(|earlier| {
            earlier.path != later.path
                && earlier.match_type == MatchType::Prefix
                && is_active(&later.path, &earlier.path, MatchType::Prefix)
        });
        if let Some(earlier) = shadowing {
            issues.push(
                LintIssue::new(
                    format!("nav:{}", later.label),
                    LintSeverity::Warning,
                    "shadowed_nav_item",
                    format!(
                        "'{}' ({}) can never be active: '{}' ({} {}) is declared first and matches every path it does",
                        later.label, later.path, earlier.label, earlier.match_type, earlier.path
                    ),
                )
                .with_suggestion(format!("declare '{}' before '{}'", later.label, earlier.label)),
            );
        }

        if later.path.len() > 1 && later.path.ends_with('/') {
            issues.push(
                LintIssue::new(
                    format!("nav:{}", later.label),
                    LintSeverity::Warning,
                    "trailing_slash",
                    format!("nav path '{}' ends with '/'", later.path),
                )
                .with_suggestion(format!("use '{}'", later.path.trim_end_matches('/'))),
            );
        }

        if later.match_type == MatchType::Prefix {
            let section = later.path.trim_matches('/');
            let has_literal = site.routes.contains_pattern(&later.path);
            let has_dynamic = !section.is_empty()
                && !section.contains('/')
                && site.routes.contains_pattern(&dynamic_pattern(section));
            if !has_literal && !has_dynamic {
                issues.push(LintIssue::new(
                    format!("nav:{}", later.label),
                    LintSeverity::Info,
                    "prefix_without_route",
                    format!(
                        "prefix item '{}' has no route entry for '{}' or its detail pages",
                        later.label, later.path
                    ),
                ));
            }
        }
    }

    for issue in &issues {
        if issue.severity != LintSeverity::Info {
            warn!(
                location = %issue.location,
                kind = %issue.kind,
                severity = %issue.severity,
                "{}",
                issue.message
            );
        }
    }

    issues
}

/// Whether any issue is error-level
#[must_use]
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues grouped by severity
pub fn print_lint_issues(out: &mut dyn Write, issues: &[LintIssue]) -> io::Result<()> {
    if issues.is_empty() {
        writeln!(out, "✅ No lint issues found!")?;
        return Ok(());
    }

    let count = |severity: LintSeverity| issues.iter().filter(|i| i.severity == severity).count();
    writeln!(out, "📋 Lint Results:")?;
    writeln!(
        out,
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    )?;

    for (severity, heading) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ] {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        writeln!(out, "{heading}")?;
        for issue in group {
            writeln!(out, "   [{}] {}", issue.kind, issue.location)?;
            writeln!(out, "      {}", issue.message)?;
            if let Some(suggestion) = &issue.suggestion {
                writeln!(out, "      💡 Suggestion: {}", suggestion)?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}
