//! Which regions are printed on which pages.

use crate::error::{Error, Result};
use crate::model::RegionKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;

/// Decides whether a region is printed on a given page.
///
/// Returning `true` for a region the document cannot supply is a
/// configuration error, reported as [`Error::MissingRegion`] during layout.
pub trait InclusionPolicy {
    /// Check if `kind` is printed on page `page_number`.
    fn should_include(&self, kind: RegionKind, page_number: u32, is_last_page: bool) -> bool;
}

impl<F> InclusionPolicy for F
where
    F: Fn(RegionKind, u32, bool) -> bool,
{
    fn should_include(&self, kind: RegionKind, page_number: u32, is_last_page: bool) -> bool {
        self(kind, page_number, is_last_page)
    }
}

/// On which pages a region is printed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PrintRule {
    /// Never printed
    #[default]
    Never,
    /// Printed on every page
    AllPages,
    /// Printed on the first page only
    FirstPage,
    /// Printed on the last page only
    LastPage,
    /// Printed on every page except the first
    AllButFirst,
    /// Printed on every page except the last
    AllButLast,
    /// Printed on specific pages (1-indexed, sorted disjoint ranges)
    Pages(Vec<RangeInclusive<u32>>),
}

impl PrintRule {
    /// Check if the rule selects the given page.
    pub fn applies(&self, page_number: u32, is_last_page: bool) -> bool {
        match self {
            PrintRule::Never => false,
            PrintRule::AllPages => true,
            PrintRule::FirstPage => page_number == 1,
            PrintRule::LastPage => is_last_page,
            PrintRule::AllButFirst => page_number != 1,
            PrintRule::AllButLast => !is_last_page,
            PrintRule::Pages(ranges) => ranges.iter().any(|r| r.contains(&page_number)),
        }
    }

    /// Check if the answer depends on whether the page is the last one.
    pub fn depends_on_last_page(&self) -> bool {
        matches!(self, PrintRule::LastPage | PrintRule::AllButLast)
    }

    /// Parse a rule string (e.g., "all", "first", "last", "1,3,5-7").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.to_lowercase().as_str() {
            "" | "never" | "none" => return Ok(PrintRule::Never),
            "all" => return Ok(PrintRule::AllPages),
            "first" => return Ok(PrintRule::FirstPage),
            "last" => return Ok(PrintRule::LastPage),
            "all-but-first" => return Ok(PrintRule::AllButFirst),
            "all-but-last" => return Ok(PrintRule::AllButLast),
            _ => {}
        }

        // Comma-separated list with possible ranges
        let invalid = || Error::InvalidRule(s.to_string());
        let mut ranges = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            let (start, end) = match part.split_once('-') {
                Some((start, end)) => (start.trim(), end.trim()),
                None => (part, part),
            };
            let start: u32 = start.parse().map_err(|_| invalid())?;
            let end: u32 = end.parse().map_err(|_| invalid())?;
            if start == 0 || end < start {
                return Err(invalid());
            }
            ranges.push(start..=end);
        }

        Ok(PrintRule::Pages(merge_ranges(ranges)))
    }
}

/// Sort ranges and join the ones that overlap or touch.
fn merge_ranges(mut ranges: Vec<RangeInclusive<u32>>) -> Vec<RangeInclusive<u32>> {
    ranges.sort_by_key(|r| *r.start());

    let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                let end = (*last.end()).max(*range.end());
                *last = *last.start()..=end;
            }
            _ => merged.push(range),
        }
    }
    merged
}

impl fmt::Display for PrintRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintRule::Never => f.write_str("never"),
            PrintRule::AllPages => f.write_str("all"),
            PrintRule::FirstPage => f.write_str("first"),
            PrintRule::LastPage => f.write_str("last"),
            PrintRule::AllButFirst => f.write_str("all-but-first"),
            PrintRule::AllButLast => f.write_str("all-but-last"),
            PrintRule::Pages(ranges) => {
                let list: Vec<String> = ranges
                    .iter()
                    .map(|r| {
                        if r.start() == r.end() {
                            r.start().to_string()
                        } else {
                            format!("{}-{}", r.start(), r.end())
                        }
                    })
                    .collect();
                f.write_str(&list.join(","))
            }
        }
    }
}

impl TryFrom<String> for PrintRule {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        PrintRule::parse(&value)
    }
}

impl From<PrintRule> for String {
    fn from(rule: PrintRule) -> Self {
        rule.to_string()
    }
}

/// Per-region print rules for one document.
///
/// Regions without a rule are not printed. The body is always printed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintDefinition {
    rules: HashMap<RegionKind, PrintRule>,
}

impl PrintDefinition {
    /// Create an empty definition (no appendix is printed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule for a region.
    pub fn with_rule(mut self, kind: RegionKind, rule: PrintRule) -> Self {
        self.set_rule(kind, rule);
        self
    }

    /// Set the rule for a region in place.
    pub fn set_rule(&mut self, kind: RegionKind, rule: PrintRule) {
        if kind == RegionKind::Body {
            log::debug!("Ignoring print rule for the body, it is always printed");
            return;
        }
        self.rules.insert(kind, rule);
    }

    /// Get the rule for a region.
    pub fn rule(&self, kind: RegionKind) -> &PrintRule {
        static NEVER: PrintRule = PrintRule::Never;
        self.rules.get(&kind).unwrap_or(&NEVER)
    }
}

impl InclusionPolicy for PrintDefinition {
    fn should_include(&self, kind: RegionKind, page_number: u32, is_last_page: bool) -> bool {
        if kind == RegionKind::Body {
            return true;
        }
        self.rule(kind).applies(page_number, is_last_page)
    }
}
