//! Structured report building blocks and their plain-text rendering.

use std::fmt;

use persona_core::{AvatarClass, BigFive, DominanceType};
use serde::{Deserialize, Serialize};

use crate::intimacy::IntimacyReport;
use crate::partner::{IdealPartner, MatePreference};

/// One titled block of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    /// Band the profile fell into, e.g. "Direct and outspoken"
    pub label: String,
    /// Optional one-line figure, e.g. an index
    pub detail: Option<String>,
    pub points: Vec<String>,
}

impl ReportSection {
    pub(crate) fn new(title: &str, label: &str, points: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            label: label.to_string(),
            detail: None,
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub(crate) fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.title)?;
        writeln!(f, "{}", self.label)?;
        if let Some(detail) = &self.detail {
            writeln!(f, "{detail}")?;
        }
        for point in &self.points {
            writeln!(f, "- {point}")?;
        }
        Ok(())
    }
}

/// Deterministic long-form report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedReport {
    pub intimacy: IntimacyReport,
    pub mate_preference: MatePreference,
    pub ideal_partner: IdealPartner,
}

impl ExtendedReport {
    pub fn build(big_five: &BigFive, dominance_score: u8, avatar: AvatarClass) -> Self {
        let dominance = DominanceType::from_score(dominance_score);

        Self {
            intimacy: IntimacyReport::build(big_five, dominance_score, avatar),
            mate_preference: MatePreference::build(big_five, dominance, avatar),
            ideal_partner: IdealPartner::build(big_five, dominance),
        }
    }
}

impl fmt::Display for ExtendedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Intimacy Style")?;
        for section in self.intimacy.sections() {
            writeln!(f)?;
            write!(f, "{section}")?;
        }

        writeln!(f)?;
        writeln!(f, "## Partner Preferences")?;
        for section in self.mate_preference.sections() {
            writeln!(f)?;
            write!(f, "{section}")?;
        }

        writeln!(f)?;
        writeln!(f, "## Ideal Partner")?;
        write!(f, "{}", self.ideal_partner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_rendering() {
        let section = ReportSection::new("Pacing", "Slow burn", &["Likes a gradual build-up"])
            .with_detail("Index: 80/100".to_string());
        let text = section.to_string();

        assert!(text.starts_with("### Pacing\nSlow burn\nIndex: 80/100\n"));
        assert!(text.contains("- Likes a gradual build-up"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let scores = BigFive::new(80, 85, 50, 72, 50);
        let a = ExtendedReport::build(&scores, 90, AvatarClass::RealPhoto);
        let b = ExtendedReport::build(&scores, 90, AvatarClass::RealPhoto);

        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_report_rendering_order() {
        let report = ExtendedReport::build(&BigFive::neutral(), 50, AvatarClass::Unknown);
        let text = report.to_string();

        let intimacy = text.find("## Intimacy Style").unwrap();
        let preferences = text.find("## Partner Preferences").unwrap();
        let ideal = text.find("## Ideal Partner").unwrap();
        assert!(intimacy < preferences && preferences < ideal);
        assert!(text.contains("### Dominance\nSwitch\n"));
        assert!(text.contains("Match: Switch / S / M"));
    }
}
