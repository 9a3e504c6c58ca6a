//! Fixed option catalogs exposed to the form layer.
//!
//! # Responsibility
//! - Define the closed sets of skill and designation labels.
//! - Map labels to enum values and back without loss.
//!
//! # Invariants
//! - `label()` output is exactly the persisted string for each variant.
//! - `from_label(label())` returns the same variant.

use serde::{Deserialize, Serialize};

/// Employee role label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Designation {
    Developer,
    Manager,
    #[serde(rename = "System Admin")]
    SystemAdmin,
    #[serde(rename = "Team Lead")]
    TeamLead,
    #[serde(rename = "PM")]
    Pm,
}

impl Designation {
    /// All designations in display order.
    pub const ALL: [Designation; 5] = [
        Designation::Developer,
        Designation::Manager,
        Designation::SystemAdmin,
        Designation::TeamLead,
        Designation::Pm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Manager => "Manager",
            Self::SystemAdmin => "System Admin",
            Self::TeamLead => "Team Lead",
            Self::Pm => "PM",
        }
    }

    /// Resolves an exact label. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.label() == label)
    }
}

/// Skill catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillName {
    Java,
    Angular,
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "HTML")]
    Html,
    JavaScript,
    #[serde(rename = "UI")]
    Ui,
    #[serde(rename = "SQL")]
    Sql,
    React,
    #[serde(rename = "PHP")]
    Php,
    #[serde(rename = "GIT")]
    Git,
    #[serde(rename = "AWS")]
    Aws,
    Python,
    Django,
    C,
    #[serde(rename = "C++")]
    CPlusPlus,
    #[serde(rename = "C#")]
    CSharp,
    Unity,
    R,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "NLP")]
    Nlp,
    Photoshop,
    #[serde(rename = "Node.js")]
    NodeJs,
}

impl SkillName {
    /// All skills in display order.
    pub const ALL: [SkillName; 22] = [
        SkillName::Java,
        SkillName::Angular,
        SkillName::Css,
        SkillName::Html,
        SkillName::JavaScript,
        SkillName::Ui,
        SkillName::Sql,
        SkillName::React,
        SkillName::Php,
        SkillName::Git,
        SkillName::Aws,
        SkillName::Python,
        SkillName::Django,
        SkillName::C,
        SkillName::CPlusPlus,
        SkillName::CSharp,
        SkillName::Unity,
        SkillName::R,
        SkillName::Ai,
        SkillName::Nlp,
        SkillName::Photoshop,
        SkillName::NodeJs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Java => "Java",
            Self::Angular => "Angular",
            Self::Css => "CSS",
            Self::Html => "HTML",
            Self::JavaScript => "JavaScript",
            Self::Ui => "UI",
            Self::Sql => "SQL",
            Self::React => "React",
            Self::Php => "PHP",
            Self::Git => "GIT",
            Self::Aws => "AWS",
            Self::Python => "Python",
            Self::Django => "Django",
            Self::C => "C",
            Self::CPlusPlus => "C++",
            Self::CSharp => "C#",
            Self::Unity => "Unity",
            Self::R => "R",
            Self::Ai => "AI",
            Self::Nlp => "NLP",
            Self::Photoshop => "Photoshop",
            Self::NodeJs => "Node.js",
        }
    }

    /// Resolves an exact label. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.label() == label)
    }
}

/// Returns skill labels in display order.
pub fn skill_labels() -> Vec<&'static str> {
    SkillName::ALL.iter().map(|skill| skill.label()).collect()
}

/// Returns designation labels in display order.
pub fn designation_labels() -> Vec<&'static str> {
    Designation::ALL.iter().map(|value| value.label()).collect()
}
