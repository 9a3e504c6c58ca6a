//! Addresses of editable fields inside a company working copy.
//!
//! Paths render as dotted names using persisted field names, e.g.
//! `companyName`, `empInfo.0.joinDate`, `empInfo.1.skillInfo.0.skillRating`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    CompanyName,
    Address,
    Email,
    PhoneNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Name,
    Designation,
    JoinDate,
    Email,
    PhoneNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillField {
    SkillName,
    SkillRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationField {
    InstituteName,
    CourseName,
    CompletedYear,
}

/// One scalar field at any nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Company(CompanyField),
    Employee {
        employee: usize,
        field: EmployeeField,
    },
    Skill {
        employee: usize,
        skill: usize,
        field: SkillField,
    },
    Education {
        employee: usize,
        education: usize,
        field: EducationField,
    },
}

impl CompanyField {
    pub fn name(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::Address => "address",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "companyName" => Some(Self::CompanyName),
            "address" => Some(Self::Address),
            "email" => Some(Self::Email),
            "phoneNumber" => Some(Self::PhoneNumber),
            _ => None,
        }
    }
}

impl EmployeeField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "empName",
            Self::Designation => "designation",
            Self::JoinDate => "joinDate",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "empName" => Some(Self::Name),
            "designation" => Some(Self::Designation),
            "joinDate" => Some(Self::JoinDate),
            "email" => Some(Self::Email),
            "phoneNumber" => Some(Self::PhoneNumber),
            _ => None,
        }
    }
}

impl SkillField {
    pub fn name(self) -> &'static str {
        match self {
            Self::SkillName => "skillName",
            Self::SkillRating => "skillRating",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "skillName" => Some(Self::SkillName),
            "skillRating" => Some(Self::SkillRating),
            _ => None,
        }
    }
}

impl EducationField {
    pub fn name(self) -> &'static str {
        match self {
            Self::InstituteName => "instituteName",
            Self::CourseName => "courseName",
            Self::CompletedYear => "completedYear",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "instituteName" => Some(Self::InstituteName),
            "courseName" => Some(Self::CourseName),
            "completedYear" => Some(Self::CompletedYear),
            _ => None,
        }
    }
}

impl FieldPath {
    /// Index of the employee this path points into, if any.
    pub fn employee_index(&self) -> Option<usize> {
        match self {
            Self::Company(_) => None,
            Self::Employee { employee, .. }
            | Self::Skill { employee, .. }
            | Self::Education { employee, .. } => Some(*employee),
        }
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Company(field) => write!(f, "{}", field.name()),
            Self::Employee { employee, field } => {
                write!(f, "empInfo.{employee}.{}", field.name())
            }
            Self::Skill {
                employee,
                skill,
                field,
            } => write!(f, "empInfo.{employee}.skillInfo.{skill}.{}", field.name()),
            Self::Education {
                employee,
                education,
                field,
            } => write!(
                f,
                "empInfo.{employee}.educationInfo.{education}.{}",
                field.name()
            ),
        }
    }
}

/// Rejected dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldPath(pub String);

impl Display for UnknownFieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown field path `{}`", self.0)
    }
}

impl Error for UnknownFieldPath {}

impl FromStr for FieldPath {
    type Err = UnknownFieldPath;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownFieldPath(value.to_string());
        let segments = value.trim().split('.').collect::<Vec<_>>();

        match segments.as_slice() {
            [field] => CompanyField::from_name(field)
                .map(Self::Company)
                .ok_or_else(unknown),
            ["empInfo", employee, field] => Ok(Self::Employee {
                employee: parse_index(employee).ok_or_else(unknown)?,
                field: EmployeeField::from_name(field).ok_or_else(unknown)?,
            }),
            ["empInfo", employee, "skillInfo", skill, field] => Ok(Self::Skill {
                employee: parse_index(employee).ok_or_else(unknown)?,
                skill: parse_index(skill).ok_or_else(unknown)?,
                field: SkillField::from_name(field).ok_or_else(unknown)?,
            }),
            ["empInfo", employee, "educationInfo", education, field] => Ok(Self::Education {
                employee: parse_index(employee).ok_or_else(unknown)?,
                education: parse_index(education).ok_or_else(unknown)?,
                field: EducationField::from_name(field).ok_or_else(unknown)?,
            }),
            _ => Err(unknown()),
        }
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
