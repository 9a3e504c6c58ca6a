//! Text-valued working copy of a company record.
//!
//! # Responsibility
//! - Hold exactly what the user typed, so edits never fail on content.
//! - Convert losslessly from a stored `Company`.
//! - Convert into a typed `Company` by running every field validator.
//!
//! # Invariants
//! - Every entry at every nesting level carries its own `EntryKey`.
//! - Conversion to `Company` either succeeds completely or reports every
//!   failing field; it never returns a partially validated record.

use crate::model::catalog::{Designation, SkillName};
use crate::model::company::{Company, Education, Employee, Skill};
use crate::model::entry_list::{EntryKey, EntryList};
use crate::model::field_path::{
    CompanyField, EducationField, EmployeeField, FieldPath, SkillField,
};
use crate::validation::rules::{
    max_length, one_of, past_date, rating_in_range, required, COMPANY_NAME_MAX_CHARS, DATE_FORMAT,
};
use crate::validation::{FieldErrors, ValidationError};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanyDraft {
    pub company_name: String,
    pub address: String,
    pub email: String,
    pub phone_number: String,
    /// Carried through edits; `None` until the first successful save.
    pub created_at: Option<String>,
    pub employees: EntryList<EmployeeDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeDraft {
    pub key: EntryKey,
    pub name: String,
    /// Catalog label or empty.
    pub designation: String,
    /// `YYYY-MM-DD` or whatever was typed.
    pub join_date: String,
    pub email: String,
    pub phone_number: String,
    pub skills: EntryList<SkillDraft>,
    pub education: EntryList<EducationDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillDraft {
    pub key: EntryKey,
    pub skill_name: String,
    pub skill_rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EducationDraft {
    pub key: EntryKey,
    pub institute_name: String,
    pub course_name: String,
    pub completed_year: String,
}

impl CompanyDraft {
    /// Builds an empty working copy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-copies a stored record into text form with fresh entry keys.
    pub fn from_company(company: &Company) -> Self {
        Self {
            company_name: company.company_name.clone(),
            address: company.address.clone(),
            email: company.email.clone(),
            phone_number: company.phone_number.clone(),
            created_at: Some(company.created_at.clone()).filter(|value| !value.is_empty()),
            employees: company.employees.iter().map(EmployeeDraft::from_employee).collect(),
        }
    }

    /// Returns the text of one field, or `None` if an index is out of range.
    pub fn field(&self, path: FieldPath) -> Option<&str> {
        let value = match path {
            FieldPath::Company(field) => match field {
                CompanyField::CompanyName => &self.company_name,
                CompanyField::Address => &self.address,
                CompanyField::Email => &self.email,
                CompanyField::PhoneNumber => &self.phone_number,
            },
            FieldPath::Employee { employee, field } => {
                self.employees.get(employee)?.field(field)
            }
            FieldPath::Skill {
                employee,
                skill,
                field,
            } => self.employees.get(employee)?.skills.get(skill)?.field(field),
            FieldPath::Education {
                employee,
                education,
                field,
            } => self
                .employees
                .get(employee)?
                .education
                .get(education)?
                .field(field),
        };
        Some(value.as_str())
    }

    /// Mutable access to one field, or `None` if an index is out of range.
    pub fn field_mut(&mut self, path: FieldPath) -> Option<&mut String> {
        match path {
            FieldPath::Company(field) => Some(match field {
                CompanyField::CompanyName => &mut self.company_name,
                CompanyField::Address => &mut self.address,
                CompanyField::Email => &mut self.email,
                CompanyField::PhoneNumber => &mut self.phone_number,
            }),
            FieldPath::Employee { employee, field } => {
                Some(self.employees.get_mut(employee)?.field_mut(field))
            }
            FieldPath::Skill {
                employee,
                skill,
                field,
            } => Some(
                self.employees
                    .get_mut(employee)?
                    .skills
                    .get_mut(skill)?
                    .field_mut(field),
            ),
            FieldPath::Education {
                employee,
                education,
                field,
            } => Some(
                self.employees
                    .get_mut(employee)?
                    .education
                    .get_mut(education)?
                    .field_mut(field),
            ),
        }
    }

    /// Validates every field against `today` and builds the typed record.
    ///
    /// `created_at` is copied as-is (empty when never saved); stamping is the
    /// caller's decision.
    pub fn to_company(&self, today: NaiveDate) -> Result<Company, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(
            FieldPath::Company(CompanyField::CompanyName),
            required(&self.company_name)
                .and_then(|()| max_length(&self.company_name, COMPANY_NAME_MAX_CHARS)),
        );
        errors.check(FieldPath::Company(CompanyField::Email), required(&self.email));
        errors.check(
            FieldPath::Company(CompanyField::PhoneNumber),
            required(&self.phone_number),
        );

        let employees = self
            .employees
            .iter()
            .enumerate()
            .map(|(index, employee)| employee.to_employee(index, today, &mut errors))
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Company {
            company_name: self.company_name.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            created_at: self.created_at.clone().unwrap_or_default(),
            // Every employee converted when no error was recorded.
            employees: employees.into_iter().flatten().collect(),
        })
    }
}

impl EmployeeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_employee(employee: &Employee) -> Self {
        Self {
            key: EntryKey::new(),
            name: employee.name.clone(),
            designation: employee
                .designation
                .map(|value| value.label().to_string())
                .unwrap_or_default(),
            join_date: employee.join_date.format(DATE_FORMAT).to_string(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            skills: employee.skills.iter().map(SkillDraft::from_skill).collect(),
            education: employee
                .education
                .iter()
                .map(EducationDraft::from_education)
                .collect(),
        }
    }

    fn field(&self, field: EmployeeField) -> &String {
        match field {
            EmployeeField::Name => &self.name,
            EmployeeField::Designation => &self.designation,
            EmployeeField::JoinDate => &self.join_date,
            EmployeeField::Email => &self.email,
            EmployeeField::PhoneNumber => &self.phone_number,
        }
    }

    fn field_mut(&mut self, field: EmployeeField) -> &mut String {
        match field {
            EmployeeField::Name => &mut self.name,
            EmployeeField::Designation => &mut self.designation,
            EmployeeField::JoinDate => &mut self.join_date,
            EmployeeField::Email => &mut self.email,
            EmployeeField::PhoneNumber => &mut self.phone_number,
        }
    }

    fn to_employee(
        &self,
        employee: usize,
        today: NaiveDate,
        errors: &mut FieldErrors,
    ) -> Option<Employee> {
        let path = |field| FieldPath::Employee { employee, field };

        let name = errors.check(path(EmployeeField::Name), required(&self.name));
        let designation = errors.check(
            path(EmployeeField::Designation),
            one_of(&self.designation, Designation::from_label),
        );
        let join_date = errors.check(
            path(EmployeeField::JoinDate),
            past_date(&self.join_date, today),
        );
        let email = errors.check(path(EmployeeField::Email), required(&self.email));
        let phone = errors.check(
            path(EmployeeField::PhoneNumber),
            required(&self.phone_number),
        );

        let skills = self
            .skills
            .iter()
            .enumerate()
            .map(|(skill, entry)| entry.to_skill(employee, skill, errors))
            .collect::<Vec<_>>();
        let education = self
            .education
            .iter()
            .enumerate()
            .map(|(education, entry)| entry.to_education(employee, education, errors))
            .collect::<Vec<_>>();

        name?;
        email?;
        phone?;
        Some(Employee {
            name: self.name.clone(),
            designation: designation?,
            join_date: join_date?,
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            skills: skills.into_iter().collect::<Option<Vec<_>>>()?,
            education: education.into_iter().collect::<Option<Vec<_>>>()?,
        })
    }
}

impl SkillDraft {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_skill(skill: &Skill) -> Self {
        Self {
            key: EntryKey::new(),
            skill_name: skill.skill_name.label().to_string(),
            skill_rating: skill.skill_rating.to_string(),
        }
    }

    fn field(&self, field: SkillField) -> &String {
        match field {
            SkillField::SkillName => &self.skill_name,
            SkillField::SkillRating => &self.skill_rating,
        }
    }

    fn field_mut(&mut self, field: SkillField) -> &mut String {
        match field {
            SkillField::SkillName => &mut self.skill_name,
            SkillField::SkillRating => &mut self.skill_rating,
        }
    }

    fn to_skill(&self, employee: usize, skill: usize, errors: &mut FieldErrors) -> Option<Skill> {
        let path = |field| FieldPath::Skill {
            employee,
            skill,
            field,
        };

        let skill_name = errors.check(
            path(SkillField::SkillName),
            required(&self.skill_name).and_then(|()| {
                one_of(&self.skill_name, SkillName::from_label)?
                    .ok_or(ValidationError::MissingField)
            }),
        );
        let skill_rating = errors.check(
            path(SkillField::SkillRating),
            rating_in_range(&self.skill_rating),
        );

        Some(Skill {
            skill_name: skill_name?,
            skill_rating: skill_rating?,
        })
    }
}

impl EducationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_education(education: &Education) -> Self {
        Self {
            key: EntryKey::new(),
            institute_name: education.institute_name.clone(),
            course_name: education.course_name.clone(),
            completed_year: education.completed_year.clone(),
        }
    }

    fn field(&self, field: EducationField) -> &String {
        match field {
            EducationField::InstituteName => &self.institute_name,
            EducationField::CourseName => &self.course_name,
            EducationField::CompletedYear => &self.completed_year,
        }
    }

    fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::InstituteName => &mut self.institute_name,
            EducationField::CourseName => &mut self.course_name,
            EducationField::CompletedYear => &mut self.completed_year,
        }
    }

    fn to_education(
        &self,
        employee: usize,
        education: usize,
        errors: &mut FieldErrors,
    ) -> Option<Education> {
        let path = |field| FieldPath::Education {
            employee,
            education,
            field,
        };

        let institute = errors.check(
            path(EducationField::InstituteName),
            required(&self.institute_name),
        );
        let course = errors.check(path(EducationField::CourseName), required(&self.course_name));
        let year = errors.check(
            path(EducationField::CompletedYear),
            required(&self.completed_year),
        );

        institute?;
        course?;
        year?;
        Some(Education {
            institute_name: self.institute_name.clone(),
            course_name: self.course_name.clone(),
            completed_year: self.completed_year.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CompanyDraft, EducationDraft, EmployeeDraft, SkillDraft};
    use crate::model::field_path::{EmployeeField, FieldPath, SkillField};
    use crate::validation::ValidationError;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_draft() -> CompanyDraft {
        let mut draft = CompanyDraft::new();
        draft.company_name = "Acme".to_string();
        draft.email = "hq@acme.test".to_string();
        draft.phone_number = "555-0100".to_string();

        let mut employee = EmployeeDraft::new();
        employee.name = "Ada".to_string();
        employee.join_date = "2020-01-31".to_string();
        employee.email = "ada@acme.test".to_string();
        employee.phone_number = "555-0101".to_string();
        employee.skills.append(SkillDraft {
            skill_name: "Java".to_string(),
            skill_rating: "4".to_string(),
            ..SkillDraft::new()
        });
        employee.education.append(EducationDraft {
            institute_name: "MIT".to_string(),
            course_name: "CS".to_string(),
            completed_year: "2012".to_string(),
            ..EducationDraft::new()
        });
        draft.employees.append(employee);
        draft
    }

    #[test]
    fn to_company_collects_every_nested_failure() {
        let mut draft = valid_draft();
        let employee = draft.employees.get_mut(0).unwrap();
        employee.skills.get_mut(0).unwrap().skill_name = "Rust".to_string();
        employee.skills.append(SkillDraft::new());

        let errors = draft.to_company(today()).unwrap_err();
        let skill = |skill, field| FieldPath::Skill {
            employee: 0,
            skill,
            field,
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(&skill(0, SkillField::SkillName)),
            Some(&ValidationError::UnknownOption)
        );
        assert_eq!(
            errors.get(&skill(1, SkillField::SkillName)),
            Some(&ValidationError::MissingField)
        );
        assert_eq!(
            errors.get(&skill(1, SkillField::SkillRating)),
            Some(&ValidationError::MissingField)
        );
    }

    #[test]
    fn valid_draft_converts_to_typed_record() {
        let company = valid_draft().to_company(today()).unwrap();
        assert_eq!(company.created_at, "");
        assert_eq!(company.employees.len(), 1);
        assert_eq!(company.employees[0].skills[0].skill_rating, 4);
        assert_eq!(
            company.employees[0].join_date,
            NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()
        );
    }

    #[test]
    fn to_company_reports_missing_fields_on_blank_entries() {
        let mut draft = valid_draft();
        draft.employees.append(EmployeeDraft::new());

        let errors = draft.to_company(today()).unwrap_err();
        let blank = |field| FieldPath::Employee { employee: 1, field };
        assert_eq!(
            errors.get(&blank(EmployeeField::Name)),
            Some(&ValidationError::MissingField)
        );
        assert_eq!(
            errors.get(&blank(EmployeeField::JoinDate)),
            Some(&ValidationError::MissingField)
        );
        assert_eq!(errors.get(&blank(EmployeeField::Designation)), None);
    }

    #[test]
    fn typed_roundtrip_through_draft_is_lossless() {
        let mut draft = valid_draft();
        draft.employees.get_mut(0).unwrap().skills.get_mut(0).unwrap().skill_name =
            "C#".to_string();
        draft.employees.get_mut(0).unwrap().designation = "System Admin".to_string();
        draft.created_at = Some("1/1/2024, 1:00:00 AM".to_string());

        let company = draft.to_company(today()).unwrap();
        let reloaded = CompanyDraft::from_company(&company);
        assert_eq!(reloaded.to_company(today()).unwrap(), company);
    }

    #[test]
    fn field_access_is_none_past_the_end() {
        let mut draft = valid_draft();
        let missing = FieldPath::Employee {
            employee: 3,
            field: EmployeeField::Name,
        };
        assert!(draft.field(missing).is_none());
        assert!(draft.field_mut(missing).is_none());
    }
}
