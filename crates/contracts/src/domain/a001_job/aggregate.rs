use crate::domain::common::{slug_id, CategoryField, Record};
use crate::shared::detail::{DetailField, DetailView};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

slug_id! {
    /// Уникальный идентификатор вакансии
    pub struct JobId;
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Вакансия на странице Careers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(default)]
    pub employment_type: EmploymentType,
    pub summary: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub posted_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobField {
    Department,
    Location,
    EmploymentType,
}

impl CategoryField for JobField {
    const ALL: &'static [Self] = &[
        JobField::Department,
        JobField::Location,
        JobField::EmploymentType,
    ];

    fn key(&self) -> &'static str {
        match self {
            JobField::Department => "department",
            JobField::Location => "location",
            JobField::EmploymentType => "employment_type",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            JobField::Department => "Department",
            JobField::Location => "Location",
            JobField::EmploymentType => "Employment type",
        }
    }
}

impl Record for Job {
    type Id = JobId;
    type Field = JobField;

    const COLLECTION: &'static str = "jobs";

    fn id(&self) -> &JobId {
        &self.id
    }

    /// Only the title is searched; department has its own select
    fn searchable_text(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn category_value(&self, field: JobField) -> &str {
        match field {
            JobField::Department => self.department.as_str(),
            JobField::Location => self.location.as_str(),
            JobField::EmploymentType => self.employment_type.label(),
        }
    }
}

impl DetailView for Job {
    fn detail_title(&self) -> String {
        self.title.clone()
    }

    fn detail_subtitle(&self) -> Option<String> {
        Some(format!("{} · {}", self.department, self.location))
    }

    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![
            DetailField::text("Employment type", self.employment_type.label()),
            DetailField::text("Posted", self.posted_at.format("%d %b %Y").to_string()),
            DetailField::text("About the role", self.summary.clone()),
        ];
        if !self.responsibilities.is_empty() {
            fields.push(DetailField::list("Responsibilities", self.responsibilities.clone()));
        }
        if !self.requirements.is_empty() {
            fields.push(DetailField::list("Requirements", self.requirements.clone()));
        }
        fields
    }
}

#[cfg(test)]
impl Job {
    pub(crate) fn sample(id: &str, title: &str, department: &str, location: &str) -> Self {
        Job {
            id: JobId::new(id),
            title: title.to_string(),
            department: department.to_string(),
            location: location.to_string(),
            employment_type: EmploymentType::FullTime,
            summary: String::new(),
            responsibilities: Vec::new(),
            requirements: Vec::new(),
            posted_at: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;
    use crate::shared::detail::DetailValue;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "job-001",
            "title": "Store Manager",
            "department": "Retail",
            "location": "Riyadh",
            "employmentType": "part_time",
            "summary": "Lead the flagship store.",
            "postedAt": "2025-02-01"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, JobId::new("job-001"));
        assert_eq!(job.employment_type, EmploymentType::PartTime);
        assert!(job.requirements.is_empty());
        assert_eq!(job.category_value(JobField::EmploymentType), "Part-time");
    }

    #[test]
    fn test_job_id_from_string() {
        assert!(JobId::from_string("job-001").is_ok());
        assert!(JobId::from_string("JOB 1").is_err());
    }

    #[test]
    fn test_detail_fields_skip_empty_lists() {
        let mut job = Job::sample("job-1", "Chef", "Catering", "Jeddah");
        assert_eq!(job.detail_fields().len(), 3);
        job.requirements = vec!["HACCP certificate".to_string()];
        let fields = job.detail_fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(
            fields[3].value,
            DetailValue::List {
                items: vec!["HACCP certificate".to_string()]
            }
        );
        assert_eq!(job.detail_subtitle().as_deref(), Some("Catering · Jeddah"));
    }
}
