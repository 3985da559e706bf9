use std::collections::BTreeSet;

use crate::schema::StudentRecord;

/// Row selection by gender and age. An unset criterion admits every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub genders: Option<BTreeSet<String>>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
}

impl RecordFilter {
    pub fn with_genders<I, S>(mut self, genders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genders = Some(genders.into_iter().map(Into::into).collect());
        self
    }

    /// Inclusive on both ends.
    pub fn with_age_range(mut self, min_age: Option<i64>, max_age: Option<i64>) -> Self {
        self.min_age = min_age;
        self.max_age = max_age;
        self
    }

    pub fn matches(&self, record: &StudentRecord) -> bool {
        let gender_ok = self
            .genders
            .as_ref()
            .is_none_or(|set| set.contains(&record.gender));
        let min_ok = self.min_age.is_none_or(|min| record.age >= min);
        let max_ok = self.max_age.is_none_or(|max| record.age <= max);
        gender_ok && min_ok && max_ok
    }

    pub fn apply(&self, records: &[StudentRecord]) -> Vec<StudentRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(gender: &str, age: i64) -> StudentRecord {
        StudentRecord {
            gender: gender.to_string(),
            age,
            study_hours_per_day: 1.0,
            social_media_hours: 1.0,
            netflix_hours: 1.0,
            attendance_percentage: 90.0,
            exam_score: 70.0,
            screen_time: 2.0,
        }
    }

    #[test]
    fn test_default_admits_everything() {
        let records = vec![student("Female", 18), student("Other", 30)];
        assert_eq!(RecordFilter::default().apply(&records).len(), 2);
    }

    #[test]
    fn test_gender_and_inclusive_age_range() {
        let records = vec![
            student("Female", 18),
            student("Male", 20),
            student("Female", 22),
            student("Female", 25),
        ];
        let filter = RecordFilter::default()
            .with_genders(["Female"])
            .with_age_range(Some(18), Some(22));
        let kept = filter.apply(&records);

        assert_eq!(kept.iter().map(|r| r.age).collect::<Vec<_>>(), vec![18, 22]);
    }

    #[test]
    fn test_empty_gender_set_admits_nothing() {
        let records = vec![student("Female", 18)];
        let filter = RecordFilter::default().with_genders(Vec::<String>::new());
        assert!(filter.apply(&records).is_empty());
    }
}
