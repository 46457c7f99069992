use crate::course::CourseRecord;

/// Insertion sort by name, ignoring case.
///
/// Each key shifts left only past strictly greater names, which keeps the
/// sort stable and linear on already-ordered input.
pub fn sort_by_name_asc(mut snapshot: Vec<CourseRecord>) -> Vec<CourseRecord> {
    for i in 1..snapshot.len() {
        let key = snapshot[i].key();
        let mut j = i;
        while j > 0 && snapshot[j - 1].key() > key {
            snapshot.swap(j - 1, j);
            j -= 1;
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[CourseRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_sorts_ignoring_case() {
        let sorted = sort_by_name_asc(vec![
            CourseRecord::new("physics", 50.0),
            CourseRecord::new("Biology", 70.0),
            CourseRecord::new("art", 90.0),
            CourseRecord::new("Chemistry", 30.0),
        ]);
        assert_eq!(names(&sorted), ["art", "Biology", "Chemistry", "physics"]);
    }

    #[test]
    fn test_already_sorted_input_unchanged() {
        let input = vec![
            CourseRecord::new("Algebra", 1.0),
            CourseRecord::new("Botany", 2.0),
            CourseRecord::new("Calculus", 3.0),
        ];
        assert_eq!(sort_by_name_asc(input.clone()), input);
    }

    #[test]
    fn test_grades_travel_with_names() {
        let sorted = sort_by_name_asc(vec![
            CourseRecord::new("Zoology", 12.0),
            CourseRecord::new("Anatomy", 88.0),
        ]);
        assert_eq!(sorted[0], CourseRecord::new("Anatomy", 88.0));
        assert_eq!(sorted[1], CourseRecord::new("Zoology", 12.0));
    }
}
