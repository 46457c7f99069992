use crate::course::CourseRecord;

/// Bubble sort by grade, highest first.
///
/// Adjacent records are swapped only when the left grade is strictly
/// lower, so records with equal grades keep their relative order.
pub fn sort_by_grade_desc(mut snapshot: Vec<CourseRecord>) -> Vec<CourseRecord> {
    let n = snapshot.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            if snapshot[j].grade < snapshot[j + 1].grade {
                snapshot.swap(j, j + 1);
            }
        }
    }
    snapshot
}
