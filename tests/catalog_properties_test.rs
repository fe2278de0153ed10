use course_catalog::core::catalog_view::{
    filter_courses, next_page, paginate, previous_page, sort_courses, total_pages, view,
};
use course_catalog::{Course, EnrollmentStore, Query, SortDirection, SortKey};

/// A catalog with repeated names, trimesters and credits so sorts hit ties.
fn catalog() -> Vec<Course> {
    let names = ["Algebra", "biology", "Chemistry", "algebra", "Drawing", "Biology"];
    let trimesters = ["Fall", "Spring", "Summer"];
    let credits = ["3", "4", "n/a", "3", "1.5", "10", "", "4"];
    (0..23)
        .map(|i| {
            Course::new(
                format!("{}{:03}", if i % 2 == 0 { "CS" } else { "MA" }, 100 + i),
                names[i % names.len()],
                trimesters[i % trimesters.len()],
                credits[i % credits.len()],
                ((i * 7) % 11 * 15) as f64,
            )
        })
        .collect()
}

fn position(courses: &[Course], target: &Course) -> usize {
    courses
        .iter()
        .position(|c| c.course_number == target.course_number)
        .unwrap()
}

#[test]
fn test_filter_identity_for_blank_terms() {
    let courses = catalog();
    let all: Vec<&Course> = courses.iter().collect();
    assert_eq!(filter_courses(&courses, ""), all);
    assert_eq!(filter_courses(&courses, "   "), all);
    assert_eq!(filter_courses(&courses, "\t\n"), all);
}

#[test]
fn test_filter_substring_property() {
    let courses = catalog();
    for term in ["cs1", "BIO", " algebra ", "MA11", "zzz", "1"] {
        let needle = term.trim().to_lowercase();
        let kept = filter_courses(&courses, term);

        for course in &courses {
            let matches = course.name.to_lowercase().contains(&needle)
                || course.course_number.to_lowercase().contains(&needle);
            let was_kept = kept.iter().any(|k| k.course_number == course.course_number);
            assert_eq!(matches, was_kept, "term {:?} course {}", term, course.course_number);
        }
    }
}

#[test]
fn test_sort_stability_for_every_key() {
    let courses = catalog();
    for key in SortKey::ALL {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_courses(filter_courses(&courses, ""), key, direction);
            assert_eq!(sorted.len(), courses.len());

            for pair in sorted.windows(2) {
                let ordering = direction.apply(key.compare(pair[0], pair[1]));
                assert_ne!(ordering, std::cmp::Ordering::Greater, "{} not sorted", key);
                if ordering == std::cmp::Ordering::Equal {
                    assert!(
                        position(&courses, pair[0]) < position(&courses, pair[1]),
                        "{} {:?} broke input order for ties",
                        key,
                        direction
                    );
                }
            }
        }
    }
}

#[test]
fn test_descending_is_reverse_for_distinct_keys() {
    let courses = catalog();
    let asc = sort_courses(
        filter_courses(&courses, ""),
        SortKey::CourseNumber,
        SortDirection::Ascending,
    );
    let mut desc = sort_courses(
        filter_courses(&courses, ""),
        SortKey::CourseNumber,
        SortDirection::Descending,
    );
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_pagination_coverage() {
    let courses = catalog();
    for page_size in 1..=8 {
        let mut query = Query::new(page_size);
        query.search_term = "a".to_string();
        query.sort_key = SortKey::SemesterCredits;
        query.sort_direction = SortDirection::Descending;

        let expected = sort_courses(
            filter_courses(&courses, &query.search_term),
            query.sort_key,
            query.sort_direction,
        );
        let pages = total_pages(expected.len(), page_size);

        let mut joined = Vec::new();
        for page in 1..=pages {
            query.page = page;
            let result = view(&courses, &query);
            assert_eq!(result.pagination.total_pages, pages);
            assert!(result.courses.len() <= page_size);
            joined.extend(result.courses);
        }
        assert_eq!(joined, expected);

        query.page = pages + 1;
        assert!(view(&courses, &query).is_empty());
    }
}

#[test]
fn test_pagination_boundaries() {
    let courses = catalog();
    let mut query = Query::new(5);
    query.search_term = "no such course".to_string();
    let empty = view(&courses, &query);
    assert_eq!(empty.pagination.total_pages, 0);
    assert_eq!(next_page(1, 0), 1);
    assert_eq!(previous_page(1), 1);

    let pages = total_pages(courses.len(), 5);
    let mut page = 1;
    for _ in 0..10 {
        page = next_page(page, pages);
        assert!((1..=pages).contains(&page));
    }
    assert_eq!(page, pages);
    for _ in 0..10 {
        page = previous_page(page);
        assert!((1..=pages).contains(&page));
    }
    assert_eq!(page, 1);
}

#[test]
fn test_scenario_search_cs2() {
    let courses: Vec<Course> = serde_json::from_value(serde_json::json!([
        {"courseNumber": "CS101", "name": "Intro", "trimester": "Fall", "semesterCredits": "3", "clockHours": "45"},
        {"courseNumber": "CS201", "name": "Data Structures", "trimester": "Spring", "semesterCredits": "4", "clockHours": "60"}
    ]))
    .unwrap();

    let mut query = Query::default();
    query.search_term = "cs2".to_string();
    let result = view(&courses, &query);

    assert_eq!(result.courses.len(), 1);
    assert_eq!(result.courses[0].course_number, "CS201");
}

#[test]
fn test_scenario_twelve_courses() {
    let courses: Vec<Course> = catalog().into_iter().take(12).collect();
    let mut query = Query::new(5);
    query.page = 3;

    let result = view(&courses, &query);
    assert_eq!(result.pagination.total_pages, 3);
    assert_eq!(result.courses.len(), 2);
    assert_eq!(paginate(&courses, 3, 5).len(), 2);
    assert_eq!(next_page(3, result.pagination.total_pages), 3);
}

#[test]
fn test_scenario_enroll_and_drop() {
    let mut store = EnrollmentStore::new();
    store
        .enroll(Course::new("CS101", "Intro", "Fall", "3", "45"))
        .unwrap();
    store
        .enroll(Course::new("CS201", "Data Structures", "Spring", "4", "60"))
        .unwrap();
    store.drop_course("CS101").unwrap();

    assert_eq!(store.count(), 1);
    assert_eq!(store.courses()[0].course_number, "CS201");
}

#[test]
fn test_enrollment_round_trip_over_catalog() {
    let courses = catalog();
    let mut store = EnrollmentStore::new();
    for course in courses.iter().take(4) {
        store.enroll(course.clone()).unwrap();
    }

    for course in courses.iter().skip(4).take(6) {
        let before = store.count();
        store.enroll(course.clone()).unwrap();
        assert!(store.is_enrolled(&course.course_number));
        assert_eq!(store.drop_course(&course.course_number).unwrap(), 1);
        assert_eq!(store.count(), before);
    }
}
