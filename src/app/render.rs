use crate::core::catalog_view::CatalogPage;
use crate::core::Course;
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_CATALOG_MESSAGE: &str = "No courses found";

const CATALOG_HEADERS: [&str; 5] = [
    "Trimester",
    "Course Number",
    "Course Name",
    "Semester Credits",
    "Total Clock Hours",
];
const SCHEDULE_HEADERS: [&str; 2] = ["Course Number", "Course Name"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CatalogError::invalid_argument(
                "format",
                format!("unknown format '{}', expected table, csv or json", other),
            )),
        }
    }
}

pub fn load_error_message(message: &str) -> String {
    format!("Error loading courses: {}", message)
}

fn catalog_row(course: &Course) -> [String; 5] {
    [
        course.trimester.clone(),
        course.course_number.clone(),
        course.name.clone(),
        course.semester_credits.to_string(),
        course.clock_hours.to_string(),
    ]
}

fn schedule_row(course: &Course) -> [String; 2] {
    [course.course_number.clone(), course.name.clone()]
}

pub fn render_catalog(page: &CatalogPage<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<[String; 5]> = page.courses.iter().map(|c| catalog_row(c)).collect();
            let mut out = String::from("School Catalog\n");
            out.push_str(&table(&CATALOG_HEADERS, &rows));
            if rows.is_empty() {
                out.push_str(EMPTY_CATALOG_MESSAGE);
                out.push('\n');
            }
            let _ = write!(
                out,
                "Page {} of {} ({} matching)",
                page.pagination.current_page,
                page.pagination.total_pages,
                page.total_matches
            );
            if page.pagination.has_previous() {
                out.push_str(" | < prev");
            }
            if page.pagination.has_next() {
                out.push_str(" | next >");
            }
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Csv => {
            let rows: Vec<[String; 5]> = page.courses.iter().map(|c| catalog_row(c)).collect();
            csv_text(&CATALOG_HEADERS, &rows)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(page)?),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleView<'a> {
    enrolled_courses: &'a [Course],
    course_count: usize,
}

pub fn render_schedule(courses: &[Course], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<[String; 2]> = courses.iter().map(schedule_row).collect();
            let mut out = String::from("Class Schedule\n");
            out.push_str(&table(&SCHEDULE_HEADERS, &rows));
            let _ = writeln!(out, "Enrolled courses: {}", courses.len());
            Ok(out)
        }
        OutputFormat::Csv => {
            let rows: Vec<[String; 2]> = courses.iter().map(schedule_row).collect();
            csv_text(&SCHEDULE_HEADERS, &rows)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ScheduleView {
            enrolled_courses: courses,
            course_count: courses.len(),
        })?),
    }
}

fn table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths: [usize; N] = std::array::from_fn(|i| headers[i].chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("{}\n", padded.join(" | ").trim_end())
    };

    let mut out = line(headers.to_vec());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("{}\n", rule.join("-+-")));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

fn csv_text<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CatalogError::ConfigError {
        message: format!("CSV output was not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog_view::view;
    use crate::core::Query;

    fn sample() -> Vec<Course> {
        vec![
            Course::new("CS101", "Intro", "Fall", "3", "45"),
            Course::new("CS201", "Data Structures, Part 1", "Spring", 4.0, 60.0),
        ]
    }

    #[test]
    fn test_catalog_table_lists_rows_and_footer() {
        let courses = sample();
        let page = view(&courses, &Query::default());
        let text = render_catalog(&page, OutputFormat::Table).unwrap();

        assert!(text.starts_with("School Catalog\n"));
        assert!(text.contains("Total Clock Hours"));
        assert!(text.contains("CS201"));
        assert!(text.contains("Page 1 of 1 (2 matching)"));
        assert!(!text.contains(EMPTY_CATALOG_MESSAGE));
    }

    #[test]
    fn test_empty_catalog_shows_placeholder() {
        let courses = sample();
        let mut query = Query::default();
        query.search_term = "zzz".to_string();
        let page = view(&courses, &query);
        let text = render_catalog(&page, OutputFormat::Table).unwrap();
        assert!(text.contains(EMPTY_CATALOG_MESSAGE));
        assert!(text.contains("Page 1 of 0 (0 matching)"));

        let json = render_catalog(&page, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pagination"]["totalPages"], 0);
    }

    #[test]
    fn test_catalog_csv_quotes_commas() {
        let courses = sample();
        let page = view(&courses, &Query::default());
        let text = render_catalog(&page, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Trimester,Course Number,Course Name,Semester Credits,Total Clock Hours"
        );
        assert_eq!(lines[1], "Fall,CS101,Intro,3,45");
        assert_eq!(lines[2], "Spring,CS201,\"Data Structures, Part 1\",4,60");
    }

    #[test]
    fn test_catalog_json_has_pagination() {
        let courses = sample();
        let page = view(&courses, &Query::default());
        let text = render_catalog(&page, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["pagination"]["currentPage"], 1);
        assert_eq!(value["pagination"]["totalPages"], 1);
        assert_eq!(value["courses"][0]["courseNumber"], "CS101");
    }

    #[test]
    fn test_schedule_outputs() {
        let courses = sample();
        let table = render_schedule(&courses[1..], OutputFormat::Table).unwrap();
        assert!(table.contains("Class Schedule"));
        assert!(table.contains("Enrolled courses: 1"));

        let json = render_schedule(&courses, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["courseCount"], 2);
    }

    #[test]
    fn test_format_parse_and_messages() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(
            load_error_message("HTTP error! status: 404"),
            "Error loading courses: HTTP error! status: 404"
        );
    }
}
