use crate::models::LanguageStats;

const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];
const NO_DATA: &str = "Нет данных";

/// Render one source's statistics as an ASCII table.
///
/// Rows keep the given order. Widths are measured in characters, the
/// headers are Cyrillic and byte lengths would misalign the columns.
pub fn render_table(title: &str, rows: &[(String, LanguageStats)]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|(language, stats)| {
            [
                language.clone(),
                stats.found_vacancies.to_string(),
                stats.processed_vacancies.to_string(),
                stats
                    .average_salary
                    .map_or_else(|| NO_DATA.to_string(), |avg| avg.to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = horizontal_border(&widths);
    let mut table = String::new();
    table.push_str(&titled_border(&border, title));
    table.push('\n');
    table.push_str(&format_row(&HEADERS.map(String::from), &widths));
    table.push('\n');
    table.push_str(&border);
    table.push('\n');
    for row in &cells {
        table.push_str(&format_row(row, &widths));
        table.push('\n');
    }
    table.push_str(&border);
    table
}

fn horizontal_border(widths: &[usize; 4]) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    format!("+{}+", segments.join("+"))
}

/// Splice the title into the top border, right after the corner
fn titled_border(border: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title_len + 2 > border.chars().count() {
        return border.to_string();
    }
    let tail: String = border.chars().skip(title_len + 1).collect();
    format!("+{title}{tail}")
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut row = String::new();
    for (cell, &width) in cells.iter().zip(widths) {
        row.push_str(&format!("| {cell:<width$} "));
    }
    row.push('|');
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(found: u64, processed: usize, average: Option<u64>) -> LanguageStats {
        LanguageStats {
            found_vacancies: found,
            processed_vacancies: processed,
            average_salary: average,
        }
    }

    #[test]
    fn renders_aligned_table_with_title() {
        let rows = vec![
            ("Python".to_string(), stats(10, 2, Some(100_000))),
            ("Go".to_string(), stats(0, 0, None)),
        ];

        let table = render_table("HeadHunter Moscow", &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("+HeadHunter Moscow-"));
        assert!(lines[0].ends_with('+'));

        // Every line spans the full table width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));

        assert!(lines[1].contains("Язык программирования"));
        assert!(lines[1].contains("Средняя зарплата"));
        assert!(lines[3].starts_with("| Python"));
        assert!(lines[3].contains("100000"));
        assert!(lines[4].contains("Нет данных"));
        assert_eq!(lines[2], lines[5]);
    }

    #[test]
    fn oversized_title_falls_back_to_plain_border() {
        let rows = vec![("Go".to_string(), stats(1, 1, Some(1)))];
        let title = "a".repeat(200);

        let table = render_table(&title, &rows);
        let top = table.lines().next().unwrap();

        assert!(top.starts_with("+-"));
        assert!(!top.contains('a'));
    }
}
