// src/output/csv.rs

/// A cell is quoted only when it contains a comma or a double quote.
fn needs_quotes(cell: &str) -> bool {
    cell.contains(',') || cell.contains('"')
}

pub fn escape_cell(cell: &str) -> String {
    if needs_quotes(cell) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Comma-joined cells, newline-joined rows, no trailing newline.
pub fn to_text(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.iter().map(|cell| escape_cell(cell)).collect::<Vec<_>>().join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader for RFC 4180 style text, used to check the writer.
    fn parse_rows(text: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '"' if in_quotes => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '"' if field.is_empty() => in_quotes = true,
                ',' if !in_quotes => row.push(std::mem::take(&mut field)),
                '\n' if !in_quotes => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(ch),
            }
        }
        row.push(field);
        rows.push(row);
        rows
    }

    #[test]
    fn test_plain_cell_is_verbatim() {
        assert_eq!(escape_cell("Toyota Corolla"), "Toyota Corolla");
        assert_eq!(escape_cell("N/A"), "N/A");
        assert_eq!(escape_cell(""), "");
    }

    #[test]
    fn test_comma_and_quote_cells_are_quoted() {
        assert_eq!(escape_cell("€15,000"), "\"€15,000\"");
        assert_eq!(escape_cell(r#"The "Blue" one"#), r#""The ""Blue"" one""#);
    }

    #[test]
    fn test_escaped_cells_read_back() {
        let cells = vec![
            "€15,000".to_string(),
            r#"12" alloys"#.to_string(),
            r#"a,"b",c"#.to_string(),
            "plain".to_string(),
        ];
        let text = to_text(&[cells.clone()]);
        assert_eq!(parse_rows(&text), vec![cells]);
    }

    #[test]
    fn test_rows_joined_without_trailing_newline() {
        let rows = vec![
            vec!["Car Name".to_string(), "Price".to_string()],
            vec!["Toyota Corolla".to_string(), "€15,000".to_string()],
        ];
        assert_eq!(to_text(&rows), "Car Name,Price\nToyota Corolla,\"€15,000\"");
    }
}
