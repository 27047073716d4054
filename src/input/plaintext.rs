use super::Record;

/// Parse plain text into one record per line
pub fn parse(content: &str, skip_blank_lines: bool) -> Vec<Record> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !(skip_blank_lines && line.trim().is_empty()))
        .map(|(line_num, line)| Record::text(line_num + 1, line))
        .collect()
}
