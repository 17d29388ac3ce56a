//! Column alignment of struct bodies

/// Spaces between a cell and the next column
const CELL_PADDING: usize = 1;

/// Align every struct body in `source`.
///
/// Column widths follow tabwriter semantics: a column is sized over each run
/// of consecutive lines that have a cell after it, so a field without a type
/// (an embedded struct) still lines its tag up with the other types but does
/// not widen the type column of its neighbours.
pub fn align_source(source: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut body: Vec<&str> = Vec::new();
    let mut in_struct = false;

    for line in source.lines() {
        if in_struct {
            if line.trim_end() == "}" {
                out.extend(align_block(&body));
                body.clear();
                in_struct = false;
                out.push(line.trim_end().to_string());
            } else {
                body.push(line);
            }
            continue;
        }

        let line = line.trim_end();
        if line.starts_with("type ") && line.ends_with("struct {") {
            in_struct = true;
        }
        // collapse runs of blank lines
        if line.is_empty() && out.last().is_some_and(String::is_empty) {
            continue;
        }
        out.push(line.to_string());
    }
    // unterminated block: keep it, aligned
    out.extend(align_block(&body));

    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }
    let mut aligned = out.join("\n");
    aligned.push('\n');
    aligned
}

/// Split a struct field line into its cells.
///
/// The tag (everything from the first backtick) is always the last cell;
/// the name and type before it are whitespace separated.
pub fn split_cells(line: &str) -> Vec<&str> {
    let line = line.trim();
    let (head, tag) = match line.find('`') {
        Some(pos) => (&line[..pos], Some(&line[pos..])),
        None => (line, None),
    };
    let mut cells: Vec<&str> = head.split_whitespace().collect();
    cells.extend(tag);
    cells
}

fn align_block(lines: &[&str]) -> Vec<String> {
    let rows: Vec<Vec<&str>> = lines.iter().map(|line| split_cells(line)).collect();
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![vec![0usize; columns]; rows.len()];

    // the last cell of a row is never padded
    for col in 0..columns.saturating_sub(1) {
        let mut start = 0;
        while start < rows.len() {
            if rows[start].len() <= col + 1 {
                start += 1;
                continue;
            }
            let mut end = start;
            while end < rows.len() && rows[end].len() > col + 1 {
                end += 1;
            }
            let width = rows[start..end]
                .iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
                + CELL_PADDING;
            for row_widths in &mut widths[start..end] {
                row_widths[col] = width;
            }
            start = end;
        }
    }

    rows.iter()
        .zip(&widths)
        .map(|(cells, widths)| {
            if cells.is_empty() {
                return String::new();
            }
            let mut line = String::from("\t");
            let last = cells.len() - 1;
            for (i, cell) in cells.iter().enumerate() {
                line.push_str(cell);
                if i < last {
                    let pad = widths[i].saturating_sub(cell.chars().count());
                    line.push_str(&" ".repeat(pad));
                }
            }
            line
        })
        .collect()
}
