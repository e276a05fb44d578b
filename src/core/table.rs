/// 把列資料畫成有框線的 ASCII 表格
///
/// 第一列視為標題列，下方會多一條分隔線。欄寬以字元數計算，
/// 放得下時標題會蓋在上框線的開頭。
pub fn render_table(title: &str, rows: &[[String; 4]]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let widths = column_widths(rows);
    let border = horizontal_border(&widths);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(titled_border(&border, title));

    for (index, row) in rows.iter().enumerate() {
        lines.push(format_row(row, &widths));
        if index == 0 && rows.len() > 1 {
            lines.push(border.clone());
        }
    }

    lines.push(border);
    lines.join("\n")
}

fn column_widths(rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = [0usize; 4];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn horizontal_border(widths: &[usize; 4]) -> String {
    let mut border = String::from("+");
    for width in widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }
    border
}

fn titled_border(border: &str, title: &str) -> String {
    let padded = format!(" {} ", title);
    let title_len = padded.chars().count();
    let border_len = border.chars().count();

    if title.is_empty() || title_len > border_len.saturating_sub(2) {
        return border.to_string();
    }

    let rest: String = border.chars().skip(1 + title_len).collect();
    format!("+{}{}", padded, rest)
}

fn format_row(row: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in row.iter().zip(widths) {
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}
