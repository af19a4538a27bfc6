//! LaTeX table rendering.
//!
//! A table is built from three fragments: [`header`], [`body`] and
//! [`footer`]. Concatenated in that order they form a `table` environment
//! holding a booktabs `tabular`. Cell text is copied verbatim, nothing is
//! escaped.

use itertools::{Itertools, Position};

const PREAMBLE: &str = "\\begin{table}\n\
                        \t\\centering\n\
                        \t\\caption{\\label{My awesome label} My awesome caption}\n\
                        \t\\begin{tabular}{";
const COLUMN: char = 'l';
const SEPARATOR: &str = " & ";
const ROW_END: &str = " \\\\ \n";
const INDENT: &str = "\t\t";
const FOOTER: &str = "\\bottomrule \n\t\\end{tabular} \n\\end{table}";

/// Render the table opening, the column spec, and the header line between
/// the top and mid rules.
///
/// Every column is left aligned. An empty header gives an empty column spec
/// and an empty header line.
pub fn header<S: AsRef<str>>(header: &[S]) -> String {
    let mut head = String::from(PREAMBLE);
    head.extend(std::iter::repeat(COLUMN).take(header.len()));
    head.push_str("}\n");
    head.push_str(INDENT);
    head.push_str("\\toprule\n");
    head.push_str(INDENT);
    head.push_str(&line(header));
    head.push_str(INDENT);
    head.push_str("\\midrule\n");
    head
}

/// Render the data rows in the order given.
///
/// Rows are not checked against the header width, a ragged row is rendered
/// with as many cells as it has. Empty rows render nothing.
pub fn body<I, R, S>(rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.into_iter().fold(String::from(INDENT), |mut content, row| {
        let row = row.as_ref();
        if !row.is_empty() {
            content.push_str(&line(row));
            content.push(' ');
            content.push_str(INDENT);
        }
        content
    })
}

pub fn footer() -> &'static str {
    FOOTER
}

/// Join cells with the column separator and end the last one with the row
/// end token. No cells, no output.
fn line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .with_position()
        .fold(String::new(), |mut line, (position, cell)| {
            line.push_str(cell.as_ref());
            line.push_str(match position {
                Position::Last | Position::Only => ROW_END,
                Position::First | Position::Middle => SEPARATOR,
            });
            line
        })
}
