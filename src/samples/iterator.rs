//! Iterator sample: walk the sample organisation with a cursor.

use super::{sample_organisation, SampleError};
use std::io::Write;
use tracing::info;

pub fn run<W: Write>(out: &mut W) -> Result<usize, SampleError> {
    writeln!(out, "Behavioral - Iterator")?;

    let (tree, boss) = sample_organisation()?;
    let mut cursor = tree.iter(boss)?;
    let mut visited = 0;
    while cursor.advance() {
        writeln!(out, "employee {}", cursor.current_employee().name())?;
        visited += 1;
    }

    info!(visited, "iterator sample finished");
    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_every_employee_in_pre_order() {
        let mut out = Vec::new();
        let visited = run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(visited, 11);
        assert_eq!(lines[0], "Behavioral - Iterator");
        assert_eq!(lines[1], "employee Boss");
        assert_eq!(lines[5], "employee Emp 1.3");
        assert_eq!(lines[9], "employee Emp 1.4");
        assert_eq!(lines.last(), Some(&"employee Emp 2.1"));
    }
}
