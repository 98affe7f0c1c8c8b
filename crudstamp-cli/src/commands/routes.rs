use crudstamp::ROUTES;
use std::io::Write;

pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{:<8} {:<8} {}", "VERB", "PATH", "ACTION")?;
    for route in ROUTES.iter() {
        writeln!(out, "{:<8} {:<8} {}", route.method.as_str(), route.path, route.action)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_all_five_routes() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["GET", "/", "list"]);
        assert_eq!(
            lines[5].split_whitespace().collect::<Vec<_>>(),
            ["DELETE", "/{id}", "remove"]
        );
    }
}
