//! Equation panels displayed alongside each simulation

use std::fmt::Write;

/// Equation entry with label and formula
#[derive(Debug, Clone, Copy)]
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Render a titled equations panel with a variables legend as plain text
pub fn equations_panel(title: &str, equations: &[Equation], variables: &[(&str, &str)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Equations");

    for eq in equations {
        let _ = writeln!(out, "  {}", eq.name);
        for line in eq.formula.lines() {
            let _ = writeln!(out, "      {line}");
        }
        let _ = writeln!(out, "      ({})", eq.description);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Variables");

    let width = variables
        .iter()
        .map(|(symbol, _)| symbol.chars().count())
        .max()
        .unwrap_or(0);
    for (symbol, meaning) in variables {
        let pad = width - symbol.chars().count();
        let _ = writeln!(out, "  {symbol}{} = {meaning}", " ".repeat(pad));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EQS: &[Equation] = &[Equation {
        name: "Photon Energy",
        formula: "E = hf",
        description: "Energy carried by one photon",
    }];

    #[test]
    fn test_panel_contains_everything() {
        let panel = equations_panel("Test", EQS, &[("h", "Planck constant"), ("f", "Frequency")]);
        assert!(panel.starts_with("Test\n====\n"));
        assert!(panel.contains("Photon Energy"));
        assert!(panel.contains("E = hf"));
        assert!(panel.contains("(Energy carried by one photon)"));
        assert!(panel.contains("  h = Planck constant"));
    }

    #[test]
    fn test_multiline_formula_is_indented() {
        let eqs = [Equation {
            name: "Pair",
            formula: "a = 1\nb = 2",
            description: "two lines",
        }];
        let panel = equations_panel("P", &eqs, &[]);
        assert!(panel.contains("      a = 1\n      b = 2\n"));
    }
}
