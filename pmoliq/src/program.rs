//! The ordered program buffer
//!
//! One buffer per configuration write. Writers append their lines in
//! priority order and never touch each other's output; the header writer
//! additionally prepends the generated-file warning. Variable references
//! are only ever handed out by [`Program::assign`], so a reference always
//! points at a line emitted earlier in the buffer.

use crate::term::Term;

/// An in-progress liquidsoap program.
#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one raw line.
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append a `# ...` comment line.
    pub fn comment(&mut self, text: &str) {
        self.lines.push(format!("# {}", text));
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Append a section separator: an empty line followed by the section's
    /// naming comment.
    pub fn section(&mut self, title: &str) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.comment(title);
    }

    /// Append `name = value` and return a [`Term::Var`] referencing it.
    pub fn assign(&mut self, name: &str, value: &Term) -> Term {
        self.lines.push(format!("{} = {}", name, value));
        Term::var(name)
    }

    /// Append a rendered term as a statement of its own.
    pub fn statement(&mut self, value: &Term) {
        self.lines.push(value.to_string());
    }

    /// Insert lines at the very top of the buffer, before anything already
    /// written. Used by the header writer's warning banner.
    pub fn prepend(&mut self, lines: &[&str]) {
        let mut head: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        head.append(&mut self.lines);
        self.lines = head;
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the buffer into the final program text. The buffer stays
    /// usable, but callers treat the result as immutable output.
    pub fn serialize(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_returns_reference() {
        let mut program = Program::new();
        let radio = program.assign("radio", &Term::raw("blank()"));
        assert_eq!(radio.to_string(), "radio");
        assert_eq!(program.serialize(), "radio = blank()\n");
    }

    #[test]
    fn test_prepend_goes_first() {
        let mut program = Program::new();
        program.comment("Section");
        program.prepend(&["# WARNING", "# banner"]);
        assert_eq!(program.serialize(), "# WARNING\n# banner\n# Section\n");
    }

    #[test]
    fn test_section_separator() {
        let mut program = Program::new();
        program.section("First");
        program.section("Second");
        assert_eq!(program.serialize(), "# First\n\n# Second\n");
    }
}
