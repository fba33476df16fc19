//! Renderer: pure single-pass depth-first walk from a finalized [`Value`]
//! tree to block-structured text.
//!
//! Layout rules: scalars continue the current line after one space (none at
//! the very start of output); array elements and object entries each open a
//! line at their depth's indentation; a composite array element continues
//! its dash line for the first token and wraps the rest at depth+1.

mod escape;

use crate::options::Options;
use crate::value::Value;

pub(crate) fn render(value: &Value, options: &Options) -> String {
    let mut renderer = Renderer {
        out: String::new(),
        options,
        continue_line: false,
    };
    renderer.value(value, 0);
    renderer.out
}

struct Renderer<'a> {
    out: String,
    options: &'a Options,
    /// Set after a dash marker: the next opened line continues in place.
    continue_line: bool,
}

impl Renderer<'_> {
    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.scalar("null"),
            Value::Bool(true) => self.scalar("true"),
            Value::Bool(false) => self.scalar("false"),
            Value::Number(literal) => self.scalar(literal),
            Value::String(s) => self.string_scalar(s),
            Value::Array(items) => {
                for item in items {
                    self.open_line(depth);
                    self.out.push('-');
                    self.continue_line = true;
                    self.value(item, depth + 1);
                }
            }
            Value::Object(entries) => {
                if self.options.sorted_keys {
                    let mut ordered: Vec<&(String, Value)> = entries.iter().collect();
                    ordered.sort_by(|a, b| a.0.cmp(&b.0));
                    for (key, value) in ordered {
                        self.entry(key, value, depth);
                    }
                } else {
                    for (key, value) in entries {
                        self.entry(key, value, depth);
                    }
                }
            }
        }
    }

    fn entry(&mut self, key: &str, value: &Value, depth: usize) {
        self.open_line(depth);
        self.out.push_str(key);
        self.out.push(':');
        self.value(value, depth + 1);
    }

    fn scalar(&mut self, text: &str) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.continue_line = false;
    }

    fn string_scalar(&mut self, s: &str) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        escape::escape_into(&mut self.out, s, self.options.escape_slashes);
        self.continue_line = false;
    }

    fn open_line(&mut self, depth: usize) {
        if self.continue_line {
            self.continue_line = false;
            self.out.push(' ');
            return;
        }
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..depth * self.options.indent {
            self.out.push(' ');
        }
    }
}
