//! Program templates whose compile time is measured.
//!
//! A template is Rust source with placeholders that are filled in for every
//! measured size `n`:
//!
//! | placeholder   | replaced with                                          |
//! |---------------|--------------------------------------------------------|
//! | `{{ setup }}` | imports and the element type `X<const N: usize>`       |
//! | `{{ list }}`  | `X::<0>, X::<1>, ..., X::<n-1>` as expressions          |
//! | `{{ types }}` | `X<0>, X<1>, ..., X<n-1>` as types                      |
//! | `{{ size }}`  | `n`                                                    |
//!
//! Every element of the generated list has a distinct type, so the compiler
//! sees an `n`-element heterogeneous tuple.

use std::fs;
use std::path::Path;

use hetero_config::TemplateSpec;

use crate::error::{BenchmarkError, Result};

/// Names of the built-in templates, in report order.
pub const BUILTIN_NAMES: [&str; 4] = ["take_while", "make_tuple", "tuple_t", "set_make"];

const SETUP: &str = "\
#![allow(dead_code)]
use hetero::prelude::*;

#[derive(Debug, Clone, Copy)]
struct X<const N: usize>;";

const TAKE_WHILE: &str = "\
{{ setup }}

fn main() {
    let list = tuple![{{ list }}];
    let pred = hetero::always(TRUE);
    std::hint::black_box(hetero::take_while(list, pred));
}
";

const MAKE_TUPLE: &str = "\
{{ setup }}

fn main() {
    let list = make_tuple!({{ list }});
    assert_eq!(list.len(), {{ size }});
    std::hint::black_box(list);
}
";

const TUPLE_T: &str = "\
{{ setup }}

fn main() {
    let types = tuple_t![{{ types }}];
    assert_eq!(types.len(), {{ size }});
    std::hint::black_box(types);
}
";

const SET_MAKE: &str = "\
{{ setup }}

fn main() {
    let set = make::<hetero::SetTag, _>(tuple![{{ list }}]);
    std::hint::black_box(set);
}
";

/// A named template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    /// Creates a template from source text.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Returns the built-in template called `name`.
    ///
    /// # Example
    ///
    /// ```
    /// use hetero_benchmark::Template;
    ///
    /// assert!(Template::builtin("take_while").is_ok());
    /// assert!(Template::builtin("sort").is_err());
    /// ```
    pub fn builtin(name: &str) -> Result<Self> {
        let source = match name {
            "take_while" => TAKE_WHILE,
            "make_tuple" => MAKE_TUPLE,
            "tuple_t" => TUPLE_T,
            "set_make" => SET_MAKE,
            other => return Err(BenchmarkError::UnknownTemplate(other.to_string())),
        };
        Ok(Self::new(name, source))
    }

    /// Every built-in template.
    pub fn builtins() -> Vec<Self> {
        BUILTIN_NAMES
            .iter()
            .filter_map(|name| Self::builtin(name).ok())
            .collect()
    }

    /// Reads a template from a file.
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self::new(name, source))
    }

    /// Resolves a configured template.
    pub fn from_spec(spec: &TemplateSpec) -> Result<Self> {
        match spec {
            TemplateSpec::Builtin(name) => Self::builtin(name),
            TemplateSpec::File { name, path } => Self::from_file(name.clone(), path),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the program for a list of `size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::UnresolvedPlaceholder`] if the rendered
    /// text still contains a `{{ ... }}` placeholder.
    ///
    /// # Example
    ///
    /// ```
    /// use hetero_benchmark::Template;
    ///
    /// let template = Template::new("len", "const N: usize = {{ size }}; // {{ list }}");
    /// assert_eq!(
    ///     template.render(2).unwrap(),
    ///     "const N: usize = 2; // X::<0>, X::<1>"
    /// );
    /// ```
    pub fn render(&self, size: usize) -> Result<String> {
        let rendered = self
            .source
            .replace("{{ setup }}", SETUP)
            .replace("{{ list }}", &element_list(size, |i| format!("X::<{i}>")))
            .replace("{{ types }}", &element_list(size, |i| format!("X<{i}>")))
            .replace("{{ size }}", &size.to_string());

        if let Some(start) = rendered.find("{{") {
            let end = rendered[start..]
                .find("}}")
                .map_or(rendered.len(), |offset| start + offset + 2);
            return Err(BenchmarkError::UnresolvedPlaceholder {
                template: self.name.clone(),
                placeholder: rendered[start..end].to_string(),
            });
        }
        Ok(rendered)
    }
}

fn element_list(size: usize, element: impl Fn(usize) -> String) -> String {
    let mut out = String::new();
    for i in 0..size {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&element(i));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_list_is_comma_separated() {
        assert_eq!(element_list(0, |i| i.to_string()), "");
        assert_eq!(element_list(1, |i| format!("X<{i}>")), "X<0>");
        assert_eq!(element_list(3, |i| i.to_string()), "0, 1, 2");
    }

    #[test]
    fn test_every_builtin_renders() {
        for template in Template::builtins() {
            let source = template.render(3).unwrap();
            assert!(source.contains("struct X<const N: usize>;"), "{}", template.name());
            assert!(!source.contains("{{"), "{}", template.name());
        }
        assert_eq!(Template::builtins().len(), BUILTIN_NAMES.len());
    }

    #[test]
    fn test_list_and_types_placeholders() {
        let take_while = Template::builtin("take_while").unwrap().render(2).unwrap();
        assert!(take_while.contains("tuple![X::<0>, X::<1>]"));

        let tuple_t = Template::builtin("tuple_t").unwrap().render(2).unwrap();
        assert!(tuple_t.contains("tuple_t![X<0>, X<1>]"));
        assert!(tuple_t.contains("assert_eq!(types.len(), 2);"));
    }

    #[test]
    fn test_size_zero_renders_empty_list() {
        let source = Template::builtin("set_make").unwrap().render(0).unwrap();
        assert!(source.contains("tuple![]"));
    }

    #[test]
    fn test_unknown_builtin_is_rejected() {
        assert!(matches!(
            Template::builtin("sort"),
            Err(BenchmarkError::UnknownTemplate(name)) if name == "sort"
        ));
    }

    #[test]
    fn test_unresolved_placeholder_is_reported() {
        let err = Template::new("bad", "{{ list }} {{ lsit }}").render(1).unwrap_err();
        match err {
            BenchmarkError::UnresolvedPlaceholder {
                template,
                placeholder,
            } => {
                assert_eq!(template, "bad");
                assert_eq!(placeholder, "{{ lsit }}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_file_and_spec() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.rs.tmpl");
        fs::write(&path, "// {{ size }}").unwrap();

        let spec = TemplateSpec::File {
            name: "custom".into(),
            path: path.clone(),
        };
        let template = Template::from_spec(&spec).unwrap();
        assert_eq!(template.name(), "custom");
        assert_eq!(template.render(5).unwrap(), "// 5");

        let builtin = Template::from_spec(&TemplateSpec::Builtin("tuple_t".into())).unwrap();
        assert_eq!(builtin.name(), "tuple_t");
    }
}
