//! Scalar-or-sequence attribute values and style naming.

use crate::error::{StyleError, StyleResult};

/// An attribute given once for all styles or once per style.
#[derive(Debug, Clone, PartialEq)]
pub enum Broadcast<T> {
    /// Applied identically to every generated style
    Scalar(T),
    /// Indexed by style number
    PerStyle(Vec<T>),
}

impl<T> Broadcast<T> {
    /// Number of styles this attribute asks for; scalars ask for none.
    pub fn len(&self) -> Option<usize> {
        match self {
            Broadcast::Scalar(_) => None,
            Broadcast::PerStyle(values) => Some(values.len()),
        }
    }

    /// Value for style `k`.
    ///
    /// A sequence holding a single value repeats it, as for a scalar.
    /// Callers validate with [`Broadcast::check`] before indexing.
    pub fn get(&self, k: usize) -> &T {
        match self {
            Broadcast::Scalar(value) => value,
            Broadcast::PerStyle(values) if values.len() == 1 => &values[0],
            Broadcast::PerStyle(values) => &values[k],
        }
    }

    /// Fail unless every one of `n` styles gets a value.
    ///
    /// With `repeat_single` a one-element sequence counts as a scalar.
    pub fn check(&self, attribute: &'static str, n: usize, repeat_single: bool) -> StyleResult<()> {
        match self {
            Broadcast::Scalar(_) => Ok(()),
            Broadcast::PerStyle(values) => {
                let found = values.len();
                if (found >= n && found > 0) || (repeat_single && found == 1) {
                    Ok(())
                } else {
                    Err(StyleError::LengthMismatch {
                        attribute,
                        expected: n,
                        found,
                    })
                }
            }
        }
    }
}

impl<T> From<Vec<T>> for Broadcast<T> {
    fn from(values: Vec<T>) -> Self {
        Broadcast::PerStyle(values)
    }
}

/// How the generated styles are named.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleNames {
    /// One literal name for every style
    Single(String),
    /// One name per style
    List(Vec<String>),
    /// A name containing `%d` or `%s`, replaced by the 1-based style number
    Template(String),
}

impl StyleNames {
    /// A literal name, or a template if it contains `%`.
    pub fn parse(name: &str) -> Self {
        if name.contains('%') {
            StyleNames::Template(name.to_string())
        } else {
            StyleNames::Single(name.to_string())
        }
    }

    /// Number of styles the names ask for; single names and templates ask for none.
    pub fn len(&self) -> Option<usize> {
        match self {
            StyleNames::List(names) => Some(names.len()),
            _ => None,
        }
    }

    pub(crate) fn check(&self, n: usize) -> StyleResult<()> {
        match self {
            StyleNames::Single(_) => Ok(()),
            StyleNames::List(names) if names.len() >= n && !names.is_empty() => Ok(()),
            StyleNames::List(names) => Err(StyleError::LengthMismatch {
                attribute: "names",
                expected: n,
                found: names.len(),
            }),
            StyleNames::Template(template) => expand_template(template, 1).map(|_| ()),
        }
    }

    /// Name of style `k` (0-based).
    pub fn name(&self, k: usize) -> StyleResult<String> {
        match self {
            StyleNames::Single(name) => Ok(name.clone()),
            StyleNames::List(names) => names.get(k).cloned().ok_or(StyleError::LengthMismatch {
                attribute: "names",
                expected: k + 1,
                found: names.len(),
            }),
            StyleNames::Template(template) => expand_template(template, k + 1),
        }
    }
}

impl From<&str> for StyleNames {
    fn from(name: &str) -> Self {
        StyleNames::parse(name)
    }
}

impl From<Vec<String>> for StyleNames {
    fn from(names: Vec<String>) -> Self {
        StyleNames::List(names)
    }
}

impl From<Vec<&str>> for StyleNames {
    fn from(names: Vec<&str>) -> Self {
        StyleNames::List(names.into_iter().map(String::from).collect())
    }
}

/// Widest field a template may ask for.
const MAX_TEMPLATE_WIDTH: usize = 32;

/// Replace `%d`, `%i`, `%u` or `%s` (optionally padded, e.g. `%02d`) by
/// `index`. `%%` yields a literal percent sign.
fn expand_template(template: &str, index: usize) -> StyleResult<String> {
    let invalid = || StyleError::InvalidTemplate(template.to_string());
    let mut out = String::with_capacity(template.len() + 2);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        let zero_pad = chars.peek() == Some(&'0');
        let mut width = 0usize;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            width = width
                .checked_mul(10)
                .and_then(|w| w.checked_add(d as usize))
                .filter(|w| *w <= MAX_TEMPLATE_WIDTH)
                .ok_or_else(invalid)?;
            chars.next();
        }
        match chars.next() {
            Some('d' | 'i' | 'u' | 's') if zero_pad => {
                out.push_str(&format!("{:0width$}", index))
            }
            Some('d' | 'i' | 'u' | 's') => out.push_str(&format!("{:width$}", index)),
            _ => return Err(invalid()),
        }
    }
    Ok(out)
}

/// Number of styles to generate: the longest sequence, at least one.
pub fn style_count(lengths: impl IntoIterator<Item = Option<usize>>) -> usize {
    lengths.into_iter().flatten().fold(1, usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_count() {
        assert_eq!(style_count([None, None]), 1);
        assert_eq!(style_count([None, Some(3), Some(2)]), 3);
        assert_eq!(style_count([Some(0)]), 1);
    }

    #[test]
    fn test_broadcast_get_and_check() {
        let scalar = Broadcast::Scalar(2.0);
        assert_eq!(*scalar.get(5), 2.0);
        assert!(scalar.check("lws", 5, false).is_ok());

        let seq: Broadcast<f64> = vec![1.0, 2.0].into();
        assert_eq!(*seq.get(1), 2.0);
        assert!(seq.check("lws", 2, false).is_ok());
        assert!(seq.check("lws", 3, false).is_err());

        let single: Broadcast<f64> = vec![7.0].into();
        assert!(single.check("markers", 4, true).is_ok());
        assert!(single.check("lws", 4, false).is_err());
        assert_eq!(*single.get(3), 7.0);

        let empty: Broadcast<f64> = Vec::new().into();
        assert!(empty.check("lws", 1, true).is_err());
    }

    #[test]
    fn test_template_names() {
        let names = StyleNames::from("Reds%d");
        assert_eq!(names.name(0).unwrap(), "Reds1");
        assert_eq!(names.name(2).unwrap(), "Reds3");

        let padded = StyleNames::from("S%02d");
        assert_eq!(padded.name(4).unwrap(), "S05");

        let percent = StyleNames::from("P%%%i");
        assert_eq!(percent.name(0).unwrap(), "P%1");

        let plain = StyleNames::from("Reds%s");
        assert_eq!(plain.name(0).unwrap(), "Reds1");
        assert_eq!(StyleNames::from("U%u").name(9).unwrap(), "U10");
    }

    #[test]
    fn test_invalid_template() {
        let names = StyleNames::from("Reds%x");
        assert!(matches!(names.check(1), Err(StyleError::InvalidTemplate(_))));
        assert!(StyleNames::from("trailing%").name(0).is_err());
    }

    #[test]
    fn test_template_width_is_bounded() {
        for template in ["X%99999999999999999999d", "%999999999999d", "%033d"] {
            assert!(matches!(
                StyleNames::from(template).name(0),
                Err(StyleError::InvalidTemplate(ref t)) if t == template
            ));
        }
        assert_eq!(StyleNames::from("%032d").name(0).unwrap().len(), 32);
    }

    #[test]
    fn test_name_list_too_short() {
        let names = StyleNames::from(vec!["A", "B"]);
        assert!(names.check(2).is_ok());
        assert!(names.check(3).is_err());
        assert_eq!(names.name(1).unwrap(), "B");
    }
}
