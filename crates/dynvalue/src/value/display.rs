//! Display text and Debug implementations for Value

use std::fmt;

use super::*;

/// Render a float as its shortest round-trip decimal text.
///
/// Integral values print without a fractional part (`3`), scientific
/// notation is used below `1e-4` and from `1e16` up (`1e+20`, `1.5e-07`),
/// and non-finite values print as `nan`, `inf`, `-inf`.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.5e-7"
    let sci = format!("{:e}", f);
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        format!("{}", f)
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

fn write_seq<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
    debug: bool,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        if debug {
            write!(f, "{:?}", item)?;
        } else {
            write!(f, "{}", item)?;
        }
    }
    Ok(())
}

impl Value {
    /// Canonical text for any value.
    ///
    /// Containers render their elements with this same function, so
    /// objects nested in containers always show the generic placeholder.
    /// Use [`Value::stringify`] for registry-aware conversion.
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "None"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", format_float(*n)),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Text(s) => write!(f, "{}", s),

            Value::List(list) => {
                write!(f, "[")?;
                write_seq(f, list.read().iter(), false)?;
                write!(f, "]")
            }

            Value::Tuple(tuple) => {
                write!(f, "(")?;
                write_seq(f, tuple.iter(), false)?;
                if tuple.len() == 1 {
                    write!(f, ",")?; // Single-element tuple needs trailing comma
                }
                write!(f, ")")
            }

            Value::Mapping(mapping) => {
                write!(f, "{{")?;
                for (i, (k, v)) in mapping.read().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }

            Value::Object(_) => write!(f, "<object>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{:?}", s.as_ref()),
            Value::Float(n) => write!(f, "{:?}", n),

            Value::List(list) => {
                write!(f, "[")?;
                write_seq(f, list.read().iter(), true)?;
                write!(f, "]")
            }

            Value::Tuple(tuple) => {
                write!(f, "(")?;
                write_seq(f, tuple.iter(), true)?;
                if tuple.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }

            Value::Mapping(mapping) => {
                write!(f, "{{")?;
                for (i, (k, v)) in mapping.read().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {:?}", k, v)?;
                }
                write!(f, "}}")
            }

            Value::Object(obj) => {
                let obj = obj.read();
                write!(f, "{} {{ ", obj.type_tag)?;
                for (i, (k, v)) in obj.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {:?}", k, v)?;
                }
                write!(f, " }}")
            }

            _ => fmt::Display::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(3.0), "3");
        assert_eq!(format_float(3.14), "3.14");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e15), "1000000000000000");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.25e20), "1.25e+20");
        assert_eq!(format_float(1e100), "1e+100");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(Value::Absent.display_text(), "None");
        assert_eq!(Value::Bool(true).display_text(), "True");
        assert_eq!(Value::Bool(false).display_text(), "False");
        assert_eq!(Value::Int(-7).display_text(), "-7");
        assert_eq!(Value::text("hi").display_text(), "hi");
    }

    #[test]
    fn test_container_text() {
        let list = Value::list(vec![Value::Int(1), Value::text("a"), Value::Absent]);
        assert_eq!(list.display_text(), "[1, a, None]");

        assert_eq!(Value::tuple(vec![Value::Int(1)]).display_text(), "(1,)");
        assert_eq!(Value::tuple(vec![]).display_text(), "()");
        assert_eq!(
            Value::tuple(vec![Value::Int(1), Value::Float(2.5)]).display_text(),
            "(1, 2.5)"
        );

        let mapping = Value::mapping(vec![
            (Value::text("a"), Value::Int(1)),
            (Value::Bool(true), list.clone()),
        ]);
        assert_eq!(mapping.display_text(), "{a: 1, True: [1, a, None]}");
        assert_eq!(Value::mapping(vec![]).display_text(), "{}");
    }

    #[test]
    fn test_object_text_is_placeholder() {
        let obj = Value::object("Point");
        assert_eq!(obj.display_text(), "<object>");
        assert_eq!(Value::list(vec![obj]).display_text(), "[<object>]");
    }

    #[test]
    fn test_debug_quotes_text() {
        let list = Value::list(vec![Value::text("a"), Value::Int(1)]);
        assert_eq!(format!("{:?}", list), "[\"a\", 1]");
    }
}
