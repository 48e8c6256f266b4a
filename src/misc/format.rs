use std::fmt::{Display, Write};

/// Replace positional placeholders (`{0}`, `{1}`, ...) in `template` with the
/// matching element of `args`.
pub fn positional(template: &str, args: &[&dyn Display]) -> String {
    let mut ret = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
        ret.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with("{{") {
            ret.push('{');
            rest = &rest[2..];
        } else if rest.starts_with("}}") {
            ret.push('}');
            rest = &rest[2..];
        } else if rest.starts_with('}') {
            ret.push('}');
            rest = &rest[1..];
        } else {
            match placeholder(rest, args) {
                Some((arg, len)) => {
                    let _ = write!(ret, "{}", arg);
                    rest = &rest[len..];
                }
                None => {
                    ret.push('{');
                    rest = &rest[1..];
                }
            }
        }
    }

    ret.push_str(rest);

    ret
}

/// Parse `{n}` at the start of `s`; returns the argument and the length of
/// the placeholder.
fn placeholder<'a>(s: &str, args: &[&'a dyn Display]) -> Option<(&'a dyn Display, usize)> {
    let end = s.find('}')?;
    let index = &s[1..end];

    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let arg = args.get(index.parse::<usize>().ok()?)?;

    Some((*arg, end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional() {
        assert_eq!("a 1 b", positional("a {0} b", &[&1]));
        assert_eq!("x-y-x", positional("{0}-{1}-{0}", &[&"x", &'y']));
        assert_eq!("no args", positional("no args", &[]));
    }

    #[test]
    fn test_escapes() {
        assert_eq!("{0} = 5", positional("{{0}} = {0}", &[&5]));
    }

    #[test]
    fn test_unresolved_kept() {
        assert_eq!("{1} {name} {", positional("{1} {name} {", &[&0]));
        assert_eq!("{} ok", positional("{} {0}", &[&"ok"]));
    }
}
