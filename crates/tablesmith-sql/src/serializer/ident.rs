use super::{Formatter, ToSql};

/// A bracket-quoted identifier
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();
        f.dst.push('[');
        for ch in name.chars() {
            if ch == ']' {
                f.dst.push(']');
            }
            f.dst.push(ch);
        }
        f.dst.push(']');
    }
}
